//! Glare build configuration CLI.

use clap::{Parser, Subcommand, ValueEnum};
use glare_build_config::{ConfigKey, DEFAULT_VERSION_FILE, OutputFormat, Platform};
use glare_build_config::sync::DEFAULT_CMAKE_FILE;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "glare-build-config")]
#[command(about = "Toolchain, Qt and version configuration for Glare builds", long_about = None)]
struct Cli {
    /// Target platform: windows, macos or linux (defaults to the host)
    #[arg(long, global = true)]
    platform: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole resolved configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "env")]
        format: Format,
        /// Libraries root, instead of GLARE_CORE_LIBS
        #[arg(long)]
        libs_root: Option<String>,
    },
    /// Print a single configuration value
    Get {
        /// Key to print (e.g. qt-dir, qt-version, vs-version)
        key: String,
        /// Libraries root, instead of GLARE_CORE_LIBS
        #[arg(long)]
        libs_root: Option<String>,
    },
    /// Print the product version from Version.h
    Version {
        /// Path to the version header
        #[arg(long, default_value = DEFAULT_VERSION_FILE)]
        file: String,
    },
    /// Check CMakeLists.txt declares the same library toolchain version
    CheckCmake {
        /// Path to CMakeLists.txt
        #[arg(long, default_value = DEFAULT_CMAKE_FILE)]
        file: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Env,
    Json,
    Cmake,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Env => OutputFormat::Env,
            Format::Json => OutputFormat::Json,
            Format::Cmake => OutputFormat::Cmake,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries only values
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One line, including the cause chain
            println!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Parsed here rather than by clap so bad values exit 1 like other config errors
    let platform = || match cli.platform.as_deref() {
        Some(platform) => platform.parse::<Platform>(),
        None => Platform::current(),
    };

    match cli.command {
        Commands::Show { format, libs_root } => {
            commands::show(platform()?, libs_root, format.into())?;
        }
        Commands::Get { key, libs_root } => {
            let key: ConfigKey = key.parse()?;
            commands::get(platform()?, key, libs_root)?;
        }
        Commands::Version { file } => {
            commands::version(&file)?;
        }
        Commands::CheckCmake { file } => {
            commands::check_cmake(&file)?;
        }
    }

    Ok(())
}
