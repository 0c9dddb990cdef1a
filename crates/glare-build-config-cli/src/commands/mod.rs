//! CLI command implementations.

use anyhow::Result;
use glare_build_config::{
    BuildConfig, ConfigKey, OutputFormat, Platform, extract_version, resolve_toolchain_versions,
    sync::check_cmake_sync,
};
use tracing::info;

fn resolve(platform: Platform, libs_root: Option<String>) -> Result<BuildConfig> {
    let config = match libs_root {
        Some(root) => BuildConfig::resolve_with_root(platform, root),
        None => BuildConfig::resolve(platform)?,
    };
    info!(%platform, qt_dir = %config.qt_dir, "Resolved build configuration");
    Ok(config)
}

pub fn show(platform: Platform, libs_root: Option<String>, format: OutputFormat) -> Result<()> {
    let config = resolve(platform, libs_root)?;
    print!("{}", config.render(format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

pub fn get(platform: Platform, key: ConfigKey, libs_root: Option<String>) -> Result<()> {
    // Keys that don't need the libs root must work without GLARE_CORE_LIBS
    let value = match key.static_value(platform) {
        Some(value) => value,
        None => resolve(platform, libs_root)?.get(key),
    };
    println!("{}", value);
    Ok(())
}

pub fn version(path: &str) -> Result<()> {
    let version = extract_version(path)?;
    println!("{}", version);
    Ok(())
}

pub fn check_cmake(path: &str) -> Result<()> {
    check_cmake_sync(path, resolve_toolchain_versions().library)?;
    println!("CMakeLists.txt is in sync");
    Ok(())
}
