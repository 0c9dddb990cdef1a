//! The resolved build configuration handed to the build driver.

use crate::paths::{resolve_libs_root, resolve_sdk_install_path, sdk_base_dir};
use crate::toolchain::{
    ToolchainVersions, resolve_compiler_lib_version, resolve_sdk_version,
    resolve_toolchain_versions,
};
use crate::{ConfigError, ConfigResult, Platform};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Every configuration value for one build, resolved once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Platform the values were resolved for.
    pub platform: Platform,
    /// Visual Studio versions.
    pub toolchain: ToolchainVersions,
    /// Qt version.
    pub qt_version: String,
    /// LLVM version.
    pub llvm_version: String,
    /// Prebuilt libraries root (`GLARE_CORE_LIBS`).
    pub libs_root: String,
    /// `{libs_root}/Qt`
    pub qt_base_dir: String,
    /// Qt install directory.
    pub qt_dir: String,
}

/// A single value of a [`BuildConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ConfigKey {
    #[display("vs_version")]
    VsVersion,
    #[display("libs_vs_version")]
    LibsVsVersion,
    #[display("qt_version")]
    QtVersion,
    #[display("llvm_version")]
    LlvmVersion,
    #[display("libs_root")]
    LibsRoot,
    #[display("qt_base_dir")]
    QtBaseDir,
    #[display("qt_dir")]
    QtDir,
    #[display("platform")]
    Platform,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 8] = [
        ConfigKey::Platform,
        ConfigKey::VsVersion,
        ConfigKey::LibsVsVersion,
        ConfigKey::QtVersion,
        ConfigKey::LlvmVersion,
        ConfigKey::LibsRoot,
        ConfigKey::QtBaseDir,
        ConfigKey::QtDir,
    ];

    /// Whether the value depends on `GLARE_CORE_LIBS`.
    pub fn needs_libs_root(self) -> bool {
        matches!(
            self,
            ConfigKey::LibsRoot | ConfigKey::QtBaseDir | ConfigKey::QtDir
        )
    }

    /// Variable name used in env and CMake output.
    pub fn variable_name(self) -> String {
        format!("GLARE_{}", self.to_string().to_ascii_uppercase())
    }

    /// Value of this key that does not need the libraries root.
    ///
    /// Returns `None` for root-dependent keys.
    pub fn static_value(self, platform: Platform) -> Option<String> {
        let toolchain = resolve_toolchain_versions();
        match self {
            ConfigKey::Platform => Some(platform.to_string()),
            ConfigKey::VsVersion => Some(toolchain.toolchain.to_string()),
            ConfigKey::LibsVsVersion => Some(toolchain.library.to_string()),
            ConfigKey::QtVersion => Some(resolve_sdk_version(platform).to_string()),
            ConfigKey::LlvmVersion => Some(resolve_compiler_lib_version(platform).to_string()),
            ConfigKey::LibsRoot | ConfigKey::QtBaseDir | ConfigKey::QtDir => None,
        }
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.to_string() == normalized)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "key".to_string(),
                message: format!("unknown configuration key: {}", s),
            })
    }
}

/// How a [`BuildConfig`] is printed for the build driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `GLARE_QT_DIR=...` lines.
    #[default]
    Env,
    /// Pretty-printed JSON object.
    Json,
    /// `-DGLARE_QT_DIR=...` lines for a cmake command line.
    Cmake,
}

impl BuildConfig {
    /// Resolve the configuration, reading the libraries root from the environment.
    pub fn resolve(platform: Platform) -> ConfigResult<Self> {
        let root = resolve_libs_root()?;
        Ok(Self::resolve_with_root(platform, root))
    }

    /// Resolve the configuration for an explicit libraries root.
    pub fn resolve_with_root(platform: Platform, libs_root: impl Into<String>) -> Self {
        let toolchain = resolve_toolchain_versions();
        let qt_version = resolve_sdk_version(platform);
        let llvm_version = resolve_compiler_lib_version(platform);
        let libs_root = libs_root.into();
        let qt_dir =
            resolve_sdk_install_path(&libs_root, qt_version, toolchain.toolchain, platform);

        Self {
            platform,
            toolchain,
            qt_version: qt_version.to_string(),
            llvm_version: llvm_version.to_string(),
            qt_base_dir: sdk_base_dir(&libs_root),
            libs_root,
            qt_dir,
        }
    }

    /// A single value, formatted as a string.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::LibsRoot => self.libs_root.clone(),
            ConfigKey::QtBaseDir => self.qt_base_dir.clone(),
            ConfigKey::QtDir => self.qt_dir.clone(),
            ConfigKey::Platform => self.platform.to_string(),
            ConfigKey::VsVersion => self.toolchain.toolchain.to_string(),
            ConfigKey::LibsVsVersion => self.toolchain.library.to_string(),
            ConfigKey::QtVersion => self.qt_version.clone(),
            ConfigKey::LlvmVersion => self.llvm_version.clone(),
        }
    }

    /// Render every value in the given format.
    pub fn render(&self, format: OutputFormat) -> ConfigResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Env => Ok(self.render_lines("")),
            OutputFormat::Cmake => Ok(self.render_lines("-D")),
        }
    }

    fn render_lines(&self, prefix: &str) -> String {
        let mut out = String::new();
        for key in ConfigKey::ALL {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{}{}={}", prefix, key.variable_name(), self.get(key));
        }
        out
    }
}
