//! Build configuration for Glare builds.
//!
//! This crate resolves:
//! - Visual Studio versions for distribution and library builds
//! - Qt and LLVM versions per platform
//! - The prebuilt libraries root (`GLARE_CORE_LIBS`) and the Qt install path
//! - The product version from `Version.h`

pub mod config;
pub mod error;
pub mod paths;
pub mod platform;
pub mod sync;
pub mod toolchain;
pub mod version;

pub use config::{BuildConfig, ConfigKey, OutputFormat};
pub use error::{ConfigError, ConfigResult};
pub use paths::{LIBS_ROOT_ENV, resolve_libs_root, resolve_sdk_install_path};
pub use platform::Platform;
pub use toolchain::{
    ToolchainVersions, resolve_compiler_lib_version, resolve_sdk_version,
    resolve_toolchain_versions,
};
pub use version::{DEFAULT_VERSION_FILE, extract_version};
