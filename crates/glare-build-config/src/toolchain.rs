//! Fixed toolchain, Qt and LLVM versions.

use crate::Platform;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visual Studio version used to build the distribution.
pub const TOOLCHAIN_VERSION: u32 = 2022;

/// Visual Studio version used to build third-party libraries (Qt etc).
/// Can be lower than [`TOOLCHAIN_VERSION`].
///
/// Must match `CYBERSPACE_LIBS_VS_VER` in `CMakeLists.txt`, see [`crate::sync`].
pub const LIBRARY_TOOLCHAIN_VERSION: u32 = 2019;

/// The pair of Visual Studio versions in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainVersions {
    /// Version used for the final distributable.
    pub toolchain: u32,
    /// Version used for prebuilt libraries.
    pub library: u32,
}

pub fn resolve_toolchain_versions() -> ToolchainVersions {
    let versions = ToolchainVersions {
        toolchain: TOOLCHAIN_VERSION,
        library: LIBRARY_TOOLCHAIN_VERSION,
    };
    debug!(
        toolchain = versions.toolchain,
        library = versions.library,
        "Resolved toolchain versions"
    );
    versions
}

/// Qt version for the given platform.
pub fn resolve_sdk_version(platform: Platform) -> &'static str {
    let version = match platform {
        Platform::Windows => "5.13.2",
        Platform::MacOs => "5.15.4",
        Platform::Linux => "5.13.2",
    };
    debug!(%platform, version, "Resolved Qt version");
    version
}

/// LLVM version for the given platform.
pub fn resolve_compiler_lib_version(platform: Platform) -> &'static str {
    let version = match platform {
        Platform::Windows => "6.0.0",
        Platform::MacOs | Platform::Linux => "6.0.0",
    };
    debug!(%platform, version, "Resolved LLVM version");
    version
}
