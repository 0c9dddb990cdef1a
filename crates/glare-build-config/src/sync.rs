//! Cross-check of the library toolchain version against `CMakeLists.txt`.
//!
//! CMake declares its own copy of the library Visual Studio version:
//!
//! ```text
//! set(CYBERSPACE_LIBS_VS_VER 2019)
//! ```
//!
//! Both copies must agree or libraries get picked up from the wrong directory.

use crate::{ConfigError, ConfigResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Default `CMakeLists.txt` location, relative to the working directory.
pub const DEFAULT_CMAKE_FILE: &str = "../CMakeLists.txt";

/// CMake variable holding the library toolchain version.
pub const CMAKE_LIBS_TOOLCHAIN_VAR: &str = "CYBERSPACE_LIBS_VS_VER";

static CMAKE_SET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i:set)\s*\(\s*CYBERSPACE_LIBS_VS_VER\s+"?([^"\s)]*)"?\s*\)"#).unwrap()
});

/// Read the library toolchain version out of CMake source text.
pub fn read_cmake_libs_toolchain(text: &str) -> ConfigResult<u32> {
    let raw = CMAKE_SET_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ConfigError::MissingField(CMAKE_LIBS_TOOLCHAIN_VAR.to_string()))?;

    raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
        field: CMAKE_LIBS_TOOLCHAIN_VAR.to_string(),
        message: format!("expected a Visual Studio version, got '{}'", raw),
    })
}

/// Check that the CMake file at `path` declares `expected`.
pub fn check_cmake_sync(path: impl AsRef<Path>, expected: u32) -> ConfigResult<()> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let found = read_cmake_libs_toolchain(&content)?;
    if found != expected {
        warn!(expected, found, "Library toolchain version out of sync");
        return Err(ConfigError::ToolchainMismatch { expected, found });
    }

    debug!(version = found, path = %path.display(), "CMake library toolchain in sync");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_plain_set() {
        let text = "project(cyberspace)\nset(CYBERSPACE_LIBS_VS_VER 2019)\n";
        assert_eq!(read_cmake_libs_toolchain(text).unwrap(), 2019);
    }

    #[test]
    fn test_read_quoted_uppercase_set() {
        let text = r#"SET( CYBERSPACE_LIBS_VS_VER "2022" )"#;
        assert_eq!(read_cmake_libs_toolchain(text).unwrap(), 2022);
    }

    #[test]
    fn test_missing_setting() {
        let err = read_cmake_libs_toolchain("set(OTHER_VAR 1)").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "CYBERSPACE_LIBS_VS_VER"));
    }

    #[test]
    fn test_non_numeric_setting() {
        let err = read_cmake_libs_toolchain("set(CYBERSPACE_LIBS_VS_VER latest)").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_check_in_sync() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");
        std::fs::write(&path, "set(CYBERSPACE_LIBS_VS_VER 2019)\n").unwrap();
        check_cmake_sync(&path, 2019).unwrap();
    }

    #[test]
    fn test_check_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");
        std::fs::write(&path, "set(CYBERSPACE_LIBS_VS_VER 2017)\n").unwrap();
        let err = check_cmake_sync(&path, 2019).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ToolchainMismatch {
                expected: 2019,
                found: 2017
            }
        ));
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_cmake_sync(dir.path().join("CMakeLists.txt"), 2019).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
