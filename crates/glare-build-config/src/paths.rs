//! Libraries root and Qt install path derivation.

use crate::{ConfigError, ConfigResult, Platform};
use std::env::VarError;
use tracing::{debug, warn};

/// Environment variable naming the prebuilt libraries root directory.
pub const LIBS_ROOT_ENV: &str = "GLARE_CORE_LIBS";

/// Read the libraries root from the process environment.
///
/// Fails with [`ConfigError::MissingEnvVar`] when `GLARE_CORE_LIBS` is unset
/// and [`ConfigError::InvalidValue`] when it is not valid Unicode. There is
/// no fallback path.
pub fn resolve_libs_root() -> ConfigResult<String> {
    resolve_libs_root_with(|name| std::env::var(name))
}

/// Like [`resolve_libs_root`], reading variables through `lookup`.
pub fn resolve_libs_root_with<F>(lookup: F) -> ConfigResult<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(LIBS_ROOT_ENV) {
        Ok(root) => {
            debug!(root = %root, "Resolved libs root");
            Ok(root)
        }
        Err(VarError::NotPresent) => {
            warn!("{} is not set", LIBS_ROOT_ENV);
            Err(ConfigError::MissingEnvVar(LIBS_ROOT_ENV.to_string()))
        }
        Err(VarError::NotUnicode(raw)) => {
            warn!(value = ?raw, "{} is not valid Unicode", LIBS_ROOT_ENV);
            Err(ConfigError::InvalidValue {
                field: LIBS_ROOT_ENV.to_string(),
                message: "not valid Unicode".to_string(),
            })
        }
    }
}

/// Directory holding every Qt build under the libraries root.
pub fn sdk_base_dir(root: &str) -> String {
    format!("{}/Qt", root)
}

/// Qt install directory for a platform.
///
/// Unix builds live at `{root}/Qt/{sdk_version}`, Windows builds carry the
/// Visual Studio version and architecture: `{root}/Qt/{sdk_version}-vs{toolchain}-64`.
pub fn resolve_sdk_install_path(
    root: &str,
    sdk_version: &str,
    toolchain_version: u32,
    platform: Platform,
) -> String {
    let base = sdk_base_dir(root);
    let path = if platform.is_unix() {
        format!("{}/{}", base, sdk_version)
    } else {
        format!("{}/{}-vs{}-64", base, sdk_version, toolchain_version)
    };
    debug!(%platform, path = %path, "Resolved Qt install path");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_libs_root_from_lookup() {
        let root = resolve_libs_root_with(|name| {
            (name == LIBS_ROOT_ENV)
                .then(|| "/opt/glare-libs".to_string())
                .ok_or(VarError::NotPresent)
        })
        .unwrap();
        assert_eq!(root, "/opt/glare-libs");
    }

    #[test]
    fn test_missing_libs_root_is_an_error() {
        let err = resolve_libs_root_with(|_| Err(VarError::NotPresent)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref name) if name == "GLARE_CORE_LIBS"));
        assert_eq!(err.to_string(), "GLARE_CORE_LIBS env var not defined.");
    }

    #[test]
    fn test_non_unicode_libs_root_is_not_reported_missing() {
        let err = resolve_libs_root_with(|_| {
            Err(VarError::NotUnicode(std::ffi::OsString::from("libs")))
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "GLARE_CORE_LIBS"));
        assert_eq!(
            err.to_string(),
            "invalid value for GLARE_CORE_LIBS: not valid Unicode"
        );
    }

    #[test]
    fn test_relative_root_is_kept_verbatim() {
        let root = resolve_libs_root_with(|_| Ok("../libs".to_string())).unwrap();
        assert_eq!(root, "../libs");
    }

    #[test]
    fn test_sdk_base_dir() {
        assert_eq!(sdk_base_dir("C:/programming"), "C:/programming/Qt");
    }

    #[test]
    fn test_unix_install_path_has_no_toolchain_suffix() {
        for platform in [Platform::MacOs, Platform::Linux] {
            assert_eq!(
                resolve_sdk_install_path("/home/build/libs", "5.15.4", 2022, platform),
                "/home/build/libs/Qt/5.15.4"
            );
        }
    }

    #[test]
    fn test_windows_install_path() {
        assert_eq!(
            resolve_sdk_install_path("C:/programming", "5.13.2", 2022, Platform::Windows),
            "C:/programming/Qt/5.13.2-vs2022-64"
        );
    }

    #[test]
    fn test_install_path_is_idempotent() {
        let first = resolve_sdk_install_path("libs", "6.2.2", 2019, Platform::Windows);
        let second = resolve_sdk_install_path("libs", "6.2.2", 2019, Platform::Windows);
        assert_eq!(first, second);
    }
}
