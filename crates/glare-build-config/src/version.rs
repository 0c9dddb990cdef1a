//! Product version extraction from `Version.h`.
//!
//! The header is the single source of truth for the version string. It holds
//! a line such as:
//!
//! ```text
//! const std::string cyberspace_version = "0.9.12";
//! ```

use crate::{ConfigError, ConfigResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Default header location, relative to the working directory.
pub const DEFAULT_VERSION_FILE: &str = "../shared/Version.h";

// Captures the raw text between the quotes; no escape processing
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"cyberspace_version[ \t]*=[ \t]*"([^"\n]*)""#).unwrap());

/// Read `path` and return the first `cyberspace_version` string in it.
pub fn extract_version(path: impl AsRef<Path>) -> ConfigResult<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    extract_version_from_str(&content, &source_name)
}

/// Find the first `cyberspace_version` string in `text`.
///
/// `source_name` only appears in the error message.
pub fn extract_version_from_str(text: &str, source_name: &str) -> ConfigResult<String> {
    let version = VERSION_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|v| !v.is_empty());

    match version {
        Some(version) => {
            debug!(source = source_name, version, "Extracted version");
            Ok(version.to_string())
        }
        None => {
            warn!(source = source_name, "No cyberspace_version found");
            Err(ConfigError::VersionExtraction {
                file: source_name.to_string(),
            })
        }
    }
}
