//! Configuration resolution errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env var not defined.")]
    MissingEnvVar(String),

    #[error("Failed to extract version number from {file}")]
    VersionExtraction { file: String },

    #[error("failed to read {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error(
        "library toolchain mismatch: expected vs{expected}, CMakeLists.txt has vs{found}"
    )]
    ToolchainMismatch { expected: u32, found: u32 },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
