//! Target platform enumeration.

use crate::{ConfigError, ConfigResult};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A platform the build can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[display("windows")]
    Windows,
    #[display("macos")]
    MacOs,
    #[display("linux")]
    Linux,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// The platform this process is running on.
    ///
    /// Fails with [`ConfigError::UnsupportedPlatform`] on anything other than
    /// Windows, macOS or Linux.
    pub fn current() -> ConfigResult<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> ConfigResult<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Whether this is a Unix-family platform.
    pub fn is_unix(self) -> bool {
        match self {
            Platform::MacOs | Platform::Linux => true,
            Platform::Windows => false,
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "macos" | "mac" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            _ => Err(ConfigError::UnsupportedPlatform(s.to_string())),
        }
    }
}
