//! Platform directory resolution.
//!
//! Resolves the OS-appropriate locations for configuration and logs (XDG on
//! Linux, Known Folders on Windows, Library on macOS).

use std::path::PathBuf;
use std::{fmt, io};

/// Errors that can occur during platform directory setup.
#[derive(Debug)]
pub enum PlatformError {
    /// No OS configuration directory is available.
    NoConfigDir,
    /// Creating a directory failed.
    Io(io::Error),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "the OS exposes no configuration directory"),
            Self::Io(e) => write!(f, "directory setup failed: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NoConfigDir => None,
        }
    }
}

impl From<io::Error> for PlatformError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// OS-specific directory paths for the orrery viewer.
pub struct PlatformDirs {
    /// User configuration: `config.ron`.
    pub config_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "orrery";

impl PlatformDirs {
    /// Compute the directory paths without touching the filesystem.
    ///
    /// # Errors
    ///
    /// [`PlatformError::NoConfigDir`] when the OS has no notion of a user
    /// config location.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        let app_config = config_base.join(APP_NAME);

        Ok(Self {
            config_dir: app_config.join("config"),
            log_dir: app_config.join("logs"),
        })
    }

    /// Compute the paths and create every directory.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails or a directory cannot be created.
    pub fn resolve_and_create() -> Result<Self, PlatformError> {
        let dirs = Self::resolve()?;
        std::fs::create_dir_all(&dirs.config_dir)?;
        std::fs::create_dir_all(&dirs.log_dir)?;
        Ok(dirs)
    }
}
