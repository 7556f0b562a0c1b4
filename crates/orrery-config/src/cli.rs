//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Decorative 3D solar-system viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in fullscreen.
    #[arg(long)]
    pub fullscreen: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Skip fetching the remote surface maps.
    #[arg(long)]
    pub no_textures: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Parse arguments from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse()
    }
}

impl Config {
    /// Fold CLI values over a loaded config; absent flags leave it untouched.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(width) = args.width {
            self.window.width = width;
        }
        if let Some(height) = args.height {
            self.window.height = height;
        }
        if let Some(fullscreen) = args.fullscreen {
            self.window.fullscreen = fullscreen;
        }
        if let Some(level) = &args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.no_textures {
            self.scene.fetch_textures = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            width: None,
            height: None,
            fullscreen: None,
            log_level: None,
            no_textures: false,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            log_level: Some("debug".to_string()),
            no_textures: true,
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.debug.log_level, "debug");
        assert!(!config.scene.fetch_textures);
        // Non-overridden fields retain defaults.
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }
}
