//! Configuration with sensible defaults, RON persistence, and CLI overrides.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SceneConfig, WindowConfig};
pub use error::ConfigError;
