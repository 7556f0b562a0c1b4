//! Configuration error taxonomy.

/// Failure modes of configuration persistence.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read configuration file: {0}")]
    Read(#[source] std::io::Error),

    /// The config file or its directory could not be written.
    #[error("could not write configuration file: {0}")]
    Write(#[source] std::io::Error),

    /// The file contents are not valid RON for [`crate::Config`].
    #[error("configuration is not valid RON: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory config could not be rendered to RON.
    #[error("could not serialize configuration: {0}")]
    Serialize(#[source] ron::Error),
}
