//! Structured logging for the orrery viewer.
//!
//! Console output with uptime timestamps and module targets via the
//! `tracing` ecosystem. Filtering honors `RUST_LOG` first, then the config
//! log level, then the built-in default.

use orrery_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: info everywhere, with the noisy GPU stacks held to warn.
const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Initialize the tracing subscriber.
///
/// * `config` - optional configuration whose `debug.log_level` overrides the
///   default filter when set.
///
/// `RUST_LOG` in the environment wins over both.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        // EnvFilter::new panics on an invalid directive string.
        let _ = default_env_filter();
    }

    #[test]
    fn test_config_level_overrides_default() {
        let mut config = Config::default();
        config.debug.log_level = "trace".to_string();
        let filter_str = if !config.debug.log_level.is_empty() {
            config.debug.log_level.clone()
        } else {
            DEFAULT_FILTER.to_string()
        };
        assert_eq!(filter_str, "trace");
    }
}
