//! Binary entry point for the orrery viewer.

use orrery_app::{platform, window};
use orrery_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::from_env();

    let dirs = match platform::PlatformDirs::resolve_and_create() {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to initialize platform directories: {e}");
            std::process::exit(1);
        }
    };

    let config_dir = args.config.clone().unwrap_or(dirs.config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config ({e}), using defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(&config));

    window::run_with_config(config);
}
