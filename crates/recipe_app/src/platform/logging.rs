//! Platform logging initialization for recipe_app.
//!
//! Writes logs to `./recipe.log` in the current working directory so the
//! terminal stays free for the recipe views.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./recipe.log";

/// Installs the global logger.
///
/// Falls back to warnings on stderr when the log file cannot be created.
pub fn initialize() {
    let config = build_config();

    let logger: Box<dyn SharedLogger> = match create_file_logger(LevelFilter::Debug, config.clone())
    {
        Some(file_logger) => file_logger,
        None => TermLogger::new(
            LevelFilter::Warn,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    let _ = CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("recipe")
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {log_path:?}: {err}");
            None
        }
    }
}
