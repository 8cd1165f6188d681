//! Reading and writing the TOML configuration file.

use super::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from the given path, falling back to defaults when
/// the file is missing or malformed.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
                AppConfig::default()
            }
        },
        Err(_) => {
            debug!(path = %path.display(), "No configuration file, using defaults");
            AppConfig::default()
        }
    }
}

/// Persist configuration; errors are logged and swallowed.
pub fn save_config(path: &Path, config: &AppConfig) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match toml::to_string(config) {
        Ok(contents) => {
            if let Err(err) = fs::write(path, contents) {
                warn!(path = %path.display(), "Failed to write configuration: {err}");
            }
        }
        Err(err) => warn!("Failed to serialize configuration: {err}"),
    }
}
