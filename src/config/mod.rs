//! Configuration loading for the carousel.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back
//! to sensible defaults so the UI can still launch.

mod defaults;
mod io;

pub use io::{load_config, save_config};

use serde::{Deserialize, Serialize};

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Master switch. A disabled carousel exits silently at startup, the
    /// way the injected widget aborts when its host container is absent.
    #[serde(default = "defaults::default_enabled")]
    pub enabled: bool,
    #[serde(default = "defaults::default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default = "defaults::default_title")]
    pub title: String,
    /// Fixed card width in pixels; the paging model derives everything
    /// else from this and the viewport width.
    #[serde(default = "defaults::default_card_width")]
    pub card_width: f32,
    /// Suffix appended to every displayed price.
    #[serde(default = "defaults::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            enabled: defaults::default_enabled(),
            endpoint_url: defaults::default_endpoint_url(),
            title: defaults::default_title(),
            card_width: defaults::default_card_width(),
            currency: defaults::default_currency(),
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            log_level: defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
