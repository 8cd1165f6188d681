//! Default values for `AppConfig` fields, kept in one place so the serde
//! attributes and `Default` impl cannot drift apart.

use super::LogLevel;

pub fn default_enabled() -> bool {
    true
}

pub fn default_endpoint_url() -> String {
    "https://example.com/recommended-products.json".to_string()
}

pub fn default_title() -> String {
    "You Might Also Like".to_string()
}

pub fn default_card_width() -> f32 {
    220.0
}

pub fn default_currency() -> String {
    "TL".to_string()
}

pub fn default_window_width() -> f32 {
    1280.0
}

pub fn default_window_height() -> f32 {
    800.0
}

pub fn default_log_level() -> LogLevel {
    LogLevel::Info
}
