mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::catalog::Product;
use crate::config::{AppConfig, ThemeMode};
use iced::{Point, Size, Theme, window};

/// Helper to launch the app with the loaded catalog.
pub fn run_app(products: Vec<Product>, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application("Recommended Products", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(products, config))
}
