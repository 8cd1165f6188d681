use super::super::messages::Message;
use super::super::state::{App, STRIP_SCROLL_ID};
use super::Effect;
use crate::config::save_config;
use crate::store;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::path::Path;
use tracing::warn;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveCatalog => {
                store::save_catalog(&self.config.endpoint_url, &self.products);
                Task::none()
            }
            Effect::SaveConfig => {
                save_config(Path::new("conf/config.toml"), &self.config);
                Task::none()
            }
            Effect::SnapStrip(x) => {
                scrollable::scroll_to(STRIP_SCROLL_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::OpenExternal(url) => {
                if let Err(err) = open::that(&url) {
                    warn!(%url, "Failed to open the system browser: {err}");
                }
                Task::none()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
