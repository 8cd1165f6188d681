mod cards;
mod navigation;
mod reducer;
mod runtime;

use super::messages::Message;
use super::state::App;
use iced::event;
use iced::{Subscription, Task};

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    SaveCatalog,
    SaveConfig,
    SnapStrip(f32),
    OpenExternal(String),
}

impl App {
    pub fn subscription(_app: &App) -> Subscription<Message> {
        event::listen_with(runtime::runtime_event_to_message)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
