use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use crate::config::ThemeMode;
use tracing::info;

impl App {
    /// Pure state transition: applies one message and reports the side
    /// effects the runtime still has to perform. Keeping this free of IO is
    /// what makes the paging and favorite flows testable headlessly.
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextCard => self.handle_next_card(&mut effects),
            Message::PrevCard => self.handle_prev_card(&mut effects),
            Message::OpenProduct(idx) => self.handle_open_product(idx, &mut effects),
            Message::ToggleFavorite(idx) => self.handle_toggle_favorite(idx, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = Self::shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }

    fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = match self.config.theme {
            ThemeMode::Night => ThemeMode::Day,
            ThemeMode::Day => ThemeMode::Night,
        };
        info!(
            night_mode = matches!(next, ThemeMode::Night),
            "Toggled theme"
        );
        self.config.theme = next;
        effects.push(Effect::SaveConfig);
    }
}
