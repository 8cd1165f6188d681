use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use tracing::debug;

impl App {
    pub(super) fn handle_next_card(&mut self, effects: &mut Vec<Effect>) {
        if !self.paging.is_paged() {
            return;
        }
        let before = self.paging.translate_offset();
        self.paging.next();
        if (self.paging.translate_offset() - before).abs() > f32::EPSILON {
            debug!(
                index = self.paging.current_index(),
                offset = self.paging.translate_offset(),
                "Paged forward"
            );
            effects.push(Effect::SnapStrip(self.strip_pixel_offset()));
        }
    }

    pub(super) fn handle_prev_card(&mut self, effects: &mut Vec<Effect>) {
        if !self.paging.is_paged() {
            return;
        }
        let before = self.paging.translate_offset();
        self.paging.prev();
        if (self.paging.translate_offset() - before).abs() > f32::EPSILON {
            debug!(
                index = self.paging.current_index(),
                offset = self.paging.translate_offset(),
                "Paged backward"
            );
            effects.push(Effect::SnapStrip(self.strip_pixel_offset()));
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if width.is_finite() && width > 0.0 {
            self.config.window_width = width;
        }
        if height.is_finite() && height > 0.0 {
            self.config.window_height = height;
        }
        let was_paged = self.paging.is_paged();
        self.paging
            .recompute(self.config.window_width, self.config.card_width);
        if was_paged != self.paging.is_paged() {
            debug!(
                width = self.config.window_width,
                paged = self.paging.is_paged(),
                "Crossed layout breakpoint"
            );
        }
        // A breakpoint crossing mid-page can leave the strip offset stale;
        // the next navigation reconciles it.
    }

    pub(super) fn shortcut_message_for_key(key: Key, modifiers: Modifiers) -> Option<Message> {
        if !modifiers.is_empty() {
            return None;
        }
        match key {
            Key::Named(Named::ArrowRight) => Some(Message::NextCard),
            Key::Named(Named::ArrowLeft) => Some(Message::PrevCard),
            _ => None,
        }
    }
}
