use iced::keyboard::{Key, Modifiers};

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextCard,
    PrevCard,
    OpenProduct(usize),
    ToggleFavorite(usize),
    ToggleTheme,
    WindowResized { width: f32, height: f32 },
    KeyPressed { key: Key, modifiers: Modifiers },
}
