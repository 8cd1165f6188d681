use crate::catalog::Product;
use crate::config::AppConfig;
use crate::paging::PagingState;
use iced::Task;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

use super::messages::Message;

pub(crate) static STRIP_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("card-strip"));

/// Core application state: the product list and the paging model it drives.
///
/// The product list lives for the whole session, is mutated in place by
/// favorite toggles and written back to storage after each mutation. Paging
/// state is derived and never persisted.
pub struct App {
    pub(super) products: Vec<Product>,
    pub(super) paging: PagingState,
    pub(super) config: AppConfig,
}

impl App {
    pub(super) fn bootstrap(products: Vec<Product>, config: AppConfig) -> (App, Task<Message>) {
        let paging = PagingState::new(products.len(), config.window_width, config.card_width);
        tracing::info!(
            products = products.len(),
            paged = paging.is_paged(),
            fully_visible = paging.fully_visible(),
            "Initialized carousel state"
        );
        (
            App {
                products,
                paging,
                config,
            },
            Task::none(),
        )
    }

    /// Pixel offset of the card strip realizing the current translate
    /// offset. Cards tile at exactly `card_width`, so the conversion is a
    /// single multiplication.
    pub(super) fn strip_pixel_offset(&self) -> f32 {
        self.paging.translate_offset() * self.config.card_width
    }

    pub(super) fn favorite_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_favorite).count()
    }
}
