use super::super::state::App;
use super::Effect;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_open_product(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(product) = self.products.get(idx) else {
            warn!(idx, "Open requested for unknown card");
            return;
        };
        info!(id = %product.id, url = %product.url, "Opening product page");
        effects.push(Effect::OpenExternal(product.url.clone()));
    }

    pub(super) fn handle_toggle_favorite(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(product) = self.products.get_mut(idx) else {
            warn!(idx, "Favorite toggle for unknown card");
            return;
        };
        product.is_favorite = !product.is_favorite;
        debug!(
            id = %product.id,
            favorite = product.is_favorite,
            "Toggled favorite"
        );
        effects.push(Effect::SaveCatalog);
    }
}
