//! Viewport paging model for the card strip.
//!
//! The strip occupies 80% of the viewport width. From that budget we derive
//! how many whole cards fit and what fraction of the next card peeks in, and
//! we track the left-most visible card plus the horizontal offset (in
//! card-width units) that realizes the current page. The logic is isolated
//! from rendering so it can be exercised without a window.

/// Viewport width below which paging is disabled in favor of native
/// horizontal scrolling.
pub const MOBILE_BREAKPOINT: f32 = 960.0;
/// Share of the viewport width the card strip occupies.
pub const VISIBLE_BUDGET_RATIO: f32 = 0.8;

/// Derived paging state. Recomputed wholesale on resize, mutated
/// incrementally by navigation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingState {
    current_index: usize,
    last_index: usize,
    fully_visible: usize,
    partial_fraction: f32,
    translate_offset: f32,
    paged: bool,
}

impl PagingState {
    pub fn new(product_count: usize, viewport_width: f32, card_width: f32) -> Self {
        let mut state = PagingState {
            current_index: 0,
            last_index: product_count.saturating_sub(1),
            fully_visible: 0,
            partial_fraction: 0.0,
            translate_offset: 0.0,
            paged: false,
        };
        state.recompute(viewport_width, card_width);
        state
    }

    /// Recompute the visible window from the viewport width.
    ///
    /// Below the mobile breakpoint paging is disabled and nothing else
    /// changes: the current index survives a desktop-to-mobile resize, and a
    /// stale `translate_offset` is reconciled by the next navigation rather
    /// than here.
    pub fn recompute(&mut self, viewport_width: f32, card_width: f32) {
        if viewport_width < MOBILE_BREAKPOINT {
            self.paged = false;
            return;
        }
        self.paged = true;
        let budget = viewport_width * VISIBLE_BUDGET_RATIO;
        let ratio = budget / card_width.max(1.0);
        self.fully_visible = ratio.floor() as usize;
        // Two decimal places keeps the strip transform free of sub-pixel
        // jitter across repeated resize events.
        self.partial_fraction = round2(ratio - ratio.floor());
    }

    /// Step one card forward. Paging is three-phase: whole-card steps while
    /// further full pages remain, one terminal reveal of the trailing
    /// partial card, then no motion at all.
    pub fn next(&mut self) {
        let reach = self.current_index + self.fully_visible;
        if reach == self.last_index {
            // Terminal step: shift just far enough to uncover the last
            // card without advancing the index. Repeat calls re-assign the
            // same offset, so the state no longer moves.
            self.translate_offset = self.current_index as f32 + 1.0 - self.partial_fraction;
        } else if reach < self.last_index {
            self.current_index += 1;
            self.translate_offset = self.current_index as f32;
        }
        // reach > last_index: the visible window already covers the list.
    }

    /// Step one card back. At index zero this resets the offset instead,
    /// which also unwinds a terminal partial reveal on short lists.
    pub fn prev(&mut self) {
        if self.current_index == 0 {
            self.translate_offset = 0.0;
        } else {
            self.current_index -= 1;
            self.translate_offset = self.current_index as f32;
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn translate_offset(&self) -> f32 {
        self.translate_offset
    }

    /// Whether arrow-driven paging is active at the current viewport width.
    pub fn is_paged(&self) -> bool {
        self.paged
    }

    pub fn fully_visible(&self) -> usize {
        self.fully_visible
    }

    pub fn partial_fraction(&self) -> f32 {
        self.partial_fraction
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: f32 = 220.0;

    #[test]
    fn recompute_splits_budget_into_whole_and_partial_cards() {
        // 1200 * 0.8 = 960; 960 / 220 = 4.3636...
        let state = PagingState::new(13, 1200.0, CARD);
        assert!(state.is_paged());
        assert_eq!(state.fully_visible(), 4);
        assert!((state.partial_fraction() - 0.36).abs() < 1e-4);
    }

    #[test]
    fn thirteen_products_walk_ends_in_single_partial_reveal() {
        let mut state = PagingState::new(13, 1200.0, CARD);

        for step in 1..=8 {
            state.next();
            assert_eq!(state.current_index(), step);
            assert!((state.translate_offset() - step as f32).abs() < 1e-6);
        }

        // 8 + 4 == 12: the ninth call is the terminal partial reveal.
        state.next();
        assert_eq!(state.current_index(), 8);
        assert!((state.translate_offset() - 8.64).abs() < 1e-4);

        // A tenth call changes nothing.
        let frozen = state.clone();
        state.next();
        assert_eq!(state, frozen);
    }

    #[test]
    fn offsets_are_monotonic_under_repeated_next() {
        let mut state = PagingState::new(13, 1200.0, CARD);
        let mut previous = state.translate_offset();
        for _ in 0..16 {
            state.next();
            assert!(state.translate_offset() + 1e-6 >= previous);
            previous = state.translate_offset();
        }
    }

    #[test]
    fn prev_inverts_next_back_to_origin() {
        for k in 0..=10 {
            let mut state = PagingState::new(13, 1200.0, CARD);
            for _ in 0..k {
                state.next();
            }
            for _ in 0..k {
                state.prev();
            }
            assert_eq!(state.current_index(), 0, "after {k} round trips");
            assert_eq!(state.translate_offset(), 0.0, "after {k} round trips");
        }
    }

    #[test]
    fn prev_at_zero_is_idempotent_offset_reset() {
        let mut state = PagingState::new(13, 1200.0, CARD);
        state.prev();
        state.prev();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.translate_offset(), 0.0);
    }

    #[test]
    fn list_shorter_than_one_page_never_moves() {
        // 1700 * 0.8 = 1360; 1360 / 220 yields six whole cards for five
        // products, so 0 + 6 overshoots the last index.
        let mut state = PagingState::new(5, 1700.0, CARD);
        assert_eq!(state.fully_visible(), 6);
        for _ in 0..4 {
            state.next();
            assert_eq!(state.current_index(), 0);
            assert_eq!(state.translate_offset(), 0.0);
        }
    }

    #[test]
    fn empty_list_is_inert() {
        let mut state = PagingState::new(0, 1200.0, CARD);
        state.next();
        state.prev();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.translate_offset(), 0.0);
    }

    #[test]
    fn mobile_viewport_disables_paging_without_touching_position() {
        let mut state = PagingState::new(13, 1200.0, CARD);
        state.next();
        state.next();
        state.next();

        state.recompute(700.0, CARD);
        assert!(!state.is_paged());
        assert_eq!(state.current_index(), 3);
        assert!((state.translate_offset() - 3.0).abs() < 1e-6);

        // Growing back re-enables paging and refreshes the window counts.
        state.recompute(1200.0, CARD);
        assert!(state.is_paged());
        assert_eq!(state.fully_visible(), 4);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn exact_fit_leaves_no_partial_fraction() {
        // 1100 * 0.8 = 880 = 4 * 220 exactly.
        let state = PagingState::new(13, 1100.0, CARD);
        assert_eq!(state.fully_visible(), 4);
        assert_eq!(state.partial_fraction(), 0.0);
    }
}
