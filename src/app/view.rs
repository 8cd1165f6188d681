use super::messages::Message;
use super::state::{App, STRIP_SCROLL_ID};
use crate::catalog::Product;
use crate::paging::VISIBLE_BUDGET_RATIO;
use crate::store;
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollable, Scrollbar};
use iced::widget::{
    Row, button, column, container, horizontal_space, image, row, text,
};
use iced::{Element, Length};

/// Height reserved for the image block of every card.
const CARD_IMAGE_HEIGHT: f32 = 160.0;
const CARD_PADDING: u16 = 8;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let position_label = if self.products.is_empty() {
            "No recommendations".to_string()
        } else {
            format!(
                "Card {} of {}",
                self.paging.current_index() + 1,
                self.products.len()
            )
        };
        let favorites_label = format!("{} favorited", self.favorite_count());

        let theme_label = match self.config.theme {
            crate::config::ThemeMode::Night => "Day Mode",
            crate::config::ThemeMode::Day => "Night Mode",
        };
        let theme_toggle = button(theme_label).on_press(Message::ToggleTheme);

        let header = row![
            text(self.config.title.as_str()).size(24.0),
            horizontal_space(),
            text(position_label).size(14.0),
            text(favorites_label).size(14.0),
            theme_toggle,
        ]
        .spacing(12)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let cards = self
            .products
            .iter()
            .enumerate()
            .fold(Row::new(), |strip, (idx, product)| {
                strip.push(self.product_card(idx, product))
            });

        // In paged mode the scrollbar stays out of sight: the strip is a
        // fixed-width window driven purely by snap offsets. Below the
        // breakpoint the bar reappears and native scrolling owns the strip.
        let scrollbar = if self.paging.is_paged() {
            Scrollbar::new().width(0).scroller_width(0)
        } else {
            Scrollbar::new()
        };
        let strip_width = if self.paging.is_paged() {
            Length::Fixed(self.config.window_width * VISIBLE_BUDGET_RATIO)
        } else {
            Length::Fill
        };
        let strip = Scrollable::with_direction(cards, Direction::Horizontal(scrollbar))
            .id(STRIP_SCROLL_ID.clone())
            .width(strip_width);

        let mut strip_row = Row::new().spacing(8).align_y(Vertical::Center);
        if self.paging.is_paged() {
            strip_row = strip_row.push(button(text("‹").size(24.0)).on_press(Message::PrevCard));
        }
        strip_row = strip_row.push(strip);
        if self.paging.is_paged() {
            strip_row = strip_row.push(button(text("›").size(24.0)).on_press(Message::NextCard));
        }

        let content = column![header, strip_row]
            .padding(16)
            .spacing(12)
            .width(Length::Fill);

        container(content).center_x(Length::Fill).into()
    }

    fn product_card<'a>(&'a self, idx: usize, product: &'a Product) -> Element<'a, Message> {
        let image_file = store::image_path(&self.config.endpoint_url, product);
        let picture: Element<'_, Message> = if image_file.exists() {
            image(image_file)
                .width(Length::Fill)
                .height(Length::Fixed(CARD_IMAGE_HEIGHT))
                .into()
        } else {
            container(text("No image").size(13.0))
                .width(Length::Fill)
                .height(Length::Fixed(CARD_IMAGE_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        };

        let heart = if product.is_favorite { "♥" } else { "♡" };
        // The favorite control is its own button, so toggling never
        // triggers the card-level open.
        let favorite = button(text(heart).size(18.0)).on_press(Message::ToggleFavorite(idx));

        let body = column![
            row![horizontal_space(), favorite],
            picture,
            text(product.name.as_str()).size(14.0),
            text(format!("{:.2} {}", product.price, self.config.currency)).size(16.0),
        ]
        .spacing(6);

        // Cards tile at exactly `card_width` so snap offsets line up with
        // card boundaries.
        button(body)
            .width(Length::Fixed(self.config.card_width))
            .padding(CARD_PADDING)
            .on_press(Message::OpenProduct(idx))
            .into()
    }
}
