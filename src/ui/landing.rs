/// Landing screen: hero search and the popular-destinations carousel
///
/// The search input is screen-local until submitted; submitting a
/// non-empty query writes it into the shared trip state and navigates to
/// the dashboard. Destination cards submit their name directly.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::Destination;
use crate::ui::header;
use crate::{mock, Message, Voya};

/// Cards visible per carousel page
const ITEMS_PER_VIEW: usize = 3;

/// Paging state for the destination carousel
///
/// The index is the first visible card and is clamped so a page can
/// never scroll past either end.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    pub index: usize,
}

impl Carousel {
    fn max_index(total: usize) -> usize {
        total.saturating_sub(ITEMS_PER_VIEW)
    }

    pub fn next(&mut self, total: usize) {
        self.index = (self.index + 1).min(Self::max_index(total));
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self, total: usize) -> bool {
        self.index >= Self::max_index(total)
    }
}

pub fn view(app: &Voya) -> Element<'_, Message> {
    let hero = column![
        text("Discover. Stay. Explore.").size(44),
        text("Plan your perfect journey with personalized recommendations for stays and attractions.")
            .size(18),
        row![
            text_input("Where would you like to go?", &app.search_input)
                .on_input(Message::SearchInputChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(12)
                .size(18)
                .width(Length::Fixed(420.0)),
            button(text("Search").size(18))
                .style(button::primary)
                .padding(12)
                .on_press(Message::SearchSubmitted),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    let destinations = mock::destinations();
    let carousel = carousel_view(&app.carousel, &destinations);

    let content = column![
        header::view(header::Variant::Landing, &app.trip.search_query),
        container(hero)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(48),
        container(
            column![text("Popular Destinations").size(28), carousel]
                .spacing(20)
                .align_x(Alignment::Center)
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(24),
    ];

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn carousel_view<'a>(
    carousel: &Carousel,
    destinations: &[Destination],
) -> Element<'a, Message> {
    let controls = row![
        nav_button("<", Message::CarouselPrev, !carousel.at_start()),
        nav_button(">", Message::CarouselNext, !carousel.at_end(destinations.len())),
    ]
    .spacing(12);

    let mut cards = row![].spacing(16);
    for destination in destinations
        .iter()
        .skip(carousel.index)
        .take(ITEMS_PER_VIEW)
    {
        cards = cards.push(destination_card(destination));
    }

    column![controls, cards]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
}

fn nav_button<'a>(label: &'a str, message: Message, enabled: bool) -> Element<'a, Message> {
    let mut b = button(text(label).size(16)).style(button::secondary).padding(8);
    if enabled {
        b = b.on_press(message);
    }
    b.into()
}

fn destination_card<'a>(destination: &Destination) -> Element<'a, Message> {
    let card = column![
        text(destination.name).size(20),
        text(destination.country).size(14),
        text(destination.description).size(13),
    ]
    .spacing(6);

    button(container(card).padding(14).width(Length::Fixed(200.0)))
        .style(button::secondary)
        .on_press(Message::DestinationChosen(destination.name.to_string()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_clamps_at_both_ends() {
        let total = 6;
        let mut carousel = Carousel::default();
        assert!(carousel.at_start());

        carousel.prev();
        assert_eq!(carousel.index, 0);

        for _ in 0..10 {
            carousel.next(total);
        }
        assert_eq!(carousel.index, total - ITEMS_PER_VIEW);
        assert!(carousel.at_end(total));

        carousel.prev();
        assert_eq!(carousel.index, 2);
    }

    #[test]
    fn test_carousel_with_fewer_items_than_a_page() {
        let mut carousel = Carousel::default();
        carousel.next(2);
        assert_eq!(carousel.index, 0);
        assert!(carousel.at_end(2));
    }
}
