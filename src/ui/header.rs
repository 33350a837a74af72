/// Shared top bar
///
/// Brand mark plus, on the dashboard, the editable destination query and
/// the profile shortcut. The landing screen renders its own hero search,
/// so its header stays minimal.

use iced::widget::{button, container, row, text, text_input, horizontal_space};
use iced::{Alignment, Element, Length};

use crate::{Message, Screen};

/// Which screen the header sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Landing,
    Dashboard,
    Profile,
}

pub fn view(variant: Variant, search_query: &str) -> Element<'_, Message> {
    let brand = button(text("VOYA").size(22))
        .style(button::text)
        .on_press(Message::ScreenChanged(Screen::Landing));

    let mut bar = row![brand].spacing(16).align_y(Alignment::Center);

    if variant == Variant::Dashboard {
        bar = bar.push(
            text_input("Search destinations...", search_query)
                .on_input(Message::QueryChanged)
                .on_submit(Message::QuerySubmitted)
                .padding(8)
                .width(Length::Fixed(320.0)),
        );
    }

    bar = bar.push(horizontal_space());

    if variant != Variant::Profile {
        bar = bar.push(
            button(text("Profile"))
                .style(button::secondary)
                .on_press(Message::ScreenChanged(Screen::Profile)),
        );
    } else {
        bar = bar.push(
            button(text("Back to map"))
                .style(button::secondary)
                .on_press(Message::ScreenChanged(Screen::Dashboard)),
        );
    }

    container(bar)
        .padding(12)
        .width(Length::Fill)
        .into()
}
