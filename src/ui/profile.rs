/// Profile & settings screen
///
/// Three tabs: account fields, the mock saved-itinerary list, and travel
/// preferences. Everything here is screen-local; the shared itinerary is
/// never touched from this screen.

use iced::widget::{button, checkbox, column, container, row, slider, text, text_input,
    horizontal_space};
use iced::{Alignment, Element, Length};

use crate::state::data::SavedItinerary;
use crate::{mock, Message, Voya};

/// Preference slider bounds in km
const DISTANCE_MIN: u32 = 10;
const DISTANCE_MAX: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Account,
    Itineraries,
    Preferences,
}

/// Screen-local profile state
#[derive(Debug, Clone)]
pub struct Profile {
    pub tab: Tab,
    pub email: String,
    pub password: String,
    /// Maximum daily travel distance preference, km
    pub max_distance: u32,
    pub use_metric: bool,
    pub saved: Vec<SavedItinerary>,
}

impl Profile {
    pub fn new() -> Self {
        Self {
            tab: Tab::default(),
            email: "user@example.com".to_string(),
            password: String::new(),
            max_distance: 50,
            use_metric: true,
            saved: mock::saved_itineraries(),
        }
    }

    /// Remove a saved itinerary; no-op if absent
    pub fn delete_saved(&mut self, id: &str) {
        self.saved.retain(|s| s.id != id);
    }

    pub fn distance_unit(&self) -> &'static str {
        if self.use_metric {
            "km"
        } else {
            "mi"
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

pub fn view(app: &Voya) -> Element<'_, Message> {
    let profile = &app.profile;

    let tab_button = |label, value: Tab| {
        let style = if profile.tab == value {
            button::primary
        } else {
            button::secondary
        };
        button(text(label).size(13))
            .style(style)
            .padding(8)
            .on_press(Message::ProfileTabSelected(value))
    };

    let tabs = row![
        tab_button("Account", Tab::Account),
        tab_button("My Itineraries", Tab::Itineraries),
        tab_button("Preferences", Tab::Preferences),
    ]
    .spacing(8);

    let body = match profile.tab {
        Tab::Account => account_tab(profile),
        Tab::Itineraries => itineraries_tab(profile),
        Tab::Preferences => preferences_tab(profile),
    };

    let content = column![
        text("Profile & Settings").size(26),
        text("Manage your account and travel preferences").size(14),
        tabs,
        container(body)
            .padding(16)
            .width(Length::Fill)
            .style(iced::widget::container::bordered_box),
    ]
    .spacing(14)
    .max_width(720);

    column![
        crate::ui::header::view(crate::ui::header::Variant::Profile, &app.trip.search_query),
        container(content)
            .padding(20)
            .width(Length::Fill)
            .center_x(Length::Fill),
    ]
    .into()
}

fn account_tab(profile: &Profile) -> Element<'_, Message> {
    column![
        text("Account Settings").size(16),
        column![
            text("Email").size(12),
            text_input("Email", &profile.email)
                .on_input(Message::EmailChanged)
                .padding(8),
        ]
        .spacing(4),
        column![
            text("New Password").size(12),
            text_input("Leave blank to keep current password", &profile.password)
                .on_input(Message::PasswordChanged)
                .secure(true)
                .padding(8),
        ]
        .spacing(4),
        row![
            button(text("Logout").size(13))
                .style(button::danger)
                .padding(8)
                .on_press(Message::LogoutRequested),
            horizontal_space(),
            button(text("Save Changes").size(13))
                .style(button::primary)
                .padding(8)
                .on_press(Message::AccountSaved),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(14)
    .into()
}

fn itineraries_tab(profile: &Profile) -> Element<'_, Message> {
    if profile.saved.is_empty() {
        return column![
            text("No itineraries yet").size(16),
            text("Start planning your first trip to see your saved itineraries here.").size(13),
        ]
        .spacing(8)
        .into();
    }

    let mut list = column![text("My Itineraries").size(16)].spacing(10);
    for saved in &profile.saved {
        list = list.push(
            container(
                row![
                    column![
                        text(&saved.name).size(14),
                        text(format!("{} stops · Created {}", saved.stops, saved.date)).size(12),
                    ]
                    .spacing(2),
                    horizontal_space(),
                    button(text("Delete").size(12))
                        .style(button::danger)
                        .padding(6)
                        .on_press(Message::SavedItineraryDeleted(saved.id.clone())),
                ]
                .align_y(Alignment::Center),
            )
            .padding(10)
            .width(Length::Fill)
            .style(iced::widget::container::rounded_box),
        );
    }
    list.into()
}

fn preferences_tab(profile: &Profile) -> Element<'_, Message> {
    let unit = profile.distance_unit();

    column![
        text("Travel Preferences").size(16),
        column![
            text("Maximum Daily Travel Distance").size(12),
            slider(
                DISTANCE_MIN..=DISTANCE_MAX,
                profile.max_distance,
                Message::MaxDistanceChanged
            )
            .step(10u32)
            .width(Length::Fixed(280.0)),
            text(format!(
                "{} {} (range {} – {} {})",
                profile.max_distance, unit, DISTANCE_MIN, DISTANCE_MAX, unit
            ))
            .size(12),
        ]
        .spacing(6),
        checkbox("Use kilometers for distance calculations", profile.use_metric)
            .size(14)
            .on_toggle(Message::MetricToggled),
        button(text("Save Preferences").size(13))
            .style(button::primary)
            .padding(8)
            .on_press(Message::PreferencesSaved),
    ]
    .spacing(14)
    .into()
}
