/// Itinerary panel: ordered stop list grouped by day
///
/// Reordering is a pick-up/drop interaction driven by an explicit
/// two-state machine rather than a nullable "dragging id" field, so the
/// "always cleared on drop" invariant is structural: the drop handler
/// consumes the dragging state whether or not the reorder applied.

use chrono::Utc;
use iced::widget::{button, column, container, row, scrollable, text, horizontal_space};
use iced::{Alignment, Element, Length};
use serde::Serialize;

use crate::state::data::Stop;
use crate::state::trip::{Itinerary, TripState};
use crate::Message;

/// Drag interaction state for stop reordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Drag {
    #[default]
    Idle,
    Dragging {
        id: String,
    },
}

impl Drag {
    pub fn start(&mut self, id: String) {
        *self = Drag::Dragging { id };
    }

    pub fn clear(&mut self) {
        *self = Drag::Idle;
    }

    /// Consume the state, returning the dragged id if a drag was active
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Drag::Idle => None,
            Drag::Dragging { id } => Some(id),
        }
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match self {
            Drag::Idle => None,
            Drag::Dragging { id } => Some(id),
        }
    }
}

/// Walking speed used for the footer time estimate
const WALK_KM_PER_HOUR: f64 = 4.5;

/// Dwell time per stop for the footer time estimate
const MINUTES_PER_STOP: f64 = 45.0;

/// Rough trip duration in minutes: walking legs plus dwell time
fn estimate_minutes(itinerary: &Itinerary) -> f64 {
    itinerary.total_distance_km() / WALK_KM_PER_HOUR * 60.0
        + MINUTES_PER_STOP * itinerary.len() as f64
}

fn format_minutes(minutes: f64) -> String {
    let total = minutes.round() as u64;
    format!("{}h {:02}m", total / 60, total % 60)
}

/// JSON document copied to the clipboard by the share action
#[derive(Serialize)]
struct SharePayload<'a> {
    title: &'static str,
    generated_at: i64,
    stop_count: usize,
    stops: &'a [Stop],
}

/// Serialize the itinerary into the share payload
pub fn share_payload(itinerary: &Itinerary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SharePayload {
        title: "My VOYA Itinerary",
        generated_at: Utc::now().timestamp(),
        stop_count: itinerary.len(),
        stops: itinerary.stops(),
    })
}

pub fn view<'a>(trip: &'a TripState, drag: &'a Drag) -> Element<'a, Message> {
    let header = row![
        text("My Itinerary").size(20),
        horizontal_space(),
        action_button("Share", Message::ShareRequested),
        action_button("Save", Message::SaveRequested),
        action_button("✕", Message::ItineraryClosed),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = if trip.itinerary.is_empty() {
        column![
            text("No stops yet").size(16),
            text("Add attractions and stays from the map to start building your itinerary.")
                .size(13),
        ]
        .spacing(8)
        .padding(24)
        .into()
    } else {
        let mut groups = column![].spacing(14);
        for (day, stops) in trip.itinerary.group_by_day() {
            let mut group = column![text(format!("Day {}", day)).size(15)].spacing(6);
            if stops.is_empty() {
                group = group.push(text("(free day)").size(12));
            }
            for stop in stops {
                let index = trip
                    .itinerary
                    .position_of(&stop.id)
                    .unwrap_or_default();
                group = group.push(stop_row(stop, index, drag));
            }
            groups = groups.push(group);
        }
        scrollable(groups.padding(4)).height(Length::Fill).into()
    };

    let mut panel = column![header, body].spacing(12);

    if let Some(id) = drag.dragging_id() {
        let name = trip
            .itinerary
            .get(id)
            .map(|s| s.name.as_str())
            .unwrap_or("stop");
        panel = panel.push(
            row![
                text(format!("Moving \"{}\": pick a target", name)).size(13),
                horizontal_space(),
                action_button("Cancel", Message::DragCancelled),
            ]
            .align_y(Alignment::Center),
        );
    }

    if !trip.itinerary.is_empty() {
        let distance = trip.itinerary.total_distance_km();
        let time = format_minutes(estimate_minutes(&trip.itinerary));
        panel = panel.push(
            column![
                row![
                    text(format!("Distance: {:.1} km", distance)).size(13),
                    horizontal_space(),
                    text(format!("Time: {}", time)).size(13),
                ],
                button(text("Export PDF").size(14))
                    .style(button::primary)
                    .width(Length::Fill)
                    .on_press(Message::ExportRequested),
            ]
            .spacing(10),
        );
    }

    container(panel)
        .padding(14)
        .width(Length::Fixed(360.0))
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn stop_row<'a>(stop: &'a Stop, index: usize, drag: &'a Drag) -> Element<'a, Message> {
    let dragging_this = drag.dragging_id() == Some(stop.id.as_str());

    let grip: Element<'a, Message> = if dragging_this {
        text("⠿").size(16).into()
    } else {
        button(text("⠿").size(14))
            .style(button::text)
            .padding(4)
            .on_press(Message::DragStarted(stop.id.clone()))
            .into()
    };

    let info = column![
        text(&stop.name).size(14),
        row![
            text(stop.kind.label()).size(11),
            button(text(format!("{} {}", stop.status.icon(), stop.status.label())).size(11))
                .style(button::text)
                .padding(2)
                .on_press(Message::StatusCycled(stop.id.clone())),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(2);

    let day_controls = row![
        small_button("−", Message::DayShifted(stop.id.clone(), -1)),
        text(format!("Day {}", stop.day)).size(11),
        small_button("+", Message::DayShifted(stop.id.clone(), 1)),
        small_button("✕", Message::StopRemoved(stop.id.clone())),
    ]
    .spacing(2)
    .align_y(Alignment::Center);

    let mut entry = row![grip, info, horizontal_space(), day_controls]
        .spacing(8)
        .align_y(Alignment::Center);

    // While a drag is active, every row becomes a drop target at its
    // position in the master sequence
    if !dragging_this && drag.dragging_id().is_some() {
        entry = entry.push(
            button(text("⇪ here").size(11))
                .style(button::primary)
                .padding(4)
                .on_press(Message::DragDropped(index)),
        );
    }

    container(entry)
        .padding(8)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(13))
        .style(button::secondary)
        .padding(6)
        .on_press(message)
        .into()
}

fn small_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(12))
        .style(button::text)
        .padding(4)
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Coordinates, StopKind, StopStatus};

    #[test]
    fn test_drag_state_machine() {
        let mut drag = Drag::default();
        assert_eq!(drag.dragging_id(), None);

        drag.start("stop-1".to_string());
        assert_eq!(drag.dragging_id(), Some("stop-1"));

        // take() consumes the state unconditionally
        assert_eq!(drag.take(), Some("stop-1".to_string()));
        assert_eq!(drag, Drag::Idle);
        assert_eq!(drag.take(), None);

        drag.start("stop-2".to_string());
        drag.clear();
        assert_eq!(drag, Drag::Idle);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(150.0), "2h 30m");
        assert_eq!(format_minutes(45.0), "0h 45m");
        assert_eq!(format_minutes(60.4), "1h 00m");
    }

    #[test]
    fn test_share_payload_counts_stops() {
        let mut itinerary = Itinerary::new();
        itinerary
            .add(Stop {
                id: "stop-1".to_string(),
                name: "Eiffel Tower".to_string(),
                kind: StopKind::Attraction,
                position: Coordinates::new(2.2945, 48.8584),
                day: 1,
                status: StopStatus::Pending,
            })
            .unwrap();

        let json = share_payload(&itinerary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stop_count"], 1);
        assert_eq!(value["stops"][0]["name"], "Eiffel Tower");
    }
}
