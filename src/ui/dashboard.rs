/// Map dashboard screen
///
/// Shows the mock map plus the candidate POI cards for the selected
/// layer, filtered through the current FilterParams. Selecting a stay
/// drills into its fixed nearby-attractions list; closing the drill-in
/// restores the prior filtered view (filters are untouched, so the view
/// is simply recomputed).

use iced::widget::{button, checkbox, column, container, row, scrollable, slider, text,
    horizontal_space, Canvas};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{Coordinates, Layer, Poi, PoiCategory};
use crate::state::filter::{FilterParams, PRICE_MAX, RADIUS_MAX_KM};
use crate::ui::map::{MapProgram, Viewport};
use crate::ui::{header, itinerary};
use crate::{mock, Message, Voya};

/// Number of placeholder cards shown while a fetch is in flight
const SKELETON_COUNT: usize = 3;

/// Drill-in view: a selected stay and its nearby attractions
#[derive(Debug, Clone)]
pub struct DrillIn {
    pub stay: Poi,
    pub attractions: Vec<Poi>,
    pub loading: bool,
}

/// Screen-local dashboard state
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Candidate set for the selected layer, refreshed by the mock fetch
    pub pois: Vec<Poi>,
    pub loading: bool,
    pub filters: FilterParams,
    pub show_filters: bool,
    pub drill: Option<DrillIn>,
    /// Location fix from the mock probe; None until granted
    pub user_location: Option<Coordinates>,
    /// Marker highlighted on the map
    pub selected_poi: Option<String>,
    pub viewport: Viewport,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            pois: Vec::new(),
            loading: false,
            filters: FilterParams::new(),
            show_filters: false,
            drill: None,
            user_location: None,
            selected_poi: None,
            viewport: Viewport::new(mock::MAP_CENTER),
        }
    }

    /// The candidate list currently on display: the drill-in attractions
    /// when drilled into a stay, the layer candidates otherwise
    pub fn candidates(&self) -> &[Poi] {
        match &self.drill {
            Some(drill) => &drill.attractions,
            None => &self.pois,
        }
    }

    /// The visible subset; pure, recomputed on every view
    ///
    /// The drill-in list is fixed per stay and bypasses the layer
    /// filters; closing the drill-in recomputes the filtered layer view,
    /// which is what restores it
    pub fn visible(&self) -> Vec<&Poi> {
        match &self.drill {
            Some(drill) => drill.attractions.iter().collect(),
            None => self.filters.apply(&self.pois, self.user_location),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

pub fn view(app: &Voya) -> Element<'_, Message> {
    let dashboard = &app.dashboard;
    let visible = dashboard.visible();

    // Markers mirror the filtered card list; in drill-in the stay itself
    // stays on the map alongside its nearby attractions
    let mut marker_pois: Vec<Poi> = visible.iter().map(|p| (*p).clone()).collect();
    if let Some(drill) = &dashboard.drill {
        marker_pois.push(drill.stay.clone());
    }

    let map = Canvas::new(MapProgram {
        pois: marker_pois,
        user_location: dashboard.user_location,
        selected: dashboard.selected_poi.as_deref(),
        viewport: &dashboard.viewport,
    })
    .width(Length::Fill)
    .height(Length::Fixed(300.0));

    let mut main = column![
        toolbar(app, visible.len()),
        map,
    ]
    .spacing(10);

    if dashboard.show_filters && dashboard.drill.is_none() {
        main = main.push(filter_panel(&dashboard.filters, app.trip.selected_layer));
    }

    if let Some(drill) = &dashboard.drill {
        main = main.push(drill_banner(drill));
    }

    let cards: Element<'_, Message> = if dashboard.loading
        || dashboard.drill.as_ref().is_some_and(|d| d.loading)
    {
        skeleton_cards()
    } else if visible.is_empty() {
        container(text("No results match the current filters.").size(14))
            .padding(20)
            .into()
    } else {
        let in_drill = dashboard.drill.is_some();
        let elements: Vec<Element<'_, Message>> = visible
            .into_iter()
            .map(|poi| poi_card(poi, app.trip.selected_layer, in_drill))
            .collect();
        Wrap::with_elements(elements)
            .spacing(10.0)
            .line_spacing(10.0)
            .into()
    };

    main = main.push(scrollable(cards).height(Length::Fill));

    let mut content = row![main.width(Length::Fill)].spacing(10);
    if app.trip.itinerary_open {
        content = content.push(itinerary::view(&app.trip, &app.drag));
    }

    column![
        header::view(header::Variant::Dashboard, &app.trip.search_query),
        container(content)
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}

fn toolbar(app: &Voya, result_count: usize) -> Element<'_, Message> {
    let dashboard = &app.dashboard;
    let layer = app.trip.selected_layer;

    let layer_button = |label, value: Layer| {
        let style = if layer == value {
            button::primary
        } else {
            button::secondary
        };
        button(text(label).size(13))
            .style(style)
            .padding(6)
            .on_press(Message::LayerSelected(value))
    };

    let summary = if app.trip.search_query.is_empty() {
        "Search for a destination to see the map".to_string()
    } else {
        format!(
            "Showing results for \"{}\": {} {} found",
            app.trip.search_query,
            result_count,
            layer.label()
        )
    };

    let mut bar = row![
        layer_button("Attractions", Layer::Attractions),
        layer_button("Stays", Layer::Stays),
        button(text("📍 Locate").size(13))
            .style(button::secondary)
            .padding(6)
            .on_press(Message::LocateRequested),
        button(
            text(if dashboard.show_filters {
                "Hide filters"
            } else {
                "Filters"
            })
            .size(13)
        )
        .style(button::secondary)
        .padding(6)
        .on_press(Message::FiltersToggled),
        text(summary).size(13),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    // Badges disappear while drilled into a stay and come back with the
    // restored layer view
    if dashboard.drill.is_none() {
        for badge in dashboard.filters.active_badges() {
            bar = bar.push(
                container(text(badge).size(11))
                    .padding(4)
                    .style(container::rounded_box),
            );
        }
    }

    bar = bar.push(horizontal_space());
    bar = bar.push(
        button(text("🧳 Itinerary").size(13))
            .style(button::primary)
            .padding(6)
            .on_press(if app.trip.itinerary_open {
                Message::ItineraryClosed
            } else {
                Message::ItineraryOpened
            }),
    );

    bar.into()
}

fn filter_panel(filters: &FilterParams, layer: Layer) -> Element<'static, Message> {
    let mut categories = row![].spacing(12);
    for category in PoiCategory::for_layer(layer) {
        let enabled = filters.categories.contains(category);
        let category = *category;
        categories = categories.push(
            checkbox(category.label(), enabled)
                .size(14)
                .on_toggle(move |checked| Message::CategoryToggled(category, checked)),
        );
    }

    let panel = column![
        row![
            text(format!("Min rating: {:.1}", filters.min_rating)).size(12),
            slider(0.0..=5.0, filters.min_rating, Message::MinRatingChanged)
                .step(0.5)
                .width(Length::Fixed(140.0)),
            text(format!("Price: €{} – €{}", filters.price_min, filters.price_max)).size(12),
            slider(0..=PRICE_MAX, filters.price_min, Message::PriceMinChanged)
                .step(10u32)
                .width(Length::Fixed(120.0)),
            slider(0..=PRICE_MAX, filters.price_max, Message::PriceMaxChanged)
                .step(10u32)
                .width(Length::Fixed(120.0)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        row![
            text(format!("Within {:.0} km", filters.radius_km)).size(12),
            slider(1.0..=RADIUS_MAX_KM, filters.radius_km, Message::RadiusChanged)
                .step(1.0)
                .width(Length::Fixed(140.0)),
            categories,
            horizontal_space(),
            button(text("Clear").size(12))
                .style(button::text)
                .padding(4)
                .on_press(Message::FiltersCleared),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    container(panel)
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn drill_banner(drill: &DrillIn) -> Element<'_, Message> {
    row![
        text(format!("Attractions near {}", drill.stay.name)).size(14),
        horizontal_space(),
        button(text("Back to stays").size(12))
            .style(button::secondary)
            .padding(6)
            .on_press(Message::DrillClosed),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn poi_card<'a>(poi: &'a Poi, layer: Layer, in_drill: bool) -> Element<'a, Message> {
    let price = match poi.price {
        Some(p) => format!("€{}", p),
        None => "Free".to_string(),
    };

    let mut actions = row![
        button(text("Add").size(12))
            .style(button::primary)
            .padding(5)
            .on_press(Message::AddToItinerary(poi.id.clone())),
    ]
    .spacing(6);

    // Stays in the layer view can be drilled into
    if !in_drill && layer == Layer::Stays {
        actions = actions.push(
            button(text("Nearby").size(12))
                .style(button::secondary)
                .padding(5)
                .on_press(Message::StayOpened(poi.id.clone())),
        );
    }

    let card = column![
        text(&poi.name).size(14),
        text(format!("{} · ★ {:.1} · {}", poi.category.label(), poi.rating, price)).size(12),
        actions,
    ]
    .spacing(6);

    container(card)
        .padding(10)
        .width(Length::Fixed(230.0))
        .style(container::rounded_box)
        .into()
}

fn skeleton_cards() -> Element<'static, Message> {
    let mut cards = row![].spacing(10);
    for _ in 0..SKELETON_COUNT {
        cards = cards.push(
            container(column![text("…").size(14), text("loading").size(11)].spacing(8))
                .padding(10)
                .width(Length::Fixed(230.0))
                .height(Length::Fixed(80.0))
                .style(container::rounded_box),
        );
    }
    cards.into()
}
