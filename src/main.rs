use cgmath::Vector2;
use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};
use std::time::Duration;

// Declare the application modules
pub mod mock;
pub mod state;
pub mod ui;

use state::data::{Coordinates, Layer, Poi, PoiCategory, Stop, StopKind};
use state::trip::TripState;
use ui::dashboard::{Dashboard, DrillIn};
use ui::itinerary::Drag;
use ui::landing::Carousel;
use ui::profile::Profile;

/// Simulated latency before mock POI data appears
const FETCH_DELAY: Duration = Duration::from_millis(400);

/// Simulated latency of the location probe
const LOCATE_DELAY: Duration = Duration::from_millis(600);

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Dashboard,
    Profile,
}

/// Main application state
pub struct Voya {
    pub screen: Screen,
    /// Shared trip state read and mutated by every screen
    pub trip: TripState,
    /// Landing hero input, local until submitted
    pub search_input: String,
    pub carousel: Carousel,
    pub dashboard: Dashboard,
    /// Stop-reorder drag machine for the itinerary panel
    pub drag: Drag,
    pub profile: Profile,
    /// Status message to display to the user
    pub status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    ScreenChanged(Screen),

    // Landing
    SearchInputChanged(String),
    SearchSubmitted,
    DestinationChosen(String),
    CarouselPrev,
    CarouselNext,

    // Dashboard header search
    QueryChanged(String),
    QuerySubmitted,

    // Dashboard
    LayerSelected(Layer),
    PoisLoaded(Layer, Vec<Poi>),
    FiltersToggled,
    MinRatingChanged(f32),
    PriceMinChanged(u32),
    PriceMaxChanged(u32),
    CategoryToggled(PoiCategory, bool),
    RadiusChanged(f32),
    FiltersCleared,
    StayOpened(String),
    NearbyLoaded(String, Vec<Poi>),
    DrillClosed,
    AddToItinerary(String),
    LocateRequested,
    Located(Result<Coordinates, String>),
    MapZoomed(f32),
    MapPanned(Vector2<f32>),
    PoiPicked(String),

    // Itinerary panel
    ItineraryOpened,
    ItineraryClosed,
    DragStarted(String),
    DragDropped(usize),
    DragCancelled,
    StopRemoved(String),
    StatusCycled(String),
    DayShifted(String, i32),
    SaveRequested,
    ShareRequested,
    ExportRequested,

    // Profile
    ProfileTabSelected(ui::profile::Tab),
    EmailChanged(String),
    PasswordChanged(String),
    MaxDistanceChanged(u32),
    MetricToggled(bool),
    AccountSaved,
    PreferencesSaved,
    LogoutRequested,
    SavedItineraryDeleted(String),
}

impl Voya {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🌍 VOYA prototype started");

        (
            Voya {
                screen: Screen::Landing,
                trip: TripState::new(),
                search_input: String::new(),
                carousel: Carousel::default(),
                dashboard: Dashboard::new(),
                drag: Drag::default(),
                profile: Profile::new(),
                status: "Ready. Plan your next trip.".to_string(),
            },
            Task::none(),
        )
    }

    /// Start a mock POI fetch for the selected layer
    fn load_layer(&mut self) -> Task<Message> {
        let layer = self.trip.selected_layer;
        self.dashboard.loading = true;

        Task::perform(fetch_pois(layer), move |pois| {
            Message::PoisLoaded(layer, pois)
        })
    }

    /// Enter the dashboard for the current query: reset the drill-in,
    /// reload the layer and probe for a location fix if none is known
    fn begin_search(&mut self) -> Task<Message> {
        println!("🔍 Searching \"{}\"", self.trip.search_query);

        self.screen = Screen::Dashboard;
        self.dashboard.drill = None;
        self.dashboard.selected_poi = None;

        let fetch = self.load_layer();
        if self.dashboard.user_location.is_none() {
            Task::batch([fetch, Task::perform(locate(), Message::Located)])
        } else {
            fetch
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScreenChanged(screen) => {
                self.screen = screen;
                if screen == Screen::Dashboard
                    && self.dashboard.pois.is_empty()
                    && !self.dashboard.loading
                {
                    return self.load_layer();
                }
                Task::none()
            }

            Message::SearchInputChanged(input) => {
                self.search_input = input;
                Task::none()
            }
            Message::SearchSubmitted => {
                let query = self.search_input.trim();
                if query.is_empty() {
                    return Task::none();
                }
                self.trip.search_query = query.to_string();
                self.begin_search()
            }
            Message::DestinationChosen(name) => {
                self.trip.search_query = name;
                self.begin_search()
            }
            Message::CarouselPrev => {
                self.carousel.prev();
                Task::none()
            }
            Message::CarouselNext => {
                self.carousel.next(mock::destinations().len());
                Task::none()
            }

            Message::QueryChanged(query) => {
                self.trip.search_query = query;
                Task::none()
            }
            Message::QuerySubmitted => {
                if self.trip.search_query.trim().is_empty() {
                    return Task::none();
                }
                self.begin_search()
            }

            Message::LayerSelected(layer) => {
                if self.trip.selected_layer == layer && self.dashboard.drill.is_none() {
                    return Task::none();
                }
                self.trip.selected_layer = layer;
                self.dashboard.drill = None;
                self.dashboard.selected_poi = None;
                // Category flags belong to a layer; rating, price and
                // radius carry over
                self.dashboard.filters.categories.clear();
                self.load_layer()
            }
            Message::PoisLoaded(layer, pois) => {
                if layer != self.trip.selected_layer {
                    // A fetch finished after the layer changed; drop it
                    println!("⏳ Dropped stale {} results", layer.label());
                    return Task::none();
                }
                self.status = format!("Found {} {}.", pois.len(), layer.label());
                self.dashboard.pois = pois;
                self.dashboard.loading = false;
                Task::none()
            }

            Message::FiltersToggled => {
                self.dashboard.show_filters = !self.dashboard.show_filters;
                Task::none()
            }
            Message::MinRatingChanged(value) => {
                self.dashboard.filters.min_rating = value;
                Task::none()
            }
            Message::PriceMinChanged(value) => {
                let filters = &mut self.dashboard.filters;
                filters.price_min = value.min(filters.price_max);
                Task::none()
            }
            Message::PriceMaxChanged(value) => {
                let filters = &mut self.dashboard.filters;
                filters.price_max = value.max(filters.price_min);
                Task::none()
            }
            Message::CategoryToggled(category, enabled) => {
                self.dashboard.filters.set_category(category, enabled);
                Task::none()
            }
            Message::RadiusChanged(value) => {
                self.dashboard.filters.radius_km = value;
                Task::none()
            }
            Message::FiltersCleared => {
                self.dashboard.filters.reset();
                Task::none()
            }

            Message::StayOpened(stay_id) => {
                let Some(stay) = self
                    .dashboard
                    .pois
                    .iter()
                    .find(|p| p.id == stay_id)
                    .cloned()
                else {
                    return Task::none();
                };
                self.dashboard.selected_poi = Some(stay.id.clone());
                self.dashboard.drill = Some(DrillIn {
                    stay,
                    attractions: Vec::new(),
                    loading: true,
                });
                Task::perform(fetch_nearby(stay_id.clone()), move |pois| {
                    Message::NearbyLoaded(stay_id.clone(), pois)
                })
            }
            Message::NearbyLoaded(stay_id, pois) => {
                if let Some(drill) = &mut self.dashboard.drill {
                    if drill.stay.id == stay_id {
                        self.status =
                            format!("{} attractions near {}.", pois.len(), drill.stay.name);
                        drill.attractions = pois;
                        drill.loading = false;
                    }
                }
                Task::none()
            }
            Message::DrillClosed => {
                self.dashboard.drill = None;
                self.dashboard.selected_poi = None;
                Task::none()
            }

            Message::AddToItinerary(poi_id) => {
                let Some(poi) = self
                    .dashboard
                    .candidates()
                    .iter()
                    .find(|p| p.id == poi_id)
                    .cloned()
                else {
                    return Task::none();
                };

                // Drill-in candidates are always attractions, whatever
                // layer the drill started from
                let kind = if self.dashboard.drill.is_some() {
                    StopKind::Attraction
                } else {
                    self.trip.selected_layer.stop_kind()
                };

                let id = self.trip.itinerary.next_id();
                match self.trip.itinerary.add(Stop::from_poi(id, &poi, kind)) {
                    Ok(()) => {
                        println!("🧳 Added {} to the itinerary", poi.name);
                        self.status = format!("Added {} to your itinerary.", poi.name);
                    }
                    Err(e) => {
                        eprintln!("⚠️  Could not add stop: {}", e);
                        self.status = format!("Could not add stop: {}", e);
                    }
                }
                Task::none()
            }

            Message::LocateRequested => {
                if let Some(location) = self.dashboard.user_location {
                    println!("📍 Centering map to user location");
                    self.dashboard.viewport.center_on(location);
                    self.status = "Centered on your location.".to_string();
                    Task::none()
                } else {
                    self.status = "Locating...".to_string();
                    Task::perform(locate(), Message::Located)
                }
            }
            Message::Located(Ok(location)) => {
                println!("📍 Location fix: {:.4}, {:.4}", location.lon, location.lat);
                self.dashboard.user_location = Some(location);
                Task::none()
            }
            Message::Located(Err(e)) => {
                // Denial never blocks anything; the map just stays
                // uncentered
                eprintln!("📍 Location access denied: {}", e);
                self.status = "Location unavailable.".to_string();
                Task::none()
            }

            Message::MapZoomed(delta) => {
                self.dashboard.viewport.zoom_by(delta);
                Task::none()
            }
            Message::MapPanned(delta) => {
                self.dashboard.viewport.pan_by(delta);
                Task::none()
            }
            Message::PoiPicked(poi_id) => {
                let name = self
                    .dashboard
                    .candidates()
                    .iter()
                    .find(|p| p.id == poi_id)
                    .map(|p| p.name.clone());
                if let Some(name) = name {
                    self.status = format!("Selected {}.", name);
                }
                self.dashboard.selected_poi = Some(poi_id);
                Task::none()
            }

            Message::ItineraryOpened => {
                self.trip.itinerary_open = true;
                Task::none()
            }
            Message::ItineraryClosed => {
                self.trip.itinerary_open = false;
                // Closing the panel abandons any in-progress drag
                self.drag.clear();
                Task::none()
            }

            Message::DragStarted(stop_id) => {
                self.drag.start(stop_id);
                Task::none()
            }
            Message::DragDropped(target_index) => {
                // take() clears the drag whether or not the reorder
                // applies
                if let Some(stop_id) = self.drag.take() {
                    self.trip.itinerary.reorder(&stop_id, target_index);
                }
                Task::none()
            }
            Message::DragCancelled => {
                self.drag.clear();
                Task::none()
            }

            Message::StopRemoved(stop_id) => {
                if self.drag.dragging_id() == Some(stop_id.as_str()) {
                    self.drag.clear();
                }
                self.trip.itinerary.remove(&stop_id);
                Task::none()
            }
            Message::StatusCycled(stop_id) => {
                self.trip.itinerary.cycle_status(&stop_id);
                Task::none()
            }
            Message::DayShifted(stop_id, delta) => {
                if let Some(stop) = self.trip.itinerary.get(&stop_id) {
                    let day = stop.day.saturating_add_signed(delta).max(1);
                    self.trip.itinerary.set_day(&stop_id, day);
                }
                Task::none()
            }

            Message::SaveRequested => {
                println!("💾 Itinerary saved ({} stops)", self.trip.itinerary.len());
                self.status = "Itinerary saved successfully!".to_string();
                Task::none()
            }
            Message::ShareRequested => {
                match ui::itinerary::share_payload(&self.trip.itinerary) {
                    Ok(json) => {
                        println!("📤 Itinerary copied to clipboard");
                        self.status = "Itinerary copied to clipboard!".to_string();
                        iced::clipboard::write(json)
                    }
                    Err(e) => {
                        eprintln!("⚠️  Could not build share payload: {}", e);
                        self.status = "Could not share the itinerary.".to_string();
                        Task::none()
                    }
                }
            }
            Message::ExportRequested => {
                println!("📄 PDF export requested ({} stops)", self.trip.itinerary.len());
                self.status = "PDF export started!".to_string();
                Task::none()
            }

            Message::ProfileTabSelected(tab) => {
                self.profile.tab = tab;
                Task::none()
            }
            Message::EmailChanged(email) => {
                self.profile.email = email;
                Task::none()
            }
            Message::PasswordChanged(password) => {
                self.profile.password = password;
                Task::none()
            }
            Message::MaxDistanceChanged(distance) => {
                self.profile.max_distance = distance;
                Task::none()
            }
            Message::MetricToggled(metric) => {
                self.profile.use_metric = metric;
                Task::none()
            }
            Message::AccountSaved => {
                self.status = "Account settings saved successfully!".to_string();
                Task::none()
            }
            Message::PreferencesSaved => {
                self.status = "Preferences updated successfully!".to_string();
                Task::none()
            }
            Message::LogoutRequested => {
                self.status = "Logout is mocked in this prototype.".to_string();
                Task::none()
            }
            Message::SavedItineraryDeleted(id) => {
                self.profile.delete_saved(&id);
                self.status = "Itinerary deleted successfully!".to_string();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen: Element<Message> = match self.screen {
            Screen::Landing => ui::landing::view(self),
            Screen::Dashboard => ui::dashboard::view(self),
            Screen::Profile => ui::profile::view(self),
        };

        column![
            container(screen).height(Length::Fill),
            container(text(&self.status).size(13))
                .padding(8)
                .width(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "VOYA Travel Planner",
        Voya::update,
        Voya::view,
    )
    .theme(Voya::theme)
    .window_size((1200.0, 800.0))
    .centered()
    .run_with(Voya::new)
}

/// Simulated POI fetch for a layer
/// Sleeps for a fixed delay so the loading skeletons are visible
async fn fetch_pois(layer: Layer) -> Vec<Poi> {
    tokio::time::sleep(FETCH_DELAY).await;
    mock::pois_for(layer)
}

/// Simulated fetch of the attractions near a stay
async fn fetch_nearby(stay_id: String) -> Vec<Poi> {
    tokio::time::sleep(FETCH_DELAY).await;
    mock::nearby_attractions(&stay_id)
}

/// Simulated geolocation probe
///
/// The prototype always grants; the Result keeps the denial path alive
/// for the caller's logging and fallback.
async fn locate() -> Result<Coordinates, String> {
    tokio::time::sleep(LOCATE_DELAY).await;
    Ok(mock::USER_LOCATION)
}
