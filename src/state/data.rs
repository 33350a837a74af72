/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the mock catalog and the UI layer.

use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair in decimal degrees
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance to another point in kilometers (haversine)
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

/// The point-of-interest category shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Attractions,
    Stays,
}

impl Layer {
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Attractions => "attractions",
            Layer::Stays => "stays",
        }
    }

    /// The stop kind produced when adding a POI from this layer
    pub fn stop_kind(&self) -> StopKind {
        match self {
            Layer::Attractions => StopKind::Attraction,
            Layer::Stays => StopKind::Stay,
        }
    }
}

/// What an itinerary stop is
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopKind {
    Attraction,
    Stay,
}

impl StopKind {
    pub fn label(&self) -> &'static str {
        match self {
            StopKind::Attraction => "Attraction",
            StopKind::Stay => "Stay",
        }
    }
}

/// Visit status of an itinerary stop
///
/// A closed 3-cycle: Pending → Visited → Locked → Pending.
/// Transitions happen only through explicit cycle/set calls.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopStatus {
    #[default]
    Pending,
    Visited,
    Locked,
}

impl StopStatus {
    /// The next status in the cycle
    pub fn next(&self) -> StopStatus {
        match self {
            StopStatus::Pending => StopStatus::Visited,
            StopStatus::Visited => StopStatus::Locked,
            StopStatus::Locked => StopStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StopStatus::Pending => "Pending",
            StopStatus::Visited => "Visited",
            StopStatus::Locked => "Locked",
        }
    }

    /// Icon shown on the status control in the itinerary panel
    pub fn icon(&self) -> &'static str {
        match self {
            StopStatus::Pending => "○",
            StopStatus::Visited => "●",
            StopStatus::Locked => "🔒",
        }
    }
}

/// One itinerary entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique id, generated by the itinerary and stable for the stop's lifetime
    pub id: String,
    /// Display label
    pub name: String,
    pub kind: StopKind,
    pub position: Coordinates,
    /// Travel day the stop belongs to, always >= 1
    pub day: u32,
    pub status: StopStatus,
}

impl Stop {
    /// Build a stop from a catalog POI; day defaults to 1, status to pending
    pub fn from_poi(id: String, poi: &Poi, kind: StopKind) -> Self {
        Self {
            id,
            name: poi.name.clone(),
            kind,
            position: poi.position,
            day: 1,
            status: StopStatus::default(),
        }
    }
}

/// Fine-grained POI type used by the dashboard filter flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoiCategory {
    // Attractions
    Landmark,
    Museum,
    Park,
    // Stays
    Hotel,
    Hostel,
    Apartment,
}

impl PoiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PoiCategory::Landmark => "Landmark",
            PoiCategory::Museum => "Museum",
            PoiCategory::Park => "Park",
            PoiCategory::Hotel => "Hotel",
            PoiCategory::Hostel => "Hostel",
            PoiCategory::Apartment => "Apartment",
        }
    }

    /// The filter flags offered for a layer
    pub fn for_layer(layer: Layer) -> &'static [PoiCategory] {
        match layer {
            Layer::Attractions => &[
                PoiCategory::Landmark,
                PoiCategory::Museum,
                PoiCategory::Park,
            ],
            Layer::Stays => &[
                PoiCategory::Hotel,
                PoiCategory::Hostel,
                PoiCategory::Apartment,
            ],
        }
    }
}

/// A mock point of interest shown on the map dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Catalog id (distinct namespace from itinerary stop ids)
    pub id: String,
    pub name: String,
    pub category: PoiCategory,
    pub position: Coordinates,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
    /// Price in euros (per night for stays, per ticket for attractions);
    /// None for free attractions
    pub price: Option<u32>,
}

impl Poi {
    pub fn new(
        id: &str,
        name: &str,
        category: PoiCategory,
        position: Coordinates,
        rating: f32,
        price: Option<u32>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            position,
            rating,
            price,
        }
    }
}

/// A popular-destination card on the landing carousel
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: &'static str,
    pub country: &'static str,
    pub description: &'static str,
}

/// A previously saved itinerary listed on the profile screen (mock)
#[derive(Debug, Clone, PartialEq)]
pub struct SavedItinerary {
    pub id: String,
    pub name: String,
    /// Creation date, ISO formatted
    pub date: String,
    pub stops: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle_length_three() {
        let start = StopStatus::Pending;
        let cycled = start.next().next().next();
        assert_eq!(start, cycled);

        assert_eq!(StopStatus::Pending.next(), StopStatus::Visited);
        assert_eq!(StopStatus::Visited.next(), StopStatus::Locked);
        assert_eq!(StopStatus::Locked.next(), StopStatus::Pending);
    }

    #[test]
    fn test_haversine_sanity() {
        // Eiffel Tower to the Louvre is roughly 3.2 km
        let eiffel = Coordinates::new(2.2945, 48.8584);
        let louvre = Coordinates::new(2.3376, 48.8606);

        let d = eiffel.distance_km(&louvre);
        assert!(d > 3.0 && d < 3.4, "unexpected distance: {}", d);

        // Symmetric, and zero for identical points
        assert!((d - louvre.distance_km(&eiffel)).abs() < 1e-9);
        assert_eq!(eiffel.distance_km(&eiffel), 0.0);
    }

    #[test]
    fn test_layer_stop_kind() {
        assert_eq!(Layer::Attractions.stop_kind(), StopKind::Attraction);
        assert_eq!(Layer::Stays.stop_kind(), StopKind::Stay);
    }
}
