/// Hard-coded mock catalog
///
/// The prototype has no backend: every candidate set the dashboard shows,
/// the landing carousel cards, and the profile's saved-itinerary list come
/// from the fixed arrays below. Coordinates are real Paris locations so the
/// mock map and the distance math produce believable numbers.

use crate::state::data::{
    Coordinates, Destination, Layer, Poi, PoiCategory, SavedItinerary,
};

/// Mock location fix returned by the simulated geolocation probe
/// (Place de la Concorde)
pub const USER_LOCATION: Coordinates = Coordinates {
    lon: 2.3212,
    lat: 48.8656,
};

/// Default map center before any location fix
pub const MAP_CENTER: Coordinates = Coordinates {
    lon: 2.3200,
    lat: 48.8625,
};

/// Candidate attractions for the attractions layer
pub fn attractions() -> Vec<Poi> {
    vec![
        Poi::new(
            "a1",
            "Eiffel Tower",
            PoiCategory::Landmark,
            Coordinates::new(2.2945, 48.8584),
            4.7,
            Some(29),
        ),
        Poi::new(
            "a2",
            "Louvre Museum",
            PoiCategory::Museum,
            Coordinates::new(2.3376, 48.8606),
            4.8,
            Some(22),
        ),
        Poi::new(
            "a3",
            "Arc de Triomphe",
            PoiCategory::Landmark,
            Coordinates::new(2.2950, 48.8738),
            4.6,
            Some(16),
        ),
        Poi::new(
            "a4",
            "Musée d'Orsay",
            PoiCategory::Museum,
            Coordinates::new(2.3266, 48.8600),
            4.7,
            Some(16),
        ),
        Poi::new(
            "a5",
            "Luxembourg Gardens",
            PoiCategory::Park,
            Coordinates::new(2.3372, 48.8462),
            4.6,
            None,
        ),
        Poi::new(
            "a6",
            "Tuileries Garden",
            PoiCategory::Park,
            Coordinates::new(2.3266, 48.8634),
            4.4,
            None,
        ),
    ]
}

/// Candidate stays for the stays layer
pub fn stays() -> Vec<Poi> {
    vec![
        Poi::new(
            "s1",
            "Hotel Plaza Athénée",
            PoiCategory::Hotel,
            Coordinates::new(2.3014, 48.8667),
            4.9,
            Some(450),
        ),
        Poi::new(
            "s2",
            "Le Meurice",
            PoiCategory::Hotel,
            Coordinates::new(2.3281, 48.8651),
            4.8,
            Some(420),
        ),
        Poi::new(
            "s3",
            "Hotel George V",
            PoiCategory::Hotel,
            Coordinates::new(2.3006, 48.8689),
            4.9,
            Some(480),
        ),
        Poi::new(
            "s4",
            "Le Village Montmartre",
            PoiCategory::Hostel,
            Coordinates::new(2.3397, 48.8853),
            4.2,
            Some(45),
        ),
        Poi::new(
            "s5",
            "Marais Loft",
            PoiCategory::Apartment,
            Coordinates::new(2.3590, 48.8590),
            4.5,
            Some(130),
        ),
    ]
}

/// The candidate set for a layer
pub fn pois_for(layer: Layer) -> Vec<Poi> {
    match layer {
        Layer::Attractions => attractions(),
        Layer::Stays => stays(),
    }
}

/// Attractions near a given stay, shown by the drill-in view
///
/// Fixed per-stay lists; an unknown stay id gets an empty list.
pub fn nearby_attractions(stay_id: &str) -> Vec<Poi> {
    let ids: &[&str] = match stay_id {
        "s1" => &["a1", "a3"],
        "s2" => &["a2", "a6", "a4"],
        "s3" => &["a3", "a1"],
        "s4" => &["a2"],
        "s5" => &["a2", "a5"],
        _ => &[],
    };

    let catalog = attractions();
    ids.iter()
        .filter_map(|id| catalog.iter().find(|p| p.id == *id).cloned())
        .collect()
}

/// Popular-destination cards on the landing carousel
pub fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            name: "Paris",
            country: "France",
            description: "City of Light and Love",
        },
        Destination {
            name: "Tokyo",
            country: "Japan",
            description: "Modern meets Traditional",
        },
        Destination {
            name: "Santorini",
            country: "Greece",
            description: "Stunning Cycladic Beauty",
        },
        Destination {
            name: "New York",
            country: "USA",
            description: "The City That Never Sleeps",
        },
        Destination {
            name: "Bali",
            country: "Indonesia",
            description: "Tropical Paradise",
        },
        Destination {
            name: "London",
            country: "UK",
            description: "Royal Heritage & Culture",
        },
    ]
}

/// Previously saved itineraries on the profile screen
pub fn saved_itineraries() -> Vec<SavedItinerary> {
    vec![
        SavedItinerary {
            id: "i1".to_string(),
            name: "Paris Weekend".to_string(),
            date: "2024-06-15".to_string(),
            stops: 5,
        },
        SavedItinerary {
            id: "i2".to_string(),
            name: "Tokyo Adventure".to_string(),
            date: "2024-05-22".to_string(),
            stops: 8,
        },
        SavedItinerary {
            id: "i3".to_string(),
            name: "Santorini Getaway".to_string(),
            date: "2024-04-10".to_string(),
            stops: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<String> = attractions()
            .into_iter()
            .chain(stays())
            .map(|p| p.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_every_stay_has_nearby_attractions() {
        for stay in stays() {
            assert!(
                !nearby_attractions(&stay.id).is_empty(),
                "stay {} has no nearby attractions",
                stay.id
            );
        }
        assert!(nearby_attractions("ghost").is_empty());
    }

    #[test]
    fn test_ratings_in_range() {
        for poi in attractions().into_iter().chain(stays()) {
            assert!((0.0..=5.0).contains(&poi.rating));
        }
    }
}
