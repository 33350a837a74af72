/// Dashboard filter parameters for points of interest
///
/// This struct stores the filter configuration applied to the visible
/// candidate set: minimum rating, price range, category flags, and a
/// distance radius around the user's location. Filtering is pure and is
/// recomputed from the full candidate list on every view; nothing is cached.

use super::data::{Coordinates, Poi, PoiCategory};

/// Price slider upper bound in euros; the default range filters nothing
pub const PRICE_MAX: u32 = 500;

/// Radius slider upper bound in km; the default radius filters nothing
/// within the mock city extent
pub const RADIUS_MAX_KM: f32 = 20.0;

/// All filter parameters for the dashboard candidate set
///
/// The default value is the neutral configuration: every candidate passes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Minimum average rating, 0.0 to 5.0
    pub min_rating: f32,

    /// Inclusive price range in euros; candidates without a price
    /// skip this predicate
    pub price_min: u32,
    pub price_max: u32,

    /// Selected category flags; empty means no category filtering
    pub categories: Vec<PoiCategory>,

    /// Radius in km around the user location; inert until a location
    /// fix exists
    pub radius_km: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            price_min: 0,
            price_max: PRICE_MAX,
            categories: Vec::new(),
            radius_km: RADIUS_MAX_KM,
        }
    }
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this represents the neutral configuration (no filtering)
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Reset all parameters to the neutral configuration
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Toggle a category flag on or off
    pub fn set_category(&mut self, category: PoiCategory, enabled: bool) {
        if enabled {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        } else {
            self.categories.retain(|c| *c != category);
        }
    }

    /// Whether a single candidate passes every active predicate
    ///
    /// A candidate passes iff its rating meets the minimum, its price (when
    /// it has one) lies within the range, its category is among the selected
    /// flags (or none are selected), and it lies within the radius of the
    /// user location (when one is known).
    pub fn matches(&self, poi: &Poi, origin: Option<Coordinates>) -> bool {
        if poi.rating < self.min_rating {
            return false;
        }

        if let Some(price) = poi.price {
            if price < self.price_min || price > self.price_max {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&poi.category) {
            return false;
        }

        if let Some(origin) = origin {
            if poi.position.distance_km(&origin) > self.radius_km as f64 {
                return false;
            }
        }

        true
    }

    /// The visible subset of a candidate list, in candidate order
    pub fn apply<'a>(&self, pois: &'a [Poi], origin: Option<Coordinates>) -> Vec<&'a Poi> {
        pois.iter().filter(|p| self.matches(p, origin)).collect()
    }

    /// Short labels for the active filters, shown as badges on the dashboard
    pub fn active_badges(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if self.min_rating > 0.0 {
            badges.push(format!("{:.1}+ ★", self.min_rating));
        }
        if self.price_min > 0 || self.price_max < PRICE_MAX {
            badges.push(format!("€{}–{}", self.price_min, self.price_max));
        }
        for category in &self.categories {
            badges.push(category.label().to_string());
        }
        if self.radius_km < RADIUS_MAX_KM {
            badges.push(format!("≤ {:.0} km", self.radius_km));
        }
        badges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: &str, category: PoiCategory, rating: f32, price: Option<u32>) -> Poi {
        Poi::new(
            id,
            id,
            category,
            Coordinates::new(2.32, 48.86),
            rating,
            price,
        )
    }

    #[test]
    fn test_default_is_unfiltered() {
        let params = FilterParams::default();
        assert!(params.is_unfiltered());
        assert!(params.active_badges().is_empty());

        let all = vec![
            poi("a", PoiCategory::Landmark, 1.0, None),
            poi("b", PoiCategory::Hotel, 5.0, Some(PRICE_MAX)),
        ];
        assert_eq!(params.apply(&all, None).len(), 2);
    }

    #[test]
    fn test_price_excludes_even_when_rating_passes() {
        // minRating 4.5, price range [0, 200]: a 4.9-rated candidate at
        // price 450 is excluded
        let mut params = FilterParams::default();
        params.min_rating = 4.5;
        params.price_min = 0;
        params.price_max = 200;

        let candidate = poi("s1", PoiCategory::Hotel, 4.9, Some(450));
        assert!(!params.matches(&candidate, None));
    }

    #[test]
    fn test_priceless_candidates_skip_price_predicate() {
        let mut params = FilterParams::default();
        params.price_max = 10;

        let free = poi("a", PoiCategory::Park, 4.0, None);
        assert!(params.matches(&free, None));
    }

    #[test]
    fn test_category_flags() {
        let mut params = FilterParams::default();
        let museum = poi("a", PoiCategory::Museum, 4.0, None);
        let park = poi("b", PoiCategory::Park, 4.0, None);

        // No flags selected: everything passes
        assert!(params.matches(&museum, None));
        assert!(params.matches(&park, None));

        params.set_category(PoiCategory::Museum, true);
        assert!(params.matches(&museum, None));
        assert!(!params.matches(&park, None));

        params.set_category(PoiCategory::Museum, false);
        assert!(params.matches(&park, None));
    }

    #[test]
    fn test_set_category_is_idempotent() {
        let mut params = FilterParams::default();
        params.set_category(PoiCategory::Hotel, true);
        params.set_category(PoiCategory::Hotel, true);
        assert_eq!(params.categories.len(), 1);
    }

    #[test]
    fn test_radius_inert_without_origin() {
        let mut params = FilterParams::default();
        params.radius_km = 1.0;

        let far = Poi::new(
            "a",
            "Far",
            PoiCategory::Landmark,
            Coordinates::new(10.0, 50.0),
            4.0,
            None,
        );
        assert!(params.matches(&far, None));
        assert!(!params.matches(&far, Some(Coordinates::new(2.32, 48.86))));
    }

    #[test]
    fn test_apply_keeps_exactly_the_matching_candidates() {
        let mut params = FilterParams::default();
        params.min_rating = 4.0;
        params.price_max = 300;
        params.set_category(PoiCategory::Hotel, true);

        let all = vec![
            poi("pass", PoiCategory::Hotel, 4.5, Some(250)),
            poi("low-rating", PoiCategory::Hotel, 3.9, Some(250)),
            poi("too-pricey", PoiCategory::Hotel, 4.8, Some(450)),
            poi("wrong-kind", PoiCategory::Hostel, 4.8, Some(100)),
        ];

        let visible = params.apply(&all, None);

        // Every survivor satisfies all active predicates, and no
        // satisfying candidate is excluded
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "pass");
        for p in &all {
            assert_eq!(params.matches(p, None), visible.iter().any(|v| v.id == p.id));
        }
    }

    #[test]
    fn test_reset_clears_badges() {
        let mut params = FilterParams::default();
        params.min_rating = 4.5;
        params.price_max = 200;
        params.set_category(PoiCategory::Museum, true);
        params.radius_km = 5.0;
        assert_eq!(params.active_badges().len(), 4);

        params.reset();
        assert!(params.is_unfiltered());
        assert!(params.active_badges().is_empty());
    }
}
