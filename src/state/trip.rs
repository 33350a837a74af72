/// Shared trip state and itinerary operations
///
/// The trip state is the single session-lifetime container read and mutated
/// by every screen: current search text, the selected POI layer, the ordered
/// itinerary, and the itinerary panel visibility. Nothing here is persisted;
/// the state is created at startup and discarded on exit.

use thiserror::Error;

use super::data::{Layer, Stop, StopStatus};

/// Errors from itinerary mutations
///
/// Only `add` can fail, and only on an id collision the generator is
/// supposed to prevent. Everything else clamps or no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("a stop with id `{0}` is already in the itinerary")]
    DuplicateId(String),
}

/// The ordered stop sequence and its derived groupings
///
/// Sequence order is the user-visible visit order and carries meaning:
/// every operation except `reorder` preserves it. Stop ids are unique at
/// all times; the internal counter is never reused, so ids stay stable
/// even after removals.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    stops: Vec<Stop>,
    next_id: u64,
}

/// Minimum number of day groups shown, so empty trailing days
/// remain visible for planning
const MIN_DAY_GROUPS: u32 = 3;

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh stop id, unique for the lifetime of the itinerary
    pub fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("stop-{}", self.next_id)
    }

    /// Append a stop to the end of the sequence
    ///
    /// Fails with `DuplicateId` if a stop with the same id already exists.
    /// The id generator makes collisions impossible for ids it produced,
    /// but the guard stays: a duplicate would break every id-keyed
    /// operation below.
    pub fn add(&mut self, stop: Stop) -> Result<(), ItineraryError> {
        if self.stops.iter().any(|s| s.id == stop.id) {
            return Err(ItineraryError::DuplicateId(stop.id));
        }
        self.stops.push(stop);
        Ok(())
    }

    /// Remove the stop with the given id; no-op if absent
    pub fn remove(&mut self, id: &str) {
        self.stops.retain(|s| s.id != id);
    }

    /// Move the stop with the given id to `target_index`
    ///
    /// Models drag-and-drop: the stop is taken out of the sequence and
    /// reinserted at the target position, clamped to `[0, len - 1]`, in one
    /// step. No-op if the id is absent.
    pub fn reorder(&mut self, id: &str, target_index: usize) {
        let Some(from) = self.position_of(id) else {
            return;
        };
        let stop = self.stops.remove(from);
        let target = target_index.min(self.stops.len());
        self.stops.insert(target, stop);
    }

    /// Set a stop's status directly; no-op if absent
    pub fn set_status(&mut self, id: &str, status: StopStatus) {
        if let Some(stop) = self.stops.iter_mut().find(|s| s.id == id) {
            stop.status = status;
        }
    }

    /// Advance a stop's status one step in the cycle; no-op if absent
    pub fn cycle_status(&mut self, id: &str) {
        if let Some(stop) = self.stops.iter_mut().find(|s| s.id == id) {
            stop.status = stop.status.next();
        }
    }

    /// Reassign a stop to a travel day, clamped to >= 1; no-op if absent
    pub fn set_day(&mut self, id: &str, day: u32) {
        if let Some(stop) = self.stops.iter_mut().find(|s| s.id == id) {
            stop.day = day.max(1);
        }
    }

    /// Derived day grouping, purely a read view
    ///
    /// Returns days `1..=max(3, highest day present)` with each day's
    /// stops in master-sequence order. Days with no stops appear as empty
    /// groups so they stay visible for planning. Every stop lands in
    /// exactly one group.
    pub fn group_by_day(&self) -> Vec<(u32, Vec<&Stop>)> {
        let last_day = self
            .stops
            .iter()
            .map(|s| s.day)
            .max()
            .unwrap_or(0)
            .max(MIN_DAY_GROUPS);

        (1..=last_day)
            .map(|day| {
                let group: Vec<&Stop> =
                    self.stops.iter().filter(|s| s.day == day).collect();
                (day, group)
            })
            .collect()
    }

    /// Index of the stop with the given id in the master sequence
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total route length in km, summing great-circle legs in visit order
    pub fn total_distance_km(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|pair| pair[0].position.distance_km(&pair[1].position))
            .sum()
    }
}

/// The shared, session-lifetime state read and mutated by all screens
#[derive(Debug, Clone)]
pub struct TripState {
    /// Current free-text destination query
    pub search_query: String,
    /// POI layer shown on the dashboard
    pub selected_layer: Layer,
    pub itinerary: Itinerary,
    /// Whether the itinerary panel is open
    pub itinerary_open: bool,
}

impl TripState {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            selected_layer: Layer::Attractions,
            itinerary: Itinerary::new(),
            itinerary_open: false,
        }
    }
}

impl Default for TripState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Coordinates, StopKind};

    fn stop(id: &str, day: u32) -> Stop {
        Stop {
            id: id.to_string(),
            name: format!("Stop {}", id),
            kind: StopKind::Attraction,
            position: Coordinates::new(2.2945, 48.8584),
            day,
            status: StopStatus::default(),
        }
    }

    #[test]
    fn test_add_then_remove_restores_sequence() {
        let mut it = Itinerary::new();
        it.add(stop("a", 1)).unwrap();
        it.add(stop("b", 1)).unwrap();
        let before: Vec<String> = it.stops().iter().map(|s| s.id.clone()).collect();

        it.add(stop("c", 2)).unwrap();
        it.remove("c");

        let after: Vec<String> = it.stops().iter().map(|s| s.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_add_duplicate_id_fails() {
        let mut it = Itinerary::new();
        it.add(stop("x5", 1)).unwrap();

        let err = it.add(stop("x5", 2)).unwrap_err();
        assert_eq!(err, ItineraryError::DuplicateId("x5".to_string()));
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut it = Itinerary::new();
        it.add(stop("a", 1)).unwrap();
        it.remove("ghost");
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_reorder_preserves_multiset() {
        let mut it = Itinerary::new();
        for id in ["a", "b", "c", "d"] {
            it.add(stop(id, 1)).unwrap();
        }
        let mut before: Vec<Stop> = it.stops().to_vec();

        it.reorder("d", 0);

        assert_eq!(it.len(), 4);
        let mut after: Vec<Stop> = it.stops().to_vec();
        before.sort_by(|a, b| a.id.cmp(&b.id));
        after.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(before, after);

        let order: Vec<&str> = it.stops().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_reorder_clamps_target_index() {
        let mut it = Itinerary::new();
        for id in ["a", "b", "c"] {
            it.add(stop(id, 1)).unwrap();
        }

        it.reorder("a", 99);
        let order: Vec<&str> = it.stops().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_absent_is_noop() {
        let mut it = Itinerary::new();
        it.add(stop("a", 1)).unwrap();
        it.add(stop("b", 1)).unwrap();

        it.reorder("ghost", 0);
        let order: Vec<&str> = it.stops().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_cycle_status_three_times_round_trips() {
        let mut it = Itinerary::new();
        it.add(stop("a", 1)).unwrap();
        let original = it.get("a").unwrap().status;

        it.cycle_status("a");
        it.cycle_status("a");
        it.cycle_status("a");

        assert_eq!(it.get("a").unwrap().status, original);
    }

    #[test]
    fn test_set_status_direct() {
        let mut it = Itinerary::new();
        it.add(stop("a", 1)).unwrap();

        it.set_status("a", StopStatus::Locked);
        assert_eq!(it.get("a").unwrap().status, StopStatus::Locked);

        // Absent id: no-op, no panic
        it.set_status("ghost", StopStatus::Visited);
    }

    #[test]
    fn test_set_day_clamps_to_one() {
        let mut it = Itinerary::new();
        it.add(stop("a", 2)).unwrap();

        it.set_day("a", 0);
        assert_eq!(it.get("a").unwrap().day, 1);

        it.set_day("a", 5);
        assert_eq!(it.get("a").unwrap().day, 5);
    }

    #[test]
    fn test_group_by_day_partition() {
        let mut it = Itinerary::new();
        it.add(stop("a", 1)).unwrap();
        it.add(stop("b", 2)).unwrap();
        it.add(stop("c", 1)).unwrap();
        it.add(stop("d", 2)).unwrap();

        let groups = it.group_by_day();

        // Concatenating the groups in day order neither drops nor
        // duplicates a stop
        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|(_, stops)| stops.iter().map(|s| s.id.as_str()))
            .collect();
        assert_eq!(flattened.len(), it.len());

        // Within a day, master-sequence order is preserved
        assert_eq!(flattened, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_group_by_day_shows_at_least_three_days() {
        let it = Itinerary::new();
        let groups = it.group_by_day();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|(_, stops)| stops.is_empty()));

        let mut it = Itinerary::new();
        it.add(stop("a", 5)).unwrap();
        let groups = it.group_by_day();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[4].1.len(), 1);
    }

    #[test]
    fn test_reorder_scenario_with_day_groups() {
        // Itinerary = [A(day1), B(day1), C(day2)]; reorder(A, 1) -> [B, A, C]
        let mut it = Itinerary::new();
        it.add(stop("A", 1)).unwrap();
        it.add(stop("B", 1)).unwrap();
        it.add(stop("C", 2)).unwrap();

        it.reorder("A", 1);

        let order: Vec<&str> = it.stops().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);

        let groups = it.group_by_day();
        let day1: Vec<&str> = groups[0].1.iter().map(|s| s.id.as_str()).collect();
        let day2: Vec<&str> = groups[1].1.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(day1, vec!["B", "A"]);
        assert_eq!(day2, vec!["C"]);
        assert!(groups[2].1.is_empty());
    }

    #[test]
    fn test_next_id_stays_unique_after_removal() {
        let mut it = Itinerary::new();
        let first = it.next_id();
        it.add(stop(&first, 1)).unwrap();
        it.remove(&first);

        let second = it.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_total_distance_sums_legs() {
        let mut it = Itinerary::new();
        assert_eq!(it.total_distance_km(), 0.0);

        let mut eiffel = stop("a", 1);
        eiffel.position = Coordinates::new(2.2945, 48.8584);
        let mut louvre = stop("b", 1);
        louvre.position = Coordinates::new(2.3376, 48.8606);
        it.add(eiffel).unwrap();
        it.add(louvre).unwrap();

        let d = it.total_distance_km();
        assert!(d > 3.0 && d < 3.4);
    }
}
