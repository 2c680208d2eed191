use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::pricing::PriceRange;
use crate::room::{Room, RoomType};

/// Criteria narrowing a room listing.
///
/// An empty `types` set places no restriction on the room category. Price
/// bounds are inclusive on both ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    #[serde(default)]
    pub types: BTreeSet<RoomType>,
    pub min_price: u32,
    pub max_price: u32,
    pub min_capacity: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            types: BTreeSet::new(),
            min_price: 0,
            max_price: u32::MAX,
            min_capacity: 1,
        }
    }
}

impl FilterSpec {
    /// The reset state of the listing filter: every type, the catalog's own
    /// price bounds and a single guest.
    pub fn for_catalog(rooms: &[Room]) -> Self {
        match PriceRange::of(rooms) {
            Some(range) => Self {
                min_price: range.min,
                max_price: range.max,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = RoomType>,
    {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_price(mut self, min_price: u32, max_price: u32) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_min_capacity(mut self, min_capacity: u32) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    pub fn matches(&self, room: &Room) -> bool {
        if !self.types.is_empty() && !self.types.contains(&room.room_type) {
            return false;
        }
        if room.price < self.min_price || room.price > self.max_price {
            return false;
        }
        room.capacity >= self.min_capacity
    }
}

/// Rooms matching `spec`, in input order.
pub fn filter_rooms<'a>(rooms: &'a [Room], spec: &FilterSpec) -> Vec<&'a Room> {
    let matched: Vec<&Room> = rooms.iter().filter(|room| spec.matches(room)).collect();
    tracing::debug!(
        total = rooms.len(),
        matched = matched.len(),
        "Filtered room listing"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_rooms;

    fn ids(rooms: &[&Room]) -> Vec<String> {
        rooms.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_price_window_excludes_below_minimum() {
        let rooms = sample_rooms();
        let spec = FilterSpec::default().with_price(300, 500).with_min_capacity(2);

        // 299 sits below the window and 999 above it
        assert_eq!(ids(&filter_rooms(&rooms, &spec)), vec!["2", "5", "6"]);
    }

    #[test]
    fn test_single_price_point() {
        let rooms = sample_rooms();
        let spec = FilterSpec::default().with_price(299, 299);
        assert_eq!(ids(&filter_rooms(&rooms, &spec)), vec!["1"]);
    }

    #[test]
    fn test_type_restriction() {
        let rooms = sample_rooms();
        let spec = FilterSpec::for_catalog(&rooms).with_types([RoomType::Suite, RoomType::Presidential]);
        assert_eq!(ids(&filter_rooms(&rooms, &spec)), vec!["2", "4", "6"]);
    }

    #[test]
    fn test_capacity_restriction() {
        let rooms = sample_rooms();
        let spec = FilterSpec::for_catalog(&rooms).with_min_capacity(4);
        assert_eq!(ids(&filter_rooms(&rooms, &spec)), vec!["4", "5"]);
    }

    #[test]
    fn test_catalog_reset_matches_everything() {
        let rooms = sample_rooms();
        let spec = FilterSpec::for_catalog(&rooms);
        assert_eq!(spec.min_price, 199);
        assert_eq!(spec.max_price, 999);
        assert_eq!(filter_rooms(&rooms, &spec).len(), rooms.len());
    }

    #[test]
    fn test_no_match_is_empty() {
        let rooms = sample_rooms();
        let spec = FilterSpec::default().with_min_capacity(6);
        assert!(filter_rooms(&rooms, &spec).is_empty());
    }

    #[test]
    fn test_widening_price_window_never_drops_rooms() {
        let rooms = sample_rooms();
        let windows = [(300, 400), (250, 450), (200, 600), (0, 1000)];

        let mut previous: Vec<String> = Vec::new();
        for (min, max) in windows {
            let spec = FilterSpec::default().with_price(min, max).with_min_capacity(2);
            let current = ids(&filter_rooms(&rooms, &spec));
            assert!(previous.iter().all(|id| current.contains(id)), "{min}..={max} dropped a room");
            previous = current;
        }
        assert_eq!(previous.len(), rooms.len());
    }

    #[test]
    fn test_input_is_untouched() {
        let rooms = sample_rooms();
        let before = rooms.clone();
        let _ = filter_rooms(&rooms, &FilterSpec::default().with_types([RoomType::Standard]));
        assert_eq!(rooms, before);
    }
}
