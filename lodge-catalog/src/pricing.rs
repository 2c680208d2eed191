use serde::{Deserialize, Serialize};
use crate::room::Room;

/// Lowest and highest nightly price across a set of rooms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Price bounds of `rooms`, or `None` for an empty list.
    pub fn of<'a, I>(rooms: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Room>,
    {
        rooms.into_iter().fold(None, |range, room| {
            Some(match range {
                None => PriceRange { min: room.price, max: room.price },
                Some(PriceRange { min, max }) => PriceRange {
                    min: min.min(room.price),
                    max: max.max(room.price),
                },
            })
        })
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}
