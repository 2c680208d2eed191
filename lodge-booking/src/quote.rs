use serde::{Deserialize, Serialize};
use lodge_catalog::Room;
use crate::models::StayDates;

/// Price of a stay at the room's nightly rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayQuote {
    pub nightly_price: u32,
    pub nights: u32,
    pub total: u64,
}

impl StayQuote {
    pub fn for_stay(room: &Room, dates: &StayDates) -> Self {
        let nights = dates.nights();
        // u32 * u32 always fits in u64
        let total = u64::from(room.price) * u64::from(nights);

        Self {
            nightly_price: room.price,
            nights,
            total,
        }
    }
}
