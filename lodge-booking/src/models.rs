use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use lodge_shared::Masked;

/// Booking status.
///
/// Bookings are recorded as `Confirmed` and never transition afterwards.
/// `Pending` and `Cancelled` exist so records from other systems can be
/// represented; nothing in this workspace produces them, and the
/// availability check ignores both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Half-open stay `[check_in, check_out)`: the guest leaves on `check_out`,
/// so another stay may begin that same day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, InvalidStayDates> {
        if check_out <= check_in {
            return Err(InvalidStayDates { check_in, check_out });
        }
        Ok(Self { check_in, check_out })
    }

    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Half-open overlap: `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Check-out {check_out} must be after check-in {check_in}")]
pub struct InvalidStayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// A guest's reservation of one room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub room_id: String,
    pub guest_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Record a draft as a confirmed booking with a fresh id.
    pub fn confirm(draft: BookingDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id: draft.room_id,
            guest_name: draft.guest_name,
            email: draft.email,
            phone: draft.phone,
            check_in: draft.check_in,
            check_out: draft.check_out,
            guests: draft.guests,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    pub fn stay(&self) -> StayDates {
        StayDates {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

/// Booking fields supplied by the caller; id, status and timestamp are
/// assigned when the booking is recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    pub room_id: String,
    pub guest_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl BookingDraft {
    pub fn stay(&self) -> StayDates {
        StayDates {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}
