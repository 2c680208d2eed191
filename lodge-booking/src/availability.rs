use chrono::NaiveDate;
use crate::models::{Booking, StayDates};

/// Whether `room_id` is free for `[check_in, check_out)`.
///
/// Only confirmed bookings for the same room block. The caller must have
/// checked `check_out > check_in`; an inverted range gives a meaningless answer.
pub fn is_available<'a, I>(bookings: I, room_id: &str, check_in: NaiveDate, check_out: NaiveDate) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    let candidate = StayDates { check_in, check_out };
    first_conflict(bookings, room_id, &candidate).is_none()
}

/// The first confirmed booking for `room_id` overlapping `candidate`, in scan order.
pub fn first_conflict<'a, I>(bookings: I, room_id: &str, candidate: &StayDates) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings.into_iter().find(|booking| {
        booking.room_id == room_id && booking.is_confirmed() && booking.stay().overlaps(candidate)
    })
}
