use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use lodge_booking::{Booking, BookingDraft, StayDates};
use lodge_catalog::{FilterSpec, PriceRange, Room};

/// Room and booking access for request handlers
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn list_rooms(&self) -> Vec<Room>;

    async fn get_room(&self, id: &str) -> Option<Room>;

    async fn list_featured_rooms(&self) -> Vec<Room>;

    async fn list_available_rooms(&self) -> Vec<Room>;

    async fn filter_rooms(&self, spec: &FilterSpec) -> Vec<Room>;

    async fn price_range(&self) -> Option<PriceRange>;

    async fn list_bookings_for_room(&self, room_id: &str) -> Vec<Booking>;

    async fn get_booking(&self, id: Uuid) -> Option<Booking>;

    async fn is_available(&self, room_id: &str, dates: &StayDates) -> bool;

    /// Record `draft` unless a confirmed booking already overlaps it.
    async fn reserve(&self, draft: BookingDraft) -> Result<Booking, ReservationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Room {room_id} is not available from {check_in} to {check_out}")]
    Unavailable {
        room_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}
