use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use lodge_booking::{Booking, BookingDraft, StayDates};
use lodge_catalog::{filter_rooms, Catalog, FilterSpec, PriceRange, Room};
use crate::inventory::InventoryStore;
use crate::repository::{ReservationError, ReservationRepository};

/// Shared handle to an [`InventoryStore`] for concurrent callers.
///
/// `reserve` checks availability and appends under one write lock, so two
/// overlapping requests for the same room can never both be recorded.
#[derive(Clone, Default)]
pub struct ReservationDesk {
    store: Arc<RwLock<InventoryStore>>,
}

impl ReservationDesk {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(InventoryStore::new(catalog))
    }
}

#[async_trait]
impl ReservationRepository for ReservationDesk {
    async fn list_rooms(&self) -> Vec<Room> {
        self.store.read().await.list_rooms().to_vec()
    }

    async fn get_room(&self, id: &str) -> Option<Room> {
        self.store.read().await.get_room(id).cloned()
    }

    async fn list_featured_rooms(&self) -> Vec<Room> {
        self.store.read().await.list_featured_rooms().into_iter().cloned().collect()
    }

    async fn list_available_rooms(&self) -> Vec<Room> {
        self.store.read().await.list_available_rooms().into_iter().cloned().collect()
    }

    async fn filter_rooms(&self, spec: &FilterSpec) -> Vec<Room> {
        let store = self.store.read().await;
        filter_rooms(store.list_rooms(), spec).into_iter().cloned().collect()
    }

    async fn price_range(&self) -> Option<PriceRange> {
        PriceRange::of(self.store.read().await.list_rooms())
    }

    async fn list_bookings_for_room(&self, room_id: &str) -> Vec<Booking> {
        self.store
            .read()
            .await
            .list_bookings_for_room(room_id)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn get_booking(&self, id: Uuid) -> Option<Booking> {
        self.store.read().await.get_booking(&id).cloned()
    }

    async fn is_available(&self, room_id: &str, dates: &StayDates) -> bool {
        self.store.read().await.is_available(room_id, dates)
    }

    async fn reserve(&self, draft: BookingDraft) -> Result<Booking, ReservationError> {
        let mut store = self.store.write().await;
        let dates = draft.stay();

        if let Some(existing) = store.conflict_for(&draft.room_id, &dates) {
            tracing::warn!(
                room_id = %draft.room_id,
                check_in = %dates.check_in,
                check_out = %dates.check_out,
                blocking_booking = %existing.id,
                "Rejected overlapping booking"
            );
            return Err(ReservationError::Unavailable {
                room_id: draft.room_id,
                check_in: dates.check_in,
                check_out: dates.check_out,
            });
        }

        let booking = store.add_booking(draft);
        tracing::info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            nights = dates.nights(),
            "Booking confirmed"
        );
        Ok(booking)
    }
}
