use uuid::Uuid;
use lodge_booking::{availability, Booking, BookingDraft, StayDates};
use lodge_catalog::{Catalog, Room};

/// Room catalog plus the append-only booking ledger.
///
/// Bookings only ever grow; nothing here updates or removes one. The store
/// does not check that a draft's room exists in the catalog.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    catalog: Catalog,
    bookings: Vec<Booking>,
}

impl InventoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            bookings: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list_rooms(&self) -> &[Room] {
        self.catalog.rooms()
    }

    pub fn get_room(&self, id: &str) -> Option<&Room> {
        self.catalog.get(id)
    }

    pub fn list_featured_rooms(&self) -> Vec<&Room> {
        self.catalog.featured()
    }

    pub fn list_available_rooms(&self) -> Vec<&Room> {
        self.catalog.available()
    }

    /// Record `draft` as a confirmed booking and return it.
    pub fn add_booking(&mut self, draft: BookingDraft) -> Booking {
        let booking = Booking::confirm(draft);
        self.bookings.push(booking.clone());
        booking
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn list_bookings_for_room(&self, room_id: &str) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.room_id == room_id).collect()
    }

    pub fn get_booking(&self, id: &Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    pub fn is_available(&self, room_id: &str, dates: &StayDates) -> bool {
        availability::is_available(&self.bookings, room_id, dates.check_in, dates.check_out)
    }

    /// The confirmed booking that stops `dates` from being reserved, if any.
    pub fn conflict_for(&self, room_id: &str, dates: &StayDates) -> Option<&Booking> {
        availability::first_conflict(&self.bookings, room_id, dates)
    }
}
