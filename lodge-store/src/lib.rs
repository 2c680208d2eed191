pub mod app_config;
pub mod inventory;
pub mod repository;
pub mod desk;

pub use inventory::InventoryStore;
pub use repository::{ReservationError, ReservationRepository};
pub use desk::ReservationDesk;
