pub mod room;
pub mod catalog;
pub mod data;
pub mod filter;
pub mod pricing;

pub use room::{Room, RoomType, UnknownRoomType};
pub use catalog::{Catalog, CatalogError};
pub use filter::{filter_rooms, FilterSpec};
pub use pricing::PriceRange;
