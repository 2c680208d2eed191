use std::collections::HashMap;
use crate::data::sample_rooms;
use crate::room::Room;

/// Immutable room catalog with lookup by id.
///
/// Rooms keep the order they were supplied in; every listing preserves it.
#[derive(Debug, Clone)]
pub struct Catalog {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive price or capacity.
    pub fn new(rooms: Vec<Room>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(rooms.len());

        for (position, room) in rooms.iter().enumerate() {
            if room.price == 0 {
                return Err(CatalogError::InvalidPrice(room.id.clone()));
            }
            if room.capacity == 0 {
                return Err(CatalogError::InvalidCapacity(room.id.clone()));
            }
            if index.insert(room.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateRoomId(room.id.clone()));
            }
        }

        Ok(Self { rooms, index })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.index.get(id).and_then(|&position| self.rooms.get(position))
    }

    pub fn featured(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.featured).collect()
    }

    pub fn available(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.available).collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let rooms = sample_rooms();
        let index = rooms
            .iter()
            .enumerate()
            .map(|(position, room)| (room.id.clone(), position))
            .collect();
        Self { rooms, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate room id: {0}")]
    DuplicateRoomId(String),

    #[error("Room {0} must have a positive nightly price")]
    InvalidPrice(String),

    #[error("Room {0} must sleep at least one guest")]
    InvalidCapacity(String),
}
