use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use lodge_booking::{Booking, BookingStatus, StayDates};
use lodge_catalog::{FilterSpec, PriceRange, Room, RoomType};
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Listing filter as query parameters; `types` is a comma-separated list.
#[derive(Debug, Default, Deserialize)]
pub struct RoomListQuery {
    pub types: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_capacity: Option<u32>,
}

impl RoomListQuery {
    fn is_empty(&self) -> bool {
        self.types.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_capacity.is_none()
    }

    /// Unset bounds fall back to the catalog's price range and one guest.
    fn to_spec(&self, catalog_range: Option<PriceRange>) -> Result<FilterSpec, AppError> {
        let types = match &self.types {
            Some(list) => list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<RoomType>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
            None => Vec::new(),
        };

        let defaults = FilterSpec::default();
        let (min_price, max_price) = match catalog_range {
            Some(range) => (range.min, range.max),
            None => (defaults.min_price, defaults.max_price),
        };
        let min_capacity = defaults.min_capacity;

        Ok(defaults
            .with_types(types)
            .with_price(
                self.min_price.unwrap_or(min_price),
                self.max_price.unwrap_or(max_price),
            )
            .with_min_capacity(self.min_capacity.unwrap_or(min_capacity)))
    }
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub available: bool,
}

/// A booking as shown on a room's calendar, without guest details
#[derive(Debug, Serialize, Deserialize)]
pub struct BookedStay {
    pub id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

impl From<Booking> for BookedStay {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            status: booking.status,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/rooms", get(list_rooms))
        .route("/v1/rooms/featured", get(list_featured_rooms))
        .route("/v1/rooms/available", get(list_available_rooms))
        .route("/v1/rooms/price-range", get(get_price_range))
        .route("/v1/rooms/{id}", get(get_room))
        .route("/v1/rooms/{id}/availability", get(check_availability))
        .route("/v1/rooms/{id}/bookings", get(list_room_bookings))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/rooms
/// Whole catalog, or the filtered subset when any filter parameter is present
async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<Vec<Room>>, AppError> {
    if query.is_empty() {
        return Ok(Json(state.repo.list_rooms().await));
    }

    let spec = query.to_spec(state.repo.price_range().await)?;
    Ok(Json(state.repo.filter_rooms(&spec).await))
}

/// GET /v1/rooms/featured
async fn list_featured_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.repo.list_featured_rooms().await)
}

/// GET /v1/rooms/available
async fn list_available_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.repo.list_available_rooms().await)
}

/// GET /v1/rooms/price-range
async fn get_price_range(State(state): State<AppState>) -> Result<Json<PriceRange>, AppError> {
    state
        .repo
        .price_range()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Catalog is empty".to_string()))
}

/// GET /v1/rooms/:id
async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Room>, AppError> {
    state
        .repo
        .get_room(&room_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Room not found: {}", room_id)))
}

/// GET /v1/rooms/:id/availability
async fn check_availability(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    if state.repo.get_room(&room_id).await.is_none() {
        return Err(AppError::NotFoundError(format!("Room not found: {}", room_id)));
    }

    let dates = StayDates::new(query.check_in, query.check_out)?;
    let available = state.repo.is_available(&room_id, &dates).await;

    Ok(Json(AvailabilityResponse {
        room_id,
        check_in: dates.check_in,
        check_out: dates.check_out,
        available,
    }))
}

/// GET /v1/rooms/:id/bookings
async fn list_room_bookings(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<BookedStay>>, AppError> {
    if state.repo.get_room(&room_id).await.is_none() {
        return Err(AppError::NotFoundError(format!("Room not found: {}", room_id)));
    }

    let stays = state
        .repo
        .list_bookings_for_room(&room_id)
        .await
        .into_iter()
        .map(BookedStay::from)
        .collect();
    Ok(Json(stays))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_to_catalog_range() {
        let query = RoomListQuery {
            min_capacity: Some(2),
            ..RoomListQuery::default()
        };
        let spec = query.to_spec(Some(PriceRange { min: 199, max: 999 })).unwrap();

        assert!(spec.types.is_empty());
        assert_eq!((spec.min_price, spec.max_price, spec.min_capacity), (199, 999, 2));
    }

    #[test]
    fn test_query_parses_type_list() {
        let query = RoomListQuery {
            types: Some("suite, deluxe,".to_string()),
            ..RoomListQuery::default()
        };
        let spec = query.to_spec(None).unwrap();
        assert_eq!(spec.types.len(), 2);
        assert!(spec.types.contains(&RoomType::Deluxe));
        assert_eq!(spec.max_price, u32::MAX);
    }

    #[test]
    fn test_query_rejects_unknown_type() {
        let query = RoomListQuery {
            types: Some("penthouse".to_string()),
            ..RoomListQuery::default()
        };
        assert!(matches!(query.to_spec(None), Err(AppError::BadRequest(_))));
    }
}
