use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use lodge_booking::{Booking, BookingRequest, StayPolicy, StayQuote};
use lodge_catalog::Room;
use crate::error::AppError;
use crate::state::AppState;

/// A recorded booking with the room and price it was made for
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    pub booking: Booking,
    pub room: Option<Room>,
    pub quote: Option<StayQuote>,
}

impl ConfirmationResponse {
    fn new(booking: Booking, room: Option<Room>) -> Self {
        let quote = room.as_ref().map(|r| StayQuote::for_stay(r, &booking.stay()));
        Self { booking, room, quote }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking))
        .route("/v1/bookings/{id}", get(get_booking))
}

fn stay_policy(state: &AppState, today: NaiveDate) -> StayPolicy {
    StayPolicy {
        today,
        min_stay_nights: state.business_rules.min_stay_nights,
        allow_past_check_in: state.business_rules.allow_past_check_in,
    }
}

/// POST /v1/bookings
/// Validate the guest's request and record it if the room is free
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<ConfirmationResponse>), AppError> {
    let room = state
        .repo
        .get_room(&req.room_id)
        .await
        .ok_or_else(|| AppError::NotFoundError(format!("Room not found: {}", req.room_id)))?;

    let policy = stay_policy(&state, Utc::now().date_naive());
    let draft = req.validate(&room, &policy)?;
    let booking = state.repo.reserve(draft).await?;

    Ok((StatusCode::CREATED, Json(ConfirmationResponse::new(booking, Some(room)))))
}

/// GET /v1/bookings/:id
/// Confirmation details for a recorded booking
async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let booking = state
        .repo
        .get_booking(booking_id)
        .await
        .ok_or_else(|| AppError::NotFoundError(format!("Booking not found: {}", booking_id)))?;

    let room = state.repo.get_room(&booking.room_id).await;
    Ok(Json(ConfirmationResponse::new(booking, room)))
}
