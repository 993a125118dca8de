//! Booking ledger routes, scoped to the authenticated caller

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{error, info};

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::{CreateBookingRequest, UpdateBookingRequest},
    pricing::quote_booking,
    state::AppState,
};

/// List the caller's bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state
        .booking_repository
        .list_for_user(auth_user.id)
        .await
        .map_err(|e| {
            error!("Failed to list bookings: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(bookings))
}

/// Create a booking for the caller
///
/// The date range is validated and the total price computed here, once;
/// later updates neither re-validate nor re-price.
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let room = state
        .room_repository
        .find(payload.room_id)
        .await
        .map_err(|e| {
            error!("Failed to look up room: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    let quote = quote_booking(
        payload.check_in_date,
        payload.check_out_date,
        room.price_per_night,
        Utc::now().date_naive(),
    )
    .map_err(|e| ApiError::Validation(e.to_string()))?;

    info!(
        "User {} booking room {} for {} nights",
        auth_user.username, room.number, quote.nights
    );

    let booking = state
        .booking_repository
        .create(auth_user.id, &payload, quote.total_price)
        .await
        .map_err(|e| {
            error!("Failed to create booking: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Get one of the caller's bookings
pub async fn get_booking(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state
        .booking_repository
        .find_for_user(id, auth_user.id)
        .await
        .map_err(|e| {
            error!("Failed to get booking: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    Ok(Json(booking))
}

/// Update one of the caller's bookings (PUT and PATCH both partial)
pub async fn update_booking(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state
        .booking_repository
        .update_for_user(id, auth_user.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update booking: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    Ok(Json(booking))
}

/// Delete one of the caller's bookings
pub async fn delete_booking(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .booking_repository
        .delete_for_user(id, auth_user.id)
        .await
        .map_err(|e| {
            error!("Failed to delete booking: {}", e);
            ApiError::InternalServerError
        })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Booking not found".to_string()))
    }
}
