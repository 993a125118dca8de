//! Room catalog routes

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use crate::{
    error::ApiError,
    models::{CreateRoomRequest, UpdateRoomRequest},
    repositories::is_unique_violation,
    state::AppState,
};

/// List all rooms
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.room_repository.list().await.map_err(|e| {
        error!("Failed to list rooms: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(rooms))
}

/// Create a new room
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.capacity <= 0 {
        return Err(ApiError::Validation(
            "Capacity must be a positive integer.".to_string(),
        ));
    }

    let room = state.room_repository.create(&payload).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Validation("A room with this number already exists.".to_string())
        } else {
            error!("Failed to create room: {}", e);
            ApiError::InternalServerError
        }
    })?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// Get a room by ID
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let room = state
        .room_repository
        .find(id)
        .await
        .map_err(|e| {
            error!("Failed to get room: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(room))
}

/// Update a room (PUT and PATCH share the partial-update semantics)
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if matches!(payload.capacity, Some(c) if c <= 0) {
        return Err(ApiError::Validation(
            "Capacity must be a positive integer.".to_string(),
        ));
    }

    let room = state
        .room_repository
        .update(id, &payload)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Validation("A room with this number already exists.".to_string())
            } else {
                error!("Failed to update room: {}", e);
                ApiError::InternalServerError
            }
        })?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(room))
}

/// Delete a room and, through the FK cascade, its bookings
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.room_repository.delete(id).await.map_err(|e| {
        error!("Failed to delete room: {}", e);
        ApiError::InternalServerError
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Room not found".to_string()))
    }
}
