//! Room repository for database operations

use anyhow::Result;
use sqlx::types::Json;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::models::{CreateRoomRequest, Room, RoomStatus, RoomType, UpdateRoomRequest};

/// Room repository
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

fn map_room(row: PgRow) -> Room {
    let room_type: String = row.get("room_type");
    let status: String = row.get("status");
    let amenities: Json<Vec<String>> = row.get("amenities");

    Room {
        id: row.get("id"),
        number: row.get("number"),
        room_type: RoomType::from_str(&room_type),
        capacity: row.get("capacity"),
        price_per_night: row.get("price_per_night"),
        status: RoomStatus::from_str(&status),
        description: row.get("description"),
        amenities: amenities.0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

const ROOM_COLUMNS: &str = "id, number, room_type, capacity, price_per_night, status, \
                            description, amenities, created_at, updated_at";

impl RoomRepository {
    /// Create a new room repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all rooms, ordered by room number
    pub async fn list(&self) -> Result<Vec<Room>> {
        let rows = sqlx::query(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY number"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_room).collect())
    }

    /// Find a room by ID
    pub async fn find(&self, id: i64) -> Result<Option<Room>> {
        let row = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(map_room))
    }

    /// Create a new room
    pub async fn create(&self, payload: &CreateRoomRequest) -> Result<Room> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO rooms (number, room_type, capacity, price_per_night,
                               status, description, amenities)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ROOM_COLUMNS}
            "#
        ))
        .bind(&payload.number)
        .bind(payload.room_type.as_str())
        .bind(payload.capacity)
        .bind(payload.price_per_night)
        .bind(payload.status.as_str())
        .bind(&payload.description)
        .bind(Json(&payload.amenities))
        .fetch_one(&self.pool)
        .await?;

        Ok(map_room(row))
    }

    /// Apply a partial update; absent fields keep their stored values
    pub async fn update(&self, id: i64, payload: &UpdateRoomRequest) -> Result<Option<Room>> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE rooms
            SET number = COALESCE($2, number),
                room_type = COALESCE($3, room_type),
                capacity = COALESCE($4, capacity),
                price_per_night = COALESCE($5, price_per_night),
                status = COALESCE($6, status),
                description = COALESCE($7, description),
                amenities = COALESCE($8, amenities),
                updated_at = now()
            WHERE id = $1
            RETURNING {ROOM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(payload.number.as_deref())
        .bind(payload.room_type.map(|t| t.as_str()))
        .bind(payload.capacity)
        .bind(payload.price_per_night)
        .bind(payload.status.map(|s| s.as_str()))
        .bind(payload.description.as_deref())
        .bind(payload.amenities.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_room))
    }

    /// Delete a room; dependent bookings go with it (FK cascade)
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
