//! Booking repository for database operations
//!
//! Every read and write is scoped to the owning user: a booking id that
//! exists but belongs to someone else behaves exactly like a missing one.

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::models::{
    BookingResponse, BookingStatus, CreateBookingRequest, Room, RoomStatus, RoomType,
    UpdateBookingRequest, UserResponse,
};

/// Booking repository
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

const BOOKING_SELECT: &str = r#"
    SELECT b.id, b.check_in_date, b.check_out_date, b.status, b.total_price,
           b.special_requests, b.created_at, b.updated_at,
           u.id AS user_id, u.username, u.email, u.first_name, u.last_name,
           r.id AS room_id, r.number, r.room_type, r.capacity, r.price_per_night,
           r.status AS room_status, r.description, r.amenities,
           r.created_at AS room_created_at, r.updated_at AS room_updated_at
    FROM bookings b
    JOIN users u ON u.id = b.user_id
    JOIN rooms r ON r.id = b.room_id
"#;

fn map_booking(row: PgRow) -> BookingResponse {
    let status: String = row.get("status");
    let room_type: String = row.get("room_type");
    let room_status: String = row.get("room_status");
    let amenities: Json<Vec<String>> = row.get("amenities");

    BookingResponse {
        id: row.get("id"),
        user: UserResponse {
            id: row.get("user_id"),
            username: row.get("username"),
            email: row.get("email"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
        },
        room: Room {
            id: row.get("room_id"),
            number: row.get("number"),
            room_type: RoomType::from_str(&room_type),
            capacity: row.get("capacity"),
            price_per_night: row.get("price_per_night"),
            status: RoomStatus::from_str(&room_status),
            description: row.get("description"),
            amenities: amenities.0,
            created_at: row.get("room_created_at"),
            updated_at: row.get("room_updated_at"),
        },
        check_in_date: row.get("check_in_date"),
        check_out_date: row.get("check_out_date"),
        status: BookingStatus::from_str(&status),
        total_price: row.get("total_price"),
        special_requests: row.get("special_requests"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's bookings, newest first
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<BookingResponse>> {
        let rows = sqlx::query(&format!(
            "{BOOKING_SELECT} WHERE b.user_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_booking).collect())
    }

    /// Find one of the caller's bookings by ID
    pub async fn find_for_user(&self, id: i64, user_id: i64) -> Result<Option<BookingResponse>> {
        let row = sqlx::query(&format!(
            "{BOOKING_SELECT} WHERE b.id = $1 AND b.user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_booking))
    }

    /// Persist a new booking with its already-computed total price
    pub async fn create(
        &self,
        user_id: i64,
        payload: &CreateBookingRequest,
        total_price: Decimal,
    ) -> Result<BookingResponse> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (user_id, room_id, check_in_date, check_out_date,
                                  total_price, special_requests)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(payload.room_id)
        .bind(payload.check_in_date)
        .bind(payload.check_out_date)
        .bind(total_price)
        .bind(&payload.special_requests)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.get("id");

        let booking = self
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Booking {} vanished after insert", id))?;

        Ok(booking)
    }

    /// Apply a partial update to one of the caller's bookings
    ///
    /// Dates are written as given and the total price is left untouched.
    pub async fn update_for_user(
        &self,
        id: i64,
        user_id: i64,
        payload: &UpdateBookingRequest,
    ) -> Result<Option<BookingResponse>> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET check_in_date = COALESCE($3, check_in_date),
                check_out_date = COALESCE($4, check_out_date),
                status = COALESCE($5, status),
                special_requests = COALESCE($6, special_requests),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(payload.check_in_date)
        .bind(payload.check_out_date)
        .bind(payload.status.map(|s| s.as_str()))
        .bind(payload.special_requests.as_deref())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_for_user(id, user_id).await
    }

    /// Delete one of the caller's bookings
    pub async fn delete_for_user(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
