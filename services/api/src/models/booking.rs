//! Booking model and related payloads

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Room, UserResponse};

/// Booking lifecycle state; transitions are client-driven, the service
/// never advances a booking on its own (e.g. past check-out does not
/// mark it completed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Pending,
        }
    }
}

/// Booking as returned to the caller, with the owner and the room embedded
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub user: UserResponse,
    pub room: Room,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub special_requests: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for booking creation
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub special_requests: String,
}

/// Partial update of a booking; dates and price are not re-validated
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookingRequest {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_status_round_trip() {
        for s in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::from_str(s.as_str()), s);
        }
    }

    #[test]
    fn unknown_status_defaults_to_pending() {
        assert_eq!(BookingStatus::from_str("archived"), BookingStatus::Pending);
    }

    #[test]
    fn create_request_special_requests_default_empty() {
        let req: CreateBookingRequest = serde_json::from_str(
            r#"{"room_id": 3, "check_in_date": "2025-01-01", "check_out_date": "2025-01-04"}"#,
        )
        .unwrap();

        assert_eq!(req.room_id, 3);
        assert!(req.special_requests.is_empty());
    }
}
