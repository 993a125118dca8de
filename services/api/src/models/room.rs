//! Room model and related payloads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lodging unit category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Triple,
    Dorm,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Triple => "triple",
            RoomType::Dorm => "dorm",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "double" => RoomType::Double,
            "triple" => RoomType::Triple,
            "dorm" => RoomType::Dorm,
            _ => RoomType::Single,
        }
    }
}

/// Room availability state, set administratively and never derived
/// from bookings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Reserved => "reserved",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "occupied" => RoomStatus::Occupied,
            "maintenance" => RoomStatus::Maintenance,
            "reserved" => RoomStatus::Reserved,
            _ => RoomStatus::Available,
        }
    }
}

/// Room entity
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: i64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: i32,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
    pub description: String,
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for room creation
#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: i32,
    pub price_per_night: Decimal,
    #[serde(default = "default_room_status")]
    pub status: RoomStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}

fn default_room_status() -> RoomStatus {
    RoomStatus::Available
}

/// Partial update of a room; absent fields keep their stored values
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoomRequest {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub capacity: Option<i32>,
    pub price_per_night: Option<Decimal>,
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_round_trip() {
        for t in [
            RoomType::Single,
            RoomType::Double,
            RoomType::Triple,
            RoomType::Dorm,
        ] {
            assert_eq!(RoomType::from_str(t.as_str()), t);
        }
    }

    #[test]
    fn room_status_round_trip() {
        for s in [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
            RoomStatus::Reserved,
        ] {
            assert_eq!(RoomStatus::from_str(s.as_str()), s);
        }
    }

    #[test]
    fn room_serializes_type_field_name() {
        let json = serde_json::to_value(RoomType::Dorm).unwrap();
        assert_eq!(json, serde_json::json!("dorm"));
    }
}
