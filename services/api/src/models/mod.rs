//! API models for entities and request/response payloads

pub mod booking;
pub mod room;
pub mod user;

// Re-export for convenience
pub use booking::{BookingResponse, BookingStatus, CreateBookingRequest, UpdateBookingRequest};
pub use room::{CreateRoomRequest, Room, RoomStatus, RoomType, UpdateRoomRequest};
pub use user::{LoginRequest, RegisterRequest, User, UserResponse};
