//! Integration tests for the hostel repositories
//!
//! These tests need a live PostgreSQL with the migrations applied, so they
//! are ignored by default; run with `cargo test -- --ignored` against a
//! provisioned environment. Records are tagged with a nanosecond suffix so
//! runs do not collide on the unique columns.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use api::models::{
    CreateBookingRequest, CreateRoomRequest, RegisterRequest, Room, RoomStatus, RoomType,
    UpdateBookingRequest, User,
};
use api::repositories::{BookingRepository, RoomRepository, UserRepository};
use common::database::{DatabaseConfig, init_pool};

fn unique_tag() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before the epoch")
        .as_nanos()
}

async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let pool = init_pool(&DatabaseConfig::from_env()?).await?;
    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}

async fn create_test_user(
    users: &UserRepository,
    name: &str,
    tag: u128,
) -> Result<User, Box<dyn std::error::Error>> {
    let user = users
        .create(&RegisterRequest {
            username: format!("{name}_{tag}"),
            email: format!("{name}_{tag}@example.com"),
            password: "longenough".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        })
        .await?;
    Ok(user)
}

async fn create_test_room(
    rooms: &RoomRepository,
    tag: u128,
) -> Result<Room, Box<dyn std::error::Error>> {
    let room = rooms
        .create(&CreateRoomRequest {
            // number is VARCHAR(10); keep the tag within nine digits
            number: format!("T{}", tag % 1_000_000_000),
            room_type: RoomType::Double,
            capacity: 2,
            price_per_night: Decimal::new(10000, 2),
            status: RoomStatus::Available,
            description: String::new(),
            amenities: vec![],
        })
        .await?;
    Ok(room)
}

/// A booking is invisible to every principal except its owner: reads,
/// updates, and deletes against another user's booking id all behave as
/// if the row did not exist.
#[tokio::test]
#[ignore = "requires running PostgreSQL"]
async fn bookings_are_scoped_to_their_owner() -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;

    let users = UserRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool.clone());
    let bookings = BookingRepository::new(pool.clone());

    let tag = unique_tag();
    let owner = create_test_user(&users, "owner", tag).await?;
    let other = create_test_user(&users, "other", tag).await?;
    let room = create_test_room(&rooms, tag).await?;

    let check_in = Utc::now().date_naive() + Duration::days(30);
    let booking = bookings
        .create(
            owner.id,
            &CreateBookingRequest {
                room_id: room.id,
                check_in_date: check_in,
                check_out_date: check_in + Duration::days(3),
                special_requests: String::new(),
            },
            Decimal::new(30000, 2),
        )
        .await?;

    // The owner sees their booking
    assert!(bookings.find_for_user(booking.id, owner.id).await?.is_some());

    // Another user gets nothing back from any scoped operation
    assert!(bookings.find_for_user(booking.id, other.id).await?.is_none());
    assert!(
        bookings
            .update_for_user(
                booking.id,
                other.id,
                &UpdateBookingRequest {
                    special_requests: Some("late arrival".to_string()),
                    ..Default::default()
                },
            )
            .await?
            .is_none()
    );
    assert!(!bookings.delete_for_user(booking.id, other.id).await?);

    // And none of those attempts touched the owner's record
    let unchanged = bookings
        .find_for_user(booking.id, owner.id)
        .await?
        .expect("booking still present for its owner");
    assert!(unchanged.special_requests.is_empty());

    // Clean up; removing the users takes the booking with them
    sqlx::query("DELETE FROM users WHERE id = $1 OR id = $2")
        .bind(owner.id)
        .bind(other.id)
        .execute(&pool)
        .await?;
    rooms.delete(room.id).await?;

    Ok(())
}

/// Deleting a room removes its dependent bookings through the FK cascade.
#[tokio::test]
#[ignore = "requires running PostgreSQL"]
async fn deleting_a_room_cascades_to_its_bookings() -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;

    let users = UserRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool.clone());
    let bookings = BookingRepository::new(pool.clone());

    let tag = unique_tag();
    let guest = create_test_user(&users, "guest", tag).await?;
    let room = create_test_room(&rooms, tag).await?;

    let check_in = Utc::now().date_naive() + Duration::days(7);
    let booking = bookings
        .create(
            guest.id,
            &CreateBookingRequest {
                room_id: room.id,
                check_in_date: check_in,
                check_out_date: check_in + Duration::days(1),
                special_requests: String::new(),
            },
            Decimal::new(10000, 2),
        )
        .await?;

    assert!(rooms.delete(room.id).await?);

    // Gone for its owner, and gone from the table entirely
    assert!(bookings.find_for_user(booking.id, guest.id).await?.is_none());
    let remaining: i64 = sqlx::query_scalar("SELECT count(*) FROM bookings WHERE id = $1")
        .bind(booking.id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(remaining, 0);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(guest.id)
        .execute(&pool)
        .await?;

    Ok(())
}
