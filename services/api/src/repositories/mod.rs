//! Repositories for database operations

pub mod booking;
pub mod room;
pub mod user;

pub use booking::BookingRepository;
pub use room::RoomRepository;
pub use user::UserRepository;

/// True when the error chain bottoms out in a Postgres unique-constraint
/// violation (SQLSTATE 23505)
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| match e {
            sqlx::Error::Database(db) => db.code().map(|code| code == "23505"),
            _ => None,
        })
        .unwrap_or(false)
}
