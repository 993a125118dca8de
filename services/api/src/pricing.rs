//! Booking date validation and pricing
//!
//! The only business rule in the system: given a proposed check-in/check-out
//! pair and a nightly rate, decide whether the range is admissible and what
//! the stay costs. Runs once at booking creation; updates do not re-quote.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection reasons for a proposed booking date range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingDatesError {
    #[error("Check-out date must be after check-in date.")]
    CheckOutNotAfterCheckIn,

    #[error("Check-in date cannot be in the past.")]
    CheckInInPast,
}

/// An accepted booking quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuote {
    /// Whole calendar days between check-in and check-out, at least 1
    pub nights: i64,
    /// nights x price_per_night, exact decimal arithmetic
    pub total_price: Decimal,
}

/// Validate a date range and price the stay.
///
/// `today` is passed in rather than read from the clock so the rule stays a
/// pure function of its inputs.
pub fn quote_booking(
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: Decimal,
    today: NaiveDate,
) -> Result<BookingQuote, BookingDatesError> {
    if check_in >= check_out {
        return Err(BookingDatesError::CheckOutNotAfterCheckIn);
    }

    if check_in < today {
        return Err(BookingDatesError::CheckInInPast);
    }

    let nights = (check_out - check_in).num_days();
    let total_price = Decimal::from(nights) * price_per_night;

    Ok(BookingQuote {
        nights,
        total_price,
    })
}
