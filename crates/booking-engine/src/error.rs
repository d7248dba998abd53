//! Error types for booking validation and store-record mapping.

use chrono::NaiveDate;
use thiserror::Error;

/// Typed rejection reasons for a proposed booking window.
///
/// All variants are validation failures, not transient errors -- callers
/// branch on the variant to decide what message to show and whether to
/// allow submission. Nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// End is not strictly after start (includes zero-duration windows).
    #[error("invalid range: end must be strictly after start")]
    InvalidRange,

    /// The proposed window overlaps an existing blocking rental.
    /// Carries the first blocked date encountered.
    #[error("date conflict: {date} is already booked")]
    DateConflict { date: NaiveDate },

    /// The proposed start precedes the current time at validation.
    #[error("start date is in the past")]
    PastDate,
}

/// Errors produced when mapping a raw store record into a [`RentalRequest`].
///
/// The external document store serves loosely-shaped documents; this is the
/// taxonomy of everything that can be wrong with one. Records failing any
/// of these checks never reach the engine proper.
///
/// [`RentalRequest`]: crate::request::RentalRequest
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A required field was absent from the raw document.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A timestamp field could not be parsed as RFC 3339 or naive UTC.
    #[error("invalid timestamp in '{field}': {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    /// The status string is not one of the five known statuses.
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// The rate unit string is not one of hour/day/week/month.
    #[error("unknown rate unit: {0}")]
    UnknownUnit(String),

    /// The record's end is not strictly after its start.
    #[error("record has non-positive duration")]
    NonPositiveDuration,

    /// The persisted total cost is negative.
    #[error("record has negative total cost: {0}")]
    NegativeCost(f64),
}

/// Convenience alias for engine validation results.
pub type Result<T> = std::result::Result<T, BookingError>;
