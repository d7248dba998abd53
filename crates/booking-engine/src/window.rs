//! Validate a proposed rental window against existing bookings.
//!
//! This is an advisory, snapshot-based check suitable for gating a submit
//! button: the caller is expected to refresh its snapshot and re-validate
//! immediately before committing a request. The authoritative no-double-
//! booking guarantee, if the system needs one, belongs to the persistence
//! layer at write time -- two renters validating concurrently against the
//! same snapshot will both pass.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::blocked::{is_date_blocked, BlockedRange};
use crate::error::{BookingError, Result};

/// A proposed rental window that passed validation.
///
/// The endpoints are returned exactly as submitted -- no normalization is
/// performed here; formatting for storage is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Validate a proposed `[start, end)` window against the blocked ranges.
///
/// Checks, in order:
///
/// 1. `end` must be strictly after `start` ([`BookingError::InvalidRange`]).
/// 2. `start` must not precede `now` ([`BookingError::PastDate`]). `now` is
///    an explicit parameter so callers and tests control the clock; the
///    engine re-validates independently of whatever minimum date the
///    calendar UI enforced.
/// 3. Every date from `start`'s date through `end`'s date (inclusive,
///    date-granularity) must be unblocked
///    ([`BookingError::DateConflict`] carrying the first blocked date).
///
/// On success returns the `{start, end}` pair unchanged.
pub fn validate_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
    ranges: &[BlockedRange],
) -> Result<BookingWindow> {
    if end <= start {
        return Err(BookingError::InvalidRange);
    }
    if start < now {
        return Err(BookingError::PastDate);
    }

    let mut date = start.date_naive();
    let last = end.date_naive();
    while date <= last {
        if is_date_blocked(date, ranges) {
            return Err(BookingError::DateConflict { date });
        }
        date = date + Duration::days(1);
    }

    Ok(BookingWindow { start, end })
}
