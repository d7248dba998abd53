//! Derive blocked date ranges from rental requests for calendar display.
//!
//! Blocked ranges are date-granular, not time-granular: a rental from 14:00
//! on day D to 10:00 on day D+2 blocks the whole of D, D+1, and D+2. The
//! calendar shows whole days as available or not; time-of-day only matters
//! for pricing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::request::{RentalRequest, RequestStatus};

/// A date interval during which a listing cannot be booked.
///
/// Derived on demand from the active rental requests for a listing, never
/// persisted. Both endpoints are inclusive: a rental ending at any time on
/// `end` blocks all of `end` (turnover buffer -- no same-day handover).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Status of the originating request, carried for display only.
    pub status: RequestStatus,
}

/// Compute the blocked date ranges for one listing's rental requests.
///
/// Filters to requests whose status blocks the calendar (`pending` or
/// `approved`) and truncates each request's timestamps to dates. One range
/// is emitted per qualifying request; overlapping ranges are NOT merged --
/// the consumer only needs a membership test, and duplicates are harmless
/// for that.
///
/// Empty input yields empty output. `declined`, `cancelled`, and
/// `completed` requests never contribute a range.
pub fn blocked_ranges(requests: &[RentalRequest]) -> Vec<BlockedRange> {
    requests
        .iter()
        .filter(|r| r.status.blocks_calendar())
        .map(|r| BlockedRange {
            start: r.start.date_naive(),
            end: r.end.date_naive(),
            status: r.status,
        })
        .collect()
}

/// Whether a calendar date falls inside any blocked range.
///
/// A date `d` is blocked iff some range satisfies `start <= d <= end`.
/// The inclusive upper bound is what makes a rental ending "on" day E
/// block day E entirely.
pub fn is_date_blocked(date: NaiveDate, ranges: &[BlockedRange]) -> bool {
    ranges.iter().any(|r| r.start <= date && date <= r.end)
}
