//! Snapshot-holding calendar service for one listing.
//!
//! The external store delivers rental-request snapshots (initial query or
//! live-subscription update); [`ListingCalendar`] caches the blocked ranges
//! derived from the latest snapshot and answers availability queries from
//! that cache. It is an explicitly constructed object with no module-level
//! state, so tests and concurrent views instantiate fresh instances instead
//! of sharing anything process-wide.
//!
//! The service stays synchronous: each snapshot push fully replaces the
//! previous derivation, and all async/subscription plumbing lives with the
//! store.

use chrono::{DateTime, NaiveDate, Utc};

use crate::blocked::{blocked_ranges, is_date_blocked, BlockedRange};
use crate::error::Result;
use crate::request::RentalRequest;
use crate::window::{validate_window, BookingWindow};

/// Cached availability view for a single listing.
#[derive(Debug, Clone)]
pub struct ListingCalendar {
    listing_id: String,
    ranges: Vec<BlockedRange>,
}

impl ListingCalendar {
    /// Create an empty calendar for a listing. No dates are blocked until
    /// the first [`refresh`](Self::refresh).
    pub fn new(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            ranges: Vec::new(),
        }
    }

    /// The listing this calendar tracks.
    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    /// Replace the cached derivation with one computed from a fresh
    /// snapshot.
    ///
    /// Requests for other listings are ignored, so the store may push an
    /// unfiltered snapshot. Replacement is total: a request that
    /// disappeared from the snapshot (e.g., cancelled) stops blocking.
    pub fn refresh(&mut self, requests: &[RentalRequest]) {
        let own: Vec<RentalRequest> = requests
            .iter()
            .filter(|r| r.listing_id == self.listing_id)
            .cloned()
            .collect();
        self.ranges = blocked_ranges(&own);
    }

    /// Blocked ranges from the latest snapshot, for calendar rendering.
    pub fn blocked_ranges(&self) -> &[BlockedRange] {
        &self.ranges
    }

    /// Whether a calendar date is unavailable in the latest snapshot.
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        is_date_blocked(date, &self.ranges)
    }

    /// Validate a proposed window against the latest snapshot.
    ///
    /// This is the same advisory check as [`validate_window`]: callers
    /// should [`refresh`](Self::refresh) with a fresh snapshot immediately
    /// before committing a request, and the store remains the authority
    /// for conflicts at write time.
    pub fn validate(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<BookingWindow> {
        validate_window(start, end, now, &self.ranges)
    }
}
