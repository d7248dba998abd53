//! Rental request records and the store-boundary mapping that produces them.
//!
//! The external document store persists rental requests as loosely-shaped
//! documents. [`RawRentalRecord`] is that shape verbatim (everything
//! optional); [`RentalRequest`] is the validated type the rest of the engine
//! operates on. The `TryFrom` conversion between them is the only place raw
//! store output is trusted.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::pricing::compute_cost;

/// Lifecycle status of a rental request.
///
/// Only `Pending` and `Approved` block the calendar; the other three never
/// do. `Completed` is treated like `Cancelled` for availability even if an
/// owner marks a rental completed before its window ends -- early
/// completion releases the dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Declined,
    Cancelled,
    Completed,
}

impl RequestStatus {
    /// Whether requests in this status make their date range unavailable
    /// for new bookings.
    pub fn blocks_calendar(self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Approved)
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "declined" => Ok(RequestStatus::Declined),
            "cancelled" => Ok(RequestStatus::Cancelled),
            "completed" => Ok(RequestStatus::Completed),
            other => Err(RecordError::UnknownStatus(other.to_string())),
        }
    }
}

/// Billing granularity a listing's price is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl std::str::FromStr for RateUnit {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(RateUnit::Hour),
            "day" => Ok(RateUnit::Day),
            "week" => Ok(RateUnit::Week),
            "month" => Ok(RateUnit::Month),
            other => Err(RecordError::UnknownUnit(other.to_string())),
        }
    }
}

/// A validated rental request for one listing.
///
/// Invariants (enforced by the [`RawRentalRecord`] conversion, assumed
/// everywhere else): `start < end`, `total_cost >= 0`. The rate and unit
/// are snapshots taken from the listing at request time -- the listing's
/// price may change later without affecting existing requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub listing_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: RequestStatus,
    /// Monetary amount computed at creation time, immutable thereafter.
    pub total_cost: f64,
    /// Rate snapshotted from the listing when the request was created.
    pub price_per_unit: f64,
    pub unit: RateUnit,
}

impl RentalRequest {
    /// Re-derive the cost from this record's own window, rate, and unit.
    ///
    /// A well-formed persisted record satisfies
    /// `recompute_cost() == Ok(total_cost)` -- the stored value must be
    /// reproducible from its inputs for auditing.
    pub fn recompute_cost(&self) -> crate::error::Result<f64> {
        compute_cost(self.start, self.end, self.price_per_unit, self.unit)
    }
}

/// A rental request document exactly as the external store serves it.
///
/// Every field is optional because the store does not enforce a schema;
/// validation happens in the `TryFrom<RawRentalRecord>` conversion. Unknown
/// extra fields in the document are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRentalRecord {
    #[serde(rename = "listingId")]
    pub listing_id: Option<String>,
    #[serde(rename = "startDateTime")]
    pub start_date_time: Option<String>,
    #[serde(rename = "endDateTime")]
    pub end_date_time: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "totalCost")]
    pub total_cost: Option<f64>,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: Option<f64>,
    pub unit: Option<String>,
}

impl TryFrom<RawRentalRecord> for RentalRequest {
    type Error = RecordError;

    fn try_from(raw: RawRentalRecord) -> Result<Self, Self::Error> {
        let listing_id = raw
            .listing_id
            .ok_or(RecordError::MissingField("listingId"))?;
        let start_str = raw
            .start_date_time
            .ok_or(RecordError::MissingField("startDateTime"))?;
        let end_str = raw
            .end_date_time
            .ok_or(RecordError::MissingField("endDateTime"))?;
        let status_str = raw.status.ok_or(RecordError::MissingField("status"))?;
        let total_cost = raw.total_cost.ok_or(RecordError::MissingField("totalCost"))?;
        let price_per_unit = raw
            .price_per_unit
            .ok_or(RecordError::MissingField("pricePerUnit"))?;
        let unit_str = raw.unit.ok_or(RecordError::MissingField("unit"))?;

        let start = parse_datetime(&start_str).ok_or(RecordError::InvalidTimestamp {
            field: "startDateTime",
            value: start_str,
        })?;
        let end = parse_datetime(&end_str).ok_or(RecordError::InvalidTimestamp {
            field: "endDateTime",
            value: end_str,
        })?;

        let status: RequestStatus = status_str.parse()?;
        let unit: RateUnit = unit_str.parse()?;

        if end <= start {
            return Err(RecordError::NonPositiveDuration);
        }
        if total_cost < 0.0 {
            return Err(RecordError::NegativeCost(total_cost));
        }

        Ok(RentalRequest {
            listing_id,
            start,
            end,
            status,
            total_cost,
            price_per_unit,
            unit,
        })
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-06-11T09:00:00Z")
/// and naive local time (e.g., "2024-06-11T09:00:00"), which is interpreted
/// as UTC. Returns `None` when neither form parses.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .ok()
}
