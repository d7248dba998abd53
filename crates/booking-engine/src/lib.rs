//! # booking-engine
//!
//! Rental availability, conflict detection, and pricing for a peer-to-peer
//! tool-rental marketplace.
//!
//! The engine is a stateless pure-function library: every operation works
//! on a snapshot of rental-request records supplied by the caller and
//! performs no I/O. The external store owns persistence and freshness; the
//! booking UI consumes the results to gray out calendar dates, gate the
//! submit button, and preview the price.
//!
//! ## Modules
//!
//! - [`request`] — validated rental-request records and the raw
//!   store-record mapping
//! - [`blocked`] — derive blocked date ranges, membership test
//! - [`window`] — validate a proposed rental window (typed rejections)
//! - [`pricing`] — billable-unit counting and currency-rounded cost
//! - [`calendar`] — snapshot-holding availability service per listing
//! - [`error`] — error types

pub mod blocked;
pub mod calendar;
pub mod error;
pub mod pricing;
pub mod request;
pub mod window;

pub use blocked::{blocked_ranges, is_date_blocked, BlockedRange};
pub use calendar::ListingCalendar;
pub use error::{BookingError, RecordError};
pub use pricing::{billable_units, compute_cost};
pub use request::{RateUnit, RawRentalRecord, RentalRequest, RequestStatus};
pub use window::{validate_window, BookingWindow};
