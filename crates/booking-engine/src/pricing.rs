//! Duration-based cost computation.
//!
//! Cost is `billable units x snapshotted rate`, rounded to two decimal
//! places. The same function computes the live price preview and the value
//! persisted on the request record, so a stored cost is always reproducible
//! from its inputs.

use chrono::{DateTime, Utc};

use crate::error::{BookingError, Result};
use crate::request::RateUnit;

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Number of billable units for a rental window under the given rate unit.
///
/// Daily pricing charges `max(1, ceil(duration / 24h))` -- the floor of one
/// guarantees a minimum one-day charge even for sub-day bookings, an
/// explicit business rule rather than a rounding artifact. Every other unit
/// bills `ceil(duration / 1h)`; weekly and monthly listings fall back to
/// the hourly rule rather than getting unit-specific divisors.
///
/// # Errors
///
/// Returns [`BookingError::InvalidRange`] when `end <= start`. Callers that
/// went through [`validate_window`] have already ruled this out, but a
/// direct call must fail fast rather than silently produce a zero or
/// negative count.
///
/// [`validate_window`]: crate::window::validate_window
pub fn billable_units(start: DateTime<Utc>, end: DateTime<Utc>, unit: RateUnit) -> Result<i64> {
    let duration_ms = (end - start).num_milliseconds();
    if duration_ms <= 0 {
        return Err(BookingError::InvalidRange);
    }

    let units = match unit {
        RateUnit::Day => div_ceil(duration_ms, MS_PER_DAY).max(1),
        RateUnit::Hour | RateUnit::Week | RateUnit::Month => div_ceil(duration_ms, MS_PER_HOUR),
    };
    Ok(units)
}

/// Compute the total cost of a rental window at the given rate.
///
/// `cost = round(units * price_per_unit * 100) / 100` -- always rounded to
/// two decimal places so displayed and persisted amounts never carry
/// floating-point artifacts.
///
/// # Errors
///
/// Returns [`BookingError::InvalidRange`] when `end <= start`.
pub fn compute_cost(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    price_per_unit: f64,
    unit: RateUnit,
) -> Result<f64> {
    let units = billable_units(start, end, unit)?;
    Ok((units as f64 * price_per_unit * 100.0).round() / 100.0)
}

/// Ceiling division for positive operands.
fn div_ceil(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor - 1) / divisor
}
