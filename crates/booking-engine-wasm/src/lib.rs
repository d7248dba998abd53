//! WASM bindings for booking-engine.
//!
//! Exposes blocked-range derivation, date membership, window validation,
//! and cost computation to the browser booking UI via `wasm-bindgen`. All
//! complex types cross the boundary as JSON strings; datetimes are RFC 3339
//! or naive-UTC strings, calendar dates are `YYYY-MM-DD`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/booking-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use booking_engine::{BlockedRange, RawRentalRecord, RentalRequest};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct WindowDto {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON and datetime strings from JavaScript
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (e.g., "2024-06-20T09:00:00Z") and naive local
/// time (e.g., "2024-06-20T09:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    booking_engine::request::parse_datetime(s)
        .ok_or_else(|| JsValue::from_str(&format!("Invalid datetime '{}'", s)))
}

/// Convert a JSON array of raw store records into validated requests.
fn parse_requests_json(json: &str) -> Result<Vec<RentalRequest>, JsValue> {
    let raw: Vec<RawRentalRecord> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid requests JSON: {}", e)))?;

    raw.into_iter()
        .map(|record| RentalRequest::try_from(record).map_err(|e| JsValue::from_str(&e.to_string())))
        .collect()
}

/// Convert a JSON array of `{start, end, status}` range objects back into
/// `BlockedRange` values (the UI holds ranges as plain JSON between calls).
fn parse_ranges_json(json: &str) -> Result<Vec<BlockedRange>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid ranges JSON: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Derive blocked date ranges from a listing's rental requests.
///
/// `requests_json` must be a JSON array of raw store records (the same
/// shape the document store serves). Returns a JSON string containing an
/// array of `{start, end, status}` objects with `YYYY-MM-DD` dates; the
/// same JSON feeds [`isDateBlocked`](is_date_blocked) and
/// [`validateWindow`](validate_window) on later calls.
#[wasm_bindgen(js_name = "blockedRanges")]
pub fn blocked_ranges(requests_json: &str) -> Result<String, JsValue> {
    let requests = parse_requests_json(requests_json)?;
    let ranges = booking_engine::blocked_ranges(&requests);

    serde_json::to_string(&ranges)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether a calendar date falls inside any blocked range.
///
/// `date` is a `YYYY-MM-DD` string; `ranges_json` is the JSON produced by
/// [`blockedRanges`](blocked_ranges). Used by the calendar widget to gray
/// out unavailable days.
#[wasm_bindgen(js_name = "isDateBlocked")]
pub fn is_date_blocked(date: &str, ranges_json: &str) -> Result<bool, JsValue> {
    let date: NaiveDate = date
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid date '{}'", date)))?;
    let ranges = parse_ranges_json(ranges_json)?;

    Ok(booking_engine::is_date_blocked(date, &ranges))
}

/// Validate a proposed rental window against the blocked ranges.
///
/// `start`, `end`, and `now` are ISO 8601 datetime strings; `ranges_json`
/// is the JSON produced by [`blockedRanges`](blocked_ranges). On success
/// returns a JSON `{start, end}` object with the window unchanged; on
/// rejection the error is the typed reason's message (the UI matches on it
/// to pick an inline message).
#[wasm_bindgen(js_name = "validateWindow")]
pub fn validate_window(
    start: &str,
    end: &str,
    now: &str,
    ranges_json: &str,
) -> Result<String, JsValue> {
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;
    let now = parse_datetime(now)?;
    let ranges = parse_ranges_json(ranges_json)?;

    let window = booking_engine::validate_window(start, end, now, &ranges)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dto = WindowDto {
        start: window.start.to_rfc3339(),
        end: window.end.to_rfc3339(),
    };
    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Compute the total cost of a rental window at the given rate.
///
/// `unit` is one of `hour`, `day`, `week`, `month`. Returns the cost
/// rounded to two decimal places -- the same value the caller must persist
/// on the request record.
#[wasm_bindgen(js_name = "computeCost")]
pub fn compute_cost(
    start: &str,
    end: &str,
    price_per_unit: f64,
    unit: &str,
) -> Result<f64, JsValue> {
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;
    let unit: booking_engine::RateUnit = unit
        .parse()
        .map_err(|e: booking_engine::RecordError| JsValue::from_str(&e.to_string()))?;

    booking_engine::compute_cost(start, end, price_per_unit, unit)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
