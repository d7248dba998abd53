//! `booking` CLI — inspect rental snapshots, check availability, and quote
//! prices from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Derive blocked ranges from a snapshot (stdin → stdout)
//! cat snapshot.json | booking blocked
//!
//! # From file to file, for one listing only
//! booking blocked -i snapshot.json -o blocked.json --listing listing-1
//!
//! # Check a proposed window against a snapshot
//! booking check -i snapshot.json \
//!   --start 2024-06-20T09:00:00Z --end 2024-06-22T17:00:00Z
//!
//! # Quote a price without a snapshot
//! booking quote --start 2024-06-20T09:00:00Z --end 2024-06-22T17:00:00Z \
//!   --rate 25.00 --unit day
//! ```
//!
//! Snapshot files are JSON arrays of rental-request documents exactly as
//! the document store serves them.

use anyhow::{Context, Result};
use booking_engine::request::parse_datetime;
use booking_engine::{RateUnit, RawRentalRecord, RentalRequest};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Rental availability and pricing CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive blocked date ranges from a rental-request snapshot
    Blocked {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Only consider requests for this listing
        #[arg(long)]
        listing: Option<String>,
    },
    /// Validate a proposed rental window against a snapshot
    Check {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Proposed start (RFC 3339 or naive UTC, e.g. 2024-06-20T09:00:00Z)
        #[arg(long)]
        start: String,
        /// Proposed end
        #[arg(long)]
        end: String,
        /// Only consider requests for this listing
        #[arg(long)]
        listing: Option<String>,
        /// Override the current time (defaults to the real clock)
        #[arg(long)]
        now: Option<String>,
    },
    /// Compute the cost of a rental window at a given rate
    Quote {
        /// Proposed start (RFC 3339 or naive UTC)
        #[arg(long)]
        start: String,
        /// Proposed end
        #[arg(long)]
        end: String,
        /// Price per unit in the listing's currency
        #[arg(long)]
        rate: f64,
        /// Billing unit: hour, day, week, or month
        #[arg(long)]
        unit: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Blocked {
            input,
            output,
            listing,
        } => {
            let requests = load_snapshot(input.as_deref(), listing.as_deref())?;
            let ranges = booking_engine::blocked_ranges(&requests);

            let json = serde_json::to_string_pretty(&ranges)
                .context("Failed to serialize blocked ranges")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check {
            input,
            start,
            end,
            listing,
            now,
        } => {
            let requests = load_snapshot(input.as_deref(), listing.as_deref())?;
            let ranges = booking_engine::blocked_ranges(&requests);

            let start = parse_cli_datetime(&start, "--start")?;
            let end = parse_cli_datetime(&end, "--end")?;
            let now = match now {
                Some(raw) => parse_cli_datetime(&raw, "--now")?,
                None => Utc::now(),
            };

            let window = booking_engine::validate_window(start, end, now, &ranges)
                .map_err(|e| anyhow::anyhow!("Window rejected: {}", e))?;

            let json = serde_json::to_string_pretty(&window)
                .context("Failed to serialize accepted window")?;
            println!("{}", json);
        }
        Commands::Quote {
            start,
            end,
            rate,
            unit,
        } => {
            let start = parse_cli_datetime(&start, "--start")?;
            let end = parse_cli_datetime(&end, "--end")?;
            let unit: RateUnit = unit
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid --unit: {}", e))?;

            let cost = booking_engine::compute_cost(start, end, rate, unit)
                .map_err(|e| anyhow::anyhow!("Quote rejected: {}", e))?;
            println!("{:.2}", cost);
        }
    }

    Ok(())
}

/// Read a snapshot, map every raw document into a validated request, and
/// optionally filter to one listing.
///
/// The mapping fails loudly on the first malformed document -- a snapshot
/// with bad records means the store query or the fixture is wrong, and
/// silently dropping records would hide real bookings from the conflict
/// check.
fn load_snapshot(path: Option<&str>, listing: Option<&str>) -> Result<Vec<RentalRequest>> {
    let raw_json = read_input(path)?;
    let raw_records: Vec<RawRentalRecord> =
        serde_json::from_str(&raw_json).context("Snapshot is not a JSON array of rental records")?;

    let mut requests = Vec::with_capacity(raw_records.len());
    for (index, record) in raw_records.into_iter().enumerate() {
        let request = RentalRequest::try_from(record)
            .with_context(|| format!("Invalid record at index {}", index))?;
        requests.push(request);
    }

    if let Some(listing_id) = listing {
        requests.retain(|r| r.listing_id == listing_id);
    }
    Ok(requests)
}

fn parse_cli_datetime(raw: &str, flag: &str) -> Result<DateTime<Utc>> {
    parse_datetime(raw)
        .with_context(|| format!("Invalid datetime for {}: '{}' (expected RFC 3339 or naive UTC)", flag, raw))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
