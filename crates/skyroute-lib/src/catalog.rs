//! Flight catalog loading.
//!
//! This module handles reading flight records from CSV files and exposes the
//! bundled sample snapshot used when no catalog is configured.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};
use crate::flight::FlightRecord;

/// Canonical column names and the header spellings accepted for each.
const COLUMN_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "flight_number",
        &["flight_number", "flightno", "flight_no", "flight", "id"],
    ),
    ("origin", &["origin", "from", "start_city", "startcity"]),
    ("destination", &["destination", "to", "end_city", "endcity"]),
    ("price", &["price", "fare"]),
    (
        "duration_minutes",
        &["duration_minutes", "duration", "minutes"],
    ),
    (
        "on_time_rate",
        &["on_time_rate", "ontimerate", "on_time", "punctuality"],
    ),
];

static SAMPLE_FLIGHTS: Lazy<Vec<FlightRecord>> = Lazy::new(|| {
    let raw: [(&str, &str, &str, f64, u32, f64); 16] = [
        ("CA101", "Beijing", "Shanghai", 1200.0, 130, 0.95),
        ("MU505", "Shanghai", "Tokyo", 2500.0, 180, 0.88),
        ("JL789", "Tokyo", "NewYork", 8000.0, 720, 0.92),
        ("AA100", "NewYork", "London", 4500.0, 400, 0.85),
        ("BA202", "London", "Paris", 800.0, 90, 0.90),
        ("AF303", "Paris", "Berlin", 600.0, 100, 0.93),
        ("LH404", "Berlin", "Moscow", 1500.0, 200, 0.89),
        ("SU505", "Moscow", "Beijing", 3000.0, 480, 0.87),
        ("CZ606", "Beijing", "Guangzhou", 1800.0, 190, 0.91),
        ("CX707", "Guangzhou", "HongKong", 500.0, 50, 0.96),
        ("SQ808", "HongKong", "Singapore", 2000.0, 240, 0.94),
        ("QF909", "Singapore", "Sydney", 3500.0, 450, 0.90),
        ("NZ001", "Sydney", "Auckland", 1200.0, 180, 0.88),
        ("UA111", "Auckland", "LosAngeles", 6000.0, 700, 0.86),
        ("DL222", "LosAngeles", "NewYork", 2200.0, 300, 0.89),
        ("CA102", "Beijing", "Tokyo", 2800.0, 200, 0.91),
    ];
    raw.iter()
        .map(
            |&(number, origin, destination, price, duration, rate)| FlightRecord {
                flight_number: number.to_string(),
                origin: origin.to_string(),
                destination: destination.to_string(),
                price,
                duration_minutes: duration,
                on_time_rate: rate,
            },
        )
        .collect()
});

/// The bundled sample snapshot: sixteen flights across fourteen cities.
pub fn sample_flights() -> Vec<FlightRecord> {
    SAMPLE_FLIGHTS.clone()
}

/// Load flight records from a CSV file.
pub fn load_flights_from_path(path: &Path) -> Result<Vec<FlightRecord>> {
    let file = fs::File::open(path)?;
    let flights = load_flights_from_reader(file)?;
    debug!(path = %path.display(), flights = flights.len(), "loaded flight catalog");
    Ok(flights)
}

/// Load flight records from CSV data with a header row.
///
/// Headers are matched case-insensitively and ignore punctuation, so
/// `Flight No`, `flight_no` and `flightno` all name the flight number column.
pub fn load_flights_from_reader<R: Read>(reader: R) -> Result<Vec<FlightRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::FlightDataValidation {
            message: format!("failed to read flight catalog headers: {err}"),
        })?
        .clone();
    let columns = resolve_columns(&headers)?;

    let mut flights = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header is line 1, so the first data row is line 2.
        let line = row + 2;
        let flight = FlightRecord {
            flight_number: field(&record, &columns, "flight_number", line)?.to_string(),
            origin: field(&record, &columns, "origin", line)?.to_string(),
            destination: field(&record, &columns, "destination", line)?.to_string(),
            price: parse_field(&record, &columns, "price", line)?,
            duration_minutes: parse_field(&record, &columns, "duration_minutes", line)?,
            on_time_rate: parse_field(&record, &columns, "on_time_rate", line)?,
        };
        flight.validate()?;
        flights.push(flight);
    }

    Ok(flights)
}

fn normalize(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn resolve_columns(headers: &StringRecord) -> Result<BTreeMap<&'static str, usize>> {
    let normalized: Vec<String> = headers.iter().map(normalize).collect();
    let mut columns = BTreeMap::new();

    for (canonical, synonyms) in COLUMN_SYNONYMS {
        let found = synonyms.iter().find_map(|alt| {
            let alt = normalize(alt);
            normalized.iter().position(|header| *header == alt)
        });
        if let Some(index) = found {
            columns.insert(*canonical, index);
        }
    }

    let missing: Vec<&str> = COLUMN_SYNONYMS
        .iter()
        .map(|(canonical, _)| *canonical)
        .filter(|canonical| !columns.contains_key(canonical))
        .collect();
    if !missing.is_empty() {
        return Err(Error::FlightDataValidation {
            message: format!(
                "flight catalog missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }

    Ok(columns)
}

fn field<'r>(
    record: &'r StringRecord,
    columns: &BTreeMap<&'static str, usize>,
    column: &str,
    line: usize,
) -> Result<&'r str> {
    columns
        .get(column)
        .and_then(|&index| record.get(index))
        .ok_or_else(|| Error::FlightDataValidation {
            message: format!("line {line}: missing value for {column}"),
        })
}

fn parse_field<T: std::str::FromStr>(
    record: &StringRecord,
    columns: &BTreeMap<&'static str, usize>,
    column: &str,
    line: usize,
) -> Result<T> {
    let raw = field(record, columns, column, line)?;
    raw.parse().map_err(|_| Error::FlightDataValidation {
        message: format!("line {line}: invalid {column} value '{raw}'"),
    })
}
