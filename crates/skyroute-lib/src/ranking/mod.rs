//! Flight ranking module.
//!
//! This module provides:
//! - [`RankKey`] - The criteria flights can be ranked by
//! - [`Ranker`] - Strategy trait implemented once per sort algorithm
//! - [`RankingEngine`] - Owner of the mutable flight sequence
//!
//! # Strategy Pattern
//!
//! Each key is bound to one algorithm with its own complexity and tie-break
//! behavior:
//!
//! | key             | algorithm          | order      | stable |
//! |-----------------|--------------------|------------|--------|
//! | `price`         | bubble sort        | ascending  | yes    |
//! | `duration`      | quicksort          | ascending  | no     |
//! | `on-time-rate`  | heap sort          | ascending  | no     |
//! | `flight-number` | LSD radix sort     | byte-wise  | yes    |
//!
//! # Example
//!
//! ```
//! use skyroute_lib::{FlightRecord, RankingEngine};
//!
//! let mut engine = RankingEngine::new();
//! engine.append(FlightRecord::new("CA9", "Beijing", "Tokyo", 900.0, 200, 0.9).unwrap());
//! engine.append(FlightRecord::new("CA10", "Beijing", "Osaka", 700.0, 210, 0.8).unwrap());
//! engine.sort_by_price();
//! assert_eq!(engine.flights()[0].flight_number, "CA10");
//! ```

mod ranker;

pub use ranker::{
    select_ranker, BubblePriceRanker, HeapOnTimeRanker, QuickDurationRanker,
    RadixFlightNumberRanker, Ranker,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::flight::FlightRecord;

/// Criteria a flight sequence can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankKey {
    /// Ticket price, cheapest first.
    Price,
    /// Flight duration, shortest first.
    Duration,
    /// On-time rate, lowest first (standard heap sort order).
    OnTimeRate,
    /// Flight number, byte-wise lexicographic.
    FlightNumber,
}

impl RankKey {
    /// Every key in the order the engine documents them.
    pub const ALL: [RankKey; 4] = [
        RankKey::Price,
        RankKey::Duration,
        RankKey::OnTimeRate,
        RankKey::FlightNumber,
    ];
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RankKey::Price => "price",
            RankKey::Duration => "duration",
            RankKey::OnTimeRate => "on-time-rate",
            RankKey::FlightNumber => "flight-number",
        };
        f.write_str(value)
    }
}

impl FromStr for RankKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "price" => Ok(RankKey::Price),
            "duration" => Ok(RankKey::Duration),
            "on-time-rate" | "on-time" | "punctuality" => Ok(RankKey::OnTimeRate),
            "flight-number" | "flight" => Ok(RankKey::FlightNumber),
            other => Err(format!("unknown rank key: {other}")),
        }
    }
}

/// Owns the flight sequence and reorders it in place.
///
/// Insertion order is kept until a sort is applied; each sort establishes a new
/// total order that lasts until the next sort. Sorting never adds, drops, or
/// alters records.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    flights: Vec<FlightRecord>,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over an existing sequence, keeping its order.
    pub fn from_records(flights: Vec<FlightRecord>) -> Self {
        Self { flights }
    }

    /// Append a record at the end of the sequence.
    pub fn append(&mut self, record: FlightRecord) {
        self.flights.push(record);
    }

    /// Current order of the sequence.
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Consume the engine and return the sequence in its current order.
    pub fn into_records(self) -> Vec<FlightRecord> {
        self.flights
    }

    /// Sort by ascending price (bubble sort, stable).
    pub fn sort_by_price(&mut self) {
        self.rank_by(RankKey::Price);
    }

    /// Sort by ascending duration (last-element-pivot quicksort, unstable).
    pub fn sort_by_duration(&mut self) {
        self.rank_by(RankKey::Duration);
    }

    /// Sort by on-time rate using heap sort; lowest rate ends up first.
    pub fn sort_by_on_time_rate(&mut self) {
        self.rank_by(RankKey::OnTimeRate);
    }

    /// Sort by flight number (LSD radix sort, stable).
    pub fn sort_by_flight_number(&mut self) {
        self.rank_by(RankKey::FlightNumber);
    }

    /// Sort by the given key using its bound strategy.
    pub fn rank_by(&mut self, key: RankKey) {
        let ranker = select_ranker(key);
        debug!(key = %key, records = self.flights.len(), "ranking flights");
        ranker.rank(&mut self.flights);
    }
}

impl<'a> IntoIterator for &'a RankingEngine {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}

impl Extend<FlightRecord> for RankingEngine {
    fn extend<T: IntoIterator<Item = FlightRecord>>(&mut self, iter: T) {
        self.flights.extend(iter);
    }
}
