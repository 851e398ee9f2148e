use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single flight with its identifying, scheduling, and pricing attributes.
///
/// Records are never mutated once created; ranking only changes their
/// position inside a [`crate::RankingEngine`]. Flight numbers are not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    /// Ticket price, never negative.
    pub price: f64,
    pub duration_minutes: u32,
    /// Fraction of departures that left on time, in `[0, 1]`.
    pub on_time_rate: f64,
}

impl FlightRecord {
    /// Build a validated flight record.
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        price: f64,
        duration_minutes: u32,
        on_time_rate: f64,
    ) -> Result<Self> {
        let record = Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            price,
            duration_minutes,
            on_time_rate,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants a record must satisfy before it is ingested.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Error::InvalidFlight {
            flight: self.flight_number.clone(),
            message: message.to_string(),
        };

        if self.flight_number.is_empty() {
            return Err(invalid("flight number must not be empty"));
        }
        if self.origin.is_empty() || self.destination.is_empty() {
            return Err(invalid("origin and destination must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid("price must be finite and non-negative"));
        }
        if self.duration_minutes == 0 {
            return Err(invalid("duration must be greater than zero"));
        }
        if !(0.0..=1.0).contains(&self.on_time_rate) {
            return Err(invalid("on-time rate must be between 0 and 1"));
        }
        Ok(())
    }
}
