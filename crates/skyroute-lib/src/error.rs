use thiserror::Error;

/// Convenient result alias for the Skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable destination is not represented here: it is the normal
/// [`crate::PathResult::Unreachable`] outcome of a query.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a path query references a city that was never registered.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when registering one more distinct city than the graph can hold.
    #[error("cannot register city {name}: graph capacity of {capacity} cities exceeded")]
    CapacityExceeded { name: String, capacity: usize },

    /// Raised when a route price cannot be used as an edge weight.
    #[error("invalid price {price} for route {from} -> {to}; prices must be finite and non-negative")]
    InvalidRoutePrice { from: String, to: String, price: f64 },

    /// Raised when a flight record fails validation.
    #[error("invalid flight {flight}: {message}")]
    InvalidFlight { flight: String, message: String },

    /// Raised when a flight catalog cannot be interpreted.
    #[error("invalid flight data: {message}")]
    FlightDataValidation { message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
