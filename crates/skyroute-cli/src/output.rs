//! Output formatting for flight tables and route answers.
//!
//! Text renderers return the full block as a `String` so callers decide where
//! it goes; JSON renderers serialize the same data through `serde_json`.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use skyroute_lib::{FlightRecord, PathResult, RankKey, SimplePath};

use crate::terminal::{format_price, supports_unicode, ColorPalette};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// JSON for machine consumption.
    Json,
}

/// Flight listing as emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct FlightListing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked_by: Option<RankKey>,
    pub count: usize,
    pub flights: &'a [FlightRecord],
}

/// Cheapest-path answer as emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct RouteAnswer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    #[serde(flatten)]
    pub result: &'a PathResult,
}

/// Simple-path enumeration as emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct PathsAnswer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub count: usize,
    /// `true` when `--limit` stopped the enumeration early.
    pub truncated: bool,
    pub paths: &'a [SimplePath],
}

/// Serialize any answer as pretty JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

fn rule(width: usize) -> String {
    let glyph = if supports_unicode() { "─" } else { "-" };
    glyph.repeat(width)
}

/// Render flights as a fixed-width table.
pub fn format_flight_table(
    flights: &[FlightRecord],
    ranked_by: Option<RankKey>,
    palette: &ColorPalette,
) -> String {
    let mut out = String::new();
    if let Some(key) = ranked_by {
        let _ = writeln!(
            out,
            "{}Ranked by {}{}",
            palette.yellow, key, palette.reset
        );
    }
    if flights.is_empty() {
        out.push_str("No flights loaded.\n");
        return out;
    }

    let width = 80;
    let _ = writeln!(out, "{}{}{}", palette.gray, rule(width), palette.reset);
    let _ = writeln!(
        out,
        "{}{:<10}{:<15}{:<15}{:>10}{:>12}{:>10}{}",
        palette.white_bold,
        "Flight",
        "Origin",
        "Destination",
        "Price",
        "Duration",
        "On-time",
        palette.reset
    );
    let _ = writeln!(out, "{}{}{}", palette.gray, rule(width), palette.reset);
    for flight in flights {
        let _ = writeln!(
            out,
            "{}{:<10}{}{:<15}{:<15}{}{:>10}{}{:>12}{:>9.0}%",
            palette.cyan,
            flight.flight_number,
            palette.reset,
            flight.origin,
            flight.destination,
            palette.green,
            format_price(flight.price),
            palette.reset,
            format!("{} min", flight.duration_minutes),
            flight.on_time_rate * 100.0
        );
    }
    let _ = writeln!(out, "{}{}{}", palette.gray, rule(width), palette.reset);
    let _ = writeln!(out, "{} flights", flights.len());
    out
}

/// Render the cheapest-path answer.
pub fn format_route(from: &str, to: &str, result: &PathResult, palette: &ColorPalette) -> String {
    match result {
        PathResult::Reachable { total_cost, path } => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "Cheapest route from {} to {} ({} flights):",
                from,
                to,
                result.hop_count()
            );
            let _ = writeln!(
                out,
                "  {}{}{}",
                palette.white_bold,
                path.join(" -> "),
                palette.reset
            );
            let _ = writeln!(
                out,
                "Total price: {}{}{}",
                palette.green,
                format_price(*total_cost),
                palette.reset
            );
            out
        }
        PathResult::Unreachable => format!(
            "{}No route from {} to {}.{}\n",
            palette.red, from, to, palette.reset
        ),
    }
}

/// Render the simple-path enumeration.
pub fn format_paths(
    from: &str,
    to: &str,
    paths: &[SimplePath],
    truncated: bool,
    palette: &ColorPalette,
) -> String {
    if paths.is_empty() {
        return format!(
            "{}No route from {} to {}.{}\n",
            palette.red, from, to, palette.reset
        );
    }

    let mut out = String::new();
    let _ = writeln!(out, "All simple paths from {} to {}:", from, to);
    for (index, path) in paths.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} | total price: {}{}{}",
            index + 1,
            path.path.join(" -> "),
            palette.green,
            format_price(path.total_cost),
            palette.reset
        );
    }
    if truncated {
        let _ = writeln!(
            out,
            "{}(stopped after {} paths){}",
            palette.gray,
            paths.len(),
            palette.reset
        );
    } else {
        let _ = writeln!(out, "{} paths", paths.len());
    }
    out
}

/// Render registered cities in index order.
pub fn format_cities(cities: &[String], capacity: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cities ({} of {}):", cities.len(), capacity);
    for (index, city) in cities.iter().enumerate() {
        let _ = writeln!(out, "{:>3}  {}", index, city);
    }
    out
}
