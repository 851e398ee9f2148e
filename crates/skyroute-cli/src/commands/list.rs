//! List command handler.

use anyhow::Result;

use skyroute_cli::output::{format_flight_table, to_json, FlightListing, OutputFormat};

use super::CommandContext;

/// Print every loaded flight in the order it was read.
pub fn handle_list(ctx: &CommandContext) -> Result<()> {
    let flights = ctx.snapshot.ranking.flights();
    match ctx.format {
        OutputFormat::Text => print!("{}", format_flight_table(flights, None, &ctx.palette)),
        OutputFormat::Json => print!(
            "{}",
            to_json(&FlightListing {
                ranked_by: None,
                count: flights.len(),
                flights,
            })?
        ),
    }
    Ok(())
}
