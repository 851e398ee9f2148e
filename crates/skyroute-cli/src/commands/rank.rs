//! Rank command handler.

use anyhow::Result;

use skyroute_cli::output::{format_flight_table, to_json, FlightListing, OutputFormat};
use skyroute_lib::RankKey;

use super::CommandContext;

/// Sort the loaded flights by `key` and print them.
pub fn handle_rank(ctx: &mut CommandContext, key: RankKey) -> Result<()> {
    ctx.snapshot.ranking.rank_by(key);
    let flights = ctx.snapshot.ranking.flights();
    match ctx.format {
        OutputFormat::Text => print!(
            "{}",
            format_flight_table(flights, Some(key), &ctx.palette)
        ),
        OutputFormat::Json => print!(
            "{}",
            to_json(&FlightListing {
                ranked_by: Some(key),
                count: flights.len(),
                flights,
            })?
        ),
    }
    Ok(())
}
