//! Route command handler.

use anyhow::Result;

use skyroute_cli::output::{format_route, to_json, OutputFormat, RouteAnswer};

use super::CommandContext;

/// Print the cheapest route between two named cities.
///
/// Unknown city names fail the command; an unreachable destination is a
/// normal answer.
pub fn handle_route(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let result = ctx.snapshot.routes.cheapest_path(from, to)?;
    match ctx.format {
        OutputFormat::Text => print!("{}", format_route(from, to, &result, &ctx.palette)),
        OutputFormat::Json => print!(
            "{}",
            to_json(&RouteAnswer {
                from,
                to,
                result: &result,
            })?
        ),
    }
    Ok(())
}
