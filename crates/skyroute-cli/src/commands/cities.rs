//! Cities command handler.

use anyhow::Result;
use serde::Serialize;

use skyroute_cli::output::{format_cities, to_json, OutputFormat};

use super::CommandContext;

#[derive(Serialize)]
struct CityListing<'a> {
    capacity: usize,
    cities: &'a [String],
}

/// Print registered cities with their dense indices.
pub fn handle_cities(ctx: &CommandContext) -> Result<()> {
    let routes = &ctx.snapshot.routes;
    match ctx.format {
        OutputFormat::Text => print!("{}", format_cities(routes.cities(), routes.capacity())),
        OutputFormat::Json => print!(
            "{}",
            to_json(&CityListing {
                capacity: routes.capacity(),
                cities: routes.cities(),
            })?
        ),
    }
    Ok(())
}
