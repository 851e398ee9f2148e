//! Paths command handler.

use anyhow::Result;

use skyroute_cli::output::{format_paths, to_json, OutputFormat, PathsAnswer};
use skyroute_lib::SimplePath;

use super::CommandContext;

/// Print every simple path between two cities, optionally capped at `limit`.
pub fn handle_paths(
    ctx: &CommandContext,
    from: &str,
    to: &str,
    limit: Option<usize>,
) -> Result<()> {
    let mut iter = ctx.snapshot.routes.all_simple_paths(from, to)?;
    let paths: Vec<SimplePath> = match limit {
        Some(limit) => iter.by_ref().take(limit).collect(),
        None => iter.by_ref().collect(),
    };
    let truncated = limit.is_some() && iter.next().is_some();

    match ctx.format {
        OutputFormat::Text => print!(
            "{}",
            format_paths(from, to, &paths, truncated, &ctx.palette)
        ),
        OutputFormat::Json => print!(
            "{}",
            to_json(&PathsAnswer {
                from,
                to,
                count: paths.len(),
                truncated,
                paths: &paths,
            })?
        ),
    }
    Ok(())
}
