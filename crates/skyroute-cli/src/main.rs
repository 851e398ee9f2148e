use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_cli::output::OutputFormat;
use skyroute_cli::terminal::ColorPalette;
use skyroute_lib::{resolve_flight_source, FlightSnapshot, RankKey, DEFAULT_CITY_CAPACITY};

mod commands;

use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank flights and query cheapest routes")]
struct Cli {
    /// Flight catalog CSV to load instead of the configured or bundled one.
    #[arg(long, global = true)]
    flights: Option<PathBuf>,

    /// Maximum number of distinct cities the route graph accepts.
    #[arg(long, global = true, default_value_t = DEFAULT_CITY_CAPACITY)]
    max_cities: usize,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors even when the terminal supports them.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List flights in load order.
    List,
    /// Rank flights by the chosen key.
    Rank {
        /// Attribute to rank by: price, duration, on-time-rate or flight-number.
        #[arg(long, default_value_t = RankKey::Price)]
        by: RankKey,
    },
    /// Find the cheapest route between two cities.
    Route {
        /// Starting city name.
        #[arg(long = "from")]
        from: String,
        /// Destination city name.
        #[arg(long = "to")]
        to: String,
    },
    /// Enumerate every simple path between two cities.
    Paths {
        /// Starting city name.
        #[arg(long = "from")]
        from: String,
        /// Destination city name.
        #[arg(long = "to")]
        to: String,
        /// Stop after this many paths.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List registered cities in index order.
    Cities,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = resolve_flight_source(cli.flights.as_deref());
    let snapshot = FlightSnapshot::load(&source, cli.max_cities)
        .with_context(|| format!("failed to load flights from {}", source))?;

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let mut ctx = CommandContext {
        snapshot,
        format: cli.format,
        palette,
    };

    match cli.command {
        Command::List => commands::list::handle_list(&ctx),
        Command::Rank { by } => commands::rank::handle_rank(&mut ctx, by),
        Command::Route { from, to } => commands::route::handle_route(&ctx, &from, &to),
        Command::Paths { from, to, limit } => {
            commands::paths::handle_paths(&ctx, &from, &to, limit)
        }
        Command::Cities => commands::cities::handle_cities(&ctx),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
