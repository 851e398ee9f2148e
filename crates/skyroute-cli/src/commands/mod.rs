// Handlers for each CLI subcommand. main.rs parses arguments, loads the
// snapshot once and dispatches here.

use skyroute_cli::output::OutputFormat;
use skyroute_cli::terminal::ColorPalette;
use skyroute_lib::FlightSnapshot;

pub mod cities;
pub mod list;
pub mod paths;
pub mod rank;
pub mod route;

/// State shared by every subcommand.
pub struct CommandContext {
    pub snapshot: FlightSnapshot,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}
