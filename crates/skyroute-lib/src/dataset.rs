use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::catalog::{load_flights_from_path, sample_flights};
use crate::error::Result;
use crate::flight::FlightRecord;
use crate::graph::RouteGraph;
use crate::ranking::RankingEngine;

/// Environment variable pointing at a flight catalog CSV.
pub const FLIGHTS_ENV_VAR: &str = "SKYROUTE_FLIGHTS";

/// Default filename looked up in the platform data directory.
const CATALOG_FILENAME: &str = "flights.csv";

/// Where a flight snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightSource {
    /// A CSV flight catalog on disk.
    File(PathBuf),
    /// The bundled sample snapshot.
    Sample,
}

impl fmt::Display for FlightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightSource::File(path) => write!(f, "{}", path.display()),
            FlightSource::Sample => f.write_str("built-in sample"),
        }
    }
}

/// Resolve which flight catalog to load.
///
/// Resolution order:
/// 1. The explicit `override_path`, when provided.
/// 2. The `SKYROUTE_FLIGHTS` environment variable.
/// 3. `flights.csv` in the platform data directory, if it exists.
/// 4. The bundled sample snapshot.
pub fn resolve_flight_source(override_path: Option<&Path>) -> FlightSource {
    if let Some(path) = override_path {
        debug!(path = %path.display(), "using explicit flight catalog");
        return FlightSource::File(path.to_path_buf());
    }

    if let Some(value) = env::var_os(FLIGHTS_ENV_VAR).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), "using flight catalog from {}", FLIGHTS_ENV_VAR);
        return FlightSource::File(path);
    }

    if let Some(path) = default_catalog_path().filter(|path| path.exists()) {
        debug!(path = %path.display(), "using flight catalog from data directory");
        return FlightSource::File(path);
    }

    FlightSource::Sample
}

/// Location of the per-user flight catalog, if the platform exposes one.
pub fn default_catalog_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "skyroute", "skyroute")
        .map(|dirs| dirs.data_dir().join(CATALOG_FILENAME))
}

/// In-memory snapshot feeding both engines from the same records.
#[derive(Debug, Clone)]
pub struct FlightSnapshot {
    pub ranking: RankingEngine,
    pub routes: RouteGraph,
}

impl FlightSnapshot {
    /// Fan records out to the ranking engine and the route graph.
    ///
    /// Every record is appended to the ranking sequence and folded into the
    /// graph as `origin -> destination` at its price.
    pub fn ingest(records: Vec<FlightRecord>, city_capacity: usize) -> Result<Self> {
        let mut routes = RouteGraph::with_capacity(city_capacity);
        for record in &records {
            routes.add_route(&record.origin, &record.destination, record.price)?;
        }
        let ranking = RankingEngine::from_records(records);
        info!(
            flights = ranking.len(),
            cities = routes.city_count(),
            routes = routes.route_count(),
            "flight snapshot ingested"
        );
        Ok(Self { ranking, routes })
    }

    /// Load and ingest the records behind `source`.
    pub fn load(source: &FlightSource, city_capacity: usize) -> Result<Self> {
        let records = match source {
            FlightSource::File(path) => load_flights_from_path(path)?,
            FlightSource::Sample => sample_flights(),
        };
        Self::ingest(records, city_capacity)
    }
}
