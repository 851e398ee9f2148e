//! Skyroute library entry points.
//!
//! This crate ranks an in-memory snapshot of flight records by several
//! independent criteria and answers cost/connectivity queries over the
//! directed city graph derived from the same records. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod flight;
pub mod graph;
pub mod path;
pub mod ranking;
pub mod routing;

pub use catalog::{load_flights_from_path, load_flights_from_reader, sample_flights};
pub use dataset::{resolve_flight_source, FlightSnapshot, FlightSource, FLIGHTS_ENV_VAR};
pub use error::{Error, Result};
pub use flight::FlightRecord;
pub use graph::{CityId, RouteGraph, DEFAULT_CITY_CAPACITY};
pub use path::{find_cheapest_path, SimplePathIter};
pub use ranking::{select_ranker, RankKey, Ranker, RankingEngine};
pub use routing::{all_simple_paths, cheapest_path, AllSimplePaths, PathResult, SimplePath};
