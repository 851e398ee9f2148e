use std::collections::HashMap;

use tracing::warn;

use crate::error::{Error, Result};
use crate::routing::{self, AllSimplePaths, PathResult};

/// Dense index assigned to a city on first registration.
pub type CityId = usize;

/// Default number of distinct cities a graph accepts. Twenty matches the
/// size of the bundled sample network with headroom for a few extra routes.
pub const DEFAULT_CITY_CAPACITY: usize = 20;

/// Minimum similarity for a city name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Directed, price-weighted graph over city names.
///
/// Cities receive dense indices in registration order. Weights live in a dense
/// matrix sized to the registered city count: `INFINITY` marks a missing route
/// and the diagonal is always `0`. When several flights serve the same ordered
/// pair only the cheapest price is kept, so a weight never increases.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    capacity: usize,
    names: Vec<String>,
    name_to_id: HashMap<String, CityId>,
    weights: Vec<Vec<f64>>,
}

impl RouteGraph {
    /// Empty graph with [`DEFAULT_CITY_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CITY_CAPACITY)
    }

    /// Empty graph accepting at most `capacity` distinct cities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            names: Vec::new(),
            name_to_id: HashMap::new(),
            weights: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn city_count(&self) -> usize {
        self.names.len()
    }

    /// Registered city names, in index order.
    pub fn cities(&self) -> &[String] {
        &self.names
    }

    /// Return the index for `name`, allocating the next one on first sight.
    ///
    /// Fails with [`Error::CapacityExceeded`] when a new city would not fit;
    /// the graph is left unchanged in that case.
    pub fn register_city(&mut self, name: &str) -> Result<CityId> {
        if let Some(&id) = self.name_to_id.get(name) {
            return Ok(id);
        }
        if self.names.len() >= self.capacity {
            warn!(city = name, capacity = self.capacity, "city capacity exceeded");
            return Err(Error::CapacityExceeded {
                name: name.to_string(),
                capacity: self.capacity,
            });
        }

        let id = self.names.len();
        for row in &mut self.weights {
            row.push(f64::INFINITY);
        }
        let mut row = vec![f64::INFINITY; id + 1];
        row[id] = 0.0;
        self.weights.push(row);
        self.names.push(name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        Ok(id)
    }

    /// Register both cities and lower the `from -> to` weight to `price` if it
    /// is cheaper than the current one.
    pub fn add_route(&mut self, from: &str, to: &str, price: f64) -> Result<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidRoutePrice {
                from: from.to_string(),
                to: to.to_string(),
                price,
            });
        }
        self.ensure_room_for(&[from, to])?;
        let u = self.register_city(from)?;
        let v = self.register_city(to)?;
        let current = &mut self.weights[u][v];
        if price < *current {
            *current = price;
        }
        Ok(())
    }

    /// Fail before any registration when `names` would overflow the capacity.
    fn ensure_room_for(&self, names: &[&str]) -> Result<()> {
        let mut fresh: Vec<&str> = Vec::new();
        for &name in names {
            if !self.name_to_id.contains_key(name) && !fresh.contains(&name) {
                fresh.push(name);
            }
        }
        if self.names.len() + fresh.len() <= self.capacity {
            return Ok(());
        }
        // Report the first name that would not fit.
        let overflow = fresh[self.capacity.saturating_sub(self.names.len())];
        warn!(city = overflow, capacity = self.capacity, "city capacity exceeded");
        Err(Error::CapacityExceeded {
            name: overflow.to_string(),
            capacity: self.capacity,
        })
    }

    /// Lookup a city index by its case-sensitive name.
    pub fn lookup_city(&self, name: &str) -> Option<CityId> {
        self.name_to_id.get(name).copied()
    }

    /// Like [`RouteGraph::lookup_city`] but fails with suggestions attached.
    pub fn resolve_city(&self, name: &str) -> Result<CityId> {
        self.lookup_city(name).ok_or_else(|| Error::UnknownCity {
            name: name.to_string(),
            suggestions: self.fuzzy_city_matches(name, 3),
        })
    }

    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Weight of the `from -> to` edge, or `None` when no route exists.
    pub fn weight(&self, from: CityId, to: CityId) -> Option<f64> {
        self.weights
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|weight| weight.is_finite())
    }

    /// Number of directed routes between distinct cities.
    pub fn route_count(&self) -> usize {
        self.weights
            .iter()
            .enumerate()
            .map(|(u, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(v, weight)| u != v && weight.is_finite())
                    .count()
            })
            .sum()
    }

    /// Registered names most similar to `name`, best match first.
    pub fn fuzzy_city_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// Cheapest path between two named cities.
    pub fn cheapest_path(&self, start: &str, goal: &str) -> Result<PathResult> {
        routing::cheapest_path(self, start, goal)
    }

    /// Lazily enumerate every simple path between two named cities.
    pub fn all_simple_paths(&self, start: &str, goal: &str) -> Result<AllSimplePaths<'_>> {
        routing::all_simple_paths(self, start, goal)
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}
