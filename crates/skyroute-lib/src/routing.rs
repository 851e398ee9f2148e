//! Name-level route queries.
//!
//! This module provides:
//! - [`PathResult`] - Outcome of a cheapest-path query
//! - [`SimplePath`] - One result of the exhaustive path enumeration
//! - [`cheapest_path`] - Dijkstra search between two named cities
//! - [`all_simple_paths`] - Lazy enumeration of every simple path
//!
//! Unknown city names are reported as [`Error::UnknownCity`]. A destination
//! that exists but cannot be reached is the normal
//! [`PathResult::Unreachable`] outcome.
//!
//! # Example
//!
//! ```
//! use skyroute_lib::{PathResult, RouteGraph};
//!
//! let mut graph = RouteGraph::new();
//! graph.add_route("A", "B", 100.0).unwrap();
//! graph.add_route("B", "C", 50.0).unwrap();
//! graph.add_route("A", "C", 200.0).unwrap();
//!
//! let result = graph.cheapest_path("A", "C").unwrap();
//! assert_eq!(result.total_cost(), Some(150.0));
//! assert_eq!(graph.all_simple_paths("A", "C").unwrap().count(), 2);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{CityId, RouteGraph};
use crate::path::{find_cheapest_path, SimplePathIter};

/// Outcome of a cheapest-path query between two known cities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    Reachable {
        total_cost: f64,
        /// Cities from start to goal, both inclusive.
        path: Vec<String>,
    },
    Unreachable,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathResult::Reachable { .. })
    }

    pub fn total_cost(&self) -> Option<f64> {
        match self {
            PathResult::Reachable { total_cost, .. } => Some(*total_cost),
            PathResult::Unreachable => None,
        }
    }

    /// City names along the path; empty when unreachable.
    pub fn path(&self) -> &[String] {
        match self {
            PathResult::Reachable { path, .. } => path,
            PathResult::Unreachable => &[],
        }
    }

    /// Number of flights taken along the path.
    pub fn hop_count(&self) -> usize {
        self.path().len().saturating_sub(1)
    }
}

/// One simple path produced by [`all_simple_paths`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplePath {
    pub path: Vec<String>,
    pub total_cost: f64,
}

impl SimplePath {
    /// Number of flights taken along the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the cheapest path from `start` to `goal`.
pub fn cheapest_path(graph: &RouteGraph, start: &str, goal: &str) -> Result<PathResult> {
    let start_id = graph.resolve_city(start)?;
    let goal_id = graph.resolve_city(goal)?;

    let result = match find_cheapest_path(graph, start_id, goal_id) {
        Some((total_cost, ids)) => PathResult::Reachable {
            total_cost,
            path: names_for(graph, &ids)?,
        },
        None => PathResult::Unreachable,
    };
    debug!(start, goal, reachable = result.is_reachable(), "cheapest path query");
    Ok(result)
}

/// Start a lazy enumeration of every simple path from `start` to `goal`.
///
/// Paths are produced in depth-first order, trying neighbours by city index.
/// The enumeration is exponential in the worst case for densely connected
/// graphs; take only as many results as needed.
pub fn all_simple_paths<'a>(
    graph: &'a RouteGraph,
    start: &str,
    goal: &str,
) -> Result<AllSimplePaths<'a>> {
    let start_id = graph.resolve_city(start)?;
    let goal_id = graph.resolve_city(goal)?;
    debug!(start, goal, "enumerating simple paths");
    Ok(AllSimplePaths {
        graph,
        inner: SimplePathIter::new(graph, start_id, goal_id),
    })
}

/// Iterator returned by [`all_simple_paths`], yielding named paths.
#[derive(Debug, Clone)]
pub struct AllSimplePaths<'a> {
    graph: &'a RouteGraph,
    inner: SimplePathIter<'a>,
}

impl Iterator for AllSimplePaths<'_> {
    type Item = SimplePath;

    fn next(&mut self) -> Option<Self::Item> {
        let (ids, total_cost) = self.inner.next()?;
        let path = ids
            .iter()
            .filter_map(|&id| self.graph.city_name(id))
            .map(str::to_string)
            .collect();
        Some(SimplePath { path, total_cost })
    }
}

fn names_for(graph: &RouteGraph, ids: &[CityId]) -> Result<Vec<String>> {
    ids.iter()
        .map(|&id| {
            graph
                .city_name(id)
                .map(str::to_string)
                .ok_or_else(|| Error::UnknownCity {
                    name: format!("#{id}"),
                    suggestions: Vec::new(),
                })
        })
        .collect()
}
