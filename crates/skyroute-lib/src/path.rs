//! Index-level search over a [`RouteGraph`].
//!
//! Name resolution and result shaping live in [`crate::routing`]; the
//! functions here work purely on dense city indices.

use tracing::debug;

use crate::graph::{CityId, RouteGraph};

/// Run Dijkstra's algorithm over the dense weight matrix.
///
/// The next city to settle is chosen by a linear scan in index order, so on
/// equal tentative cost the earliest-registered city wins. A parent is only
/// replaced on a strictly cheaper relaxation. The search stops as soon as no
/// reached unsettled city remains.
///
/// Reachability is tracked apart from the distance, so a path whose prices
/// sum past `f64::MAX` is still found (with an infinite total).
///
/// Returns the total cost and the city sequence from `start` to `goal`, or
/// `None` when `goal` is unreachable.
pub fn find_cheapest_path(
    graph: &RouteGraph,
    start: CityId,
    goal: CityId,
) -> Option<(f64, Vec<CityId>)> {
    let count = graph.city_count();
    if start >= count || goal >= count {
        return None;
    }

    let mut distances = vec![f64::INFINITY; count];
    let mut reached = vec![false; count];
    let mut settled = vec![false; count];
    let mut parents: Vec<Option<CityId>> = vec![None; count];
    distances[start] = 0.0;
    reached[start] = true;

    for _ in 0..count {
        let mut current: Option<CityId> = None;
        for city in 0..count {
            if settled[city] || !reached[city] {
                continue;
            }
            match current {
                Some(best) if distances[city] >= distances[best] => {}
                _ => current = Some(city),
            }
        }
        let Some(current) = current else {
            break;
        };
        settled[current] = true;

        for next in 0..count {
            if settled[next] {
                continue;
            }
            if let Some(weight) = graph.weight(current, next) {
                let candidate = distances[current] + weight;
                if !reached[next] || candidate < distances[next] {
                    distances[next] = candidate;
                    parents[next] = Some(current);
                    reached[next] = true;
                }
            }
        }
    }

    if !reached[goal] {
        debug!(start, goal, "goal unreachable");
        return None;
    }

    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(city) = current {
        path.push(city);
        current = parents[city];
    }
    path.reverse();
    Some((distances[goal], path))
}

/// Depth-first backtracking frame: the city, the next neighbour index to
/// try, and the cost accumulated on the way in.
#[derive(Debug, Clone, Copy)]
struct Frame {
    city: CityId,
    next: CityId,
    cost: f64,
}

/// Lazy enumeration of every simple path between two cities.
///
/// This is the classic recursive backtracking search rewritten with an
/// explicit frame stack, so depth is bounded by the heap rather than the call
/// stack. Neighbours are tried in index order, which fixes the emission order.
/// A path ends as soon as it reaches the goal; the goal is never expanded.
///
/// The number of simple paths grows exponentially with graph density, so
/// callers should bound how many results they pull on large networks. Each
/// iterator owns its visited set; creating a new one starts from scratch.
#[derive(Debug, Clone)]
pub struct SimplePathIter<'a> {
    graph: &'a RouteGraph,
    goal: CityId,
    visited: Vec<bool>,
    stack: Vec<Frame>,
    trivial: Option<CityId>,
}

impl<'a> SimplePathIter<'a> {
    pub fn new(graph: &'a RouteGraph, start: CityId, goal: CityId) -> Self {
        let count = graph.city_count();
        let mut iter = Self {
            graph,
            goal,
            visited: vec![false; count],
            stack: Vec::new(),
            trivial: None,
        };
        if start >= count || goal >= count {
            return iter;
        }
        if start == goal {
            iter.trivial = Some(start);
        } else {
            iter.visited[start] = true;
            iter.stack.push(Frame {
                city: start,
                next: 0,
                cost: 0.0,
            });
        }
        iter
    }

    fn pop(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited[frame.city] = false;
        }
    }
}

impl Iterator for SimplePathIter<'_> {
    type Item = (Vec<CityId>, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(city) = self.trivial.take() {
            return Some((vec![city], 0.0));
        }

        let count = self.graph.city_count();
        loop {
            let frame = self.stack.last_mut()?;
            let mut step = None;
            while frame.next < count {
                let candidate = frame.next;
                frame.next += 1;
                if self.visited[candidate] {
                    continue;
                }
                if let Some(weight) = self.graph.weight(frame.city, candidate) {
                    step = Some((candidate, frame.cost + weight));
                    break;
                }
            }

            let Some((city, cost)) = step else {
                self.pop();
                continue;
            };

            if city == self.goal {
                let mut path: Vec<CityId> = self.stack.iter().map(|frame| frame.city).collect();
                path.push(city);
                return Some((path, cost));
            }

            self.visited[city] = true;
            self.stack.push(Frame {
                city,
                next: 0,
                cost,
            });
        }
    }
}
