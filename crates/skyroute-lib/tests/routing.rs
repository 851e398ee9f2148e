mod common;

use common::triangle_graph;
use skyroute_lib::{
    cheapest_path, Error, FlightSnapshot, FlightSource, PathResult, RouteGraph,
    DEFAULT_CITY_CAPACITY,
};

fn sample_graph() -> RouteGraph {
    FlightSnapshot::load(&FlightSource::Sample, DEFAULT_CITY_CAPACITY)
        .expect("sample snapshot loads")
        .routes
}

#[test]
fn cheapest_path_beats_direct_edge() {
    let graph = triangle_graph();
    let result = graph.cheapest_path("A", "C").expect("known cities");
    assert!(result.is_reachable());
    assert_eq!(result.total_cost(), Some(150.0));
    assert_eq!(result.path(), ["A", "B", "C"]);
}

#[test]
fn all_simple_paths_lists_both_routes() {
    let graph = triangle_graph();
    let mut paths: Vec<(Vec<String>, f64)> = graph
        .all_simple_paths("A", "C")
        .expect("known cities")
        .map(|p| (p.path, p.total_cost))
        .collect();
    paths.sort_by(|a, b| a.1.total_cmp(&b.1));

    assert_eq!(
        paths,
        vec![
            (vec!["A".to_string(), "B".to_string(), "C".to_string()], 150.0),
            (vec!["A".to_string(), "C".to_string()], 200.0),
        ]
    );
}

#[test]
fn reverse_direction_is_unreachable() {
    let graph = triangle_graph();
    assert_eq!(
        graph.cheapest_path("C", "A").expect("known cities"),
        PathResult::Unreachable
    );
    assert_eq!(graph.all_simple_paths("C", "A").unwrap().count(), 0);
}

#[test]
fn unknown_city_is_distinguished_from_unreachable() {
    let graph = triangle_graph();
    let err = cheapest_path(&graph, "A", "Z").expect_err("Z never registered");
    assert!(matches!(err, Error::UnknownCity { .. }));
    assert!(err.to_string().contains("unknown city name: Z"));
}

#[test]
fn sample_beijing_to_new_york() {
    let graph = sample_graph();
    let result = graph.cheapest_path("Beijing", "NewYork").unwrap();
    // The direct Tokyo hop (2800) undercuts the Shanghai connection (1200 + 2500).
    assert_eq!(result.total_cost(), Some(10800.0));
    assert_eq!(result.path(), ["Beijing", "Tokyo", "NewYork"]);

    let paths: Vec<_> = graph.all_simple_paths("Beijing", "NewYork").unwrap().collect();
    let minimum = paths
        .iter()
        .map(|p| p.total_cost)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(minimum, 10800.0);
    assert_eq!(paths.len(), 3);
}

#[test]
fn sample_round_trip_through_europe() {
    let graph = sample_graph();
    let result = graph.cheapest_path("London", "Beijing").unwrap();
    assert_eq!(
        result.path(),
        ["London", "Paris", "Berlin", "Moscow", "Beijing"]
    );
    assert_eq!(result.total_cost(), Some(800.0 + 600.0 + 1500.0 + 3000.0));
    assert_eq!(result.hop_count(), 4);
}

#[test]
fn same_city_query_is_zero_cost() {
    let graph = sample_graph();
    let result = graph.cheapest_path("Paris", "Paris").unwrap();
    assert_eq!(result.total_cost(), Some(0.0));
    assert_eq!(result.path(), ["Paris"]);
    let paths: Vec<_> = graph.all_simple_paths("Paris", "Paris").unwrap().collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].total_cost, 0.0);
}

#[test]
fn repeated_enumeration_starts_fresh() {
    let graph = triangle_graph();
    let first: Vec<_> = graph.all_simple_paths("A", "C").unwrap().collect();
    let second: Vec<_> = graph.all_simple_paths("A", "C").unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn lowering_a_price_changes_the_cheapest_path() {
    let mut graph = triangle_graph();
    graph.add_route("A", "C", 120.0).unwrap();
    let result = graph.cheapest_path("A", "C").unwrap();
    assert_eq!(result.total_cost(), Some(120.0));
    assert_eq!(result.path(), ["A", "C"]);

    // A higher fare on the same pair never raises the weight again.
    graph.add_route("A", "C", 500.0).unwrap();
    assert_eq!(graph.cheapest_path("A", "C").unwrap().total_cost(), Some(120.0));
}

#[test]
fn overflowing_total_is_still_reachable() {
    let mut graph = RouteGraph::new();
    graph.add_route("A", "B", f64::MAX).unwrap();
    graph.add_route("B", "C", f64::MAX).unwrap();

    let result = graph.cheapest_path("A", "C").unwrap();
    let paths: Vec<_> = graph.all_simple_paths("A", "C").unwrap().collect();
    assert!(result.is_reachable());
    assert_eq!(result.path(), ["A", "B", "C"]);
    assert_eq!(paths.len(), 1);
    assert_eq!(result.total_cost(), Some(paths[0].total_cost));
}

#[test]
fn capacity_overflow_leaves_graph_unchanged() {
    let mut graph = RouteGraph::with_capacity(3);
    graph.add_route("A", "B", 10.0).unwrap();
    let err = graph.add_route("C", "D", 10.0).expect_err("two new cities, one slot");
    assert!(matches!(err, Error::CapacityExceeded { capacity: 3, .. }));
    assert_eq!(graph.cities(), ["A".to_string(), "B".to_string()]);
    assert!(matches!(
        graph.cheapest_path("C", "A"),
        Err(Error::UnknownCity { .. })
    ));
}
