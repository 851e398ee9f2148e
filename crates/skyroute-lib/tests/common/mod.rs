//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests for building small flight sequences and
//! route graphs without going through a catalog file.

use skyroute_lib::{FlightRecord, RouteGraph};

/// Build a flight with placeholder cities.
#[allow(dead_code)]
pub fn flight(number: &str, price: f64, duration: u32, rate: f64) -> FlightRecord {
    FlightRecord {
        flight_number: number.to_string(),
        origin: "Origin".to_string(),
        destination: "Destination".to_string(),
        price,
        duration_minutes: duration,
        on_time_rate: rate,
    }
}

/// Three cities: A->B 100, B->C 50, A->C 200.
#[allow(dead_code)]
pub fn triangle_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.add_route("A", "B", 100.0).expect("add A->B");
    graph.add_route("B", "C", 50.0).expect("add B->C");
    graph.add_route("A", "C", 200.0).expect("add A->C");
    graph
}

/// Sort key used to compare record multisets regardless of order.
#[allow(dead_code)]
pub fn multiset(flights: &[FlightRecord]) -> Vec<String> {
    let mut keys: Vec<String> = flights
        .iter()
        .map(|f| {
            format!(
                "{}|{}|{}|{}|{}|{}",
                f.flight_number,
                f.origin,
                f.destination,
                f.price,
                f.duration_minutes,
                f.on_time_rate
            )
        })
        .collect();
    keys.sort();
    keys
}
