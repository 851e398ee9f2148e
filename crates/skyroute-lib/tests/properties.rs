//! Property tests for ranking and route queries.

mod common;

use common::multiset;
use proptest::collection::vec;
use proptest::prelude::*;
use skyroute_lib::{select_ranker, FlightRecord, RankKey, RankingEngine, RouteGraph};

fn flight_strategy() -> impl Strategy<Value = FlightRecord> {
    (
        "[A-C]{0,3}[0-9]{0,2}",
        0u32..6,
        1u32..8,
        0u32..5,
    )
        .prop_map(|(number, price, duration, rate)| FlightRecord {
            flight_number: number,
            origin: "X".to_string(),
            destination: "Y".to_string(),
            price: f64::from(price) * 10.0,
            duration_minutes: duration * 15,
            on_time_rate: f64::from(rate) / 4.0,
        })
}

fn padded(number: &str, width: usize) -> Vec<u8> {
    let mut bytes = number.as_bytes().to_vec();
    bytes.resize(width, 0);
    bytes
}

fn key_values(flights: &[FlightRecord], key: RankKey) -> Vec<String> {
    flights
        .iter()
        .map(|f| match key {
            RankKey::Price => f.price.to_string(),
            RankKey::Duration => f.duration_minutes.to_string(),
            RankKey::OnTimeRate => f.on_time_rate.to_string(),
            RankKey::FlightNumber => f.flight_number.clone(),
        })
        .collect()
}

fn routes_strategy() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    vec((0usize..6, 0usize..6, 1u32..50), 0..14)
}

fn build_graph(routes: &[(usize, usize, u32)]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for city in 0..6 {
        graph.register_city(&format!("C{city}")).unwrap();
    }
    for &(from, to, price) in routes {
        graph
            .add_route(&format!("C{from}"), &format!("C{to}"), f64::from(price))
            .unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn sorting_preserves_the_multiset(flights in vec(flight_strategy(), 0..40)) {
        for key in RankKey::ALL {
            let mut engine = RankingEngine::from_records(flights.clone());
            engine.rank_by(key);
            prop_assert_eq!(multiset(engine.flights()), multiset(&flights));
        }
    }

    #[test]
    fn each_key_yields_a_total_order(flights in vec(flight_strategy(), 0..40)) {
        let mut engine = RankingEngine::from_records(flights.clone());

        engine.sort_by_price();
        let by_price = engine.flights().windows(2).all(|w| w[0].price <= w[1].price);
        prop_assert!(by_price, "price order broken");

        engine.sort_by_duration();
        let by_duration = engine
            .flights()
            .windows(2)
            .all(|w| w[0].duration_minutes <= w[1].duration_minutes);
        prop_assert!(by_duration, "duration order broken");

        engine.sort_by_on_time_rate();
        let by_rate = engine
            .flights()
            .windows(2)
            .all(|w| w[0].on_time_rate <= w[1].on_time_rate);
        prop_assert!(by_rate, "on-time rate order broken");

        engine.sort_by_flight_number();
        let width = flights.iter().map(|f| f.flight_number.len()).max().unwrap_or(0);
        let by_number = engine.flights().windows(2).all(|w| {
            padded(&w[0].flight_number, width) <= padded(&w[1].flight_number, width)
        });
        prop_assert!(by_number, "flight number order broken");
    }

    #[test]
    fn stable_keys_keep_input_order_for_ties(flights in vec(flight_strategy(), 0..40)) {
        // Tag each record with its input position through the destination field.
        let tagged: Vec<FlightRecord> = flights
            .into_iter()
            .enumerate()
            .map(|(i, mut f)| {
                f.destination = i.to_string();
                f
            })
            .collect();
        let position = |f: &FlightRecord| f.destination.parse::<usize>().unwrap();

        let mut by_price = RankingEngine::from_records(tagged.clone());
        by_price.sort_by_price();
        let price_ties_kept = by_price.flights().windows(2).all(|w| {
            w[0].price != w[1].price || position(&w[0]) < position(&w[1])
        });
        prop_assert!(price_ties_kept, "equal prices reordered");

        let mut by_number = RankingEngine::from_records(tagged);
        by_number.sort_by_flight_number();
        let number_ties_kept = by_number.flights().windows(2).all(|w| {
            w[0].flight_number != w[1].flight_number || position(&w[0]) < position(&w[1])
        });
        prop_assert!(number_ties_kept, "equal flight numbers reordered");
    }

    #[test]
    fn sorting_is_idempotent(flights in vec(flight_strategy(), 0..40)) {
        for key in RankKey::ALL {
            let mut once = RankingEngine::from_records(flights.clone());
            once.rank_by(key);
            let mut twice = once.clone();
            twice.rank_by(key);
            if select_ranker(key).is_stable() {
                prop_assert_eq!(once.flights(), twice.flights());
            } else {
                prop_assert_eq!(key_values(once.flights(), key), key_values(twice.flights(), key));
            }
        }
    }

    #[test]
    fn cheapest_path_matches_enumeration(
        routes in routes_strategy(),
        start in 0usize..6,
        goal in 0usize..6,
    ) {
        let graph = build_graph(&routes);
        let start = format!("C{start}");
        let goal = format!("C{goal}");

        let cheapest = graph.cheapest_path(&start, &goal).unwrap();
        let paths: Vec<_> = graph.all_simple_paths(&start, &goal).unwrap().collect();

        prop_assert_eq!(cheapest.is_reachable(), !paths.is_empty());
        if let Some(cost) = cheapest.total_cost() {
            let minimum = paths.iter().map(|p| p.total_cost).fold(f64::INFINITY, f64::min);
            prop_assert_eq!(cost, minimum);
            let listed = paths.iter().any(|p| p.path.as_slice() == cheapest.path());
            prop_assert!(listed, "cheapest path missing from enumeration");
        }
        for path in &paths {
            let mut seen = path.path.clone();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), path.path.len());
            prop_assert_eq!(path.path.first(), Some(&start));
            prop_assert_eq!(path.path.last(), Some(&goal));
        }
    }
}
