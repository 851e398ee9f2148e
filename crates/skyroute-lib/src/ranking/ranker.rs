//! Ranking strategies implementing the Strategy pattern.
//!
//! This module provides the `Ranker` trait and one implementation per sort
//! algorithm. Every strategy reorders the slice in place and returns only once
//! the slice is fully ordered; the multiset of records is never changed.

use crate::flight::FlightRecord;

use super::RankKey;

/// Size of the counting buckets used by the flight-number radix sort.
const BYTE_BUCKETS: usize = 256;

/// Trait for ranking strategies.
pub trait Ranker: Send + Sync {
    /// The key this strategy orders by.
    fn key(&self) -> RankKey;

    /// Reorder `flights` in place.
    fn rank(&self, flights: &mut [FlightRecord]);

    /// Whether records with equal keys keep their relative order.
    fn is_stable(&self) -> bool {
        false
    }
}

/// Ascending price via adjacent exchange (bubble) sort.
///
/// O(n²). Only a strictly greater left price triggers a swap, so equal prices
/// keep their relative order.
#[derive(Debug, Clone, Default)]
pub struct BubblePriceRanker;

impl Ranker for BubblePriceRanker {
    fn key(&self) -> RankKey {
        RankKey::Price
    }

    fn rank(&self, flights: &mut [FlightRecord]) {
        let n = flights.len();
        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - pass - 1 {
                if flights[j].price > flights[j + 1].price {
                    flights.swap(j, j + 1);
                }
            }
        }
    }

    fn is_stable(&self) -> bool {
        true
    }
}

/// Ascending duration via in-place quicksort.
///
/// The pivot is always the last element of the active range (Lomuto
/// partition). Already-sorted and reverse-sorted inputs therefore degrade to
/// O(n²) comparisons. Duration ties may be reordered.
#[derive(Debug, Clone, Default)]
pub struct QuickDurationRanker;

impl Ranker for QuickDurationRanker {
    fn key(&self) -> RankKey {
        RankKey::Duration
    }

    fn rank(&self, flights: &mut [FlightRecord]) {
        quick_sort_by_duration(flights);
    }
}

fn quick_sort_by_duration(mut flights: &mut [FlightRecord]) {
    // Recurse into the smaller side and loop on the larger one so the stack
    // depth stays logarithmic. The partitions are identical to the plain
    // two-call recursion because the sub-ranges are disjoint.
    while flights.len() > 1 {
        let active = std::mem::take(&mut flights);
        let pivot = partition_by_duration(active);
        let (left, rest) = active.split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort_by_duration(left);
            flights = right;
        } else {
            quick_sort_by_duration(right);
            flights = left;
        }
    }
}

fn partition_by_duration(flights: &mut [FlightRecord]) -> usize {
    let high = flights.len() - 1;
    let pivot = flights[high].duration_minutes;
    let mut store = 0;
    for j in 0..high {
        if flights[j].duration_minutes < pivot {
            flights.swap(store, j);
            store += 1;
        }
    }
    flights.swap(store, high);
    store
}

/// On-time rate via binary max-heap sort.
///
/// Standard heap sort: the max-heap root is moved to the end of the shrinking
/// range, so the final order is ascending (lowest rate first).
#[derive(Debug, Clone, Default)]
pub struct HeapOnTimeRanker;

impl Ranker for HeapOnTimeRanker {
    fn key(&self) -> RankKey {
        RankKey::OnTimeRate
    }

    fn rank(&self, flights: &mut [FlightRecord]) {
        let n = flights.len();
        for root in (0..n / 2).rev() {
            sift_down_by_rate(flights, n, root);
        }
        for end in (1..n).rev() {
            flights.swap(0, end);
            sift_down_by_rate(flights, end, 0);
        }
    }
}

fn sift_down_by_rate(flights: &mut [FlightRecord], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && flights[left].on_time_rate > flights[largest].on_time_rate {
            largest = left;
        }
        if right < len && flights[right].on_time_rate > flights[largest].on_time_rate {
            largest = right;
        }
        if largest == root {
            return;
        }
        flights.swap(root, largest);
        root = largest;
    }
}

/// Lexicographic flight number via LSD radix sort.
///
/// One stable counting pass per byte position, from the last position of the
/// longest flight number down to the first. A flight number shorter than the
/// current position contributes byte `0`, so a prefix sorts before any longer
/// flight number that extends it.
#[derive(Debug, Clone, Default)]
pub struct RadixFlightNumberRanker;

impl Ranker for RadixFlightNumberRanker {
    fn key(&self) -> RankKey {
        RankKey::FlightNumber
    }

    fn rank(&self, flights: &mut [FlightRecord]) {
        let max_len = flights
            .iter()
            .map(|flight| flight.flight_number.len())
            .max()
            .unwrap_or(0);
        if flights.len() < 2 || max_len == 0 {
            return;
        }

        let mut order: Vec<usize> = (0..flights.len()).collect();
        let mut scratch = vec![0usize; flights.len()];

        for pos in (0..max_len).rev() {
            let mut counts = [0usize; BYTE_BUCKETS];
            for &index in &order {
                counts[byte_at(&flights[index], pos)] += 1;
            }
            for bucket in 1..BYTE_BUCKETS {
                counts[bucket] += counts[bucket - 1];
            }
            // Walking backwards while decrementing keeps each pass stable.
            for &index in order.iter().rev() {
                let bucket = byte_at(&flights[index], pos);
                counts[bucket] -= 1;
                scratch[counts[bucket]] = index;
            }
            std::mem::swap(&mut order, &mut scratch);
        }

        let sorted: Vec<FlightRecord> = order.iter().map(|&i| flights[i].clone()).collect();
        flights.clone_from_slice(&sorted);
    }

    fn is_stable(&self) -> bool {
        true
    }
}

fn byte_at(flight: &FlightRecord, pos: usize) -> usize {
    flight
        .flight_number
        .as_bytes()
        .get(pos)
        .copied()
        .map(usize::from)
        .unwrap_or(0)
}

/// Select the ranking strategy for a key.
pub fn select_ranker(key: RankKey) -> Box<dyn Ranker> {
    match key {
        RankKey::Price => Box::new(BubblePriceRanker),
        RankKey::Duration => Box::new(QuickDurationRanker),
        RankKey::OnTimeRate => Box::new(HeapOnTimeRanker),
        RankKey::FlightNumber => Box::new(RadixFlightNumberRanker),
    }
}
