//! Fare-weighted shortest-route search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::network::NetworkGraph;

/// A route between two stations, cheapest-first by fare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Total fare along the route, in rupees.
    pub fare: i64,

    /// Total distance along the route, in km.
    pub distance: i64,

    /// Station names from source to destination inclusive.
    pub path: Vec<String>,
}

/// Outcome of a cheapest-route query.
///
/// All four outcomes are ordinary values: the planner never panics and
/// never retries, and the caller decides how each case is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A route was found.
    Route(Route),

    /// Source and destination are the same station.
    SameStation,

    /// Both stations exist but no path connects them.
    NoRoute,

    /// The named station is not in the graph.
    UnknownStation(String),
}

/// Frontier entry: a station reachable for a tentative cumulative fare.
///
/// Ordered as a min-heap by fare (ties broken by station name so heap
/// order is deterministic). The heap is used with lazy deletion: a
/// station is re-pushed whenever its tentative fare improves, and
/// entries worse than the recorded best are skipped on pop.
#[derive(Debug, PartialEq, Eq)]
struct Frontier<'a> {
    fare: i64,
    station: &'a str,
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fare
            .cmp(&self.fare)
            .then_with(|| other.station.cmp(self.station))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest-fare route between two stations.
///
/// Dijkstra keyed by cumulative fare. Distance is not part of the
/// priority; among several minimum-fare routes the one surfaced by heap
/// order wins, and its distance is summed along the path afterwards.
///
/// Station existence is checked before the same-station shortcut, so a
/// query naming an absent station reports `UnknownStation` even when
/// source and destination are spelled identically.
pub fn find_cheapest_route(
    graph: &NetworkGraph,
    source: &str,
    destination: &str,
) -> RouteOutcome {
    if !graph.contains(source) {
        return RouteOutcome::UnknownStation(source.to_string());
    }
    if !graph.contains(destination) {
        return RouteOutcome::UnknownStation(destination.to_string());
    }
    if source == destination {
        return RouteOutcome::SameStation;
    }

    // Tentative best fares and predecessors, local to this query so
    // concurrent queries over the same graph need no locking.
    let mut best: HashMap<&str, i64> = HashMap::new();
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut heap = BinaryHeap::new();

    best.insert(source, 0);
    heap.push(Frontier {
        fare: 0,
        station: source,
    });

    let mut popped = 0usize;

    while let Some(Frontier { fare, station }) = heap.pop() {
        popped += 1;

        // Stale lazy-deletion entry: a cheaper fare was already recorded.
        if fare > best.get(station).copied().unwrap_or(i64::MAX) {
            continue;
        }

        if station == destination {
            let path = reconstruct_path(&prev, source, destination);
            let (fare, distance) = path_totals(graph, &path);
            debug!(source, destination, fare, distance, popped, "route found");
            return RouteOutcome::Route(Route {
                fare,
                distance,
                path,
            });
        }

        let Some(node) = graph.station(station) else {
            continue;
        };

        for (neighbor, edge) in node.neighbors() {
            let candidate = fare + edge.fare;
            if candidate < best.get(neighbor).copied().unwrap_or(i64::MAX) {
                best.insert(neighbor, candidate);
                prev.insert(neighbor, station);
                heap.push(Frontier {
                    fare: candidate,
                    station: neighbor,
                });
            }
        }
    }

    debug!(source, destination, popped, "no route");
    RouteOutcome::NoRoute
}

/// Walk predecessors back from destination to source and reverse.
fn reconstruct_path(prev: &HashMap<&str, &str>, source: &str, destination: &str) -> Vec<String> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while current != source {
        match prev.get(current) {
            Some(&p) => {
                path.push(p.to_string());
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Sum fare and distance over consecutive edges of a path.
fn path_totals(graph: &NetworkGraph, path: &[String]) -> (i64, i64) {
    let mut fare = 0;
    let mut distance = 0;
    for pair in path.windows(2) {
        if let Some(edge) = graph.edge(&pair[0], &pair[1]) {
            fare += edge.fare;
            distance += edge.distance;
        }
    }
    (fare, distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::build_network;

    #[test]
    fn two_hop_route() {
        let g = build_network([("A", "B", 5, 10), ("B", "C", 3, 5)]).unwrap();

        let RouteOutcome::Route(route) = find_cheapest_route(&g, "A", "C") else {
            panic!("expected a route");
        };
        assert_eq!(route.fare, 15);
        assert_eq!(route.distance, 8);
        assert_eq!(route.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn cheaper_detour_beats_direct_edge() {
        // Direct A-B costs 10; A-C-B costs 8 despite the extra hop.
        let g = build_network([("A", "B", 1, 10), ("A", "C", 1, 4), ("C", "B", 1, 4)]).unwrap();

        let RouteOutcome::Route(route) = find_cheapest_route(&g, "A", "B") else {
            panic!("expected a route");
        };
        assert_eq!(route.fare, 8);
        assert_eq!(route.path, vec!["A", "C", "B"]);
    }

    #[test]
    fn same_station() {
        let g = build_network([("A", "B", 5, 10)]).unwrap();
        assert_eq!(find_cheapest_route(&g, "A", "A"), RouteOutcome::SameStation);
        assert_eq!(find_cheapest_route(&g, "B", "B"), RouteOutcome::SameStation);
    }

    #[test]
    fn unknown_station() {
        let g = build_network([("A", "B", 5, 10)]).unwrap();

        assert_eq!(
            find_cheapest_route(&g, "A", "Z"),
            RouteOutcome::UnknownStation("Z".to_string())
        );
        assert_eq!(
            find_cheapest_route(&g, "Z", "A"),
            RouteOutcome::UnknownStation("Z".to_string())
        );
        // Even when source and destination match, an absent name is a
        // desync with the graph, not a same-station query.
        assert_eq!(
            find_cheapest_route(&g, "Z", "Z"),
            RouteOutcome::UnknownStation("Z".to_string())
        );
    }

    #[test]
    fn disconnected_components() {
        let g = build_network([("A", "B", 5, 10), ("C", "D", 3, 5)]).unwrap();
        assert_eq!(find_cheapest_route(&g, "A", "D"), RouteOutcome::NoRoute);
        assert_eq!(find_cheapest_route(&g, "D", "A"), RouteOutcome::NoRoute);
    }

    #[test]
    fn isolated_station_has_no_route() {
        let g = {
            let mut g = build_network([("A", "B", 5, 10)]).unwrap();
            g.add_station("Lonely");
            g
        };
        assert_eq!(find_cheapest_route(&g, "A", "Lonely"), RouteOutcome::NoRoute);
    }

    #[test]
    fn self_loop_does_not_wedge_the_search() {
        let mut g = build_network([("A", "B", 5, 10)]).unwrap();
        g.add_connection("A", "A", 0, 0).unwrap();

        let RouteOutcome::Route(route) = find_cheapest_route(&g, "A", "B") else {
            panic!("expected a route");
        };
        assert_eq!(route.path, vec!["A", "B"]);
        assert_eq!(route.fare, 10);
    }

    #[test]
    fn fare_symmetric_in_both_directions() {
        let g = build_network([
            ("A", "B", 1, 10),
            ("A", "C", 1, 4),
            ("C", "B", 1, 4),
            ("B", "D", 2, 7),
        ])
        .unwrap();

        let RouteOutcome::Route(forward) = find_cheapest_route(&g, "A", "D") else {
            panic!("expected a route");
        };
        let RouteOutcome::Route(backward) = find_cheapest_route(&g, "D", "A") else {
            panic!("expected a route");
        };
        assert_eq!(forward.fare, backward.fare);
        assert_eq!(forward.distance, backward.distance);
    }

    #[test]
    fn zero_fare_edges() {
        let g = build_network([("A", "B", 2, 0), ("B", "C", 2, 0)]).unwrap();

        let RouteOutcome::Route(route) = find_cheapest_route(&g, "A", "C") else {
            panic!("expected a route");
        };
        assert_eq!(route.fare, 0);
        assert_eq!(route.distance, 4);
    }
}
