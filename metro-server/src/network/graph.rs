//! Adjacency-map graph of stations and their connections.

use std::collections::HashMap;

use super::error::NetworkError;

/// A connection between two adjacent stations.
///
/// Distances are in kilometres, fares in rupees. Both are non-negative
/// by construction ([`NetworkGraph::add_connection`] rejects negative
/// values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Distance between the two stations, in km.
    pub distance: i64,

    /// Fare for travelling this connection, in rupees.
    pub fare: i64,
}

/// A station and its adjacent connections.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    connections: HashMap<String, Edge>,
}

impl Station {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            connections: HashMap::new(),
        }
    }

    /// The station's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The edge to a neighbouring station, if directly connected.
    pub fn edge_to(&self, neighbor: &str) -> Option<Edge> {
        self.connections.get(neighbor).copied()
    }

    /// Iterate over this station's neighbours and the edges to them.
    pub fn neighbors(&self) -> impl Iterator<Item = (&str, Edge)> + '_ {
        self.connections.iter().map(|(name, edge)| (name.as_str(), *edge))
    }

    /// Number of directly connected stations.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}

/// An undirected weighted graph of metro stations.
///
/// Every name referenced as a neighbour is also a key in the station
/// map: `add_connection` auto-creates both endpoints. Edges are inserted
/// symmetrically and never updated or removed, so the graph is
/// append-only during construction and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    stations: HashMap<String, Station>,
}

impl NetworkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station with no connections. Idempotent: adding an
    /// existing station leaves its connections untouched.
    pub fn add_station(&mut self, name: &str) {
        if !self.stations.contains_key(name) {
            self.stations.insert(name.to_string(), Station::new(name));
        }
    }

    /// Connect two stations with a symmetric edge.
    ///
    /// Both stations are created if absent. Rejects negative distance
    /// or fare; a graph holding a negative weight would corrupt every
    /// later query, so this fails at build time.
    pub fn add_connection(
        &mut self,
        a: &str,
        b: &str,
        distance: i64,
        fare: i64,
    ) -> Result<(), NetworkError> {
        if distance < 0 {
            return Err(NetworkError::NegativeDistance {
                a: a.to_string(),
                b: b.to_string(),
                distance,
            });
        }
        if fare < 0 {
            return Err(NetworkError::NegativeFare {
                a: a.to_string(),
                b: b.to_string(),
                fare,
            });
        }

        self.add_station(a);
        self.add_station(b);

        let edge = Edge { distance, fare };
        if let Some(station) = self.stations.get_mut(a) {
            station.connections.insert(b.to_string(), edge);
        }
        if let Some(station) = self.stations.get_mut(b) {
            station.connections.insert(a.to_string(), edge);
        }
        Ok(())
    }

    /// Whether a station with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// The edge between two stations, if they are directly connected.
    pub fn edge(&self, a: &str, b: &str) -> Option<Edge> {
        self.stations.get(a).and_then(|s| s.edge_to(b))
    }

    /// Number of stations in the graph.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All station names, sorted for stable presentation.
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Build a graph from a sequence of `(a, b, distance, fare)` connections.
///
/// This is the single construction entry point for callers with an edge
/// list; stations are created as they are first referenced.
pub fn build_network<'a, I>(edges: I) -> Result<NetworkGraph, NetworkError>
where
    I: IntoIterator<Item = (&'a str, &'a str, i64, i64)>,
{
    let mut network = NetworkGraph::new();
    for (a, b, distance, fare) in edges {
        network.add_connection(a, b, distance, fare)?;
    }
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let network = NetworkGraph::new();
        assert!(network.is_empty());
        assert_eq!(network.len(), 0);
        assert!(!network.contains("Majestic"));
        assert!(network.station("Majestic").is_none());
    }

    #[test]
    fn add_station_is_idempotent() {
        let mut network = NetworkGraph::new();
        network.add_station("Majestic");
        network.add_station("Majestic");
        assert_eq!(network.len(), 1);
    }

    #[test]
    fn re_adding_a_station_keeps_its_connections() {
        let mut network = NetworkGraph::new();
        network.add_connection("Majestic", "Chickpete", 3, 5).unwrap();
        network.add_station("Majestic");
        assert_eq!(network.edge("Majestic", "Chickpete"), Some(Edge { distance: 3, fare: 5 }));
    }

    #[test]
    fn connection_is_symmetric() {
        let mut network = NetworkGraph::new();
        network.add_connection("Majestic", "Chickpete", 3, 5).unwrap();

        let forward = network.edge("Majestic", "Chickpete").unwrap();
        let backward = network.edge("Chickpete", "Majestic").unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.distance, 3);
        assert_eq!(forward.fare, 5);
    }

    #[test]
    fn connection_auto_creates_stations() {
        let mut network = NetworkGraph::new();
        network.add_connection("Majestic", "Chickpete", 3, 5).unwrap();

        assert!(network.contains("Majestic"));
        assert!(network.contains("Chickpete"));
        assert_eq!(network.len(), 2);
    }

    #[test]
    fn negative_distance_rejected() {
        let mut network = NetworkGraph::new();
        let err = network.add_connection("A", "B", -1, 5).unwrap_err();
        assert!(matches!(err, NetworkError::NegativeDistance { distance: -1, .. }));
        // Construction failed wholesale: no half-built stations
        assert!(network.is_empty());
    }

    #[test]
    fn negative_fare_rejected() {
        let mut network = NetworkGraph::new();
        let err = network.add_connection("A", "B", 1, -5).unwrap_err();
        assert!(matches!(err, NetworkError::NegativeFare { fare: -5, .. }));
        assert!(network.is_empty());
    }

    #[test]
    fn zero_weights_allowed() {
        let mut network = NetworkGraph::new();
        network.add_connection("A", "B", 0, 0).unwrap();
        assert_eq!(network.edge("A", "B"), Some(Edge { distance: 0, fare: 0 }));
    }

    #[test]
    fn neighbors_and_degree() {
        let mut network = NetworkGraph::new();
        network.add_connection("Majestic", "Chickpete", 3, 5).unwrap();
        network.add_connection("Majestic", "Sampige Road", 3, 5).unwrap();

        let majestic = network.station("Majestic").unwrap();
        assert_eq!(majestic.name(), "Majestic");
        assert_eq!(majestic.degree(), 2);

        let mut neighbors: Vec<&str> = majestic.neighbors().map(|(n, _)| n).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["Chickpete", "Sampige Road"]);

        assert_eq!(network.station("Chickpete").unwrap().degree(), 1);
    }

    #[test]
    fn station_names_sorted() {
        let mut network = NetworkGraph::new();
        network.add_connection("Peenya", "Jalahalli", 3, 5).unwrap();
        network.add_connection("Attiguppe", "Vijayanagar", 4, 8).unwrap();

        assert_eq!(
            network.station_names(),
            vec!["Attiguppe", "Jalahalli", "Peenya", "Vijayanagar"]
        );
    }

    #[test]
    fn build_network_from_edge_list() {
        let network = build_network([
            ("A", "B", 5, 10),
            ("B", "C", 3, 5),
        ])
        .unwrap();

        assert_eq!(network.len(), 3);
        assert_eq!(network.edge("A", "B"), Some(Edge { distance: 5, fare: 10 }));
        assert_eq!(network.edge("C", "B"), Some(Edge { distance: 3, fare: 5 }));
        assert_eq!(network.edge("A", "C"), None);
    }

    #[test]
    fn build_network_rejects_bad_edge() {
        let result = build_network([("A", "B", 5, 10), ("B", "C", -3, 5)]);
        assert!(result.is_err());
    }
}
