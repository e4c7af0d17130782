//! Embedded Namma Metro line data.
//!
//! The Purple and Green line tables the planner is seeded with.
//! "Peenya Industry" and "Peenya" appear on both lines and merge into
//! single interchange nodes in the flat graph, so routes may cross
//! lines without any line-change accounting.

use crate::network::{NetworkError, NetworkGraph};

/// A metro line, used by the UI to group station choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Purple,
    Green,
}

impl Line {
    /// All lines, in presentation order.
    pub const ALL: [Line; 2] = [Line::Purple, Line::Green];

    /// Human-readable line name.
    pub fn name(&self) -> &'static str {
        match self {
            Line::Purple => "Purple Line",
            Line::Green => "Green Line",
        }
    }

    /// Stations on this line, in track order.
    pub fn stations(&self) -> &'static [&'static str] {
        match self {
            Line::Purple => PURPLE_LINE_STATIONS,
            Line::Green => GREEN_LINE_STATIONS,
        }
    }

    /// Connections on this line as `(a, b, distance_km, fare_rs)`.
    pub fn connections(&self) -> &'static [(&'static str, &'static str, i64, i64)] {
        match self {
            Line::Purple => PURPLE_LINE_CONNECTIONS,
            Line::Green => GREEN_LINE_CONNECTIONS,
        }
    }

    /// Parse a line from its query-string form ("purple" / "green").
    pub fn from_query(s: &str) -> Option<Line> {
        match s.to_ascii_lowercase().as_str() {
            "purple" | "purple line" => Some(Line::Purple),
            "green" | "green line" => Some(Line::Green),
            _ => None,
        }
    }

    /// Query-string form of the line name.
    pub fn query_name(&self) -> &'static str {
        match self {
            Line::Purple => "purple",
            Line::Green => "green",
        }
    }
}

const PURPLE_LINE_STATIONS: &[&str] = &[
    "Mysore Road",
    "Deepanjali Nagar",
    "Attiguppe",
    "Vijayanagar",
    "Magadi Road",
    "Hosahalli",
    "Nayandahalli",
    "Peenya Industry",
    "Peenya",
];

const PURPLE_LINE_CONNECTIONS: &[(&str, &str, i64, i64)] = &[
    ("Mysore Road", "Deepanjali Nagar", 5, 10),
    ("Deepanjali Nagar", "Attiguppe", 3, 5),
    ("Deepanjali Nagar", "Vijayanagar", 4, 8),
    ("Vijayanagar", "Magadi Road", 3, 6),
    ("Magadi Road", "Hosahalli", 2, 4),
    ("Hosahalli", "Nayandahalli", 3, 6),
    ("Nayandahalli", "Peenya Industry", 4, 8),
    ("Peenya Industry", "Peenya", 3, 6),
];

const GREEN_LINE_STATIONS: &[&str] = &[
    "Nagasandra",
    "Dasarahalli",
    "Jalahalli",
    "Peenya Industry",
    "Peenya",
    "Goraguntepalya",
    "Yeshwantpur",
    "Sandal Soap Factory",
    "Mahalakshmi",
    "Rajajinagar",
    "Kuvempu Road",
    "Srirampura",
    "Sampige Road",
    "Kempegowda Interchange",
    "Chickpete",
    "K R Market",
    "National College",
    "Lalbagh",
    "South End Circle",
    "Jayanagar",
    "R V Road Interchange",
    "Banashankari",
    "JP Nagar",
    "Puttenahalli",
    "Anjanapura Cross Road",
];

const GREEN_LINE_CONNECTIONS: &[(&str, &str, i64, i64)] = &[
    ("Nagasandra", "Dasarahalli", 2, 5),
    ("Dasarahalli", "Jalahalli", 2, 5),
    ("Jalahalli", "Peenya Industry", 3, 5),
    ("Peenya Industry", "Peenya", 2, 5),
    ("Peenya", "Goraguntepalya", 3, 5),
    ("Goraguntepalya", "Yeshwantpur", 3, 5),
    ("Yeshwantpur", "Sandal Soap Factory", 3, 5),
    ("Sandal Soap Factory", "Mahalakshmi", 3, 5),
    ("Mahalakshmi", "Rajajinagar", 2, 5),
    ("Rajajinagar", "Kuvempu Road", 2, 5),
    ("Kuvempu Road", "Srirampura", 2, 5),
    ("Srirampura", "Sampige Road", 2, 5),
    ("Sampige Road", "Kempegowda Interchange", 3, 5),
    ("Kempegowda Interchange", "Chickpete", 3, 5),
    ("Chickpete", "K R Market", 2, 5),
    ("K R Market", "National College", 2, 5),
    ("National College", "Lalbagh", 2, 5),
    ("Lalbagh", "South End Circle", 3, 5),
    ("South End Circle", "Jayanagar", 2, 5),
    ("Jayanagar", "R V Road Interchange", 2, 5),
    ("R V Road Interchange", "Banashankari", 3, 5),
    ("Banashankari", "JP Nagar", 3, 5),
    ("JP Nagar", "Puttenahalli", 3, 5),
    ("Puttenahalli", "Anjanapura Cross Road", 2, 5),
];

/// Build the combined Bengaluru metro graph from the embedded tables.
///
/// The Green line's Peenya Industry/Peenya edge carries its own
/// (distance, fare) and overwrites the Purple line's values for that
/// pair, matching the source tables' insertion order.
pub fn bengaluru_network() -> Result<NetworkGraph, NetworkError> {
    let mut network = NetworkGraph::new();
    for line in Line::ALL {
        for station in line.stations() {
            network.add_station(station);
        }
        for &(a, b, distance, fare) in line.connections() {
            network.add_connection(a, b, distance, fare)?;
        }
    }
    Ok(network)
}
