//! Metro network graph.
//!
//! Stations are nodes keyed by name; connections are symmetric edges
//! carrying a distance and a fare. The graph is built once at startup
//! and never mutated afterwards, so queries can share it freely.

mod error;
mod graph;

pub use error::NetworkError;
pub use graph::{Edge, NetworkGraph, Station, build_network};
