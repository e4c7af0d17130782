//! Network construction errors.
//!
//! These are construction-time failures only: a built graph is valid by
//! construction, and queries against it never produce these errors.

/// Errors raised while building the network graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection was given a negative distance.
    #[error("negative distance {distance} on connection {a} - {b}")]
    NegativeDistance { a: String, b: String, distance: i64 },

    /// A connection was given a negative fare.
    #[error("negative fare {fare} on connection {a} - {b}")]
    NegativeFare { a: String, b: String, fare: i64 },
}
