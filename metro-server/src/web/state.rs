//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkGraph;

/// Shared application state.
///
/// The network is built once at startup and read-only afterwards, so
/// handlers share it through an `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// The metro network graph
    pub network: Arc<NetworkGraph>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkGraph) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
