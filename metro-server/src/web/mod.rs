//! Web layer for the metro fare planner.
//!
//! Provides the booking form and HTTP endpoints for fare queries and
//! ticket generation.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
