//! Cheapest-route planner.
//!
//! This module implements the core query that answers: "what is the
//! cheapest fare between these two stations, and which route does it
//! take?" The search is Dijkstra over cumulative fare; distance is
//! reported for the route found but never drives the search.

mod route;

pub use route::{Route, RouteOutcome, find_cheapest_route};
