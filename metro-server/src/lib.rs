//! Metro fare planner server.
//!
//! A web application that answers: "what is the cheapest fare between
//! these two metro stations, and which route does it take?"

pub mod network;
pub mod planner;
pub mod seed;
pub mod ticket;
pub mod web;
