//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::RouteOutcome;

/// Request for a fare query.
#[derive(Debug, Deserialize)]
pub struct FareRequest {
    /// Source station name
    pub source: String,

    /// Destination station name
    pub destination: String,
}

/// Request for the station list of a line.
#[derive(Debug, Deserialize)]
pub struct StationListRequest {
    /// Line in query form, e.g. "purple" or "green"
    pub line: String,
}

/// Response with the stations of a line.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Line query name
    pub line: String,

    /// Stations in track order
    pub stations: Vec<String>,
}

/// Tagged outcome of a fare query.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FareResponse {
    /// A route was found.
    Route {
        /// Total fare in rupees
        fare: i64,

        /// Total distance in km
        distance: i64,

        /// Station names from source to destination
        path: Vec<String>,
    },

    /// Source and destination are the same station.
    SameStation,

    /// No path connects the two stations.
    NoRoute,

    /// The named station is not in the network.
    UnknownStation {
        /// The offending station name
        station: String,
    },
}

impl From<RouteOutcome> for FareResponse {
    fn from(outcome: RouteOutcome) -> Self {
        match outcome {
            RouteOutcome::Route(route) => FareResponse::Route {
                fare: route.fare,
                distance: route.distance,
                path: route.path,
            },
            RouteOutcome::SameStation => FareResponse::SameStation,
            RouteOutcome::NoRoute => FareResponse::NoRoute,
            RouteOutcome::UnknownStation(station) => FareResponse::UnknownStation { station },
        }
    }
}

/// Request to book a ticket.
#[derive(Debug, Deserialize)]
pub struct TicketRequest {
    /// Source station name
    pub source: String,

    /// Destination station name
    pub destination: String,
}

/// A booked ticket.
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    /// Source station name
    pub source: String,

    /// Destination station name
    pub destination: String,

    /// Total fare in rupees
    pub fare: i64,

    /// Total distance in km
    pub distance: i64,

    /// Text payload encoded in the QR code
    pub payload: String,

    /// QR code as a base64 SVG data URI
    pub qr_data_uri: String,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
