//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::planner::{RouteOutcome, find_cheapest_route};
use crate::seed::Line;
use crate::ticket::{Ticket, TicketError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/stations", get(list_stations))
        .route("/fare", get(fare_query))
        .route("/ticket", post(book_ticket))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the booking form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate::from_lines()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// List the stations of a line.
async fn list_stations(
    Query(req): Query<StationListRequest>,
) -> Result<Json<StationListResponse>, AppError> {
    let line = Line::from_query(&req.line).ok_or_else(|| AppError::BadRequest {
        message: format!("Unknown line: {}", req.line),
    })?;

    Ok(Json(StationListResponse {
        line: line.query_name().to_string(),
        stations: line.stations().iter().map(|s| s.to_string()).collect(),
    }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Compute fare, distance, and route between two stations.
async fn fare_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<FareRequest>,
) -> Result<Response, AppError> {
    let outcome = find_cheapest_route(&state.network, &req.source, &req.destination);
    info!(
        source = %req.source,
        destination = %req.destination,
        found = matches!(outcome, RouteOutcome::Route(_)),
        "fare query"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = match &outcome {
            RouteOutcome::Route(route) => FareResultTemplate {
                view: FareView::from_route(route),
            }
            .render(),
            RouteOutcome::SameStation => {
                NoticeTemplate::info("Same station selected.").render()
            }
            RouteOutcome::NoRoute => NoticeTemplate::error(
                "No route found. Please select valid source and destination stations.",
            )
            .render(),
            RouteOutcome::UnknownStation(station) => {
                NoticeTemplate::error(format!("Unknown station: {station}")).render()
            }
        };
        let html = template.map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(FareResponse::from(outcome)).into_response())
    }
}

/// Book a ticket: re-run the query and render a QR code for the result.
async fn book_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: TicketRequest = serde_json::from_slice(&body).map_err(|e| {
        eprintln!("[JSON parse error] {e}");
        eprintln!("[Body] {}", String::from_utf8_lossy(&body));
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let route = match find_cheapest_route(&state.network, &req.source, &req.destination) {
        RouteOutcome::Route(route) => route,
        RouteOutcome::SameStation => {
            return Err(AppError::BadRequest {
                message: "Same station selected; nothing to book".to_string(),
            });
        }
        RouteOutcome::NoRoute => {
            return Err(AppError::NotFound {
                message: format!("No route between {} and {}", req.source, req.destination),
            });
        }
        RouteOutcome::UnknownStation(station) => {
            return Err(AppError::BadRequest {
                message: format!("Unknown station: {station}"),
            });
        }
    };

    let ticket = Ticket::new(&req.source, &req.destination, route.fare, route.distance);
    let qr_data_uri = ticket.qr_data_uri()?;
    info!(
        source = %ticket.source,
        destination = %ticket.destination,
        fare = ticket.fare,
        "ticket booked"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = TicketTemplate {
            source: ticket.source,
            destination: ticket.destination,
            fare: ticket.fare,
            distance: ticket.distance,
            qr_data_uri,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(TicketResponse {
            payload: ticket.payload(),
            source: ticket.source,
            destination: ticket.destination,
            fare: ticket.fare,
            distance: ticket.distance,
            qr_data_uri,
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<TicketError> for AppError {
    fn from(e: TicketError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
