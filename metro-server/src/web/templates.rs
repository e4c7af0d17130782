//! Askama templates for the web frontend.

use askama::Template;

use crate::planner::Route;
use crate::seed::Line;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Booking form with line and station pickers.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lines: Vec<LineView>,
}

impl IndexTemplate {
    /// Build the form from the configured lines.
    pub fn from_lines() -> Self {
        let lines = Line::ALL
            .iter()
            .map(|line| LineView {
                name: line.name().to_string(),
                query_name: line.query_name().to_string(),
                stations: line.stations().iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { lines }
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Fare result fragment (successful query).
#[derive(Template)]
#[template(path = "fare_result.html")]
pub struct FareResultTemplate {
    pub view: FareView,
}

/// Informational or error notice fragment.
#[derive(Template)]
#[template(path = "notice.html")]
pub struct NoticeTemplate {
    /// CSS class: "info", "warning", or "error"
    pub kind: String,
    pub message: String,
}

impl NoticeTemplate {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: "info".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Booked ticket fragment with embedded QR code.
#[derive(Template)]
#[template(path = "ticket.html")]
pub struct TicketTemplate {
    pub source: String,
    pub destination: String,
    pub fare: i64,
    pub distance: i64,
    pub qr_data_uri: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A line with its stations, for the booking form.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub query_name: String,
    pub stations: Vec<String>,
}

/// Fare query view model for templates.
#[derive(Debug, Clone)]
pub struct FareView {
    pub source: String,
    pub destination: String,
    pub fare: i64,
    pub distance: i64,
    pub path: Vec<String>,
}

impl FareView {
    /// Create from a planner route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            source: route.path.first().cloned().unwrap_or_default(),
            destination: route.path.last().cloned().unwrap_or_default(),
            fare: route.fare,
            distance: route.distance,
            path: route.path.clone(),
        }
    }

    /// Human-readable route, e.g. "Nagasandra → Dasarahalli → Jalahalli".
    pub fn route_summary(&self) -> String {
        self.path.join(" → ")
    }

    /// Number of stops after boarding.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
