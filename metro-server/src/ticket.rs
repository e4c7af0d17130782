//! Ticket rendering.
//!
//! A booked ticket is a short text payload rendered as a QR code. The
//! web layer embeds the SVG as a base64 data URI; nothing here knows
//! about HTTP.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use qrcode::render::svg;

/// Errors raised while rendering a ticket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    /// QR encoding failed (payload too long for any QR version).
    #[error("failed to encode ticket QR code: {0}")]
    Qr(String),
}

/// A ticket for a priced route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub source: String,
    pub destination: String,
    pub fare: i64,
    pub distance: i64,
}

impl Ticket {
    /// Create a ticket from a priced query result.
    pub fn new(source: &str, destination: &str, fare: i64, distance: i64) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            fare,
            distance,
        }
    }

    /// The text payload encoded into the QR code.
    pub fn payload(&self) -> String {
        format!(
            "Ticket: From {} to {}\nFare: Rs. {}\nDistance: {} km",
            self.source, self.destination, self.fare, self.distance
        )
    }

    /// Render the ticket as an SVG QR code.
    pub fn qr_svg(&self) -> Result<String, TicketError> {
        let code = QrCode::new(self.payload().as_bytes())
            .map_err(|e| TicketError::Qr(format!("{e:?}")))?;
        let image = code
            .render()
            .min_dimensions(240, 240)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();
        Ok(image)
    }

    /// The SVG QR code as a `data:` URI suitable for an `<img>` tag.
    pub fn qr_data_uri(&self) -> Result<String, TicketError> {
        let svg = self.qr_svg()?;
        Ok(format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(svg.as_bytes())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> Ticket {
        Ticket::new("Mysore Road", "Peenya", 53, 27)
    }

    #[test]
    fn payload_format() {
        assert_eq!(
            ticket().payload(),
            "Ticket: From Mysore Road to Peenya\nFare: Rs. 53\nDistance: 27 km"
        );
    }

    #[test]
    fn qr_svg_renders() {
        let svg = ticket().qr_svg().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn data_uri_is_base64_svg() {
        let uri = ticket().qr_data_uri().unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        // The remainder must decode back to the SVG
        let b64 = uri.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, ticket().qr_svg().unwrap().as_bytes());
    }
}
