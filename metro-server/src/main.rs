use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use metro_server::seed::bengaluru_network;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Build the network once; it is read-only for the life of the server.
    let network = bengaluru_network().expect("embedded seed data is well-formed");
    println!("Loaded metro network: {} stations", network.len());

    let state = AppState::new(network);
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metro Fare Planner listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the booking form.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /about         - About page");
    println!("  GET  /api/stations  - Stations per line");
    println!("  GET  /fare          - Fare and route between two stations");
    println!("  POST /ticket        - Book a ticket (QR code)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
