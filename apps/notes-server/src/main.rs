//! Notes service binary.

use std::net::SocketAddr;

use note_store::NoteStore;
use notes_server::{config::Config, create_app, create_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(
        app_name = %config.app_name,
        version = %config.app_version,
        "Starting notes service"
    );

    // Connect the note store
    let store = NoteStore::connect(&config.database_url).await?;

    // Create application state
    let state = create_state(config.clone(), store);

    // Create application router
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
