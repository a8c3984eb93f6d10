//! Notes service.
//!
//! A thin CRUD HTTP API over a relational notes table, with an interactive
//! API documentation page. All business rules live in the backing store;
//! handlers validate shape and delegate.

pub mod api;
pub mod config;
pub mod doc;
pub mod error;
pub mod state;

use axum::Router;
use note_store::NoteStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::config::Config;
use crate::state::{SharedState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The OpenAPI document takes its title and version from configuration.
    let mut openapi = doc::ApiDoc::openapi();
    openapi.info.title = state.config.app_name.clone();
    openapi.info.version = state.config.app_version.clone();
    let docs: Router = Scalar::with_url(state.config.docs_path.clone(), openapi).into();

    api::create_router()
        .with_state(state)
        .merge(docs)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and store.
pub fn create_state(config: Config, store: NoteStore) -> SharedState {
    create_shared_state(config, store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
