//! HTMX Examples Server Library
//!
//! Server-rendered HTMX interaction examples: color swap, polling, server-sent
//! events, click-to-load, modal dialogs, inline editing and a WebSocket chat.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod push;
pub mod store;
pub mod views;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::AppState;

/// Create the application router with the given state
pub fn create_router(state: AppState) -> Router {
    let styles = ServeDir::new(format!("{}/styles", state.config.static_dir));
    let cors = cors_layer(&state.config.allowed_origins());

    Router::new()
        .route("/", get(api::index::index))
        .route("/health", get(api::health::health_check))
        // Color swap and simple fetches
        .route("/color", get(api::color::next_color))
        .route("/get", get(api::basic::get_message))
        .route("/reload", get(api::basic::reload))
        // Server push
        .route("/sse", get(api::sse::heartbeat_stream))
        .route("/ws", get(api::ws::ws_handler))
        // Click to edit
        .route(
            "/contacts/1",
            get(api::contacts::show).put(api::contacts::update),
        )
        .route("/contacts/1/edit", get(api::contacts::edit))
        // Click to load
        .route("/click_to_load", get(api::click_to_load::load_page))
        // Modal
        .route("/modal", get(api::modal::show))
        .nest_service("/styles", styles)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Create CORS layer from the configured allow-list
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("hx-request"),
            header::HeaderName::from_static("hx-target"),
            header::HeaderName::from_static("hx-current-url"),
            header::HeaderName::from_static("hx-trigger"),
        ])
}
