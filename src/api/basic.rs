use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::api::AppState;

/// Tells htmx to do a full page reload
pub const HX_REFRESH: &str = "HX-Refresh";

pub async fn get_message() -> &'static str {
    "Hello from server"
}

#[derive(Debug, Deserialize)]
pub struct ReloadQuery {
    pub timestamp: Option<String>,
}

/// Ask the page to refresh when it was served by a different process
pub async fn reload(
    State(state): State<AppState>,
    Query(query): Query<ReloadQuery>,
) -> impl IntoResponse {
    let stale = query.timestamp.as_deref() != Some(&*state.server_version);
    if stale {
        tracing::debug!(
            "Client version {:?} differs from {}, requesting refresh",
            query.timestamp,
            state.server_version
        );
        ([(HX_REFRESH, "true")], "").into_response()
    } else {
        "".into_response()
    }
}
