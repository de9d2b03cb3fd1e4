use axum::{extract::State, response::Html};

use crate::api::AppState;
use crate::views::{Fragment, IndexPage};

pub const PAGE_TITLE: &str = "Hello, HTMX!";

/// Gallery page with every example
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(
        IndexPage {
            title: PAGE_TITLE,
            server_version: &state.server_version,
            live_reload: state.config.is_dev(),
            examples: &state.gallery,
        }
        .render(),
    )
}
