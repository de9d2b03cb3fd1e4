use axum::extract::{Query, State};
use serde::Deserialize;

use crate::api::AppState;
use crate::views::{ColorBox, HtmlFragment};

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    pub current: Option<String>,
    #[serde(default)]
    pub trigger: String,
    pub animate: Option<String>,
}

/// Next color in the palette, keeping the caller's trigger
pub async fn next_color(
    State(state): State<AppState>,
    Query(query): Query<ColorQuery>,
) -> HtmlFragment<ColorBox> {
    let color = state.palette.next(query.current.as_deref()).to_string();

    HtmlFragment(ColorBox {
        color,
        trigger: query.trigger,
        animate: query.animate.as_deref() == Some("true"),
    })
}
