use axum::extract::{rejection::QueryRejection, Query};

use crate::error::{AppError, AppResult};
use crate::models::PageQuery;
use crate::views::{ClickToLoadRows, HtmlFragment};

/// Next page of rows plus the control that loads the one after
pub async fn load_page(
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<HtmlFragment<ClickToLoadRows>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let page = query.resolve().ok_or_else(|| {
        AppError::bad_request(&format!("Page {} is out of range", query.page))
    })?;
    Ok(HtmlFragment(ClickToLoadRows { page }))
}
