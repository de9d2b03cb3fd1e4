use axum::{
    extract::{rejection::FormRejection, State},
    Form,
};

use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ContactSnapshot, UpdateContact};
use crate::views::HtmlFragment;

/// Contact card
pub async fn show(State(state): State<AppState>) -> HtmlFragment<ContactSnapshot> {
    HtmlFragment(state.contacts.current().await)
}

/// Contact edit form
pub async fn edit(State(state): State<AppState>) -> HtmlFragment<ContactSnapshot> {
    HtmlFragment(state.contacts.current_for_edit().await)
}

/// Overwrite the contact from the submitted form
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<UpdateContact>, FormRejection>,
) -> AppResult<HtmlFragment<ContactSnapshot>> {
    let Form(update) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(HtmlFragment(state.contacts.update(update).await))
}
