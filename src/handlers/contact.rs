use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::i18n::MessageKey;
use crate::models::{CallbackRequest, ContactForm};
use crate::services::contact;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmittedResponse {
    reference: String,
    message: String,
}

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<SubmittedResponse>, AppError> {
    let name = form.name.trim().to_string();
    let lang = form.lang.unwrap_or(state.config.default_lang);
    let confirmation = contact::submit_contact(&state, form).await?;
    Ok(Json(SubmittedResponse {
        reference: confirmation.reference,
        message: MessageKey::ContactReceived.render(lang, &[("name", name.as_str())]),
    }))
}

// POST /api/events/:id/callback
pub async fn request_callback(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(request): Json<CallbackRequest>,
) -> Result<Json<SubmittedResponse>, AppError> {
    let lang = request.lang.unwrap_or(state.config.default_lang);
    let (confirmation, title) = contact::request_callback(&state, &event_id, request).await?;
    Ok(Json(SubmittedResponse {
        reference: confirmation.reference,
        message: MessageKey::CallbackRequested.render(lang, &[("event", title.as_str())]),
    }))
}
