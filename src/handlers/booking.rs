use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::{Lang, MessageKey};
use crate::models::{BookingDraft, Confirmation, DraftField, ServiceDescriptor, ServiceKind, TimeSlot};
use crate::services::booking;
use crate::services::sessions::WizardSession;
use crate::state::AppState;
use crate::wizard::{BookingSummary, Phase, Step, WizardEvent};

#[derive(Serialize)]
pub struct WizardView {
    id: Uuid,
    lang: Lang,
    step: usize,
    step_key: Step,
    step_title: &'static str,
    steps: Vec<&'static str>,
    phase: &'static str,
    can_proceed: bool,
    can_go_back: bool,
    draft: BookingDraft,
    service: ServiceDescriptor,
    resolved_service_name: String,
    summary: BookingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirmation: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<WizardSession> for WizardView {
    fn from(session: WizardSession) -> Self {
        let lang = session.lang;
        let state = session.state;
        let message = match &state.phase {
            Phase::Submitted { .. } => Some(
                MessageKey::ThankYou.render(lang, &[("name", state.draft.name.as_str())]),
            ),
            Phase::Failed { .. } => Some(MessageKey::SubmissionFailed.text(lang).to_string()),
            Phase::Editing | Phase::Submitting => None,
        };

        WizardView {
            id: session.id,
            lang,
            step: state.step.index(),
            step_key: state.step,
            step_title: state.step.title_key().text(lang),
            steps: Step::ALL.iter().map(|s| s.title_key().text(lang)).collect(),
            phase: state.phase.as_str(),
            can_proceed: state.is_editing() && state.can_proceed(),
            can_go_back: state.is_editing() && state.step.prev().is_some(),
            summary: BookingSummary::from_state(&state),
            resolved_service_name: state.resolved_service_name().to_string(),
            confirmation: state.confirmation().cloned(),
            error: state.error().map(|e| e.to_string()),
            message,
            draft: state.draft,
            service: state.descriptor.as_ref().clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateSession {
    pub service: String,
    #[serde(default)]
    pub preselected_id: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

// POST /api/booking/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSession>,
) -> Result<(StatusCode, Json<WizardView>), AppError> {
    let kind = ServiceKind::parse(payload.service.trim())
        .ok_or_else(|| AppError::Validation(format!("unknown service: {}", payload.service)))?;
    let lang = payload
        .lang
        .as_deref()
        .and_then(Lang::parse)
        .unwrap_or(state.config.default_lang);

    let session = booking::create_session(&state, kind, payload.preselected_id, lang);
    Ok((StatusCode::CREATED, Json(session.into())))
}

// GET /api/booking/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    Ok(Json(state.sessions.get(id)?.into()))
}

#[derive(Deserialize)]
pub struct UpdateField {
    pub field: DraftField,
    #[serde(default)]
    pub value: String,
}

// POST /api/booking/sessions/:id/fields
pub async fn update_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateField>,
) -> Result<Json<WizardView>, AppError> {
    let today = chrono::Local::now().date_naive();
    let session = booking::update_field(&state, id, payload.field, &payload.value, today)?;
    Ok(Json(session.into()))
}

fn dispatch(state: &AppState, id: Uuid, event: WizardEvent) -> Result<Json<WizardView>, AppError> {
    Ok(Json(state.sessions.dispatch(id, event)?.into()))
}

// POST /api/booking/sessions/:id/next
pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    dispatch(&state, id, WizardEvent::Next)
}

// POST /api/booking/sessions/:id/back
pub async fn previous_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    dispatch(&state, id, WizardEvent::Back)
}

// POST /api/booking/sessions/:id/retry
pub async fn retry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    dispatch(&state, id, WizardEvent::Retry)
}

// POST /api/booking/sessions/:id/reset
pub async fn reset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    dispatch(&state, id, WizardEvent::Reset)
}

// POST /api/booking/sessions/:id/confirm
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let session = booking::confirm(&state, id).await?;
    Ok(Json(session.into()))
}

// GET /api/booking/time-slots
pub async fn time_slots() -> Json<Vec<&'static str>> {
    Json(TimeSlot::ALL.iter().map(|s| s.label()).collect())
}
