use crate::errors::AppError;
use crate::models::{CallbackRequest, Confirmation, ContactForm, Submission};
use crate::state::AppState;
use crate::wizard::submit_with_timeout;

fn require(missing: Vec<&'static str>) -> Result<(), AppError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

pub async fn submit_contact(state: &AppState, form: ContactForm) -> Result<Confirmation, AppError> {
    require(form.missing_fields())?;

    let subject = form.subject.map(|s| s.label()).unwrap_or_default();
    let submission = Submission::Contact(form);
    let confirmation = submit_with_timeout(
        state.sink.as_ref(),
        &submission,
        state.config.submission_timeout(),
    )
    .await?;

    tracing::info!(subject, reference = %confirmation.reference, "contact message submitted");
    Ok(confirmation)
}

/// Returns the confirmation and the title of the event the call is about.
pub async fn request_callback(
    state: &AppState,
    event_id: &str,
    mut request: CallbackRequest,
) -> Result<(Confirmation, String), AppError> {
    let event = state
        .catalog
        .event(event_id)
        .ok_or_else(|| AppError::NotFound(format!("event {event_id}")))?;
    require(request.missing_fields())?;

    request.event_id = event.id.clone();
    let submission = Submission::Callback(request);
    let confirmation = submit_with_timeout(
        state.sink.as_ref(),
        &submission,
        state.config.submission_timeout(),
    )
    .await?;

    tracing::info!(event_id, reference = %confirmation.reference, "event callback requested");
    Ok((confirmation, event.title.clone()))
}
