use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Lang;
use crate::models::{DraftField, ServiceKind, SubmissionError, TimeSlot};
use crate::services::sessions::WizardSession;
use crate::state::AppState;
use crate::wizard::{submit_with_timeout, WizardEvent, WizardState};

pub fn create_session(
    state: &AppState,
    kind: ServiceKind,
    preselected_id: Option<String>,
    lang: Lang,
) -> WizardSession {
    let descriptor = state.catalog.descriptor(kind, preselected_id, lang);
    let session = state
        .sessions
        .create(WizardState::new(Arc::new(descriptor)), lang);

    tracing::info!(
        session_id = %session.id,
        service = kind.as_str(),
        service_id = %session.state.draft.service_id,
        "booking session created"
    );
    session
}

/// Checks a field value against the form's input constraints and returns the
/// value to store.
fn constrain(
    session: &WizardSession,
    field: DraftField,
    value: &str,
    today: NaiveDate,
) -> Result<String, AppError> {
    match field {
        DraftField::ServiceId => {
            let descriptor = &session.state.descriptor;
            let value = value.trim();
            if value.is_empty() || !descriptor.requires_selection() || descriptor.option(value).is_some() {
                Ok(value.to_string())
            } else {
                Err(AppError::Validation(format!("unknown option: {value}")))
            }
        }
        DraftField::Date => {
            if value.trim().is_empty() {
                return Ok(String::new());
            }
            let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::Validation(format!("invalid date: {value}")))?;
            if date < today {
                return Err(AppError::Validation(format!(
                    "date {date} is before {today}"
                )));
            }
            Ok(date.format("%Y-%m-%d").to_string())
        }
        DraftField::Time => {
            if value.trim().is_empty() {
                return Ok(String::new());
            }
            TimeSlot::from_label(value)
                .map(|slot| slot.label().to_string())
                .ok_or_else(|| AppError::Validation(format!("unknown time slot: {value}")))
        }
        DraftField::Name | DraftField::Email | DraftField::Phone | DraftField::Notes => {
            Ok(value.to_string())
        }
    }
}

pub fn update_field(
    state: &AppState,
    id: Uuid,
    field: DraftField,
    value: &str,
    today: NaiveDate,
) -> Result<WizardSession, AppError> {
    let session = state.sessions.get(id)?;
    let value = constrain(&session, field, value, today)?;
    state.sessions.dispatch(id, WizardEvent::Update(field, value))
}

/// Runs the confirm step: enters `Submitting`, calls the sink without
/// holding the session lock, then records the outcome.
///
/// The sink call and the outcome are owned by a spawned task, so a caller
/// that goes away mid-submission still leaves the session `Submitted` or
/// `Failed` once the sink answers or the timeout fires.
pub async fn confirm(state: &Arc<AppState>, id: Uuid) -> Result<WizardSession, AppError> {
    let (session, submission) = state.sessions.begin_confirm(id)?;
    let Some(submission) = submission else {
        tracing::debug!(session_id = %id, step = session.state.step.index(), "confirm ignored, wizard not ready");
        return Ok(session);
    };

    tracing::info!(
        session_id = %id,
        service = session.state.descriptor.kind.as_str(),
        "submitting booking"
    );

    let task = tokio::spawn({
        let state = Arc::clone(state);
        async move {
            let result = submit_with_timeout(
                state.sink.as_ref(),
                &submission,
                state.config.submission_timeout(),
            )
            .await;

            match &result {
                Ok(confirmation) => {
                    tracing::info!(session_id = %id, reference = %confirmation.reference, "booking submitted")
                }
                Err(e) => tracing::warn!(session_id = %id, error = %e, "booking submission failed"),
            }

            state.sessions.finish_confirm(id, result)
        }
    });

    match task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(session_id = %id, error = %e, "submission task aborted");
            state.sessions.finish_confirm(
                id,
                Err(SubmissionError::Transport(format!("submission task aborted: {e}"))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sessions::SessionStore;
    use crate::models::{ServiceDescriptor, ServiceOption};

    fn session() -> WizardSession {
        let descriptor = ServiceDescriptor {
            kind: ServiceKind::GroupTherapy,
            label: "Book Group Therapy".to_string(),
            options: Some(vec![
                ServiceOption::new("1", "Foundations of Recovery"),
                ServiceOption::new("2", "Healing Connections"),
            ]),
            preselected_id: None,
        };
        SessionStore::new(30, std::time::Duration::from_secs(10))
            .create(WizardState::new(Arc::new(descriptor)), Lang::En)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn test_blank_values_clear_the_field() {
        let s = session();
        for field in [DraftField::Date, DraftField::Time, DraftField::ServiceId] {
            assert_eq!(constrain(&s, field, "   ", today()).unwrap(), "");
        }
    }

    #[test]
    fn test_date_constraints() {
        let s = session();
        assert_eq!(constrain(&s, DraftField::Date, " 2026-03-10 ", today()).unwrap(), "2026-03-10");
        assert!(matches!(
            constrain(&s, DraftField::Date, "2026-03-09", today()),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            constrain(&s, DraftField::Date, "March 15", today()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_time_and_option_constraints() {
        let s = session();
        assert_eq!(constrain(&s, DraftField::Time, " 2:00 PM", today()).unwrap(), "2:00 PM");
        assert!(constrain(&s, DraftField::Time, "1:00 PM", today()).is_err());
        assert_eq!(constrain(&s, DraftField::ServiceId, "2", today()).unwrap(), "2");
        assert!(constrain(&s, DraftField::ServiceId, "7", today()).is_err());
    }
}
