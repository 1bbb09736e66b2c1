use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{Duration, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Lang;
use crate::models::{Confirmation, Submission, SubmissionError};
use crate::wizard::{reduce, WizardEvent, WizardState};

#[derive(Debug, Clone)]
pub struct WizardSession {
    pub id: Uuid,
    pub state: WizardState,
    pub lang: Lang,
    pub created_at: NaiveDateTime,
    pub last_activity: NaiveDateTime,
}

/// In-memory wizard sessions, one per visitor page session. Idle sessions
/// expire after the configured TTL.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, WizardSession>>,
    ttl: Duration,
    submission_window: Duration,
}

impl SessionStore {
    /// `submission_timeout` bounds how long a session mid-submission is kept
    /// past its idle TTL.
    pub fn new(ttl_minutes: i64, submission_timeout: std::time::Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: Duration::minutes(ttl_minutes),
            submission_window: Duration::from_std(submission_timeout)
                .unwrap_or_else(|_| Duration::minutes(ttl_minutes)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, WizardSession>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Drops expired sessions and returns the live one for `id`.
    fn live<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, WizardSession>,
        id: Uuid,
    ) -> Result<&'a mut WizardSession, AppError> {
        let now = Utc::now().naive_utc();
        let ttl = self.ttl;
        let window = self.submission_window;
        // A submission in flight outlives the TTL until its timeout has passed.
        sessions.retain(|_, s| {
            s.last_activity + ttl > now || (s.state.is_submitting() && s.last_activity + window > now)
        });
        sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("booking session {id}")))
    }

    pub fn create(&self, state: WizardState, lang: Lang) -> WizardSession {
        let now = Utc::now().naive_utc();
        let session = WizardSession {
            id: Uuid::new_v4(),
            state,
            lang,
            created_at: now,
            last_activity: now,
        };
        self.lock().insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: Uuid) -> Result<WizardSession, AppError> {
        let mut sessions = self.lock();
        self.live(&mut sessions, id).map(|s| s.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispatch(&self, id: Uuid, event: WizardEvent) -> Result<WizardSession, AppError> {
        let mut sessions = self.lock();
        let session = self.live(&mut sessions, id)?;
        session.state = reduce(session.state.clone(), event);
        session.last_activity = Utc::now().naive_utc();
        Ok(session.clone())
    }

    /// Moves the wizard into `Submitting` and returns what must be handed to
    /// the sink. `None` means the wizard was not ready and nothing changed.
    /// A wizard already submitting is a conflict.
    pub fn begin_confirm(&self, id: Uuid) -> Result<(WizardSession, Option<Submission>), AppError> {
        let mut sessions = self.lock();
        let session = self.live(&mut sessions, id)?;
        if session.state.is_submitting() {
            return Err(AppError::Conflict("submission already in progress".to_string()));
        }

        session.state = reduce(session.state.clone(), WizardEvent::Confirm);
        session.last_activity = Utc::now().naive_utc();
        let submission = session
            .state
            .is_submitting()
            .then(|| Submission::Booking(session.state.booking_request()));
        Ok((session.clone(), submission))
    }

    pub fn finish_confirm(
        &self,
        id: Uuid,
        result: Result<Confirmation, SubmissionError>,
    ) -> Result<WizardSession, AppError> {
        self.dispatch(id, result.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{DraftField, ServiceDescriptor, ServiceKind};
    use crate::wizard::Step;

    fn state() -> WizardState {
        WizardState::new(Arc::new(ServiceDescriptor {
            kind: ServiceKind::DayProgram,
            label: "Day Care Program".to_string(),
            options: None,
            preselected_id: None,
        }))
    }

    fn fill(store: &SessionStore, id: Uuid) {
        for event in [
            WizardEvent::Next,
            WizardEvent::Update(DraftField::Date, "2026-03-15".to_string()),
            WizardEvent::Update(DraftField::Time, "11:00 AM".to_string()),
            WizardEvent::Next,
            WizardEvent::Update(DraftField::Name, "Youssef".to_string()),
            WizardEvent::Update(DraftField::Email, "y@example.com".to_string()),
            WizardEvent::Update(DraftField::Phone, "+20 10".to_string()),
            WizardEvent::Next,
        ] {
            store.dispatch(id, event).unwrap();
        }
    }

    #[test]
    fn test_create_and_get() {
        let store = SessionStore::new(30, std::time::Duration::from_secs(10));
        let session = store.create(state(), Lang::En);
        let loaded = store.get(session.id).unwrap();
        assert_eq!(loaded.state, session.state);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_session_not_found() {
        let store = SessionStore::new(30, std::time::Duration::from_secs(10));
        assert!(matches!(store.get(Uuid::new_v4()), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_expired_sessions_pruned() {
        let store = SessionStore::new(0, std::time::Duration::from_secs(10));
        let session = store.create(state(), Lang::En);
        assert!(matches!(store.get(session.id), Err(AppError::NotFound(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_begin_confirm_not_ready_returns_none() {
        let store = SessionStore::new(30, std::time::Duration::from_secs(10));
        let session = store.create(state(), Lang::En);
        let (after, submission) = store.begin_confirm(session.id).unwrap();
        assert!(submission.is_none());
        assert_eq!(after.state.step, Step::SelectService);
    }

    #[test]
    fn test_second_begin_confirm_conflicts() {
        let store = SessionStore::new(30, std::time::Duration::from_secs(10));
        let session = store.create(state(), Lang::En);
        fill(&store, session.id);

        let (after, submission) = store.begin_confirm(session.id).unwrap();
        assert!(after.state.is_submitting());
        assert!(submission.is_some());
        assert!(matches!(store.begin_confirm(session.id), Err(AppError::Conflict(_))));

        let done = store
            .finish_confirm(session.id, Ok(Confirmation::new("ref-9")))
            .unwrap();
        assert_eq!(done.state.confirmation().map(|c| c.reference.as_str()), Some("ref-9"));
    }

    fn backdate(store: &SessionStore, id: Uuid, by: Duration) {
        let mut sessions = store.lock();
        let session = sessions.get_mut(&id).unwrap();
        session.last_activity = session.last_activity - by;
    }

    #[test]
    fn test_submitting_session_kept_within_submission_window() {
        let store = SessionStore::new(30, std::time::Duration::from_secs(3600));
        let session = store.create(state(), Lang::En);
        fill(&store, session.id);
        store.begin_confirm(session.id).unwrap();

        backdate(&store, session.id, Duration::minutes(31));
        assert!(store.get(session.id).unwrap().state.is_submitting());
    }

    #[test]
    fn test_abandoned_submitting_session_expires() {
        let store = SessionStore::new(30, std::time::Duration::from_secs(10));
        let session = store.create(state(), Lang::En);
        fill(&store, session.id);
        store.begin_confirm(session.id).unwrap();

        backdate(&store, session.id, Duration::minutes(31));
        assert!(matches!(store.get(session.id), Err(AppError::NotFound(_))));
        assert!(store.is_empty());
    }
}
