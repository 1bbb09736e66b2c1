use std::time::Duration;

use crate::models::{Confirmation, Submission, SubmissionError};
use crate::services::submission::SubmissionSink;

use super::reducer::{reduce, WizardEvent};
use super::state::WizardState;

/// Hands a submission to the sink, failing with `Timeout` if the sink does
/// not answer within `timeout`.
pub async fn submit_with_timeout(
    sink: &dyn SubmissionSink,
    submission: &Submission,
    timeout: Duration,
) -> Result<Confirmation, SubmissionError> {
    match tokio::time::timeout(timeout, sink.submit(submission)).await {
        Ok(result) => result,
        Err(_) => Err(SubmissionError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Runs `Confirm` end to end for a wizard with a single owner.
///
/// A wizard that is already submitting, or that the reducer refuses to move
/// into `Submitting`, is returned unchanged without calling the sink.
pub async fn confirm(
    state: WizardState,
    sink: &dyn SubmissionSink,
    timeout: Duration,
) -> WizardState {
    if state.is_submitting() {
        return state;
    }
    let state = reduce(state, WizardEvent::Confirm);
    if !state.is_submitting() {
        return state;
    }

    let submission = Submission::Booking(state.booking_request());
    let result = submit_with_timeout(sink, &submission, timeout).await;
    reduce(state, result.into())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::models::{DraftField, ServiceDescriptor, ServiceKind};
    use crate::wizard::state::Step;

    struct RecordingSink {
        calls: AtomicUsize,
        received: Mutex<Vec<Submission>>,
        fail_with: Option<SubmissionError>,
        delay: Duration,
    }

    impl RecordingSink {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                received: Mutex::new(vec![]),
                fail_with: None,
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl SubmissionSink for RecordingSink {
        async fn submit(&self, submission: &Submission) -> Result<Confirmation, SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(submission.clone());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(Confirmation::new("ref-ok")),
            }
        }
    }

    fn ready_for_review() -> WizardState {
        let desc = Arc::new(ServiceDescriptor {
            kind: ServiceKind::DayProgram,
            label: "Day Care Program".to_string(),
            options: None,
            preselected_id: None,
        });
        [
            WizardEvent::Next,
            WizardEvent::Update(DraftField::Date, "2026-03-15".to_string()),
            WizardEvent::Update(DraftField::Time, "2:00 PM".to_string()),
            WizardEvent::Next,
            WizardEvent::Update(DraftField::Name, "Mona".to_string()),
            WizardEvent::Update(DraftField::Email, "mona@example.com".to_string()),
            WizardEvent::Update(DraftField::Phone, "+20 122".to_string()),
            WizardEvent::Next,
        ]
        .into_iter()
        .fold(WizardState::new(desc), reduce)
    }

    #[tokio::test]
    async fn test_confirm_calls_sink_once_with_full_draft() {
        let sink = RecordingSink::ok();
        let state = confirm(ready_for_review(), &sink, Duration::from_secs(1)).await;

        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.confirmation().map(|c| c.reference.as_str()), Some("ref-ok"));

        let received = sink.received.lock().unwrap();
        match &received[0] {
            Submission::Booking(req) => {
                assert_eq!(req.service_name, "Day Care Program");
                assert_eq!(req.draft.time, "2:00 PM");
                assert_eq!(req.draft.phone, "+20 122");
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_confirm_before_review_skips_sink() {
        let sink = RecordingSink::ok();
        let state = reduce(ready_for_review(), WizardEvent::Back);
        let state = confirm(state, &sink, Duration::from_secs(1)).await;
        assert_eq!(sink.calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.step, Step::EnterDetails);
        assert!(state.is_editing());
    }

    #[tokio::test]
    async fn test_confirm_while_submitting_skips_sink() {
        let sink = RecordingSink::ok();
        let submitting = reduce(ready_for_review(), WizardEvent::Confirm);
        let state = confirm(submitting.clone(), &sink, Duration::from_secs(1)).await;
        assert_eq!(sink.calls.load(Ordering::SeqCst), 0);
        assert_eq!(state, submitting);
    }

    #[tokio::test]
    async fn test_sink_failure_moves_to_failed() {
        let sink = RecordingSink {
            fail_with: Some(SubmissionError::Rejected("slot unavailable".to_string())),
            ..RecordingSink::ok()
        };
        let reviewed = ready_for_review();
        let state = confirm(reviewed.clone(), &sink, Duration::from_secs(1)).await;
        assert_eq!(
            state.error(),
            Some(&SubmissionError::Rejected("slot unavailable".to_string()))
        );
        assert_eq!(state.draft, reviewed.draft);
    }

    #[tokio::test]
    async fn test_slow_sink_times_out() {
        let sink = RecordingSink {
            delay: Duration::from_secs(5),
            ..RecordingSink::ok()
        };
        let state = confirm(ready_for_review(), &sink, Duration::from_millis(20)).await;
        assert_eq!(state.error(), Some(&SubmissionError::Timeout(20)));

        let state = reduce(state, WizardEvent::Retry);
        assert_eq!(state.step, Step::Review);
        assert!(state.is_editing());
    }
}
