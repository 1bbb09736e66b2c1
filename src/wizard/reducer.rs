use crate::models::{Confirmation, DraftField, SubmissionError};

use super::state::{Phase, WizardState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Update(DraftField, String),
    Next,
    Back,
    Confirm,
    SubmissionSucceeded(Confirmation),
    SubmissionFailed(SubmissionError),
    Retry,
    Reset,
}

impl From<Result<Confirmation, SubmissionError>> for WizardEvent {
    fn from(result: Result<Confirmation, SubmissionError>) -> Self {
        match result {
            Ok(confirmation) => WizardEvent::SubmissionSucceeded(confirmation),
            Err(error) => WizardEvent::SubmissionFailed(error),
        }
    }
}

/// Applies one event. Events that are not valid in the current state leave
/// it unchanged.
pub fn reduce(state: WizardState, event: WizardEvent) -> WizardState {
    match (state.phase.clone(), event) {
        (Phase::Editing, WizardEvent::Update(field, value)) => WizardState {
            draft: state.draft.with_field(field, value),
            ..state
        },

        (Phase::Editing, WizardEvent::Next) => match state.step.next() {
            Some(next) if state.can_proceed() => WizardState { step: next, ..state },
            _ => state,
        },

        (Phase::Editing, WizardEvent::Back) => match state.step.prev() {
            Some(prev) => WizardState { step: prev, ..state },
            None => state,
        },

        (Phase::Editing, WizardEvent::Confirm) => {
            if state.step.next().is_none() && state.is_complete() {
                WizardState {
                    phase: Phase::Submitting,
                    ..state
                }
            } else {
                state
            }
        }

        (Phase::Submitting, WizardEvent::SubmissionSucceeded(confirmation)) => WizardState {
            phase: Phase::Submitted { confirmation },
            ..state
        },

        (Phase::Submitting, WizardEvent::SubmissionFailed(error)) => WizardState {
            phase: Phase::Failed { error },
            ..state
        },

        // The draft is kept so nothing has to be re-entered.
        (Phase::Failed { .. }, WizardEvent::Retry) => WizardState {
            phase: Phase::Editing,
            ..state
        },

        (Phase::Submitted { .. }, WizardEvent::Reset) => WizardState::new(state.descriptor),

        (_, _) => state,
    }
}
