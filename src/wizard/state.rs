use std::sync::Arc;

use serde::Serialize;

use crate::i18n::MessageKey;
use crate::models::{BookingDraft, BookingRequest, Confirmation, ServiceDescriptor, SubmissionError};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    SelectService,
    PickDateTime,
    EnterDetails,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SelectService,
        Step::PickDateTime,
        Step::EnterDetails,
        Step::Review,
    ];

    pub fn index(&self) -> usize {
        match self {
            Step::SelectService => 0,
            Step::PickDateTime => 1,
            Step::EnterDetails => 2,
            Step::Review => 3,
        }
    }

    pub fn next(&self) -> Option<Step> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title_key(&self) -> MessageKey {
        match self {
            Step::SelectService => MessageKey::StepSelectService,
            Step::PickDateTime => MessageKey::StepPickDateTime,
            Step::EnterDetails => MessageKey::StepYourDetails,
            Step::Review => MessageKey::StepConfirm,
        }
    }
}

/// Submission status, orthogonal to the step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Phase {
    Editing,
    Submitting,
    Submitted { confirmation: Confirmation },
    Failed { error: SubmissionError },
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Editing => "editing",
            Phase::Submitting => "submitting",
            Phase::Submitted { .. } => "submitted",
            Phase::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub descriptor: Arc<ServiceDescriptor>,
    pub step: Step,
    pub phase: Phase,
    pub draft: BookingDraft,
}

impl WizardState {
    pub fn new(descriptor: Arc<ServiceDescriptor>) -> Self {
        if descriptor.preselection_is_stale() {
            tracing::warn!(
                service = descriptor.kind.as_str(),
                preselected_id = descriptor.preselected_id.as_deref().unwrap_or(""),
                "preselected option no longer in catalog, falling back"
            );
        }
        let draft = Self::initial_draft(&descriptor);
        Self {
            descriptor,
            step: Step::SelectService,
            phase: Phase::Editing,
            draft,
        }
    }

    pub fn initial_draft(descriptor: &ServiceDescriptor) -> BookingDraft {
        BookingDraft::seeded(descriptor.seed_service_id())
    }

    /// Whether `Next` is allowed from the current step.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            Step::SelectService => {
                !self.descriptor.requires_selection() || !self.draft.service_id.is_empty()
            }
            Step::PickDateTime => self.draft.has_date_and_time(),
            Step::EnterDetails => self.draft.has_contact_details(),
            Step::Review => true,
        }
    }

    pub fn resolved_service_name(&self) -> &str {
        self.descriptor.resolve_name(&self.draft.service_id)
    }

    pub fn is_complete(&self) -> bool {
        self.draft.is_complete(self.descriptor.requires_selection())
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.phase {
            Phase::Submitted { confirmation } => Some(confirmation),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match &self.phase {
            Phase::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn booking_request(&self) -> BookingRequest {
        BookingRequest {
            service_kind: self.descriptor.kind,
            service_name: self.resolved_service_name().to_string(),
            draft: self.draft.clone(),
        }
    }
}
