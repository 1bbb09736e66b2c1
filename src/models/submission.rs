use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::contact::{CallbackRequest, ContactForm};
use super::draft::BookingDraft;
use super::service::ServiceKind;

/// Why a hand-off to the submission sink did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum SubmissionError {
    #[error("submission timed out after {0} ms")]
    Timeout(u64),

    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission transport error: {0}")]
    Transport(String),
}

/// Receipt returned by the sink for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub reference: String,
    pub received_at: NaiveDateTime,
}

impl Confirmation {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            received_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service_kind: ServiceKind,
    pub service_name: String,
    pub draft: BookingDraft,
}

/// Everything the site hands to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Submission {
    Booking(BookingRequest),
    Contact(ContactForm),
    Callback(CallbackRequest),
}

impl Submission {
    pub fn type_name(&self) -> &'static str {
        match self {
            Submission::Booking(_) => "booking",
            Submission::Contact(_) => "contact",
            Submission::Callback(_) => "callback",
        }
    }
}
