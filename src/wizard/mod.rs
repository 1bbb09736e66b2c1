//! The four-step booking wizard.
//!
//! [`WizardState`] is an immutable value moved through [`reduce`]; the only
//! I/O happens in [`driver`], which hands the finished draft to a
//! [`SubmissionSink`](crate::services::submission::SubmissionSink).

pub mod driver;
pub mod reducer;
pub mod state;
pub mod summary;

pub use driver::{confirm, submit_with_timeout};
pub use reducer::{reduce, WizardEvent};
pub use state::{Phase, Step, WizardState};
pub use summary::BookingSummary;
