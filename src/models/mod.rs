pub mod catalog;
pub mod contact;
pub mod draft;
pub mod service;
pub mod submission;
pub mod time_slot;

pub use catalog::{CatalogData, Consultant, DayCareProgram, Event, EventKind, TherapyProgram};
pub use contact::{CallbackRequest, CallbackWindow, ContactForm, ContactSubject};
pub use draft::{BookingDraft, DraftField};
pub use service::{ServiceDescriptor, ServiceKind, ServiceOption};
pub use submission::{BookingRequest, Confirmation, Submission, SubmissionError};
pub use time_slot::TimeSlot;
