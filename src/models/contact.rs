use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactSubject {
    GeneralInquiry,
    BookAppointment,
    EventInfo,
    InsuranceBilling,
    Careers,
    Other,
}

impl ContactSubject {
    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::GeneralInquiry => "General Inquiry",
            ContactSubject::BookAppointment => "Book an Appointment",
            ContactSubject::EventInfo => "Event & Retreat Info",
            ContactSubject::InsuranceBilling => "Insurance & Billing",
            ContactSubject::Careers => "Career Opportunities",
            ContactSubject::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallbackWindow {
    Morning,
    Afternoon,
    Evening,
}

impl CallbackWindow {
    pub fn label(&self) -> &'static str {
        match self {
            CallbackWindow::Morning => "Morning (9 AM – 12 PM)",
            CallbackWindow::Afternoon => "Afternoon (12 PM – 4 PM)",
            CallbackWindow::Evening => "Evening (4 PM – 7 PM)",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub subject: Option<ContactSubject>,
    pub message: String,
    #[serde(default)]
    pub request_callback: bool,
    #[serde(default)]
    pub callback_time: Option<CallbackWindow>,
    /// Language of the acknowledgement; the site default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Lang>,
}

impl ContactForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.subject.is_none() {
            missing.push("subject");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        if self.request_callback && self.callback_time.is_none() {
            missing.push("callback_time");
        }
        missing
    }
}

/// Request for a phone call about a specific event or retreat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallbackRequest {
    #[serde(default)]
    pub event_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub time: Option<CallbackWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Lang>,
}

impl CallbackRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        missing
    }
}
