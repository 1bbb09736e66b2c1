use chrono::NaiveDate;
use serde::Serialize;

use super::state::WizardState;

/// Display rows for the review step and the confirmation screen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub service: String,
    pub date: String,
    pub date_short: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BookingSummary {
    pub fn from_state(state: &WizardState) -> Self {
        let draft = &state.draft;
        Self {
            service: state.resolved_service_name().to_string(),
            date: format_long_date(&draft.date),
            date_short: format_short_date(&draft.date),
            time: draft.time.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            notes: Some(draft.notes.clone()).filter(|n| !n.trim().is_empty()),
        }
    }
}

/// `2026-03-15` -> `Sunday, March 15, 2026`. Unparsable input is returned
/// as-is, empty input stays empty.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// `2026-03-15` -> `Sunday, March 15`.
pub fn format_short_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d").to_string(),
        Err(_) => date.to_string(),
    }
}
