use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    ServiceId,
    Date,
    Time,
    Name,
    Email,
    Phone,
    Notes,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        DraftField::ServiceId,
        DraftField::Date,
        DraftField::Time,
        DraftField::Name,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::ServiceId => "service_id",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Notes => "notes",
        }
    }
}

/// In-progress booking data. Empty strings mean "not yet entered".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    pub service_id: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl BookingDraft {
    pub fn seeded(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            ..Self::default()
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::ServiceId => &self.service_id,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Notes => &self.notes,
        }
    }

    /// Replaces one field and leaves the rest untouched.
    pub fn with_field(mut self, field: DraftField, value: String) -> Self {
        let slot = match field {
            DraftField::ServiceId => &mut self.service_id,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Notes => &mut self.notes,
        };
        *slot = value;
        self
    }

    pub fn has(&self, field: DraftField) -> bool {
        !self.field(field).trim().is_empty()
    }

    pub fn has_date_and_time(&self) -> bool {
        self.has(DraftField::Date) && self.has(DraftField::Time)
    }

    pub fn has_contact_details(&self) -> bool {
        self.has(DraftField::Name) && self.has(DraftField::Email) && self.has(DraftField::Phone)
    }

    pub fn is_complete(&self, selection_required: bool) -> bool {
        (!selection_required || self.has(DraftField::ServiceId))
            && self.has_date_and_time()
            && self.has_contact_details()
    }
}
