use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub languages: Vec<String>,
    pub available_days: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyProgram {
    pub id: String,
    pub name: String,
    pub therapist: String,
    #[serde(rename = "type")]
    pub program_type: String,
    pub duration: String,
    pub schedule: String,
    pub capacity: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCareProgram {
    pub id: String,
    pub name: String,
    pub hours: String,
    pub activities: Vec<String>,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Retreat,
    Workshop,
    Event,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Retreat => "retreat",
            EventKind::Workshop => "workshop",
            EventKind::Event => "event",
        }
    }

    /// Parses a filter value. `None` means "all kinds".
    pub fn parse_filter(s: &str) -> Result<Option<Self>, String> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(None),
            "retreat" => Ok(Some(EventKind::Retreat)),
            "workshop" => Ok(Some(EventKind::Workshop)),
            "event" => Ok(Some(EventKind::Event)),
            other => Err(format!("unknown event type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub price: Option<u32>,
    pub tags: Vec<String>,
}

impl Event {
    pub fn date_range_label(&self) -> String {
        let start = self.date.format("%B %-d, %Y").to_string();
        match self.end_date {
            Some(end) => format!("{start} – {}", end.format("%B %-d, %Y")),
            None => start,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub consultants: Vec<Consultant>,
    pub group_programs: Vec<TherapyProgram>,
    pub day_care_programs: Vec<DayCareProgram>,
    pub events: Vec<Event>,
}
