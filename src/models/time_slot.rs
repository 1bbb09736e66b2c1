use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Time-of-day slots offered for every date and service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeSlot {
    #[serde(rename = "9:00 AM")]
    NineAm,
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    Noon,
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[serde(rename = "3:00 PM")]
    ThreePm,
    #[serde(rename = "4:00 PM")]
    FourPm,
    #[serde(rename = "5:00 PM")]
    FivePm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::Noon,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
        TimeSlot::FivePm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM",
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::Noon => "12:00 PM",
            TimeSlot::TwoPm => "2:00 PM",
            TimeSlot::ThreePm => "3:00 PM",
            TimeSlot::FourPm => "4:00 PM",
            TimeSlot::FivePm => "5:00 PM",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|slot| slot.label() == s)
    }

    pub fn start_time(&self) -> NaiveTime {
        let hour = match self {
            TimeSlot::NineAm => 9,
            TimeSlot::TenAm => 10,
            TimeSlot::ElevenAm => 11,
            TimeSlot::Noon => 12,
            TimeSlot::TwoPm => 14,
            TimeSlot::ThreePm => 15,
            TimeSlot::FourPm => 16,
            TimeSlot::FivePm => 17,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}
