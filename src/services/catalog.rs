use anyhow::Context;

use crate::i18n::{Lang, MessageKey};
use crate::models::{
    CatalogData, Consultant, DayCareProgram, Event, EventKind, ServiceDescriptor, ServiceKind,
    ServiceOption, TherapyProgram,
};

static CATALOG_JSON: &str = include_str!("../../data/catalog.json");

pub struct Catalog {
    data: CatalogData,
}

impl Catalog {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let data: CatalogData = serde_json::from_str(s).context("failed to parse catalog")?;
        Ok(Self { data })
    }

    pub fn consultants(&self) -> &[Consultant] {
        &self.data.consultants
    }

    pub fn group_programs(&self) -> &[TherapyProgram] {
        &self.data.group_programs
    }

    pub fn day_care_programs(&self) -> &[DayCareProgram] {
        &self.data.day_care_programs
    }

    pub fn events(&self) -> &[Event] {
        &self.data.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.data.events.iter().find(|e| e.id == id)
    }

    /// Search matches name or specialization; a specialization key of `all`
    /// matches everyone.
    pub fn filter_consultants(&self, search: &str, specialization: Option<&str>) -> Vec<&Consultant> {
        let search = search.trim().to_lowercase();
        let spec = specialization
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty() && s != "all");

        self.data
            .consultants
            .iter()
            .filter(|c| {
                let specialization = c.specialization.to_lowercase();
                let matches_search =
                    c.name.to_lowercase().contains(&search) || specialization.contains(&search);
                let matches_spec = spec.as_ref().map_or(true, |s| specialization.contains(s));
                matches_search && matches_spec
            })
            .collect()
    }

    /// Search matches name, therapist or therapy type; the type filter
    /// matches any tag.
    pub fn filter_programs(&self, search: &str, program_type: Option<&str>) -> Vec<&TherapyProgram> {
        let search = search.trim().to_lowercase();
        let wanted = program_type
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty() && s != "all");

        self.data
            .group_programs
            .iter()
            .filter(|p| {
                let matches_search = p.name.to_lowercase().contains(&search)
                    || p.therapist.to_lowercase().contains(&search)
                    || p.program_type.to_lowercase().contains(&search);
                let matches_type = wanted.as_ref().map_or(true, |w| {
                    p.tags.iter().any(|t| t.to_lowercase().contains(w))
                });
                matches_search && matches_type
            })
            .collect()
    }

    pub fn filter_events(&self, kind: Option<EventKind>) -> Vec<&Event> {
        self.data
            .events
            .iter()
            .filter(|e| kind.map_or(true, |k| e.kind == k))
            .collect()
    }

    pub fn options(&self, kind: ServiceKind) -> Vec<ServiceOption> {
        match kind {
            ServiceKind::IndividualConsultation => self
                .data
                .consultants
                .iter()
                .map(|c| ServiceOption::new(&c.id, format!("{} – {}", c.name, c.specialization)))
                .collect(),
            ServiceKind::GroupTherapy => self
                .data
                .group_programs
                .iter()
                .map(|p| ServiceOption::new(&p.id, format!("{} ({})", p.name, p.schedule)))
                .collect(),
            ServiceKind::DayProgram => self
                .data
                .day_care_programs
                .iter()
                .map(|p| ServiceOption::new(&p.id, format!("{} ({})", p.name, p.hours)))
                .collect(),
        }
    }

    pub fn descriptor(
        &self,
        kind: ServiceKind,
        preselected_id: Option<String>,
        lang: Lang,
    ) -> ServiceDescriptor {
        let label_key = match kind {
            ServiceKind::IndividualConsultation => MessageKey::ConsultationLabel,
            ServiceKind::GroupTherapy => MessageKey::GroupTherapyLabel,
            ServiceKind::DayProgram => MessageKey::DayProgramLabel,
        };
        ServiceDescriptor {
            kind,
            label: label_key.text(lang).to_string(),
            options: Some(self.options(kind)),
            preselected_id,
        }
    }
}
