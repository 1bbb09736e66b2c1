use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    IndividualConsultation,
    GroupTherapy,
    DayProgram,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::IndividualConsultation => "individual-consultation",
            ServiceKind::GroupTherapy => "group-therapy",
            ServiceKind::DayProgram => "day-program",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "individual-consultation" | "consultation" | "consultant" | "doctor" => {
                Some(ServiceKind::IndividualConsultation)
            }
            "group-therapy" => Some(ServiceKind::GroupTherapy),
            "day-program" | "daycare" | "day-care" => Some(ServiceKind::DayProgram),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
}

impl ServiceOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// What is being booked and which sub-options exist. Built once per wizard
/// and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub kind: ServiceKind,
    pub label: String,
    pub options: Option<Vec<ServiceOption>>,
    pub preselected_id: Option<String>,
}

impl ServiceDescriptor {
    /// A selection is required iff there is at least one option.
    pub fn requires_selection(&self) -> bool {
        self.options.as_ref().is_some_and(|opts| !opts.is_empty())
    }

    pub fn option(&self, id: &str) -> Option<&ServiceOption> {
        self.options.as_ref()?.iter().find(|o| o.id == id)
    }

    fn preselected(&self) -> Option<&str> {
        self.preselected_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// True when a deep-link id was given but names no current option.
    pub fn preselection_is_stale(&self) -> bool {
        match self.preselected() {
            Some(id) => self.requires_selection() && self.option(id).is_none(),
            None => false,
        }
    }

    /// Initial `service_id` for a fresh draft: the preselected option when
    /// it still exists, otherwise the first option, otherwise empty.
    pub fn seed_service_id(&self) -> String {
        if !self.requires_selection() {
            return String::new();
        }
        if let Some(opt) = self.preselected().and_then(|id| self.option(id)) {
            return opt.id.clone();
        }
        self.options
            .as_ref()
            .and_then(|opts| opts.first())
            .map(|o| o.id.clone())
            .unwrap_or_default()
    }

    pub fn resolve_name(&self, service_id: &str) -> &str {
        match &self.options {
            None => &self.label,
            Some(opts) => opts
                .iter()
                .find(|o| o.id == service_id)
                .map(|o| o.name.as_str())
                .unwrap_or(&self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctors(preselected: Option<&str>) -> ServiceDescriptor {
        ServiceDescriptor {
            kind: ServiceKind::IndividualConsultation,
            label: "Doctor Session".to_string(),
            options: Some(vec![
                ServiceOption::new("1", "Dr. A"),
                ServiceOption::new("2", "Dr. B"),
            ]),
            preselected_id: preselected.map(str::to_string),
        }
    }

    #[test]
    fn test_seed_defaults_to_first_option() {
        assert_eq!(doctors(None).seed_service_id(), "1");
        assert_eq!(doctors(Some("")).seed_service_id(), "1");
    }

    #[test]
    fn test_seed_uses_preselected() {
        assert_eq!(doctors(Some("2")).seed_service_id(), "2");
        assert!(!doctors(Some("2")).preselection_is_stale());
    }

    #[test]
    fn test_stale_preselection_falls_back_to_first() {
        let desc = doctors(Some("99"));
        assert!(desc.preselection_is_stale());
        assert_eq!(desc.seed_service_id(), "1");
    }

    #[test]
    fn test_empty_options_need_no_selection() {
        let desc = ServiceDescriptor {
            kind: ServiceKind::DayProgram,
            label: "Day Care Program".to_string(),
            options: Some(vec![]),
            preselected_id: Some("full".to_string()),
        };
        assert!(!desc.requires_selection());
        assert!(!desc.preselection_is_stale());
        assert_eq!(desc.seed_service_id(), "");
    }

    #[test]
    fn test_resolve_name_fallbacks() {
        let desc = doctors(None);
        assert_eq!(desc.resolve_name("2"), "Dr. B");
        assert_eq!(desc.resolve_name("gone"), "Doctor Session");

        let no_options = ServiceDescriptor {
            options: None,
            ..doctors(None)
        };
        assert_eq!(no_options.resolve_name("1"), "Doctor Session");
    }

    #[test]
    fn test_kind_parse_aliases() {
        assert_eq!(ServiceKind::parse("doctor"), Some(ServiceKind::IndividualConsultation));
        assert_eq!(ServiceKind::parse("daycare"), Some(ServiceKind::DayProgram));
        assert_eq!(ServiceKind::parse("group-therapy"), Some(ServiceKind::GroupTherapy));
        assert_eq!(ServiceKind::parse("retreat"), None);
    }
}
