//! Per-patient checklist models
//!
//! Two shapes exist: single-row sections saved with an upsert (social
//! history, pertinent physical exam) and multi-row checked sections saved
//! with a delete-then-reinsert (medical/family/surgical history,
//! immunization).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The four multi-row checklist sections, addressed by URL slug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistSection {
    MedicalHistory,
    FamilyHistory,
    SurgicalHistory,
    Immunization,
}

impl ChecklistSection {
    /// Resolve a URL path segment to a section
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "medical-history" => Some(Self::MedicalHistory),
            "family-history" => Some(Self::FamilyHistory),
            "surgical-history" => Some(Self::SurgicalHistory),
            "immunization" => Some(Self::Immunization),
            _ => None,
        }
    }

    /// The table backing this section
    pub fn table(&self) -> &'static str {
        match self {
            Self::MedicalHistory => "medical_histories",
            Self::FamilyHistory => "family_histories",
            Self::SurgicalHistory => "surgical_histories",
            Self::Immunization => "immunizations",
        }
    }
}

/// A stored row of a multi-row checklist section
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistEntry {
    pub id: i32,
    pub patient_id: i32,
    pub code: String,
    pub label: String,
    pub details: String,
}

/// One submitted checklist line; only checked lines are persisted
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChecklistEntryPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub details: String,
}

/// Social history, one row per patient
#[derive(Debug, Clone, Serialize)]
pub struct SocialHistory {
    pub id: i32,
    pub patient_id: i32,
    pub smoking: String,
    pub alcohol: String,
    pub drug_use: String,
    pub diet: String,
    pub exercise: String,
    pub remarks: String,
}

/// Save payload for social history; echoed back verbatim on save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialHistoryPayload {
    #[serde(default)]
    pub smoking: String,
    #[serde(default)]
    pub alcohol: String,
    #[serde(default)]
    pub drug_use: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub exercise: String,
    #[serde(default)]
    pub remarks: String,
}

/// Pertinent physical exam findings, one row per patient
#[derive(Debug, Clone, Serialize)]
pub struct PertinentPhysicalExam {
    pub id: i32,
    pub patient_id: i32,
    pub general_survey: String,
    pub heent: String,
    pub chest_lungs: String,
    pub cardiovascular: String,
    pub abdomen: String,
    pub extremities: String,
    pub remarks: String,
}

/// Save payload for the physical exam; echoed back verbatim on save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PertinentPhysicalExamPayload {
    #[serde(default)]
    pub general_survey: String,
    #[serde(default)]
    pub heent: String,
    #[serde(default)]
    pub chest_lungs: String,
    #[serde(default)]
    pub cardiovascular: String,
    #[serde(default)]
    pub abdomen: String,
    #[serde(default)]
    pub extremities: String,
    #[serde(default)]
    pub remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_slugs_resolve() {
        assert_eq!(
            ChecklistSection::from_slug("medical-history"),
            Some(ChecklistSection::MedicalHistory)
        );
        assert_eq!(
            ChecklistSection::from_slug("family-history"),
            Some(ChecklistSection::FamilyHistory)
        );
        assert_eq!(
            ChecklistSection::from_slug("surgical-history"),
            Some(ChecklistSection::SurgicalHistory)
        );
        assert_eq!(
            ChecklistSection::from_slug("immunization"),
            Some(ChecklistSection::Immunization)
        );
        assert_eq!(ChecklistSection::from_slug("social-history"), None);
        assert_eq!(ChecklistSection::from_slug("bogus"), None);
    }

    #[test]
    fn test_section_tables() {
        assert_eq!(ChecklistSection::MedicalHistory.table(), "medical_histories");
        assert_eq!(ChecklistSection::Immunization.table(), "immunizations");
    }

    #[test]
    fn test_entry_payload_defaults_unchecked() {
        let entry: ChecklistEntryPayload =
            serde_json::from_str(r#"{"code":"asthma"}"#).unwrap();
        assert!(!entry.checked);
        assert_eq!(entry.label, "");
    }

    #[test]
    fn test_entry_without_code_fails_validation_not_deserialization() {
        use validator::Validate;

        let entry: ChecklistEntryPayload =
            serde_json::from_str(r#"{"label":"Asthma","checked":true}"#).unwrap();
        assert_eq!(entry.code, "");
        assert!(entry.validate().is_err());
    }
}
