//! Patient record models
//!
//! The patient chart the frontend still calls an "item" for historical
//! reasons. Field names on the wire are camelCase to match the existing
//! frontend.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored patient record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i32,
    pub case_no: String,
    pub hospital_no: String,
    pub lastname: String,
    pub firstname: String,
    pub middlename: String,
    pub suffix: String,
    pub birthdate: String,
    pub age: String,
    pub room: String,
    pub admission_date: String,
    pub discharge_date: String,
    pub sex: String,
    pub height: String,
    pub weight: String,
    pub complaint: String,
}

/// Create/update payload for a patient record
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    #[serde(default)]
    pub case_no: String,
    #[serde(default)]
    pub hospital_no: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "lastname is required"))]
    pub lastname: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "firstname is required"))]
    pub firstname: String,
    #[serde(default)]
    pub middlename: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub admission_date: String,
    #[serde(default)]
    pub discharge_date: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub complaint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[test]
    fn test_payload_requires_name_parts() {
        let payload: PatientPayload =
            serde_json::from_str(r#"{"lastname":"Cruz","firstname":"Juan"}"#).unwrap();
        assert!(payload.validate().is_ok());

        let payload: PatientPayload =
            serde_json::from_str(r#"{"lastname":"","firstname":"Juan"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_absent_required_field_fails_validation_not_deserialization() {
        // An omitted field must decode to an empty string so the presence
        // check can reject it with a validation error (400), not a body
        // parse error.
        let payload: PatientPayload =
            serde_json::from_str(r#"{"firstname":"Juan"}"#).unwrap();
        assert_eq!(payload.lastname, "");
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let patient = Patient {
            id: 7,
            case_no: "C-001".into(),
            hospital_no: "H-42".into(),
            lastname: "Cruz".into(),
            firstname: "Juan".into(),
            middlename: String::new(),
            suffix: String::new(),
            birthdate: "1990-04-12".into(),
            age: "35".into(),
            room: "201".into(),
            admission_date: "2024-01-01".into(),
            discharge_date: String::new(),
            sex: "M".into(),
            height: "170".into(),
            weight: "65".into(),
            complaint: "cough".into(),
        };

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["caseNo"], "C-001");
        assert_eq!(json["hospitalNo"], "H-42");
        assert_eq!(json["admissionDate"], "2024-01-01");
        assert_eq!(json["lastname"], "Cruz");
    }
}
