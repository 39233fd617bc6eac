//! Surgery schedule models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A scheduled or completed surgery
#[derive(Debug, Clone, Serialize)]
pub struct Surgery {
    pub id: i32,
    pub patient_name: String,
    pub surgery_type: String,
    pub surgeon_name: String,
    pub surgery_date: String,
    pub surgery_time: String,
    pub duration: String,
    pub status: String,
    pub notes: String,
}

/// Create/update payload for a surgery
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SurgeryPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "patient_name is required"))]
    pub patient_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "surgery_type is required"))]
    pub surgery_type: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "surgeon_name is required"))]
    pub surgeon_name: String,
    #[serde(default)]
    pub surgery_date: String,
    #[serde(default)]
    pub surgery_time: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_surgery_payload_required_fields() {
        let payload: SurgeryPayload = serde_json::from_str(
            r#"{"patient_name":"Juan Cruz","surgery_type":"Appendectomy","surgeon_name":"Dr. Reyes"}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.status, "");

        let payload: SurgeryPayload = serde_json::from_str(
            r#"{"patient_name":"Juan Cruz","surgery_type":"","surgeon_name":"Dr. Reyes"}"#,
        )
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_absent_required_field_fails_validation_not_deserialization() {
        let payload: SurgeryPayload =
            serde_json::from_str(r#"{"patient_name":"Juan Cruz"}"#).unwrap();
        assert_eq!(payload.surgery_type, "");
        assert!(payload.validate().is_err());
    }
}
