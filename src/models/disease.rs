//! Disease catalog and employee-disease association models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A disease in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct Disease {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub barcode: String,
    pub category: String,
}

/// Create/update payload for a disease
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiseasePayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "barcode is required"))]
    pub barcode: String,
    #[serde(default)]
    pub category: String,
}

/// An employee-disease association, joined with the disease catalog
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDisease {
    pub id: i32,
    pub employee_id: i32,
    pub disease_id: i32,
    pub disease_code: String,
    pub disease_name: String,
    pub date_diagnosed: String,
}

/// Payload to attach a disease to an employee
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddEmployeeDiseasePayload {
    #[serde(default)]
    #[validate(range(min = 1, message = "a valid disease id is required"))]
    pub disease_id: i32,
    #[serde(default)]
    pub date_diagnosed: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_disease_payload_required_fields() {
        let payload: DiseasePayload = serde_json::from_str(
            r#"{"name":"Hypertension","code":"I10","barcode":"880001"}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());

        let payload: DiseasePayload =
            serde_json::from_str(r#"{"name":"Hypertension","code":"","barcode":"880001"}"#)
                .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_association_payload_rejects_nonpositive_id() {
        let payload: AddEmployeeDiseasePayload =
            serde_json::from_str(r#"{"disease_id":0,"date_diagnosed":"2024-01-01"}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: AddEmployeeDiseasePayload =
            serde_json::from_str(r#"{"disease_id":3,"date_diagnosed":"2024-01-01"}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_absent_required_fields_fail_validation_not_deserialization() {
        let payload: DiseasePayload =
            serde_json::from_str(r#"{"name":"Hypertension"}"#).unwrap();
        assert_eq!(payload.code, "");
        assert!(payload.validate().is_err());

        let payload: AddEmployeeDiseasePayload =
            serde_json::from_str(r#"{"date_diagnosed":"2024-01-01"}"#).unwrap();
        assert_eq!(payload.disease_id, 0);
        assert!(payload.validate().is_err());
    }
}
