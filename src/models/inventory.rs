//! Clinic inventory models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stocked inventory item
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub brand: String,
    pub quantity: i32,
    pub unit: String,
    pub price: f64,
}

/// Create/update payload for an inventory item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InventoryItemPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "item_name is required"))]
    pub item_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_inventory_payload_required_fields() {
        let payload: InventoryItemPayload = serde_json::from_str(
            r#"{"item_name":"Gauze","category":"Supplies","brand":"MedPlus","quantity":10,"unit":"box","price":120.5}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());

        let payload: InventoryItemPayload =
            serde_json::from_str(r#"{"item_name":"","category":"Supplies","brand":"MedPlus"}"#)
                .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_quantity_and_price_default_to_zero() {
        let payload: InventoryItemPayload = serde_json::from_str(
            r#"{"item_name":"Gauze","category":"Supplies","brand":"MedPlus"}"#,
        )
        .unwrap();
        assert_eq!(payload.quantity, 0);
        assert_eq!(payload.price, 0.0);
    }

    #[test]
    fn test_absent_required_field_fails_validation_not_deserialization() {
        let payload: InventoryItemPayload =
            serde_json::from_str(r#"{"item_name":"Gauze","category":"Supplies"}"#).unwrap();
        assert_eq!(payload.brand, "");
        assert!(payload.validate().is_err());
    }
}
