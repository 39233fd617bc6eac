//! Inventory route handlers

use crate::error::{not_found_error, validation_error, ApiResult};
use crate::models::{InventoryItem, InventoryItemPayload, MessageResponse};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// GET /api/inventory
pub async fn list_items(State(state): State<SharedState>) -> ApiResult<Json<Vec<InventoryItem>>> {
    let items = state.inventory.list().await?;
    debug!("Listed {} inventory items", items.len());
    Ok(Json(items))
}

/// POST /api/inventory
pub async fn create_item(
    State(state): State<SharedState>,
    Json(payload): Json<InventoryItemPayload>,
) -> ApiResult<(StatusCode, Json<InventoryItem>)> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let item = state.inventory.create(&payload).await?;
    info!("Created inventory item {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/inventory/{id}
pub async fn update_item(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<InventoryItemPayload>,
) -> ApiResult<Json<InventoryItem>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let affected = state.inventory.update(id, &payload).await?;
    if affected == 0 {
        return Err(not_found_error("Inventory item not found"));
    }

    info!("Updated inventory item {}", id);
    Ok(Json(InventoryItem {
        id,
        item_name: payload.item_name,
        category: payload.category,
        brand: payload.brand,
        quantity: payload.quantity,
        unit: payload.unit,
        price: payload.price,
    }))
}

/// DELETE /api/inventory/{id}
pub async fn delete_item(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.inventory.delete(id).await?;
    if affected == 0 {
        return Err(not_found_error("Inventory item not found"));
    }

    info!("Deleted inventory item {}", id);
    Ok(Json(MessageResponse::new(
        "Inventory item deleted successfully",
    )))
}
