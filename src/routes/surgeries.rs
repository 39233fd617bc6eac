//! Surgery schedule route handlers

use crate::error::{not_found_error, validation_error, ApiResult};
use crate::models::{MessageResponse, Surgery, SurgeryPayload};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// GET /api/surgeries
pub async fn list_surgeries(State(state): State<SharedState>) -> ApiResult<Json<Vec<Surgery>>> {
    let surgeries = state.surgeries.list().await?;
    debug!("Listed {} surgeries", surgeries.len());
    Ok(Json(surgeries))
}

/// GET /api/surgeries/{id}
pub async fn get_surgery(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Surgery>> {
    let surgery = state
        .surgeries
        .get(id)
        .await?
        .ok_or_else(|| not_found_error("Surgery not found"))?;
    Ok(Json(surgery))
}

/// POST /api/surgeries
pub async fn create_surgery(
    State(state): State<SharedState>,
    Json(payload): Json<SurgeryPayload>,
) -> ApiResult<(StatusCode, Json<Surgery>)> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let surgery = state.surgeries.create(&payload).await?;
    info!("Created surgery {}", surgery.id);
    Ok((StatusCode::CREATED, Json(surgery)))
}

/// PUT /api/surgeries/{id}
pub async fn update_surgery(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<SurgeryPayload>,
) -> ApiResult<Json<Surgery>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let affected = state.surgeries.update(id, &payload).await?;
    if affected == 0 {
        return Err(not_found_error("Surgery not found"));
    }

    info!("Updated surgery {}", id);
    Ok(Json(Surgery {
        id,
        patient_name: payload.patient_name,
        surgery_type: payload.surgery_type,
        surgeon_name: payload.surgeon_name,
        surgery_date: payload.surgery_date,
        surgery_time: payload.surgery_time,
        duration: payload.duration,
        status: payload.status,
        notes: payload.notes,
    }))
}

/// DELETE /api/surgeries/{id}
pub async fn delete_surgery(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.surgeries.delete(id).await?;
    if affected == 0 {
        return Err(not_found_error("Surgery not found"));
    }

    info!("Deleted surgery {}", id);
    Ok(Json(MessageResponse::new("Surgery deleted successfully")))
}
