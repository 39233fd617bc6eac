//! Disease catalog and employee-disease association route handlers

use crate::error::{not_found_error, validation_error, ApiResult};
use crate::models::{
    AddEmployeeDiseasePayload, Disease, DiseasePayload, EmployeeDisease, MessageResponse,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// GET /api/diseases
pub async fn list_diseases(State(state): State<SharedState>) -> ApiResult<Json<Vec<Disease>>> {
    let diseases = state.diseases.list().await?;
    debug!("Listed {} diseases", diseases.len());
    Ok(Json(diseases))
}

/// POST /api/diseases
pub async fn create_disease(
    State(state): State<SharedState>,
    Json(payload): Json<DiseasePayload>,
) -> ApiResult<(StatusCode, Json<Disease>)> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let disease = state.diseases.create(&payload).await?;
    info!("Created disease {} ({})", disease.id, disease.code);
    Ok((StatusCode::CREATED, Json(disease)))
}

/// PUT /api/diseases/{id}
pub async fn update_disease(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<DiseasePayload>,
) -> ApiResult<Json<Disease>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let affected = state.diseases.update(id, &payload).await?;
    if affected == 0 {
        return Err(not_found_error("Disease not found"));
    }

    info!("Updated disease {}", id);
    Ok(Json(Disease {
        id,
        name: payload.name,
        code: payload.code,
        barcode: payload.barcode,
        category: payload.category,
    }))
}

/// DELETE /api/diseases/{id}
pub async fn delete_disease(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.diseases.delete(id).await?;
    if affected == 0 {
        return Err(not_found_error("Disease not found"));
    }

    info!("Deleted disease {}", id);
    Ok(Json(MessageResponse::new("Disease deleted successfully")))
}

/// GET /api/employees/{employee_id}/diseases
pub async fn list_employee_diseases(
    State(state): State<SharedState>,
    Path(employee_id): Path<i32>,
) -> ApiResult<Json<Vec<EmployeeDisease>>> {
    let diseases = state.diseases.list_for_employee(employee_id).await?;
    debug!(
        "Listed {} diseases for employee {}",
        diseases.len(),
        employee_id
    );
    Ok(Json(diseases))
}

/// POST /api/employees/{employee_id}/diseases
///
/// A duplicate (employee_id, disease_id) pair trips the junction table's
/// uniqueness constraint and surfaces as a database error.
pub async fn add_employee_disease(
    State(state): State<SharedState>,
    Path(employee_id): Path<i32>,
    Json(payload): Json<AddEmployeeDiseasePayload>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    state
        .diseases
        .add_for_employee(employee_id, payload.disease_id, &payload.date_diagnosed)
        .await?;

    info!(
        "Added disease {} to employee {}",
        payload.disease_id, employee_id
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Disease added to employee successfully",
        )),
    ))
}

/// DELETE /api/employees/{employee_id}/diseases/{disease_id}
pub async fn remove_employee_disease(
    State(state): State<SharedState>,
    Path((employee_id, disease_id)): Path<(i32, i32)>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state
        .diseases
        .remove_for_employee(employee_id, disease_id)
        .await?;
    if affected == 0 {
        return Err(not_found_error("Disease not found for this employee"));
    }

    info!(
        "Removed disease {} from employee {}",
        disease_id, employee_id
    );
    Ok(Json(MessageResponse::new(
        "Disease removed from employee successfully",
    )))
}
