//! Patient record route handlers

use crate::error::{not_found_error, validation_error, ApiResult};
use crate::models::{MessageResponse, Patient, PatientPayload};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// GET /api/items
pub async fn list_patients(State(state): State<SharedState>) -> ApiResult<Json<Vec<Patient>>> {
    let patients = state.patients.list().await?;
    debug!("Listed {} patients", patients.len());
    Ok(Json(patients))
}

/// GET /api/items/{id}
pub async fn get_patient(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Patient>> {
    let patient = state
        .patients
        .get(id)
        .await?
        .ok_or_else(|| not_found_error("Patient not found"))?;
    Ok(Json(patient))
}

/// POST /api/items
pub async fn create_patient(
    State(state): State<SharedState>,
    Json(payload): Json<PatientPayload>,
) -> ApiResult<(StatusCode, Json<Patient>)> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let patient = state.patients.create(&payload).await?;
    info!("Created patient {}", patient.id);
    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT /api/items/{id}
pub async fn update_patient(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<PatientPayload>,
) -> ApiResult<Json<Patient>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let affected = state.patients.update(id, &payload).await?;
    if affected == 0 {
        return Err(not_found_error("Patient not found"));
    }

    info!("Updated patient {}", id);
    Ok(Json(Patient {
        id,
        case_no: payload.case_no,
        hospital_no: payload.hospital_no,
        lastname: payload.lastname,
        firstname: payload.firstname,
        middlename: payload.middlename,
        suffix: payload.suffix,
        birthdate: payload.birthdate,
        age: payload.age,
        room: payload.room,
        admission_date: payload.admission_date,
        discharge_date: payload.discharge_date,
        sex: payload.sex,
        height: payload.height,
        weight: payload.weight,
        complaint: payload.complaint,
    }))
}

/// DELETE /api/items/{id}
pub async fn delete_patient(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.patients.delete(id).await?;
    if affected == 0 {
        return Err(not_found_error("Patient not found"));
    }

    info!("Deleted patient {}", id);
    Ok(Json(MessageResponse::new("Patient deleted successfully")))
}
