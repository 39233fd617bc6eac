//! Per-patient checklist route handlers
//!
//! Social history and pertinent physical exam hold one row per patient and
//! save with an upsert. The remaining sections (medical-history,
//! family-history, surgical-history, immunization) are checked lists synced
//! with a replace-all and addressed by a `{section}` path segment.

use crate::error::{not_found_error, validation_error, ApiResult};
use crate::models::{
    ChecklistEntry, ChecklistEntryPayload, ChecklistSection, MessageResponse,
    PertinentPhysicalExam, PertinentPhysicalExamPayload, SocialHistory, SocialHistoryPayload,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// GET /api/patients/{patient_id}/social-history
pub async fn get_social_history(
    State(state): State<SharedState>,
    Path(patient_id): Path<i32>,
) -> ApiResult<Json<SocialHistory>> {
    let history = state
        .checklists
        .social_history(patient_id)
        .await?
        .ok_or_else(|| not_found_error("No social history recorded for this patient"))?;
    Ok(Json(history))
}

/// POST /api/patients/{patient_id}/social-history
///
/// Echoes the submitted payload; the stored row's generated id is not
/// reflected back.
pub async fn save_social_history(
    State(state): State<SharedState>,
    Path(patient_id): Path<i32>,
    Json(payload): Json<SocialHistoryPayload>,
) -> ApiResult<Json<SocialHistoryPayload>> {
    state
        .checklists
        .save_social_history(patient_id, &payload)
        .await?;

    info!("Saved social history for patient {}", patient_id);
    Ok(Json(payload))
}

/// GET /api/patients/{patient_id}/pertinent-physical-exam
pub async fn get_physical_exam(
    State(state): State<SharedState>,
    Path(patient_id): Path<i32>,
) -> ApiResult<Json<PertinentPhysicalExam>> {
    let exam = state
        .checklists
        .physical_exam(patient_id)
        .await?
        .ok_or_else(|| not_found_error("No physical exam recorded for this patient"))?;
    Ok(Json(exam))
}

/// POST /api/patients/{patient_id}/pertinent-physical-exam
pub async fn save_physical_exam(
    State(state): State<SharedState>,
    Path(patient_id): Path<i32>,
    Json(payload): Json<PertinentPhysicalExamPayload>,
) -> ApiResult<Json<PertinentPhysicalExamPayload>> {
    state
        .checklists
        .save_physical_exam(patient_id, &payload)
        .await?;

    info!("Saved physical exam for patient {}", patient_id);
    Ok(Json(payload))
}

fn resolve_section(slug: &str) -> ApiResult<ChecklistSection> {
    ChecklistSection::from_slug(slug)
        .ok_or_else(|| not_found_error(format!("Unknown checklist section '{}'", slug)))
}

/// GET /api/patients/{patient_id}/{section}
pub async fn get_checklist(
    State(state): State<SharedState>,
    Path((patient_id, section)): Path<(i32, String)>,
) -> ApiResult<Json<Vec<ChecklistEntry>>> {
    let section = resolve_section(&section)?;

    let entries = state.checklists.entries(section, patient_id).await?;
    debug!(
        "Listed {} {} entries for patient {}",
        entries.len(),
        section.table(),
        patient_id
    );
    Ok(Json(entries))
}

/// POST /api/patients/{patient_id}/{section}
///
/// Replaces the section wholesale with the checked entries; unchecked
/// entries are dropped.
pub async fn save_checklist(
    State(state): State<SharedState>,
    Path((patient_id, section)): Path<(i32, String)>,
    Json(entries): Json<Vec<ChecklistEntryPayload>>,
) -> ApiResult<Json<MessageResponse>> {
    let section = resolve_section(&section)?;

    for entry in &entries {
        entry
            .validate()
            .map_err(|e| validation_error(e.to_string()))?;
    }

    let inserted = state
        .checklists
        .replace_entries(section, patient_id, &entries)
        .await?;

    info!(
        "Saved {} {} entries for patient {}",
        inserted,
        section.table(),
        patient_id
    );
    Ok(Json(MessageResponse::new("Checklist saved successfully")))
}
