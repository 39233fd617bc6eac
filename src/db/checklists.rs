//! Per-patient checklist persistence
//!
//! Single-row sections (social history, pertinent physical exam) are saved
//! with a check-then-insert-or-update; multi-row sections are synced with a
//! delete-then-reinsert of the checked entries. Both run inside a
//! transaction so concurrent saves for the same patient cannot leave the
//! section half-written.

use crate::error::AppError;
use crate::models::{
    ChecklistEntry, ChecklistEntryPayload, ChecklistSection, PertinentPhysicalExam,
    PertinentPhysicalExamPayload, SocialHistory, SocialHistoryPayload,
};
use deadpool_postgres::Pool;
use tracing::debug;

/// Checklist service for database operations
pub struct ChecklistService {
    pool: Pool,
}

impl ChecklistService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn social_history(
        &self,
        patient_id: i32,
    ) -> Result<Option<SocialHistory>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                "SELECT id, patient_id, smoking, alcohol, drug_use, diet, exercise, remarks \
                 FROM social_histories WHERE patient_id = $1",
                &[&patient_id],
            )
            .await?;

        Ok(row.map(|row| SocialHistory {
            id: row.get("id"),
            patient_id: row.get("patient_id"),
            smoking: row.get("smoking"),
            alcohol: row.get("alcohol"),
            drug_use: row.get("drug_use"),
            diet: row.get("diet"),
            exercise: row.get("exercise"),
            remarks: row.get("remarks"),
        }))
    }

    /// Insert or update the patient's social history
    pub async fn save_social_history(
        &self,
        patient_id: i32,
        payload: &SocialHistoryPayload,
    ) -> Result<(), AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx
            .query_one(
                "SELECT COUNT(*) FROM social_histories WHERE patient_id = $1",
                &[&patient_id],
            )
            .await?;
        let existing: i64 = row.get(0);

        if existing > 0 {
            tx.execute(
                "UPDATE social_histories SET smoking = $1, alcohol = $2, drug_use = $3, \
                 diet = $4, exercise = $5, remarks = $6, updated_at = CURRENT_TIMESTAMP \
                 WHERE patient_id = $7",
                &[
                    &payload.smoking,
                    &payload.alcohol,
                    &payload.drug_use,
                    &payload.diet,
                    &payload.exercise,
                    &payload.remarks,
                    &patient_id,
                ],
            )
            .await?;
        } else {
            tx.execute(
                "INSERT INTO social_histories (patient_id, smoking, alcohol, drug_use, diet, \
                 exercise, remarks) VALUES ($1, $2, $3, $4, $5, $6, $7)",
                &[
                    &patient_id,
                    &payload.smoking,
                    &payload.alcohol,
                    &payload.drug_use,
                    &payload.diet,
                    &payload.exercise,
                    &payload.remarks,
                ],
            )
            .await?;
        }

        tx.commit().await?;
        debug!("Saved social history for patient {}", patient_id);
        Ok(())
    }

    pub async fn physical_exam(
        &self,
        patient_id: i32,
    ) -> Result<Option<PertinentPhysicalExam>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                "SELECT id, patient_id, general_survey, heent, chest_lungs, cardiovascular, \
                 abdomen, extremities, remarks \
                 FROM pertinent_physical_exams WHERE patient_id = $1",
                &[&patient_id],
            )
            .await?;

        Ok(row.map(|row| PertinentPhysicalExam {
            id: row.get("id"),
            patient_id: row.get("patient_id"),
            general_survey: row.get("general_survey"),
            heent: row.get("heent"),
            chest_lungs: row.get("chest_lungs"),
            cardiovascular: row.get("cardiovascular"),
            abdomen: row.get("abdomen"),
            extremities: row.get("extremities"),
            remarks: row.get("remarks"),
        }))
    }

    /// Insert or update the patient's pertinent physical exam
    pub async fn save_physical_exam(
        &self,
        patient_id: i32,
        payload: &PertinentPhysicalExamPayload,
    ) -> Result<(), AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx
            .query_one(
                "SELECT COUNT(*) FROM pertinent_physical_exams WHERE patient_id = $1",
                &[&patient_id],
            )
            .await?;
        let existing: i64 = row.get(0);

        if existing > 0 {
            tx.execute(
                "UPDATE pertinent_physical_exams SET general_survey = $1, heent = $2, \
                 chest_lungs = $3, cardiovascular = $4, abdomen = $5, extremities = $6, \
                 remarks = $7, updated_at = CURRENT_TIMESTAMP WHERE patient_id = $8",
                &[
                    &payload.general_survey,
                    &payload.heent,
                    &payload.chest_lungs,
                    &payload.cardiovascular,
                    &payload.abdomen,
                    &payload.extremities,
                    &payload.remarks,
                    &patient_id,
                ],
            )
            .await?;
        } else {
            tx.execute(
                "INSERT INTO pertinent_physical_exams (patient_id, general_survey, heent, \
                 chest_lungs, cardiovascular, abdomen, extremities, remarks) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
                &[
                    &patient_id,
                    &payload.general_survey,
                    &payload.heent,
                    &payload.chest_lungs,
                    &payload.cardiovascular,
                    &payload.abdomen,
                    &payload.extremities,
                    &payload.remarks,
                ],
            )
            .await?;
        }

        tx.commit().await?;
        debug!("Saved physical exam for patient {}", patient_id);
        Ok(())
    }

    /// Stored entries of a multi-row section for one patient
    pub async fn entries(
        &self,
        section: ChecklistSection,
        patient_id: i32,
    ) -> Result<Vec<ChecklistEntry>, AppError> {
        let client = self.pool.get().await?;

        // Table names come from a fixed enum, never from the request.
        let rows = client
            .query(
                &format!(
                    "SELECT id, patient_id, code, label, details FROM {} \
                     WHERE patient_id = $1 ORDER BY id",
                    section.table()
                ),
                &[&patient_id],
            )
            .await?;

        Ok(rows
            .iter()
            .map(|row| ChecklistEntry {
                id: row.get("id"),
                patient_id: row.get("patient_id"),
                code: row.get("code"),
                label: row.get("label"),
                details: row.get("details"),
            })
            .collect())
    }

    /// Replace the patient's section with the checked entries of the
    /// submitted list. Unchecked entries are dropped, not retained.
    pub async fn replace_entries(
        &self,
        section: ChecklistSection,
        patient_id: i32,
        entries: &[ChecklistEntryPayload],
    ) -> Result<usize, AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        tx.execute(
            &format!("DELETE FROM {} WHERE patient_id = $1", section.table()),
            &[&patient_id],
        )
        .await?;

        let mut inserted = 0;
        for entry in entries.iter().filter(|e| e.checked) {
            tx.execute(
                &format!(
                    "INSERT INTO {} (patient_id, code, label, details) VALUES ($1, $2, $3, $4)",
                    section.table()
                ),
                &[&patient_id, &entry.code, &entry.label, &entry.details],
            )
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        debug!(
            "Replaced {} with {} entries for patient {}",
            section.table(),
            inserted,
            patient_id
        );
        Ok(inserted)
    }
}
