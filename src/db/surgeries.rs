//! Surgery schedule persistence

use crate::error::AppError;
use crate::models::{Surgery, SurgeryPayload};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

const SURGERY_COLUMNS: &str = "id, patient_name, surgery_type, surgeon_name, surgery_date, \
     surgery_time, duration, status, notes";

fn map_surgery(row: &Row) -> Surgery {
    Surgery {
        id: row.get("id"),
        patient_name: row.get("patient_name"),
        surgery_type: row.get("surgery_type"),
        surgeon_name: row.get("surgeon_name"),
        surgery_date: row.get("surgery_date"),
        surgery_time: row.get("surgery_time"),
        duration: row.get("duration"),
        status: row.get("status"),
        notes: row.get("notes"),
    }
}

/// Surgery service for database operations
pub struct SurgeryService {
    pool: Pool,
}

impl SurgeryService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// All surgeries, newest first
    pub async fn list(&self) -> Result<Vec<Surgery>, AppError> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                &format!("SELECT {} FROM surgeries ORDER BY id DESC", SURGERY_COLUMNS),
                &[],
            )
            .await?;

        Ok(rows.iter().map(map_surgery).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Surgery>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                &format!("SELECT {} FROM surgeries WHERE id = $1", SURGERY_COLUMNS),
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(map_surgery))
    }

    pub async fn create(&self, payload: &SurgeryPayload) -> Result<Surgery, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                &format!(
                    "INSERT INTO surgeries (patient_name, surgery_type, surgeon_name, \
                     surgery_date, surgery_time, duration, status, notes) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                     RETURNING {}",
                    SURGERY_COLUMNS
                ),
                &[
                    &payload.patient_name,
                    &payload.surgery_type,
                    &payload.surgeon_name,
                    &payload.surgery_date,
                    &payload.surgery_time,
                    &payload.duration,
                    &payload.status,
                    &payload.notes,
                ],
            )
            .await?;

        Ok(map_surgery(&row))
    }

    pub async fn update(&self, id: i32, payload: &SurgeryPayload) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute(
                "UPDATE surgeries SET patient_name = $1, surgery_type = $2, surgeon_name = $3, \
                 surgery_date = $4, surgery_time = $5, duration = $6, status = $7, notes = $8, \
                 updated_at = CURRENT_TIMESTAMP \
                 WHERE id = $9",
                &[
                    &payload.patient_name,
                    &payload.surgery_type,
                    &payload.surgeon_name,
                    &payload.surgery_date,
                    &payload.surgery_time,
                    &payload.duration,
                    &payload.status,
                    &payload.notes,
                    &id,
                ],
            )
            .await?;

        Ok(affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute("DELETE FROM surgeries WHERE id = $1", &[&id])
            .await?;

        Ok(affected)
    }
}
