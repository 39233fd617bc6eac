//! Disease catalog and employee-disease junction persistence

use crate::error::AppError;
use crate::models::{Disease, DiseasePayload, EmployeeDisease};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

fn map_disease(row: &Row) -> Disease {
    Disease {
        id: row.get("id"),
        name: row.get("name"),
        code: row.get("code"),
        barcode: row.get("barcode"),
        category: row.get("category"),
    }
}

/// Disease service for database operations
pub struct DiseaseService {
    pool: Pool,
}

impl DiseaseService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// All diseases, newest first
    pub async fn list(&self) -> Result<Vec<Disease>, AppError> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                "SELECT id, name, code, barcode, category FROM diseases ORDER BY id DESC",
                &[],
            )
            .await?;

        Ok(rows.iter().map(map_disease).collect())
    }

    /// Insert a disease. Duplicate code or barcode violates a UNIQUE
    /// constraint and comes back as a database error.
    pub async fn create(&self, payload: &DiseasePayload) -> Result<Disease, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                "INSERT INTO diseases (name, code, barcode, category) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING id, name, code, barcode, category",
                &[
                    &payload.name,
                    &payload.code,
                    &payload.barcode,
                    &payload.category,
                ],
            )
            .await?;

        Ok(map_disease(&row))
    }

    pub async fn update(&self, id: i32, payload: &DiseasePayload) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute(
                "UPDATE diseases SET name = $1, code = $2, barcode = $3, category = $4 \
                 WHERE id = $5",
                &[
                    &payload.name,
                    &payload.code,
                    &payload.barcode,
                    &payload.category,
                    &id,
                ],
            )
            .await?;

        Ok(affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute("DELETE FROM diseases WHERE id = $1", &[&id])
            .await?;

        Ok(affected)
    }

    /// Diseases recorded for one employee, joined with the catalog
    pub async fn list_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<EmployeeDisease>, AppError> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                "SELECT ed.id, ed.employee_id, ed.disease_id, d.code AS disease_code, \
                 d.name AS disease_name, ed.date_diagnosed \
                 FROM employee_diseases ed \
                 JOIN diseases d ON ed.disease_id = d.id \
                 WHERE ed.employee_id = $1 \
                 ORDER BY ed.id DESC",
                &[&employee_id],
            )
            .await?;

        Ok(rows
            .iter()
            .map(|row| EmployeeDisease {
                id: row.get("id"),
                employee_id: row.get("employee_id"),
                disease_id: row.get("disease_id"),
                disease_code: row.get("disease_code"),
                disease_name: row.get("disease_name"),
                date_diagnosed: row.get("date_diagnosed"),
            })
            .collect())
    }

    /// Attach a disease to an employee. A duplicate pair violates the
    /// UNIQUE (employee_id, disease_id) constraint and comes back as a
    /// database error.
    pub async fn add_for_employee(
        &self,
        employee_id: i32,
        disease_id: i32,
        date_diagnosed: &str,
    ) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute(
                "INSERT INTO employee_diseases (employee_id, disease_id, date_diagnosed) \
                 VALUES ($1, $2, $3)",
                &[&employee_id, &disease_id, &date_diagnosed],
            )
            .await?;

        Ok(affected)
    }

    /// Remove an association by its composite key
    pub async fn remove_for_employee(
        &self,
        employee_id: i32,
        disease_id: i32,
    ) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute(
                "DELETE FROM employee_diseases WHERE employee_id = $1 AND disease_id = $2",
                &[&employee_id, &disease_id],
            )
            .await?;

        Ok(affected)
    }
}
