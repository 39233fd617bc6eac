//! Patient record persistence

use crate::error::AppError;
use crate::models::{Patient, PatientPayload};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

const PATIENT_COLUMNS: &str = "id, case_no, hospital_no, lastname, firstname, middlename, \
     suffix, birthdate, age, room, admission_date, discharge_date, sex, height, weight, complaint";

fn map_patient(row: &Row) -> Patient {
    Patient {
        id: row.get("id"),
        case_no: row.get("case_no"),
        hospital_no: row.get("hospital_no"),
        lastname: row.get("lastname"),
        firstname: row.get("firstname"),
        middlename: row.get("middlename"),
        suffix: row.get("suffix"),
        birthdate: row.get("birthdate"),
        age: row.get("age"),
        room: row.get("room"),
        admission_date: row.get("admission_date"),
        discharge_date: row.get("discharge_date"),
        sex: row.get("sex"),
        height: row.get("height"),
        weight: row.get("weight"),
        complaint: row.get("complaint"),
    }
}

/// Patient service for database operations
pub struct PatientService {
    pool: Pool,
}

impl PatientService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// All patients, newest first
    pub async fn list(&self) -> Result<Vec<Patient>, AppError> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                &format!("SELECT {} FROM patients ORDER BY id DESC", PATIENT_COLUMNS),
                &[],
            )
            .await?;

        Ok(rows.iter().map(map_patient).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Patient>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                &format!("SELECT {} FROM patients WHERE id = $1", PATIENT_COLUMNS),
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(map_patient))
    }

    pub async fn create(&self, payload: &PatientPayload) -> Result<Patient, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                &format!(
                    "INSERT INTO patients (case_no, hospital_no, lastname, firstname, middlename, \
                     suffix, birthdate, age, room, admission_date, discharge_date, sex, height, \
                     weight, complaint) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
                     RETURNING {}",
                    PATIENT_COLUMNS
                ),
                &[
                    &payload.case_no,
                    &payload.hospital_no,
                    &payload.lastname,
                    &payload.firstname,
                    &payload.middlename,
                    &payload.suffix,
                    &payload.birthdate,
                    &payload.age,
                    &payload.room,
                    &payload.admission_date,
                    &payload.discharge_date,
                    &payload.sex,
                    &payload.height,
                    &payload.weight,
                    &payload.complaint,
                ],
            )
            .await?;

        Ok(map_patient(&row))
    }

    /// Full replace by id; returns the number of rows affected
    pub async fn update(&self, id: i32, payload: &PatientPayload) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute(
                "UPDATE patients SET case_no = $1, hospital_no = $2, lastname = $3, \
                 firstname = $4, middlename = $5, suffix = $6, birthdate = $7, age = $8, \
                 room = $9, admission_date = $10, discharge_date = $11, sex = $12, \
                 height = $13, weight = $14, complaint = $15 WHERE id = $16",
                &[
                    &payload.case_no,
                    &payload.hospital_no,
                    &payload.lastname,
                    &payload.firstname,
                    &payload.middlename,
                    &payload.suffix,
                    &payload.birthdate,
                    &payload.age,
                    &payload.room,
                    &payload.admission_date,
                    &payload.discharge_date,
                    &payload.sex,
                    &payload.height,
                    &payload.weight,
                    &payload.complaint,
                    &id,
                ],
            )
            .await?;

        Ok(affected)
    }

    /// Delete by id; returns the number of rows affected
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute("DELETE FROM patients WHERE id = $1", &[&id])
            .await?;

        Ok(affected)
    }
}
