//! Table bootstrap
//!
//! Idempotent schema creation at process start. There is no migration
//! mechanism; shape changes require manual intervention.

use crate::error::AppError;
use deadpool_postgres::Pool;
use tracing::info;

/// DDL run at startup, in order
const TABLES: &[(&str, &str)] = &[
    (
        "patients",
        "CREATE TABLE IF NOT EXISTS patients (
            id SERIAL PRIMARY KEY,
            case_no TEXT NOT NULL DEFAULT '',
            hospital_no TEXT NOT NULL DEFAULT '',
            lastname TEXT NOT NULL,
            firstname TEXT NOT NULL,
            middlename TEXT NOT NULL DEFAULT '',
            suffix TEXT NOT NULL DEFAULT '',
            birthdate TEXT NOT NULL DEFAULT '',
            age TEXT NOT NULL DEFAULT '',
            room TEXT NOT NULL DEFAULT '',
            admission_date TEXT NOT NULL DEFAULT '',
            discharge_date TEXT NOT NULL DEFAULT '',
            sex TEXT NOT NULL DEFAULT '',
            height TEXT NOT NULL DEFAULT '',
            weight TEXT NOT NULL DEFAULT '',
            complaint TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "diseases",
        "CREATE TABLE IF NOT EXISTS diseases (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            code TEXT NOT NULL UNIQUE,
            barcode TEXT NOT NULL UNIQUE,
            category TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "employee_diseases",
        "CREATE TABLE IF NOT EXISTS employee_diseases (
            id SERIAL PRIMARY KEY,
            employee_id INTEGER NOT NULL,
            disease_id INTEGER NOT NULL,
            date_diagnosed TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (employee_id, disease_id)
        )",
    ),
    (
        "surgeries",
        "CREATE TABLE IF NOT EXISTS surgeries (
            id SERIAL PRIMARY KEY,
            patient_name TEXT NOT NULL,
            surgery_type TEXT NOT NULL,
            surgeon_name TEXT NOT NULL,
            surgery_date TEXT NOT NULL DEFAULT '',
            surgery_time TEXT NOT NULL DEFAULT '',
            duration TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "inventory",
        "CREATE TABLE IF NOT EXISTS inventory (
            id SERIAL PRIMARY KEY,
            item_name TEXT NOT NULL,
            category TEXT NOT NULL,
            brand TEXT NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            unit TEXT NOT NULL DEFAULT '',
            price DOUBLE PRECISION NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "social_histories",
        "CREATE TABLE IF NOT EXISTS social_histories (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL UNIQUE,
            smoking TEXT NOT NULL DEFAULT '',
            alcohol TEXT NOT NULL DEFAULT '',
            drug_use TEXT NOT NULL DEFAULT '',
            diet TEXT NOT NULL DEFAULT '',
            exercise TEXT NOT NULL DEFAULT '',
            remarks TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "pertinent_physical_exams",
        "CREATE TABLE IF NOT EXISTS pertinent_physical_exams (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL UNIQUE,
            general_survey TEXT NOT NULL DEFAULT '',
            heent TEXT NOT NULL DEFAULT '',
            chest_lungs TEXT NOT NULL DEFAULT '',
            cardiovascular TEXT NOT NULL DEFAULT '',
            abdomen TEXT NOT NULL DEFAULT '',
            extremities TEXT NOT NULL DEFAULT '',
            remarks TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "medical_histories",
        "CREATE TABLE IF NOT EXISTS medical_histories (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL,
            code TEXT NOT NULL,
            label TEXT NOT NULL DEFAULT '',
            details TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (patient_id, code)
        )",
    ),
    (
        "family_histories",
        "CREATE TABLE IF NOT EXISTS family_histories (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL,
            code TEXT NOT NULL,
            label TEXT NOT NULL DEFAULT '',
            details TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (patient_id, code)
        )",
    ),
    (
        "surgical_histories",
        "CREATE TABLE IF NOT EXISTS surgical_histories (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL,
            code TEXT NOT NULL,
            label TEXT NOT NULL DEFAULT '',
            details TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (patient_id, code)
        )",
    ),
    (
        "immunizations",
        "CREATE TABLE IF NOT EXISTS immunizations (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL,
            code TEXT NOT NULL,
            label TEXT NOT NULL DEFAULT '',
            details TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (patient_id, code)
        )",
    ),
];

/// Create all tables if they do not exist
pub async fn create_tables(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;

    for (name, ddl) in TABLES {
        client.execute(*ddl, &[]).await?;
        info!("Table '{}' ready", name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChecklistSection;

    #[test]
    fn test_every_checklist_section_has_a_table() {
        let sections = [
            ChecklistSection::MedicalHistory,
            ChecklistSection::FamilyHistory,
            ChecklistSection::SurgicalHistory,
            ChecklistSection::Immunization,
        ];
        for section in sections {
            assert!(
                TABLES.iter().any(|(name, _)| *name == section.table()),
                "missing bootstrap DDL for {}",
                section.table()
            );
        }
    }

    #[test]
    fn test_ddl_is_idempotent() {
        for (_, ddl) in TABLES {
            assert!(ddl.contains("IF NOT EXISTS"));
        }
    }
}
