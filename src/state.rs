//! Application state management
//!
//! One service per resource, each holding a clone of the shared pool.
//! Handlers receive the state by constructor injection, never through a
//! global handle.

use crate::db::checklists::ChecklistService;
use crate::db::diseases::DiseaseService;
use crate::db::inventory::InventoryService;
use crate::db::patients::PatientService;
use crate::db::surgeries::SurgeryService;
use deadpool_postgres::Pool;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    pub patients: PatientService,
    pub diseases: DiseaseService,
    pub surgeries: SurgeryService,
    pub inventory: InventoryService,
    pub checklists: ChecklistService,
}

impl AppState {
    /// Create application state from a verified database pool
    pub fn new(pool: Pool) -> Self {
        Self {
            patients: PatientService::new(pool.clone()),
            diseases: DiseaseService::new(pool.clone()),
            surgeries: SurgeryService::new(pool.clone()),
            inventory: InventoryService::new(pool.clone()),
            checklists: ChecklistService::new(pool),
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
