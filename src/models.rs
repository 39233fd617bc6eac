//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

pub mod checklist;
pub mod disease;
pub mod inventory;
pub mod patient;
pub mod surgery;

// Re-export commonly used types
pub use checklist::*;
pub use disease::*;
pub use inventory::*;
pub use patient::*;
pub use surgery::*;

use serde::Serialize;

/// Message-only response (delete confirmations and the like)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
