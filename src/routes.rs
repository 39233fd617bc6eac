//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod checklists;
mod diseases;
mod inventory;
mod patients;
mod surgeries;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{delete, get, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    let cors = build_cors_layer(settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Patient records (the frontend still calls these "items")
        .route(
            "/api/items",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/api/items/{id}",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        // Disease catalog
        .route(
            "/api/diseases",
            get(diseases::list_diseases).post(diseases::create_disease),
        )
        .route(
            "/api/diseases/{id}",
            put(diseases::update_disease).delete(diseases::delete_disease),
        )
        // Employee-disease associations
        .route(
            "/api/employees/{employee_id}/diseases",
            get(diseases::list_employee_diseases).post(diseases::add_employee_disease),
        )
        .route(
            "/api/employees/{employee_id}/diseases/{disease_id}",
            delete(diseases::remove_employee_disease),
        )
        // Surgery schedule
        .route(
            "/api/surgeries",
            get(surgeries::list_surgeries).post(surgeries::create_surgery),
        )
        .route(
            "/api/surgeries/{id}",
            get(surgeries::get_surgery)
                .put(surgeries::update_surgery)
                .delete(surgeries::delete_surgery),
        )
        // Inventory
        .route(
            "/api/inventory",
            get(inventory::list_items).post(inventory::create_item),
        )
        .route(
            "/api/inventory/{id}",
            put(inventory::update_item).delete(inventory::delete_item),
        )
        // Per-patient checklists; the static segments below take precedence
        // over the {section} capture
        .route(
            "/api/patients/{patient_id}/social-history",
            get(checklists::get_social_history).post(checklists::save_social_history),
        )
        .route(
            "/api/patients/{patient_id}/pertinent-physical-exam",
            get(checklists::get_physical_exam).post(checklists::save_physical_exam),
        )
        .route(
            "/api/patients/{patient_id}/{section}",
            get(checklists::get_checklist).post(checklists::save_checklist),
        )
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
