//! HTTP transport
//!
//! Thin presentation layer over the registry and the ledger:
//! - `api`: JSON endpoints
//! - `pages`: server-rendered dashboard
//! - `error`: error-to-response mapping

pub mod api;
pub mod error;
pub mod pages;

use crate::ledger::StatusLedger;
use crate::registry::MachineRegistry;
use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

/// Shared state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: MachineRegistry,
    pub ledger: StatusLedger,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let registry = MachineRegistry::new(db.clone());
        let ledger = StatusLedger::new(db, registry.clone());
        Self { registry, ledger }
    }
}

/// Create the router with all API and dashboard endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // JSON API
        .route("/api/machines", post(api::create_machine).get(api::list_machines))
        .route("/api/machines/{id}", get(api::machine_detail))
        .route("/api/machines/{id}/status", post(api::log_status))
        .route("/api/machines/{id}/chart", get(api::chart_data))
        // Dashboard
        .route("/", get(pages::index))
        .route("/machines/{id}", get(pages::machine_detail))
        // Liveness
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
