//! JSON API endpoints

use super::error::ApiError;
use super::AppState;
use crate::domain::{Machine, MachineDetail, StatusObservation};
use crate::ledger::DETAIL_HISTORY_LIMIT;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateMachineRequest {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct AppendStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

/// Chart payload for the time-series view, oldest first
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub machine: Machine,
    pub labels: Vec<String>,
    pub statuses: Vec<String>,
}

/// POST /api/machines - register a machine
pub async fn create_machine(
    State(state): State<AppState>,
    Json(req): Json<CreateMachineRequest>,
) -> Result<(StatusCode, Json<Machine>), ApiError> {
    let machine = state.registry.create(&req.name, &req.location).await?;
    Ok((StatusCode::CREATED, Json(machine)))
}

/// POST /api/machines/{id}/status - append a status observation
pub async fn log_status(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
    Json(req): Json<AppendStatusRequest>,
) -> Result<(StatusCode, Json<StatusObservation>), ApiError> {
    let observation = state.ledger.append(machine_id, &req.status).await?;
    Ok((StatusCode::CREATED, Json(observation)))
}

/// GET /api/machines - list machines in id order
pub async fn list_machines(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Machine>>, ApiError> {
    let machines = state.registry.list(page.offset, page.limit).await?;
    Ok(Json(machines))
}

/// GET /api/machines/{id} - machine metadata composed with its current
/// status and recent history
pub async fn machine_detail(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
) -> Result<Json<MachineDetail>, ApiError> {
    let machine = state.registry.get(machine_id).await?;
    let history = state.ledger.recent(machine_id, DETAIL_HISTORY_LIMIT).await?;
    Ok(Json(MachineDetail::new(machine, history)))
}

/// GET /api/machines/{id}/chart - the full status series shaped for the
/// dashboard chart
pub async fn chart_data(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
) -> Result<Json<ChartResponse>, ApiError> {
    let machine = state.registry.get(machine_id).await?;
    let history = state.ledger.full_history(machine_id).await?;

    let (labels, statuses) = chart_series(&history);

    Ok(Json(ChartResponse {
        machine,
        labels,
        statuses,
    }))
}

/// Split an oldest-first series into parallel label/status columns
pub(super) fn chart_series(history: &[StatusObservation]) -> (Vec<String>, Vec<String>) {
    history
        .iter()
        .map(|obs| {
            (
                obs.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                obs.status.to_string(),
            )
        })
        .unzip()
}
