// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers.
//!
//! Reads run against the published snapshot. Writes are checked against
//! the same snapshot, sent to the mutation host, and answered after the
//! full refresh that follows.

use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
};
use serde::{Deserialize, Serialize};
use situgas::{Command, SourceKind};
use situgas_api::{
    CalendarDayInfo, CalendarQuery, CommandResponse, ConflictCheckRequest, ConflictCheckResponse,
    DashboardStats, DisciplineEntry, EmployeeFilter, ListEmployeesResponse, RecapFilter,
    ReportsBoard, ReportsQuery, SubmitReportRequest, TaskInfo, WhoAmIResponse,
};
use situgas_domain::AssignmentDraft;
use situgas_sync::Snapshot;
use std::sync::Arc;
use time::Date;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::AppState;
use crate::error::HttpError;
use crate::session::SessionActor;

/// Freshness of the published snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Office date the snapshot was reconciled for.
    pub today: String,
    /// RFC 3339 time of the last successful refresh.
    pub refreshed_at: Option<String>,
    pub stale_sources: Vec<SourceKind>,
    pub degraded: Vec<SourceKind>,
    pub refreshing: bool,
    pub employees: usize,
    pub tasks: usize,
}

fn status_of(snapshot: &Snapshot, refreshing: bool) -> StatusResponse {
    StatusResponse {
        today: snapshot.today.to_string(),
        refreshed_at: snapshot
            .refreshed_at
            .and_then(|at| at.format(&Rfc3339).ok()),
        stale_sources: snapshot.stale_sources.clone(),
        degraded: snapshot.degraded.clone(),
        refreshing,
        employees: snapshot.registry.employee_count(),
        tasks: snapshot.registry.task_count(),
    }
}

async fn execute(
    app_state: &AppState,
    command: &Command,
    message: &str,
) -> Result<Json<CommandResponse>, HttpError> {
    app_state
        .store
        .execute(command, &app_state.shutdown.child_token())
        .await?;
    Ok(Json(CommandResponse {
        letter_number: command.letter_number().to_string(),
        message: message.to_string(),
    }))
}

fn today(app_state: &AppState) -> Result<Date, HttpError> {
    app_state.store.today().map_err(HttpError::from)
}

/// Handler for GET `/status`.
pub async fn handle_status(AxumState(app_state): AxumState<AppState>) -> Json<StatusResponse> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(status_of(&snapshot, app_state.store.is_refreshing()))
}

/// Handler for POST `/refresh`.
///
/// Re-fetches every table.
pub async fn handle_refresh(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StatusResponse>, HttpError> {
    info!("Handling refresh request");
    let snapshot: Arc<Snapshot> = app_state
        .store
        .refresh(&app_state.shutdown.child_token())
        .await?;
    Ok(Json(status_of(&snapshot, false)))
}

/// Handler for GET `/whoami`.
pub async fn handle_whoami(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> Json<WhoAmIResponse> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(situgas_api::whoami(&snapshot.registry, &actor))
}

/// Handler for GET `/dashboard`.
pub async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Query(filter): Query<EmployeeFilter>,
) -> Json<DashboardStats> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(situgas_api::get_dashboard(&snapshot.registry, &actor, &filter))
}

/// Handler for GET `/employees`.
pub async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    Query(filter): Query<EmployeeFilter>,
) -> Json<ListEmployeesResponse> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(situgas_api::list_employees(&snapshot.registry, &filter))
}

/// Handler for GET `/employees/unassigned`.
pub async fn handle_list_unassigned(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Ok(Json(situgas_api::list_unassigned(&snapshot.registry, &actor)?))
}

/// Handler for GET `/units`.
pub async fn handle_list_units(AxumState(app_state): AxumState<AppState>) -> Json<Vec<String>> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(situgas_api::list_units(&snapshot.registry))
}

/// Handler for GET `/tasks/{letter_number}`.
///
/// Letter numbers contain slashes and must be percent-encoded in the path.
pub async fn handle_get_task(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(letter_number): Path<String>,
) -> Result<Json<TaskInfo>, HttpError> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let today: Date = today(&app_state)?;
    Ok(Json(situgas_api::get_task(
        &snapshot.registry,
        &actor,
        &letter_number,
        today,
    )?))
}

/// Handler for GET `/recap`.
pub async fn handle_recap(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Query(filter): Query<RecapFilter>,
) -> Result<Json<Vec<TaskInfo>>, HttpError> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let today: Date = today(&app_state)?;
    Ok(Json(situgas_api::get_recap(
        &snapshot.registry,
        &actor,
        &filter,
        today,
    )))
}

/// Handler for GET `/reports`.
pub async fn handle_reports_board(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Query(query): Query<ReportsQuery>,
) -> Result<Json<ReportsBoard>, HttpError> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let today: Date = today(&app_state)?;
    Ok(Json(situgas_api::get_reports_board(
        &snapshot.registry,
        &actor,
        &query,
        today,
    )))
}

/// Handler for GET `/discipline`.
pub async fn handle_discipline(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<DisciplineEntry>> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(situgas_api::get_discipline_board(&snapshot.registry))
}

/// Handler for GET `/calendar`.
pub async fn handle_calendar(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<CalendarDayInfo>>, HttpError> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Ok(Json(situgas_api::get_calendar(&snapshot.registry, query)?))
}

/// Handler for POST `/conflicts`.
///
/// Previews double-booking without rejecting anything.
pub async fn handle_check_conflicts(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ConflictCheckRequest>,
) -> Json<ConflictCheckResponse> {
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    Json(situgas_api::check_conflicts(&snapshot.registry, &req))
}

/// Handler for POST `/assignments`.
pub async fn handle_create_assignment(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(draft): Json<AssignmentDraft>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(
        actor = %actor.nip,
        letter_number = %draft.letter_number,
        "Handling create_assignment request"
    );
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let command: Command =
        situgas_api::create_assignment(&snapshot.registry, draft, &actor, today(&app_state)?)?;
    execute(&app_state, &command, "Assignment letter issued").await
}

/// Handler for POST `/tasks/{letter_number}/report`.
pub async fn handle_submit_report(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(letter_number): Path<String>,
    Json(req): Json<SubmitReportRequest>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(actor = %actor.nip, letter_number = %letter_number, "Handling submit_report request");
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let command: Command = situgas_api::submit_report(
        &snapshot.registry,
        &letter_number,
        req,
        &actor,
        today(&app_state)?,
    )?;
    execute(&app_state, &command, "Report saved").await
}

/// Handler for DELETE `/tasks/{letter_number}/report`.
pub async fn handle_delete_report(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(letter_number): Path<String>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(actor = %actor.nip, letter_number = %letter_number, "Handling delete_report request");
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let command: Command = situgas_api::delete_report(
        &snapshot.registry,
        &letter_number,
        &actor,
        today(&app_state)?,
    )?;
    execute(&app_state, &command, "Report deleted").await
}

/// Handler for POST `/tasks/{letter_number}/report/verify`.
pub async fn handle_verify_report(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(letter_number): Path<String>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(actor = %actor.nip, letter_number = %letter_number, "Handling verify_report request");
    let snapshot: Arc<Snapshot> = app_state.store.snapshot().await;
    let command: Command = situgas_api::verify_report(
        &snapshot.registry,
        &letter_number,
        &actor,
        today(&app_state)?,
    )?;
    execute(&app_state, &command, "Report verified").await
}
