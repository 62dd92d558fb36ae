// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! State-changing handlers never mutate anything. They authorize, validate
//! and check the request against the registry, then return the command for
//! the caller to send to the mutation host.

use situgas::{Command, apply};
use situgas_domain::{
    AssignmentDraft, AssignmentTask, Conflict, DateRange, DomainError, Nip, Registry, ReportSubmission,
    conflicting_names, find_conflicts, validate_draft,
};
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Month};
use tracing::{info, warn};

use crate::auth::{Action, AuthenticatedActor, AuthorizationService, Role, TaskOwner};
use crate::capabilities::compute_global_capabilities;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CalendarDayInfo, CalendarQuery, ConflictCheckRequest, ConflictCheckResponse, DashboardStats,
    DisciplineEntry, EmployeeFilter, ListEmployeesResponse, RecapFilter, ReportsBoard,
    ReportsQuery, SubmitReportRequest, TaskInfo, WhoAmIResponse,
};
use crate::views;

/// Establishes the acting employee from asserted identity.
///
/// # Errors
///
/// Returns an error if the NIP is blank or the role is unknown.
pub fn resolve_actor(
    registry: &Registry,
    nip: &str,
    role: &str,
) -> Result<AuthenticatedActor, ApiError> {
    let nip: Nip = Nip::new(nip);
    if nip.is_empty() {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("no acting employee given"),
        });
    }
    let role: Role = Role::from_str(role)?;
    Ok(AuthenticatedActor::resolve(nip, role, registry))
}

fn find_task<'a>(registry: &'a Registry, letter_number: &str) -> Result<&'a AssignmentTask, ApiError> {
    registry
        .task(letter_number)
        .ok_or_else(|| translate_domain_error(DomainError::TaskNotFound(letter_number.to_string())))
}

fn preflight(registry: &Registry, command: &Command, today: Date) -> Result<(), ApiError> {
    apply(registry, command, today)
        .map(|_| ())
        .map_err(translate_core_error)
}

/// Returns the acting employee and their global capabilities.
#[must_use]
pub fn whoami(registry: &Registry, actor: &AuthenticatedActor) -> WhoAmIResponse {
    WhoAmIResponse {
        nip: actor.nip.clone(),
        role: actor.role,
        employee: registry.employee(&actor.nip).cloned(),
        capabilities: compute_global_capabilities(actor),
    }
}

/// Dashboard statistics for the actor.
#[must_use]
pub fn get_dashboard(
    registry: &Registry,
    actor: &AuthenticatedActor,
    filter: &EmployeeFilter,
) -> DashboardStats {
    views::dashboard_stats(registry, actor, filter)
}

/// Employee directory.
#[must_use]
pub fn list_employees(registry: &Registry, filter: &EmployeeFilter) -> ListEmployeesResponse {
    ListEmployeesResponse {
        employees: views::filter_employees(registry, filter)
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// Employees free today, for drafting a letter.
///
/// # Errors
///
/// Returns an error if the actor may not issue letters.
pub fn list_unassigned(
    registry: &Registry,
    actor: &AuthenticatedActor,
) -> Result<ListEmployeesResponse, ApiError> {
    AuthorizationService::authorize_create_assignment(actor)?;
    Ok(ListEmployeesResponse {
        employees: views::unassigned_employees(registry)
            .into_iter()
            .cloned()
            .collect(),
    })
}

/// Distinct units on the roster.
#[must_use]
pub fn list_units(registry: &Registry) -> Vec<String> {
    registry.units()
}

/// One assignment with the actor's capabilities on it.
///
/// # Errors
///
/// Returns an error if the assignment does not exist or the actor may not
/// see it.
pub fn get_task(
    registry: &Registry,
    actor: &AuthenticatedActor,
    letter_number: &str,
    today: Date,
) -> Result<TaskInfo, ApiError> {
    let task: &AssignmentTask = find_task(registry, letter_number)?;
    AuthorizationService::authorize(actor, Action::ViewTask, Some(&TaskOwner::of(task, registry)))?;
    Ok(views::task_info(registry, actor, task, today))
}

/// Assignment recap.
#[must_use]
pub fn get_recap(
    registry: &Registry,
    actor: &AuthenticatedActor,
    filter: &RecapFilter,
    today: Date,
) -> Vec<TaskInfo> {
    views::recap(registry, actor, filter, today)
}

/// Reports board.
#[must_use]
pub fn get_reports_board(
    registry: &Registry,
    actor: &AuthenticatedActor,
    query: &ReportsQuery,
    today: Date,
) -> ReportsBoard {
    views::reports_board(registry, actor, query, today)
}

/// Discipline board.
#[must_use]
pub fn get_discipline_board(registry: &Registry) -> Vec<DisciplineEntry> {
    views::discipline_board(registry)
}

/// Availability calendar for a month.
///
/// # Errors
///
/// Returns an error if the month is not 1-12.
pub fn get_calendar(
    registry: &Registry,
    query: CalendarQuery,
) -> Result<Vec<CalendarDayInfo>, ApiError> {
    let month: Month = Month::try_from(query.month).map_err(|_| ApiError::InvalidInput {
        field: String::from("month"),
        message: format!("Month must be between 1 and 12, got {}", query.month),
    })?;
    Ok(views::calendar_month(registry, query.year, month))
}

/// Previews double-booking for a draft without rejecting it.
#[must_use]
pub fn check_conflicts(registry: &Registry, request: &ConflictCheckRequest) -> ConflictCheckResponse {
    let conflicts: Vec<Conflict> = find_conflicts(
        registry,
        &request.members,
        DateRange::new(request.start_date, request.end_date),
        request.activity_type,
    );
    ConflictCheckResponse {
        employees: conflicting_names(&conflicts),
        conflicts,
    }
}

/// Issues a new assignment letter.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not issue letters
/// - The draft is incomplete or its dates are reversed
/// - The letter number has already been issued
/// - A listed employee is not on the roster
/// - A listed employee is already booked in person on overlapping dates
pub fn create_assignment(
    registry: &Registry,
    draft: AssignmentDraft,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Command, ApiError> {
    AuthorizationService::authorize_create_assignment(actor)?;
    validate_draft(&draft, registry).map_err(translate_domain_error)?;

    if let Some(missing) = draft
        .members
        .iter()
        .find(|nip| registry.employee(nip).is_none())
    {
        return Err(translate_domain_error(DomainError::EmployeeNotFound(
            missing.to_string(),
        )));
    }

    let conflicts: Vec<Conflict> =
        find_conflicts(registry, &draft.members, draft.range(), draft.activity_type);
    if !conflicts.is_empty() {
        let employees: Vec<String> = conflicting_names(&conflicts);
        warn!(
            letter_number = %draft.letter_number,
            conflicts = conflicts.len(),
            "Rejected assignment with scheduling conflicts"
        );
        return Err(ApiError::SchedulingConflict { employees });
    }

    let command: Command = Command::SaveAssignment {
        task: draft.into_task(),
    };
    preflight(registry, &command, today)?;

    info!(
        letter_number = command.letter_number(),
        actor = %actor.nip,
        "Assignment letter accepted"
    );
    Ok(command)
}

/// Files or edits the report for an assignment as the acting employee.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, the actor may not
/// report on it, the report is incomplete or already verified.
pub fn submit_report(
    registry: &Registry,
    letter_number: &str,
    request: SubmitReportRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Command, ApiError> {
    let task: &AssignmentTask = find_task(registry, letter_number)?;
    AuthorizationService::authorize(actor, Action::FileReport, Some(&TaskOwner::of(task, registry)))?;

    let report_date: String = match request.report_date {
        Some(date) if !date.trim().is_empty() => date,
        _ => today
            .format(format_description!("[day]/[month]/[year]"))
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to format report date: {e}"),
            })?,
    };

    let command: Command = Command::SaveReport {
        letter_number: task.letter_number.clone(),
        submission: ReportSubmission {
            details: request.details,
            photos: request.photos,
            report_date,
            creator: actor.nip.clone(),
        },
    };
    preflight(registry, &command, today)?;

    info!(
        letter_number = %task.letter_number,
        actor = %actor.nip,
        "Report accepted"
    );
    Ok(command)
}

/// Deletes the report for an assignment.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, has no report, or
/// the actor may not delete it.
pub fn delete_report(
    registry: &Registry,
    letter_number: &str,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Command, ApiError> {
    let task: &AssignmentTask = find_task(registry, letter_number)?;
    AuthorizationService::authorize(
        actor,
        Action::DeleteReport,
        Some(&TaskOwner::of(task, registry)),
    )?;

    if !task.report_status.is_filed() {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("report_lifecycle"),
            message: format!("No report has been filed for letter '{letter_number}'"),
        });
    }

    let command: Command = Command::DeleteReport {
        letter_number: task.letter_number.clone(),
        creator: task
            .report_creator_nip
            .clone()
            .unwrap_or_else(|| actor.nip.clone()),
    };
    preflight(registry, &command, today)?;

    info!(
        letter_number = %task.letter_number,
        actor = %actor.nip,
        "Report deletion accepted"
    );
    Ok(command)
}

/// Verifies the submitted report for an assignment.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, the actor may not
/// verify it, or the report is not awaiting verification.
pub fn verify_report(
    registry: &Registry,
    letter_number: &str,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Command, ApiError> {
    let task: &AssignmentTask = find_task(registry, letter_number)?;
    AuthorizationService::authorize(
        actor,
        Action::VerifyReport,
        Some(&TaskOwner::of(task, registry)),
    )?;

    let command: Command = Command::VerifyReport {
        letter_number: task.letter_number.clone(),
    };
    preflight(registry, &command, today)?;

    info!(
        letter_number = %task.letter_number,
        actor = %actor.nip,
        "Report verification accepted"
    );
    Ok(command)
}
