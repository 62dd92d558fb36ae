// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;
mod views;

#[cfg(test)]
mod tests;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub use auth::{Action, AuthenticatedActor, AuthorizationService, Role, TaskOwner, can};
pub use capabilities::{compute_global_capabilities, compute_task_capabilities};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    check_conflicts, create_assignment, delete_report, get_calendar, get_dashboard,
    get_discipline_board, get_recap, get_reports_board, get_task, list_employees,
    list_unassigned, list_units, resolve_actor, submit_report, verify_report, whoami,
};
pub use request_response::{
    CalendarDayInfo, CalendarQuery, Capability, CategoryCount, CommandResponse,
    ConflictCheckRequest, ConflictCheckResponse, DashboardStats, DisciplineEntry, EmployeeFilter,
    GlobalCapabilities, ListEmployeesResponse, MemberInfo, RecapFilter, ReportCounts,
    ReportsBoard, ReportsQuery, ReportsTab, SubmitReportRequest, TaskCapabilities, TaskInfo,
    WhoAmIResponse,
};
