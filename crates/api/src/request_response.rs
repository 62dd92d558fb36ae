// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! These DTOs are distinct from domain types and represent the API contract.

use serde::{Deserialize, Serialize};
use situgas_domain::{
    ActivityType, AssignmentTask, Conflict, DeadlineStatus, DisciplineCategory, DisciplineScore,
    Employee, Nip, ReportDetails,
};
use time::Date;

use crate::auth::Role;

/// Employee list filter: unit and a name or NIP search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Exact unit; `None` means every unit.
    #[serde(default)]
    pub unit: Option<String>,
    /// Case-insensitive name substring or NIP substring.
    #[serde(default)]
    pub search: Option<String>,
}

/// Recap filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapFilter {
    /// Case-insensitive substring of a member's name.
    #[serde(default)]
    pub name: Option<String>,
    /// A member's unit.
    #[serde(default)]
    pub unit: Option<String>,
    /// Activity type.
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
}

/// Reports board tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportsTab {
    /// Every visible assignment.
    #[default]
    All,
    /// Assignments without a report.
    Pending,
    /// Assignments with a submitted or verified report.
    Completed,
}

/// Reports board query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsQuery {
    /// Selected tab.
    #[serde(default)]
    pub tab: ReportsTab,
    /// Case-insensitive substring of the description or letter number.
    #[serde(default)]
    pub search: Option<String>,
}

/// Calendar query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u8,
}

/// Request to file or edit the report for an assignment.
///
/// The filing employee is the acting employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReportRequest {
    /// The report body.
    pub details: ReportDetails,
    /// Documentation photos.
    pub photos: Vec<String>,
    /// Filing date, as displayed. Defaults to today.
    #[serde(default)]
    pub report_date: Option<String>,
}

/// Request to preview scheduling conflicts for a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheckRequest {
    /// Employees to assign.
    pub members: Vec<Nip>,
    /// First day.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
    /// Last day.
    #[serde(with = "crate::iso_date")]
    pub end_date: Date,
    /// Activity type of the draft.
    #[serde(default)]
    pub activity_type: ActivityType,
}

/// Conflict preview for a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictCheckResponse {
    /// One entry per double-booked employee.
    pub conflicts: Vec<Conflict>,
    /// Names of the double-booked employees.
    pub employees: Vec<String>,
}

/// Response for a command accepted by the mutation host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The targeted letter number.
    pub letter_number: String,
    /// A success message.
    pub message: String,
}

/// A listed employee, resolved through the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberInfo {
    pub nip: Nip,
    pub name: String,
    pub unit: String,
}

/// An assignment with its members resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskInfo {
    /// The assignment.
    #[serde(flatten)]
    pub task: AssignmentTask,
    /// Listed employees found on the roster.
    pub member_details: Vec<MemberInfo>,
    /// Deadline state; `None` when the end date is unreadable.
    pub deadline: Option<DeadlineStatus>,
    /// What the actor may do with this assignment.
    pub capabilities: TaskCapabilities,
}

/// Discipline breakdown entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: DisciplineCategory,
    pub label: &'static str,
    pub count: usize,
}

/// Dashboard statistics over the filtered employees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Employees matching the filter.
    pub total: usize,
    /// Of those, on an assignment today.
    pub assigned: usize,
    /// Of those, free today.
    pub unassigned: usize,
    /// Letters visible to the actor.
    pub active_letters: usize,
    /// Mean final discipline score, 0 when no employee matches.
    pub average_discipline: f64,
    /// Categories with at least one employee, best first.
    pub categories: Vec<CategoryCount>,
    /// The actor's own letters still awaiting a report. Empty for admins.
    pub pending_reports: Vec<String>,
}

/// Report counts per tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Reports board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportsBoard {
    pub tab: ReportsTab,
    pub tasks: Vec<TaskInfo>,
    pub counts: ReportCounts,
}

/// Discipline board row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplineEntry {
    pub nip: Nip,
    pub name: String,
    pub unit: String,
    pub score: DisciplineScore,
    pub category: DisciplineCategory,
    pub category_label: &'static str,
}

/// One calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDayInfo {
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Free employees.
    pub available: Vec<Nip>,
    /// Letters running on the day.
    pub active_letters: Vec<String>,
}

/// Response listing employees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<Employee>,
}

/// Response for the acting employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhoAmIResponse {
    pub nip: Nip,
    pub role: Role,
    /// The roster entry, when the actor is on the roster.
    pub employee: Option<Employee>,
    pub capabilities: GlobalCapabilities,
}

/// Represents whether an action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

/// Capabilities that do not depend on a particular assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalCapabilities {
    pub can_create_assignment: Capability,
    pub can_view_all_tasks: Capability,
}

/// Capabilities on one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCapabilities {
    pub can_file_report: Capability,
    pub can_edit_report: Capability,
    pub can_delete_report: Capability,
    pub can_verify_report: Capability,
}
