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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod dates;
mod discipline;
mod error;
mod registry;
mod report;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Calendar dates cross every boundary as `YYYY-MM-DD`.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub use availability::{
    Conflict, DayAvailability, availability_on, conflicting_names, find_conflicts,
    month_availability,
};
pub use dates::{DateRange, DeadlineStatus, parse_sheet_date, parse_timezone, today_in};
pub use discipline::{DisciplineCategory, DisciplineScore, final_score};
pub use error::DomainError;
pub use registry::Registry;
pub use report::{MIN_DOCUMENTATION_PHOTOS, ReportSubmission};
pub use types::{
    ActivityType, AssignmentTask, DEFAULT_EMPLOYEE_NAME, Employee, EmployeeStatus, FundingType,
    Nip, PLACEHOLDER, ReportContent, ReportDetails, ReportStatus,
};
pub use validation::{AssignmentDraft, validate_draft, validate_submission};
