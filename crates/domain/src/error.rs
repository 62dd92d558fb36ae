// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::ReportStatus;
use thiserror::Error;
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The configured timezone name is not a known IANA zone.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
    /// A wall-clock date could not be represented as a calendar date.
    #[error("Date conversion failed: {reason}")]
    DateConversion {
        /// Description of the conversion failure.
        reason: String,
    },
    /// A required text field is empty.
    #[error("Field '{field}' is required")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// The start date falls after the end date.
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// An assignment must name at least one employee.
    #[error("An assignment needs at least one employee")]
    NoMembers,
    /// A letter with this number already exists.
    #[error("Letter number '{0}' has already been issued")]
    DuplicateLetterNumber(String),
    /// Not enough documentation photos were attached to a report.
    #[error("At least {required} documentation photos are required, got {provided}")]
    TooFewPhotos {
        /// How many photos were attached.
        provided: usize,
        /// The minimum number of photos.
        required: usize,
    },
    /// A required report text field is empty.
    #[error("Report field '{field}' must not be empty")]
    MissingReportField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// The report cannot move from its current status with this action.
    #[error("Cannot {action} report for letter '{letter_number}' while it is {from}")]
    InvalidReportTransition {
        /// The letter whose report was targeted.
        letter_number: String,
        /// The current report status.
        from: ReportStatus,
        /// The attempted action.
        action: &'static str,
    },
    /// No task exists for the letter number.
    #[error("Assignment letter '{0}' not found")]
    TaskNotFound(String),
    /// No employee exists for the NIP.
    #[error("Employee with NIP '{0}' not found")]
    EmployeeNotFound(String),
}
