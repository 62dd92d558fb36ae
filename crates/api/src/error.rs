// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use situgas::CoreError;
use situgas_domain::DomainError;

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The asserted role is not one of the known roles.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required_role}")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// Who may perform the action.
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The actor could not be established.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role}")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// Who may perform the action.
        required_role: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Employees on the draft are already booked in person.
    #[error("Scheduling conflict: {} already assigned in person on overlapping dates", employees.join(", "))]
    SchedulingConflict {
        /// Names of the double-booked employees.
        employees: Vec<String>,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UnknownRole(role) => Self::AuthenticationFailed {
                reason: format!("unknown role '{role}'"),
            },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: String::from(field),
            message,
        },
        DomainError::MissingReportField { field } => ApiError::InvalidInput {
            field: format!("details.{field}"),
            message,
        },
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message,
        },
        DomainError::InvalidTimezone(_) | DomainError::DateConversion { .. } => {
            ApiError::Internal { message }
        }
        DomainError::NoMembers => ApiError::InvalidInput {
            field: String::from("members"),
            message,
        },
        DomainError::TooFewPhotos { .. } => ApiError::InvalidInput {
            field: String::from("photos"),
            message,
        },
        DomainError::DuplicateLetterNumber(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_letter_number"),
            message,
        },
        DomainError::InvalidReportTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("report_lifecycle"),
            message,
        },
        DomainError::TaskNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message,
        },
        DomainError::EmployeeNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::UnknownLayout(layout) => ApiError::InvalidInput {
            field: String::from("schedule_layout"),
            message: format!("Unknown schedule layout '{layout}'"),
        },
        CoreError::TableEncoding(message) => ApiError::Internal { message },
    }
}
