// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::DateRange;
use crate::error::DomainError;
use crate::registry::Registry;
use crate::report::{MIN_DOCUMENTATION_PHOTOS, ReportSubmission};
use crate::types::{ActivityType, AssignmentTask, FundingType, Nip};
use serde::{Deserialize, Serialize};
use time::Date;

/// A new assignment letter before it is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDraft {
    /// The letter number to issue.
    pub letter_number: String,
    /// Administrative basis for the assignment.
    pub basis: String,
    /// Name of the activity.
    pub description: String,
    /// Where the activity takes place.
    pub location: String,
    /// First day of the assignment.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
    /// Last day of the assignment.
    #[serde(with = "crate::iso_date")]
    pub end_date: Date,
    /// Official signing the letter.
    pub signee: String,
    /// In person or remote.
    #[serde(default)]
    pub activity_type: ActivityType,
    /// Funding arrangement.
    #[serde(default)]
    pub funding_type: Option<FundingType>,
    /// NIPs of the employees to assign.
    pub members: Vec<Nip>,
}

impl AssignmentDraft {
    /// The draft's date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Converts the draft into a pending assignment.
    #[must_use]
    pub fn into_task(self) -> AssignmentTask {
        let mut task: AssignmentTask = AssignmentTask::new(self.letter_number.trim());
        task.basis = self.basis.trim().to_string();
        task.description = self.description.trim().to_string();
        task.location = self.location.trim().to_string();
        task.start_date = Some(self.start_date);
        task.end_date = Some(self.end_date);
        task.signee = self.signee.trim().to_string();
        task.activity_type = self.activity_type;
        task.funding_type = self.funding_type;
        for nip in self.members {
            task.add_member(nip);
        }
        task
    }
}

fn require_text(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// Validates a draft against its own fields and the registry.
///
/// Conflict detection is a separate, advisory step; see
/// [`crate::find_conflicts`].
///
/// # Errors
///
/// Returns an error if:
/// - A text field is blank
/// - No employee is listed
/// - The start date is after the end date
/// - The letter number has already been issued
pub fn validate_draft(draft: &AssignmentDraft, registry: &Registry) -> Result<(), DomainError> {
    require_text(&draft.letter_number, "letter_number")?;
    require_text(&draft.basis, "basis")?;
    require_text(&draft.description, "description")?;
    require_text(&draft.location, "location")?;
    require_text(&draft.signee, "signee")?;

    if draft.members.iter().all(Nip::is_empty) {
        return Err(DomainError::NoMembers);
    }

    if draft.start_date > draft.end_date {
        return Err(DomainError::InvalidDateRange {
            start: draft.start_date,
            end: draft.end_date,
        });
    }

    if registry.task(draft.letter_number.trim()).is_some() {
        return Err(DomainError::DuplicateLetterNumber(
            draft.letter_number.trim().to_string(),
        ));
    }

    Ok(())
}

/// Validates a report submission before anything is sent.
///
/// # Errors
///
/// Returns an error if the narrative or outcome is blank, or fewer than
/// [`MIN_DOCUMENTATION_PHOTOS`] photos are attached.
pub fn validate_submission(submission: &ReportSubmission) -> Result<(), DomainError> {
    if submission.details.narrative.trim().is_empty() {
        return Err(DomainError::MissingReportField { field: "narrative" });
    }
    if submission.details.outcome.trim().is_empty() {
        return Err(DomainError::MissingReportField { field: "outcome" });
    }

    let provided: usize = submission
        .photos
        .iter()
        .filter(|photo| !photo.trim().is_empty())
        .count();
    if provided < MIN_DOCUMENTATION_PHOTOS {
        return Err(DomainError::TooFewPhotos {
            provided,
            required: MIN_DOCUMENTATION_PHOTOS,
        });
    }

    Ok(())
}
