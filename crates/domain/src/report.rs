// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Post-duty report lifecycle.
//!
//! ```text
//! Pending --file--> Submitted --verify--> Verified
//!    ^                  |  ^
//!    |                  |  | edit (file again)
//!    +------clear-------+--+
//! ```
//!
//! Clearing is allowed from any state and returns the task to Pending with
//! every report field emptied. Verified reports are read-only except for
//! clearing.

use crate::error::DomainError;
use crate::types::{AssignmentTask, Nip, ReportContent, ReportDetails, ReportStatus};
use crate::validation::validate_submission;
use serde::Deserialize;

/// Minimum number of documentation photos for a filed report.
pub const MIN_DOCUMENTATION_PHOTOS: usize = 3;

/// A report as submitted by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportSubmission {
    /// The report body.
    pub details: ReportDetails,
    /// Documentation photos.
    pub photos: Vec<String>,
    /// Filing date, as displayed.
    pub report_date: String,
    /// NIP of the filing employee.
    pub creator: Nip,
}

impl ReportSubmission {
    /// Trims every text field and drops blank optional fields.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.details.narrative = self.details.narrative.trim().to_string();
        self.details.outcome = self.details.outcome.trim().to_string();
        self.details.obstacle = non_blank(self.details.obstacle);
        self.details.solution = non_blank(self.details.solution);
        self.report_date = self.report_date.trim().to_string();
        self.photos.retain(|photo| !photo.trim().is_empty());
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

impl AssignmentTask {
    /// Files or edits the report for this assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission is incomplete or the report is
    /// already verified.
    pub fn file_report(&mut self, submission: ReportSubmission) -> Result<(), DomainError> {
        if self.report_status == ReportStatus::Verified {
            return Err(DomainError::InvalidReportTransition {
                letter_number: self.letter_number.clone(),
                from: self.report_status,
                action: "file",
            });
        }

        let submission: ReportSubmission = submission.normalized();
        validate_submission(&submission)?;

        self.report_status = ReportStatus::Submitted;
        self.report_date = Some(submission.report_date);
        self.report_creator_nip = Some(submission.creator);
        self.report_details = Some(ReportContent::Structured(submission.details));
        self.documentation_photos = submission.photos;
        Ok(())
    }

    /// Marks a submitted report as verified.
    ///
    /// # Errors
    ///
    /// Returns an error unless the report is currently submitted.
    pub fn verify_report(&mut self) -> Result<(), DomainError> {
        if self.report_status != ReportStatus::Submitted {
            return Err(DomainError::InvalidReportTransition {
                letter_number: self.letter_number.clone(),
                from: self.report_status,
                action: "verify",
            });
        }
        self.report_status = ReportStatus::Verified;
        Ok(())
    }

    /// Deletes the report, returning the assignment to Pending.
    ///
    /// All other assignment attributes are left untouched.
    pub fn clear_report(&mut self) {
        self.report_status = ReportStatus::Pending;
        self.report_date = None;
        self.report_creator_nip = None;
        self.report_details = None;
        self.documentation_photos.clear();
    }

    /// Records a report read back from the report sheet.
    ///
    /// Imported reports are trusted as stored; the photo minimum applies
    /// only when filing through [`AssignmentTask::file_report`].
    pub fn record_imported_report(
        &mut self,
        status: ReportStatus,
        report_date: Option<String>,
        creator: Option<Nip>,
        content: ReportContent,
        photos: Vec<String>,
    ) {
        self.report_status = if status.is_filed() {
            status
        } else {
            ReportStatus::Submitted
        };
        self.report_date = report_date;
        self.report_creator_nip = creator;
        self.report_details = Some(content);
        self.documentation_photos = photos;
    }
}
