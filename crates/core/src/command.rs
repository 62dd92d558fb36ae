// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};
use situgas_domain::{AssignmentTask, Nip, ReportSubmission};
use time::Date;
use time::macros::format_description;

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes. They are applied locally
/// to check them and executed by the mutation host to persist them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue a new assignment letter.
    SaveAssignment {
        /// The assignment to issue, with its members.
        task: AssignmentTask,
    },
    /// File or edit the report for an assignment.
    SaveReport {
        /// The assignment the report belongs to.
        letter_number: String,
        /// The report.
        submission: ReportSubmission,
    },
    /// Delete the report for an assignment.
    DeleteReport {
        /// The assignment the report belongs to.
        letter_number: String,
        /// The employee who filed the report.
        creator: Nip,
    },
    /// Mark a submitted report as verified.
    VerifyReport {
        /// The assignment the report belongs to.
        letter_number: String,
    },
}

fn iso(date: Option<Date>) -> Option<String> {
    date.and_then(|date| date.format(format_description!("[year]-[month]-[day]")).ok())
}

impl Command {
    /// The operation name understood by the mutation host.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::SaveAssignment { .. } => "saveAssignmentRecord",
            Self::SaveReport { .. } => "saveReportRecord",
            Self::DeleteReport { .. } => "deleteReportRecord",
            Self::VerifyReport { .. } => "verifyReportRecord",
        }
    }

    /// The letter number the command targets.
    #[must_use]
    pub fn letter_number(&self) -> &str {
        match self {
            Self::SaveAssignment { task } => &task.letter_number,
            Self::SaveReport { letter_number, .. }
            | Self::DeleteReport { letter_number, .. }
            | Self::VerifyReport { letter_number } => letter_number,
        }
    }

    /// The record sent to the mutation host, in its field naming.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::SaveAssignment { task } => json!({
                "letterNumber": task.letter_number,
                "basis": task.basis,
                "description": task.description,
                "location": task.location,
                "startDate": iso(task.start_date),
                "endDate": iso(task.end_date),
                "signee": task.signee,
                "activityType": task.activity_type.as_str(),
                "fundingType": task.funding_type.map(|funding| funding.as_str()),
                "employees": task
                    .members
                    .iter()
                    .map(|nip| json!({ "nip": nip.value() }))
                    .collect::<Vec<Value>>(),
            }),
            Self::SaveReport {
                letter_number,
                submission,
            } => json!({
                "letterNumber": letter_number,
                "reportDetails": submission.details,
                "reportDate": submission.report_date,
                "nip": submission.creator.value(),
                "documentationPhotos": submission.photos,
            }),
            Self::DeleteReport {
                letter_number,
                creator,
            } => json!({
                "letterNumber": letter_number,
                "nip": creator.value(),
            }),
            Self::VerifyReport { letter_number } => json!({
                "letterNumber": letter_number,
            }),
        }
    }
}
