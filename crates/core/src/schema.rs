// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Column layouts for the four tabular sources.
//!
//! Every source is positional. A layout maps each field to a 0-based column
//! index so the reconciler never indexes rows directly, and the two
//! schedule sheet layouts seen in deployments are a configuration choice.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four tabular sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Employee roster.
    Roster,
    /// Assignment schedule, one row per employee per letter.
    Schedule,
    /// Discipline metrics.
    Discipline,
    /// Filed reports.
    Reports,
}

impl SourceKind {
    /// All sources, in reconciliation order of dependence.
    pub const ALL: [Self; 4] = [Self::Roster, Self::Schedule, Self::Discipline, Self::Reports];

    /// Returns the source name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Schedule => "schedule",
            Self::Discipline => "discipline",
            Self::Reports => "reports",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roster columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterLayout {
    pub nip: usize,
    pub name: usize,
    pub position: usize,
    pub unit: usize,
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self {
            nip: 0,
            name: 1,
            position: 2,
            unit: 3,
        }
    }
}

/// Schedule columns.
///
/// Columns marked optional may be absent from a deployment's sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLayout {
    pub nip: usize,
    pub employee_name: Option<usize>,
    pub letter_number: usize,
    pub basis: Option<usize>,
    pub activity_type: usize,
    pub description: usize,
    pub location: usize,
    pub start_date: usize,
    pub end_date: usize,
    pub signee: usize,
    pub funding_type: Option<usize>,
}

impl ScheduleLayout {
    /// `[nip, letter, activityType, description, location, start, end, signee, fundingType?]`
    pub const COMPACT: Self = Self {
        nip: 0,
        employee_name: None,
        letter_number: 1,
        basis: None,
        activity_type: 2,
        description: 3,
        location: 4,
        start_date: 5,
        end_date: 6,
        signee: 7,
        funding_type: Some(8),
    };

    /// `[nip, employeeName, letter, activityType, description, location, start, end, signee, fundingType?]`
    pub const NAMED: Self = Self {
        nip: 0,
        employee_name: Some(1),
        letter_number: 2,
        basis: None,
        activity_type: 3,
        description: 4,
        location: 5,
        start_date: 6,
        end_date: 7,
        signee: 8,
        funding_type: Some(9),
    };

    /// Number of columns a written row needs.
    #[must_use]
    pub fn width(&self) -> usize {
        [
            Some(self.nip),
            self.employee_name,
            Some(self.letter_number),
            self.basis,
            Some(self.activity_type),
            Some(self.description),
            Some(self.location),
            Some(self.start_date),
            Some(self.end_date),
            Some(self.signee),
            self.funding_type,
        ]
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |idx| idx + 1)
    }
}

impl Default for ScheduleLayout {
    fn default() -> Self {
        Self::COMPACT
    }
}

impl FromStr for ScheduleLayout {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(Self::COMPACT),
            "named" => Ok(Self::NAMED),
            other => Err(CoreError::UnknownLayout(other.to_string())),
        }
    }
}

/// Discipline columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineLayout {
    pub nip: usize,
    pub attendance: usize,
    pub assembly: usize,
    pub daily_log: usize,
    pub report: usize,
}

impl Default for DisciplineLayout {
    fn default() -> Self {
        Self {
            nip: 0,
            attendance: 1,
            assembly: 2,
            daily_log: 3,
            report: 4,
        }
    }
}

/// Report columns. The status column is optional; without it every
/// stored report counts as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLayout {
    pub letter_number: usize,
    pub details: usize,
    pub report_date: usize,
    pub creator_nip: usize,
    pub photos: usize,
    pub status: Option<usize>,
}

impl ReportLayout {
    /// Number of columns a written row needs.
    #[must_use]
    pub fn width(&self) -> usize {
        [
            Some(self.letter_number),
            Some(self.details),
            Some(self.report_date),
            Some(self.creator_nip),
            Some(self.photos),
            self.status,
        ]
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |idx| idx + 1)
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            letter_number: 0,
            details: 1,
            report_date: 2,
            creator_nip: 3,
            photos: 4,
            status: Some(5),
        }
    }
}

/// Layouts for all four sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceSchema {
    pub roster: RosterLayout,
    pub schedule: ScheduleLayout,
    pub discipline: DisciplineLayout,
    pub reports: ReportLayout,
}

impl SourceSchema {
    /// Default layouts with the given schedule layout.
    #[must_use]
    pub fn with_schedule(schedule: ScheduleLayout) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }
}
