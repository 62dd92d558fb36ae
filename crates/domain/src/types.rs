// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::DateRange;
use crate::discipline::DisciplineScore;
use serde::{Deserialize, Serialize};
use time::Date;

/// Placeholder used for text attributes the source sheet leaves empty.
pub const PLACEHOLDER: &str = "-";

/// Default display name for a roster row without a name.
pub const DEFAULT_EMPLOYEE_NAME: &str = "Pegawai";

/// A civil-service employee number.
///
/// NIPs are opaque text: leading zeros are significant and the value is
/// never interpreted numerically. Surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nip(String);

impl Nip {
    /// Creates a new `Nip` from raw cell text.
    ///
    /// # Arguments
    ///
    /// * `value` - The NIP text
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the NIP text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns whether the NIP is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Nip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Nip {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Whether an employee is on duty today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmployeeStatus {
    /// At least one assignment covers today.
    Assigned,
    /// No assignment covers today.
    #[default]
    Unassigned,
}

impl EmployeeStatus {
    /// Returns the label shown on the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Assigned => "Bertugas",
            Self::Unassigned => "Tidak Bertugas",
        }
    }
}

/// An employee from the roster.
///
/// `status` and `active_activity` are derived on every reconciliation pass
/// and are not authoritative outside of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    /// The employee's NIP.
    pub nip: Nip,
    /// The employee's name.
    pub name: String,
    /// The employee's position title.
    pub position: String,
    /// The organisational unit the employee belongs to.
    pub unit: String,
    /// Whether the employee is on duty today.
    pub status: EmployeeStatus,
    /// The duty occupying the employee today, if any.
    pub active_activity: Option<String>,
    /// The employee's discipline score.
    pub discipline_score: DisciplineScore,
}

impl Employee {
    /// Creates a new, unassigned employee with an all-zero discipline score.
    ///
    /// # Arguments
    ///
    /// * `nip` - The employee's NIP
    /// * `name` - The employee's name
    /// * `position` - The employee's position title
    /// * `unit` - The employee's unit
    #[must_use]
    pub fn new(nip: Nip, name: &str, position: &str, unit: &str) -> Self {
        Self {
            nip,
            name: name.to_string(),
            position: position.to_string(),
            unit: unit.to_string(),
            status: EmployeeStatus::Unassigned,
            active_activity: None,
            discipline_score: DisciplineScore::default(),
        }
    }

    /// Marks the employee as on duty with the given activity.
    pub fn mark_assigned(&mut self, activity: &str) {
        self.status = EmployeeStatus::Assigned;
        self.active_activity = Some(activity.to_string());
    }

    /// Returns whether the employee is on duty today.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        matches!(self.status, EmployeeStatus::Assigned)
    }
}

/// How an assignment is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityType {
    /// In person. Takes part in double-booking checks.
    #[default]
    Luring,
    /// Remote. Never conflicts with anything.
    Daring,
}

impl ActivityType {
    /// Interprets sheet text, falling back to `Luring` for empty or unknown values.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "daring" | "online" | "remote" => Self::Daring,
            _ => Self::Luring,
        }
    }

    /// Returns the sheet representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Luring => "Luring",
            Self::Daring => "Daring",
        }
    }

    /// Returns whether the activity is carried out in person.
    #[must_use]
    pub const fn is_in_person(&self) -> bool {
        matches!(self, Self::Luring)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who pays for an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingType {
    /// No cost involved.
    #[serde(rename = "Tanpa Biaya")]
    TanpaBiaya,
    /// Funded by the office.
    #[serde(rename = "Biaya BPMP")]
    BiayaBpmp,
    /// Funded by the hosting organisation.
    #[serde(rename = "Biaya Penyelenggara")]
    BiayaPenyelenggara,
}

impl FundingType {
    /// Interprets sheet text. Unknown or empty values yield `None`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tanpa biaya" => Some(Self::TanpaBiaya),
            "biaya bpmp" => Some(Self::BiayaBpmp),
            "biaya penyelenggara" => Some(Self::BiayaPenyelenggara),
            _ => None,
        }
    }

    /// Returns the sheet representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TanpaBiaya => "Tanpa Biaya",
            Self::BiayaBpmp => "Biaya BPMP",
            Self::BiayaPenyelenggara => "Biaya Penyelenggara",
        }
    }
}

/// Progress of the post-duty report for an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportStatus {
    /// No report filed.
    #[default]
    Pending,
    /// Report filed, awaiting verification.
    Submitted,
    /// Report checked by a supervisor.
    Verified,
}

impl ReportStatus {
    /// Returns the label stored in the report sheet.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Belum Upload",
            Self::Submitted => "Sudah Upload",
            Self::Verified => "Terverifikasi",
        }
    }

    /// Parses a sheet label, accepting either the label or the variant name.
    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "belum upload" | "pending" => Some(Self::Pending),
            "sudah upload" | "submitted" => Some(Self::Submitted),
            "terverifikasi" | "verified" => Some(Self::Verified),
            _ => None,
        }
    }

    /// Returns whether a report has been filed.
    #[must_use]
    pub const fn is_filed(&self) -> bool {
        matches!(self, Self::Submitted | Self::Verified)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured body of a post-duty report.
///
/// Field names on the wire match the payload the report sheet stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetails {
    /// Narrative of how the duty was carried out.
    #[serde(rename = "uraian", alias = "narrative")]
    pub narrative: String,
    /// What the duty achieved.
    #[serde(rename = "hasil", alias = "outcome")]
    pub outcome: String,
    /// Obstacles met during the duty.
    #[serde(
        rename = "kendala",
        alias = "obstacle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub obstacle: Option<String>,
    /// How the obstacles were resolved.
    #[serde(
        rename = "solusi",
        alias = "solution",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub solution: Option<String>,
}

/// Report body as stored: structured when the payload parsed, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReportContent {
    /// A parsed report payload.
    Structured(ReportDetails),
    /// Free text kept verbatim.
    Summary(String),
}

impl ReportContent {
    /// Returns the structured details, if the payload parsed.
    #[must_use]
    pub const fn details(&self) -> Option<&ReportDetails> {
        match self {
            Self::Structured(details) => Some(details),
            Self::Summary(_) => None,
        }
    }
}

/// An assignment letter (surat tugas) and its reporting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentTask {
    /// Unique letter number.
    pub letter_number: String,
    /// Administrative basis for the assignment.
    pub basis: String,
    /// Name of the activity.
    pub description: String,
    /// Where the activity takes place.
    pub location: String,
    /// First day of the assignment. `None` when the sheet value is unreadable.
    #[serde(with = "crate::iso_date::option")]
    pub start_date: Option<Date>,
    /// Last day of the assignment. `None` when the sheet value is unreadable.
    #[serde(with = "crate::iso_date::option")]
    pub end_date: Option<Date>,
    /// Official who signed the letter.
    pub signee: String,
    /// In person or remote.
    pub activity_type: ActivityType,
    /// Funding arrangement, absent on older sheets.
    pub funding_type: Option<FundingType>,
    /// NIPs of the assigned employees, without duplicates.
    pub members: Vec<Nip>,
    /// Report progress.
    pub report_status: ReportStatus,
    /// Date the report was filed, as displayed.
    pub report_date: Option<String>,
    /// NIP of the employee who filed the report.
    pub report_creator_nip: Option<Nip>,
    /// Report body.
    pub report_details: Option<ReportContent>,
    /// Documentation photos (data URLs or links).
    pub documentation_photos: Vec<String>,
}

impl AssignmentTask {
    /// Creates a task with placeholder attributes and no members.
    ///
    /// # Arguments
    ///
    /// * `letter_number` - The letter number
    #[must_use]
    pub fn new(letter_number: &str) -> Self {
        Self {
            letter_number: letter_number.to_string(),
            basis: String::from(PLACEHOLDER),
            description: String::from(PLACEHOLDER),
            location: String::from(PLACEHOLDER),
            start_date: None,
            end_date: None,
            signee: String::from(PLACEHOLDER),
            activity_type: ActivityType::default(),
            funding_type: None,
            members: Vec::new(),
            report_status: ReportStatus::Pending,
            report_date: None,
            report_creator_nip: None,
            report_details: None,
            documentation_photos: Vec::new(),
        }
    }

    /// Returns the assignment's date range when both ends are readable.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Returns whether the assignment covers the date.
    ///
    /// Tasks with an unreadable date never cover anything.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.date_range().is_some_and(|range| range.contains(date))
    }

    /// Adds an employee unless already listed. Returns whether it was added.
    pub fn add_member(&mut self, nip: Nip) -> bool {
        if self.has_member(&nip) {
            return false;
        }
        self.members.push(nip);
        true
    }

    /// Returns whether the employee is listed on this assignment.
    #[must_use]
    pub fn has_member(&self, nip: &Nip) -> bool {
        self.members.iter().any(|member| member == nip)
    }
}
