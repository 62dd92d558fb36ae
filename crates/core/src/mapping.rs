// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row mapping for the four sources.
//!
//! Mapping is pure and lenient: a missing or empty cell takes its default,
//! numbers that do not parse are 0 and dates that do not parse are `None`.
//! Only a row without its key is dropped.

use crate::schema::{DisciplineLayout, ReportLayout, RosterLayout, ScheduleLayout};
use situgas_domain::{
    ActivityType, AssignmentTask, DEFAULT_EMPLOYEE_NAME, DisciplineScore, FundingType, Nip,
    PLACEHOLDER, ReportContent, ReportDetails, ReportStatus, parse_sheet_date,
};
use time::Date;
use time::macros::format_description;
use tracing::{debug, warn};

/// A roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub nip: Nip,
    pub name: String,
    pub position: String,
    pub unit: String,
}

/// A schedule row: one employee on one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub nip: Nip,
    pub employee_name: Option<String>,
    pub letter_number: String,
    pub basis: String,
    pub activity_type: ActivityType,
    pub description: String,
    pub location: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub signee: String,
    pub funding_type: Option<FundingType>,
}

impl ScheduleRecord {
    /// Seeds a task from this row. Membership is left to the caller.
    #[must_use]
    pub fn to_task(&self) -> AssignmentTask {
        let mut task: AssignmentTask = AssignmentTask::new(&self.letter_number);
        task.basis.clone_from(&self.basis);
        task.description.clone_from(&self.description);
        task.location.clone_from(&self.location);
        task.start_date = self.start_date;
        task.end_date = self.end_date;
        task.signee.clone_from(&self.signee);
        task.activity_type = self.activity_type;
        task.funding_type = self.funding_type;
        task
    }
}

/// A discipline row.
#[derive(Debug, Clone, PartialEq)]
pub struct DisciplineRecord {
    pub nip: Nip,
    pub score: DisciplineScore,
}

/// A filed report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub letter_number: String,
    pub content: ReportContent,
    pub report_date: Option<String>,
    pub creator_nip: Option<Nip>,
    pub photos: Vec<String>,
    pub status: ReportStatus,
}

fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx)
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn text_or(row: &[String], idx: usize, default: &str) -> String {
    cell(row, idx).unwrap_or(default).to_string()
}

/// Parses a percentage cell leniently.
///
/// Accepts `85`, `85.5`, `85,5` and `85%`. Anything else, including
/// non-finite values, is 0.
#[must_use]
pub fn parse_lenient_number(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches('%')
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

/// Interprets a stored report body.
///
/// A JSON object is parsed into structured details; any other text, or JSON
/// that does not match, is kept verbatim as a summary.
#[must_use]
pub fn parse_report_content(value: &str) -> ReportContent {
    let trimmed: &str = value.trim();
    if trimmed.starts_with('{') {
        match serde_json::from_str::<ReportDetails>(trimmed) {
            Ok(details) => return ReportContent::Structured(details),
            Err(err) => {
                warn!(error = %err, "Report details are not valid JSON, keeping as summary");
            }
        }
    }
    if trimmed.is_empty() {
        return ReportContent::Summary(PLACEHOLDER.to_string());
    }
    ReportContent::Summary(trimmed.to_string())
}

/// Interprets a stored photo cell: a JSON array of URLs or a single URL.
#[must_use]
pub fn parse_photos(value: &str) -> Vec<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<String>>(trimmed) {
            Ok(photos) => {
                return photos
                    .into_iter()
                    .map(|photo| photo.trim().to_string())
                    .filter(|photo| !photo.is_empty())
                    .collect();
            }
            Err(err) => {
                warn!(error = %err, "Photo list is not a JSON array, keeping as one entry");
            }
        }
    }
    vec![trimmed.to_string()]
}

/// Maps a roster row. Returns `None` when the NIP is missing.
#[must_use]
pub fn map_roster_row(row: &[String], layout: &RosterLayout) -> Option<RosterRecord> {
    let Some(nip) = cell(row, layout.nip) else {
        debug!(?row, "Roster row without NIP skipped");
        return None;
    };

    Some(RosterRecord {
        nip: Nip::new(nip),
        name: text_or(row, layout.name, DEFAULT_EMPLOYEE_NAME),
        position: text_or(row, layout.position, PLACEHOLDER),
        unit: text_or(row, layout.unit, PLACEHOLDER),
    })
}

/// Maps a schedule row. Returns `None` when the NIP or letter number is missing.
#[must_use]
pub fn map_schedule_row(row: &[String], layout: &ScheduleLayout) -> Option<ScheduleRecord> {
    let (Some(nip), Some(letter_number)) = (cell(row, layout.nip), cell(row, layout.letter_number))
    else {
        debug!(?row, "Schedule row without NIP or letter number skipped");
        return None;
    };

    Some(ScheduleRecord {
        nip: Nip::new(nip),
        employee_name: layout
            .employee_name
            .and_then(|idx| cell(row, idx))
            .map(String::from),
        letter_number: letter_number.to_string(),
        basis: layout
            .basis
            .map_or_else(|| PLACEHOLDER.to_string(), |idx| text_or(row, idx, PLACEHOLDER)),
        activity_type: cell(row, layout.activity_type)
            .map(ActivityType::parse_lenient)
            .unwrap_or_default(),
        description: text_or(row, layout.description, PLACEHOLDER),
        location: text_or(row, layout.location, PLACEHOLDER),
        start_date: cell(row, layout.start_date).and_then(parse_sheet_date),
        end_date: cell(row, layout.end_date).and_then(parse_sheet_date),
        signee: text_or(row, layout.signee, PLACEHOLDER),
        funding_type: layout
            .funding_type
            .and_then(|idx| cell(row, idx))
            .and_then(FundingType::parse_lenient),
    })
}

/// Maps a discipline row. Returns `None` when the NIP is missing.
#[must_use]
pub fn map_discipline_row(row: &[String], layout: &DisciplineLayout) -> Option<DisciplineRecord> {
    let nip: Nip = Nip::new(cell(row, layout.nip)?);
    let number = |idx: usize| cell(row, idx).map_or(0.0, parse_lenient_number);

    Some(DisciplineRecord {
        nip,
        score: DisciplineScore::new(
            number(layout.attendance),
            number(layout.assembly),
            number(layout.daily_log),
            number(layout.report),
        ),
    })
}

/// Maps a report row. Returns `None` when the letter number is missing.
#[must_use]
pub fn map_report_row(row: &[String], layout: &ReportLayout) -> Option<ReportRecord> {
    let Some(letter_number) = cell(row, layout.letter_number) else {
        debug!(?row, "Report row without letter number skipped");
        return None;
    };

    Some(ReportRecord {
        letter_number: letter_number.to_string(),
        content: parse_report_content(cell(row, layout.details).unwrap_or_default()),
        report_date: cell(row, layout.report_date).map(String::from),
        creator_nip: cell(row, layout.creator_nip).map(Nip::new),
        photos: cell(row, layout.photos)
            .map(parse_photos)
            .unwrap_or_default(),
        status: layout
            .status
            .and_then(|idx| cell(row, idx))
            .and_then(ReportStatus::from_label)
            .unwrap_or(ReportStatus::Submitted),
    })
}

fn iso(date: Option<Date>) -> String {
    date.and_then(|date| date.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_default()
}

fn place(row: &mut [String], idx: Option<usize>, value: &str) {
    if let Some(slot) = idx.and_then(|idx| row.get_mut(idx)) {
        *slot = value.to_string();
    }
}

/// Writes an assignment as schedule rows, one per member.
///
/// `name_of` resolves a member's display name for layouts carrying a name
/// column.
#[must_use]
pub fn encode_schedule_rows(
    task: &AssignmentTask,
    layout: &ScheduleLayout,
    name_of: impl Fn(&Nip) -> Option<String>,
) -> Vec<Vec<String>> {
    task.members
        .iter()
        .map(|nip| {
            let mut row: Vec<String> = vec![String::new(); layout.width()];
            let name: String = name_of(nip).unwrap_or_else(|| DEFAULT_EMPLOYEE_NAME.to_string());
            place(&mut row, Some(layout.nip), nip.value());
            place(&mut row, layout.employee_name, &name);
            place(&mut row, Some(layout.letter_number), &task.letter_number);
            place(&mut row, layout.basis, &task.basis);
            place(&mut row, Some(layout.activity_type), task.activity_type.as_str());
            place(&mut row, Some(layout.description), &task.description);
            place(&mut row, Some(layout.location), &task.location);
            place(&mut row, Some(layout.start_date), &iso(task.start_date));
            place(&mut row, Some(layout.end_date), &iso(task.end_date));
            place(&mut row, Some(layout.signee), &task.signee);
            place(
                &mut row,
                layout.funding_type,
                task.funding_type.map_or("", |funding| funding.as_str()),
            );
            row
        })
        .collect()
}

/// Writes a task's report as a report row.
///
/// Returns `None` when the task has no report.
#[must_use]
pub fn encode_report_row(task: &AssignmentTask, layout: &ReportLayout) -> Option<Vec<String>> {
    let content: &ReportContent = task.report_details.as_ref()?;
    let details: String = match content {
        ReportContent::Structured(details) => serde_json::to_string(details).ok()?,
        ReportContent::Summary(text) => text.clone(),
    };
    let photos: String = serde_json::to_string(&task.documentation_photos).ok()?;

    let mut row: Vec<String> = vec![String::new(); layout.width()];
    place(&mut row, Some(layout.letter_number), &task.letter_number);
    place(&mut row, Some(layout.details), &details);
    place(
        &mut row,
        Some(layout.report_date),
        task.report_date.as_deref().unwrap_or_default(),
    );
    place(
        &mut row,
        Some(layout.creator_nip),
        task.report_creator_nip.as_ref().map_or("", Nip::value),
    );
    place(&mut row, Some(layout.photos), &photos);
    place(&mut row, layout.status, task.report_status.label());
    Some(row)
}
