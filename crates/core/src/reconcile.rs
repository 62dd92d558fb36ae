// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merging the four sources into the employee and assignment registries.
//!
//! Every source carries a header row, skipped here. The roster is applied
//! first since the other sources refer to it by NIP. A missing table is
//! recorded as degraded and the remaining tables still reconcile.

use crate::mapping::{
    ScheduleRecord, map_discipline_row, map_report_row, map_roster_row, map_schedule_row,
};
use crate::schema::{SourceKind, SourceSchema};
use situgas_domain::{DateRange, Employee, Registry};
use time::Date;
use tracing::{debug, info, warn};

/// Parsed rows for each source. `None` marks a source that could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSet {
    pub roster: Option<Vec<Vec<String>>>,
    pub schedule: Option<Vec<Vec<String>>>,
    pub discipline: Option<Vec<Vec<String>>>,
    pub reports: Option<Vec<Vec<String>>>,
}

impl TableSet {
    /// Returns the rows of a source, header included.
    #[must_use]
    pub fn get(&self, kind: SourceKind) -> Option<&[Vec<String>]> {
        match kind {
            SourceKind::Roster => self.roster.as_deref(),
            SourceKind::Schedule => self.schedule.as_deref(),
            SourceKind::Discipline => self.discipline.as_deref(),
            SourceKind::Reports => self.reports.as_deref(),
        }
    }

    /// Replaces the rows of a source.
    pub fn set(&mut self, kind: SourceKind, rows: Option<Vec<Vec<String>>>) {
        match kind {
            SourceKind::Roster => self.roster = rows,
            SourceKind::Schedule => self.schedule = rows,
            SourceKind::Discipline => self.discipline = rows,
            SourceKind::Reports => self.reports = rows,
        }
    }

    /// Sources without rows.
    #[must_use]
    pub fn missing(&self) -> Vec<SourceKind> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub registry: Registry,
    /// Sources that were unavailable for this pass.
    pub degraded: Vec<SourceKind>,
}

impl Reconciliation {
    /// Returns whether every source contributed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

fn body(rows: Option<&[Vec<String>]>) -> impl Iterator<Item = &Vec<String>> {
    rows.unwrap_or_default().iter().skip(1)
}

/// Merges the four sources into a registry.
///
/// Deterministic: the same tables and `today` always yield the same
/// registry.
///
/// # Arguments
///
/// * `tables` - Parsed rows per source
/// * `schema` - Column layouts
/// * `today` - The day used to derive employee status
#[must_use]
pub fn reconcile(tables: &TableSet, schema: &SourceSchema, today: Date) -> Reconciliation {
    let mut registry: Registry = Registry::new();

    for row in body(tables.get(SourceKind::Roster)) {
        if let Some(record) = map_roster_row(row, &schema.roster) {
            let employee: Employee =
                Employee::new(record.nip, &record.name, &record.position, &record.unit);
            if let Some(previous) = registry.upsert_employee(employee) {
                debug!(nip = %previous.nip, "Duplicate roster row replaced earlier entry");
            }
        }
    }

    for row in body(tables.get(SourceKind::Schedule)) {
        if let Some(record) = map_schedule_row(row, &schema.schedule) {
            merge_schedule_row(&mut registry, &record, today);
        }
    }

    for row in body(tables.get(SourceKind::Reports)) {
        let Some(record) = map_report_row(row, &schema.reports) else {
            continue;
        };
        let Some(task) = registry.task_mut(&record.letter_number) else {
            debug!(letter_number = %record.letter_number, "Report for unknown letter ignored");
            continue;
        };
        task.record_imported_report(
            record.status,
            record.report_date,
            record.creator_nip,
            record.content,
            record.photos,
        );
    }

    for row in body(tables.get(SourceKind::Discipline)) {
        let Some(record) = map_discipline_row(row, &schema.discipline) else {
            continue;
        };
        match registry.employee_mut(&record.nip) {
            Some(employee) => employee.discipline_score = record.score,
            None => debug!(nip = %record.nip, "Discipline row for unknown employee ignored"),
        }
    }

    let degraded: Vec<SourceKind> = tables.missing();
    for kind in &degraded {
        warn!(source = %kind, "Source unavailable, reconciled without it");
    }

    info!(
        employees = registry.employee_count(),
        tasks = registry.task_count(),
        degraded = degraded.len(),
        "Reconciled sources"
    );

    Reconciliation { registry, degraded }
}

fn merge_schedule_row(registry: &mut Registry, record: &ScheduleRecord, today: Date) {
    let known: bool = registry.employee(&record.nip).is_some();
    if !known {
        debug!(
            nip = %record.nip,
            name = record.employee_name.as_deref().unwrap_or_default(),
            letter_number = %record.letter_number,
            "Schedule row references an employee missing from the roster"
        );
    }

    if let Some(task) = registry.task_mut(&record.letter_number) {
        if known {
            task.add_member(record.nip.clone());
        }
    } else {
        let mut task = record.to_task();
        if known {
            task.add_member(record.nip.clone());
        }
        if let Err(err) = registry.insert_task(task) {
            warn!(error = %err, "Failed to register task");
        }
    }

    let active: bool = match (record.start_date, record.end_date) {
        (Some(start), Some(end)) => DateRange::new(start, end).contains(today),
        _ => false,
    };
    if active && let Some(employee) = registry.employee_mut(&record.nip) {
        employee.mark_assigned(&record.description);
    }
}
