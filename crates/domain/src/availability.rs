// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability and double-booking evaluation.
//!
//! Everything here is computed per query against a registry snapshot and
//! never cached: the calendar view scans whole months day by day.

use crate::dates::DateRange;
use crate::registry::Registry;
use crate::types::{ActivityType, AssignmentTask, Employee, Nip};
use serde::Serialize;
use std::collections::HashSet;
use time::{Date, Month};

/// Who is free and which assignments run on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAvailability<'a> {
    /// The evaluated day.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Employees not listed on any assignment covering the day.
    pub available: Vec<&'a Employee>,
    /// Assignments covering the day.
    pub active_tasks: Vec<&'a AssignmentTask>,
}

impl DayAvailability<'_> {
    /// Returns whether the employee is free on this day.
    #[must_use]
    pub fn is_available(&self, nip: &Nip) -> bool {
        self.available.iter().any(|employee| &employee.nip == nip)
    }
}

/// Evaluates availability for one day.
///
/// # Arguments
///
/// * `registry` - The reconciled registry
/// * `date` - The day to evaluate
#[must_use]
pub fn availability_on(registry: &Registry, date: Date) -> DayAvailability<'_> {
    let active_tasks: Vec<&AssignmentTask> = registry
        .tasks()
        .iter()
        .filter(|task| task.covers(date))
        .collect();

    let busy: HashSet<&Nip> = active_tasks
        .iter()
        .flat_map(|task| task.members.iter())
        .collect();

    let available: Vec<&Employee> = registry
        .employees()
        .filter(|employee| !busy.contains(&employee.nip))
        .collect();

    DayAvailability {
        date,
        available,
        active_tasks,
    }
}

/// Evaluates availability for every day of a month.
///
/// # Arguments
///
/// * `registry` - The reconciled registry
/// * `year` - The calendar year
/// * `month` - The calendar month
#[must_use]
pub fn month_availability(registry: &Registry, year: i32, month: Month) -> Vec<DayAvailability<'_>> {
    let mut days: Vec<DayAvailability<'_>> = Vec::new();
    let mut cursor: Option<Date> = Date::from_calendar_date(year, month, 1).ok();

    while let Some(day) = cursor.filter(|d| d.month() == month) {
        days.push(availability_on(registry, day));
        cursor = day.next_day();
    }

    days
}

/// An employee already booked in person during a candidate range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// The booked employee.
    pub nip: Nip,
    /// The employee's name, or the NIP when not on the roster.
    pub name: String,
    /// The existing assignment that overlaps.
    pub letter_number: String,
    /// The existing assignment's range.
    pub range: DateRange,
}

/// Finds employees who would be double-booked by a new assignment.
///
/// Only in-person against in-person counts: a remote candidate never
/// conflicts, and existing remote assignments are ignored. Assignments with
/// unreadable dates cannot be evaluated and are skipped. At most one
/// conflict is reported per employee, in candidate order.
///
/// # Arguments
///
/// * `registry` - The reconciled registry
/// * `candidates` - NIPs of the employees to assign
/// * `range` - The candidate date range
/// * `activity_type` - The candidate activity type
#[must_use]
pub fn find_conflicts(
    registry: &Registry,
    candidates: &[Nip],
    range: DateRange,
    activity_type: ActivityType,
) -> Vec<Conflict> {
    if !activity_type.is_in_person() {
        return Vec::new();
    }

    let mut seen: HashSet<&Nip> = HashSet::new();
    let mut conflicts: Vec<Conflict> = Vec::new();

    for nip in candidates {
        if !seen.insert(nip) {
            continue;
        }

        let clash = registry
            .tasks_for(nip)
            .filter(|task| task.activity_type.is_in_person())
            .find_map(|task| {
                task.date_range()
                    .filter(|existing| existing.overlaps(&range))
                    .map(|existing| (task, existing))
            });

        if let Some((task, existing)) = clash {
            let name: String = registry
                .employee(nip)
                .map_or_else(|| nip.to_string(), |employee| employee.name.clone());
            conflicts.push(Conflict {
                nip: nip.clone(),
                name,
                letter_number: task.letter_number.clone(),
                range: existing,
            });
        }
    }

    conflicts
}

/// Names of the conflicting employees, for display and rejection messages.
#[must_use]
pub fn conflicting_names(conflicts: &[Conflict]) -> Vec<String> {
    conflicts.iter().map(|conflict| conflict.name.clone()).collect()
}
