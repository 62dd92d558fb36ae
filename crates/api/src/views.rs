// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only dashboard views over a registry snapshot.
//!
//! Nothing here is cached; each view is recomputed from the registry it is
//! given. Visibility of assignments always goes through the authorization
//! predicate.

use situgas_domain::{
    AssignmentTask, DeadlineStatus, DisciplineCategory, Employee, Registry, ReportStatus,
    month_availability,
};
use time::{Date, Month};

use crate::auth::{Action, AuthenticatedActor, TaskOwner, can};
use crate::capabilities::compute_task_capabilities;
use crate::request_response::{
    CalendarDayInfo, CategoryCount, DashboardStats, DisciplineEntry, EmployeeFilter, MemberInfo,
    RecapFilter, ReportCounts, ReportsBoard, ReportsQuery, ReportsTab, TaskInfo,
};

fn normalized_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .map(str::to_lowercase)
}

fn employee_matches(employee: &Employee, query: Option<&str>) -> bool {
    query.is_none_or(|query| {
        employee.name.to_lowercase().contains(query) || employee.nip.value().contains(query)
    })
}

/// Employees matching a unit and search filter, in NIP order.
#[must_use]
pub fn filter_employees<'a>(registry: &'a Registry, filter: &EmployeeFilter) -> Vec<&'a Employee> {
    let query: Option<String> = normalized_query(filter.search.as_deref());
    let unit: Option<&str> = filter
        .unit
        .as_deref()
        .map(str::trim)
        .filter(|unit| !unit.is_empty());

    registry
        .employees()
        .filter(|employee| unit.is_none_or(|unit| employee.unit == unit))
        .filter(|employee| employee_matches(employee, query.as_deref()))
        .collect()
}

/// Employees free today, for the assignment picker.
#[must_use]
pub fn unassigned_employees(registry: &Registry) -> Vec<&Employee> {
    registry
        .employees()
        .filter(|employee| !employee.is_assigned())
        .collect()
}

/// Assignments the actor may see, in first-seen order.
pub fn visible_tasks<'a>(
    registry: &'a Registry,
    actor: &'a AuthenticatedActor,
) -> impl Iterator<Item = &'a AssignmentTask> {
    registry.tasks().iter().filter(move |task| {
        can(actor, Action::ViewAllTasks, None)
            || can(actor, Action::ViewTask, Some(&TaskOwner::of(task, registry)))
    })
}

/// Resolves an assignment for display.
#[must_use]
pub fn task_info(
    registry: &Registry,
    actor: &AuthenticatedActor,
    task: &AssignmentTask,
    today: Date,
) -> TaskInfo {
    let owner: TaskOwner = TaskOwner::of(task, registry);
    TaskInfo {
        task: task.clone(),
        member_details: registry
            .members(task)
            .map(|employee| MemberInfo {
                nip: employee.nip.clone(),
                name: employee.name.clone(),
                unit: employee.unit.clone(),
            })
            .collect(),
        deadline: task
            .end_date
            .map(|end| DeadlineStatus::from_end_date(end, today)),
        capabilities: compute_task_capabilities(actor, task, &owner),
    }
}

/// Dashboard statistics.
///
/// Employee counts cover the filtered employees; letter counts and pending
/// reports cover what the actor may see.
#[must_use]
pub fn dashboard_stats(
    registry: &Registry,
    actor: &AuthenticatedActor,
    filter: &EmployeeFilter,
) -> DashboardStats {
    let employees: Vec<&Employee> = filter_employees(registry, filter);
    let total: usize = employees.len();
    let assigned: usize = employees.iter().filter(|e| e.is_assigned()).count();

    let average_discipline: f64 = if total == 0 {
        0.0
    } else {
        let sum: f64 = employees
            .iter()
            .map(|e| e.discipline_score.final_score())
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let count: f64 = total as f64;
        sum / count
    };

    let categories: Vec<CategoryCount> = DisciplineCategory::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            label: category.label(),
            count: employees
                .iter()
                .filter(|e| e.discipline_score.category() == category)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();

    let visible: Vec<&AssignmentTask> = visible_tasks(registry, actor).collect();
    let pending_reports: Vec<String> = if actor.role.is_admin() {
        Vec::new()
    } else {
        visible
            .iter()
            .filter(|task| task.report_status == ReportStatus::Pending)
            .map(|task| task.letter_number.clone())
            .collect()
    };

    DashboardStats {
        total,
        assigned,
        unassigned: total - assigned,
        active_letters: visible.len(),
        average_discipline,
        categories,
        pending_reports,
    }
}

/// Assignment recap, latest start first.
///
/// Assignments with an unreadable start date sort last.
#[must_use]
pub fn recap(
    registry: &Registry,
    actor: &AuthenticatedActor,
    filter: &RecapFilter,
    today: Date,
) -> Vec<TaskInfo> {
    let name: Option<String> = normalized_query(filter.name.as_deref());
    let unit: Option<&str> = filter.unit.as_deref().filter(|unit| !unit.is_empty());

    let mut tasks: Vec<&AssignmentTask> = visible_tasks(registry, actor)
        .filter(|task| {
            name.as_deref().is_none_or(|name| {
                registry
                    .members(task)
                    .any(|e| e.name.to_lowercase().contains(name))
            })
        })
        .filter(|task| unit.is_none_or(|unit| registry.members(task).any(|e| e.unit == unit)))
        .filter(|task| {
            filter
                .activity_type
                .is_none_or(|activity_type| task.activity_type == activity_type)
        })
        .collect();

    tasks.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    tasks
        .into_iter()
        .map(|task| task_info(registry, actor, task, today))
        .collect()
}

fn in_tab(task: &AssignmentTask, tab: ReportsTab) -> bool {
    match tab {
        ReportsTab::All => true,
        ReportsTab::Pending => task.report_status == ReportStatus::Pending,
        ReportsTab::Completed => task.report_status.is_filed(),
    }
}

/// Reports board for the actor.
#[must_use]
pub fn reports_board(
    registry: &Registry,
    actor: &AuthenticatedActor,
    query: &ReportsQuery,
    today: Date,
) -> ReportsBoard {
    let visible: Vec<&AssignmentTask> = visible_tasks(registry, actor).collect();
    let search: Option<String> = normalized_query(query.search.as_deref());

    let counts: ReportCounts = ReportCounts {
        all: visible.len(),
        pending: visible
            .iter()
            .filter(|task| in_tab(task, ReportsTab::Pending))
            .count(),
        completed: visible
            .iter()
            .filter(|task| in_tab(task, ReportsTab::Completed))
            .count(),
    };

    let tasks: Vec<TaskInfo> = visible
        .into_iter()
        .filter(|task| in_tab(task, query.tab))
        .filter(|task| {
            search.as_deref().is_none_or(|search| {
                task.description.to_lowercase().contains(search)
                    || task.letter_number.to_lowercase().contains(search)
            })
        })
        .map(|task| task_info(registry, actor, task, today))
        .collect();

    ReportsBoard {
        tab: query.tab,
        tasks,
        counts,
    }
}

/// Discipline scores, highest first.
#[must_use]
pub fn discipline_board(registry: &Registry) -> Vec<DisciplineEntry> {
    let mut entries: Vec<DisciplineEntry> = registry
        .employees()
        .map(|employee| {
            let category: DisciplineCategory = employee.discipline_score.category();
            DisciplineEntry {
                nip: employee.nip.clone(),
                name: employee.name.clone(),
                unit: employee.unit.clone(),
                score: employee.discipline_score,
                category,
                category_label: category.label(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.final_score().total_cmp(&a.score.final_score()));
    entries
}

/// Availability for each day of a month.
#[must_use]
pub fn calendar_month(registry: &Registry, year: i32, month: Month) -> Vec<CalendarDayInfo> {
    month_availability(registry, year, month)
        .into_iter()
        .map(|day| CalendarDayInfo {
            date: day.date,
            available: day
                .available
                .iter()
                .map(|employee| employee.nip.clone())
                .collect(),
            active_letters: day
                .active_tasks
                .iter()
                .map(|task| task.letter_number.clone())
                .collect(),
        })
        .collect()
}
