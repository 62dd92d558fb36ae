// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{AssignmentTask, Employee, Nip, PLACEHOLDER};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The reconciled employee and assignment registries.
///
/// Tasks reference employees by NIP and resolve them through this registry,
/// so an employee update is visible from every task listing them. Tasks keep
/// the order in which their letter numbers were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    employees: BTreeMap<Nip, Employee>,
    tasks: Vec<AssignmentTask>,
    task_index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an employee, replacing any earlier entry with the same NIP.
    ///
    /// Returns the replaced employee, if any.
    pub fn upsert_employee(&mut self, employee: Employee) -> Option<Employee> {
        self.employees.insert(employee.nip.clone(), employee)
    }

    /// Looks up an employee by NIP.
    #[must_use]
    pub fn employee(&self, nip: &Nip) -> Option<&Employee> {
        self.employees.get(nip)
    }

    /// Looks up an employee by NIP for modification.
    pub fn employee_mut(&mut self, nip: &Nip) -> Option<&mut Employee> {
        self.employees.get_mut(nip)
    }

    /// Iterates over all employees in NIP order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Number of employees.
    #[must_use]
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Looks up a task by letter number.
    #[must_use]
    pub fn task(&self, letter_number: &str) -> Option<&AssignmentTask> {
        self.task_index
            .get(letter_number)
            .and_then(|&idx| self.tasks.get(idx))
    }

    /// Looks up a task by letter number for modification.
    pub fn task_mut(&mut self, letter_number: &str) -> Option<&mut AssignmentTask> {
        match self.task_index.get(letter_number) {
            Some(&idx) => self.tasks.get_mut(idx),
            None => None,
        }
    }

    /// All tasks in first-seen order.
    #[must_use]
    pub fn tasks(&self) -> &[AssignmentTask] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Appends a task.
    ///
    /// # Errors
    ///
    /// Returns an error if a task with the same letter number exists.
    pub fn insert_task(&mut self, task: AssignmentTask) -> Result<(), DomainError> {
        if self.task_index.contains_key(&task.letter_number) {
            return Err(DomainError::DuplicateLetterNumber(task.letter_number));
        }
        self.task_index
            .insert(task.letter_number.clone(), self.tasks.len());
        self.tasks.push(task);
        Ok(())
    }

    /// Resolves a task's members. NIPs missing from the roster are skipped.
    pub fn members<'a>(&'a self, task: &'a AssignmentTask) -> impl Iterator<Item = &'a Employee> {
        task.members.iter().filter_map(|nip| self.employees.get(nip))
    }

    /// Tasks listing the employee, in first-seen order.
    pub fn tasks_for<'a>(&'a self, nip: &'a Nip) -> impl Iterator<Item = &'a AssignmentTask> {
        self.tasks.iter().filter(move |task| task.has_member(nip))
    }

    /// Distinct units, sorted, without the placeholder.
    #[must_use]
    pub fn units(&self) -> Vec<String> {
        self.employees
            .values()
            .map(|employee| employee.unit.as_str())
            .filter(|unit| !unit.is_empty() && *unit != PLACEHOLDER)
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(String::from)
            .collect()
    }
}
