// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use situgas_domain::{AssignmentTask, DomainError, Registry};
use time::Date;
use tracing::debug;

fn task_mut<'a>(
    registry: &'a mut Registry,
    letter_number: &str,
) -> Result<&'a mut AssignmentTask, CoreError> {
    registry
        .task_mut(letter_number)
        .ok_or_else(|| CoreError::DomainViolation(DomainError::TaskNotFound(letter_number.to_string())))
}

/// Applies a command to a registry, producing the registry it would lead to.
///
/// The input registry is never modified. Used to reject a command before
/// it is sent to the mutation host.
///
/// # Arguments
///
/// * `registry` - The current registry (immutable)
/// * `command` - The command to apply
/// * `today` - The day used to derive employee status
///
/// # Errors
///
/// Returns an error if:
/// - The target assignment does not exist
/// - A new assignment reuses an issued letter number
/// - The report submission is incomplete
/// - The report transition is not allowed from its current status
pub fn apply(registry: &Registry, command: &Command, today: Date) -> Result<Registry, CoreError> {
    let mut next: Registry = registry.clone();

    match command {
        Command::SaveAssignment { task } => {
            next.insert_task(task.clone())?;
            if task.covers(today) {
                for nip in &task.members {
                    if let Some(employee) = next.employee_mut(nip) {
                        employee.mark_assigned(&task.description);
                    }
                }
            }
        }
        Command::SaveReport {
            letter_number,
            submission,
        } => {
            task_mut(&mut next, letter_number)?.file_report(submission.clone())?;
        }
        Command::DeleteReport { letter_number, .. } => {
            task_mut(&mut next, letter_number)?.clear_report();
        }
        Command::VerifyReport { letter_number } => {
            task_mut(&mut next, letter_number)?.verify_report()?;
        }
    }

    debug!(
        action = command.action_name(),
        letter_number = command.letter_number(),
        "Applied command"
    );
    Ok(next)
}
