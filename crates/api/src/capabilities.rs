// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what actions an actor is permitted to perform.
//! They are advisory only and do not replace backend authorization checks.

use situgas_domain::{AssignmentTask, ReportStatus};

use crate::auth::{Action, AuthenticatedActor, TaskOwner, can};
use crate::request_response::{Capability, GlobalCapabilities, TaskCapabilities};

/// Computes global capabilities for an actor.
#[must_use]
pub fn compute_global_capabilities(actor: &AuthenticatedActor) -> GlobalCapabilities {
    GlobalCapabilities {
        can_create_assignment: Capability::from_bool(can(actor, Action::CreateAssignment, None)),
        can_view_all_tasks: Capability::from_bool(can(actor, Action::ViewAllTasks, None)),
    }
}

/// Computes capabilities on one assignment.
///
/// Combines the authorization policy with the report lifecycle:
/// - A report can be filed only while pending
/// - Only a submitted report can be edited or verified
/// - A filed report can be deleted, verified ones included
///
/// # Arguments
///
/// * `actor` - The authenticated actor
/// * `task` - The assignment being evaluated
/// * `owner` - The assignment's owners
#[must_use]
pub fn compute_task_capabilities(
    actor: &AuthenticatedActor,
    task: &AssignmentTask,
    owner: &TaskOwner,
) -> TaskCapabilities {
    let status: ReportStatus = task.report_status;
    let may_file: bool = can(actor, Action::FileReport, Some(owner));

    TaskCapabilities {
        can_file_report: Capability::from_bool(may_file && status == ReportStatus::Pending),
        can_edit_report: Capability::from_bool(may_file && status == ReportStatus::Submitted),
        can_delete_report: Capability::from_bool(
            status.is_filed() && can(actor, Action::DeleteReport, Some(owner)),
        ),
        can_verify_report: Capability::from_bool(
            status == ReportStatus::Submitted && can(actor, Action::VerifyReport, Some(owner)),
        ),
    }
}
