// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roles and the authorization policy.
//!
//! The acting employee is asserted by the caller; nothing here verifies
//! identity. Every permission decision goes through [`can`].

use serde::{Deserialize, Serialize};
use situgas_domain::{AssignmentTask, Nip, Registry};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Office-wide administrator.
    ///
    /// May issue letters and verify or delete any report.
    SuperAdmin,
    /// Team administrator.
    ///
    /// May issue letters. Verifying and deleting reports is limited to
    /// assignments with a member in the administrator's own unit.
    AdminTim,
    /// Staff member.
    ///
    /// Sees and reports on the assignments they are listed on.
    Pegawai,
}

impl Role {
    /// Returns the role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::AdminTim => "ADMIN_TIM",
            Self::Pegawai => "PEGAWAI",
        }
    }

    /// Returns whether the role administers assignments.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::AdminTim)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "SUPER_ADMIN" | "SUPERADMIN" => Ok(Self::SuperAdmin),
            "ADMIN_TIM" | "ADMINTIM" => Ok(Self::AdminTim),
            "PEGAWAI" => Ok(Self::Pegawai),
            _ => Err(AuthError::UnknownRole(s.to_string())),
        }
    }
}

/// The employee performing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The acting employee's NIP.
    pub nip: Nip,
    /// The role assigned to this actor.
    pub role: Role,
    /// The actor's unit, when the actor is on the roster.
    pub unit: Option<String>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `nip` - The acting employee's NIP
    /// * `role` - The role assigned to this actor
    /// * `unit` - The actor's unit
    #[must_use]
    pub const fn new(nip: Nip, role: Role, unit: Option<String>) -> Self {
        Self { nip, role, unit }
    }

    /// Creates an actor, taking the unit from the roster.
    #[must_use]
    pub fn resolve(nip: Nip, role: Role, registry: &Registry) -> Self {
        let unit: Option<String> = registry.employee(&nip).map(|employee| employee.unit.clone());
        Self::new(nip, role, unit)
    }
}

/// Something an actor may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Issue a new assignment letter.
    CreateAssignment,
    /// See every assignment, not only one's own.
    ViewAllTasks,
    /// See an assignment and its report.
    ViewTask,
    /// File or edit a report.
    FileReport,
    /// Delete a report.
    DeleteReport,
    /// Verify a submitted report.
    VerifyReport,
}

impl Action {
    /// Returns the action name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateAssignment => "create_assignment",
            Self::ViewAllTasks => "view_all_tasks",
            Self::ViewTask => "view_task",
            Self::FileReport => "file_report",
            Self::DeleteReport => "delete_report",
            Self::VerifyReport => "verify_report",
        }
    }

    const fn required_role(self) -> &'static str {
        match self {
            Self::CreateAssignment | Self::ViewAllTasks => "SUPER_ADMIN or ADMIN_TIM",
            Self::ViewTask | Self::FileReport => "assignment member",
            Self::DeleteReport => "report creator or unit admin",
            Self::VerifyReport => "SUPER_ADMIN or unit ADMIN_TIM",
        }
    }
}

/// Who an assignment belongs to, for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskOwner {
    /// Listed employees.
    pub members: BTreeSet<Nip>,
    /// The employee who filed the current report.
    pub report_creator: Option<Nip>,
    /// Units of the listed employees.
    pub units: BTreeSet<String>,
}

impl TaskOwner {
    /// Resolves the owners of a task through the registry.
    #[must_use]
    pub fn of(task: &AssignmentTask, registry: &Registry) -> Self {
        Self {
            members: task.members.iter().cloned().collect(),
            report_creator: task.report_creator_nip.clone(),
            units: registry
                .members(task)
                .map(|employee| employee.unit.clone())
                .collect(),
        }
    }

    fn is_member(&self, nip: &Nip) -> bool {
        self.members.contains(nip) || self.report_creator.as_ref() == Some(nip)
    }

    fn in_unit(&self, unit: Option<&str>) -> bool {
        unit.is_some_and(|unit| self.units.contains(unit))
    }
}

/// The single authorization predicate.
///
/// `owner` is the assignment the action targets; actions on an assignment
/// are denied when it is absent.
#[must_use]
pub fn can(actor: &AuthenticatedActor, action: Action, owner: Option<&TaskOwner>) -> bool {
    if actor.role == Role::SuperAdmin {
        return true;
    }

    let is_member: bool = owner.is_some_and(|owner| owner.is_member(&actor.nip));
    let in_unit: bool = owner.is_some_and(|owner| owner.in_unit(actor.unit.as_deref()));

    let team_admin: bool = actor.role == Role::AdminTim;

    match action {
        Action::CreateAssignment | Action::ViewAllTasks => actor.role.is_admin(),
        Action::ViewTask => team_admin || is_member,
        Action::FileReport => is_member,
        Action::DeleteReport => is_member || (team_admin && in_unit),
        Action::VerifyReport => team_admin && in_unit,
    }
}

/// Authorization service for enforcing the policy.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks whether an actor may perform an action.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The attempted action
    /// * `owner` - The targeted assignment's owners, if any
    ///
    /// # Errors
    ///
    /// Returns an error if [`can`] denies the action.
    pub fn authorize(
        actor: &AuthenticatedActor,
        action: Action,
        owner: Option<&TaskOwner>,
    ) -> Result<(), AuthError> {
        if can(actor, action, owner) {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from(action.as_str()),
            required_role: String::from(action.required_role()),
        })
    }

    /// Checks whether an actor may issue assignment letters.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is staff.
    pub fn authorize_create_assignment(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::authorize(actor, Action::CreateAssignment, None)
    }
}
