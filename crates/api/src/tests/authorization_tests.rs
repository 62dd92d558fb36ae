// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use situgas_domain::Registry;
use std::str::FromStr;

use super::helpers::{
    create_test_registry, create_test_staff, create_test_super_admin, create_test_team_admin,
};
use crate::{
    Action, AuthError, AuthenticatedActor, AuthorizationService, Role, TaskOwner, can,
    compute_global_capabilities, compute_task_capabilities,
};

fn owner_of(registry: &Registry, letter_number: &str) -> TaskOwner {
    TaskOwner::of(registry.task(letter_number).unwrap(), registry)
}

#[test]
fn test_role_parsing_is_lenient() {
    assert_eq!(Role::from_str("SUPER_ADMIN").unwrap(), Role::SuperAdmin);
    assert_eq!(Role::from_str("super-admin").unwrap(), Role::SuperAdmin);
    assert_eq!(Role::from_str(" AdminTim ").unwrap(), Role::AdminTim);
    assert_eq!(Role::from_str("pegawai").unwrap(), Role::Pegawai);
}

#[test]
fn test_unknown_role_is_rejected() {
    let result = Role::from_str("operator");

    assert!(matches!(result, Err(AuthError::UnknownRole(role)) if role == "operator"));
}

#[test]
fn test_super_admin_can_do_everything() {
    let registry: Registry = create_test_registry();
    let actor: AuthenticatedActor = create_test_super_admin();
    let owner: TaskOwner = owner_of(&registry, "LTR-2");

    assert!(can(&actor, Action::CreateAssignment, None));
    assert!(can(&actor, Action::ViewAllTasks, None));
    assert!(can(&actor, Action::ViewTask, Some(&owner)));
    assert!(can(&actor, Action::FileReport, Some(&owner)));
    assert!(can(&actor, Action::DeleteReport, Some(&owner)));
    assert!(can(&actor, Action::VerifyReport, Some(&owner)));
}

#[test]
fn test_staff_cannot_issue_letters() {
    let staff: AuthenticatedActor = create_test_staff("123");

    assert!(!can(&staff, Action::CreateAssignment, None));
    assert!(!can(&staff, Action::ViewAllTasks, None));

    let result = AuthorizationService::authorize_create_assignment(&staff);
    assert!(matches!(
        result,
        Err(AuthError::Unauthorized { action, .. }) if action == "create_assignment"
    ));
}

#[test]
fn test_team_admin_can_issue_letters() {
    let admin: AuthenticatedActor = create_test_team_admin();

    assert!(AuthorizationService::authorize_create_assignment(&admin).is_ok());
    assert!(can(&admin, Action::ViewAllTasks, None));
}

#[test]
fn test_staff_reports_only_on_own_assignments() {
    let registry: Registry = create_test_registry();
    let staff: AuthenticatedActor = create_test_staff("123");

    assert!(can(&staff, Action::ViewTask, Some(&owner_of(&registry, "LTR-1"))));
    assert!(can(&staff, Action::FileReport, Some(&owner_of(&registry, "LTR-1"))));
    assert!(!can(&staff, Action::ViewTask, Some(&owner_of(&registry, "LTR-2"))));
    assert!(!can(&staff, Action::FileReport, Some(&owner_of(&registry, "LTR-2"))));
}

#[test]
fn test_staff_cannot_verify_own_report() {
    let registry: Registry = create_test_registry();
    let creator: AuthenticatedActor = create_test_staff("456");
    let owner: TaskOwner = owner_of(&registry, "LTR-2");

    assert!(can(&creator, Action::DeleteReport, Some(&owner)));
    assert!(!can(&creator, Action::VerifyReport, Some(&owner)));
}

#[test]
fn test_team_admin_verifies_only_within_unit() {
    let registry: Registry = create_test_registry();
    let admin: AuthenticatedActor = create_test_team_admin();

    assert!(can(&admin, Action::VerifyReport, Some(&owner_of(&registry, "LTR-1"))));
    assert!(!can(&admin, Action::VerifyReport, Some(&owner_of(&registry, "LTR-2"))));
    assert!(!can(&admin, Action::DeleteReport, Some(&owner_of(&registry, "LTR-2"))));
}

#[test]
fn test_team_admin_without_unit_verifies_nothing() {
    let registry: Registry = create_test_registry();
    let admin: AuthenticatedActor =
        AuthenticatedActor::new(situgas_domain::Nip::new("999"), Role::AdminTim, None);

    assert!(!can(&admin, Action::VerifyReport, Some(&owner_of(&registry, "LTR-1"))));
    assert!(can(&admin, Action::ViewTask, Some(&owner_of(&registry, "LTR-1"))));
}

#[test]
fn test_task_actions_need_a_target() {
    let staff: AuthenticatedActor = create_test_staff("123");

    assert!(!can(&staff, Action::FileReport, None));
    assert!(!can(&staff, Action::ViewTask, None));
}

#[test]
fn test_global_capabilities_follow_role() {
    let staff = compute_global_capabilities(&create_test_staff("123"));
    let admin = compute_global_capabilities(&create_test_team_admin());

    assert!(!staff.can_create_assignment.is_allowed());
    assert!(!staff.can_view_all_tasks.is_allowed());
    assert!(admin.can_create_assignment.is_allowed());
    assert!(admin.can_view_all_tasks.is_allowed());
}

#[test]
fn test_task_capabilities_for_pending_member() {
    let registry: Registry = create_test_registry();
    let staff: AuthenticatedActor = create_test_staff("123");
    let task = registry.task("LTR-1").unwrap();

    let caps = compute_task_capabilities(&staff, task, &TaskOwner::of(task, &registry));

    assert!(caps.can_file_report.is_allowed());
    assert!(!caps.can_edit_report.is_allowed());
    assert!(!caps.can_delete_report.is_allowed());
    assert!(!caps.can_verify_report.is_allowed());
}

#[test]
fn test_task_capabilities_for_submitted_report() {
    let registry: Registry = create_test_registry();
    let task = registry.task("LTR-2").unwrap();
    let owner: TaskOwner = TaskOwner::of(task, &registry);

    let creator = compute_task_capabilities(&create_test_staff("456"), task, &owner);
    assert!(!creator.can_file_report.is_allowed());
    assert!(creator.can_edit_report.is_allowed());
    assert!(creator.can_delete_report.is_allowed());
    assert!(!creator.can_verify_report.is_allowed());

    let super_admin = compute_task_capabilities(&create_test_super_admin(), task, &owner);
    assert!(super_admin.can_verify_report.is_allowed());
}

#[test]
fn test_verified_report_offers_no_edit_or_verify() {
    let registry: Registry = create_test_registry();
    let task = registry.task("LTR-3").unwrap();

    let caps = compute_task_capabilities(
        &create_test_super_admin(),
        task,
        &TaskOwner::of(task, &registry),
    );

    assert!(!caps.can_file_report.is_allowed());
    assert!(!caps.can_edit_report.is_allowed());
    assert!(caps.can_delete_report.is_allowed());
    assert!(!caps.can_verify_report.is_allowed());
}
