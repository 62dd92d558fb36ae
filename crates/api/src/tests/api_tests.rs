// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use situgas::Command;
use situgas_domain::{ActivityType, AssignmentDraft, Nip, Registry};
use time::macros::date;

use super::helpers::{
    TODAY, create_test_draft, create_test_registry, create_test_report_request,
    create_test_staff, create_test_super_admin, create_test_team_admin,
};
use crate::{
    ApiError, CalendarQuery, ConflictCheckRequest, Role, check_conflicts, create_assignment,
    delete_report, get_calendar, get_task, list_unassigned, resolve_actor, submit_report,
    verify_report, whoami,
};

#[test]
fn test_resolve_actor_takes_unit_from_roster() {
    let registry: Registry = create_test_registry();

    let actor = resolve_actor(&registry, " 456 ", "pegawai").unwrap();

    assert_eq!(actor.nip, Nip::new("456"));
    assert_eq!(actor.role, Role::Pegawai);
    assert_eq!(actor.unit.as_deref(), Some("Unit B"));
}

#[test]
fn test_resolve_actor_rejects_blank_nip() {
    let registry: Registry = create_test_registry();

    let result = resolve_actor(&registry, "  ", "SUPER_ADMIN");

    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_resolve_actor_rejects_unknown_role() {
    let registry: Registry = create_test_registry();

    let result = resolve_actor(&registry, "123", "kepala");

    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_whoami_includes_employee() {
    let registry: Registry = create_test_registry();

    let response = whoami(&registry, &create_test_staff("123"));

    assert_eq!(response.employee.unwrap().name, "Citra");
    assert!(!response.capabilities.can_create_assignment.is_allowed());
}

#[test]
fn test_create_assignment_returns_save_command() {
    let registry: Registry = create_test_registry();
    let draft: AssignmentDraft = create_test_draft(ActivityType::Luring, &["200", "789"]);

    let command = create_assignment(&registry, draft, &create_test_team_admin(), TODAY).unwrap();

    let Command::SaveAssignment { task } = command else {
        panic!("expected a save assignment command");
    };
    assert_eq!(task.letter_number, "800/ST/077/BPMP/2026");
    assert_eq!(task.members, vec![Nip::new("200"), Nip::new("789")]);
}

#[test]
fn test_create_assignment_requires_admin() {
    let registry: Registry = create_test_registry();
    let draft: AssignmentDraft = create_test_draft(ActivityType::Luring, &["200"]);

    let result = create_assignment(&registry, draft, &create_test_staff("123"), TODAY);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_create_assignment_rejects_in_person_conflict() {
    let registry: Registry = create_test_registry();
    let draft: AssignmentDraft = create_test_draft(ActivityType::Luring, &["123", "200"]);

    let result = create_assignment(&registry, draft, &create_test_super_admin(), TODAY);

    match result {
        Err(ApiError::SchedulingConflict { employees }) => {
            assert_eq!(employees, vec![String::from("Citra")]);
        }
        other => panic!("expected a scheduling conflict, got {other:?}"),
    }
}

#[test]
fn test_remote_assignment_never_conflicts() {
    let registry: Registry = create_test_registry();
    let draft: AssignmentDraft = create_test_draft(ActivityType::Daring, &["123"]);

    let result = create_assignment(&registry, draft, &create_test_super_admin(), TODAY);

    assert!(result.is_ok());
}

#[test]
fn test_remote_bookings_do_not_block_in_person() {
    let registry: Registry = create_test_registry();
    // 789 is only on the remote LTR-3.
    let draft: AssignmentDraft = create_test_draft(ActivityType::Luring, &["789"]);

    let result = create_assignment(&registry, draft, &create_test_super_admin(), TODAY);

    assert!(result.is_ok());
}

#[test]
fn test_create_assignment_rejects_unknown_member() {
    let registry: Registry = create_test_registry();
    let draft: AssignmentDraft = create_test_draft(ActivityType::Daring, &["200", "000"]);

    let result = create_assignment(&registry, draft, &create_test_super_admin(), TODAY);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Employee"
    ));
}

#[test]
fn test_create_assignment_rejects_issued_letter() {
    let registry: Registry = create_test_registry();
    let mut draft: AssignmentDraft = create_test_draft(ActivityType::Daring, &["200"]);
    draft.letter_number = String::from("LTR-1");

    let result = create_assignment(&registry, draft, &create_test_super_admin(), TODAY);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_letter_number"
    ));
}

#[test]
fn test_create_assignment_rejects_reversed_dates() {
    let registry: Registry = create_test_registry();
    let mut draft: AssignmentDraft = create_test_draft(ActivityType::Daring, &["200"]);
    draft.end_date = date!(2026 - 01 - 30);

    let result = create_assignment(&registry, draft, &create_test_super_admin(), TODAY);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "end_date"
    ));
}

#[test]
fn test_check_conflicts_previews_without_rejecting() {
    let registry: Registry = create_test_registry();
    let request = ConflictCheckRequest {
        members: vec![Nip::new("123"), Nip::new("456")],
        start_date: date!(2026 - 02 - 03),
        end_date: date!(2026 - 02 - 05),
        activity_type: ActivityType::Luring,
    };

    let response = check_conflicts(&registry, &request);

    assert_eq!(
        response.employees,
        vec![String::from("Citra"), String::from("Dewi")]
    );
    assert_eq!(response.conflicts[1].letter_number, "LTR-2");
}

#[test]
fn test_submit_report_defaults_date_and_creator() {
    let registry: Registry = create_test_registry();

    let command = submit_report(
        &registry,
        "LTR-1",
        create_test_report_request(3),
        &create_test_staff("123"),
        TODAY,
    )
    .unwrap();

    let Command::SaveReport {
        letter_number,
        submission,
    } = command
    else {
        panic!("expected a save report command");
    };
    assert_eq!(letter_number, "LTR-1");
    assert_eq!(submission.report_date, "02/02/2026");
    assert_eq!(submission.creator, Nip::new("123"));
}

#[test]
fn test_submit_report_requires_three_photos() {
    let registry: Registry = create_test_registry();

    let result = submit_report(
        &registry,
        "LTR-1",
        create_test_report_request(2),
        &create_test_staff("123"),
        TODAY,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "photos"
    ));
}

#[test]
fn test_submit_report_by_non_member_is_unauthorized() {
    let registry: Registry = create_test_registry();

    let result = submit_report(
        &registry,
        "LTR-1",
        create_test_report_request(3),
        &create_test_staff("456"),
        TODAY,
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_submit_report_on_verified_is_rejected() {
    let registry: Registry = create_test_registry();

    let result = submit_report(
        &registry,
        "LTR-3",
        create_test_report_request(3),
        &create_test_staff("789"),
        TODAY,
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "report_lifecycle"
    ));
}

#[test]
fn test_submit_report_unknown_letter() {
    let registry: Registry = create_test_registry();

    let result = submit_report(
        &registry,
        "LTR-404",
        create_test_report_request(3),
        &create_test_super_admin(),
        TODAY,
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Assignment"
    ));
}

#[test]
fn test_delete_report_names_original_creator() {
    let registry: Registry = create_test_registry();

    let command = delete_report(&registry, "LTR-3", &create_test_super_admin(), TODAY).unwrap();

    assert_eq!(
        command,
        Command::DeleteReport {
            letter_number: String::from("LTR-3"),
            creator: Nip::new("456"),
        }
    );
}

#[test]
fn test_delete_pending_report_is_rejected() {
    let registry: Registry = create_test_registry();

    let result = delete_report(&registry, "LTR-1", &create_test_staff("123"), TODAY);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "report_lifecycle"
    ));
}

#[test]
fn test_delete_report_outside_unit_is_unauthorized() {
    let registry: Registry = create_test_registry();

    let result = delete_report(&registry, "LTR-2", &create_test_team_admin(), TODAY);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_verify_submitted_report() {
    let registry: Registry = create_test_registry();

    let command = verify_report(&registry, "LTR-2", &create_test_super_admin(), TODAY).unwrap();

    assert_eq!(
        command,
        Command::VerifyReport {
            letter_number: String::from("LTR-2"),
        }
    );
}

#[test]
fn test_verify_twice_is_rejected() {
    let registry: Registry = create_test_registry();

    let result = verify_report(&registry, "LTR-3", &create_test_super_admin(), TODAY);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "report_lifecycle"
    ));
}

#[test]
fn test_verify_pending_is_rejected_for_unit_admin() {
    let registry: Registry = create_test_registry();

    let result = verify_report(&registry, "LTR-1", &create_test_team_admin(), TODAY);

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_get_task_hidden_from_non_member() {
    let registry: Registry = create_test_registry();

    let result = get_task(&registry, &create_test_staff("123"), "LTR-2", TODAY);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_get_task_resolves_members() {
    let registry: Registry = create_test_registry();

    let info = get_task(&registry, &create_test_staff("789"), "LTR-3", TODAY).unwrap();

    let names: Vec<&str> = info.member_details.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Dewi", "Eko"]);
}

#[test]
fn test_list_unassigned_requires_admin() {
    let registry: Registry = create_test_registry();

    assert!(list_unassigned(&registry, &create_test_staff("123")).is_err());

    let response = list_unassigned(&registry, &create_test_team_admin()).unwrap();
    let nips: Vec<&str> = response.employees.iter().map(|e| e.nip.value()).collect();
    assert_eq!(nips, vec!["100", "200"]);
}

#[test]
fn test_calendar_rejects_bad_month() {
    let registry: Registry = create_test_registry();

    let result = get_calendar(
        &registry,
        CalendarQuery {
            year: 2026,
            month: 13,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "month"
    ));
}

#[test]
fn test_calendar_covers_whole_month() {
    let registry: Registry = create_test_registry();

    let days = get_calendar(
        &registry,
        CalendarQuery {
            year: 2026,
            month: 2,
        },
    )
    .unwrap();

    assert_eq!(days.len(), 28);
    let second = &days[1];
    assert_eq!(second.date, date!(2026 - 02 - 02));
    assert_eq!(second.active_letters, vec!["LTR-1", "LTR-3"]);
    assert_eq!(second.available, vec![Nip::new("100"), Nip::new("200")]);
}
