// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.
//!
//! The fixture registry, as of 2026-02-02:
//!
//! | Letter | Type   | Dates        | Members  | Report    |
//! |--------|--------|--------------|----------|-----------|
//! | LTR-1  | Luring | 02-01..02-03 | 123      | Pending   |
//! | LTR-2  | Luring | 02-05..02-06 | 456      | Submitted |
//! | LTR-3  | Daring | 02-01..02-02 | 456, 789 | Verified  |

use situgas_domain::{
    ActivityType, AssignmentDraft, AssignmentTask, DisciplineScore, Employee, Nip, Registry,
    ReportDetails, ReportSubmission,
};
use time::Date;
use time::macros::date;

use crate::{AuthenticatedActor, Role, SubmitReportRequest};

pub const TODAY: Date = date!(2026 - 02 - 02);

fn employee(nip: &str, name: &str, unit: &str, score: f64) -> Employee {
    let mut employee: Employee = Employee::new(Nip::new(nip), name, "Analis", unit);
    employee.discipline_score = DisciplineScore::new(score, score, score, score);
    employee
}

fn task(
    letter_number: &str,
    description: &str,
    start: Date,
    end: Date,
    activity_type: ActivityType,
    members: &[&str],
) -> AssignmentTask {
    let mut task: AssignmentTask = AssignmentTask::new(letter_number);
    task.description = String::from(description);
    task.location = String::from("Ternate");
    task.signee = String::from("Kepala BPMP");
    task.start_date = Some(start);
    task.end_date = Some(end);
    task.activity_type = activity_type;
    for nip in members {
        task.add_member(Nip::new(nip));
    }
    task
}

fn submission(creator: &str) -> ReportSubmission {
    ReportSubmission {
        details: ReportDetails {
            narrative: String::from("Kegiatan terlaksana"),
            outcome: String::from("Rekomendasi tindak lanjut"),
            obstacle: None,
            solution: None,
        },
        photos: vec![
            String::from("1.jpg"),
            String::from("2.jpg"),
            String::from("3.jpg"),
        ],
        report_date: String::from("06/02/2026"),
        creator: Nip::new(creator),
    }
}

pub fn create_test_registry() -> Registry {
    let mut registry: Registry = Registry::new();
    registry.upsert_employee(employee("100", "Andi", "Unit A", 100.0));
    registry.upsert_employee(employee("200", "Budi", "Unit A", 80.0));
    registry.upsert_employee(employee("123", "Citra", "Unit A", 70.0));
    registry.upsert_employee(employee("456", "Dewi", "Unit B", 50.0));
    registry.upsert_employee(employee("789", "Eko", "Unit B", 95.0));

    let ltr1: AssignmentTask = task(
        "LTR-1",
        "Workshop Kurikulum",
        date!(2026 - 02 - 01),
        date!(2026 - 02 - 03),
        ActivityType::Luring,
        &["123"],
    );
    let mut ltr2: AssignmentTask = task(
        "LTR-2",
        "Supervisi Sekolah",
        date!(2026 - 02 - 05),
        date!(2026 - 02 - 06),
        ActivityType::Luring,
        &["456"],
    );
    ltr2.file_report(submission("456")).unwrap();
    let mut ltr3: AssignmentTask = task(
        "LTR-3",
        "Webinar Mutu",
        date!(2026 - 02 - 01),
        date!(2026 - 02 - 02),
        ActivityType::Daring,
        &["456", "789"],
    );
    ltr3.file_report(submission("456")).unwrap();
    ltr3.verify_report().unwrap();

    registry.insert_task(ltr1).unwrap();
    registry.insert_task(ltr2).unwrap();
    registry.insert_task(ltr3).unwrap();

    for (nip, activity) in [
        ("123", "Workshop Kurikulum"),
        ("456", "Webinar Mutu"),
        ("789", "Webinar Mutu"),
    ] {
        registry
            .employee_mut(&Nip::new(nip))
            .unwrap()
            .mark_assigned(activity);
    }
    registry
}

pub fn create_test_super_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(Nip::new("100"), Role::SuperAdmin, Some(String::from("Unit A")))
}

pub fn create_test_team_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(Nip::new("200"), Role::AdminTim, Some(String::from("Unit A")))
}

pub fn create_test_staff(nip: &str) -> AuthenticatedActor {
    AuthenticatedActor::resolve(Nip::new(nip), Role::Pegawai, &create_test_registry())
}

pub fn create_test_draft(activity_type: ActivityType, members: &[&str]) -> AssignmentDraft {
    AssignmentDraft {
        letter_number: String::from("800/ST/077/BPMP/2026"),
        basis: String::from("DIPA BPMP Tahun 2026"),
        description: String::from("Pendampingan Rapor Pendidikan"),
        location: String::from("Tidore"),
        start_date: date!(2026 - 02 - 02),
        end_date: date!(2026 - 02 - 04),
        signee: String::from("Kepala BPMP"),
        activity_type,
        funding_type: None,
        members: members.iter().map(|nip| Nip::new(nip)).collect(),
    }
}

pub fn create_test_report_request(photo_count: usize) -> SubmitReportRequest {
    SubmitReportRequest {
        details: ReportDetails {
            narrative: String::from("Melaksanakan pendampingan"),
            outcome: String::from("Sekolah menyusun rencana"),
            obstacle: Some(String::from("Akses jalan")),
            solution: None,
        },
        photos: (0..photo_count).map(|i| format!("foto-{i}.jpg")).collect(),
        report_date: None,
    }
}
