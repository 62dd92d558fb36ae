// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

use crate::{
    ActivityType, AssignmentDraft, AssignmentTask, Employee, Nip, Registry, ReportDetails,
    ReportSubmission,
};

pub fn create_test_employee(nip: &str, name: &str, unit: &str) -> Employee {
    Employee::new(Nip::new(nip), name, "Analis", unit)
}

pub fn create_test_task(
    letter_number: &str,
    start: Date,
    end: Date,
    activity_type: ActivityType,
    members: &[&str],
) -> AssignmentTask {
    let mut task: AssignmentTask = AssignmentTask::new(letter_number);
    task.description = format!("Kegiatan {letter_number}");
    task.location = String::from("Sofifi");
    task.start_date = Some(start);
    task.end_date = Some(end);
    task.activity_type = activity_type;
    for nip in members {
        task.add_member(Nip::new(nip));
    }
    task
}

pub fn create_test_registry(employees: Vec<Employee>, tasks: Vec<AssignmentTask>) -> Registry {
    let mut registry: Registry = Registry::new();
    for employee in employees {
        registry.upsert_employee(employee);
    }
    for task in tasks {
        registry.insert_task(task).unwrap();
    }
    registry
}

pub fn create_test_submission(photo_count: usize) -> ReportSubmission {
    ReportSubmission {
        details: ReportDetails {
            narrative: String::from("Melaksanakan koordinasi teknis"),
            outcome: String::from("Data capaian terverifikasi"),
            obstacle: Some(String::from("  ")),
            solution: None,
        },
        photos: (0..photo_count)
            .map(|i| format!("https://example.org/foto-{i}.jpg"))
            .collect(),
        report_date: String::from("16 Oktober 2026"),
        creator: Nip::new("123"),
    }
}

pub fn create_test_draft(start: Date, end: Date, members: &[&str]) -> AssignmentDraft {
    AssignmentDraft {
        letter_number: String::from("800/ST/045/BPMP/2026"),
        basis: String::from("Surat Undangan Dinas Pendidikan Provinsi"),
        description: String::from("Koordinasi penjaminan mutu"),
        location: String::from("Sofifi"),
        start_date: start,
        end_date: end,
        signee: String::from("Dr. Santoso, S.Pd., M.Si."),
        activity_type: ActivityType::Luring,
        funding_type: None,
        members: members.iter().map(|nip| Nip::new(nip)).collect(),
    }
}
