// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures and instrumented sources.

use async_trait::async_trait;
use situgas::{Command, SourceKind, SourceSchema};
use situgas_domain::{ActivityType, AssignmentTask, Nip, ReportDetails, ReportSubmission};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use time::macros::date;
use tokio::sync::Semaphore;

use crate::{
    MemoryWorkbook, MutationHost, SessionStore, SourceError, SyncConfig, TableSource,
};

pub const ROSTER: &str = "\
NIP,Nama,Jabatan,Unit
123,Budi,Analis,Unit A
456,Siti,Pengawas,Unit B
789,Rahman,Pengawas,Unit B
";

pub const SCHEDULE: &str = "\
NIP,Nomor Surat,Jenis,Kegiatan,Lokasi,Mulai,Selesai,Penandatangan,Pembiayaan
123,LTR-1,Luring,Workshop,Ternate,2026-02-01,2026-02-03,Kepala BPMP,Biaya BPMP
456,LTR-2,Daring,Webinar Mutu,Zoom,05/02/2026,06/02/2026,Kepala BPMP,
";

pub const DISCIPLINE: &str = "\
NIP,Absensi,Apel,Log Harian,Laporan
123,100,100,100,100
456,80,0,0,0
";

pub const REPORTS: &str = r#"Nomor Surat,Isi,Tanggal,Pembuat,Foto,Status
LTR-2,"{""uraian"":""Mengikuti webinar"",""hasil"":""Catatan rapat""}",06/02/2026,456,"[""a.jpg"",""b.jpg"",""c.jpg""]",Sudah Upload
"#;

pub fn create_test_workbook() -> MemoryWorkbook {
    MemoryWorkbook::new(SourceSchema::default())
        .with_table(SourceKind::Roster, ROSTER)
        .with_table(SourceKind::Schedule, SCHEDULE)
        .with_table(SourceKind::Discipline, DISCIPLINE)
        .with_table(SourceKind::Reports, REPORTS)
}

pub fn create_test_config() -> SyncConfig {
    SyncConfig {
        schedule_layout: String::from("compact"),
        fetch_timeout_ms: 1_000,
        ..SyncConfig::default()
    }
}

pub fn create_test_store(source: Arc<dyn TableSource>, host: Arc<dyn MutationHost>) -> SessionStore {
    SessionStore::new(source, host, &create_test_config()).unwrap()
}

pub fn create_test_task(letter_number: &str, members: &[&str]) -> AssignmentTask {
    let mut task: AssignmentTask = AssignmentTask::new(letter_number);
    task.basis = String::from("DIPA 2026");
    task.description = String::from("Pendampingan Sekolah");
    task.location = String::from("Tidore");
    task.signee = String::from("Kepala BPMP");
    task.start_date = Some(date!(2026 - 03 - 10));
    task.end_date = Some(date!(2026 - 03 - 12));
    task.activity_type = ActivityType::Luring;
    for nip in members {
        task.add_member(Nip::new(nip));
    }
    task
}

pub fn create_test_submission(creator: &str) -> ReportSubmission {
    ReportSubmission {
        details: ReportDetails {
            narrative: String::from("Mengisi materi workshop"),
            outcome: String::from("Peserta memahami instrumen"),
            obstacle: None,
            solution: None,
        },
        photos: vec![
            String::from("1.jpg"),
            String::from("2.jpg"),
            String::from("3.jpg"),
        ],
        report_date: String::from("03/02/2026"),
        creator: Nip::new(creator),
    }
}

/// Wraps a workbook, counting fetches and failing selected tables.
pub struct FlakySource {
    pub inner: Arc<MemoryWorkbook>,
    failing: Mutex<BTreeSet<SourceKind>>,
    fetches: AtomicUsize,
}

impl FlakySource {
    pub fn new(inner: Arc<MemoryWorkbook>) -> Self {
        Self {
            inner,
            failing: Mutex::new(BTreeSet::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fail(&self, kinds: &[SourceKind]) {
        let mut failing = self.failing.lock().unwrap();
        failing.clear();
        failing.extend(kinds.iter().copied());
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableSource for FlakySource {
    async fn fetch_table(&self, kind: SourceKind) -> Result<String, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let failing: bool = self.failing.lock().unwrap().contains(&kind);
        if failing {
            return Err(SourceError::Status {
                target: kind.to_string(),
                status: 503,
            });
        }
        self.inner.fetch_table(kind).await
    }
}

/// Reads each table, then holds the result until a permit is released.
pub struct GatedSource {
    pub inner: Arc<MemoryWorkbook>,
    pub gate: Semaphore,
    pub started: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::over(Arc::new(create_test_workbook()))
    }

    pub fn over(inner: Arc<MemoryWorkbook>) -> Self {
        Self {
            inner,
            gate: Semaphore::new(0),
            started: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TableSource for GatedSource {
    async fn fetch_table(&self, kind: SourceKind) -> Result<String, SourceError> {
        let table = self.inner.fetch_table(kind).await;
        self.started.fetch_add(1, Ordering::SeqCst);
        let _permit = self.gate.acquire().await.unwrap();
        table
    }
}

/// A host that refuses every command.
pub struct RejectingHost;

#[async_trait]
impl MutationHost for RejectingHost {
    async fn execute(&self, command: &Command) -> Result<(), SourceError> {
        Err(SourceError::Rejected {
            action: command.action_name().to_string(),
            message: String::from("Sheet locked"),
        })
    }
}
