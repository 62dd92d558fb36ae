// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{TableSet, parse_table};
use situgas_domain::{Nip, ReportDetails, ReportSubmission};

pub const ROSTER: &str = "\
NIP,Nama,Jabatan,Unit
123,Budi,Analyst,Unit A
456,Siti,Pengawas,Unit B
789,Rahman,,
";

pub const SCHEDULE: &str = "\
NIP,Nomor Surat,Jenis,Kegiatan,Lokasi,Mulai,Selesai,Penandatangan,Pembiayaan
123,LTR-1,Luring,Workshop,City Hall,2026-02-01,2026-02-03,Director,Biaya BPMP
456,LTR-1,Luring,Workshop,City Hall,2026-02-01,2026-02-03,Director,Biaya BPMP
456,LTR-2,Daring,Webinar Mutu,Zoom,05/02/2026,06/02/2026,Director,
";

pub const DISCIPLINE: &str = "\
NIP,Absensi,Apel,Log Harian,Laporan
123,100,100,100,100
456,80,0,0,0
";

pub const REPORTS: &str = r#"Nomor Surat,Isi,Tanggal,Pembuat,Foto,Status
LTR-2,"{""uraian"":""Mengikuti webinar"",""hasil"":""Catatan rapat""}",06/02/2026,456,"[""a.jpg"",""b.jpg"",""c.jpg""]",Sudah Upload
"#;

pub fn create_test_tables() -> TableSet {
    TableSet {
        roster: Some(parse_table(ROSTER)),
        schedule: Some(parse_table(SCHEDULE)),
        discipline: Some(parse_table(DISCIPLINE)),
        reports: Some(parse_table(REPORTS)),
    }
}

pub fn create_test_submission(photo_count: usize) -> ReportSubmission {
    ReportSubmission {
        details: ReportDetails {
            narrative: String::from("Mengisi materi workshop"),
            outcome: String::from("Peserta memahami instrumen"),
            obstacle: None,
            solution: None,
        },
        photos: (0..photo_count).map(|i| format!("foto-{i}.jpg")).collect(),
        report_date: String::from("03/02/2026"),
        creator: Nip::new("123"),
    }
}
