// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use situgas::{CoreError, ScheduleLayout, SourceKind, map_schedule_row};
use situgas_domain::ActivityType;
use std::time::Duration;
use time::macros::date;

use crate::{SheetsClient, SyncConfig};

#[test]
fn test_default_config() {
    let config = SyncConfig::default();

    assert_eq!(config.schema().unwrap().schedule, ScheduleLayout::NAMED);
    assert_eq!(config.location(SourceKind::Schedule).sheet_name, "Jadwal Tugas");
    assert!(config.apps_script_url.is_none());
    assert!(config.timezone().is_ok());
    assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
}

#[test]
fn test_default_layout_reads_the_default_schedule_sheet() {
    let schema = SyncConfig::default().schema().unwrap();
    let row: Vec<String> = [
        "198503122010011001",
        "Budi Santoso",
        "800/ST/077/BPMP/2026",
        "Daring",
        "Webinar Mutu",
        "Zoom",
        "2026-02-05",
        "2026-02-06",
        "Kepala BPMP",
        "Tanpa Biaya",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    let record = map_schedule_row(&row, &schema.schedule).unwrap();

    assert_eq!(record.employee_name.as_deref(), Some("Budi Santoso"));
    assert_eq!(record.letter_number, "800/ST/077/BPMP/2026");
    assert_eq!(record.activity_type, ActivityType::Daring);
    assert_eq!(record.start_date, Some(date!(2026 - 02 - 05)));
    assert_eq!(record.signee, "Kepala BPMP");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: SyncConfig =
        serde_json::from_str(r#"{"schedule_layout":"compact","timezone":"Asia/Makassar"}"#)
            .unwrap();

    assert_eq!(config.schema().unwrap().schedule, ScheduleLayout::COMPACT);
    assert_eq!(config.timezone, "Asia/Makassar");
    assert_eq!(config.reports.sheet_name, "LAPORAN_TUGAS");
}

#[test]
fn test_unknown_layout_is_rejected() {
    let config = SyncConfig {
        schedule_layout: String::from("wide"),
        ..SyncConfig::default()
    };

    assert_eq!(
        config.schema(),
        Err(CoreError::UnknownLayout(String::from("wide")))
    );
}

#[test]
fn test_table_url_encodes_sheet_name() {
    let client = SheetsClient::new(&SyncConfig::default()).unwrap();

    let url = client.table_url(SourceKind::Schedule).unwrap();

    assert_eq!(
        url.as_str(),
        "https://docs.google.com/spreadsheets/d/1efjMOHknnC4RaYf9qTxPXGoLHSv5HelSMPYBqDi_y6s/gviz/tq?tqx=out%3Acsv&sheet=Jadwal+Tugas"
    );
}

#[test]
fn test_table_url_with_custom_base() {
    let client = SheetsClient::new(&SyncConfig::default())
        .unwrap()
        .with_base_url("http://127.0.0.1:9000/d/");

    let url = client.table_url(SourceKind::Roster).unwrap();

    assert!(url.as_str().starts_with("http://127.0.0.1:9000/d/1iB7"));
    assert!(url.as_str().ends_with("sheet=DATA_PEGAWAI"));
}
