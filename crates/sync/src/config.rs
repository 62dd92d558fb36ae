// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where the tables live and how to read them.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use situgas::{CoreError, ScheduleLayout, SourceKind, SourceSchema};
use situgas_domain::{DomainError, parse_timezone};
use std::str::FromStr;
use std::time::Duration;

/// Spreadsheet holding the roster, discipline and report sheets.
pub const DEFAULT_STAFF_SPREADSHEET: &str = "1iB7Tdda08wD1u5IwiKUEjkfI2JFzw4wjTI_bGRhivVc";
/// Spreadsheet holding the assignment schedule.
pub const DEFAULT_SCHEDULE_SPREADSHEET: &str = "1efjMOHknnC4RaYf9qTxPXGoLHSv5HelSMPYBqDi_y6s";
/// Column preset of the default schedule sheet, which lists the employee
/// name after the NIP.
pub const DEFAULT_SCHEDULE_LAYOUT: &str = "named";

/// One sheet inside a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLocation {
    pub spreadsheet_id: String,
    pub sheet_name: String,
}

impl SheetLocation {
    fn new(spreadsheet_id: &str, sheet_name: &str) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_string(),
            sheet_name: sheet_name.to_string(),
        }
    }
}

/// Settings for fetching and writing the backing tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub roster: SheetLocation,
    pub schedule: SheetLocation,
    pub discipline: SheetLocation,
    pub reports: SheetLocation,
    /// Schedule column preset, `compact` or `named`.
    pub schedule_layout: String,
    /// Web app receiving mutations. Without it writes stay in memory.
    pub apps_script_url: Option<String>,
    /// IANA zone used to decide what "today" is.
    pub timezone: String,
    /// Per-fetch timeout in milliseconds.
    pub fetch_timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            roster: SheetLocation::new(DEFAULT_STAFF_SPREADSHEET, "DATA_PEGAWAI"),
            schedule: SheetLocation::new(DEFAULT_SCHEDULE_SPREADSHEET, "Jadwal Tugas"),
            discipline: SheetLocation::new(DEFAULT_STAFF_SPREADSHEET, "DISIPLIN_PEGAWAI"),
            reports: SheetLocation::new(DEFAULT_STAFF_SPREADSHEET, "LAPORAN_TUGAS"),
            schedule_layout: String::from(DEFAULT_SCHEDULE_LAYOUT),
            apps_script_url: None,
            timezone: String::from("Asia/Jayapura"),
            fetch_timeout_ms: 15_000,
        }
    }
}

impl SyncConfig {
    /// The sheet backing a source.
    #[must_use]
    pub const fn location(&self, kind: SourceKind) -> &SheetLocation {
        match kind {
            SourceKind::Roster => &self.roster,
            SourceKind::Schedule => &self.schedule,
            SourceKind::Discipline => &self.discipline,
            SourceKind::Reports => &self.reports,
        }
    }

    /// Column layouts for all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule layout name is unknown.
    pub fn schema(&self) -> Result<SourceSchema, CoreError> {
        ScheduleLayout::from_str(&self.schedule_layout).map(SourceSchema::with_schedule)
    }

    /// The office timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone name is unknown.
    pub fn timezone(&self) -> Result<Tz, DomainError> {
        parse_timezone(&self.timezone)
    }

    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}
