// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod mapping;
mod reconcile;
mod schema;
mod tabular;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use mapping::{
    DisciplineRecord, ReportRecord, RosterRecord, ScheduleRecord, encode_report_row,
    encode_schedule_rows, map_discipline_row, map_report_row, map_roster_row, map_schedule_row,
    parse_lenient_number, parse_photos, parse_report_content,
};
pub use reconcile::{Reconciliation, TableSet, reconcile};
pub use schema::{
    DisciplineLayout, ReportLayout, RosterLayout, ScheduleLayout, SourceKind, SourceSchema,
};
pub use tabular::{parse_table, render_table};
