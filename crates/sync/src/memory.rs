// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory workbook.
//!
//! Holds the four tables as CSV text and serves as both table source and
//! mutation host. Writes are applied by rewriting the stored CSV, so the
//! refresh that follows reads them back exactly as it would from the
//! spreadsheets.

use async_trait::async_trait;
use situgas::{
    Command, SourceKind, SourceSchema, TableSet, apply, encode_report_row, encode_schedule_rows,
    parse_table, reconcile, render_table,
};
use situgas_domain::{AssignmentTask, Registry};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::source::{MutationHost, TableSource};

/// Tables held in memory.
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    schema: SourceSchema,
    tables: RwLock<BTreeMap<SourceKind, String>>,
}

impl MemoryWorkbook {
    /// Creates an empty workbook using the given layouts.
    #[must_use]
    pub fn new(schema: SourceSchema) -> Self {
        Self {
            schema,
            tables: RwLock::new(BTreeMap::new()),
        }
    }

    /// Adds a table, replacing any earlier one of the same kind.
    #[must_use]
    pub fn with_table(mut self, kind: SourceKind, csv: &str) -> Self {
        self.tables.get_mut().insert(kind, csv.to_string());
        self
    }

    /// Copies every table the source can provide.
    ///
    /// Tables that fail to load are left out and logged.
    pub async fn seed_from(source: &dyn TableSource, schema: SourceSchema) -> Self {
        let mut tables: BTreeMap<SourceKind, String> = BTreeMap::new();
        for kind in SourceKind::ALL {
            match source.fetch_table(kind).await {
                Ok(csv) => {
                    tables.insert(kind, csv);
                }
                Err(e) => warn!(source = %kind, error = %e, "Workbook seeded without table"),
            }
        }
        info!(tables = tables.len(), "Seeded in-memory workbook");
        Self {
            schema,
            tables: RwLock::new(tables),
        }
    }

    /// Current CSV text of a table.
    pub async fn table(&self, kind: SourceKind) -> Option<String> {
        self.tables.read().await.get(&kind).cloned()
    }

    fn rows_of(tables: &BTreeMap<SourceKind, String>, kind: SourceKind) -> Vec<Vec<String>> {
        tables
            .get(&kind)
            .map(|csv| parse_table(csv))
            .unwrap_or_default()
    }

    fn placeholder_header(width: usize) -> Vec<String> {
        (1..=width).map(|col| format!("Kolom {col}")).collect()
    }

    fn append_schedule(
        &self,
        rows: &mut Vec<Vec<String>>,
        task: &AssignmentTask,
        registry: &Registry,
    ) {
        if rows.is_empty() {
            rows.push(Self::placeholder_header(self.schema.schedule.width()));
        }
        rows.extend(encode_schedule_rows(task, &self.schema.schedule, |nip| {
            registry.employee(nip).map(|employee| employee.name.clone())
        }));
    }

    fn replace_report(&self, rows: &mut Vec<Vec<String>>, task: &AssignmentTask) {
        if rows.is_empty() {
            rows.push(Self::placeholder_header(self.schema.reports.width()));
        }
        let column: usize = self.schema.reports.letter_number;
        let mut index: usize = 0;
        rows.retain(|row| {
            index += 1;
            index == 1 || row.get(column).map(|cell| cell.trim()) != Some(task.letter_number.as_str())
        });
        if let Some(row) = encode_report_row(task, &self.schema.reports) {
            rows.push(row);
        }
    }
}

#[async_trait]
impl TableSource for MemoryWorkbook {
    async fn fetch_table(&self, kind: SourceKind) -> Result<String, SourceError> {
        self.table(kind).await.ok_or(SourceError::Unavailable(kind))
    }
}

#[async_trait]
impl MutationHost for MemoryWorkbook {
    async fn execute(&self, command: &Command) -> Result<(), SourceError> {
        let today: Date = OffsetDateTime::now_utc().date();
        let mut tables = self.tables.write().await;

        let mut set: TableSet = TableSet::default();
        for kind in SourceKind::ALL {
            set.set(kind, tables.get(&kind).map(|csv| parse_table(csv)));
        }
        let current: Registry = reconcile(&set, &self.schema, today).registry;
        let updated: Registry = apply(&current, command, today)?;

        let kind: SourceKind = match command {
            Command::SaveAssignment { .. } => SourceKind::Schedule,
            Command::SaveReport { .. }
            | Command::DeleteReport { .. }
            | Command::VerifyReport { .. } => SourceKind::Reports,
        };
        let mut rows: Vec<Vec<String>> = Self::rows_of(&tables, kind);

        let task: &AssignmentTask = updated
            .task(command.letter_number())
            .ok_or(SourceError::Unavailable(kind))?;
        match kind {
            SourceKind::Schedule => self.append_schedule(&mut rows, task, &updated),
            _ => self.replace_report(&mut rows, task),
        }

        tables.insert(kind, render_table(&rows)?);
        debug!(
            action = command.action_name(),
            letter_number = command.letter_number(),
            source = %kind,
            "Workbook table rewritten"
        );
        Ok(())
    }
}
