// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session state: the published registry snapshot and how it is rebuilt.
//!
//! Readers clone an `Arc<Snapshot>` and never block a refresh for longer
//! than the pointer swap. Refreshes and writes share one cycle lock: a
//! second refresh is rejected rather than queued, while a write waits for
//! the running cycle and then holds the lock through its own re-fetch.

use chrono_tz::Tz;
use situgas::{Command, SourceKind, SourceSchema, TableSet, parse_table, reconcile};
use situgas_domain::{Registry, today_in};
use std::sync::Arc;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::SyncConfig;
use crate::error::{SourceError, SyncError};
use crate::source::{MutationHost, TableSource};

/// A reconciled registry as published to readers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub registry: Registry,
    /// The office date the snapshot was reconciled for.
    pub today: Date,
    /// Sources that failed this refresh and were served from the last
    /// table that loaded.
    pub stale_sources: Vec<SourceKind>,
    /// Sources that have never loaded.
    pub degraded: Vec<SourceKind>,
    /// When the snapshot was built; `None` before the first refresh.
    pub refreshed_at: Option<OffsetDateTime>,
}

impl Snapshot {
    /// A snapshot with no data.
    #[must_use]
    pub fn empty(today: Date) -> Self {
        Self {
            registry: Registry::new(),
            today,
            stale_sources: Vec::new(),
            degraded: SourceKind::ALL.to_vec(),
            refreshed_at: None,
        }
    }

    /// Returns whether any source is stale or missing.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.stale_sources.is_empty() || !self.degraded.is_empty()
    }
}

/// Owns the published snapshot and the sources it is built from.
pub struct SessionStore {
    source: Arc<dyn TableSource>,
    host: Arc<dyn MutationHost>,
    schema: SourceSchema,
    timezone: Tz,
    fetch_timeout: Duration,
    snapshot: RwLock<Arc<Snapshot>>,
    last_good: Mutex<TableSet>,
    cycle: Mutex<()>,
}

impl SessionStore {
    /// Creates a store with an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule layout or timezone in the
    /// configuration is unknown, or today's date cannot be determined.
    pub fn new(
        source: Arc<dyn TableSource>,
        host: Arc<dyn MutationHost>,
        config: &SyncConfig,
    ) -> Result<Self, SyncError> {
        let schema: SourceSchema = config.schema()?;
        let timezone: Tz = config.timezone()?;
        let today: Date = today_in(timezone)?;

        Ok(Self {
            source,
            host,
            schema,
            timezone,
            fetch_timeout: config.fetch_timeout(),
            snapshot: RwLock::new(Arc::new(Snapshot::empty(today))),
            last_good: Mutex::new(TableSet::default()),
            cycle: Mutex::new(()),
        })
    }

    /// The currently published snapshot.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// The current date in the office timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be represented.
    pub fn today(&self) -> Result<Date, SyncError> {
        today_in(self.timezone).map_err(SyncError::from)
    }

    /// Returns whether a refresh or a write is running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.cycle.try_lock().is_err()
    }

    async fn fetch(&self, kind: SourceKind) -> Result<String, SourceError> {
        tokio::time::timeout(self.fetch_timeout, self.source.fetch_table(kind))
            .await
            .map_err(|_| SourceError::Timeout {
                target: kind.to_string(),
                millis: self.fetch_timeout.as_millis(),
            })?
    }

    /// Fetches all four tables and publishes a new snapshot.
    ///
    /// A source that fails keeps the last table that loaded for it and is
    /// listed in [`Snapshot::stale_sources`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Another refresh or write is running
    /// - `cancel` fires before the fetches complete
    /// - Every source fails; the previous snapshot stays published
    pub async fn refresh(&self, cancel: &CancellationToken) -> Result<Arc<Snapshot>, SyncError> {
        let _cycle: MutexGuard<'_, ()> = self
            .cycle
            .try_lock()
            .map_err(|_| SyncError::RefreshInProgress)?;
        self.reload(cancel).await
    }

    /// Fetches, reconciles and publishes. The caller holds the cycle lock.
    async fn reload(&self, cancel: &CancellationToken) -> Result<Arc<Snapshot>, SyncError> {
        let fetches = async {
            tokio::join!(
                self.fetch(SourceKind::Roster),
                self.fetch(SourceKind::Schedule),
                self.fetch(SourceKind::Discipline),
                self.fetch(SourceKind::Reports),
            )
        };

        let (roster, schedule, discipline, reports) = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!("Refresh cancelled");
                return Err(SyncError::Cancelled);
            }
            results = fetches => results,
        };

        let mut last_good = self.last_good.lock().await;
        let mut stale_sources: Vec<SourceKind> = Vec::new();
        let mut failures: Vec<String> = Vec::new();

        for (kind, result) in [
            (SourceKind::Roster, roster),
            (SourceKind::Schedule, schedule),
            (SourceKind::Discipline, discipline),
            (SourceKind::Reports, reports),
        ] {
            match result {
                Ok(csv) => last_good.set(kind, Some(parse_table(&csv))),
                Err(e) => {
                    warn!(source = %kind, error = %e, "Source fetch failed");
                    failures.push(format!("{kind}: {e}"));
                    if last_good.get(kind).is_some() {
                        stale_sources.push(kind);
                    }
                }
            }
        }

        if failures.len() == SourceKind::ALL.len() {
            error!(failures = failures.len(), "Every source failed; keeping previous snapshot");
            return Err(SyncError::AllSourcesFailed { failures });
        }

        let today: Date = self.today()?;
        let reconciliation = reconcile(&last_good, &self.schema, today);
        drop(last_good);

        let snapshot: Arc<Snapshot> = Arc::new(Snapshot {
            registry: reconciliation.registry,
            today,
            stale_sources,
            degraded: reconciliation.degraded,
            refreshed_at: Some(OffsetDateTime::now_utc()),
        });
        *self.snapshot.write().await = Arc::clone(&snapshot);

        info!(
            employees = snapshot.registry.employee_count(),
            tasks = snapshot.registry.task_count(),
            stale = snapshot.stale_sources.len(),
            "Published snapshot"
        );
        Ok(snapshot)
    }

    /// Sends a command to the mutation host, then refreshes everything.
    ///
    /// Waits for a running refresh or write to finish first, so the
    /// returned snapshot is always fetched after this command landed.
    ///
    /// # Errors
    ///
    /// Returns an error if `cancel` fires while waiting, the host rejects
    /// the command, or the follow-up fetch fails. In the last case the
    /// write has already been applied.
    pub async fn execute(
        &self,
        command: &Command,
        cancel: &CancellationToken,
    ) -> Result<Arc<Snapshot>, SyncError> {
        let _cycle: MutexGuard<'_, ()> = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(SyncError::Cancelled),
            guard = self.cycle.lock() => guard,
        };

        self.host.execute(command).await?;
        info!(
            action = command.action_name(),
            letter_number = command.letter_number(),
            "Mutation applied; refreshing"
        );
        self.reload(cancel).await
    }
}
