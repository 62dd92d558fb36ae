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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod session;


use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use situgas_sync::{
    AppsScriptHost, MemoryWorkbook, MutationHost, SessionStore, SheetsClient, SyncConfig,
    TableSource,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::handlers::{
    handle_calendar, handle_check_conflicts, handle_create_assignment, handle_dashboard,
    handle_delete_report, handle_discipline, handle_get_task, handle_list_employees,
    handle_list_unassigned, handle_list_units, handle_recap, handle_refresh,
    handle_reports_board, handle_status, handle_submit_report, handle_verify_report,
    handle_whoami,
};

/// SITUGAS Server - HTTP server for staff assignments and reports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, env = "SITUGAS_PORT", default_value_t = 3000)]
    port: u16,

    /// Spreadsheet holding the roster, discipline and report sheets
    #[arg(long, env = "SITUGAS_STAFF_SPREADSHEET")]
    staff_spreadsheet: Option<String>,

    /// Spreadsheet holding the assignment schedule
    #[arg(long, env = "SITUGAS_SCHEDULE_SPREADSHEET")]
    schedule_spreadsheet: Option<String>,

    /// Roster sheet name
    #[arg(long, env = "SITUGAS_ROSTER_SHEET")]
    roster_sheet: Option<String>,

    /// Schedule sheet name
    #[arg(long, env = "SITUGAS_SCHEDULE_SHEET")]
    schedule_sheet: Option<String>,

    /// Discipline sheet name
    #[arg(long, env = "SITUGAS_DISCIPLINE_SHEET")]
    discipline_sheet: Option<String>,

    /// Report sheet name
    #[arg(long, env = "SITUGAS_REPORTS_SHEET")]
    reports_sheet: Option<String>,

    /// Schedule column preset: `compact` or `named`
    #[arg(long, env = "SITUGAS_SCHEDULE_LAYOUT")]
    schedule_layout: Option<String>,

    /// Web app URL receiving writes. Without it writes stay in memory.
    #[arg(long, env = "SITUGAS_APPS_SCRIPT_URL")]
    apps_script_url: Option<String>,

    /// Office timezone used for "today"
    #[arg(long, env = "SITUGAS_TIMEZONE")]
    timezone: Option<String>,

    /// Per-fetch timeout in milliseconds
    #[arg(long, env = "SITUGAS_FETCH_TIMEOUT_MS")]
    fetch_timeout_ms: Option<u64>,
}

impl Args {
    /// Applies the given options over the default configuration.
    fn sync_config(&self) -> SyncConfig {
        let mut config: SyncConfig = SyncConfig::default();

        if let Some(id) = &self.staff_spreadsheet {
            config.roster.spreadsheet_id.clone_from(id);
            config.discipline.spreadsheet_id.clone_from(id);
            config.reports.spreadsheet_id.clone_from(id);
        }
        if let Some(id) = &self.schedule_spreadsheet {
            config.schedule.spreadsheet_id.clone_from(id);
        }
        for (name, location) in [
            (&self.roster_sheet, &mut config.roster),
            (&self.schedule_sheet, &mut config.schedule),
            (&self.discipline_sheet, &mut config.discipline),
            (&self.reports_sheet, &mut config.reports),
        ] {
            if let Some(name) = name {
                location.sheet_name.clone_from(name);
            }
        }
        if let Some(layout) = &self.schedule_layout {
            config.schedule_layout.clone_from(layout);
        }
        if let Some(timezone) = &self.timezone {
            config.timezone.clone_from(timezone);
        }
        if let Some(timeout) = self.fetch_timeout_ms {
            config.fetch_timeout_ms = timeout;
        }
        config.apps_script_url.clone_from(&self.apps_script_url);
        config
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The session store holding the published snapshot.
    pub store: Arc<SessionStore>,
    /// Cancelled on shutdown; refreshes run on child tokens.
    pub shutdown: CancellationToken,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/status", get(handle_status))
        .route("/refresh", post(handle_refresh))
        .route("/whoami", get(handle_whoami))
        .route("/dashboard", get(handle_dashboard))
        .route("/employees", get(handle_list_employees))
        .route("/employees/unassigned", get(handle_list_unassigned))
        .route("/units", get(handle_list_units))
        .route("/recap", get(handle_recap))
        .route("/reports", get(handle_reports_board))
        .route("/discipline", get(handle_discipline))
        .route("/calendar", get(handle_calendar))
        .route("/conflicts", post(handle_check_conflicts))
        .route("/assignments", post(handle_create_assignment))
        .route("/tasks/{letter_number}", get(handle_get_task))
        .route(
            "/tasks/{letter_number}/report",
            post(handle_submit_report).delete(handle_delete_report),
        )
        .route(
            "/tasks/{letter_number}/report/verify",
            post(handle_verify_report),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing SITUGAS Server");

    let config: SyncConfig = args.sync_config();
    let sheets: Arc<SheetsClient> = Arc::new(SheetsClient::new(&config)?);

    let source: Arc<dyn TableSource>;
    let host: Arc<dyn MutationHost>;
    if let Some(url) = &config.apps_script_url {
        info!("Sending writes to {}", url);
        source = sheets;
        host = Arc::new(AppsScriptHost::new(url, config.fetch_timeout())?);
    } else {
        info!("No web app configured; writes stay in an in-memory workbook");
        let workbook: Arc<MemoryWorkbook> =
            Arc::new(MemoryWorkbook::seed_from(sheets.as_ref(), config.schema()?).await);
        source = workbook.clone();
        host = workbook;
    }

    let shutdown: CancellationToken = CancellationToken::new();
    let store: Arc<SessionStore> = Arc::new(SessionStore::new(source, host, &config)?);
    if let Err(e) = store.refresh(&shutdown).await {
        warn!(error = %e, "Initial refresh failed; serving an empty snapshot");
    }

    let app_state: AppState = AppState {
        store,
        shutdown: shutdown.clone(),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutting down");
            }
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
