// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Google Sheets CSV export reader.

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Url};
use situgas::SourceKind;
use tracing::debug;

use crate::config::SyncConfig;
use crate::error::SourceError;
use crate::source::TableSource;

const SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Reads tables through the spreadsheet visualization CSV export.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    config: SyncConfig,
}

impl SheetsClient {
    /// Creates a client for the sheets named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SyncConfig) -> Result<Self, SourceError> {
        let client: Client = Client::builder()
            .timeout(config.fetch_timeout())
            .build()
            .map_err(|e| SourceError::Transport {
                target: String::from("sheets client"),
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: String::from(SHEETS_BASE_URL),
            config: config.clone(),
        })
    }

    /// Points the client at another host serving the same export paths.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The export URL of a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured spreadsheet id does not form a
    /// valid URL.
    pub fn table_url(&self, kind: SourceKind) -> Result<Url, SourceError> {
        let location = self.config.location(kind);
        Url::parse_with_params(
            &format!("{}/{}/gviz/tq", self.base_url, location.spreadsheet_id),
            &[("tqx", "out:csv"), ("sheet", location.sheet_name.as_str())],
        )
        .map_err(|e| SourceError::Transport {
            target: kind.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl TableSource for SheetsClient {
    async fn fetch_table(&self, kind: SourceKind) -> Result<String, SourceError> {
        let url: Url = self.table_url(kind)?;
        debug!(source = %kind, %url, "Fetching table");

        let transport = |e: reqwest::Error| SourceError::Transport {
            target: kind.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                target: kind.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}
