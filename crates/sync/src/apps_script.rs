// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Web app mutation host.
//!
//! Each command is posted as `{ "action": ..., "payload": ... }`. The web
//! app answers with a JSON object; `"success": false` marks a failure and
//! may carry a `message`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use situgas::Command;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::source::MutationHost;

#[derive(Debug, Deserialize)]
struct HostReply {
    success: Option<bool>,
    message: Option<String>,
}

/// Sends commands to a spreadsheet-bound web app.
#[derive(Debug, Clone)]
pub struct AppsScriptHost {
    client: Client,
    url: String,
}

impl AppsScriptHost {
    /// Creates a host posting to the given web app URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client: Client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport {
                target: String::from("mutation host"),
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

/// Interprets the web app's reply body.
///
/// Bodies that are not a JSON object count as accepted, since the status
/// was already checked.
fn check_reply(action: &str, body: &str) -> Result<(), SourceError> {
    match serde_json::from_str::<HostReply>(body) {
        Ok(HostReply {
            success: Some(false),
            message,
        }) => Err(SourceError::Rejected {
            action: action.to_string(),
            message: message.unwrap_or_else(|| String::from("no message")),
        }),
        Ok(_) => Ok(()),
        Err(e) => {
            debug!(action, error = %e, "Mutation reply is not JSON");
            Ok(())
        }
    }
}

#[async_trait]
impl MutationHost for AppsScriptHost {
    async fn execute(&self, command: &Command) -> Result<(), SourceError> {
        let action: &str = command.action_name();
        let transport = |e: reqwest::Error| SourceError::Transport {
            target: action.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "action": action, "payload": command.payload() }))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                target: action.to_string(),
                status: status.as_u16(),
            });
        }

        let body: String = response.text().await.map_err(transport)?;
        check_reply(action, &body)?;

        info!(
            action,
            letter_number = command.letter_number(),
            "Mutation accepted by host"
        );
        Ok(())
    }
}
