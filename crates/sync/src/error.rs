// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use situgas::{CoreError, SourceKind};
use situgas_domain::DomainError;

/// Failure of a single fetch or mutation call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The request could not be sent or its body could not be read.
    #[error("Request for {target} failed: {reason}")]
    Transport { target: String, reason: String },
    /// The remote answered with a non-success status.
    #[error("{target} answered with HTTP {status}")]
    Status { target: String, status: u16 },
    /// The mutation host reported a failure in its reply.
    #[error("Mutation host rejected '{action}': {message}")]
    Rejected { action: String, message: String },
    /// The call did not finish within the configured timeout.
    #[error("Timed out after {millis} ms waiting for {target}")]
    Timeout { target: String, millis: u128 },
    /// A table the workbook does not hold.
    #[error("Table '{0}' is not available")]
    Unavailable(SourceKind),
    /// The command could not be applied to the stored tables.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Failure of a session store operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Another refresh is running.
    #[error("A refresh is already in progress")]
    RefreshInProgress,
    /// The caller cancelled the refresh.
    #[error("Refresh cancelled")]
    Cancelled,
    /// No source could be fetched; the previous snapshot stays published.
    #[error("Every source failed: {}", failures.join("; "))]
    AllSourcesFailed { failures: Vec<String> },
    /// The mutation host did not accept the write.
    #[error("Mutation failed: {0}")]
    Mutation(#[from] SourceError),
    /// Configuration could not be turned into a schema.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// The office date could not be determined.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
