// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use situgas::{Command, SourceKind};

use crate::error::SourceError;

/// Provides the raw CSV text of each source table.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetches one table as CSV text, header row included.
    async fn fetch_table(&self, kind: SourceKind) -> Result<String, SourceError>;
}

/// Applies writes on the backing store.
#[async_trait]
pub trait MutationHost: Send + Sync {
    /// Executes a validated command.
    ///
    /// Nothing is read back; callers refresh afterwards.
    async fn execute(&self, command: &Command) -> Result<(), SourceError>;
}
