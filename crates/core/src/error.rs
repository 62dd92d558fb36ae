// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use situgas_domain::DomainError;

/// Errors raised by the reconciliation engine and local command application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The schedule layout name is not one of the known presets.
    #[error("Unknown schedule layout '{0}' (expected 'compact' or 'named')")]
    UnknownLayout(String),
    /// A table could not be written back to delimited text.
    #[error("Failed to encode table: {0}")]
    TableEncoding(String),
}
