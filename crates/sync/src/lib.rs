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

//! Data-source boundary and session state.
//!
//! Tables are read through [`TableSource`] and every write goes through
//! [`MutationHost`]. The [`SessionStore`] owns the published registry and
//! rebuilds it from all four tables after each successful write.

mod apps_script;
mod config;
mod error;
mod memory;
mod sheets;
mod source;
mod store;

#[cfg(test)]
mod tests;

pub use apps_script::AppsScriptHost;
pub use config::{SheetLocation, SyncConfig};
pub use error::{SourceError, SyncError};
pub use memory::MemoryWorkbook;
pub use sheets::SheetsClient;
pub use source::{MutationHost, TableSource};
pub use store::{SessionStore, Snapshot};
