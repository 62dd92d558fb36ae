// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delimited text to rows of cells, and back.
//!
//! Parsing never fails. A quote opens a quoted cell only at the start of a
//! cell, after any spaces or tabs; an unterminated quote swallows the rest
//! of the document into that cell. Rows whose cells are all empty are dropped, which covers blank and
//! whitespace-only lines.

use crate::error::CoreError;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::iter::Peekable;
use std::str::Chars;
use tracing::warn;

const fn is_padding(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

const fn is_separator(c: char) -> bool {
    matches!(c, ',' | '\n' | '\r')
}

fn copy_quoted(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '"' {
            if chars.peek() == Some(&'"') {
                out.push('"');
                chars.next();
            } else {
                return;
            }
        }
    }
}

/// Drops the spaces and tabs around quoted cells so the reader sees the
/// opening quote at the start of the cell. Padding of unquoted cells is
/// left to the reader's trimming.
fn strip_quote_padding(text: &str) -> String {
    let mut out: String = String::with_capacity(text.len());
    let mut chars: Peekable<Chars<'_>> = text.chars().peekable();
    let mut at_cell_start: bool = true;

    while let Some(c) = chars.next() {
        if at_cell_start {
            if is_padding(c) {
                continue;
            }
            at_cell_start = false;
            if c == '"' {
                out.push(c);
                copy_quoted(&mut chars, &mut out);

                let mut padding: String = String::new();
                while let Some(&next) = chars.peek().filter(|next| is_padding(**next)) {
                    padding.push(next);
                    chars.next();
                }
                if chars.peek().is_some_and(|next| !is_separator(*next)) {
                    out.push_str(&padding);
                }
                continue;
            }
        }
        if is_separator(c) {
            at_cell_start = true;
        }
        out.push(c);
    }
    out
}

/// Parses delimited text into rows of trimmed cells.
///
/// No header handling is done here; callers skip the first row themselves.
#[must_use]
pub fn parse_table(text: &str) -> Vec<Vec<String>> {
    let text: String = strip_quote_padding(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record: StringRecord = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(row = idx, error = %err, "Skipping unreadable row");
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        rows.push(record.iter().map(String::from).collect());
    }
    rows
}

/// Writes rows back to delimited text, quoting cells where needed.
///
/// # Errors
///
/// Returns an error if the writer fails to flush.
pub fn render_table(rows: &[Vec<String>]) -> Result<String, CoreError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|err| CoreError::TableEncoding(err.to_string()))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| CoreError::TableEncoding(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| CoreError::TableEncoding(err.to_string()))
}
