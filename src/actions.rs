// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! GitHub Actions workflow command emission.
//!
//! The badge host runs inside a workflow, so failures are surfaced through
//! the runner's `::error::` command in addition to the process exit status.
//! Only the binary boundary calls into this module; library code stays pure.

use std::io::{self, Write};

/// Writes an `::error::` workflow command for the provided message.
///
/// Output goes to stdout because the Actions runner only scans that stream
/// for commands. Write failures are ignored: annotation is best effort and
/// must never mask the error being reported.
pub fn issue_error(message: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "::error::{}", escape_data(message));
}

/// Escapes message data per the Actions runner command grammar.
///
/// `%`, carriage return, and newline would otherwise terminate or corrupt
/// the command.
fn escape_data(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '%' => escaped.push_str("%25"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other)
        }
    }
    escaped
}
