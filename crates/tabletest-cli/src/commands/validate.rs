// Dweve TableTest - Table-driven test data
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validate command - table file syntax validation

use super::load_table;
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;

/// Validate a table file.
///
/// Reads the file in the given encoding (UTF-8 when `None`) and parses it.
/// Every cell is parsed, so a single malformed cell fails the whole file.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or decoded, or does not parse.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tabletest_cli::commands::validate;
///
/// # fn main() -> Result<(), tabletest_cli::error::CliError> {
/// validate(Path::new("sums.table"), None, false)?;
/// validate(Path::new("legacy.table"), Some("windows-1252"), false)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints `OK <file> (<n> columns, <m> rows)` to stdout, or `FAILED <file>`
/// before returning the error. Nothing is printed when `quiet` is set.
pub fn validate(file: &Path, encoding: Option<&str>, quiet: bool) -> Result<(), CliError> {
    match load_table(file, encoding) {
        Ok(table) => {
            if !quiet {
                println!(
                    "{} {} ({} columns, {} rows)",
                    "OK".green().bold(),
                    file.display(),
                    table.column_count(),
                    table.row_count()
                );
            }
            Ok(())
        }
        Err(e) => {
            if !quiet {
                println!("{} {}", "FAILED".red().bold(), file.display());
            }
            Err(e)
        }
    }
}
