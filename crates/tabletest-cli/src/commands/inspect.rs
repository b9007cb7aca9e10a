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

//! Inspect command - table structure visualization

use super::load_table;
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;
use tabletest_core::{iterate_cases, Case, Table, Value};

/// Inspect a table file and list its cases.
///
/// Prints the columns, the scenario column if any, and one line per case
/// with its position, source line and display name. With `detail`, every
/// cell follows as `column = literal (shape)`, nested values indented below.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or does not parse.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tabletest_cli::commands::inspect;
///
/// # fn main() -> Result<(), tabletest_cli::error::CliError> {
/// inspect(Path::new("sums.table"), None, true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &Path, encoding: Option<&str>, detail: bool) -> Result<(), CliError> {
    let table = load_table(file, encoding)?;
    print!("{}", describe(&table, detail));
    Ok(())
}

/// The inspect report as printed.
pub(crate) fn describe(table: &Table, detail: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Table".bold().underline()));
    out.push_str(&format!(
        "{}  {}\n",
        "Columns:".cyan(),
        table.headers().join(", ")
    ));
    if let Some(name) = table.scenario_column().and_then(|i| table.header(i)) {
        out.push_str(&format!("{}  {}\n", "Scenario column:".cyan(), name));
    }
    out.push_str(&format!("{}  {}\n", "Rows:".cyan(), table.row_count()));

    if table.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Cases:".cyan()));
    for case in iterate_cases(table) {
        describe_case(&mut out, &case, detail);
    }
    out
}

fn describe_case(out: &mut String, case: &Case<'_>, detail: bool) {
    let name = match case.scenario() {
        Some(label) => label.green().to_string(),
        None => case.display_name(),
    };
    out.push_str(&format!(
        "  [{}] line {}: {}\n",
        case.position(),
        case.line(),
        name
    ));
    if !detail {
        return;
    }
    for (column, value) in case.values() {
        out.push_str(&format!(
            "      {} = {} ({})\n",
            column.yellow(),
            value,
            shape_name(value)
        ));
        describe_children(out, value, 4);
    }
}

fn describe_children(out: &mut String, value: &Value, indent: usize) {
    let prefix = "  ".repeat(indent);
    match value {
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                out.push_str(&format!("{}[{}] {} ({})\n", prefix, i, item, shape_name(item)));
                describe_children(out, item, indent + 1);
            }
        }
        Value::Set(set) => {
            for item in set.iter() {
                out.push_str(&format!("{}- {} ({})\n", prefix, item, shape_name(item)));
                describe_children(out, item, indent + 1);
            }
        }
        Value::Map(map) => {
            for (k, v) in map.iter() {
                out.push_str(&format!("{}{}: {} ({})\n", prefix, k, v, shape_name(v)));
                describe_children(out, v, indent + 1);
            }
        }
        Value::Null | Value::Scalar(_) => {}
    }
}

fn shape_name(value: &Value) -> String {
    value
        .shape()
        .map_or_else(|| "null".to_string(), |shape| shape.to_string())
}
