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

//! Markdown rendering of parsed tables.

use crate::table::Table;
use std::fmt::Write;

/// Render a table as a Markdown pipe table.
///
/// Cells are written as table literals, so a rendered cell parses back to
/// the same value once the `\|` escapes are removed.
///
/// ```
/// use tabletest_core::{parse_table, render_markdown};
///
/// let table = parse_table("a | b\n1 | [x, y]").unwrap();
/// assert_eq!(render_markdown(&table), "| a | b |\n| --- | --- |\n| 1 | [x, y] |\n");
/// ```
pub fn render_markdown(table: &Table) -> String {
    let mut out = String::new();
    let headers: Vec<String> = table.headers().iter().map(|h| escape(h)).collect();
    write_line(&mut out, &headers);
    let separator = vec!["---".to_string(); table.column_count()];
    write_line(&mut out, &separator);
    for row in table.rows() {
        let cells: Vec<String> = row
            .cells()
            .iter()
            .map(|cell| escape(&cell.value().to_string()))
            .collect();
        write_line(&mut out, &cells);
    }
    out
}

fn write_line(out: &mut String, cells: &[String]) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "| {} |", cells.join(" | "));
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
