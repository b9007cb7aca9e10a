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

//! Table text parser.
//!
//! The first significant line is the header. Every following significant
//! line is a data row. Blank lines and lines whose first non-blank
//! characters are `//` are skipped, but still count for line numbers.
//!
//! # Security Limits
//!
//! - `max_columns`: Maximum header width (default: 1k)
//! - `max_rows`: Maximum number of data rows (default: 1M)
//! - `max_cell_length`: Maximum cell length in bytes (default: 1MB)
//! - `max_nesting_depth`: Maximum collection nesting in one cell (default: 64)

use crate::error::{ParseError, ParseResult};
use crate::lex::{parse_value_with_limits, split_top_level};
use crate::limits::Limits;
use crate::table::{Cell, Row, Table};
use crate::value::Value;
use std::str::FromStr;
use tracing::{debug, trace};

/// Default name of the column holding scenario labels.
pub const DEFAULT_SCENARIO_MARKER: &str = "Scenario";

/// Options for parsing table text.
///
/// # Examples
///
/// ```
/// use tabletest_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .max_columns(8)
///     .scenario_marker("Case")
///     .build();
/// assert_eq!(opts.limits.max_columns, 8);
/// assert_eq!(opts.scenario_marker.as_deref(), Some("Case"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
    /// Header name that marks the scenario column; `None` disables detection.
    pub scenario_marker: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            scenario_marker: Some(DEFAULT_SCENARIO_MARKER.to_string()),
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    scenario_marker: Option<String>,
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        let defaults = ParseOptions::default();
        Self {
            limits: defaults.limits,
            scenario_marker: defaults.scenario_marker,
        }
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum collection nesting inside one cell.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.limits.max_nesting_depth = depth;
        self
    }

    pub fn max_columns(mut self, columns: usize) -> Self {
        self.limits.max_columns = columns;
        self
    }

    pub fn max_rows(mut self, rows: usize) -> Self {
        self.limits.max_rows = rows;
        self
    }

    pub fn max_cell_length(mut self, length: usize) -> Self {
        self.limits.max_cell_length = length;
        self
    }

    /// Use a different header name to detect the scenario column.
    pub fn scenario_marker(mut self, marker: impl Into<String>) -> Self {
        self.scenario_marker = Some(marker.into());
        self
    }

    /// Never treat any column as the scenario column.
    pub fn no_scenario_marker(mut self) -> Self {
        self.scenario_marker = None;
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            scenario_marker: self.scenario_marker,
        }
    }
}

/// Parse table text with default options.
///
/// # Examples
///
/// ```
/// use tabletest_core::{parse_table, Value};
///
/// let table = parse_table("a | b | sum\n1 | 2 | 3\n// skipped\n5 | 6 | 11\n").unwrap();
/// assert_eq!(table.headers(), ["a", "b", "sum"]);
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.rows()[1].line(), 4);
/// assert_eq!(table.rows()[0].value(2), Some(&Value::scalar("3")));
/// ```
pub fn parse_table(text: &str) -> ParseResult<Table> {
    parse_table_with_options(text, &ParseOptions::default())
}

/// Parse table text.
pub fn parse_table_with_options(text: &str, options: &ParseOptions) -> ParseResult<Table> {
    let limits = &options.limits;
    let mut headers: Option<(usize, Vec<String>)> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in text.split('\n').enumerate() {
        let line_num = idx + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);
        let significant = line.trim();
        if significant.is_empty() || significant.starts_with("//") {
            trace!(line = line_num, "skipping blank or comment line");
            skipped += 1;
            continue;
        }

        let cells = parse_cells(line, line_num, limits)?;
        match &headers {
            None => {
                let names = header_names(&cells, line_num)?;
                if names.len() > limits.max_columns {
                    return Err(ParseError::limit_exceeded(
                        format!(
                            "{} columns exceed limit {}",
                            names.len(),
                            limits.max_columns
                        ),
                        line_num,
                    ));
                }
                headers = Some((line_num, names));
            }
            Some((_, names)) => {
                if rows.len() >= limits.max_rows {
                    return Err(ParseError::limit_exceeded(
                        format!("more than {} data rows", limits.max_rows),
                        line_num,
                    ));
                }
                rows.push(build_row(cells, names.len(), line_num)?);
            }
        }
    }

    // Points at the last line scanned, or line 1 for empty text.
    let (header_line, names) = headers.ok_or_else(|| {
        ParseError::missing_header("table text has no header line", text.lines().count().max(1))
    })?;
    let scenario_column = options
        .scenario_marker
        .as_deref()
        .and_then(|marker| names.iter().position(|name| name == marker));

    debug!(
        columns = names.len(),
        rows = rows.len(),
        skipped,
        scenario_column = ?scenario_column,
        "parsed table"
    );
    Ok(Table::new(names, header_line, rows, scenario_column))
}

impl FromStr for Table {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_table(s)
    }
}

/// A parsed cell plus its 0-based character offset in the line.
struct LineCell {
    cell: Cell,
    offset: usize,
}

fn parse_cells(line: &str, line_num: usize, limits: &Limits) -> ParseResult<Vec<LineCell>> {
    let segments = split_top_level(line, '|').map_err(|e| e.relocate(line_num, 0))?;
    let mut cells = Vec::with_capacity(segments.len());
    for segment in segments {
        let raw = segment.text.trim();
        let lead = segment.text.chars().count() - segment.text.trim_start().chars().count();
        let offset = segment.offset + lead;
        let value =
            parse_value_with_limits(raw, limits).map_err(|e| e.relocate(line_num, offset))?;
        cells.push(LineCell {
            cell: Cell::new(raw, value),
            offset,
        });
    }
    Ok(cells)
}

fn header_names(cells: &[LineCell], line_num: usize) -> ParseResult<Vec<String>> {
    cells
        .iter()
        .enumerate()
        .map(|(i, lc)| match lc.cell.value() {
            Value::Scalar(name) if !name.trim().is_empty() => Ok(name.clone()),
            Value::Scalar(_) | Value::Null => Err(ParseError::invalid_header(
                format!("column {} has a blank name", i + 1),
                line_num,
            )
            .with_column(lc.offset + 1)),
            other => Err(ParseError::invalid_header(
                format!("column {} name must be plain text, found '{}'", i + 1, other),
                line_num,
            )
            .with_column(lc.offset + 1)),
        })
        .collect()
}

fn build_row(cells: Vec<LineCell>, width: usize, line_num: usize) -> ParseResult<Row> {
    if cells.len() > width {
        let extra = &cells[width];
        return Err(ParseError::row_too_wide(
            format!("row has {} cells but the header has {}", cells.len(), width),
            line_num,
        )
        .with_column(extra.offset + 1));
    }
    let mut row: Vec<Cell> = cells.into_iter().map(|lc| lc.cell).collect();
    row.resize_with(width, Cell::blank);
    Ok(Row::new(line_num, row))
}
