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

//! Parsed table structures.

use crate::error::{ParseError, ParseResult};
use crate::value::Value;

/// A single cell: its trimmed source text and parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    raw: String,
    value: Value,
}

impl Cell {
    pub(crate) fn new(raw: impl Into<String>, value: Value) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    /// A padding cell for a row shorter than the header.
    pub(crate) fn blank() -> Self {
        Self::new(String::new(), Value::Null)
    }

    /// The trimmed source text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// One data row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    line: usize,
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(line: usize, cells: Vec<Cell>) -> Self {
        Self { line, cells }
    }

    /// Source line of the row (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Cells in column order; always as many as the table has columns.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn value(&self, column: usize) -> Option<&Value> {
        self.cells.get(column).map(Cell::value)
    }
}

/// A parsed table: column names plus rows of values.
///
/// Every row has exactly as many cells as there are headers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    headers: Vec<String>,
    header_line: usize,
    rows: Vec<Row>,
    scenario_column: Option<usize>,
}

impl Table {
    pub(crate) fn new(
        headers: Vec<String>,
        header_line: usize,
        rows: Vec<Row>,
        scenario_column: Option<usize>,
    ) -> Self {
        Self {
            headers,
            header_line,
            rows,
            scenario_column,
        }
    }

    /// Column names in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    /// Source line of the header (1-based).
    pub fn header_line(&self) -> usize {
        self.header_line
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The column holding scenario labels, if any.
    pub fn scenario_column(&self) -> Option<usize> {
        self.scenario_column
    }

    /// Designate a column as the scenario label column.
    pub fn with_scenario_column(mut self, column: usize) -> ParseResult<Self> {
        if column >= self.headers.len() {
            return Err(ParseError::invalid_header(
                format!(
                    "scenario column {} out of range for {} columns",
                    column,
                    self.headers.len()
                ),
                self.header_line,
            ));
        }
        self.scenario_column = Some(column);
        Ok(self)
    }

    /// Remove any scenario column designation.
    pub fn without_scenario_column(mut self) -> Self {
        self.scenario_column = None;
        self
    }
}
