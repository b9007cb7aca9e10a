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

//! Builder for table texts.

use tabletest_core::{parse_table, ParseResult, Table, Value};

/// Builds table text line by line.
///
/// # Examples
///
/// ```
/// use tabletest_test::fixtures::builders::TableBuilder;
///
/// let text = TableBuilder::new(["a", "b"])
///     .row(["1", "2"])
///     .comment("skipped")
///     .row(["3", "4"])
///     .build();
///
/// assert_eq!(text, "a | b\n1 | 2\n// skipped\n3 | 4\n");
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    lines: Vec<String>,
}

impl TableBuilder {
    /// Starts a table with the given header names.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: vec![join(headers)],
        }
    }

    /// Starts a table whose first column is `Scenario`.
    pub fn with_scenario<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = std::iter::once("Scenario".to_string())
            .chain(headers.into_iter().map(|h| h.as_ref().to_string()))
            .collect();
        Self::new(names)
    }

    /// Adds a data row of raw cell texts.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines.push(join(cells));
        self
    }

    /// Adds a data row written from values.
    pub fn value_row<'a, I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let cells: Vec<String> = values.into_iter().map(Value::to_string).collect();
        self.lines.push(join(cells));
        self
    }

    /// Adds a full-line comment.
    pub fn comment(mut self, text: &str) -> Self {
        self.lines.push(format!("// {}", text));
        self
    }

    /// Adds an empty line.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Builds the table text.
    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Builds and parses the table.
    pub fn parse(self) -> ParseResult<Table> {
        parse_table(&self.build())
    }
}

fn join<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
