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

//! Turning table rows into test cases.

use crate::table::Table;
use crate::value::Value;
use std::iter::FusedIterator;
use tracing::trace;

/// One data row, viewed as a named set of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case<'a> {
    index: usize,
    line: usize,
    scenario: Option<&'a str>,
    values: Vec<(&'a str, &'a Value)>,
}

impl<'a> Case<'a> {
    fn from_row(table: &'a Table, index: usize) -> Option<Self> {
        let row = table.row(index)?;
        let scenario = table
            .scenario_column()
            .and_then(|column| row.value(column))
            .and_then(Value::as_str)
            .filter(|label| !label.trim().is_empty());
        let values = table
            .headers()
            .iter()
            .map(String::as_str)
            .zip(row.cells().iter().map(|cell| cell.value()))
            .collect();
        Some(Self {
            index,
            line: row.line(),
            scenario,
            values,
        })
    }

    /// Position of the row among data rows (1-based).
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Source line of the row (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// The row's scenario label, if the table has a scenario column and the
    /// cell holds non-blank text.
    pub fn scenario(&self) -> Option<&'a str> {
        self.scenario
    }

    /// Column name and value pairs, in header order.
    pub fn values(&self) -> &[(&'a str, &'a Value)] {
        &self.values
    }

    /// Value of the first column with the given name.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| *value)
    }

    /// Value at the given column index.
    pub fn value(&self, column: usize) -> Option<&'a Value> {
        self.values.get(column).map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A display name for the case: the scenario label, or the row values.
    pub fn display_name(&self) -> String {
        match self.scenario {
            Some(label) => label.to_string(),
            None => {
                let cells: Vec<String> = self
                    .values
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect();
                format!("[{}] {}", self.position(), cells.join(", "))
            }
        }
    }
}

/// Iterator over the cases of a table, in row order.
///
/// Restartable: clone it, or call [`iterate_cases`] again, to go over the
/// rows a second time.
#[derive(Debug, Clone)]
pub struct Cases<'a> {
    table: &'a Table,
    next: usize,
}

impl<'a> Iterator for Cases<'a> {
    type Item = Case<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let case = Case::from_row(self.table, self.next)?;
        self.next += 1;
        trace!(position = case.position(), line = case.line, scenario = ?case.scenario, "case");
        Some(case)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.row_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cases<'_> {}

impl FusedIterator for Cases<'_> {}

/// Iterate the rows of a table as cases.
///
/// # Examples
///
/// ```
/// use tabletest_core::{iterate_cases, parse_table, Value};
///
/// let table = parse_table("Scenario | x\nfirst | 1\n | 2").unwrap();
/// let cases: Vec<_> = iterate_cases(&table).collect();
/// assert_eq!(cases.len(), 2);
/// assert_eq!(cases[0].scenario(), Some("first"));
/// assert_eq!(cases[1].scenario(), None);
/// assert_eq!(cases[1].get("x"), Some(&Value::scalar("2")));
/// ```
pub fn iterate_cases(table: &Table) -> Cases<'_> {
    Cases { table, next: 0 }
}

impl<'a> IntoIterator for &'a Table {
    type Item = Case<'a>;
    type IntoIter = Cases<'a>;

    fn into_iter(self) -> Self::IntoIter {
        iterate_cases(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    // ==================== Iteration tests ====================

    #[test]
    fn test_empty_table_yields_nothing() {
        let table = parse_table("a | b").unwrap();
        assert_eq!(iterate_cases(&table).count(), 0);
    }

    #[test]
    fn test_cases_in_row_order() {
        let table = parse_table("a\n1\n2\n3").unwrap();
        let positions: Vec<_> = iterate_cases(&table).map(|c| c.position()).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_exact_size() {
        let table = parse_table("a\n1\n2").unwrap();
        let mut cases = iterate_cases(&table);
        assert_eq!(cases.len(), 2);
        cases.next();
        assert_eq!(cases.len(), 1);
        cases.next();
        assert_eq!(cases.next(), None);
        assert_eq!(cases.next(), None);
    }

    #[test]
    fn test_restartable() {
        let table = parse_table("a\n1\n2").unwrap();
        let first: Vec<_> = iterate_cases(&table).collect();
        let second: Vec<_> = iterate_cases(&table).collect();
        assert_eq!(first, second);

        let mut cases = iterate_cases(&table);
        cases.next();
        let resumed = cases.clone();
        assert_eq!(cases.count(), resumed.count());
    }

    #[test]
    fn test_into_iterator() {
        let table = parse_table("a\n1").unwrap();
        let mut n = 0;
        for case in &table {
            assert_eq!(case.len(), 1);
            n += 1;
        }
        assert_eq!(n, 1);
    }

    // ==================== Case content tests ====================

    #[test]
    fn test_values_follow_header_order() {
        let table = parse_table("b | a\n2 | 1").unwrap();
        let case = iterate_cases(&table).next().unwrap();
        let names: Vec<_> = case.values().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(case.get("a"), Some(&Value::scalar("1")));
        assert_eq!(case.value(0), Some(&Value::scalar("2")));
        assert_eq!(case.get("c"), None);
    }

    #[test]
    fn test_case_line() {
        let table = parse_table("a\n\n1").unwrap();
        let case = iterate_cases(&table).next().unwrap();
        assert_eq!(case.line(), 3);
    }

    #[test]
    fn test_scenario_requires_non_blank_scalar() {
        let table = parse_table("Scenario | x\n[a] | 1\n'  ' | 2\nok | 3").unwrap();
        let labels: Vec<_> = iterate_cases(&table).map(|c| c.scenario()).collect();
        assert_eq!(labels, vec![None, None, Some("ok")]);
    }

    #[test]
    fn test_no_scenario_column() {
        let table = parse_table("x\nlabel").unwrap();
        assert_eq!(iterate_cases(&table).next().unwrap().scenario(), None);
    }

    #[test]
    fn test_display_name() {
        let table = parse_table("Scenario | x\nnamed | 1\n | 2").unwrap();
        let cases: Vec<_> = iterate_cases(&table).collect();
        assert_eq!(cases[0].display_name(), "named");
        assert_eq!(cases[1].display_name(), "[2] Scenario=, x=2");
    }
}
