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

//! Fixture counting utilities.
//!
//! Functions for counting cells and values in parsed tables for verification.

use tabletest_core::{Table, Value};

/// Count cells holding `Null`.
pub fn count_nulls(table: &Table) -> usize {
    cells(table).filter(|v| v.is_null()).count()
}

/// Count cells holding a list, set or map.
pub fn count_collections(table: &Table) -> usize {
    cells(table)
        .filter(|v| matches!(v, Value::List(_) | Value::Set(_) | Value::Map(_)))
        .count()
}

/// Count every value in the table, collection elements and map keys included.
pub fn count_values(table: &Table) -> usize {
    cells(table).map(count_in_value).sum()
}

fn count_in_value(value: &Value) -> usize {
    1 + match value {
        Value::Null | Value::Scalar(_) => 0,
        Value::List(items) => items.iter().map(count_in_value).sum(),
        Value::Set(items) => items.iter().map(count_in_value).sum(),
        Value::Map(entries) => entries
            .iter()
            .map(|(k, v)| count_in_value(k) + count_in_value(v))
            .sum(),
    }
}

/// Nesting depth of a value: 0 for scalars and null, 1 for a flat collection.
pub fn max_depth(value: &Value) -> usize {
    match value {
        Value::Null | Value::Scalar(_) => 0,
        Value::List(items) => 1 + items.iter().map(max_depth).max().unwrap_or(0),
        Value::Set(items) => 1 + items.iter().map(max_depth).max().unwrap_or(0),
        Value::Map(entries) => {
            1 + entries
                .iter()
                .map(|(k, v)| max_depth(k).max(max_depth(v)))
                .max()
                .unwrap_or(0)
        }
    }
}

fn cells(table: &Table) -> impl Iterator<Item = &Value> {
    table
        .rows()
        .iter()
        .flat_map(|row| row.cells().iter().map(|cell| cell.value()))
}
