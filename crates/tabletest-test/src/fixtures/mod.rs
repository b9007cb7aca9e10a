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

//! Canonical test fixtures.
//!
//! - **tables**: valid table texts
//! - **values**: cell literals with their parsed values
//! - **errors**: invalid tables, invalid cells and failing conversions
//! - **builders**: fluent builder for table texts

pub mod builders;
pub mod errors;
mod tables;
mod values;

pub use tables::*;
pub use values::*;

use crate::FixtureList;

/// Returns all valid table fixtures for iteration.
///
/// Useful for running the same test across all fixtures.
pub fn all() -> FixtureList {
    vec![
        ("sum", sum_table),
        ("scenario", scenario_table),
        ("nested_map", nested_map_table),
        ("comment", comment_table),
        ("comment_stripped", comment_table_stripped),
        ("value_set", value_set_table),
        ("collections", collections_table),
        ("quoted", quoted_table),
        ("short_rows", short_rows_table),
        ("header_only", header_only_table),
        ("builtin_kinds", builtin_kinds_table),
        ("dates", dates_table),
    ]
}
