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

//! Shared test fixtures and utilities for TableTest crates.
//!
//! This crate provides canonical table texts, cell samples, error fixtures,
//! a domain type with conversion functions, and counting utilities, so the
//! parser, the renderers and the CLI are tested against the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use tabletest_core::parse_table;
//! use tabletest_test::fixtures;
//!
//! // Use pre-built fixtures
//! let table = parse_table(fixtures::sum_table()).unwrap();
//! assert_eq!(table.row_count(), 2);
//!
//! // Build custom tables
//! use tabletest_test::fixtures::builders::TableBuilder;
//!
//! let text = TableBuilder::new(["a", "b"]).row(["1", "2"]).build();
//!
//! // Test error handling
//! use tabletest_test::fixtures::errors;
//!
//! for (name, invalid, kind) in errors::invalid_table_samples() {
//!     assert_eq!(parse_table(invalid).unwrap_err().kind, kind, "{}", name);
//! }
//!
//! // Convert through conversion functions
//! use tabletest_core::convert_as;
//! use tabletest_test::domain::{date_registry, Date};
//!
//! let registry = date_registry();
//! let cell = tabletest_core::Value::scalar("2024-02-29");
//! let date: Date = convert_as(&cell, registry.scope()).unwrap();
//! assert_eq!(date, Date::new(2024, 2, 29));
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tabletest_core::{parse_table, render_markdown};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> &'static str)>;

/// Returns all fixtures as (name, markdown) pairs.
pub fn fixtures_as_markdown() -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| {
            let markdown = match parse_table(fixture_fn()) {
                Ok(table) => render_markdown(&table),
                Err(e) => format!("<!-- Error parsing: {} -->", e),
            };
            (name, markdown)
        })
        .collect()
}

/// Write all fixtures to a directory as `<name>.table` files.
///
/// Returns the written paths in fixture order.
pub fn write_fixtures_to_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (name, fixture_fn) in fixtures::all() {
        let path = dir.join(format!("{}.table", name));
        fs::write(&path, fixture_fn())?;
        written.push(path);
    }
    Ok(written)
}

/// Canonical test fixtures.
pub mod fixtures;

/// Domain types and conversion scopes.
pub mod domain;

/// Fixture counting utilities.
pub mod counts;

pub use fixtures::*;

pub use counts::{count_collections, count_nulls, count_values, max_depth};
