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

//! Resource limits for table parsing and value conversion.

/// Configurable limits for parsing and conversion.
///
/// These bound the resources consumed by hostile or accidental input
/// such as deeply nested literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum bracket nesting inside one cell (default: 64).
    pub max_nesting_depth: usize,
    /// Maximum number of columns (default: 1k).
    pub max_columns: usize,
    /// Maximum number of data rows (default: 1M).
    pub max_rows: usize,
    /// Maximum length of a single cell in bytes (default: 1MB).
    pub max_cell_length: usize,
    /// Maximum recursion depth of the conversion resolver (default: 64).
    pub max_conversion_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nesting_depth: 64,
            max_columns: 1_000,
            max_rows: 1_000_000,
            max_cell_length: 1024 * 1024, // 1MB
            max_conversion_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_nesting_depth: usize::MAX,
            max_columns: usize::MAX,
            max_rows: usize::MAX,
            max_cell_length: usize::MAX,
            max_conversion_depth: usize::MAX,
        }
    }
}
