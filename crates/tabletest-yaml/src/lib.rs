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

//! TableTest YAML Rendering
//!
//! Renders a parsed [`Table`] as a YAML document for documentation and
//! reporting tools. The document is a mapping with:
//!
//! - `title` and `description`, when configured
//! - `headers`: one `{value, role?}` entry per column
//! - `rows`: one list of `{value, role?}` entries per data row
//!
//! Scalars are always written as YAML strings, blank cells as `null`, lists
//! and sets as sequences and maps as mappings. A `role` is present only for
//! the scenario column and for expectation columns (headers ending in `?`
//! by default).
//!
//! # Examples
//!
//! ```rust
//! use tabletest_core::parse_table;
//! use tabletest_yaml::{to_yaml, ToYamlConfig};
//!
//! let table = parse_table("Scenario | a | sum?\nfirst | 1 | 1\n").unwrap();
//! let config = ToYamlConfig::default().with_title("Sums");
//! let yaml = to_yaml(&table, &config).unwrap();
//!
//! assert!(yaml.starts_with("title: Sums"));
//! assert!(yaml.contains("role: scenario"));
//! assert!(yaml.contains("role: expectation"));
//! ```
//!
//! Tables can also be rendered straight from their text:
//!
//! ```rust
//! use tabletest_yaml::{render_text, ToYamlConfig};
//!
//! let yaml = render_text("a\n[1, 2]\n", &ToYamlConfig::default()).unwrap();
//! assert!(yaml.contains("- '1'"));
//! assert!(render_text("", &ToYamlConfig::default()).is_err());
//! ```

pub mod error;
mod to_yaml;

pub use error::YamlError;
pub use to_yaml::{column_roles, to_yaml, to_yaml_value, ColumnRole, ToYamlConfig};

use tabletest_core::{parse_table, Table};

/// Convert a table to a YAML string with default configuration
pub fn table_to_yaml(table: &Table) -> Result<String, YamlError> {
    to_yaml(table, &ToYamlConfig::default())
}

/// Parse table text and render it as YAML
pub fn render_text(text: &str, config: &ToYamlConfig) -> Result<String, YamlError> {
    let table = parse_table(text)?;
    to_yaml(&table, config)
}
