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

//! Table to YAML conversion

use crate::error::YamlError;
use serde_yaml::{Mapping, Value as YamlValue};
use std::fmt;
use tabletest_core::{Table, Value};
use tracing::debug;

/// Configuration for YAML output
#[derive(Debug, Clone)]
pub struct ToYamlConfig {
    /// Document title, written first when present
    pub title: Option<String>,
    /// Free-form description, written after the title
    pub description: Option<String>,
    /// Header suffix marking expectation columns (default: `?`)
    pub expectation_suffix: Option<String>,
}

impl Default for ToYamlConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            expectation_suffix: Some("?".to_string()),
        }
    }
}

impl ToYamlConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Treat no column as an expectation column.
    pub fn without_expectations(mut self) -> Self {
        self.expectation_suffix = None;
        self
    }
}

/// The part a column plays in a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// An ordinary input column.
    Normal,
    /// The column holding scenario labels.
    Scenario,
    /// A column holding expected results.
    Expectation,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Scenario => write!(f, "scenario"),
            Self::Expectation => write!(f, "expectation"),
        }
    }
}

/// Role of every column of `table`, in column order.
///
/// The scenario column wins over an expectation suffix.
pub fn column_roles(table: &Table, config: &ToYamlConfig) -> Vec<ColumnRole> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            if table.scenario_column() == Some(i) {
                ColumnRole::Scenario
            } else if config
                .expectation_suffix
                .as_deref()
                .map_or(false, |suffix| !suffix.is_empty() && header.ends_with(suffix))
            {
                ColumnRole::Expectation
            } else {
                ColumnRole::Normal
            }
        })
        .collect()
}

/// Convert Table to YAML string
pub fn to_yaml(table: &Table, config: &ToYamlConfig) -> Result<String, YamlError> {
    let value = to_yaml_value(table, config);
    let yaml = serde_yaml::to_string(&value)?;
    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        bytes = yaml.len(),
        "rendered table as YAML"
    );
    Ok(yaml)
}

/// Convert Table to serde_yaml::Value
pub fn to_yaml_value(table: &Table, config: &ToYamlConfig) -> YamlValue {
    let roles = column_roles(table, config);
    let mut root = Mapping::new();

    if let Some(title) = &config.title {
        root.insert(key("title"), YamlValue::String(title.clone()));
    }
    if let Some(description) = &config.description {
        root.insert(key("description"), YamlValue::String(description.clone()));
    }

    let headers = table
        .headers()
        .iter()
        .zip(&roles)
        .map(|(header, role)| cell_entry(YamlValue::String(header.clone()), *role))
        .collect();
    root.insert(key("headers"), YamlValue::Sequence(headers));

    let mut rows = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        let cells = row
            .cells()
            .iter()
            .zip(&roles)
            .map(|(cell, role)| cell_entry(value_to_yaml(cell.value()), *role))
            .collect();
        rows.push(YamlValue::Sequence(cells));
    }
    root.insert(key("rows"), YamlValue::Sequence(rows));

    YamlValue::Mapping(root)
}

fn key(name: &str) -> YamlValue {
    YamlValue::String(name.to_string())
}

fn cell_entry(value: YamlValue, role: ColumnRole) -> YamlValue {
    let mut entry = Mapping::new();
    entry.insert(key("value"), value);
    if role != ColumnRole::Normal {
        entry.insert(key("role"), YamlValue::String(role.to_string()));
    }
    YamlValue::Mapping(entry)
}

/// Scalars stay strings; a table never infers numbers or booleans.
pub(crate) fn value_to_yaml(value: &Value) -> YamlValue {
    match value {
        Value::Null => YamlValue::Null,
        Value::Scalar(text) => YamlValue::String(text.clone()),
        Value::List(items) => YamlValue::Sequence(items.iter().map(value_to_yaml).collect()),
        Value::Set(set) => YamlValue::Sequence(set.iter().map(value_to_yaml).collect()),
        Value::Map(map) => {
            let mut mapping = Mapping::new();
            for (k, v) in map.iter() {
                mapping.insert(value_to_yaml(k), value_to_yaml(v));
            }
            YamlValue::Mapping(mapping)
        }
    }
}
