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

//! Render command - table conversion to documentation formats

use super::{load_table, write_output};
use crate::error::CliError;
use clap::ValueEnum;
use std::path::Path;
use tabletest_core::{render_markdown, Table};
use tabletest_yaml::{to_yaml, ToYamlConfig};
use tracing::debug;

/// Output formats for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Markdown table
    Markdown,
    /// YAML document with headers, rows and column roles
    Yaml,
    /// JSON dump of the parsed table
    Json,
}

/// Render a table file in another format.
///
/// Writes to `output` when given, otherwise to stdout. `title` is used by
/// the YAML format only.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, or the output cannot
/// be written.
pub fn render(
    file: &Path,
    encoding: Option<&str>,
    format: RenderFormat,
    output: Option<&Path>,
    title: Option<&str>,
) -> Result<(), CliError> {
    let table = load_table(file, encoding)?;
    let content = render_table(&table, format, title)?;
    debug!(format = ?format, bytes = content.len(), "rendered table");
    write_output(&content, output)
}

pub(crate) fn render_table(
    table: &Table,
    format: RenderFormat,
    title: Option<&str>,
) -> Result<String, CliError> {
    match format {
        RenderFormat::Markdown => Ok(render_markdown(table)),
        RenderFormat::Yaml => {
            let mut config = ToYamlConfig::default();
            if let Some(title) = title {
                config = config.with_title(title);
            }
            Ok(to_yaml(table, &config)?)
        }
        RenderFormat::Json => {
            let mut json = serde_json::to_string_pretty(table)?;
            json.push('\n');
            Ok(json)
        }
    }
}
