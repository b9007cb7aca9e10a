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

//! CLI command implementations

mod inspect;
mod render;
mod validate;

pub use inspect::inspect;
pub use render::{render, RenderFormat};
pub use validate::validate;

use crate::error::CliError;
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tabletest_core::{parse_table, Table};
use tracing::debug;

/// Default maximum file size (64 MB).
/// Can be overridden via the TABLETEST_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("TABLETEST_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Look up a WHATWG encoding label, defaulting to UTF-8.
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding, CliError> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CliError::UnknownEncoding(label.to_string())),
    }
}

/// Read a table file and decode it to text.
///
/// A byte order mark overrides the requested encoding. Malformed bytes are
/// an error rather than being replaced.
///
/// # Errors
///
/// Returns `Err` if:
/// - The encoding label is unknown
/// - The file cannot be read or exceeds the size limit
/// - The bytes are not valid in the encoding
pub fn read_table_text(path: &Path, encoding: Option<&str>) -> Result<String, CliError> {
    let encoding = resolve_encoding(encoding)?;

    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let bytes = fs::read(path).map_err(|e| CliError::io_error(path, e))?;
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(CliError::Decode {
            path: path.to_path_buf(),
            encoding: used.name(),
        });
    }
    debug!(
        path = %path.display(),
        encoding = used.name(),
        bytes = bytes.len(),
        "read table file"
    );
    Ok(text.into_owned())
}

/// Read, decode and parse a table file.
pub fn load_table(path: &Path, encoding: Option<&str>) -> Result<Table, CliError> {
    let text = read_table_text(path, encoding)?;
    parse_table(&text).map_err(|e| CliError::parse(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
