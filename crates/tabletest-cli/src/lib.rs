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

//! TableTest CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Parse a table file and report its size or the first error
//! - **inspect**: List the cases of a table with labels and value trees
//! - **render**: Convert a table to Markdown, YAML or JSON
//!
//! Every command takes `--encoding LABEL` to read files that are not UTF-8.
//! The global `-v`/`-q` flags set the log level; `RUST_LOG` overrides both.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use tabletest_cli::commands::{render, validate, RenderFormat};
//!
//! # fn main() -> Result<(), tabletest_cli::error::CliError> {
//! validate(Path::new("sums.table"), None, false)?;
//! render(
//!     Path::new("sums.table"),
//!     None,
//!     RenderFormat::Yaml,
//!     Some(Path::new("sums.yaml")),
//!     Some("Sums"),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
