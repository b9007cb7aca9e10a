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

//! CLI command definitions and argument parsing.

use crate::commands::{self, RenderFormat};
use crate::error::CliError;
use crate::logging::Verbosity;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// TableTest - table-driven test data toolkit
///
/// Validates, inspects and renders the pipe-separated tables used by
/// table-driven tests.
///
/// # Examples
///
/// ```bash
/// # Check that a table parses
/// tabletest validate sums.table
///
/// # List the cases with their value trees
/// tabletest inspect sums.table --detail
///
/// # Render as YAML for a documentation site
/// tabletest render sums.table --format yaml --output sums.yaml
/// ```
#[derive(Parser, Debug)]
#[command(name = "tabletest")]
#[command(author, version, about = "TableTest - table-driven test data toolkit", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a table file
    ///
    /// Parses every header and cell and reports the table size, or the first
    /// error with its line and column.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text encoding of the file (WHATWG label, default UTF-8)
        #[arg(short, long, value_name = "LABEL")]
        encoding: Option<String>,
    },

    /// List the cases of a table file
    ///
    /// Shows each case's position, source line and scenario label.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text encoding of the file (WHATWG label, default UTF-8)
        #[arg(short, long, value_name = "LABEL")]
        encoding: Option<String>,

        /// Show every cell's value tree
        #[arg(short, long)]
        detail: bool,
    },

    /// Render a table file as Markdown, YAML or JSON
    Render {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: RenderFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document title (YAML only)
        #[arg(short, long)]
        title: Option<String>,

        /// Text encoding of the file (WHATWG label, default UTF-8)
        #[arg(short, long, value_name = "LABEL")]
        encoding: Option<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read, decoded or parsed, or the
    /// output cannot be written.
    pub fn execute(self, verbosity: Verbosity) -> Result<(), CliError> {
        match self {
            Commands::Validate { file, encoding } => {
                commands::validate(&file, encoding.as_deref(), verbosity.is_quiet())
            }
            Commands::Inspect {
                file,
                encoding,
                detail,
            } => commands::inspect(&file, encoding.as_deref(), detail),
            Commands::Render {
                file,
                format,
                output,
                title,
                encoding,
            } => commands::render(
                &file,
                encoding.as_deref(),
                format,
                output.as_deref(),
                title.as_deref(),
            ),
        }
    }
}
