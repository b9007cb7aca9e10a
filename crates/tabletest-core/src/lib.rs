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

//! Table literal parser and type-directed value conversion for
//! table-driven tests.
//!
//! A table is a block of `|`-separated text: a header line naming the
//! columns, then one data row per test case.
//!
//! ```text
//! Scenario    | a | b | sum
//! small       | 1 | 2 | 3
//! with a list | [1, 2] | {3} | [total: 6]
//! ```
//!
//! The crate turns that text into cases and each cell into a typed value:
//!
//! - [`parse_table`]: text to [`Table`], every cell parsed to a [`Value`]
//! - [`iterate_cases`]: a table's rows as [`Case`]s, in row order
//! - [`convert`]: a [`Value`] to a [`TypedValue`] for a [`TargetType`]
//! - [`bind_case`]: a case's cells to declared [`Parameter`]s
//!
//! Conversion uses built-in parsers for common scalar kinds and falls back
//! to user conversion functions held in a [`ConverterRegistry`].
//!
//! # Lexical Analysis
//!
//! The [`lex`] module holds the cell grammar and the depth-tracking scanner
//! shared by cell, element and key/value splitting.
//!
//! # Examples
//!
//! ```
//! use tabletest_core::{iterate_cases, parse_table, convert_as, ConverterRegistry};
//!
//! let table = parse_table("a | b | sum\n1 | 2 | 3\n4 | 5 | 9").unwrap();
//! let registry = ConverterRegistry::empty();
//! for case in iterate_cases(&table) {
//!     let a: i64 = convert_as(case.get("a").unwrap(), registry.scope()).unwrap();
//!     let b: i64 = convert_as(case.get("b").unwrap(), registry.scope()).unwrap();
//!     let sum: i64 = convert_as(case.get("sum").unwrap(), registry.scope()).unwrap();
//!     assert_eq!(a + b, sum);
//! }
//! ```

mod binding;
mod case;
pub mod convert;
mod error;
pub mod lex;
mod limits;
mod parser;
mod render;
mod table;
mod value;

pub use binding::{bind_case, Arguments, Parameter};
pub use case::{iterate_cases, Case, Cases};
pub use convert::{
    convert, convert_as, BuiltinKind, ConversionFn, ConversionScope, ConvertResult,
    ConverterRegistry, CustomType, EnumType, EnumValue, ExplicitConverter, ScalarType,
    ScopeLevel, ScopePosition, TableType, TargetType, TypedList, TypedMap, TypedSet, TypedValue,
};
pub use error::{
    BindError, BoxError, CellLocation, ConversionError, ConversionErrorKind, ParseError,
    ParseErrorKind, ParseResult, TableTestError,
};
pub use lex::parse_value;
pub use limits::Limits;
pub use parser::{
    parse_table, parse_table_with_options, ParseOptions, ParseOptionsBuilder,
    DEFAULT_SCENARIO_MARKER,
};
pub use render::render_markdown;
pub use table::{Cell, Row, Table};
pub use value::{Shape, Value, ValueMap, ValueSet};
