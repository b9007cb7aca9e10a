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

//! Lexical analysis for table text.
//!
//! # Module Structure
//!
//! - [`scan`] - Bracket and quote aware splitting
//! - [`cell`] - The cell value parser
//!
//! # Examples
//!
//! ```
//! use tabletest_core::lex::{parse_value, split_top_level};
//! use tabletest_core::Value;
//!
//! let cells = split_top_level("a | [1, 2]", '|').unwrap();
//! assert_eq!(cells.len(), 2);
//!
//! let value = parse_value("[1, 2]").unwrap();
//! assert_eq!(value, Value::list(vec![Value::scalar("1"), Value::scalar("2")]));
//! ```

pub mod cell;
pub mod scan;

pub use cell::{parse_value, parse_value_with_limits};
pub use scan::{closing_index, find_top_level, split_top_level, Segment};
