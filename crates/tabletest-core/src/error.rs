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

//! Error types for table parsing, value conversion and parameter binding.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The kind of error that occurred while parsing table text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A quoted region was never closed.
    UnterminatedQuote,
    /// A bracket or brace was never closed, or closed without being opened.
    UnbalancedBracket,
    /// A data row has more cells than the header has columns.
    RowTooWide,
    /// The text contains no header line.
    MissingHeader,
    /// A header cell is blank or not a plain name.
    InvalidHeader,
    /// A configured limit was exceeded.
    LimitExceeded,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedQuote => write!(f, "UnterminatedQuote"),
            Self::UnbalancedBracket => write!(f, "UnbalancedBracket"),
            Self::RowTooWide => write!(f, "RowTooWide"),
            Self::MissingHeader => write!(f, "MissingHeader"),
            Self::InvalidHeader => write!(f, "InvalidHeader"),
            Self::LimitExceeded => write!(f, "LimitExceeded"),
        }
    }
}

/// An error that invalidates a whole table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}{}: {message}", column_suffix(.column))]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Source line (1-based, 0 when parsing a lone cell).
    pub line: usize,
    /// Character offset within the line (1-based, optional).
    pub column: Option<usize>,
    /// Additional context (e.g., "in column 'sum'").
    pub context: Option<String>,
}

fn column_suffix(column: &Option<usize>) -> String {
    match column {
        Some(c) => format!(", column {}", c),
        None => String::new(),
    }
}

impl ParseError {
    /// Create a new error.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column: None,
            context: None,
        }
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Place an error raised for a lone cell at its row and cell offset.
    pub(crate) fn relocate(mut self, line: usize, cell_offset: usize) -> Self {
        self.line = line;
        self.column = Some(cell_offset + self.column.unwrap_or(1));
        self
    }

    pub fn unterminated_quote(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::UnterminatedQuote, message, line)
    }

    pub fn unbalanced_bracket(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::UnbalancedBracket, message, line)
    }

    pub fn row_too_wide(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::RowTooWide, message, line)
    }

    pub fn missing_header(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::MissingHeader, message, line)
    }

    pub fn invalid_header(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::InvalidHeader, message, line)
    }

    pub fn limit_exceeded(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::LimitExceeded, message, line)
    }
}

/// The kind of error that occurred while converting a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionErrorKind {
    /// A null value was given to a non-nullable target.
    NullForPrimitive,
    /// The value's shape cannot become the target kind.
    TypeMismatch,
    /// Neither a built-in nor a conversion function could convert the value.
    NoApplicableConversion,
    /// More than one conversion function matched at the same scope level.
    MultipleCandidates,
    /// A conversion function ran and failed.
    ConversionFunctionFailure,
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullForPrimitive => write!(f, "NullForPrimitive"),
            Self::TypeMismatch => write!(f, "TypeMismatch"),
            Self::NoApplicableConversion => write!(f, "NoApplicableConversion"),
            Self::MultipleCandidates => write!(f, "MultipleCandidates"),
            Self::ConversionFunctionFailure => write!(f, "ConversionFunctionFailure"),
        }
    }
}

/// Where in a table a failing cell sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLocation {
    /// Data row position (1-based).
    pub row: usize,
    /// Source line of the row (1-based).
    pub line: usize,
    /// Header name of the cell's column.
    pub column: String,
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} (line {}), column '{}'",
            self.row, self.line, self.column
        )
    }
}

/// Boxed error raised by user-supplied conversion logic.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A failed conversion of one value.
#[derive(Debug, Clone, Error)]
#[error("{kind} converting to {target}{}: {message}", position_suffix(.path, .location))]
pub struct ConversionError {
    /// The kind of error.
    pub kind: ConversionErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Display name of the requested target type.
    pub target: String,
    /// Index/key chain into nested collections, outermost first.
    pub path: Vec<String>,
    /// Cell position, filled in once the value is bound to a parameter.
    pub location: Option<CellLocation>,
    /// Conversion functions involved in the failure.
    pub candidates: Vec<String>,
    /// The error raised by a conversion function.
    #[source]
    pub source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl ConversionError {
    /// Create a new error.
    pub fn new(
        kind: ConversionErrorKind,
        message: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            target: target.into(),
            path: Vec::new(),
            location: None,
            candidates: Vec::new(),
            source: None,
        }
    }

    pub fn null_for_primitive(target: impl Into<String>) -> Self {
        let target = target.into();
        let message = format!("null is not allowed for non-nullable {}", target);
        Self::new(ConversionErrorKind::NullForPrimitive, message, target)
    }

    pub fn type_mismatch(message: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ConversionErrorKind::TypeMismatch, message, target)
    }

    pub fn no_applicable_conversion(message: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ConversionErrorKind::NoApplicableConversion, message, target)
    }

    pub fn multiple_candidates(
        scope: &str,
        candidates: Vec<String>,
        target: impl Into<String>,
    ) -> Self {
        let target = target.into();
        let message = format!(
            "{} conversion functions in '{}' can produce {}: {}",
            candidates.len(),
            scope,
            target,
            candidates.join(", ")
        );
        let mut err = Self::new(ConversionErrorKind::MultipleCandidates, message, target);
        err.candidates = candidates;
        err
    }

    pub fn function_failure(function: &str, cause: BoxError, target: impl Into<String>) -> Self {
        let message = format!("conversion function '{}' failed: {}", function, cause);
        let mut err = Self::new(ConversionErrorKind::ConversionFunctionFailure, message, target);
        err.candidates = vec![function.to_string()];
        err.source = Some(Arc::from(cause));
        err
    }

    /// Prefix a collection index or key to the error path.
    pub fn within(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Attach the cell position, keeping an existing one.
    pub fn at(mut self, location: CellLocation) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }

}

fn position_suffix(path: &[String], location: &Option<CellLocation>) -> String {
    let mut out = String::new();
    if !path.is_empty() {
        out.push_str(" at ");
        out.push_str(&path.concat());
    }
    if let Some(location) = location {
        out.push_str(&format!(" in {}", location));
    }
    out
}

/// An error raised while binding a case to declared parameters.
#[derive(Debug, Clone, Error)]
pub enum BindError {
    /// Fewer parameters than the table needs.
    #[error("table has {columns} columns but only {parameters} parameters are declared")]
    NotEnoughParameters { columns: usize, parameters: usize },

    /// More than one parameter claims to be the scenario label.
    #[error("only one parameter may be marked as scenario, found {0}")]
    MultipleScenarioParameters(usize),

    /// A cell failed to convert.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Umbrella error for callers that parse, iterate and bind in one pass.
#[derive(Debug, Clone, Error)]
pub enum TableTestError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ParseError tests ====================

    #[test]
    fn test_parse_error_display_with_column() {
        let err = ParseError::unbalanced_bracket("missing ']'", 3).with_column(7);
        assert_eq!(
            err.to_string(),
            "UnbalancedBracket at line 3, column 7: missing ']'"
        );
    }

    #[test]
    fn test_parse_error_display_without_column() {
        let err = ParseError::row_too_wide("3 cells for 2 columns", 4);
        assert_eq!(err.to_string(), "RowTooWide at line 4: 3 cells for 2 columns");
    }

    #[test]
    fn test_parse_error_with_context() {
        let err = ParseError::unterminated_quote("open quote", 2).with_context("in column 'a'");
        assert_eq!(err.context, Some("in column 'a'".to_string()));
    }

    #[test]
    fn test_parse_error_relocate() {
        let err = ParseError::unterminated_quote("open quote", 0)
            .with_column(3)
            .relocate(5, 10);
        assert_eq!(err.line, 5);
        assert_eq!(err.column, Some(12));
    }

    #[test]
    fn test_missing_header_display() {
        let err = ParseError::missing_header("empty table", 3);
        assert_eq!(err.kind, ParseErrorKind::MissingHeader);
        assert_eq!(err.to_string(), "MissingHeader at line 3: empty table");
    }

    // ==================== ConversionError tests ====================

    #[test]
    fn test_conversion_error_display_plain() {
        let err = ConversionError::null_for_primitive("i32");
        assert_eq!(
            err.to_string(),
            "NullForPrimitive converting to i32: null is not allowed for non-nullable i32"
        );
    }

    #[test]
    fn test_conversion_error_path_and_location() {
        let err = ConversionError::no_applicable_conversion("not a number", "i32")
            .within("[1]")
            .within("[\"a\"]")
            .at(CellLocation {
                row: 2,
                line: 3,
                column: "values".to_string(),
            });
        assert_eq!(err.path, vec!["[\"a\"]".to_string(), "[1]".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("at [\"a\"][1]"));
        assert!(msg.contains("row 2 (line 3), column 'values'"));
    }

    #[test]
    fn test_conversion_error_keeps_first_location() {
        let first = CellLocation {
            row: 1,
            line: 2,
            column: "a".to_string(),
        };
        let second = CellLocation {
            row: 9,
            line: 9,
            column: "b".to_string(),
        };
        let err = ConversionError::type_mismatch("list into scalar", "i32")
            .at(first.clone())
            .at(second);
        assert_eq!(err.location, Some(first));
    }

    #[test]
    fn test_multiple_candidates_lists_names() {
        let err = ConversionError::multiple_candidates(
            "Fixtures",
            vec!["a".to_string(), "b".to_string()],
            "Date",
        );
        assert_eq!(err.kind, ConversionErrorKind::MultipleCandidates);
        assert_eq!(err.candidates.len(), 2);
        assert!(err.message.contains("a, b"));
    }

    #[test]
    fn test_function_failure_keeps_source() {
        let cause: BoxError = "bad date".into();
        let err = ConversionError::function_failure("parse_date", cause, "Date");
        assert_eq!(err.kind, ConversionErrorKind::ConversionFunctionFailure);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.message.contains("bad date"));
    }

    // ==================== BindError tests ====================

    #[test]
    fn test_bind_error_not_enough_parameters() {
        let err = BindError::NotEnoughParameters {
            columns: 4,
            parameters: 2,
        };
        assert_eq!(
            err.to_string(),
            "table has 4 columns but only 2 parameters are declared"
        );
    }

    #[test]
    fn test_bind_error_from_conversion() {
        let err: BindError = ConversionError::null_for_primitive("bool").into();
        assert!(matches!(err, BindError::Conversion(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(ParseError::missing_header("x", 1));
        accepts_error(ConversionError::null_for_primitive("x"));
        accepts_error(TableTestError::from(ParseError::missing_header("x", 1)));
    }
}
