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

//! Error test fixtures.
//!
//! Invalid tables, invalid cells and values that fail to convert, each
//! with the error kind they must produce.

use tabletest_core::{BuiltinKind, ConversionErrorKind, ParseErrorKind, TargetType};

/// (name, cell_text, target, expected_error_kind)
pub type ConversionFailureSample = (&'static str, &'static str, TargetType, ConversionErrorKind);

/// Invalid table texts.
///
/// Each tuple contains (name, table_text, expected_error_kind).
pub fn invalid_table_samples() -> Vec<(&'static str, &'static str, ParseErrorKind)> {
    vec![
        ("empty", "", ParseErrorKind::MissingHeader),
        ("whitespace_only", "   \n\t\n  ", ParseErrorKind::MissingHeader),
        ("comments_only", "// a | b\n// 1 | 2", ParseErrorKind::MissingHeader),
        ("row_too_wide", "a | b\n1 | 2 | 3", ParseErrorKind::RowTooWide),
        ("unterminated_quote", "a\n'open", ParseErrorKind::UnterminatedQuote),
        ("unclosed_list", "a | b\n[1, 2 | 3", ParseErrorKind::UnbalancedBracket),
        ("stray_closer", "a\n1]", ParseErrorKind::UnbalancedBracket),
        ("mismatched_closer", "a\n[1, 2}", ParseErrorKind::UnbalancedBracket),
        ("blank_header", "a |  | c\n1 | 2 | 3", ParseErrorKind::InvalidHeader),
        ("list_header", "[a] | b\n1 | 2", ParseErrorKind::InvalidHeader),
    ]
}

/// Invalid cell literals.
///
/// Each tuple contains (name, cell_text, expected_error_kind).
pub fn invalid_cell_samples() -> Vec<(&'static str, &'static str, ParseErrorKind)> {
    vec![
        ("unterminated_single", "'abc", ParseErrorKind::UnterminatedQuote),
        ("unterminated_double", "\"abc", ParseErrorKind::UnterminatedQuote),
        ("unterminated_in_list", "[a, 'b]", ParseErrorKind::UnterminatedQuote),
        ("unclosed_list", "[1, 2", ParseErrorKind::UnbalancedBracket),
        ("unclosed_set", "{1, 2", ParseErrorKind::UnbalancedBracket),
        ("stray_closer", "a]", ParseErrorKind::UnbalancedBracket),
        ("text_after_list", "[a] b", ParseErrorKind::UnbalancedBracket),
        ("crossed_brackets", "[{]}", ParseErrorKind::UnbalancedBracket),
    ]
}

/// Cells that parse but cannot convert to the given target.
///
/// Each tuple contains (name, cell_text, target, expected_error_kind).
#[rustfmt::skip]
pub fn conversion_failure_samples() -> Vec<ConversionFailureSample> {
    let int = || TargetType::builtin(BuiltinKind::I32);
    vec![
        ("null_for_int", "", int(), ConversionErrorKind::NullForPrimitive),
        ("null_list_element", "[1, , 3]", TargetType::list(int()), ConversionErrorKind::NullForPrimitive),
        ("not_a_number", "abc", int(), ConversionErrorKind::NoApplicableConversion),
        ("overflow_u8", "256", TargetType::builtin(BuiltinKind::U8), ConversionErrorKind::NoApplicableConversion),
        ("negative_unsigned", "-1", TargetType::builtin(BuiltinKind::U32), ConversionErrorKind::NoApplicableConversion),
        ("not_a_bool", "yes", TargetType::builtin(BuiltinKind::Bool), ConversionErrorKind::NoApplicableConversion),
        ("two_chars", "ab", TargetType::builtin(BuiltinKind::Char), ConversionErrorKind::NoApplicableConversion),
        ("bad_date", "2023-02-29", TargetType::builtin(BuiltinKind::Date), ConversionErrorKind::NoApplicableConversion),
        ("empty_value_set", "{}", int(), ConversionErrorKind::NoApplicableConversion),
        ("list_into_int", "[1, 2]", int(), ConversionErrorKind::TypeMismatch),
        ("map_into_string", "[a: 1]", TargetType::string(), ConversionErrorKind::TypeMismatch),
        ("scalar_into_list", "1", TargetType::list(int()), ConversionErrorKind::TypeMismatch),
        ("list_into_map", "[1, 2]", TargetType::map(TargetType::string(), int()), ConversionErrorKind::TypeMismatch),
        ("unknown_user_type", "x", TargetType::named("Unregistered"), ConversionErrorKind::NoApplicableConversion),
    ]
}
