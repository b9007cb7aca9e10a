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

//! Cell value parsing.
//!
//! A cell is one of:
//!
//! - blank, giving [`Value::Null`]
//! - `'quoted'` or `"quoted"` text, taken literally without escapes
//! - `[a, b]` a list, `[k: v]` a map, `[]` / `[:]` the empty forms
//! - `{a, b}` a set
//! - anything else, taken as trimmed plain text
//!
//! Elements nest without limit other than [`Limits::max_nesting_depth`].

use super::scan::{closing_index, find_top_level, split_top_level, DepthScanner};
use crate::error::{ParseError, ParseResult};
use crate::limits::Limits;
use crate::value::Value;

/// Parse one cell's text into a [`Value`] using default limits.
///
/// # Examples
///
/// ```
/// use tabletest_core::lex::parse_value;
/// use tabletest_core::Value;
///
/// assert_eq!(parse_value("  ").unwrap(), Value::Null);
/// assert_eq!(parse_value("'a|b'").unwrap(), Value::scalar("a|b"));
/// assert!(parse_value("[1, 2").is_err());
/// ```
pub fn parse_value(text: &str) -> ParseResult<Value> {
    parse_value_with_limits(text, &Limits::default())
}

/// Parse one cell's text into a [`Value`].
///
/// Errors carry line 0 and a 1-based column within `text`.
pub fn parse_value_with_limits(text: &str, limits: &Limits) -> ParseResult<Value> {
    if text.len() > limits.max_cell_length {
        return Err(ParseError::limit_exceeded(
            format!(
                "cell length {} exceeds limit {}",
                text.len(),
                limits.max_cell_length
            ),
            0,
        ));
    }
    CellParser { limits }.parse(text, 0, 0)
}

struct CellParser<'l> {
    limits: &'l Limits,
}

/// Shift an error column from segment-relative to cell-relative.
fn shift(mut err: ParseError, offset: usize) -> ParseError {
    err.column = err.column.map(|c| c + offset);
    err
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl CellParser<'_> {
    /// `offset` is the 0-based character position of `text` within the cell.
    fn parse(&self, text: &str, offset: usize, depth: usize) -> ParseResult<Value> {
        let lead = char_len(text) - char_len(text.trim_start());
        let offset = offset + lead;
        let trimmed = text.trim();

        match trimmed.chars().next() {
            None => Ok(Value::Null),
            Some(q @ ('\'' | '"')) => self.parse_quoted(trimmed, q, offset),
            Some('[' | '{') => self.parse_collection(trimmed, offset, depth),
            Some(_) => {
                self.check_balanced(trimmed, offset)?;
                Ok(Value::Scalar(trimmed.to_string()))
            }
        }
    }

    fn parse_quoted(&self, text: &str, quote: char, offset: usize) -> ParseResult<Value> {
        let rest = &text[quote.len_utf8()..];
        match rest.find(quote) {
            None => Err(ParseError::unterminated_quote(
                format!("quote {} is never closed", quote),
                0,
            )
            .with_column(offset + 1)),
            Some(end) if end + quote.len_utf8() == rest.len() => {
                Ok(Value::Scalar(rest[..end].to_string()))
            }
            Some(_) => {
                // Text continues after the closing quote, so the quotes are literal.
                self.check_balanced(text, offset)?;
                Ok(Value::Scalar(text.to_string()))
            }
        }
    }

    fn parse_collection(&self, text: &str, offset: usize, depth: usize) -> ParseResult<Value> {
        if depth + 1 > self.limits.max_nesting_depth {
            return Err(ParseError::limit_exceeded(
                format!(
                    "nesting depth exceeds limit {}",
                    self.limits.max_nesting_depth
                ),
                0,
            )
            .with_column(offset + 1));
        }

        let close = closing_index(text).map_err(|e| shift(e, offset))?;
        let closer = &text[close..];
        if closer.chars().count() != 1 {
            let column = offset + char_len(&text[..close]) + 2;
            return Err(ParseError::unbalanced_bracket(
                format!("unexpected text after closing '{}'", &closer[..1]),
                0,
            )
            .with_column(column));
        }

        let inner = &text[1..close];
        let inner_offset = offset + 1;
        if text.starts_with('{') {
            if inner.trim().is_empty() {
                return Ok(Value::set(Vec::new()));
            }
            let items = self.parse_elements(inner, inner_offset, depth)?;
            return Ok(Value::set(items));
        }

        match inner.trim() {
            "" => return Ok(Value::list(Vec::new())),
            ":" => return Ok(Value::map(Vec::new())),
            _ => {}
        }

        let segments = split_top_level(inner, ',').map_err(|e| shift(e, inner_offset))?;
        let mut colons = Vec::with_capacity(segments.len());
        for segment in &segments {
            let colon = find_top_level(segment.text, ':')
                .map_err(|e| shift(e, inner_offset + segment.offset))?;
            colons.push(colon);
        }

        if colons.iter().all(Option::is_some) {
            let mut entries = Vec::with_capacity(segments.len());
            for (segment, colon) in segments.iter().zip(colons) {
                let colon = colon.unwrap_or_default();
                let base = inner_offset + segment.offset;
                let key_text = &segment.text[..colon];
                let key = self.parse(key_text, base, depth + 1)?;
                let value = self.parse(
                    &segment.text[colon + 1..],
                    base + char_len(key_text) + 1,
                    depth + 1,
                )?;
                entries.push((key, value));
            }
            return Ok(Value::map(entries));
        }

        let mut items = Vec::with_capacity(segments.len());
        for segment in &segments {
            items.push(self.parse(segment.text, inner_offset + segment.offset, depth + 1)?);
        }
        Ok(Value::list(items))
    }

    fn parse_elements(&self, inner: &str, offset: usize, depth: usize) -> ParseResult<Vec<Value>> {
        let segments = split_top_level(inner, ',').map_err(|e| shift(e, offset))?;
        segments
            .iter()
            .map(|segment| self.parse(segment.text, offset + segment.offset, depth + 1))
            .collect()
    }

    fn check_balanced(&self, text: &str, offset: usize) -> ParseResult<()> {
        let mut scanner = DepthScanner::new();
        for (i, ch) in text.chars().enumerate() {
            scanner.feed(ch, i + 1).map_err(|e| shift(e, offset))?;
        }
        scanner.finish().map_err(|e| shift(e, offset))
    }
}
