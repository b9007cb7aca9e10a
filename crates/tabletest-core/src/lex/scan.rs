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

//! Depth-aware splitting of table text.
//!
//! Rows are split on `|`, collection bodies on `,` and map entries on `:`.
//! In every case a separator only counts when it sits outside all brackets
//! and quotes. A quote opens a quoted region only at the start of a token,
//! so apostrophes inside plain words stay literal.
//!
//! Columns in errors are 1-based character offsets into the scanned text.

use crate::error::{ParseError, ParseResult};

/// Characters after which a new token starts.
const TOKEN_BOUNDARIES: &[char] = &['|', ',', ':', '[', '{'];

/// A piece of scanned text between two top-level separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The untrimmed text of the segment.
    pub text: &'a str,
    /// Character offset of the segment start within the scanned text (0-based).
    pub offset: usize,
}

#[derive(Debug, Clone, Copy)]
struct Open {
    closer: char,
    column: usize,
    quote: bool,
}

/// Tracks bracket and quote nesting one character at a time.
#[derive(Debug, Default)]
pub(crate) struct DepthScanner {
    stack: Vec<Open>,
    in_token: bool,
}

impl DepthScanner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth, quotes included.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Feed the next character at the given 1-based column.
    pub(crate) fn feed(&mut self, ch: char, column: usize) -> ParseResult<()> {
        if let Some(top) = self.stack.last() {
            if top.quote {
                if ch == top.closer {
                    self.stack.pop();
                    self.in_token = true;
                }
                return Ok(());
            }
        }

        match ch {
            '[' => self.push(']', column, false),
            '{' => self.push('}', column, false),
            ']' | '}' => match self.stack.pop() {
                Some(open) if open.closer == ch => self.in_token = true,
                Some(open) => {
                    return Err(ParseError::unbalanced_bracket(
                        format!("expected '{}' but found '{}'", open.closer, ch),
                        0,
                    )
                    .with_column(column));
                }
                None => {
                    return Err(ParseError::unbalanced_bracket(
                        format!("unexpected '{}' without matching opener", ch),
                        0,
                    )
                    .with_column(column));
                }
            },
            '\'' | '"' if !self.in_token => self.push(ch, column, true),
            c if TOKEN_BOUNDARIES.contains(&c) => self.in_token = false,
            c if c.is_whitespace() => {}
            _ => self.in_token = true,
        }
        Ok(())
    }

    /// Check that every opened region was closed.
    pub(crate) fn finish(&self) -> ParseResult<()> {
        match self.stack.last() {
            None => Ok(()),
            Some(open) if open.quote => Err(ParseError::unterminated_quote(
                format!("quote {} is never closed", open.closer),
                0,
            )
            .with_column(open.column)),
            Some(open) => Err(ParseError::unbalanced_bracket(
                format!("missing '{}'", open.closer),
                0,
            )
            .with_column(open.column)),
        }
    }

    fn push(&mut self, closer: char, column: usize, quote: bool) {
        self.stack.push(Open {
            closer,
            column,
            quote,
        });
        self.in_token = false;
    }
}

/// Split `input` on every top-level occurrence of `separator`.
///
/// Always returns at least one segment. Fails if a quote or bracket is left
/// open or a closer appears without its opener.
pub fn split_top_level(input: &str, separator: char) -> ParseResult<Vec<Segment<'_>>> {
    let mut scanner = DepthScanner::new();
    let mut segments = Vec::new();
    let mut start_byte = 0;
    let mut start_char = 0;

    for (column, (byte, ch)) in input.char_indices().enumerate() {
        if ch == separator && scanner.depth() == 0 {
            segments.push(Segment {
                text: &input[start_byte..byte],
                offset: start_char,
            });
            start_byte = byte + ch.len_utf8();
            start_char = column + 1;
        }
        scanner.feed(ch, column + 1)?;
    }
    scanner.finish()?;

    segments.push(Segment {
        text: &input[start_byte..],
        offset: start_char,
    });
    Ok(segments)
}

/// Find the byte index of the first top-level `separator`, if any.
pub fn find_top_level(input: &str, separator: char) -> ParseResult<Option<usize>> {
    let mut scanner = DepthScanner::new();
    let mut found = None;

    for (column, (byte, ch)) in input.char_indices().enumerate() {
        if found.is_none() && ch == separator && scanner.depth() == 0 {
            found = Some(byte);
        }
        scanner.feed(ch, column + 1)?;
    }
    scanner.finish()?;
    Ok(found)
}

/// Byte index of the character that closes the bracket opening `input`.
///
/// `input` must start with `[` or `{`.
pub fn closing_index(input: &str) -> ParseResult<usize> {
    let mut scanner = DepthScanner::new();
    for (column, (byte, ch)) in input.char_indices().enumerate() {
        scanner.feed(ch, column + 1)?;
        if scanner.depth() == 0 {
            return Ok(byte);
        }
    }
    scanner.finish()?;
    Ok(input.len())
}
