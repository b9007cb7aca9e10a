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

//! Domain types and ready-made conversion scopes.
//!
//! [`Date`] has no built-in conversion, so every test that converts to it
//! exercises conversion functions.

use std::fmt;
use tabletest_core::{
    ConversionFn, ConverterRegistry, ScalarType, ScopeLevel, TableType, TargetType, TypedValue,
};

/// A calendar date known only through conversion functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse `yyyy-mm-dd`.
    pub fn parse(text: &str) -> Result<Self, String> {
        let parts: Vec<&str> = text.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(format!("'{}' is not yyyy-mm-dd", text));
        };
        let number = |part: &str| part.parse::<u32>().map_err(|e| format!("'{}': {}", part, e));
        let date = Self {
            year: year.parse().map_err(|e| format!("'{}': {}", year, e))?,
            month: number(*month)?,
            day: number(*day)?,
        };
        if !(1..=12).contains(&date.month) || !(1..=31).contains(&date.day) {
            return Err(format!("'{}' is out of range", text));
        }
        Ok(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TableType for Date {
    fn target_type() -> TargetType {
        TargetType::of::<Date>()
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        value.downcast_ref::<Date>().copied()
    }
}

/// `Date` from `yyyy-mm-dd` text.
pub fn date_from_string() -> ConversionFn {
    ConversionFn::typed("date_from_string", |text: String| Date::parse(&text))
}

/// `Date` from a `[year: .., month: .., day: ..]` map.
pub fn date_from_map() -> ConversionFn {
    ConversionFn::new(
        "date_from_map",
        TargetType::map(TargetType::string(), i64::target_type()),
        ScalarType::of::<Date>(),
        |input| {
            let map = input.as_map().ok_or("expected a map")?;
            let field = |name: &str| -> Result<i64, String> {
                match map.get_str(name) {
                    Some(TypedValue::I64(n)) => Ok(*n),
                    _ => Err(format!("missing '{}'", name)),
                }
            };
            let date = Date::new(
                i32::try_from(field("year")?)?,
                u32::try_from(field("month")?)?,
                u32::try_from(field("day")?)?,
            );
            Ok(TypedValue::custom(date))
        },
    )
}

/// A registry with both `Date` functions in one enclosing scope.
pub fn date_registry() -> ConverterRegistry {
    ConverterRegistry::builder()
        .enclosing(
            ScopeLevel::new("DateTests")
                .with(date_from_string())
                .with(date_from_map()),
        )
        .build()
}

/// A registry with two string-to-`Date` functions in one scope, so string
/// input is ambiguous.
pub fn ambiguous_registry() -> ConverterRegistry {
    let duplicate = ConversionFn::typed("parse_date_again", |text: String| Date::parse(&text));
    ConverterRegistry::builder()
        .enclosing(
            ScopeLevel::new("AmbiguousTests")
                .with(date_from_string())
                .with(duplicate),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse() {
        assert_eq!(Date::parse("2024-02-29"), Ok(Date::new(2024, 2, 29)));
        assert!(Date::parse("2024-13-01").is_err());
        assert!(Date::parse("yesterday").is_err());
    }

    #[test]
    fn test_date_display() {
        assert_eq!(Date::new(7, 1, 2).to_string(), "0007-01-02");
    }
}
