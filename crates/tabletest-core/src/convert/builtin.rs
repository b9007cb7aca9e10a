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

//! Built-in scalar conversions.
//!
//! Each built-in target kind has one entry in a static dispatch table: its
//! names and a pure parse function from scalar text. Supporting a new kind
//! means adding a [`BuiltinKind`] variant and a table entry.

use super::temporal::{
    parse_date, parse_datetime, parse_duration, parse_offset_datetime, parse_time, parse_year,
    MonthDay, Period, YearMonth, ZonedDateTime,
};
use super::typed::TypedValue;
use chrono::Utc;
use encoding_rs::Encoding;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use url::Url;
use uuid::Uuid;

/// Target kinds with a built-in conversion from scalar text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinKind {
    String,
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    BigInt,
    F32,
    F64,
    Decimal,
    Duration,
    Period,
    Date,
    Time,
    DateTime,
    OffsetDateTime,
    ZonedDateTime,
    Instant,
    Year,
    YearMonth,
    MonthDay,
    Uuid,
    Uri,
    Url,
    Path,
    Charset,
    Locale,
    Currency,
    Type,
}

impl BuiltinKind {
    /// The canonical name, as used in type-object lookups and messages.
    pub fn name(self) -> &'static str {
        entry(self).names[0]
    }

    /// Look up a kind by any of its names.
    pub fn from_name(name: &str) -> Option<Self> {
        names().get(name).copied()
    }

    /// Parse scalar text as this kind.
    pub fn parse(self, text: &str) -> Result<TypedValue, String> {
        (entry(self).parse)(text)
    }

    /// Every built-in kind, in table order.
    pub fn all() -> impl Iterator<Item = BuiltinKind> {
        BUILTINS.iter().map(|e| e.kind)
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A locale tag such as `en`, `en-US` or `nb_NO`, normalised to hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    tag: String,
}

impl Locale {
    pub fn parse(text: &str) -> Result<Self, String> {
        let err = || format!("'{}' is not a locale tag", text);
        let mut parts = text.split(|c: char| c == '-' || c == '_');
        let language = parts.next().ok_or_else(err)?;
        let language_ok = matches!(language.len(), 2..=3 | 5..=8)
            && language.bytes().all(|b| b.is_ascii_alphabetic());
        if !language_ok {
            return Err(err());
        }
        for part in parts {
            let part_ok =
                (1..=8).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_alphanumeric());
            if !part_ok {
                return Err(err());
            }
        }
        Ok(Self {
            tag: text.replace('_', "-"),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// The region subtag, if present (two letters or three digits).
    pub fn region(&self) -> Option<&str> {
        self.tag.split('-').skip(1).find(|part| {
            (part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()))
                || (part.len() == 3 && part.bytes().all(|b| b.is_ascii_digit()))
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// A three-letter currency code such as `EUR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Currency {
    code: String,
}

impl Currency {
    pub fn parse(text: &str) -> Result<Self, String> {
        if text.len() == 3 && text.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self {
                code: text.to_string(),
            })
        } else {
            Err(format!("'{}' is not a currency code", text))
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

type ParseFn = fn(&str) -> Result<TypedValue, String>;

struct BuiltinEntry {
    kind: BuiltinKind,
    /// Canonical name first, then aliases.
    names: &'static [&'static str],
    parse: ParseFn,
}

/// One entry per [`BuiltinKind`], in declaration order.
#[rustfmt::skip]
const BUILTINS: &[BuiltinEntry] = &[
    BuiltinEntry { kind: BuiltinKind::String, names: &["String", "string", "str"], parse: parse_string },
    BuiltinEntry { kind: BuiltinKind::Bool, names: &["bool", "boolean"], parse: parse_bool },
    BuiltinEntry { kind: BuiltinKind::Char, names: &["char"], parse: parse_char },
    BuiltinEntry { kind: BuiltinKind::I8, names: &["i8"], parse: |t| parse_int(t).map(TypedValue::I8) },
    BuiltinEntry { kind: BuiltinKind::I16, names: &["i16"], parse: |t| parse_int(t).map(TypedValue::I16) },
    BuiltinEntry { kind: BuiltinKind::I32, names: &["i32", "int"], parse: |t| parse_int(t).map(TypedValue::I32) },
    BuiltinEntry { kind: BuiltinKind::I64, names: &["i64", "long"], parse: |t| parse_int(t).map(TypedValue::I64) },
    BuiltinEntry { kind: BuiltinKind::I128, names: &["i128"], parse: |t| parse_int(t).map(TypedValue::I128) },
    BuiltinEntry { kind: BuiltinKind::Isize, names: &["isize"], parse: |t| parse_int(t).map(TypedValue::Isize) },
    BuiltinEntry { kind: BuiltinKind::U8, names: &["u8"], parse: |t| parse_int(t).map(TypedValue::U8) },
    BuiltinEntry { kind: BuiltinKind::U16, names: &["u16"], parse: |t| parse_int(t).map(TypedValue::U16) },
    BuiltinEntry { kind: BuiltinKind::U32, names: &["u32"], parse: |t| parse_int(t).map(TypedValue::U32) },
    BuiltinEntry { kind: BuiltinKind::U64, names: &["u64"], parse: |t| parse_int(t).map(TypedValue::U64) },
    BuiltinEntry { kind: BuiltinKind::U128, names: &["u128"], parse: |t| parse_int(t).map(TypedValue::U128) },
    BuiltinEntry { kind: BuiltinKind::Usize, names: &["usize"], parse: |t| parse_int(t).map(TypedValue::Usize) },
    BuiltinEntry { kind: BuiltinKind::BigInt, names: &["BigInt", "bigint"], parse: |t| parse_bigint(t).map(TypedValue::BigInt) },
    BuiltinEntry { kind: BuiltinKind::F32, names: &["f32", "float"], parse: |t| parse_f32(t).map(TypedValue::F32) },
    BuiltinEntry { kind: BuiltinKind::F64, names: &["f64", "double"], parse: |t| parse_f64(t).map(TypedValue::F64) },
    BuiltinEntry { kind: BuiltinKind::Decimal, names: &["Decimal", "BigDecimal", "decimal"], parse: parse_decimal },
    BuiltinEntry { kind: BuiltinKind::Duration, names: &["Duration", "TimeDelta"], parse: |t| parse_duration(t).map(TypedValue::Duration) },
    BuiltinEntry { kind: BuiltinKind::Period, names: &["Period"], parse: |t| Period::parse(t).map(TypedValue::Period) },
    BuiltinEntry { kind: BuiltinKind::Date, names: &["Date", "NaiveDate"], parse: |t| parse_date(t).map(TypedValue::Date) },
    BuiltinEntry { kind: BuiltinKind::Time, names: &["Time", "NaiveTime"], parse: |t| parse_time(t).map(TypedValue::Time) },
    BuiltinEntry { kind: BuiltinKind::DateTime, names: &["DateTime", "NaiveDateTime"], parse: |t| parse_datetime(t).map(TypedValue::DateTime) },
    BuiltinEntry { kind: BuiltinKind::OffsetDateTime, names: &["OffsetDateTime"], parse: |t| parse_offset_datetime(t).map(TypedValue::OffsetDateTime) },
    BuiltinEntry { kind: BuiltinKind::ZonedDateTime, names: &["ZonedDateTime"], parse: |t| ZonedDateTime::parse(t).map(TypedValue::ZonedDateTime) },
    BuiltinEntry { kind: BuiltinKind::Instant, names: &["Instant"], parse: parse_instant },
    BuiltinEntry { kind: BuiltinKind::Year, names: &["Year"], parse: |t| parse_year(t).map(TypedValue::Year).ok_or_else(|| format!("'{}' is not a year", t)) },
    BuiltinEntry { kind: BuiltinKind::YearMonth, names: &["YearMonth"], parse: |t| YearMonth::parse(t).map(TypedValue::YearMonth) },
    BuiltinEntry { kind: BuiltinKind::MonthDay, names: &["MonthDay"], parse: |t| MonthDay::parse(t).map(TypedValue::MonthDay) },
    BuiltinEntry { kind: BuiltinKind::Uuid, names: &["Uuid", "UUID"], parse: |t| Uuid::parse_str(t).map(TypedValue::Uuid).map_err(|e| format!("'{}' is not a UUID: {}", t, e)) },
    BuiltinEntry { kind: BuiltinKind::Uri, names: &["Uri", "URI"], parse: parse_uri },
    BuiltinEntry { kind: BuiltinKind::Url, names: &["Url", "URL"], parse: |t| Url::parse(t).map(TypedValue::Url).map_err(|e| format!("'{}' is not a URL: {}", t, e)) },
    BuiltinEntry { kind: BuiltinKind::Path, names: &["Path", "PathBuf", "File"], parse: parse_path },
    BuiltinEntry { kind: BuiltinKind::Charset, names: &["Charset", "Encoding"], parse: parse_charset },
    BuiltinEntry { kind: BuiltinKind::Locale, names: &["Locale"], parse: |t| Locale::parse(t).map(TypedValue::Locale) },
    BuiltinEntry { kind: BuiltinKind::Currency, names: &["Currency"], parse: |t| Currency::parse(t).map(TypedValue::Currency) },
    BuiltinEntry { kind: BuiltinKind::Type, names: &["Type"], parse: parse_type },
];

// A kind without its own row, or a row out of order, fails the build.
const _: () = {
    assert!(BUILTINS.len() == BuiltinKind::Type as usize + 1);
    let mut i = 0;
    while i < BUILTINS.len() {
        assert!(BUILTINS[i].kind as usize == i);
        i += 1;
    }
};

static NAMES: OnceLock<HashMap<&'static str, BuiltinKind>> = OnceLock::new();

fn names() -> &'static HashMap<&'static str, BuiltinKind> {
    NAMES.get_or_init(|| {
        BUILTINS
            .iter()
            .flat_map(|e| e.names.iter().map(move |name| (*name, e.kind)))
            .collect()
    })
}

fn entry(kind: BuiltinKind) -> &'static BuiltinEntry {
    &BUILTINS[kind as usize]
}

fn parse_string(text: &str) -> Result<TypedValue, String> {
    Ok(TypedValue::String(text.to_string()))
}

fn parse_bool(text: &str) -> Result<TypedValue, String> {
    if text.eq_ignore_ascii_case("true") {
        Ok(TypedValue::Bool(true))
    } else if text.eq_ignore_ascii_case("false") {
        Ok(TypedValue::Bool(false))
    } else {
        Err(format!("'{}' is not a boolean", text))
    }
}

fn parse_char(text: &str) -> Result<TypedValue, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(TypedValue::Char(c)),
        _ => Err(format!("'{}' is not a single character", text)),
    }
}

/// Parse an integer literal: optional sign, then decimal, `0x`/`0X`/`#` hex,
/// or leading-zero octal.
pub(crate) fn parse_bigint(text: &str) -> Result<BigInt, String> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .or_else(|| body.strip_prefix('#'))
    {
        (16, hex)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(format!("'{}' is not an integer", text));
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| format!("'{}' is not an integer", text))?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_int<T: TryFrom<BigInt>>(text: &str) -> Result<T, String> {
    let value = parse_bigint(text)?;
    T::try_from(value).map_err(|_| format!("'{}' is out of range", text))
}

fn spells_infinity(text: &str) -> bool {
    text.to_ascii_lowercase().contains("inf")
}

fn parse_f64(text: &str) -> Result<f64, String> {
    match text.parse::<f64>() {
        Ok(v) if v.is_infinite() && !spells_infinity(text) => {
            Err(format!("'{}' is out of range", text))
        }
        Ok(v) => Ok(v),
        Err(_) => parse_int::<i128>(text)
            .map(|v| v as f64)
            .map_err(|_| format!("'{}' is not a number", text)),
    }
}

fn parse_f32(text: &str) -> Result<f32, String> {
    match text.parse::<f32>() {
        Ok(v) if v.is_infinite() && !spells_infinity(text) => {
            Err(format!("'{}' is out of range", text))
        }
        Ok(v) => Ok(v),
        Err(_) => parse_int::<i64>(text)
            .map(|v| v as f32)
            .map_err(|_| format!("'{}' is not a number", text)),
    }
}

fn parse_decimal(text: &str) -> Result<TypedValue, String> {
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    };
    parsed
        .map(TypedValue::Decimal)
        .map_err(|e| format!("'{}' is not a decimal: {}", text, e))
}

fn parse_instant(text: &str) -> Result<TypedValue, String> {
    parse_offset_datetime(text).map(|dt| TypedValue::Instant(dt.with_timezone(&Utc)))
}

fn parse_uri(text: &str) -> Result<TypedValue, String> {
    if text.chars().any(char::is_whitespace) {
        return Err(format!("'{}' is not a URI", text));
    }
    if Url::parse(text).is_ok() {
        return Ok(TypedValue::Uri(text.to_string()));
    }
    // A relative reference is valid if it resolves against some base.
    Url::parse("relative:/")
        .and_then(|base| base.join(text))
        .map(|_| TypedValue::Uri(text.to_string()))
        .map_err(|e| format!("'{}' is not a URI: {}", text, e))
}

fn parse_path(text: &str) -> Result<TypedValue, String> {
    if text.is_empty() || text.contains('\0') {
        Err(format!("'{}' is not a path", text))
    } else {
        Ok(TypedValue::Path(PathBuf::from(text)))
    }
}

fn parse_charset(text: &str) -> Result<TypedValue, String> {
    Encoding::for_label(text.as_bytes())
        .map(TypedValue::Charset)
        .ok_or_else(|| format!("'{}' is not a known text encoding", text))
}

fn parse_type(text: &str) -> Result<TypedValue, String> {
    BuiltinKind::from_name(text)
        .map(TypedValue::Type)
        .ok_or_else(|| format!("'{}' is not a known type", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Table tests ====================

    #[test]
    fn test_every_kind_has_an_entry() {
        let kinds: Vec<_> = BuiltinKind::all().collect();
        assert_eq!(kinds.len(), BUILTINS.len());
        for kind in kinds {
            assert_eq!(entry(kind).kind, kind);
        }
    }

    #[test]
    fn test_every_kind_has_its_own_entry() {
        let kinds: Vec<BuiltinKind> = BuiltinKind::all().collect();
        assert_eq!(kinds.len(), BuiltinKind::Type as usize + 1);
        for kind in kinds {
            assert_eq!(entry(kind).kind, kind);
            assert_eq!(BuiltinKind::from_name(kind.name()), Some(kind));
        }
        assert!(BuiltinKind::I32.parse("12").is_ok_and(|v| v == TypedValue::I32(12)));
        assert!(BuiltinKind::I32.parse("twelve").is_err());
    }

    #[test]
    fn test_names_resolve() {
        assert_eq!(BuiltinKind::from_name("i32"), Some(BuiltinKind::I32));
        assert_eq!(BuiltinKind::from_name("NaiveDate"), Some(BuiltinKind::Date));
        assert_eq!(BuiltinKind::from_name("Nope"), None);
        assert_eq!(BuiltinKind::I64.name(), "i64");
        assert_eq!(BuiltinKind::Decimal.to_string(), "Decimal");
    }

    // ==================== Integer tests ====================

    #[test]
    fn test_integer_forms() {
        assert_eq!(BuiltinKind::I32.parse("42"), Ok(TypedValue::I32(42)));
        assert_eq!(BuiltinKind::I32.parse("-42"), Ok(TypedValue::I32(-42)));
        assert_eq!(BuiltinKind::I32.parse("+7"), Ok(TypedValue::I32(7)));
        assert_eq!(BuiltinKind::I32.parse("0x1F"), Ok(TypedValue::I32(31)));
        assert_eq!(BuiltinKind::I32.parse("#ff"), Ok(TypedValue::I32(255)));
        assert_eq!(BuiltinKind::I32.parse("-0X10"), Ok(TypedValue::I32(-16)));
        assert_eq!(BuiltinKind::I32.parse("010"), Ok(TypedValue::I32(8)));
        assert_eq!(BuiltinKind::I32.parse("0"), Ok(TypedValue::I32(0)));
    }

    #[test]
    fn test_integer_never_narrows() {
        assert!(BuiltinKind::I8.parse("128").is_err());
        assert_eq!(BuiltinKind::I8.parse("-128"), Ok(TypedValue::I8(-128)));
        assert!(BuiltinKind::U8.parse("-1").is_err());
        assert!(BuiltinKind::I64.parse("9223372036854775808").is_err());
        assert_eq!(
            BuiltinKind::U128.parse("340282366920938463463374607431768211455"),
            Ok(TypedValue::U128(u128::MAX))
        );
    }

    #[test]
    fn test_integer_rejects_junk() {
        assert!(BuiltinKind::I32.parse("1.5").is_err());
        assert!(BuiltinKind::I32.parse("09").is_err());
        assert!(BuiltinKind::I32.parse("1_000").is_err());
        assert!(BuiltinKind::I32.parse("0x").is_err());
        assert!(BuiltinKind::I32.parse("").is_err());
    }

    #[test]
    fn test_bigint() {
        let v = BuiltinKind::BigInt.parse("123456789012345678901234567890").unwrap();
        assert_eq!(
            v,
            TypedValue::BigInt(BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap())
        );
    }

    // ==================== Float tests ====================

    #[test]
    fn test_float_forms() {
        assert_eq!(BuiltinKind::F64.parse("1.5"), Ok(TypedValue::F64(1.5)));
        assert_eq!(BuiltinKind::F64.parse("1e3"), Ok(TypedValue::F64(1000.0)));
        assert_eq!(BuiltinKind::F64.parse("3"), Ok(TypedValue::F64(3.0)));
        assert_eq!(BuiltinKind::F64.parse("0x10"), Ok(TypedValue::F64(16.0)));
        assert_eq!(BuiltinKind::F32.parse("0.25"), Ok(TypedValue::F32(0.25)));
    }

    #[test]
    fn test_float_overflow_rejected() {
        assert!(BuiltinKind::F32.parse("1e39").is_err());
        assert!(BuiltinKind::F64.parse("1e309").is_err());
        assert_eq!(
            BuiltinKind::F64.parse("-Infinity"),
            Ok(TypedValue::F64(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_decimal() {
        let v = BuiltinKind::Decimal.parse("1.25e2").unwrap();
        assert_eq!(v, TypedValue::Decimal(Decimal::from(125)));
        assert!(BuiltinKind::Decimal.parse("abc").is_err());
    }

    // ==================== Text-like tests ====================

    #[test]
    fn test_bool() {
        assert_eq!(BuiltinKind::Bool.parse("TRUE"), Ok(TypedValue::Bool(true)));
        assert_eq!(BuiltinKind::Bool.parse("false"), Ok(TypedValue::Bool(false)));
        assert!(BuiltinKind::Bool.parse("yes").is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(BuiltinKind::Char.parse("é"), Ok(TypedValue::Char('é')));
        assert!(BuiltinKind::Char.parse("ab").is_err());
        assert!(BuiltinKind::Char.parse("").is_err());
    }

    #[test]
    fn test_locale() {
        let locale = Locale::parse("nb_NO").unwrap();
        assert_eq!(locale.tag(), "nb-NO");
        assert_eq!(locale.language(), "nb");
        assert_eq!(locale.region(), Some("NO"));
        assert_eq!(Locale::parse("en").unwrap().region(), None);
        assert!(Locale::parse("e").is_err());
        assert!(Locale::parse("en--US").is_err());
    }

    #[test]
    fn test_currency() {
        assert_eq!(Currency::parse("EUR").unwrap().code(), "EUR");
        assert!(Currency::parse("eur").is_err());
        assert!(Currency::parse("EURO").is_err());
    }

    #[test]
    fn test_charset() {
        assert_eq!(
            BuiltinKind::Charset.parse("utf-8"),
            Ok(TypedValue::Charset(encoding_rs::UTF_8))
        );
        assert_eq!(
            BuiltinKind::Charset.parse("latin1"),
            Ok(TypedValue::Charset(encoding_rs::WINDOWS_1252))
        );
        assert!(BuiltinKind::Charset.parse("klingon").is_err());
    }

    #[test]
    fn test_uri_and_url() {
        assert!(BuiltinKind::Url.parse("https://example.com/a").is_ok());
        assert!(BuiltinKind::Url.parse("/relative").is_err());
        assert_eq!(
            BuiltinKind::Uri.parse("../a/b?q=1"),
            Ok(TypedValue::Uri("../a/b?q=1".to_string()))
        );
        assert!(BuiltinKind::Uri.parse("a b").is_err());
    }

    #[test]
    fn test_uuid_and_path() {
        assert!(BuiltinKind::Uuid.parse("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
        assert!(BuiltinKind::Uuid.parse("not-a-uuid").is_err());
        assert_eq!(
            BuiltinKind::Path.parse("dir/file.txt"),
            Ok(TypedValue::Path(PathBuf::from("dir/file.txt")))
        );
    }

    #[test]
    fn test_type_lookup() {
        assert_eq!(
            BuiltinKind::Type.parse("Duration"),
            Ok(TypedValue::Type(BuiltinKind::Duration))
        );
        assert!(BuiltinKind::Type.parse("Widget").is_err());
    }

    #[test]
    fn test_temporal_entries() {
        assert!(BuiltinKind::Date.parse("2024-01-31").is_ok());
        assert!(BuiltinKind::Instant.parse("2024-01-31T10:00:00+02:00").is_ok());
        assert_eq!(BuiltinKind::Year.parse("2024"), Ok(TypedValue::Year(2024)));
        assert!(BuiltinKind::Year.parse("abc").is_err());
        assert!(BuiltinKind::Duration.parse("PT1S").is_ok());
    }
}
