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

//! Calendar and duration literals that chrono has no direct parser for.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A date-based amount of time, `P1Y2M3D`.
///
/// Weeks are folded into days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Parse `[-]PnYnMnWnD`; at least one component is required.
    pub fn parse(text: &str) -> Result<Self, String> {
        let (negative, body) = split_sign(text);
        let body = strip_designator(body).ok_or_else(|| format!("'{}' is not a period", text))?;
        if body.is_empty() {
            return Err(format!("'{}' has no period components", text));
        }

        let mut period = Period::default();
        let mut last_unit = 0;
        for (amount, unit) in components(body, text)? {
            let (rank, target, factor) = match unit.to_ascii_uppercase() {
                'Y' => (1, &mut period.years, 1),
                'M' => (2, &mut period.months, 1),
                'W' => (3, &mut period.days, 7),
                'D' => (4, &mut period.days, 1),
                other => return Err(format!("unknown period unit '{}' in '{}'", other, text)),
            };
            if rank <= last_unit {
                return Err(format!("period units out of order in '{}'", text));
            }
            last_unit = rank;
            let amount = i32::try_from(amount)
                .ok()
                .and_then(|a| a.checked_mul(factor))
                .and_then(|a| target.checked_add(a))
                .ok_or_else(|| format!("period '{}' overflows", text))?;
            *target = amount;
        }

        if negative {
            period = Period {
                years: period.years.checked_neg().ok_or("period overflows")?,
                months: period.months.checked_neg().ok_or("period overflows")?,
                days: period.days.checked_neg().ok_or("period overflows")?,
            };
        }
        Ok(period)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Period::default() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

/// A year and month, `2024-02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn parse(text: &str) -> Result<Self, String> {
        let err = || format!("'{}' is not a year-month (expected YYYY-MM)", text);
        let (year, month) = text.rsplit_once('-').ok_or_else(err)?;
        let year = parse_year(year).ok_or_else(err)?;
        let month = parse_two_digits(month).filter(|m| (1..=12).contains(m)).ok_or_else(err)?;
        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A month and day without a year, `--02-29`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn parse(text: &str) -> Result<Self, String> {
        let err = || format!("'{}' is not a month-day (expected --MM-DD)", text);
        let rest = text.strip_prefix("--").ok_or_else(err)?;
        let (month, day) = rest.split_once('-').ok_or_else(err)?;
        let month = parse_two_digits(month).ok_or_else(err)?;
        let day = parse_two_digits(day).ok_or_else(err)?;
        // 2000 is a leap year, so February 29 is accepted.
        NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(err)?;
        Ok(Self { month, day })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

/// A date-time with offset and an optional region label, `2024-01-01T10:00+01:00[Europe/Paris]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    pub datetime: DateTime<FixedOffset>,
    pub zone: Option<String>,
}

impl ZonedDateTime {
    pub fn parse(text: &str) -> Result<Self, String> {
        let (stamp, zone) = match text.strip_suffix(']').and_then(|t| t.split_once('[')) {
            Some((stamp, zone)) if !zone.trim().is_empty() => (stamp, Some(zone.to_string())),
            Some(_) => return Err(format!("'{}' has an empty zone", text)),
            None => (text, None),
        };
        Ok(Self {
            datetime: parse_offset_datetime(stamp)?,
            zone,
        })
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.to_rfc3339())?;
        if let Some(zone) = &self.zone {
            write!(f, "[{}]", zone)?;
        }
        Ok(())
    }
}

/// Parse `[-]PnDTnHnMn.nS` into a [`TimeDelta`].
pub fn parse_duration(text: &str) -> Result<TimeDelta, String> {
    let (negative, body) = split_sign(text);
    let body = strip_designator(body).ok_or_else(|| format!("'{}' is not a duration", text))?;
    let (date_part, time_part) = match body.find(|c: char| c == 'T' || c == 't') {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };
    if date_part.is_empty() && time_part.map_or(true, str::is_empty) {
        return Err(format!("'{}' has no duration components", text));
    }

    let mut nanos: i128 = 0;
    for (amount, unit) in components(date_part, text)? {
        if !unit.eq_ignore_ascii_case(&'D') {
            return Err(format!("unexpected unit '{}' before 'T' in '{}'", unit, text));
        }
        nanos = amount
            .checked_mul(86_400 * NANOS_PER_SECOND)
            .and_then(|n| nanos.checked_add(n))
            .ok_or_else(|| format!("duration '{}' overflows", text))?;
    }

    if let Some(time_part) = time_part {
        let mut last_unit = 0;
        for (amount, unit) in time_components(time_part, text)? {
            let (rank, scale) = match unit.to_ascii_uppercase() {
                'H' => (1, 3_600 * NANOS_PER_SECOND),
                'M' => (2, 60 * NANOS_PER_SECOND),
                'S' => (3, 1),
                other => return Err(format!("unknown duration unit '{}' in '{}'", other, text)),
            };
            if rank <= last_unit {
                return Err(format!("duration units out of order in '{}'", text));
            }
            last_unit = rank;
            nanos = amount
                .checked_mul(scale)
                .and_then(|n| nanos.checked_add(n))
                .ok_or_else(|| format!("duration '{}' overflows", text))?;
        }
    }

    if negative {
        nanos = -nanos;
    }
    let seconds = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND))
        .map_err(|_| format!("duration '{}' overflows", text))?;
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as i64;
    TimeDelta::try_seconds(seconds)
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(subsec)))
        .ok_or_else(|| format!("duration '{}' overflows", text))
}

/// Parse an RFC 3339 date-time, also accepting a missing seconds field.
pub fn parse_offset_datetime(text: &str) -> Result<DateTime<FixedOffset>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    let normalised = match text.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        Some(rest) => format!("{}+00:00", rest),
        None => text.to_string(),
    };
    DateTime::parse_from_str(&normalised, "%Y-%m-%dT%H:%M%:z")
        .map_err(|e| format!("'{}' is not an offset date-time: {}", text, e))
}

pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| format!("'{}' is not a date: {}", text, e))
}

pub fn parse_time(text: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map_err(|e| format!("'{}' is not a time: {}", text, e))
}

pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("'{}' is not a date-time: {}", text, e))
}

/// Parse a year such as `2024` or `-500`.
pub fn parse_year(text: &str) -> Option<i32> {
    let (negative, digits) = split_sign(text);
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = digits.parse().ok()?;
    Some(if negative { -year } else { year })
}

fn parse_two_digits(text: &str) -> Option<u32> {
    if text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn strip_designator(text: &str) -> Option<&str> {
    text.strip_prefix('P').or_else(|| text.strip_prefix('p'))
}

/// Read `<signed integer><unit>` pairs.
fn components(mut body: &str, whole: &str) -> Result<Vec<(i128, char)>, String> {
    let mut out = Vec::new();
    while !body.is_empty() {
        let (negative, rest) = split_sign(body);
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let unit = rest[digits..].chars().next();
        let (Some(unit), true) = (unit, digits > 0) else {
            return Err(format!("malformed component in '{}'", whole));
        };
        let amount: i128 = rest[..digits]
            .parse()
            .map_err(|_| format!("number too large in '{}'", whole))?;
        out.push((if negative { -amount } else { amount }, unit));
        body = &rest[digits + unit.len_utf8()..];
    }
    Ok(out)
}

/// Like [`components`], but seconds may carry up to nine fraction digits.
/// Amounts are returned in nanoseconds for the `S` unit.
fn time_components(mut body: &str, whole: &str) -> Result<Vec<(i128, char)>, String> {
    let mut out = Vec::new();
    while !body.is_empty() {
        let (negative, rest) = split_sign(body);
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let mut consumed = digits;
        let mut fraction: Option<&str> = None;
        if rest[digits..].starts_with(|c: char| c == '.' || c == ',') {
            let frac_len = rest[digits + 1..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            if frac_len == 0 || frac_len > 9 {
                return Err(format!("malformed fraction in '{}'", whole));
            }
            fraction = Some(&rest[digits + 1..digits + 1 + frac_len]);
            consumed += 1 + frac_len;
        }
        let unit = rest[consumed..].chars().next();
        let (Some(unit), true) = (unit, digits > 0) else {
            return Err(format!("malformed component in '{}'", whole));
        };
        let whole_part: i128 = rest[..digits]
            .parse()
            .map_err(|_| format!("number too large in '{}'", whole))?;
        let amount = if unit.eq_ignore_ascii_case(&'S') {
            let frac_nanos = match fraction {
                Some(f) => format!("{:0<9}", f)
                    .parse::<i128>()
                    .map_err(|_| format!("malformed fraction in '{}'", whole))?,
                None => 0,
            };
            whole_part
                .checked_mul(NANOS_PER_SECOND)
                .map(|n| n + frac_nanos)
                .ok_or_else(|| format!("number too large in '{}'", whole))?
        } else if fraction.is_some() {
            return Err(format!("only seconds may have a fraction in '{}'", whole));
        } else {
            whole_part
        };
        out.push((if negative { -amount } else { amount }, unit));
        body = &rest[consumed + unit.len_utf8()..];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Duration tests ====================

    #[test]
    fn test_duration_components() {
        assert_eq!(parse_duration("PT15M").unwrap(), TimeDelta::minutes(15));
        assert_eq!(parse_duration("P2D").unwrap(), TimeDelta::days(2));
        assert_eq!(
            parse_duration("P1DT2H3M4S").unwrap(),
            TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::minutes(3) + TimeDelta::seconds(4)
        );
    }

    #[test]
    fn test_duration_fraction() {
        assert_eq!(parse_duration("PT1.5S").unwrap(), TimeDelta::milliseconds(1500));
        assert_eq!(parse_duration("PT0,000000001S").unwrap(), TimeDelta::nanoseconds(1));
    }

    #[test]
    fn test_duration_negative() {
        assert_eq!(parse_duration("-PT1H").unwrap(), TimeDelta::hours(-1));
        assert_eq!(parse_duration("PT-30S").unwrap(), TimeDelta::seconds(-30));
        assert_eq!(parse_duration("-PT-1.5S").unwrap(), TimeDelta::milliseconds(1500));
    }

    #[test]
    fn test_duration_invalid() {
        assert!(parse_duration("P").is_err());
        assert!(parse_duration("PT").is_err());
        assert!(parse_duration("15M").is_err());
        assert!(parse_duration("PT1M1H").is_err());
        assert!(parse_duration("P1H").is_err());
        assert!(parse_duration("PT1.5M").is_err());
    }

    // ==================== Period tests ====================

    #[test]
    fn test_period_parse() {
        assert_eq!(Period::parse("P1Y2M3D").unwrap(), Period::new(1, 2, 3));
        assert_eq!(Period::parse("P2W").unwrap(), Period::new(0, 0, 14));
        assert_eq!(Period::parse("P1W2D").unwrap(), Period::new(0, 0, 9));
        assert_eq!(Period::parse("-P1M").unwrap(), Period::new(0, -1, 0));
    }

    #[test]
    fn test_period_invalid() {
        assert!(Period::parse("P").is_err());
        assert!(Period::parse("P1D1Y").is_err());
        assert!(Period::parse("1Y").is_err());
        assert!(Period::parse("PT1H").is_err());
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::new(1, 0, 5).to_string(), "P1Y5D");
        assert_eq!(Period::default().to_string(), "P0D");
    }

    // ==================== Year-month / month-day tests ====================

    #[test]
    fn test_year_month() {
        assert_eq!(
            YearMonth::parse("2024-02").unwrap(),
            YearMonth { year: 2024, month: 2 }
        );
        assert!(YearMonth::parse("2024-13").is_err());
        assert!(YearMonth::parse("24-01").is_err());
        assert_eq!(YearMonth::parse("2024-02").unwrap().to_string(), "2024-02");
    }

    #[test]
    fn test_month_day() {
        assert_eq!(MonthDay::parse("--02-29").unwrap(), MonthDay { month: 2, day: 29 });
        assert!(MonthDay::parse("--02-30").is_err());
        assert!(MonthDay::parse("02-01").is_err());
        assert_eq!(MonthDay::parse("--12-01").unwrap().to_string(), "--12-01");
    }

    #[test]
    fn test_year() {
        assert_eq!(parse_year("2024"), Some(2024));
        assert_eq!(parse_year("-0500"), Some(-500));
        assert_eq!(parse_year("24"), None);
    }

    // ==================== Date-time tests ====================

    #[test]
    fn test_offset_datetime_forms() {
        let a = parse_offset_datetime("2024-01-01T10:00:00+01:00").unwrap();
        let b = parse_offset_datetime("2024-01-01T10:00+01:00").unwrap();
        assert_eq!(a, b);
        let z = parse_offset_datetime("2024-01-01T09:00Z").unwrap();
        assert_eq!(z, a);
    }

    #[test]
    fn test_zoned_datetime() {
        let z = ZonedDateTime::parse("2024-01-01T10:00+01:00[Europe/Paris]").unwrap();
        assert_eq!(z.zone.as_deref(), Some("Europe/Paris"));
        let plain = ZonedDateTime::parse("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(plain.zone, None);
        assert!(ZonedDateTime::parse("2024-01-01T10:00Z[]").is_err());
    }

    #[test]
    fn test_local_forms() {
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
        assert_eq!(parse_time("12:30").unwrap(), NaiveTime::from_hms_opt(12, 30, 0).unwrap());
        assert!(parse_time("12:30:15.250").is_ok());
        assert!(parse_datetime("2024-01-01T12:30").is_ok());
        assert!(parse_datetime("2024-01-01 12:30").is_err());
    }
}
