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

//! Mapping between Rust types and target descriptors.

use super::builtin::{BuiltinKind, Currency, Locale};
use super::target::TargetType;
use super::temporal::{MonthDay, Period, YearMonth, ZonedDateTime};
use super::typed::{TypedList, TypedMap, TypedSet, TypedValue};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use encoding_rs::Encoding;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;
use std::path::PathBuf;
use url::Url;
use uuid::Uuid;

/// A Rust type with a known target descriptor.
///
/// User types usually implement this by naming themselves and
/// downcasting the custom value a conversion function produced:
///
/// ```
/// use tabletest_core::{TableType, TargetType, TypedValue};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money(i64);
///
/// impl TableType for Money {
///     fn target_type() -> TargetType {
///         TargetType::of::<Money>()
///     }
///
///     fn from_typed(value: TypedValue) -> Option<Self> {
///         value.downcast_ref::<Money>().cloned()
///     }
/// }
/// ```
pub trait TableType: Sized {
    fn target_type() -> TargetType;

    /// Extract `Self` from a converted value of [`Self::target_type`].
    fn from_typed(value: TypedValue) -> Option<Self>;
}

macro_rules! builtin_table_type {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl TableType for $ty {
                fn target_type() -> TargetType {
                    TargetType::builtin(BuiltinKind::$kind)
                }

                fn from_typed(value: TypedValue) -> Option<Self> {
                    match value {
                        TypedValue::$kind(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

builtin_table_type! {
    String => String,
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    BigInt => BigInt,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    TimeDelta => Duration,
    Period => Period,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => OffsetDateTime,
    ZonedDateTime => ZonedDateTime,
    DateTime<Utc> => Instant,
    YearMonth => YearMonth,
    MonthDay => MonthDay,
    Uuid => Uuid,
    Url => Url,
    PathBuf => Path,
    &'static Encoding => Charset,
    Locale => Locale,
    Currency => Currency,
    BuiltinKind => Type,
}

impl<T: TableType> TableType for Option<T> {
    fn target_type() -> TargetType {
        T::target_type().nullable()
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Null => Some(None),
            other => T::from_typed(other).map(Some),
        }
    }
}

impl<T: TableType> TableType for Vec<T> {
    fn target_type() -> TargetType {
        TargetType::list(T::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::List(items) => items.iter().cloned().map(T::from_typed).collect(),
            _ => None,
        }
    }
}

impl<T: TableType> TableType for TypedList<T> {
    fn target_type() -> TargetType {
        TargetType::list(T::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::List(items) => items.iter().cloned().map(T::from_typed).collect(),
            _ => None,
        }
    }
}

/// Sets keep the cell's first-seen order.
impl<T: TableType + PartialEq> TableType for TypedSet<T> {
    fn target_type() -> TargetType {
        TargetType::set(T::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Set(items) => items.iter().cloned().map(T::from_typed).collect(),
            _ => None,
        }
    }
}

/// Maps keep the cell's entry order.
impl<K: TableType + PartialEq, V: TableType> TableType for TypedMap<K, V> {
    fn target_type() -> TargetType {
        TargetType::map(K::target_type(), V::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| Some((K::from_typed(k.clone())?, V::from_typed(v.clone())?)))
                .collect(),
            _ => None,
        }
    }
}

/// Hash order, not the cell's order. Use [`TypedSet`] to keep it.
impl<T: TableType + Eq + Hash> TableType for HashSet<T> {
    fn target_type() -> TargetType {
        TargetType::set(T::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Set(items) => items.iter().cloned().map(T::from_typed).collect(),
            _ => None,
        }
    }
}

/// Hash order, not the cell's order. Use [`TypedMap`] to keep it.
impl<K: TableType + Eq + Hash, V: TableType> TableType for HashMap<K, V> {
    fn target_type() -> TargetType {
        TargetType::map(K::target_type(), V::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| Some((K::from_typed(k.clone())?, V::from_typed(v.clone())?)))
                .collect(),
            _ => None,
        }
    }
}

/// Key order, not the cell's order. Use [`TypedMap`] to keep it.
impl<K: TableType + Ord, V: TableType> TableType for BTreeMap<K, V> {
    fn target_type() -> TargetType {
        TargetType::map(K::target_type(), V::target_type())
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| Some((K::from_typed(k.clone())?, V::from_typed(v.clone())?)))
                .collect(),
            _ => None,
        }
    }
}
