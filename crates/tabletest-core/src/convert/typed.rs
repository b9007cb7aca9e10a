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

//! Converted, strongly-typed values.

use super::builtin::{BuiltinKind, Currency, Locale};
use super::temporal::{MonthDay, Period, YearMonth, ZonedDateTime};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use encoding_rs::Encoding;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// The result of converting a [`Value`](crate::Value) to a target type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Null for a nullable target.
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    BigInt(BigInt),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    String(String),
    Enum(EnumValue),
    Duration(TimeDelta),
    Period(Period),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    ZonedDateTime(ZonedDateTime),
    Instant(DateTime<Utc>),
    Year(i32),
    YearMonth(YearMonth),
    MonthDay(MonthDay),
    Uuid(Uuid),
    /// A URI reference, absolute or relative.
    Uri(String),
    Url(Url),
    Path(PathBuf),
    Charset(&'static Encoding),
    Locale(Locale),
    Currency(Currency),
    /// A type object looked up by name.
    Type(BuiltinKind),
    List(TypedList),
    Set(TypedSet),
    Map(TypedMap),
    /// A value produced by a user conversion function.
    Custom(CustomValue),
}

impl TypedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Wrap any user type as a custom value.
    pub fn custom<T: CustomType>(value: T) -> Self {
        Self::Custom(CustomValue::new(value))
    }

    /// Borrow a custom value as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(custom) => custom.downcast_ref(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Widen any fixed-width integer to `i128`, if it fits.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::I128(v) => Some(v),
            Self::Isize(v) => i128::try_from(v).ok(),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            Self::U128(v) => i128::try_from(v).ok(),
            Self::Usize(v) => i128::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TypedList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&TypedSet> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&TypedMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// A variant of a user-described enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub type_name: Arc<str>,
    pub variant: String,
}

/// Types that can be carried inside [`TypedValue::Custom`].
///
/// Implemented for every `Any + Debug + PartialEq + Send + Sync` type.
pub trait CustomType: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_dyn(&self, other: &dyn CustomType) -> bool;
}

impl<T: Any + fmt::Debug + PartialEq + Send + Sync> CustomType for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn CustomType) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

/// A shared, immutable user value with its type name.
#[derive(Clone)]
pub struct CustomValue {
    type_name: &'static str,
    value: Arc<dyn CustomType>,
}

impl CustomValue {
    pub fn new<T: CustomType>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        (*self.value).eq_dyn(&*other.value)
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}

/// An immutable list of converted values.
///
/// Derefs to a read-only slice; there is no way to change its elements.
/// The element type defaults to [`TypedValue`]; [`TableType`](super::TableType)
/// extracts `TypedList<T>` for any element type that is itself a table type.
///
/// ```compile_fail
/// use tabletest_core::{TypedList, TypedValue};
///
/// let list = TypedList::from(vec![TypedValue::I32(1)]);
/// list[0] = TypedValue::I32(2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypedList<T = TypedValue>(Arc<[T]>);

impl<T: Clone> TypedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }
}

impl<T> From<Vec<T>> for TypedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items.into())
    }
}

impl<T> FromIterator<T> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Deref for TypedList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An immutable, insertion-ordered set of converted values.
///
/// Elements that compare equal after conversion are kept once. Iteration
/// follows first-seen order, and equality compares that order too.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSet<T = TypedValue>(Arc<[T]>);

impl<T: PartialEq> TypedSet<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

impl<T: Clone> TypedSet<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }
}

impl<T: PartialEq> FromIterator<T> for TypedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = Vec::new();
        for value in iter {
            if !items.contains(&value) {
                items.push(value);
            }
        }
        Self(items.into())
    }
}

impl<T> Deref for TypedSet<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An immutable, insertion-ordered map of converted values.
///
/// Keys that compare equal after conversion are kept once, with the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedMap<K = TypedValue, V = TypedValue>(Arc<[(K, V)]>);

impl<K, V> TypedMap<K, V> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<K: PartialEq, V> TypedMap<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<V> TypedMap<TypedValue, V> {
    /// Look up an entry by a string key.
    pub fn get_str(&self, key: &str) -> Option<&V> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for TypedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<(K, V)> = Vec::new();
        for (key, value) in iter {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self(entries.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Money {
        cents: i64,
    }

    fn assert_send_sync<T: Send + Sync>() {}

    // ==================== Thread-safety tests ====================

    #[test]
    fn test_typed_values_are_shareable() {
        assert_send_sync::<TypedValue>();
        assert_send_sync::<TypedList>();
        assert_send_sync::<TypedMap>();
    }

    // ==================== Custom value tests ====================

    #[test]
    fn test_custom_downcast() {
        let v = TypedValue::custom(Money { cents: 150 });
        assert_eq!(v.downcast_ref::<Money>(), Some(&Money { cents: 150 }));
        assert_eq!(v.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_custom_equality() {
        assert_eq!(
            TypedValue::custom(Money { cents: 1 }),
            TypedValue::custom(Money { cents: 1 })
        );
        assert_ne!(
            TypedValue::custom(Money { cents: 1 }),
            TypedValue::custom(Money { cents: 2 })
        );
        assert_ne!(TypedValue::custom(1_i64), TypedValue::custom(Money { cents: 1 }));
    }

    #[test]
    fn test_custom_type_name() {
        let custom = CustomValue::new(Money { cents: 0 });
        assert!(custom.type_name().ends_with("Money"));
    }

    // ==================== Collection tests ====================

    #[test]
    fn test_list_is_shared_not_copied() {
        let list = TypedList::from(vec![TypedValue::I32(1), TypedValue::I32(2)]);
        let clone = list.clone();
        assert!(std::ptr::eq(list.as_ptr(), clone.as_ptr()));
        assert_eq!(clone.len(), 2);
    }

    #[test]
    fn test_set_dedups_converted_values() {
        let set: TypedSet = vec![TypedValue::I32(1), TypedValue::I32(1), TypedValue::I32(2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&TypedValue::I32(2)));
    }

    #[test]
    fn test_map_last_value_wins() {
        let map: TypedMap = vec![
            (TypedValue::String("a".into()), TypedValue::I32(1)),
            (TypedValue::String("a".into()), TypedValue::I32(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_str("a"), Some(&TypedValue::I32(2)));
    }

    #[test]
    fn test_as_i128() {
        assert_eq!(TypedValue::U8(7).as_i128(), Some(7));
        assert_eq!(TypedValue::U128(u128::MAX).as_i128(), None);
        assert_eq!(TypedValue::String("1".into()).as_i128(), None);
    }
}
