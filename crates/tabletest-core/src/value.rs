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

//! Parsed cell values.

use std::fmt;

/// The parsed, type-agnostic form of a table cell.
///
/// Values are built once by the cell parser and never change afterwards.
/// Sets and maps keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A blank cell or element.
    Null,
    /// Plain or quoted text.
    Scalar(String),
    /// `[a, b]`
    List(Vec<Value>),
    /// `{a, b}`
    Set(ValueSet),
    /// `[k: v]`
    Map(ValueMap),
}

/// The structural shape of a non-null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    List,
    Set,
    Map,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::List => write!(f, "list"),
            Self::Set => write!(f, "set"),
            Self::Map => write!(f, "map"),
        }
    }
}

/// Ordered set of values; duplicates are dropped keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Value>", into = "Vec<Value>")
)]
pub struct ValueSet {
    items: Vec<Value>,
}

impl ValueSet {
    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// The first recorded element.
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut items: Vec<Value> = Vec::new();
        for value in iter {
            if !items.contains(&value) {
                items.push(value);
            }
        }
        Self { items }
    }
}

impl From<Vec<Value>> for ValueSet {
    fn from(items: Vec<Value>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ValueSet> for Vec<Value> {
    fn from(set: ValueSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Ordered map of values with unique keys.
///
/// Inserting a key that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(Value, Value)>", into = "Vec<(Value, Value)>")
)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
}

impl ValueMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up an entry by the text of a scalar key.
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut entries: Vec<(Value, Value)> = Vec::new();
        for (key, value) in iter {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self { entries }
    }
}

impl From<Vec<(Value, Value)>> for ValueMap {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ValueMap> for Vec<(Value, Value)> {
    fn from(map: ValueMap) -> Self {
        map.entries
    }
}

impl Value {
    /// Create a scalar value.
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    /// Create a list value.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Create a set value, dropping later duplicates.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Set(items.into_iter().collect())
    }

    /// Create a map value; a repeated key overwrites the earlier value.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value's shape, `None` for null.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Self::Null => None,
            Self::Scalar(_) => Some(Shape::Scalar),
            Self::List(_) => Some(Shape::List),
            Self::Set(_) => Some(Shape::Set),
            Self::Map(_) => Some(Shape::Map),
        }
    }

    /// Try to get the text of a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Characters that force a scalar to be quoted when written back as a literal.
const STRUCTURAL_CHARS: &[char] = &['|', ',', ':', '[', ']', '{', '}'];
const QUOTE_CHARS: &[char] = &['\'', '"'];

fn write_scalar(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let must_quote = text.is_empty()
        || text.starts_with("//")
        || text.trim() != text
        || text.starts_with(QUOTE_CHARS)
        || text.contains(STRUCTURAL_CHARS);
    match (must_quote, text.contains('\''), text.contains('"')) {
        (false, false, false) => write!(f, "{}", text),
        // A quote that does not start a token is plain text.
        (false, true, true) => write!(f, "{}", text),
        (_, true, false) => write!(f, "\"{}\"", text),
        _ => write!(f, "'{}'", text),
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Writes the value back as a table literal.
///
/// The literal parses back to an equal value, with two exceptions the
/// grammar cannot express: a list or set whose only element is `Null`
/// (written `[]` / `{}`, which parse as empty), and a scalar that needs
/// quoting and contains both quote characters.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Scalar(s) => write_scalar(f, s),
            Self::List(items) => {
                write!(f, "[")?;
                write_joined(f, items.iter())?;
                write!(f, "]")
            }
            Self::Set(set) => {
                write!(f, "{{")?;
                write_joined(f, set.iter())?;
                write!(f, "}}")
            }
            Self::Map(map) if map.is_empty() => write!(f, "[:]"),
            Self::Map(map) => {
                write!(f, "[")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::scalar(text)
    }

    // ==================== Set tests ====================

    #[test]
    fn test_set_keeps_first_occurrence_order() {
        let set = Value::set(vec![s("3"), s("1"), s("2"), s("1")]);
        let items: Vec<_> = set.as_set().unwrap().iter().cloned().collect();
        assert_eq!(items, vec![s("3"), s("1"), s("2")]);
    }

    #[test]
    fn test_set_first() {
        let set: ValueSet = vec![s("b"), s("a")].into();
        assert_eq!(set.first(), Some(&s("b")));
        assert!(set.contains(&s("a")));
    }

    #[test]
    fn test_empty_set() {
        let set = ValueSet::default();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
    }

    // ==================== Map tests ====================

    #[test]
    fn test_map_duplicate_key_overwrites_in_place() {
        let map = Value::map(vec![(s("a"), s("1")), (s("b"), s("2")), (s("a"), s("3"))]);
        let map = map.as_map().unwrap();
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![s("a"), s("b")]);
        assert_eq!(map.get(&s("a")), Some(&s("3")));
    }

    #[test]
    fn test_map_get_str() {
        let map: ValueMap = vec![(s("one"), s("1"))].into();
        assert_eq!(map.get_str("one"), Some(&s("1")));
        assert_eq!(map.get_str("two"), None);
    }

    // ==================== Accessor tests ====================

    #[test]
    fn test_shape() {
        assert_eq!(Value::Null.shape(), None);
        assert_eq!(s("x").shape(), Some(Shape::Scalar));
        assert_eq!(Value::list(vec![]).shape(), Some(Shape::List));
        assert_eq!(Value::set(vec![]).shape(), Some(Shape::Set));
        assert_eq!(Value::map(vec![]).shape(), Some(Shape::Map));
    }

    #[test]
    fn test_as_accessors() {
        assert_eq!(s("x").as_str(), Some("x"));
        assert_eq!(Value::Null.as_str(), None);
        assert!(Value::list(vec![s("a")]).as_list().is_some());
        assert!(s("a").as_list().is_none());
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_null_differs_from_empty_scalar() {
        assert_ne!(Value::Null, s(""));
    }

    // ==================== Display tests ====================

    #[test]
    fn test_display_plain() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(s("abc").to_string(), "abc");
    }

    #[test]
    fn test_display_quotes_special_text() {
        assert_eq!(s("").to_string(), "''");
        assert_eq!(s("a|b").to_string(), "'a|b'");
        assert_eq!(s("it's").to_string(), "\"it's\"");
        assert_eq!(s(" padded ").to_string(), "' padded '");
        assert_eq!(s("say \"hi\", ok").to_string(), "'say \"hi\", ok'");
        assert_eq!(s("'lead").to_string(), "\"'lead\"");
    }

    #[test]
    fn test_display_collections() {
        let v = Value::list(vec![s("a"), Value::set(vec![s("b"), s("c")])]);
        assert_eq!(v.to_string(), "[a, {b, c}]");
        assert_eq!(Value::map(vec![]).to_string(), "[:]");
        assert_eq!(Value::list(vec![]).to_string(), "[]");
        assert_eq!(Value::set(vec![]).to_string(), "{}");
        let m = Value::map(vec![(s("one"), Value::list(vec![s("1")]))]);
        assert_eq!(m.to_string(), "[one: [1]]");
    }
}
