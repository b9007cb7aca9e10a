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

//! Property-based tests for table and cell parsing.
//!
//! # Properties Tested
//!
//! 1. **Determinism**: parsing the same text twice gives equal results
//! 2. **Set Order**: set elements keep first-seen order without duplicates
//! 3. **Split Consistency**: written values parse back to the same tree
//! 4. **Row Alignment**: every row has one cell per header
//! 5. **Integer Conversion**: in-range integers convert exactly, out-of-range fail

use proptest::prelude::*;
use tabletest_core::{
    convert, iterate_cases, parse_table, parse_value, BuiltinKind, ConverterRegistry, TargetType,
    TypedValue, Value,
};
use tabletest_test::fixtures::builders::TableBuilder;

/// Scalars without quote characters, so writing them back never needs escapes.
fn scalar_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ,:|\\[\\]{}-]{0,8}"
}

fn key_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ,:]{1,6}"
}

/// Values whose literal form parses back to the same value.
///
/// Nulls only appear as map values, where the written form keeps them.
fn value_tree() -> impl Strategy<Value = Value> {
    let leaf = scalar_text().prop_map(Value::Scalar);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
            prop::collection::vec(
                (
                    key_text().prop_map(Value::Scalar),
                    prop_oneof![Just(Value::Null), inner],
                ),
                0..4
            )
            .prop_map(Value::map),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Parsing is a pure function of the text.
    #[test]
    fn prop_cell_parsing_is_deterministic(text in ".{0,40}") {
        prop_assert_eq!(parse_value(&text), parse_value(&text));
    }

    /// Property: Table parsing is a pure function of the text.
    #[test]
    fn prop_table_parsing_is_deterministic(text in "[a-z0-9|,\\[\\]{}' \n]{0,80}") {
        prop_assert_eq!(parse_table(&text), parse_table(&text));
    }

    /// Property: A set keeps the first occurrence of each element, in order.
    #[test]
    fn prop_set_order_is_first_seen(items in prop::collection::vec(0u8..10, 0..12)) {
        let text = format!(
            "{{{}}}",
            items.iter().map(u8::to_string).collect::<Vec<_>>().join(",")
        );
        let parsed = parse_value(&text).unwrap();
        let mut expected: Vec<Value> = Vec::new();
        for item in &items {
            let v = Value::scalar(item.to_string());
            if !expected.contains(&v) {
                expected.push(v);
            }
        }
        let actual: Vec<Value> = parsed.as_set().unwrap().iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: Writing a value as a literal and parsing it gives it back.
    #[test]
    fn prop_literal_reparses(value in value_tree()) {
        let text = value.to_string();
        let parsed = parse_value(&text);
        prop_assert!(parsed.is_ok(), "'{}' failed: {:?}", text, parsed.err());
        prop_assert_eq!(parsed.unwrap(), value, "text was '{}'", text);
    }

    /// Property: Values written into table rows come back cell by cell.
    #[test]
    fn prop_rows_keep_alignment(
        rows in prop::collection::vec((key_text(), value_tree(), value_tree()), 1..5)
    ) {
        let mut builder = TableBuilder::new(["id", "x", "y"]);
        let mut expected = Vec::new();
        for (id, x, y) in rows {
            let id = Value::Scalar(id);
            builder = builder.value_row([&id, &x, &y]);
            expected.push(vec![id, x, y]);
        }
        let table = builder.parse().unwrap();
        prop_assert_eq!(table.row_count(), expected.len());
        for (case, row) in iterate_cases(&table).zip(&expected) {
            prop_assert_eq!(case.len(), 3);
            let values: Vec<Value> = case.values().iter().map(|(_, v)| (*v).clone()).collect();
            prop_assert_eq!(&values, row);
        }
    }

    /// Property: A list literal has one element per top-level comma.
    #[test]
    fn prop_list_length_matches(items in prop::collection::vec("[a-z0-9]{1,4}", 1..8)) {
        let text = format!("[{}]", items.join(", "));
        let parsed = parse_value(&text).unwrap();
        prop_assert_eq!(parsed.as_list().map(<[Value]>::len), Some(items.len()));
    }

    /// Property: Any i64 converts exactly to an i64 target.
    #[test]
    fn prop_i64_converts(n: i64) {
        let registry = ConverterRegistry::empty();
        let typed = convert(
            &Value::scalar(n.to_string()),
            &TargetType::builtin(BuiltinKind::I64),
            registry.scope(),
        );
        prop_assert_eq!(typed.unwrap(), TypedValue::I64(n));
    }

    /// Property: Values outside i8 never convert to i8.
    #[test]
    fn prop_i8_never_truncates(n in prop_oneof![-100_000i64..-129, 128i64..100_000]) {
        let registry = ConverterRegistry::empty();
        let typed = convert(
            &Value::scalar(n.to_string()),
            &TargetType::builtin(BuiltinKind::I8),
            registry.scope(),
        );
        prop_assert!(typed.is_err());
    }
}
