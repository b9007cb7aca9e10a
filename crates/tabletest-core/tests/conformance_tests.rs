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

//! TableTest conformance tests.
//!
//! End-to-end checks of the table format, the cell grammar and the
//! conversion rules, using the shared fixtures.

use tabletest_core::{
    bind_case, convert, convert_as, iterate_cases, parse_table, parse_value, BuiltinKind,
    ConversionErrorKind, ConversionFn, ConverterRegistry, Parameter, ParseErrorKind, ScalarType,
    ScopeLevel, TargetType, TypedMap, TypedSet, TypedValue, Value,
};
use tabletest_test::domain::{ambiguous_registry, date_registry, Date};
use tabletest_test::fixtures::{self, errors};

fn s(text: &str) -> Value {
    Value::scalar(text)
}

fn int() -> TargetType {
    TargetType::builtin(BuiltinKind::I32)
}

// =============================================================================
// Table format
// =============================================================================

/// Two data rows zip with the header into two cases.
#[test]
fn test_sum_table_cases() {
    let table = parse_table(fixtures::sum_table()).unwrap();
    let cases: Vec<_> = iterate_cases(&table).collect();
    assert_eq!(cases.len(), 2);
    assert_eq!(
        cases[0].values(),
        &[("a", &s("1")), ("b", &s("2")), ("sum", &s("3"))]
    );
    assert_eq!(
        cases[1].values(),
        &[("a", &s("4")), ("b", &s("5")), ("sum", &s("9"))]
    );
}

/// Converting the sum table's cells to integers yields (1, 2, 3) and (4, 5, 9).
#[test]
fn test_sum_table_converts_to_integers() {
    let table = parse_table(fixtures::sum_table()).unwrap();
    let registry = ConverterRegistry::empty();
    let params = [
        Parameter::new("a", int()),
        Parameter::new("b", int()),
        Parameter::new("sum", int()),
    ];
    let rows: Vec<Vec<TypedValue>> = iterate_cases(&table)
        .map(|case| bind_case(&case, &params, &registry).unwrap().values)
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![TypedValue::I32(1), TypedValue::I32(2), TypedValue::I32(3)],
            vec![TypedValue::I32(4), TypedValue::I32(5), TypedValue::I32(9)],
        ]
    );
}

/// Comment and blank lines leave the cases unchanged.
#[test]
fn test_comment_lines_are_invisible() {
    let with_comments = parse_table(fixtures::comment_table()).unwrap();
    let stripped = parse_table(fixtures::comment_table_stripped()).unwrap();
    let a: Vec<_> = iterate_cases(&with_comments).map(|c| c.values().to_vec()).collect();
    let b: Vec<_> = iterate_cases(&stripped).map(|c| c.values().to_vec()).collect();
    assert_eq!(a, b);
    assert_eq!(with_comments.headers(), stripped.headers());
}

/// Inline `//` is part of the cell, not a comment.
#[test]
fn test_inline_slashes_are_text() {
    let table = parse_table("url\nhttp://example.com // not a comment").unwrap();
    assert_eq!(
        table.rows()[0].value(0),
        Some(&s("http://example.com // not a comment"))
    );
}

/// Short rows are padded with nulls.
#[test]
fn test_short_rows_padded() {
    let table = parse_table(fixtures::short_rows_table()).unwrap();
    let first = iterate_cases(&table).next().unwrap();
    assert_eq!(first.get("a"), Some(&s("1")));
    assert_eq!(first.get("b"), Some(&Value::Null));
    assert_eq!(first.get("c"), Some(&Value::Null));
}

/// The `Scenario` column labels each case.
#[test]
fn test_scenario_labels() {
    let table = parse_table(fixtures::scenario_table()).unwrap();
    assert_eq!(table.scenario_column(), Some(0));
    let names: Vec<String> = iterate_cases(&table).map(|c| c.display_name()).collect();
    assert_eq!(names, vec!["zero", "positive number", "negative number"]);
}

/// Iteration restarts from the first row on every call.
#[test]
fn test_iteration_is_restartable() {
    let table = parse_table(fixtures::scenario_table()).unwrap();
    let first: Vec<_> = iterate_cases(&table).map(|c| c.position()).collect();
    let second: Vec<_> = iterate_cases(&table).map(|c| c.position()).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
}

/// Every invalid table sample fails with its expected kind.
#[test]
fn test_invalid_table_samples() {
    for (name, text, kind) in errors::invalid_table_samples() {
        match parse_table(text) {
            Ok(_) => panic!("sample '{}' should fail", name),
            Err(err) => assert_eq!(err.kind, kind, "sample '{}': {}", name, err),
        }
    }
}

/// A parse error reports the line of the offending row.
#[test]
fn test_parse_error_position() {
    let err = parse_table("a | b\n1 | 2\n\n3 | [4").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnbalancedBracket);
    assert_eq!(err.line, 4);
    assert_eq!(err.column, Some(5));
}

// =============================================================================
// Cell grammar
// =============================================================================

/// Every cell sample parses to its expected value.
#[test]
fn test_cell_samples() {
    for (name, text, expected) in fixtures::cell_samples() {
        let parsed = parse_value(text).unwrap_or_else(|e| panic!("sample '{}': {}", name, e));
        assert_eq!(parsed, expected, "sample '{}'", name);
    }
}

/// Every invalid cell sample fails with its expected kind.
#[test]
fn test_invalid_cell_samples() {
    for (name, text, kind) in errors::invalid_cell_samples() {
        match parse_value(text) {
            Ok(v) => panic!("sample '{}' parsed to {:?}", name, v),
            Err(err) => assert_eq!(err.kind, kind, "sample '{}'", name),
        }
    }
}

/// Blank and `''` stay distinct through conversion.
#[test]
fn test_blank_and_empty_string_distinct() {
    let registry = ConverterRegistry::empty();
    let target = TargetType::string().nullable();
    let blank = convert(&parse_value("").unwrap(), &target, registry.scope()).unwrap();
    let empty = convert(&parse_value("''").unwrap(), &target, registry.scope()).unwrap();
    assert_eq!(blank, TypedValue::Null);
    assert_eq!(empty, TypedValue::String(String::new()));
}

/// A quoted cell in a table keeps its pipe.
#[test]
fn test_quoted_table_cells() {
    let table = parse_table(fixtures::quoted_table()).unwrap();
    let texts: Vec<Option<&Value>> = table.rows().iter().map(|r| r.value(0)).collect();
    assert_eq!(texts[0], Some(&s("")));
    assert_eq!(texts[1], Some(&Value::Null));
    assert_eq!(texts[2], Some(&s("a | b")));
    assert_eq!(texts[3], Some(&s("[not, a, list]")));
    assert_eq!(texts[4], Some(&s("don't")));
}

/// Printed cells parse back to the same value, quotes inside words included.
#[test]
fn test_printed_cells_reparse() {
    let values = [
        Value::list(vec![s("it's \"x\""), Value::Null, s("1")]),
        Value::map(vec![(s("k"), s("a'b\"c")), (s("'q"), s("say \"hi\", ok"))]),
        Value::set(vec![s("// not a comment"), s(""), s(" x ")]),
    ];
    for value in values {
        let text = value.to_string();
        assert_eq!(parse_value(&text).unwrap(), value, "{}", text);
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Every failing conversion sample fails with its expected kind.
#[test]
fn test_conversion_failure_samples() {
    let registry = ConverterRegistry::empty();
    for (name, text, target, kind) in errors::conversion_failure_samples() {
        let value = parse_value(text).unwrap();
        match convert(&value, &target, registry.scope()) {
            Ok(v) => panic!("sample '{}' converted to {:?}", name, v),
            Err(err) => assert_eq!(err.kind, kind, "sample '{}': {}", name, err),
        }
    }
}

/// A set against an integer target converts only its first element.
#[test]
fn test_applicable_value_set() {
    let registry = ConverterRegistry::empty();
    let value = Value::set(vec![s("-1"), s("0"), s("1"), s("1000")]);
    let typed = convert(&value, &int(), registry.scope()).unwrap();
    assert_eq!(typed, TypedValue::I32(-1));
}

/// Value-set cells bind to scalar parameters row by row.
#[test]
fn test_value_set_table_binds() {
    let table = parse_table(fixtures::value_set_table()).unwrap();
    let registry = ConverterRegistry::empty();
    let params = [
        Parameter::new("Scenario", TargetType::string()),
        Parameter::new("number", int()),
        Parameter::new("even?", TargetType::builtin(BuiltinKind::Bool)),
    ];
    for case in iterate_cases(&table) {
        let args = bind_case(&case, &params, &registry).unwrap();
        let n = match args.values[1] {
            TypedValue::I32(n) => n,
            ref other => panic!("unexpected {:?}", other),
        };
        assert_eq!(args.values[2], TypedValue::Bool(n % 2 == 0));
    }
}

/// Built-in kinds convert from one row of text.
#[test]
fn test_builtin_kinds_row() {
    let table = parse_table(fixtures::builtin_kinds_table()).unwrap();
    let case = iterate_cases(&table).next().unwrap();
    let registry = ConverterRegistry::empty();
    let get = |column: &str, kind: BuiltinKind| {
        convert(case.get(column).unwrap(), &TargetType::builtin(kind), registry.scope()).unwrap()
    };
    assert_eq!(get("bool", BuiltinKind::Bool), TypedValue::Bool(true));
    assert_eq!(get("int", BuiltinKind::I64), TypedValue::I64(-42));
    assert_eq!(get("hex", BuiltinKind::U8), TypedValue::U8(255));
    assert_eq!(get("float", BuiltinKind::F64), TypedValue::F64(1000.0));
    assert_eq!(get("char", BuiltinKind::Char), TypedValue::Char('x'));
    assert!(matches!(get("big", BuiltinKind::BigInt), TypedValue::BigInt(_)));
    assert!(matches!(get("decimal", BuiltinKind::Decimal), TypedValue::Decimal(_)));
    assert!(matches!(
        get("duration", BuiltinKind::Duration),
        TypedValue::Duration(d) if d.num_minutes() == 90
    ));
    assert!(matches!(get("date", BuiltinKind::Date), TypedValue::Date(_)));
    assert!(matches!(get("uuid", BuiltinKind::Uuid), TypedValue::Uuid(_)));
    assert!(matches!(get("url", BuiltinKind::Url), TypedValue::Url(_)));
}

/// The nested map cell converts to a map of maps.
#[test]
fn test_nested_map_conversion() {
    let table = parse_table(fixtures::nested_map_table()).unwrap();
    let cell = table.rows()[0].value(0).unwrap();
    let registry = ConverterRegistry::empty();
    let typed: std::collections::HashMap<String, std::collections::HashMap<String, String>> =
        convert_as(cell, registry.scope()).unwrap();
    assert_eq!(typed["one"]["a"], "bc");
    assert_eq!(typed["two"].len(), 2);
}

/// Typed sets and maps hand over the cell's order.
#[test]
fn test_typed_collections_keep_cell_order() {
    let registry = ConverterRegistry::empty();

    let cell = parse_value("{30, 10, 20, 5, 99, 1, 42, 10}").unwrap();
    let set: TypedSet<i32> = convert_as(&cell, registry.scope()).unwrap();
    assert_eq!(set.to_vec(), vec![30, 10, 20, 5, 99, 1, 42]);

    let cell = parse_value("[z: 1, m: 2, a: 3]").unwrap();
    let map: TypedMap<String, u8> = convert_as(&cell, registry.scope()).unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "m", "a"]);
    assert_eq!(map.get(&"m".to_string()), Some(&2));
}

/// Dates convert through functions taking a string and a map.
#[test]
fn test_dates_through_conversion_functions() {
    let table = parse_table(fixtures::dates_table()).unwrap();
    let registry = date_registry();
    let params = [Parameter::of::<Date>("text"), Parameter::of::<Date>("parts")];
    for case in iterate_cases(&table) {
        let args = bind_case(&case, &params, &registry).unwrap();
        assert_eq!(args.values[0], args.values[1], "{:?}", args.scenario);
    }
}

/// Two equally eligible functions at one scope are reported, not guessed.
#[test]
fn test_ambiguous_functions() {
    let registry = ambiguous_registry();
    let err = convert_as::<Date>(&s("2024-01-01"), registry.scope()).unwrap_err();
    assert_eq!(err.kind, ConversionErrorKind::MultipleCandidates);
    assert!(err.candidates.contains(&"date_from_string".to_string()));
    assert!(err.candidates.contains(&"parse_date_again".to_string()));
}

/// A function in the nearest enclosing scope wins over an external source.
#[test]
fn test_enclosing_scope_before_source() {
    let marker = |name: &'static str, day: u32| {
        ConversionFn::new(name, TargetType::string(), ScalarType::of::<Date>(), move |_| {
            Ok(TypedValue::custom(Date::new(2000, 1, day)))
        })
    };
    let registry = ConverterRegistry::builder()
        .source(ScopeLevel::new("External").with(marker("external", 2)))
        .enclosing(ScopeLevel::new("Inner").with(marker("inner", 1)))
        .enclosing(ScopeLevel::new("Outer").with(marker("outer", 3)))
        .build();
    let date: Date = convert_as(&s("anything"), registry.scope()).unwrap();
    assert_eq!(date.day, 1);
}

/// Converted collections share storage and expose no mutation.
#[test]
fn test_converted_collections_are_shared() {
    let registry = ConverterRegistry::empty();
    let typed = convert(
        &parse_value("[1, 2, 3]").unwrap(),
        &TargetType::list(int()),
        registry.scope(),
    )
    .unwrap();
    let list = typed.as_list().unwrap().clone();
    let again = typed.as_list().unwrap();
    assert!(std::ptr::eq(list.as_ptr(), again.as_ptr()));
    let mut owned = list.to_vec();
    owned.push(TypedValue::I32(4));
    assert_eq!(typed.as_list().map(|l| l.len()), Some(3));
}

/// Binding errors name the failing cell.
#[test]
fn test_bind_error_location() {
    let table = parse_table("Scenario | n\nok | 1\nbroken | x").unwrap();
    let registry = ConverterRegistry::empty();
    let params = [Parameter::new("n", int())];
    let results: Vec<_> = iterate_cases(&table)
        .map(|case| bind_case(&case, &params, &registry))
        .collect();
    assert!(results[0].is_ok());
    let message = results[1].as_ref().unwrap_err().to_string();
    assert!(message.contains("row 2 (line 3), column 'n'"), "{}", message);
}
