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

//! Cell literals paired with the values they parse to.

use tabletest_core::Value;

fn s(text: &str) -> Value {
    Value::scalar(text)
}

/// (name, cell text, expected value) for the cell grammar.
pub fn cell_samples() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        ("blank", "", Value::Null),
        ("empty_single_quotes", "''", s("")),
        ("empty_double_quotes", "\"\"", s("")),
        ("plain", "hello", s("hello")),
        ("inner_spaces", "hello world", s("hello world")),
        ("single_quoted", "' padded '", s(" padded ")),
        ("double_quoted", "\"it's\"", s("it's")),
        ("no_escapes", "'a\\nb'", s("a\\nb")),
        ("apostrophe_in_word", "don't", s("don't")),
        ("quoted_brackets", "'[1, 2]'", s("[1, 2]")),
        ("empty_list", "[]", Value::list(vec![])),
        ("empty_map", "[:]", Value::map(vec![])),
        ("empty_set", "{}", Value::set(vec![])),
        ("list", "[1, 2]", Value::list(vec![s("1"), s("2")])),
        (
            "nested_list",
            "[a, [b, c], d]",
            Value::list(vec![s("a"), Value::list(vec![s("b"), s("c")]), s("d")]),
        ),
        (
            "set_of_lists",
            "{[a,b],[c,d]}",
            Value::set(vec![
                Value::list(vec![s("a"), s("b")]),
                Value::list(vec![s("c"), s("d")]),
            ]),
        ),
        (
            "set_dedup",
            "{3,1,2,1}",
            Value::set(vec![s("3"), s("1"), s("2")]),
        ),
        (
            "map",
            "[one: 1, two: 2]",
            Value::map(vec![(s("one"), s("1")), (s("two"), s("2"))]),
        ),
        (
            "nested_map",
            "[one: [a: bc], two: [d: ef, g: hi]]",
            Value::map(vec![
                (s("one"), Value::map(vec![(s("a"), s("bc"))])),
                (
                    s("two"),
                    Value::map(vec![(s("d"), s("ef")), (s("g"), s("hi"))]),
                ),
            ]),
        ),
        (
            "list_with_blank_element",
            "[1, , 2]",
            Value::list(vec![s("1"), Value::Null, s("2")]),
        ),
        (
            "quoted_element",
            "['a, b', c]",
            Value::list(vec![s("a, b"), s("c")]),
        ),
        (
            "map_with_quoted_key",
            "['a: b': c]",
            Value::map(vec![(s("a: b"), s("c"))]),
        ),
    ]
}
