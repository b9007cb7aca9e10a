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

//! Valid table texts.

/// Two rows of integer sums.
pub fn sum_table() -> &'static str {
    "a | b | sum\n\
     1 | 2 | 3\n\
     4 | 5 | 9\n"
}

/// A labelled table with a `Scenario` column.
pub fn scenario_table() -> &'static str {
    "Scenario        | input | expected\n\
     zero            | 0     | 0\n\
     positive number | 5     | 25\n\
     negative number | -3    | 9\n"
}

/// One cell holding a map of maps.
pub fn nested_map_table() -> &'static str {
    "map\n\
     [one: [a: bc], two: [d: ef, g: hi]]\n"
}

/// The same rows as [`comment_table_stripped`], with comments and blank lines.
pub fn comment_table() -> &'static str {
    "\n\
     a      | b\n\
     \n\
     [1]    | 1\n\
     // [1, 2] | 2\n\
     \n\
     [1, 2, 3] | 3\n\
     \n"
}

/// [`comment_table`] with the comment and blank lines removed.
pub fn comment_table_stripped() -> &'static str {
    "a      | b\n\
     [1]    | 1\n\
     [1, 2, 3] | 3\n"
}

/// A value-set column: each cell lists alternatives for one argument.
pub fn value_set_table() -> &'static str {
    "Scenario      | number                 | even?\n\
     small numbers | {-2, 0, 2}             | true\n\
     odd numbers   | {-1, 1, 1001}          | false\n"
}

/// Lists, sets, maps and empties side by side.
pub fn collections_table() -> &'static str {
    "list        | set       | map              | empty list | empty map | empty set\n\
     [1, 2, 3]   | {a, b, a} | [x: 1, y: 2]     | []         | [:]       | {}\n\
     [[1], [2]]  | {[a], [b]} | [k: [1, 2]]     | []         | [:]       | {}\n"
}

/// Quoting, explicit empty strings and blank cells.
pub fn quoted_table() -> &'static str {
    "text            | note\n\
     ''              | explicit empty string\n\
                     | blank means null\n\
     'a | b'         | quoted pipe\n\
     \"[not, a, list]\" | quoted brackets\n\
     don't           | apostrophe inside a word\n"
}

/// Rows shorter than the header are padded with blanks.
pub fn short_rows_table() -> &'static str {
    "a | b | c\n\
     1\n\
     1 | 2\n\
     1 | 2 | 3\n"
}

/// A header and no data rows.
pub fn header_only_table() -> &'static str {
    "first | second\n"
}

/// Built-in scalar kinds, one per column.
pub fn builtin_kinds_table() -> &'static str {
    "bool | int  | hex  | big                        | float | decimal | char | duration | date       | uuid                                 | url\n\
     true | -42  | 0xFF | 123456789012345678901234567 | 1e3   | 0.1     | x    | PT1H30M  | 2024-02-29 | 67e55044-10b1-426f-9247-bb680e5fe0c8 | https://example.com/a\n"
}

/// Dates written as text and as maps, for conversion function fixtures.
pub fn dates_table() -> &'static str {
    "Scenario   | text       | parts\n\
     leap day   | 2024-02-29 | [year: 2024, month: 2, day: 29]\n\
     new year   | 2025-01-01 | [year: 2025, month: 1, day: 1]\n"
}
