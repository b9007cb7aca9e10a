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

//! Binding a case's cells to declared test parameters.

use crate::case::Case;
use crate::convert::{
    convert, ConverterRegistry, ExplicitConverter, TableType, TargetType, TypedValue,
};
use crate::error::{BindError, CellLocation};
use crate::value::Value;
use tracing::debug;

/// A declared test parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    target: TargetType,
    explicit: Option<ExplicitConverter>,
    scenario: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, target: TargetType) -> Self {
        Self {
            name: name.into(),
            target,
            explicit: None,
            scenario: false,
        }
    }

    /// A parameter whose target is the descriptor of `T`.
    pub fn of<T: TableType>(name: impl Into<String>) -> Self {
        Self::new(name, T::target_type())
    }

    pub fn with_converter(mut self, converter: ExplicitConverter) -> Self {
        self.explicit = Some(converter);
        self
    }

    /// Mark this parameter as receiving the scenario label.
    pub fn scenario(mut self) -> Self {
        self.scenario = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &TargetType {
        &self.target
    }

    pub fn converter(&self) -> Option<&ExplicitConverter> {
        self.explicit.as_ref()
    }

    pub fn is_scenario(&self) -> bool {
        self.scenario
    }
}

/// Converted arguments for one case.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    /// Label for the test invocation.
    pub scenario: Option<String>,
    /// One value per bound column, in column order.
    pub values: Vec<TypedValue>,
}

/// Convert a case's cells to the declared parameters.
///
/// Columns bind to parameters by position. A table with exactly one more
/// column than parameters has an undeclared label column first; it is not
/// bound and its text becomes the label. Parameters past the last column
/// are left to the caller.
///
/// # Examples
///
/// ```
/// use tabletest_core::{
///     bind_case, iterate_cases, parse_table, ConverterRegistry, Parameter, TypedValue,
/// };
///
/// let table = parse_table("Scenario | a | b\nsmall | 1 | 2").unwrap();
/// let params = [Parameter::of::<i32>("a"), Parameter::of::<i32>("b")];
/// let registry = ConverterRegistry::empty();
/// let case = iterate_cases(&table).next().unwrap();
/// let args = bind_case(&case, &params, &registry).unwrap();
/// assert_eq!(args.scenario.as_deref(), Some("small"));
/// assert_eq!(args.values, vec![TypedValue::I32(1), TypedValue::I32(2)]);
/// ```
pub fn bind_case(
    case: &Case<'_>,
    parameters: &[Parameter],
    registry: &ConverterRegistry,
) -> Result<Arguments, BindError> {
    let scenario_params = parameters.iter().filter(|p| p.is_scenario()).count();
    if scenario_params > 1 {
        return Err(BindError::MultipleScenarioParameters(scenario_params));
    }

    let columns = case.len();
    let (skip, mut label) = if columns > 0 && parameters.len() + 1 == columns {
        (1, case.value(0).and_then(label_text))
    } else if parameters.len() >= columns {
        (0, None)
    } else {
        return Err(BindError::NotEnoughParameters {
            columns,
            parameters: parameters.len(),
        });
    };

    let mut values = Vec::with_capacity(columns - skip);
    for (param, (column, value)) in parameters.iter().zip(case.values().iter().skip(skip)) {
        let mut scope = registry.scope();
        if let Some(converter) = param.converter() {
            scope = scope.with_explicit(converter);
        }
        let typed = convert(value, param.target(), scope).map_err(|e| {
            e.at(CellLocation {
                row: case.position(),
                line: case.line(),
                column: (*column).to_string(),
            })
        })?;
        if param.is_scenario() {
            label = label_text(value);
        }
        values.push(typed);
    }

    let scenario = label.or_else(|| case.scenario().map(str::to_string));
    debug!(
        row = case.position(),
        bound = values.len(),
        skipped = skip,
        scenario = scenario.as_deref().unwrap_or(""),
        "bound case"
    );
    Ok(Arguments { scenario, values })
}

fn label_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}
