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

//! Type-directed conversion of parsed values.
//!
//! Resolution order for one value:
//!
//! 1. null: the null value for nullable targets, otherwise an error
//! 2. the parameter's explicit converter, if it accepts the value
//! 3. collections, element by element; a set against a non-set target
//!    converts its first element
//! 4. scalars: strings pass through, then built-in parsing, then a
//!    conversion function from the registry
//!
//! Conversion keeps no state between calls. The registry is only read.

use super::builtin::BuiltinKind;
use super::native::TableType;
use super::registry::{
    Candidates, ConversionFn, ConversionScope, ConverterRegistry, ExplicitConverter,
};
use super::target::{ScalarType, TargetType, TypeKind};
use super::typed::{EnumValue, TypedList, TypedMap, TypedSet, TypedValue};
use crate::error::ConversionError;
use crate::value::{Shape, Value, ValueMap, ValueSet};
use tracing::{debug, trace};

/// Convert a parsed value to `target`.
///
/// # Examples
///
/// ```
/// use tabletest_core::{
///     convert, parse_value, BuiltinKind, ConverterRegistry, TargetType, TypedValue,
/// };
///
/// let registry = ConverterRegistry::empty();
/// let value = parse_value("{-1, 0, 1}").unwrap();
/// let typed = convert(&value, &TargetType::builtin(BuiltinKind::I32), registry.scope()).unwrap();
/// assert_eq!(typed, TypedValue::I32(-1));
/// ```
pub fn convert(
    value: &Value,
    target: &TargetType,
    scope: ConversionScope<'_>,
) -> Result<TypedValue, ConversionError> {
    Resolver {
        registry: scope.registry(),
    }
    .convert(value, target, scope.explicit(), 0)
}

/// Convert a parsed value straight to a Rust type.
pub fn convert_as<T: TableType>(
    value: &Value,
    scope: ConversionScope<'_>,
) -> Result<T, ConversionError> {
    let target = T::target_type();
    let typed = convert(value, &target, scope)?;
    T::from_typed(typed).ok_or_else(|| {
        ConversionError::type_mismatch(
            format!("converted value is not a {}", std::any::type_name::<T>()),
            target.to_string(),
        )
    })
}

struct Resolver<'a> {
    registry: &'a ConverterRegistry,
}

impl Resolver<'_> {
    fn convert(
        &self,
        value: &Value,
        target: &TargetType,
        explicit: Option<&ExplicitConverter>,
        depth: usize,
    ) -> Result<TypedValue, ConversionError> {
        let max_depth = self.registry.max_conversion_depth();
        if depth > max_depth {
            return Err(ConversionError::no_applicable_conversion(
                format!("conversion depth limit of {} exceeded", max_depth),
                target.to_string(),
            ));
        }

        let shape = match value.shape() {
            Some(shape) => shape,
            None => {
                return if target.is_nullable() {
                    Ok(TypedValue::Null)
                } else {
                    Err(ConversionError::null_for_primitive(target.to_string()))
                };
            }
        };

        if let Some(converter) = explicit.filter(|c| c.applies_to(value)) {
            debug!(converter = converter.name(), %target, "using explicit converter");
            return converter.call(value, target).map_err(|cause| {
                ConversionError::function_failure(converter.name(), cause, target.to_string())
            });
        }

        match (value, target.kind()) {
            (Value::Scalar(text), TypeKind::Scalar(ty)) => {
                self.convert_scalar(value, text, ty, target, depth)
            }
            (Value::List(items), TypeKind::List(element)) => {
                trace!(len = items.len(), %target, "converting list");
                let converted = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        self.convert(item, element, None, depth + 1)
                            .map_err(|e| e.within(format!("[{}]", i)))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TypedValue::List(TypedList::from(converted)))
            }
            (Value::Set(items), TypeKind::Set(element)) => {
                trace!(len = items.len(), %target, "converting set");
                let converted = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        self.convert(item, element, None, depth + 1)
                            .map_err(|e| e.within(format!("{{{}}}", i)))
                    })
                    .collect::<Result<TypedSet, _>>()?;
                Ok(TypedValue::Set(converted))
            }
            (Value::Map(entries), TypeKind::Map(key_type, value_type)) => {
                self.convert_map(entries, key_type, value_type, target, depth)
            }
            (Value::Set(items), TypeKind::Scalar(ty)) => {
                match self.via_function(value, shape, ty, target, depth) {
                    Some(result) => result,
                    None => self.convert_value_set(items, target, explicit, depth),
                }
            }
            (Value::Set(items), _) => self.convert_value_set(items, target, explicit, depth),
            (Value::List(_) | Value::Map(_), TypeKind::Scalar(ty)) => {
                match self.via_function(value, shape, ty, target, depth) {
                    Some(result) => result,
                    None => Err(ConversionError::type_mismatch(
                        format!("a {} value cannot be converted to {}", shape, target),
                        target.to_string(),
                    )),
                }
            }
            _ => Err(ConversionError::type_mismatch(
                format!("a {} value cannot be converted to {}", shape, target),
                target.to_string(),
            )),
        }
    }

    fn convert_scalar(
        &self,
        value: &Value,
        text: &str,
        ty: &ScalarType,
        target: &TargetType,
        depth: usize,
    ) -> Result<TypedValue, ConversionError> {
        let reason = match ty {
            ScalarType::Builtin(BuiltinKind::String) => {
                return Ok(TypedValue::String(text.to_string()))
            }
            ScalarType::Builtin(kind) => match kind.parse(text) {
                Ok(typed) => {
                    trace!(%kind, "built-in conversion");
                    return Ok(typed);
                }
                Err(reason) => {
                    trace!(%kind, %reason, "built-in conversion failed");
                    reason
                }
            },
            ScalarType::Enum(enum_type) => match enum_type.variant(text) {
                Some(variant) => {
                    return Ok(TypedValue::Enum(EnumValue {
                        type_name: enum_type.name_arc(),
                        variant: variant.to_string(),
                    }))
                }
                None => format!(
                    "'{}' is not one of {}: {}",
                    text,
                    enum_type.name(),
                    enum_type.variants().join(", ")
                ),
            },
            ScalarType::Named(_) => {
                format!("no conversion function produces {} from '{}'", target, text)
            }
        };

        match self.via_function(value, Shape::Scalar, ty, target, depth) {
            Some(result) => result,
            None => Err(ConversionError::no_applicable_conversion(reason, target.to_string())),
        }
    }

    fn convert_map(
        &self,
        entries: &ValueMap,
        key_type: &TargetType,
        value_type: &TargetType,
        target: &TargetType,
        depth: usize,
    ) -> Result<TypedValue, ConversionError> {
        trace!(len = entries.len(), %target, "converting map");
        let converted = entries
            .iter()
            .map(|(key, value)| {
                let segment = || format!("[{:?}]", key.to_string());
                let k = self
                    .convert(key, key_type, None, depth + 1)
                    .map_err(|e| e.within(segment()))?;
                let v = self
                    .convert(value, value_type, None, depth + 1)
                    .map_err(|e| e.within(segment()))?;
                Ok((k, v))
            })
            .collect::<Result<TypedMap, ConversionError>>()?;
        Ok(TypedValue::Map(converted))
    }

    fn convert_value_set(
        &self,
        items: &ValueSet,
        target: &TargetType,
        explicit: Option<&ExplicitConverter>,
        depth: usize,
    ) -> Result<TypedValue, ConversionError> {
        match items.first() {
            Some(first) => {
                debug!(
                    size = items.len(),
                    %target,
                    "applicable value set, converting first element"
                );
                self.convert(first, target, explicit, depth + 1)
                    .map_err(|e| e.within("{0}"))
            }
            None => Err(ConversionError::no_applicable_conversion(
                "an empty value set has no element to convert",
                target.to_string(),
            )),
        }
    }

    /// Look for a conversion function; `None` when the registry has none.
    fn via_function(
        &self,
        value: &Value,
        shape: Shape,
        ty: &ScalarType,
        target: &TargetType,
        depth: usize,
    ) -> Option<Result<TypedValue, ConversionError>> {
        match self.registry.candidates(shape, ty) {
            Candidates::None => None,
            Candidates::One {
                level,
                position,
                function,
            } => {
                debug!(
                    function = function.name(),
                    level = level.name(),
                    %position,
                    %target,
                    "conversion function selected"
                );
                Some(self.invoke(function, value, target, depth))
            }
            Candidates::Many {
                level, functions, ..
            } => {
                let names: Vec<String> = functions.iter().map(|f| f.name().to_string()).collect();
                debug!(
                    level = level.name(),
                    candidates = ?names,
                    %target,
                    "ambiguous conversion functions"
                );
                Some(Err(ConversionError::multiple_candidates(
                    level.name(),
                    names,
                    target.to_string(),
                )))
            }
        }
    }

    fn invoke(
        &self,
        function: &ConversionFn,
        value: &Value,
        target: &TargetType,
        depth: usize,
    ) -> Result<TypedValue, ConversionError> {
        let input = self.convert(value, function.input(), None, depth + 1)?;
        function
            .call(input)
            .map_err(|cause| {
                ConversionError::function_failure(function.name(), cause, target.to_string())
            })
    }
}
