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

//! Conversion functions and the scopes that hold them.
//!
//! A [`ConverterRegistry`] is an ordered list of scope levels: enclosing
//! declaration scopes first (innermost first), then registered external
//! sources in the order they were added. It is built once, shared behind
//! an `Arc`, and never changes afterwards except for its lookup cache.

use super::native::TableType;
use super::target::{ScalarType, TargetType};
use super::typed::{CustomType, TypedValue};
use crate::error::BoxError;
use crate::limits::Limits;
use crate::value::{Shape, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Result of user conversion logic.
pub type ConvertResult = Result<TypedValue, BoxError>;

type InvokeFn = dyn Fn(TypedValue) -> ConvertResult + Send + Sync;
type ExplicitFn = dyn Fn(&Value, &TargetType) -> ConvertResult + Send + Sync;

/// A single-argument conversion function.
///
/// Its declared input type decides which value shapes it accepts; its
/// output type decides which targets it can produce. The input is
/// converted to the declared type before the function runs.
#[derive(Clone)]
pub struct ConversionFn {
    name: Arc<str>,
    input: TargetType,
    output: ScalarType,
    invoke: Arc<InvokeFn>,
}

impl ConversionFn {
    pub fn new<F>(
        name: impl AsRef<str>,
        input: TargetType,
        output: impl Into<ScalarType>,
        f: F,
    ) -> Self
    where
        F: Fn(TypedValue) -> ConvertResult + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.as_ref()),
            input,
            output: output.into(),
            invoke: Arc::new(f),
        }
    }

    /// A function from a native input type to a user type `O`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabletest_core::{ConversionFn, TargetType};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Celsius(f64);
    ///
    /// let f = ConversionFn::typed("celsius", |degrees: f64| Ok::<_, String>(Celsius(degrees)));
    /// assert_eq!(f.input(), &TargetType::builtin(tabletest_core::BuiltinKind::F64));
    /// ```
    pub fn typed<I, O, E, F>(name: impl AsRef<str>, f: F) -> Self
    where
        I: TableType,
        O: CustomType,
        E: Into<BoxError>,
        F: Fn(I) -> Result<O, E> + Send + Sync + 'static,
    {
        let fn_name: Arc<str> = Arc::from(name.as_ref());
        let label = Arc::clone(&fn_name);
        Self {
            name: fn_name,
            input: I::target_type(),
            output: ScalarType::of::<O>(),
            invoke: Arc::new(move |value: TypedValue| {
                let input = I::from_typed(value).ok_or_else(|| -> BoxError {
                    format!("'{}' received a value of the wrong type", label).into()
                })?;
                f(input).map(TypedValue::custom).map_err(Into::into)
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &TargetType {
        &self.input
    }

    pub fn output(&self) -> &ScalarType {
        &self.output
    }

    /// Whether this function takes values of `shape` and produces `target`.
    pub fn is_candidate(&self, shape: Shape, target: &ScalarType) -> bool {
        self.input.shape() == shape && &self.output == target
    }

    pub fn call(&self, input: TypedValue) -> ConvertResult {
        (self.invoke)(input)
    }
}

impl fmt::Debug for ConversionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionFn")
            .field("name", &self.name)
            .field("input", &self.input)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

/// A converter declared on one parameter.
///
/// It receives the raw parsed value and the target type, and wins over
/// every other conversion route.
#[derive(Clone)]
pub struct ExplicitConverter {
    name: Arc<str>,
    accepts: Option<Shape>,
    invoke: Arc<ExplicitFn>,
}

impl ExplicitConverter {
    pub fn new<F>(name: impl AsRef<str>, f: F) -> Self
    where
        F: Fn(&Value, &TargetType) -> ConvertResult + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.as_ref()),
            accepts: None,
            invoke: Arc::new(f),
        }
    }

    /// Only apply to values of the given shape.
    pub fn accepting(mut self, shape: Shape) -> Self {
        self.accepts = Some(shape);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn applies_to(&self, value: &Value) -> bool {
        match self.accepts {
            Some(shape) => value.shape() == Some(shape),
            None => true,
        }
    }

    pub fn call(&self, value: &Value, target: &TargetType) -> ConvertResult {
        (self.invoke)(value, target)
    }
}

impl fmt::Debug for ExplicitConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplicitConverter")
            .field("name", &self.name)
            .field("accepts", &self.accepts)
            .finish_non_exhaustive()
    }
}

/// Where a scope level sits in the search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopePosition {
    /// A declaration scope enclosing the table.
    Enclosing,
    /// An explicitly registered conversion source.
    Source,
}

impl fmt::Display for ScopePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enclosing => write!(f, "enclosing"),
            Self::Source => write!(f, "source"),
        }
    }
}

/// One named group of conversion functions.
#[derive(Debug, Clone)]
pub struct ScopeLevel {
    name: Arc<str>,
    functions: Vec<ConversionFn>,
}

impl ScopeLevel {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            functions: Vec::new(),
        }
    }

    /// Add a function, builder style.
    pub fn with(mut self, function: ConversionFn) -> Self {
        self.functions.push(function);
        self
    }

    pub fn push(&mut self, function: ConversionFn) {
        self.functions.push(function);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn functions(&self) -> &[ConversionFn] {
        &self.functions
    }
}

/// The outcome of searching the registry for a shape and target.
#[derive(Debug)]
pub enum Candidates<'r> {
    None,
    One {
        level: &'r ScopeLevel,
        position: ScopePosition,
        function: &'r ConversionFn,
    },
    Many {
        level: &'r ScopeLevel,
        position: ScopePosition,
        functions: Vec<&'r ConversionFn>,
    },
}

#[derive(Debug, Clone)]
enum Lookup {
    Missing,
    Found { level: usize, functions: Vec<usize> },
}

type CacheKey = (Shape, ScalarType);

/// Ordered, immutable collection of conversion scopes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tabletest_core::{ConversionFn, ConverterRegistry, ScopeLevel, TargetType, TypedValue};
///
/// let registry = Arc::new(
///     ConverterRegistry::builder()
///         .enclosing(ScopeLevel::new("tests").with(ConversionFn::new(
///             "shout",
///             TargetType::string(),
///             tabletest_core::ScalarType::named("Shout"),
///             |v| Ok(TypedValue::String(v.as_str().unwrap_or_default().to_uppercase())),
///         )))
///         .build(),
/// );
/// assert_eq!(registry.levels().len(), 1);
/// ```
#[derive(Debug)]
pub struct ConverterRegistry {
    levels: Vec<(ScopePosition, ScopeLevel)>,
    max_conversion_depth: usize,
    cache: RwLock<HashMap<CacheKey, Lookup>>,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConverterRegistry {
    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder::new()
    }

    /// A registry with no conversion functions; only built-ins apply.
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// All levels in search order.
    pub fn levels(&self) -> impl Iterator<Item = (ScopePosition, &ScopeLevel)> + ExactSizeIterator {
        self.levels.iter().map(|(position, level)| (*position, level))
    }

    pub fn max_conversion_depth(&self) -> usize {
        self.max_conversion_depth
    }

    /// A scope over this registry with no explicit converter.
    pub fn scope(&self) -> ConversionScope<'_> {
        ConversionScope::new(self)
    }

    /// Find the conversion functions at the first level that has any
    /// function taking `shape` and producing `target`.
    pub fn candidates(&self, shape: Shape, target: &ScalarType) -> Candidates<'_> {
        let key = (shape, target.clone());
        let cached = self.cache.read().get(&key).cloned();
        let lookup = match cached {
            Some(lookup) => lookup,
            None => {
                let lookup = self.search(shape, target);
                trace!(%shape, %target, ?lookup, "caching conversion lookup");
                self.cache.write().entry(key).or_insert(lookup).clone()
            }
        };

        match lookup {
            Lookup::Missing => Candidates::None,
            Lookup::Found { level, functions } => {
                let (position, scope) = &self.levels[level];
                let mut found: Vec<&ConversionFn> =
                    functions.iter().map(|&i| &scope.functions[i]).collect();
                if found.len() == 1 {
                    Candidates::One {
                        level: scope,
                        position: *position,
                        function: found.remove(0),
                    }
                } else {
                    Candidates::Many {
                        level: scope,
                        position: *position,
                        functions: found,
                    }
                }
            }
        }
    }

    fn search(&self, shape: Shape, target: &ScalarType) -> Lookup {
        for (level_idx, (_, level)) in self.levels.iter().enumerate() {
            let functions: Vec<usize> = level
                .functions
                .iter()
                .enumerate()
                .filter(|(_, f)| f.is_candidate(shape, target))
                .map(|(i, _)| i)
                .collect();
            if !functions.is_empty() {
                return Lookup::Found {
                    level: level_idx,
                    functions,
                };
            }
        }
        Lookup::Missing
    }

    #[cfg(test)]
    fn cached_lookups(&self) -> usize {
        self.cache.read().len()
    }
}

/// Builder for [`ConverterRegistry`].
#[derive(Debug, Clone)]
pub struct ConverterRegistryBuilder {
    enclosing: Vec<ScopeLevel>,
    sources: Vec<ScopeLevel>,
    max_conversion_depth: usize,
}

impl Default for ConverterRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistryBuilder {
    pub fn new() -> Self {
        Self {
            enclosing: Vec::new(),
            sources: Vec::new(),
            max_conversion_depth: Limits::default().max_conversion_depth,
        }
    }

    /// Add an enclosing declaration scope. Add the innermost scope first.
    pub fn enclosing(mut self, level: ScopeLevel) -> Self {
        self.enclosing.push(level);
        self
    }

    /// Add an external conversion source. Sources are searched in the order added.
    pub fn source(mut self, level: ScopeLevel) -> Self {
        self.sources.push(level);
        self
    }

    pub fn max_conversion_depth(mut self, depth: usize) -> Self {
        self.max_conversion_depth = depth;
        self
    }

    /// Take the conversion depth from a set of limits.
    pub fn limits(mut self, limits: &Limits) -> Self {
        self.max_conversion_depth = limits.max_conversion_depth;
        self
    }

    pub fn build(self) -> ConverterRegistry {
        let levels = self
            .enclosing
            .into_iter()
            .map(|level| (ScopePosition::Enclosing, level))
            .chain(
                self.sources
                    .into_iter()
                    .map(|level| (ScopePosition::Source, level)),
            )
            .collect();
        ConverterRegistry {
            levels,
            max_conversion_depth: self.max_conversion_depth,
            cache: RwLock::new(HashMap::new()),
        }
    }
}

/// The conversion scope for one value: a registry plus an optional
/// explicit converter.
#[derive(Debug, Clone, Copy)]
pub struct ConversionScope<'a> {
    registry: &'a ConverterRegistry,
    explicit: Option<&'a ExplicitConverter>,
}

impl<'a> ConversionScope<'a> {
    pub fn new(registry: &'a ConverterRegistry) -> Self {
        Self {
            registry,
            explicit: None,
        }
    }

    /// Put an explicit converter in front of every other route.
    pub fn with_explicit(mut self, converter: &'a ExplicitConverter) -> Self {
        self.explicit = Some(converter);
        self
    }

    pub fn registry(&self) -> &'a ConverterRegistry {
        self.registry
    }

    pub fn explicit(&self) -> Option<&'a ExplicitConverter> {
        self.explicit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::builtin::BuiltinKind;

    fn func(name: &str, input: TargetType, output: &str) -> ConversionFn {
        ConversionFn::new(name, input, ScalarType::named(output), |v| Ok(v))
    }

    fn assert_send_sync<T: Send + Sync>() {}

    // ==================== Candidate search tests ====================

    #[test]
    fn test_registry_is_shareable() {
        assert_send_sync::<ConverterRegistry>();
        assert_send_sync::<ExplicitConverter>();
    }

    #[test]
    fn test_no_candidates() {
        let registry = ConverterRegistry::empty();
        let found = registry.candidates(Shape::Scalar, &ScalarType::named("Date"));
        assert!(matches!(found, Candidates::None));
    }

    #[test]
    fn test_enclosing_before_source() {
        let registry = ConverterRegistry::builder()
            .source(ScopeLevel::new("external").with(func("ext", TargetType::string(), "Date")))
            .enclosing(ScopeLevel::new("inner").with(func("inner", TargetType::string(), "Date")))
            .build();
        match registry.candidates(Shape::Scalar, &ScalarType::named("Date")) {
            Candidates::One {
                function, position, ..
            } => {
                assert_eq!(function.name(), "inner");
                assert_eq!(position, ScopePosition::Enclosing);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_innermost_enclosing_first() {
        let registry = ConverterRegistry::builder()
            .enclosing(ScopeLevel::new("inner").with(func("a", TargetType::string(), "Date")))
            .enclosing(ScopeLevel::new("outer").with(func("b", TargetType::string(), "Date")))
            .build();
        match registry.candidates(Shape::Scalar, &ScalarType::named("Date")) {
            Candidates::One { level, .. } => assert_eq!(level.name(), "inner"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_two_at_same_level_is_many() {
        let registry = ConverterRegistry::builder()
            .enclosing(
                ScopeLevel::new("tests")
                    .with(func("a", TargetType::string(), "Date"))
                    .with(func("b", TargetType::builtin(BuiltinKind::I64), "Date")),
            )
            .build();
        match registry.candidates(Shape::Scalar, &ScalarType::named("Date")) {
            Candidates::Many { functions, .. } => assert_eq!(functions.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_shape_governs_eligibility() {
        let map_input = TargetType::map(TargetType::string(), TargetType::string());
        let registry = ConverterRegistry::builder()
            .enclosing(ScopeLevel::new("tests").with(func("from_map", map_input, "Date")))
            .build();
        let target = ScalarType::named("Date");
        assert!(matches!(registry.candidates(Shape::Scalar, &target), Candidates::None));
        assert!(matches!(registry.candidates(Shape::Map, &target), Candidates::One { .. }));
    }

    #[test]
    fn test_lookups_are_cached() {
        let registry = ConverterRegistry::builder()
            .enclosing(ScopeLevel::new("tests").with(func("a", TargetType::string(), "Date")))
            .build();
        let target = ScalarType::named("Date");
        registry.candidates(Shape::Scalar, &target);
        registry.candidates(Shape::Scalar, &target);
        registry.candidates(Shape::List, &target);
        assert_eq!(registry.cached_lookups(), 2);
    }

    // ==================== Explicit converter tests ====================

    #[test]
    fn test_explicit_shape_filter() {
        let conv = ExplicitConverter::new("c", |_, _| Ok(TypedValue::Null)).accepting(Shape::List);
        assert!(conv.applies_to(&Value::list(vec![])));
        assert!(!conv.applies_to(&Value::scalar("x")));
        let any = ExplicitConverter::new("any", |_, _| Ok(TypedValue::Null));
        assert!(any.applies_to(&Value::scalar("x")));
    }

    #[test]
    fn test_scope_with_explicit() {
        let registry = ConverterRegistry::empty();
        let conv = ExplicitConverter::new("c", |_, _| Ok(TypedValue::Bool(true)));
        let scope = registry.scope().with_explicit(&conv);
        assert_eq!(scope.explicit().map(|c| c.name()), Some("c"));
        assert!(registry.scope().explicit().is_none());
    }

    #[test]
    fn test_builder_depth() {
        let registry = ConverterRegistry::builder().max_conversion_depth(3).build();
        assert_eq!(registry.max_conversion_depth(), 3);
        let registry = ConverterRegistry::builder().limits(&Limits::unlimited()).build();
        assert_eq!(registry.max_conversion_depth(), usize::MAX);
    }
}
