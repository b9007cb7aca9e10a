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

//! Target type descriptors.

use super::builtin::BuiltinKind;
use crate::value::Shape;
use std::fmt;
use std::sync::Arc;

/// Identity of a scalar target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// A type with a built-in conversion.
    Builtin(BuiltinKind),
    /// An enumeration converted by variant name.
    Enum(EnumType),
    /// A user type, reachable only through conversion functions.
    Named(Arc<str>),
}

impl ScalarType {
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(Arc::from(name.as_ref()))
    }

    /// A named type identified by the Rust type name of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::named(std::any::type_name::<T>())
    }
}

impl From<BuiltinKind> for ScalarType {
    fn from(kind: BuiltinKind) -> Self {
        Self::Builtin(kind)
    }
}

impl From<EnumType> for ScalarType {
    fn from(ty: EnumType) -> Self {
        Self::Enum(ty)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(kind) => write!(f, "{}", kind),
            Self::Enum(ty) => write!(f, "{}", ty.name()),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// An enumeration described by its name and variant names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumType {
    name: Arc<str>,
    variants: Arc<[String]>,
}

impl EnumType {
    pub fn new<I, S>(name: impl AsRef<str>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Arc::from(name.as_ref()),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// The variant spelled exactly like `text`.
    pub fn variant(&self, text: &str) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| v.as_str() == text)
            .map(String::as_str)
    }
}

/// The structural kind of a target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar(ScalarType),
    List(Box<TargetType>),
    Set(Box<TargetType>),
    Map(Box<TargetType>, Box<TargetType>),
}

/// A declared parameter type: kind plus nullability.
///
/// # Examples
///
/// ```
/// use tabletest_core::{BuiltinKind, TargetType};
///
/// let ints = TargetType::list(TargetType::builtin(BuiltinKind::I32));
/// let ty = TargetType::map(TargetType::string(), ints);
/// assert_eq!(ty.to_string(), "Map<String, List<i32>>");
/// assert_eq!(TargetType::builtin(BuiltinKind::I32).nullable().to_string(), "Option<i32>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetType {
    kind: TypeKind,
    nullable: bool,
}

impl TargetType {
    pub fn scalar(ty: impl Into<ScalarType>) -> Self {
        Self {
            kind: TypeKind::Scalar(ty.into()),
            nullable: false,
        }
    }

    pub fn builtin(kind: BuiltinKind) -> Self {
        Self::scalar(kind)
    }

    pub fn string() -> Self {
        Self::builtin(BuiltinKind::String)
    }

    /// A user type reachable only through conversion functions.
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::scalar(ScalarType::named(name))
    }

    /// A user type named after the Rust type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::scalar(ScalarType::of::<T>())
    }

    pub fn enumeration(ty: EnumType) -> Self {
        Self::scalar(ty)
    }

    pub fn list(element: TargetType) -> Self {
        Self {
            kind: TypeKind::List(Box::new(element)),
            nullable: false,
        }
    }

    pub fn set(element: TargetType) -> Self {
        Self {
            kind: TypeKind::Set(Box::new(element)),
            nullable: false,
        }
    }

    pub fn map(key: TargetType, value: TargetType) -> Self {
        Self {
            kind: TypeKind::Map(Box::new(key), Box::new(value)),
            nullable: false,
        }
    }

    /// The same type, accepting null.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The value shape this type takes directly.
    pub fn shape(&self) -> Shape {
        match self.kind {
            TypeKind::Scalar(_) => Shape::Scalar,
            TypeKind::List(_) => Shape::List,
            TypeKind::Set(_) => Shape::Set,
            TypeKind::Map(..) => Shape::Map,
        }
    }

    pub fn scalar_type(&self) -> Option<&ScalarType> {
        match &self.kind {
            TypeKind::Scalar(ty) => Some(ty),
            _ => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "Option<")?;
        }
        match &self.kind {
            TypeKind::Scalar(ty) => write!(f, "{}", ty)?,
            TypeKind::List(e) => write!(f, "List<{}>", e)?,
            TypeKind::Set(e) => write!(f, "Set<{}>", e)?,
            TypeKind::Map(k, v) => write!(f, "Map<{}, {}>", k, v)?,
        }
        if self.nullable {
            write!(f, ">")?;
        }
        Ok(())
    }
}
