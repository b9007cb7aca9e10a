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

//! Conversion of parsed values into typed test arguments.
//!
//! - [`target`]: target type descriptors
//! - [`builtin`]: the static table of built-in scalar conversions
//! - [`temporal`]: calendar and duration parsing
//! - [`typed`]: converted values and immutable collections
//! - [`registry`]: conversion functions and their scopes
//! - [`native`]: Rust types with a known target descriptor

pub mod builtin;
pub mod native;
pub mod registry;
mod resolver;
pub mod target;
pub mod temporal;
pub mod typed;

pub use builtin::{BuiltinKind, Currency, Locale};
pub use native::TableType;
pub use registry::{
    Candidates, ConversionFn, ConversionScope, ConvertResult, ConverterRegistry,
    ConverterRegistryBuilder, ExplicitConverter, ScopeLevel, ScopePosition,
};
pub use resolver::{convert, convert_as};
pub use target::{EnumType, ScalarType, TargetType, TypeKind};
pub use temporal::{MonthDay, Period, YearMonth, ZonedDateTime};
pub use typed::{CustomType, CustomValue, EnumValue, TypedList, TypedMap, TypedSet, TypedValue};
