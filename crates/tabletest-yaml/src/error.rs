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

//! Error types for YAML rendering.

use tabletest_core::ParseError;
use thiserror::Error;

/// Errors that can occur while rendering a table as YAML.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YamlError {
    /// The table text did not parse
    #[error("table parse error: {0}")]
    Parse(#[from] ParseError),

    /// YAML serialization failed
    #[error("YAML serialization error: {0}")]
    Serialize(String),
}

impl From<serde_yaml::Error> for YamlError {
    fn from(err: serde_yaml::Error) -> Self {
        YamlError::Serialize(err.to_string())
    }
}
