//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zimun.
//! The Zimun project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Typed reads over a factory's JSON configuration.
//!
//! Readers only check the JSON type and fall back to the default on a
//! missing key. Range checks belong to each transform's `validate`.

use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};
use crate::primitives::ZiMinimum;

/// Rejects probabilities outside `[0, 1]`, NaN included.
pub fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ZiError::invalid_argument(format!(
            "{name} must be between 0 and 1. Got: {value}"
        )));
    }
    Ok(())
}

/// Borrowed view of a transform configuration object.
#[derive(Debug, Clone, Copy)]
pub struct ZiParams<'a> {
    transform: &'a str,
    entries: Option<&'a Map<String, Value>>,
}

impl<'a> ZiParams<'a> {
    /// Accepts an object or `null`; anything else is rejected.
    pub fn parse(transform: &'a str, config: &'a Value) -> Result<Self> {
        let entries = match config {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => {
                return Err(ZiError::invalid_argument(format!(
                    "{transform} config must be an object, got {other}"
                )))
            }
        };
        Ok(ZiParams { transform, entries })
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    fn mistyped(&self, key: &str, expected: &str, value: &Value) -> ZiError {
        ZiError::invalid_argument(format!(
            "{} '{key}' must be {expected}, got {value}",
            self.transform
        ))
    }

    pub fn probability(&self, key: &str, default: f64) -> Result<f64> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| self.mistyped(key, "a number", value)),
        }
    }

    /// Non-negative integer. Negative and fractional numbers are rejected.
    pub fn count(&self, key: &str, default: usize) -> Result<usize> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .map(|count| count as usize)
                .ok_or_else(|| self.mistyped(key, "a non-negative integer", value)),
        }
    }

    /// Integers are counts, other numbers are ratios.
    pub fn minimum(&self, key: &str, default: ZiMinimum) -> Result<ZiMinimum> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        if let Some(count) = value.as_u64() {
            return Ok(ZiMinimum::Count(count as usize));
        }
        if value.is_i64() {
            return Err(self.mistyped(key, "a non-negative integer or a ratio", value));
        }
        value
            .as_f64()
            .map(ZiMinimum::Ratio)
            .ok_or_else(|| self.mistyped(key, "a non-negative integer or a ratio", value))
    }

    pub fn flag(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.mistyped(key, "a boolean", value)),
        }
    }

    pub fn strings(&self, key: &str, default: &[&str]) -> Result<Vec<String>> {
        let Some(value) = self.get(key) else {
            return Ok(default.iter().map(|s| s.to_string()).collect());
        };
        let items = value
            .as_array()
            .ok_or_else(|| self.mistyped(key, "an array of strings", value))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mistyped(key, "an array of strings", value))
            })
            .collect()
    }
}
