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

//! # Zimun Transform Module
//!
//! This module defines the text transform trait and the helpers that run a
//! transform against plain text or against a JSON object of named targets.
//!
//! ## Transform Design
//!
//! A transform is an immutable, validated parameter set. It holds no random
//! state: every call receives the [`ZiRandomSource`] to draw from, so one
//! transform can be shared between threads while each caller keeps its own
//! reproducible source.
//!
//! ```rust
//! use zimun::random::ZiRandom;
//! use zimun::transform::execute_transform;
//! use zimun::transforms::ZiRandomSwapSentence;
//!
//! let swap = ZiRandomSwapSentence::new(1, false).unwrap();
//! let mut rng = ZiRandom::seeded(42);
//! let out = execute_transform(&swap, "하나. 둘.", &mut rng).unwrap();
//! assert!(out == "하나. 둘." || out == "둘. 하나.");
//! ```
//!
//! ## Boundary
//!
//! [`call_transform`] accepts the dict-shaped contract used by augmentation
//! pipelines: an object whose string values are all augmented with the same
//! source.

use std::fmt::Debug;

use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};
use crate::random::ZiRandomSource;
use crate::text::{first_sentence, prepend_sentence, remove_first_sentence};

/// Contract shared by every text augmentation.
pub trait ZiTransform: Debug + Send + Sync {
    /// Registry name of the transform (`"random_deletion"`, ...).
    fn name(&self) -> &'static str;

    /// Checks the parameter contract. Constructors call this, so a built
    /// transform always validates.
    fn validate(&self) -> Result<()>;

    /// Augments `text`. Degenerate input yields degenerate output, never an
    /// error.
    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String>;

    /// Parameters in the shape accepted by the transform's factory.
    fn params(&self) -> Value;

    /// Whether the first sentence is held out of the augmentation.
    fn ignore_first(&self) -> bool {
        false
    }
}

/// Runs a transform on `text`, honouring `ignore_first`.
///
/// Empty or whitespace-only text is returned as an empty string without
/// consuming any randomness.
#[allow(non_snake_case)]
pub fn execute_transform(
    transform: &dyn ZiTransform,
    text: &str,
    rng: &mut dyn ZiRandomSource,
) -> Result<String> {
    if text.trim().is_empty() {
        log::debug!("{} skipped: empty text", transform.name());
        return Ok(String::new());
    }
    if !transform.ignore_first() {
        return transform.apply(text, rng);
    }
    match first_sentence(text) {
        Some(first) => {
            let rest = remove_first_sentence(text);
            let augmented = if rest.is_empty() {
                rest
            } else {
                transform.apply(&rest, rng)?
            };
            Ok(prepend_sentence(&first, &augmented))
        }
        None => transform.apply(text, rng),
    }
}

/// Applies a transform to every string target of a JSON object.
///
/// Returns an object with the same keys. Targets are processed in key order
/// from one source, so a fixed seed gives a fixed result.
#[allow(non_snake_case)]
pub fn call_transform(
    transform: &dyn ZiTransform,
    data: &Value,
    rng: &mut dyn ZiRandomSource,
) -> Result<Value> {
    let targets = data.as_object().ok_or_else(|| {
        ZiError::invalid_argument(format!(
            "{} expects an object of named text targets",
            transform.name()
        ))
    })?;

    let mut augmented = Map::with_capacity(targets.len());
    for (key, value) in targets {
        let text = value.as_str().ok_or_else(|| {
            ZiError::invalid_argument(format!(
                "{} target '{key}' must be a string",
                transform.name()
            ))
        })?;
        augmented.insert(
            key.clone(),
            Value::String(execute_transform(transform, text, rng)?),
        );
    }
    Ok(Value::Object(augmented))
}
