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

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::{json, Value};

use crate::errors::{Result, ZiError};
use crate::operator::ZiOperator;
use crate::random::{ZiRandom, ZiRandomSource};
use crate::record::{ZiRecord, ZiRecordBatch};
use crate::registry::ZiTransformRegistry;
use crate::transform::{execute_transform, ZiTransform};
use crate::transforms::params::check_probability;

/// Applies a text transform to one payload field of every record.
///
/// Record `i` draws from its own source seeded with `seed + i`, so the
/// output does not depend on how the batch is scheduled.
#[derive(Debug)]
pub struct ZiAugmentText {
    field: String,
    p: f64,
    seed: Option<u64>,
    transform: Box<dyn ZiTransform>,
}

impl ZiAugmentText {
    #[allow(non_snake_case)]
    pub fn new(
        field: impl Into<String>,
        p: f64,
        seed: Option<u64>,
        transform: Box<dyn ZiTransform>,
    ) -> Result<Self> {
        check_probability("p", p)?;
        Ok(ZiAugmentText {
            field: field.into(),
            p,
            seed,
            transform,
        })
    }

    pub fn transform(&self) -> &dyn ZiTransform {
        self.transform.as_ref()
    }

    fn augment_record(&self, index: usize, mut record: ZiRecord) -> Result<ZiRecord> {
        let mut rng = ZiRandom::from_seed_option(self.seed.map(|seed| seed.wrapping_add(index as u64)));
        if !rng.chance(self.p) {
            return Ok(record);
        }
        let Some(text) = record.text(&self.field) else {
            log::trace!("record {index} has no string field '{}'", self.field);
            return Ok(record);
        };
        let augmented = execute_transform(self.transform.as_ref(), text, &mut rng)?;
        record.set_text(&self.field, augmented);
        let metadata = record.metadata_mut();
        metadata.insert("augmented".to_string(), Value::Bool(true));
        metadata.insert(
            "augmentation".to_string(),
            Value::String(self.transform.name().to_string()),
        );
        Ok(record)
    }
}

impl ZiOperator for ZiAugmentText {
    fn name(&self) -> &'static str {
        "augment.text"
    }

    #[cfg(not(feature = "parallel"))]
    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        batch
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.augment_record(index, record))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        batch
            .into_par_iter()
            .enumerate()
            .map(|(index, record)| self.augment_record(index, record))
            .collect()
    }
}

/// Builds [`ZiAugmentText`] from
/// `{"field", "p", "seed", "transform": {"name", "config"}}`.
#[allow(non_snake_case)]
pub fn augment_text_factory(
    config: &Value,
    registry: &ZiTransformRegistry,
) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    let obj = config
        .as_object()
        .ok_or_else(|| ZiError::invalid_argument("augment.text config must be object"))?;
    // null reads as absent
    let get = |key: &str| obj.get(key).filter(|value| !value.is_null());

    let field = match get("field") {
        None => "text",
        Some(value) => value.as_str().ok_or_else(|| {
            ZiError::invalid_argument("augment.text 'field' must be a string")
        })?,
    };

    let p = match get("p") {
        None => 1.0,
        Some(value) => value
            .as_f64()
            .ok_or_else(|| ZiError::invalid_argument("augment.text 'p' must be a number"))?,
    };

    let seed = match get("seed") {
        None => None,
        Some(value) => Some(value.as_u64().ok_or_else(|| {
            ZiError::invalid_argument("augment.text 'seed' must be a non-negative integer")
        })?),
    };

    let entry = obj
        .get("transform")
        .ok_or_else(|| ZiError::invalid_argument("augment.text requires 'transform'"))?;
    let transform = registry.build_entry(entry)?;

    Ok(Box::new(ZiAugmentText::new(field, p, seed, transform)?))
}

/// Serializes an operator back to the shape read by [`augment_text_factory`].
#[allow(non_snake_case)]
pub fn augment_text_config(operator: &ZiAugmentText, registry: &ZiTransformRegistry) -> Value {
    json!({
        "field": operator.field,
        "p": operator.p,
        "seed": operator.seed,
        "transform": registry.to_config(operator.transform()),
    })
}
