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

//! AEDA: punctuation marks scattered between the words of each sentence.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::errors::{Result, ZiError};
use crate::lexicon::ZiLexicon;
use crate::primitives::word::insert_punctuation;
use crate::random::ZiRandomSource;
use crate::transform::ZiTransform;
use crate::transforms::augment_words;
use crate::transforms::params::{check_probability, ZiParams};

/// Marks drawn from when no list is configured.
pub const DEFAULT_PUNCTUATION: &[&str] = &[".", ";", "?", ":", "!", ","];

#[derive(Debug, Clone)]
pub struct ZiAeda {
    insertion_prob: f64,
    punctuation: Vec<String>,
    ignore_first: bool,
}

impl ZiAeda {
    #[allow(non_snake_case)]
    pub fn new(insertion_prob: f64, punctuation: Vec<String>, ignore_first: bool) -> Result<Self> {
        let transform = ZiAeda {
            insertion_prob,
            punctuation,
            ignore_first,
        };
        transform.validate()?;
        Ok(transform)
    }

    /// Default marks with the given probability.
    #[allow(non_snake_case)]
    pub fn with_default_punctuation(insertion_prob: f64, ignore_first: bool) -> Result<Self> {
        ZiAeda::new(
            insertion_prob,
            DEFAULT_PUNCTUATION.iter().map(|s| s.to_string()).collect(),
            ignore_first,
        )
    }
}

impl ZiTransform for ZiAeda {
    fn name(&self) -> &'static str {
        "aeda"
    }

    fn validate(&self) -> Result<()> {
        check_probability("insertion_prob", self.insertion_prob)?;
        if self.punctuation.is_empty() {
            return Err(ZiError::invalid_argument("punctuation may not be empty"));
        }
        if self.punctuation.iter().any(|mark| mark.trim().is_empty()) {
            return Err(ZiError::invalid_argument(
                "punctuation marks must be non-empty strings",
            ));
        }
        Ok(())
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_words(text, |words| {
            insert_punctuation(words, self.insertion_prob, &self.punctuation, &mut *rng)
        })
    }

    fn params(&self) -> Value {
        json!({
            "insertion_prob": self.insertion_prob,
            "punctuation": self.punctuation,
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

#[allow(non_snake_case)]
pub fn aeda_factory(config: &Value, _lexicon: &Arc<ZiLexicon>) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("aeda", config)?;
    Ok(Box::new(ZiAeda::new(
        params.probability("insertion_prob", 0.3)?,
        params.strings("punctuation", DEFAULT_PUNCTUATION)?,
        params.flag("ignore_first", false)?,
    )?))
}
