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

use std::sync::Arc;

use serde_json::{json, Value};

use crate::errors::Result;
use crate::lexicon::ZiLexicon;
use crate::primitives::word::insert_synonyms;
use crate::random::ZiRandomSource;
use crate::transform::ZiTransform;
use crate::transforms::augment_words;
use crate::transforms::params::{check_probability, ZiParams};

/// Inserts synonyms of a sentence's own words at random positions.
#[derive(Debug, Clone)]
pub struct ZiRandomInsertion {
    insertion_prob: f64,
    n_times: usize,
    ignore_first: bool,
    lexicon: Arc<ZiLexicon>,
}

impl ZiRandomInsertion {
    #[allow(non_snake_case)]
    pub fn new(
        insertion_prob: f64,
        n_times: usize,
        ignore_first: bool,
        lexicon: Arc<ZiLexicon>,
    ) -> Result<Self> {
        let transform = ZiRandomInsertion {
            insertion_prob,
            n_times,
            ignore_first,
            lexicon,
        };
        transform.validate()?;
        Ok(transform)
    }
}

impl ZiTransform for ZiRandomInsertion {
    fn name(&self) -> &'static str {
        "random_insertion"
    }

    fn validate(&self) -> Result<()> {
        check_probability("insertion_prob", self.insertion_prob)
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_words(text, |words| {
            insert_synonyms(
                words,
                self.insertion_prob,
                self.n_times,
                &mut *rng,
                &self.lexicon,
            )
        })
    }

    fn params(&self) -> Value {
        json!({
            "insertion_prob": self.insertion_prob,
            "n_times": self.n_times,
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

#[allow(non_snake_case)]
pub fn random_insertion_factory(
    config: &Value,
    lexicon: &Arc<ZiLexicon>,
) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("random_insertion", config)?;
    Ok(Box::new(ZiRandomInsertion::new(
        params.probability("insertion_prob", 0.2)?,
        params.count("n_times", 1)?,
        params.flag("ignore_first", false)?,
        Arc::clone(lexicon),
    )?))
}
