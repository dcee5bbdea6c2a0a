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
use crate::primitives::word::replace_synonyms;
use crate::random::ZiRandomSource;
use crate::transform::ZiTransform;
use crate::transforms::augment_words;
use crate::transforms::params::{check_probability, ZiParams};

/// Replaces non-stopwords by thesaurus synonyms.
#[derive(Debug, Clone)]
pub struct ZiSynonymReplacement {
    replacement_prob: f64,
    ignore_first: bool,
    lexicon: Arc<ZiLexicon>,
}

impl ZiSynonymReplacement {
    #[allow(non_snake_case)]
    pub fn new(replacement_prob: f64, ignore_first: bool, lexicon: Arc<ZiLexicon>) -> Result<Self> {
        let transform = ZiSynonymReplacement {
            replacement_prob,
            ignore_first,
            lexicon,
        };
        transform.validate()?;
        Ok(transform)
    }
}

impl ZiTransform for ZiSynonymReplacement {
    fn name(&self) -> &'static str {
        "synonym_replacement"
    }

    fn validate(&self) -> Result<()> {
        check_probability("replacement_prob", self.replacement_prob)
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_words(text, |words| {
            replace_synonyms(words, self.replacement_prob, &mut *rng, &self.lexicon)
        })
    }

    fn params(&self) -> Value {
        json!({
            "replacement_prob": self.replacement_prob,
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

#[allow(non_snake_case)]
pub fn synonym_replacement_factory(
    config: &Value,
    lexicon: &Arc<ZiLexicon>,
) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("synonym_replacement", config)?;
    Ok(Box::new(ZiSynonymReplacement::new(
        params.probability("replacement_prob", 0.2)?,
        params.flag("ignore_first", false)?,
        Arc::clone(lexicon),
    )?))
}
