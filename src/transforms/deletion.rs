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
use crate::primitives::sentence::delete_sentences;
use crate::primitives::word::delete_words;
use crate::primitives::ZiMinimum;
use crate::random::ZiRandomSource;
use crate::transform::ZiTransform;
use crate::transforms::params::{check_probability, ZiParams};
use crate::transforms::{augment_sentences, augment_words};

/// Randomly deletes words inside each sentence.
#[derive(Debug, Clone)]
pub struct ZiRandomDeletion {
    deletion_prob: f64,
    min_words_each_sentence: ZiMinimum,
    ignore_first: bool,
}

impl ZiRandomDeletion {
    #[allow(non_snake_case)]
    pub fn new(
        deletion_prob: f64,
        min_words_each_sentence: ZiMinimum,
        ignore_first: bool,
    ) -> Result<Self> {
        let transform = ZiRandomDeletion {
            deletion_prob,
            min_words_each_sentence,
            ignore_first,
        };
        transform.validate()?;
        Ok(transform)
    }
}

impl ZiTransform for ZiRandomDeletion {
    fn name(&self) -> &'static str {
        "random_deletion"
    }

    fn validate(&self) -> Result<()> {
        check_probability("deletion_prob", self.deletion_prob)?;
        self.min_words_each_sentence
            .validate("min_words_each_sentence")
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_words(text, |words| {
            Ok(delete_words(
                words,
                self.deletion_prob,
                self.min_words_each_sentence,
                &mut *rng,
            ))
        })
    }

    fn params(&self) -> Value {
        json!({
            "deletion_prob": self.deletion_prob,
            "min_words_each_sentence": self.min_words_each_sentence.to_value(),
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

/// Randomly deletes whole sentences.
#[derive(Debug, Clone)]
pub struct ZiRandomDeletionSentence {
    deletion_prob: f64,
    min_sentences: ZiMinimum,
    ignore_first: bool,
}

impl ZiRandomDeletionSentence {
    #[allow(non_snake_case)]
    pub fn new(
        deletion_prob: f64,
        min_sentences: ZiMinimum,
        ignore_first: bool,
    ) -> Result<Self> {
        let transform = ZiRandomDeletionSentence {
            deletion_prob,
            min_sentences,
            ignore_first,
        };
        transform.validate()?;
        Ok(transform)
    }
}

impl ZiTransform for ZiRandomDeletionSentence {
    fn name(&self) -> &'static str {
        "random_deletion_sentence"
    }

    fn validate(&self) -> Result<()> {
        check_probability("deletion_prob", self.deletion_prob)?;
        self.min_sentences.validate("min_sentences")
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_sentences(text, |sentences| {
            Ok(delete_sentences(
                sentences,
                self.deletion_prob,
                self.min_sentences,
                rng,
            ))
        })
    }

    fn params(&self) -> Value {
        json!({
            "deletion_prob": self.deletion_prob,
            "min_sentences": self.min_sentences.to_value(),
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

#[allow(non_snake_case)]
pub fn random_deletion_factory(
    config: &Value,
    _lexicon: &Arc<ZiLexicon>,
) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("random_deletion", config)?;
    Ok(Box::new(ZiRandomDeletion::new(
        params.probability("deletion_prob", 0.1)?,
        params.minimum("min_words_each_sentence", ZiMinimum::Count(1))?,
        params.flag("ignore_first", false)?,
    )?))
}

#[allow(non_snake_case)]
pub fn random_deletion_sentence_factory(
    config: &Value,
    _lexicon: &Arc<ZiLexicon>,
) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("random_deletion_sentence", config)?;
    Ok(Box::new(ZiRandomDeletionSentence::new(
        params.probability("deletion_prob", 0.1)?,
        params.minimum("min_sentences", ZiMinimum::Count(1))?,
        params.flag("ignore_first", false)?,
    )?))
}
