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
use crate::primitives::sentence::swap_sentences;
use crate::primitives::word::swap_words;
use crate::random::ZiRandomSource;
use crate::transform::ZiTransform;
use crate::transforms::params::ZiParams;
use crate::transforms::{augment_sentences, augment_words};

/// Swaps random word pairs inside each sentence.
#[derive(Debug, Clone)]
pub struct ZiRandomSwap {
    n_times: usize,
    ignore_first: bool,
}

impl ZiRandomSwap {
    #[allow(non_snake_case)]
    pub fn new(n_times: usize, ignore_first: bool) -> Result<Self> {
        let transform = ZiRandomSwap {
            n_times,
            ignore_first,
        };
        transform.validate()?;
        Ok(transform)
    }
}

impl ZiTransform for ZiRandomSwap {
    fn name(&self) -> &'static str {
        "random_swap"
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_words(text, |words| swap_words(words, self.n_times, &mut *rng))
    }

    fn params(&self) -> Value {
        json!({
            "n_times": self.n_times,
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

/// Swaps random sentence pairs.
#[derive(Debug, Clone)]
pub struct ZiRandomSwapSentence {
    n_times: usize,
    ignore_first: bool,
}

impl ZiRandomSwapSentence {
    #[allow(non_snake_case)]
    pub fn new(n_times: usize, ignore_first: bool) -> Result<Self> {
        let transform = ZiRandomSwapSentence {
            n_times,
            ignore_first,
        };
        transform.validate()?;
        Ok(transform)
    }
}

impl ZiTransform for ZiRandomSwapSentence {
    fn name(&self) -> &'static str {
        "random_swap_sentence"
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn apply(&self, text: &str, rng: &mut dyn ZiRandomSource) -> Result<String> {
        augment_sentences(text, |sentences| {
            swap_sentences(sentences, self.n_times, rng)
        })
    }

    fn params(&self) -> Value {
        json!({
            "n_times": self.n_times,
            "ignore_first": self.ignore_first,
        })
    }

    fn ignore_first(&self) -> bool {
        self.ignore_first
    }
}

#[allow(non_snake_case)]
pub fn random_swap_factory(
    config: &Value,
    _lexicon: &Arc<ZiLexicon>,
) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("random_swap", config)?;
    Ok(Box::new(ZiRandomSwap::new(
        params.count("n_times", 1)?,
        params.flag("ignore_first", false)?,
    )?))
}

#[allow(non_snake_case)]
pub fn random_swap_sentence_factory(
    config: &Value,
    _lexicon: &Arc<ZiLexicon>,
) -> Result<Box<dyn ZiTransform>> {
    let params = ZiParams::parse("random_swap_sentence", config)?;
    Ok(Box::new(ZiRandomSwapSentence::new(
        params.count("n_times", 1)?,
        params.flag("ignore_first", false)?,
    )?))
}
