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

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use zimun::errors::Result;
use zimun::lexicon::ZiLexicon;
use zimun::random::ZiRandomSource;

pub const TEXT_WITH_SYNONYMS: &str =
    "어제 식당에 갔다. 목이 너무 말랐다. 먼저 물 한잔을 마셨다. 그리고 탕수육을 맛있게 먹었다.";

pub const TEXT_WITHOUT_SYNONYMS: &str =
    "짜장면을 맛있게 먹었다. 짬뽕도 맛있게 먹었다. 짬짜면도 먹고 싶었다.";

pub fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Lexicon with the given stopwords and `(word, synonyms)` entries.
pub fn lexicon(stopwords: &[&str], thesaurus: &[(&str, &[&str])]) -> ZiLexicon {
    ZiLexicon::new(
        stopwords.iter().copied(),
        thesaurus
            .iter()
            .map(|(word, synonyms)| (word.to_string(), self::words(synonyms))),
    )
}

/// Random source replaying scripted draws.
///
/// Unit draws default to `0.0` once the script runs out, so every `chance`
/// with a positive probability succeeds. Index draws default to `0` and are
/// reduced modulo the requested bound. Pairs default to `(0, 1)`.
#[derive(Debug, Default)]
pub struct ZiScriptedRandom {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
    pairs: VecDeque<(usize, usize)>,
}

impl ZiScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: &[f64]) -> Self {
        self.units.extend(units.iter().copied());
        self
    }

    pub fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices.extend(indices.iter().copied());
        self
    }

    pub fn with_pairs(mut self, pairs: &[(usize, usize)]) -> Self {
        self.pairs.extend(pairs.iter().copied());
        self
    }
}

impl ZiRandomSource for ZiScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn next_below(&mut self, upper: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % upper
    }

    fn sample_pair(&mut self, n: usize) -> Result<(usize, usize)> {
        let (first, second) = self.pairs.pop_front().unwrap_or((0, 1));
        assert!(first < n && second < n && first != second, "scripted pair out of range");
        Ok((first, second))
    }
}
