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

//! Word-level edits on a single sentence's word sequence.
//!
//! Lexicon lookups use a word's form without trailing marks
//! (see [`split_trailing_marks`]); a replacement keeps the marks.

use crate::errors::Result;
use crate::lexicon::ZiLexicon;
use crate::primitives::{delete_units, swap_units, ZiMinimum};
use crate::random::{choose, ZiRandomSource};
use crate::text::split_trailing_marks;

/// Randomly deletes words, keeping at least `min_words` of them.
#[allow(non_snake_case)]
pub fn delete_words<R>(words: Vec<String>, prob: f64, min_words: ZiMinimum, rng: &mut R) -> Vec<String>
where
    R: ZiRandomSource + ?Sized,
{
    delete_units(words, prob, min_words, rng)
}

/// Inserts synonyms of the sentence's own words, `n_times` over.
///
/// Each round is gated by `prob`, draws a non-stopword source word from the
/// original sentence and, when the thesaurus knows it, inserts one of its
/// synonyms at a random position of the current sequence. A round either
/// adds exactly one word or none.
#[allow(non_snake_case)]
pub fn insert_synonyms<R>(
    words: Vec<String>,
    prob: f64,
    n_times: usize,
    rng: &mut R,
    lexicon: &ZiLexicon,
) -> Result<Vec<String>>
where
    R: ZiRandomSource + ?Sized,
{
    let sources: Vec<String> = words
        .iter()
        .map(|word| split_trailing_marks(word).0)
        .filter(|core| !lexicon.is_stopword(core))
        .map(str::to_string)
        .collect();
    if sources.is_empty() {
        return Ok(words);
    }

    let mut augmented = words;
    for _ in 0..n_times {
        if !rng.chance(prob) {
            continue;
        }
        let source = choose(rng, &sources)?;
        let synonyms = lexicon.synonyms(source);
        if synonyms.is_empty() {
            continue;
        }
        let synonym = choose(rng, synonyms)?.clone();
        let position = rng.index(augmented.len() + 1)?;
        log::trace!("inserting '{synonym}' (synonym of '{source}') at {position}");
        augmented.insert(position, synonym);
    }
    Ok(augmented)
}

/// Swaps two random words, `n_times` over.
#[allow(non_snake_case)]
pub fn swap_words<R>(mut words: Vec<String>, n_times: usize, rng: &mut R) -> Result<Vec<String>>
where
    R: ZiRandomSource + ?Sized,
{
    swap_units(&mut words, n_times, rng)?;
    Ok(words)
}

/// Replaces each non-stopword independently with probability `prob` by one
/// of its synonyms. Words the thesaurus does not know are left as they are.
#[allow(non_snake_case)]
pub fn replace_synonyms<R>(
    words: Vec<String>,
    prob: f64,
    rng: &mut R,
    lexicon: &ZiLexicon,
) -> Result<Vec<String>>
where
    R: ZiRandomSource + ?Sized,
{
    words
        .into_iter()
        .map(|word| {
            let (core, marks) = split_trailing_marks(&word);
            if lexicon.is_stopword(core) || !rng.chance(prob) {
                return Ok(word);
            }
            let synonyms = lexicon.synonyms(core);
            if synonyms.is_empty() {
                return Ok(word);
            }
            let synonym = choose(rng, synonyms)?;
            Ok(format!("{synonym}{marks}"))
        })
        .collect()
}

/// Inserts punctuation marks into the gaps around words.
///
/// Each of the `len + 1` gaps independently receives, with probability
/// `prob`, one mark drawn from `punctuation`.
#[allow(non_snake_case)]
pub fn insert_punctuation<R>(
    words: Vec<String>,
    prob: f64,
    punctuation: &[String],
    rng: &mut R,
) -> Result<Vec<String>>
where
    R: ZiRandomSource + ?Sized,
{
    let mut augmented = Vec::with_capacity(words.len() * 2 + 1);
    for word in words {
        if rng.chance(prob) {
            augmented.push(choose(rng, punctuation)?.clone());
        }
        augmented.push(word);
    }
    if rng.chance(prob) {
        augmented.push(choose(rng, punctuation)?.clone());
    }
    Ok(augmented)
}
