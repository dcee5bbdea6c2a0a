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

//! # Transforms Module
//!
//! The built-in text augmentations. Each transform validates its parameters
//! in its constructor and comes with a factory that builds it from a JSON
//! configuration.
//!
//! ## Transforms
//!
//! - **deletion**: `random_deletion` (words), `random_deletion_sentence`
//! - **insertion**: `random_insertion` (synonyms of the sentence's words)
//! - **swap**: `random_swap` (words), `random_swap_sentence`
//! - **replacement**: `synonym_replacement`
//! - **punctuation**: `aeda` (punctuation marks between words)
//!
//! Word-level transforms edit each sentence independently; sentence-level
//! transforms edit the sentence sequence of the whole text.

pub mod deletion;
pub mod insertion;
pub mod params;
pub mod punctuation;
pub mod replacement;
pub mod swap;

pub use deletion::{
    random_deletion_factory, random_deletion_sentence_factory, ZiRandomDeletion,
    ZiRandomDeletionSentence,
};
pub use insertion::{random_insertion_factory, ZiRandomInsertion};
pub use punctuation::{aeda_factory, ZiAeda};
pub use replacement::{synonym_replacement_factory, ZiSynonymReplacement};
pub use swap::{random_swap_factory, random_swap_sentence_factory, ZiRandomSwap, ZiRandomSwapSentence};

use crate::errors::Result;
use crate::text::{join_sentences, split_sentences, ZiSentence};

/// Applies `edit` to the words of every sentence and rejoins the text.
/// Sentences left without words are dropped.
pub(crate) fn augment_words<F>(text: &str, mut edit: F) -> Result<String>
where
    F: FnMut(Vec<String>) -> Result<Vec<String>>,
{
    let sentences = split_sentences(text)
        .iter()
        .map(|sentence| Ok(sentence.with_words(&edit(sentence.words())?)))
        .collect::<Result<Vec<ZiSentence>>>()?;
    Ok(join_sentences(&sentences))
}

/// Applies `edit` to the sentence sequence and rejoins the text.
pub(crate) fn augment_sentences<F>(text: &str, edit: F) -> Result<String>
where
    F: FnOnce(Vec<ZiSentence>) -> Result<Vec<ZiSentence>>,
{
    Ok(join_sentences(&edit(split_sentences(text))?))
}
