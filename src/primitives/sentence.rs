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

use crate::errors::Result;
use crate::primitives::{delete_units, swap_units, ZiMinimum};
use crate::random::ZiRandomSource;
use crate::text::ZiSentence;

/// Randomly deletes sentences, keeping at least `min_sentences` of them.
#[allow(non_snake_case)]
pub fn delete_sentences<R>(
    sentences: Vec<ZiSentence>,
    prob: f64,
    min_sentences: ZiMinimum,
    rng: &mut R,
) -> Vec<ZiSentence>
where
    R: ZiRandomSource + ?Sized,
{
    delete_units(sentences, prob, min_sentences, rng)
}

/// Swaps two random sentences, `n_times` over.
#[allow(non_snake_case)]
pub fn swap_sentences<R>(
    mut sentences: Vec<ZiSentence>,
    n_times: usize,
    rng: &mut R,
) -> Result<Vec<ZiSentence>>
where
    R: ZiRandomSource + ?Sized,
{
    swap_units(&mut sentences, n_times, rng)?;
    Ok(sentences)
}
