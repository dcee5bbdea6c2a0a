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

//! # Edit Primitives Module
//!
//! The edit primitives work on an already split unit sequence and know
//! nothing about text. Word-level primitives take one sentence's words;
//! sentence-level primitives take a whole text's sentences.
//!
//! - **word**: deletion, synonym insertion, swap, synonym replacement,
//!   punctuation insertion
//! - **sentence**: deletion, swap
//!
//! Deletion and swap share the generic helpers in this module so both
//! granularities follow one policy.

pub mod sentence;
pub mod word;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::{Result, ZiError};
use crate::random::ZiRandomSource;

/// Lower bound on the units that must survive a deletion.
///
/// `Count` is an absolute number of units. `Ratio` is the proportion of the
/// input to retain, rounded up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZiMinimum {
    Count(usize),
    Ratio(f64),
}

impl Default for ZiMinimum {
    fn default() -> Self {
        ZiMinimum::Count(1)
    }
}

impl From<usize> for ZiMinimum {
    fn from(count: usize) -> Self {
        ZiMinimum::Count(count)
    }
}

impl ZiMinimum {
    /// Number of units to retain out of `total`.
    pub fn resolve(&self, total: usize) -> usize {
        match *self {
            ZiMinimum::Count(count) => count,
            ZiMinimum::Ratio(ratio) => (total as f64 * ratio).ceil() as usize,
        }
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        if let ZiMinimum::Ratio(ratio) = *self {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ZiError::invalid_argument(format!(
                    "if {name} is a ratio, it must be between 0 and 1. Got: {ratio}"
                )));
            }
        }
        Ok(())
    }

    pub fn to_value(&self) -> Value {
        match *self {
            ZiMinimum::Count(count) => json!(count),
            ZiMinimum::Ratio(ratio) => json!(ratio),
        }
    }
}

/// Deletes units independently with probability `prob`, never going below
/// the floor.
///
/// A sequence already at or under its floor is returned untouched. Otherwise
/// units are visited in random order and deletions stop once the floor is
/// reached, so the survivors of a capped deletion are spread uniformly.
pub fn delete_units<T, R>(units: Vec<T>, prob: f64, minimum: ZiMinimum, rng: &mut R) -> Vec<T>
where
    R: ZiRandomSource + ?Sized,
{
    let total = units.len();
    let floor = minimum.resolve(total);
    if total <= floor {
        log::debug!("deletion skipped: {total} units, floor {floor}");
        return units;
    }

    let mut budget = total - floor;
    let mut keep = vec![true; total];
    for index in rng.permutation(total) {
        let marked = rng.chance(prob);
        if marked && budget > 0 {
            keep[index] = false;
            budget -= 1;
        }
    }

    units
        .into_iter()
        .zip(keep)
        .filter_map(|(unit, kept)| kept.then_some(unit))
        .collect()
}

/// Exchanges two randomly chosen units, `n_times` over. Fewer than two units
/// is a no-op. Pairs are drawn independently, so a later swap may undo an
/// earlier one.
pub fn swap_units<T, R>(units: &mut [T], n_times: usize, rng: &mut R) -> Result<()>
where
    R: ZiRandomSource + ?Sized,
{
    if units.len() < 2 {
        return Ok(());
    }
    for _ in 0..n_times {
        let (first, second) = rng.sample_pair(units.len())?;
        units.swap(first, second);
    }
    Ok(())
}
