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

//! # Random Decision Module
//!
//! Every random choice made by a primitive goes through [`ZiRandomSource`],
//! which callers inject explicitly. Two sources seeded identically drive
//! identical augmentations.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::errors::{Result, ZiError};

/// Injectable source of randomness for the edit primitives.
///
/// Implementors supply the two raw draws; the decision helpers are derived
/// from them and may be overridden.
pub trait ZiRandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[0, upper)`. Callers guarantee `upper > 0`.
    fn next_below(&mut self, upper: usize) -> usize;

    /// Returns true with probability `p`. `p <= 0` is never true and
    /// `p >= 1` always is.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform index in `[0, n)`.
    fn index(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(ZiError::invalid_argument(
                "cannot pick an index from an empty range",
            ));
        }
        Ok(self.next_below(n))
    }

    /// `k` distinct indices in `[0, n)`, in draw order.
    fn sample_indices(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        if k > n {
            return Err(ZiError::invalid_argument(format!(
                "cannot sample {k} distinct indices from {n}"
            )));
        }
        // Partial Fisher-Yates over the index pool.
        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = i + self.next_below(n - i);
            pool.swap(i, j);
        }
        pool.truncate(k);
        Ok(pool)
    }

    /// Two distinct indices in `[0, n)`.
    fn sample_pair(&mut self, n: usize) -> Result<(usize, usize)> {
        if n < 2 {
            return Err(ZiError::invalid_argument(format!(
                "a pair needs at least 2 elements, got {n}"
            )));
        }
        let picked = self.sample_indices(n, 2)?;
        Ok((picked[0], picked[1]))
    }

    /// A uniformly random ordering of `[0, n)`.
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = self.next_below(i + 1);
            order.swap(i, j);
        }
        order
    }
}

/// Uniformly picks one element of `items`.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Result<&'a T>
where
    R: ZiRandomSource + ?Sized,
{
    let index = rng.index(items.len())?;
    Ok(&items[index])
}

/// Default random source backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct ZiRandom {
    rng: StdRng,
}

impl ZiRandom {
    /// Reproducible source: the same seed yields the same decisions.
    pub fn seeded(seed: u64) -> Self {
        ZiRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        ZiRandom {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => ZiRandom::seeded(s),
            None => ZiRandom::from_entropy(),
        }
    }
}

impl ZiRandomSource for ZiRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn sample_indices(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        if k > n {
            return Err(ZiError::invalid_argument(format!(
                "cannot sample {k} distinct indices from {n}"
            )));
        }
        Ok(rand::seq::index::sample(&mut self.rng, n, k).into_vec())
    }

    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);
        order
    }
}
