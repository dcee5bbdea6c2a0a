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

//! # Zimun Primitive Tests - Properties
//!
//! Property-based checks of the invariants every edit primitive keeps,
//! over arbitrary word sequences, probabilities and seeds.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test properties
//! ```

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use common::lexicon;
use zimun::primitives::sentence::{delete_sentences, swap_sentences};
use zimun::primitives::word::{delete_words, insert_synonyms, replace_synonyms, swap_words};
use zimun::primitives::ZiMinimum;
use zimun::random::ZiRandom;
use zimun::text::ZiSentence;

const VOCABULARY: &[&str] = &["먼저", "그리고", "물", "밥", "어제", "식당에", "갔다", "짬뽕도"];

fn word_sequence() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::sample::select(VOCABULARY).prop_map(str::to_string),
        0..12,
    )
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}

proptest! {
    #[test]
    fn prop_delete_words_respects_floor(
        words in word_sequence(),
        prob in 0.0f64..=1.0,
        floor in 0usize..6,
        seed in any::<u64>(),
    ) {
        let total = words.len();
        let mut rng = ZiRandom::seeded(seed);
        let kept = delete_words(words, prob, ZiMinimum::Count(floor), &mut rng);
        prop_assert!(kept.len() >= floor.min(total));
        prop_assert!(kept.len() <= total);
    }

    #[test]
    fn prop_delete_sentences_respects_floor(
        count in 0usize..8,
        prob in 0.0f64..=1.0,
        floor in 0usize..4,
        seed in any::<u64>(),
    ) {
        let sentences: Vec<ZiSentence> = (0..count)
            .map(|i| ZiSentence::new(format!("문장 {i}"), "."))
            .collect();
        let mut rng = ZiRandom::seeded(seed);
        let kept = delete_sentences(sentences, prob, ZiMinimum::Count(floor), &mut rng);
        prop_assert!(kept.len() >= floor.min(count));
    }

    #[test]
    fn prop_swap_preserves_multiset(
        words in word_sequence(),
        n_times in 0usize..6,
        seed in any::<u64>(),
    ) {
        let mut rng = ZiRandom::seeded(seed);
        let swapped = swap_words(words.clone(), n_times, &mut rng).unwrap();
        prop_assert_eq!(sorted(swapped), sorted(words));
    }

    #[test]
    fn prop_swap_sentences_preserves_multiset(
        count in 0usize..6,
        n_times in 0usize..6,
        seed in any::<u64>(),
    ) {
        let sentences: Vec<ZiSentence> = (0..count)
            .map(|i| ZiSentence::new(format!("문장 {i}"), "."))
            .collect();
        let mut rng = ZiRandom::seeded(seed);
        let mut swapped = swap_sentences(sentences.clone(), n_times, &mut rng).unwrap();
        swapped.sort_by(|a, b| a.body.cmp(&b.body));
        prop_assert_eq!(swapped, sentences);
    }

    #[test]
    fn prop_replacement_keeps_length_and_stopwords(
        words in word_sequence(),
        prob in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let lexicon = lexicon(&["먼저", "그리고"], &[("물", &["음료수"]), ("먼저", &["우선"])]);
        let mut rng = ZiRandom::seeded(seed);
        let replaced = replace_synonyms(words.clone(), prob, &mut rng, &lexicon).unwrap();
        prop_assert_eq!(replaced.len(), words.len());
        for (before, after) in words.iter().zip(&replaced) {
            if lexicon.is_stopword(before) {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_insertion_adds_at_most_n_times(
        words in word_sequence(),
        prob in 0.0f64..=1.0,
        n_times in 0usize..6,
        seed in any::<u64>(),
    ) {
        let lexicon = lexicon(&["먼저", "그리고"], &[("물", &["음료수"]), ("밥", &["식사"])]);
        let mut rng = ZiRandom::seeded(seed);
        let augmented = insert_synonyms(words.clone(), prob, n_times, &mut rng, &lexicon).unwrap();
        prop_assert!(augmented.len() >= words.len());
        prop_assert!(augmented.len() <= words.len() + n_times);
    }

    #[test]
    fn prop_same_seed_same_result(
        words in word_sequence(),
        prob in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let first = delete_words(words.clone(), prob, ZiMinimum::Count(1), &mut ZiRandom::seeded(seed));
        let second = delete_words(words, prob, ZiMinimum::Count(1), &mut ZiRandom::seeded(seed));
        prop_assert_eq!(first, second);
    }
}
