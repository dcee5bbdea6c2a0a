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

//! # Zimun Primitive Tests - Edit Primitives
//!
//! Tests for the word and sentence edit primitives.
//!
//! ## Test Categories
//!
//! - **Deletion**: floors, count and ratio minimums
//! - **Insertion**: compounding, subsequence preservation, lookup misses
//! - **Swap**: scripted pairs, short sequences
//! - **Replacement**: stopwords, lookup misses, trailing marks
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test primitives
//! ```

#[path = "../common/mod.rs"]
mod common;

use common::{lexicon, words, ZiScriptedRandom};
use zimun::primitives::sentence::{delete_sentences, swap_sentences};
use zimun::primitives::word::{
    delete_words, insert_punctuation, insert_synonyms, replace_synonyms, swap_words,
};
use zimun::primitives::ZiMinimum;
use zimun::random::ZiRandom;
use zimun::text::split_sentences;

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|word| remaining.any(|candidate| candidate == word))
}

/// Full-probability deletion with a floor of one leaves exactly one word.
#[test]
fn test_delete_words_stops_at_floor() {
    for seed in 0..20 {
        let mut rng = ZiRandom::seeded(seed);
        let kept = delete_words(
            words(&["어제", "식당에", "갔다."]),
            1.0,
            ZiMinimum::Count(1),
            &mut rng,
        );
        assert_eq!(kept.len(), 1);
        assert!(["어제", "식당에", "갔다."].contains(&kept[0].as_str()));
    }
}

#[test]
fn test_delete_words_at_floor_is_unchanged() {
    let mut rng = ZiRandom::seeded(1);
    let input = words(&["어제", "식당에"]);
    let kept = delete_words(input.clone(), 1.0, ZiMinimum::Count(2), &mut rng);
    assert_eq!(kept, input);
    let kept = delete_words(input.clone(), 1.0, ZiMinimum::Count(5), &mut rng);
    assert_eq!(kept, input);
}

#[test]
fn test_delete_words_probability_bounds() {
    let input = words(&["가", "나", "다", "라"]);
    let mut rng = ZiRandom::seeded(9);
    assert_eq!(
        delete_words(input.clone(), 0.0, ZiMinimum::Count(0), &mut rng),
        input
    );
    assert!(delete_words(input, 1.0, ZiMinimum::Count(0), &mut rng).is_empty());
}

/// A ratio floor retains the rounded-up share of words.
#[test]
fn test_delete_words_ratio_floor() {
    let mut rng = ZiRandom::seeded(4);
    let kept = delete_words(
        words(&["가", "나", "다", "라", "마"]),
        1.0,
        ZiMinimum::Ratio(0.5),
        &mut rng,
    );
    assert_eq!(kept.len(), 3);
}

#[test]
fn test_delete_sentences_keeps_minimum() {
    let sentences = split_sentences("어제 식당에 갔다. 목이 말랐다.");
    let mut rng = ZiRandom::seeded(3);
    let kept = delete_sentences(sentences.clone(), 1.0, ZiMinimum::Count(2), &mut rng);
    assert_eq!(kept, sentences);

    let kept = delete_sentences(sentences.clone(), 1.0, ZiMinimum::Count(1), &mut rng);
    assert_eq!(kept.len(), 1);
    assert!(sentences.contains(&kept[0]));
}

/// Scripted pair (0, 2) exchanges the outer words.
#[test]
fn test_swap_words_with_scripted_pair() {
    let mut rng = ZiScriptedRandom::new().with_pairs(&[(0, 2)]);
    let swapped = swap_words(words(&["가", "나", "다"]), 1, &mut rng).unwrap();
    assert_eq!(swapped, words(&["다", "나", "가"]));
}

#[test]
fn test_swap_short_sequences_are_unchanged() {
    let mut rng = ZiRandom::seeded(1);
    assert_eq!(swap_words(words(&["가"]), 3, &mut rng).unwrap(), words(&["가"]));
    assert!(swap_words(Vec::new(), 3, &mut rng).unwrap().is_empty());
    let single = split_sentences("하나.");
    assert_eq!(swap_sentences(single.clone(), 2, &mut rng).unwrap(), single);
}

#[test]
fn test_swap_sentences_with_scripted_pair() {
    let sentences = split_sentences("하나. 둘! 셋?");
    let mut rng = ZiScriptedRandom::new().with_pairs(&[(0, 1)]);
    let swapped = swap_sentences(sentences.clone(), 1, &mut rng).unwrap();
    assert_eq!(swapped[0], sentences[1]);
    assert_eq!(swapped[1], sentences[0]);
    assert_eq!(swapped[2], sentences[2]);
}

/// Stopwords are never replaced even at full probability.
#[test]
fn test_replace_synonyms_skips_stopwords() {
    let lexicon = lexicon(&["먼저", "한잔을"], &[("물", &["음료수"])]);
    let mut rng = ZiRandom::seeded(1);
    let replaced = replace_synonyms(words(&["먼저", "물", "한잔을"]), 1.0, &mut rng, &lexicon).unwrap();
    assert_eq!(replaced, words(&["먼저", "음료수", "한잔을"]));
}

#[test]
fn test_replace_synonyms_miss_is_unchanged() {
    let lexicon = lexicon(&[], &[("물", &["음료수"])]);
    let mut rng = ZiRandom::seeded(1);
    let input = words(&["짜장면을", "먹었다"]);
    assert_eq!(
        replace_synonyms(input.clone(), 1.0, &mut rng, &lexicon).unwrap(),
        input
    );
    let input = words(&["물", "물"]);
    assert_eq!(
        replace_synonyms(input.clone(), 0.0, &mut rng, &lexicon).unwrap(),
        input
    );
}

/// Two successful rounds add two words around the original three.
#[test]
fn test_insert_synonyms_compounds() {
    let lexicon = lexicon(
        &[],
        &[("가", &["갑"]), ("나", &["낙"]), ("다", &["닥"])],
    );
    for seed in 0..20 {
        let mut rng = ZiRandom::seeded(seed);
        let original = words(&["가", "나", "다"]);
        let augmented = insert_synonyms(original.clone(), 1.0, 2, &mut rng, &lexicon).unwrap();
        assert_eq!(augmented.len(), 5);
        assert!(is_subsequence(&original, &augmented));
    }
}

/// Scripted draws pick the source word and the insertion point.
#[test]
fn test_insert_synonyms_scripted_positions() {
    let lexicon = lexicon(&[], &[("물", &["음료수"])]);
    // Source index 0, synonym index 0, position 2 (end of sequence).
    let mut rng = ZiScriptedRandom::new().with_indices(&[0, 0, 2]);
    let augmented = insert_synonyms(words(&["물", "주세요"]), 1.0, 1, &mut rng, &lexicon).unwrap();
    assert_eq!(augmented, words(&["물", "주세요", "음료수"]));
}

#[test]
fn test_insert_synonyms_lookup_miss_adds_nothing() {
    let lexicon = lexicon(&["그리고"], &[]);
    let mut rng = ZiRandom::seeded(2);
    let input = words(&["그리고", "짜장면을", "먹었다"]);
    assert_eq!(
        insert_synonyms(input.clone(), 1.0, 4, &mut rng, &lexicon).unwrap(),
        input
    );
}

#[test]
fn test_insert_synonyms_zero_probability() {
    let lexicon = lexicon(&[], &[("물", &["음료수"])]);
    let mut rng = ZiRandom::seeded(2);
    let input = words(&["물"]);
    assert_eq!(
        insert_synonyms(input.clone(), 0.0, 10, &mut rng, &lexicon).unwrap(),
        input
    );
}

#[test]
fn test_insert_punctuation_keeps_words_in_order() {
    let marks = words(&[".", ";", "?", ":", "!", ","]);
    let original = words(&["어제", "식당에", "갔다"]);
    let mut rng = ZiRandom::seeded(8);
    let augmented = insert_punctuation(original.clone(), 0.5, &marks, &mut rng).unwrap();
    assert!(augmented.len() >= original.len() && augmented.len() <= 2 * original.len() + 1);
    let kept: Vec<String> = augmented
        .into_iter()
        .filter(|token| !marks.contains(token))
        .collect();
    assert_eq!(kept, original);
}
