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

//! # Zimun Transform Tests - Registry
//!
//! Tests for building transforms from configuration and serializing them
//! back.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test registry
//! ```

#[path = "../common/mod.rs"]
mod common;

use serde_json::{json, Value};

use common::TEXT_WITH_SYNONYMS;
use zimun::errors::ZiError;
use zimun::lexicon::ZiLexicon;
use zimun::random::ZiRandom;
use zimun::registry::ZiTransformRegistry;
use zimun::transform::{execute_transform, ZiTransform};

fn registry() -> ZiTransformRegistry {
    ZiTransformRegistry::with_defaults(ZiLexicon::builtin())
}

/// Defaults apply when a config omits keys.
#[test]
fn test_defaults_are_serialized() {
    let registry = registry();
    let deletion = registry.build("random_deletion", &json!({})).unwrap();
    assert_eq!(
        deletion.params(),
        json!({"deletion_prob": 0.1, "min_words_each_sentence": 1, "ignore_first": false})
    );
    let aeda = registry.build("aeda", &Value::Null).unwrap();
    assert_eq!(aeda.params()["insertion_prob"], 0.3);
    assert_eq!(aeda.params()["punctuation"], json!([".", ";", "?", ":", "!", ","]));
    let insertion = registry.build("random_insertion", &Value::Null).unwrap();
    assert_eq!(insertion.params()["insertion_prob"], 0.2);
    assert_eq!(insertion.params()["n_times"], 1);
}

/// A transform rebuilt from its serialized form behaves identically.
#[test]
fn test_serialized_transforms_rebuild_identically() {
    let registry = registry();
    let entries = json!([
        {"name": "random_deletion", "config": {"deletion_prob": 0.4, "min_words_each_sentence": 0.5}},
        {"name": "random_deletion_sentence", "config": {"deletion_prob": 0.5, "min_sentences": 2, "ignore_first": true}},
        {"name": "random_insertion", "config": {"insertion_prob": 0.6, "n_times": 3}},
        {"name": "random_swap", "config": {"n_times": 2}},
        {"name": "random_swap_sentence"},
        {"name": "synonym_replacement", "config": {"replacement_prob": 0.8}},
        {"name": "aeda", "config": {"insertion_prob": 0.5, "punctuation": ["!", "?"]}}
    ]);
    let transforms = registry.build_many(&entries).unwrap();
    assert_eq!(transforms.len(), 7);

    for transform in &transforms {
        let entry = registry.to_config(transform.as_ref());
        assert_eq!(entry["name"], transform.name());
        let rebuilt = registry.build_entry(&entry).unwrap();
        assert_eq!(rebuilt.params(), transform.params());

        let original = execute_transform(transform.as_ref(), TEXT_WITH_SYNONYMS, &mut ZiRandom::seeded(99)).unwrap();
        let replayed = execute_transform(rebuilt.as_ref(), TEXT_WITH_SYNONYMS, &mut ZiRandom::seeded(99)).unwrap();
        assert_eq!(original, replayed, "{} diverged after rebuild", transform.name());
    }
}

#[test]
fn test_ratio_and_count_floors_keep_their_kind() {
    let registry = registry();
    let ratio = registry
        .build("random_deletion", &json!({"min_words_each_sentence": 0.5}))
        .unwrap();
    assert_eq!(ratio.params()["min_words_each_sentence"], 0.5);
    let count = registry
        .build("random_deletion_sentence", &json!({"min_sentences": 3}))
        .unwrap();
    assert_eq!(count.params()["min_sentences"], 3);
}

#[test]
fn test_invalid_configs_are_rejected() {
    let registry = registry();
    let cases = [
        ("random_deletion", json!({"deletion_prob": 1.2})),
        ("random_deletion", json!({"deletion_prob": "high"})),
        ("random_deletion", json!({"min_words_each_sentence": -1})),
        ("random_deletion_sentence", json!({"min_sentences": 1.5})),
        ("random_insertion", json!({"n_times": -2})),
        ("random_swap", json!({"n_times": 1.5})),
        ("random_swap_sentence", json!({"ignore_first": "yes"})),
        ("synonym_replacement", json!({"replacement_prob": -0.5})),
        ("aeda", json!({"punctuation": []})),
        ("aeda", json!({"punctuation": [1]})),
        ("random_swap", json!([1, 2])),
        ("back_translation", json!({})),
    ];
    for (name, config) in cases {
        assert!(
            matches!(registry.build(name, &config), Err(ZiError::InvalidArgument { .. })),
            "{name} accepted {config}"
        );
    }
}

#[test]
fn test_malformed_entries_are_rejected() {
    let registry = registry();
    assert!(registry.build_entry(&json!({"config": {}})).is_err());
    assert!(registry.build_many(&json!({"name": "random_swap"})).is_err());
}

/// Custom factories can be registered next to the built-ins.
#[test]
fn test_register_custom_factory() {
    fn identity_swap(
        _config: &Value,
        _lexicon: &std::sync::Arc<ZiLexicon>,
    ) -> zimun::Result<Box<dyn ZiTransform>> {
        Ok(Box::new(zimun::ZiRandomSwap::new(0, false)?))
    }

    let mut registry = registry();
    registry.register("identity", identity_swap);
    assert!(registry.names().contains(&"identity"));
    let transform = registry.build("identity", &Value::Null).unwrap();
    let out = execute_transform(transform.as_ref(), TEXT_WITH_SYNONYMS, &mut ZiRandom::seeded(1)).unwrap();
    assert_eq!(out, TEXT_WITH_SYNONYMS);
}
