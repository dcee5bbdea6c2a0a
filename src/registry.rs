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

//! # Transform Registry Module
//!
//! This module maps transform names to their factories so transforms can be
//! built from configuration and serialized back to it.
//!
//! ## Registry Operations
//!
//! - Register transform factories under unique names
//! - Build one transform, or a list, from `{"name", "config"}` entries
//! - Serialize a built transform to the same entry shape
//!
//! ```rust
//! use serde_json::json;
//! use zimun::lexicon::ZiLexicon;
//! use zimun::registry::ZiTransformRegistry;
//!
//! let registry = ZiTransformRegistry::with_defaults(ZiLexicon::builtin());
//! let swap = registry.build("random_swap", &json!({"n_times": 2})).unwrap();
//! let entry = registry.to_config(swap.as_ref());
//! assert_eq!(entry["config"]["n_times"], 2);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::errors::{Result, ZiError};
use crate::lexicon::ZiLexicon;
use crate::transform::ZiTransform;
use crate::transforms::{
    aeda_factory, random_deletion_factory, random_deletion_sentence_factory,
    random_insertion_factory, random_swap_factory, random_swap_sentence_factory,
    synonym_replacement_factory,
};

/// Given a JSON config and the shared lexicon, returns a validated transform.
pub type ZiTransformFactory = fn(&Value, &Arc<ZiLexicon>) -> Result<Box<dyn ZiTransform>>;

/// Registry mapping transform names to their factory functions.
#[derive(Debug, Clone)]
pub struct ZiTransformRegistry {
    factories: BTreeMap<String, ZiTransformFactory>,
    lexicon: Arc<ZiLexicon>,
}

impl ZiTransformRegistry {
    /// Empty registry whose factories will receive `lexicon`.
    #[allow(non_snake_case)]
    pub fn new(lexicon: Arc<ZiLexicon>) -> Self {
        ZiTransformRegistry {
            factories: BTreeMap::new(),
            lexicon,
        }
    }

    /// Registry holding every built-in transform.
    #[allow(non_snake_case)]
    pub fn with_defaults(lexicon: Arc<ZiLexicon>) -> Self {
        let mut registry = ZiTransformRegistry::new(lexicon);
        registry.register("random_deletion", random_deletion_factory);
        registry.register("random_deletion_sentence", random_deletion_sentence_factory);
        registry.register("random_insertion", random_insertion_factory);
        registry.register("random_swap", random_swap_factory);
        registry.register("random_swap_sentence", random_swap_sentence_factory);
        registry.register("synonym_replacement", synonym_replacement_factory);
        registry.register("aeda", aeda_factory);
        registry
    }

    /// Adds or replaces a factory.
    #[allow(non_snake_case)]
    pub fn register(&mut self, name: &str, factory: ZiTransformFactory) {
        if self.factories.insert(name.to_string(), factory).is_some() {
            log::debug!("transform factory '{name}' replaced");
        }
    }

    pub fn get(&self, name: &str) -> Result<ZiTransformFactory> {
        self.factories.get(name).copied().ok_or_else(|| {
            ZiError::invalid_argument(format!("unknown transform: {name}"))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Builds the transform registered as `name`.
    #[allow(non_snake_case)]
    pub fn build(&self, name: &str, config: &Value) -> Result<Box<dyn ZiTransform>> {
        let factory = self.get(name)?;
        factory(config, &self.lexicon)
    }

    /// Builds a transform from a `{"name": ..., "config": {...}}` entry.
    /// A missing `config` means all defaults.
    #[allow(non_snake_case)]
    pub fn build_entry(&self, entry: &Value) -> Result<Box<dyn ZiTransform>> {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ZiError::invalid_argument("transform entry requires string 'name'"))?;
        let config = entry.get("config").unwrap_or(&Value::Null);
        self.build(name, config)
    }

    /// Builds every entry of a JSON array, in order.
    #[allow(non_snake_case)]
    pub fn build_many(&self, entries: &Value) -> Result<Vec<Box<dyn ZiTransform>>> {
        entries
            .as_array()
            .ok_or_else(|| ZiError::invalid_argument("transform list must be an array"))?
            .iter()
            .map(|entry| self.build_entry(entry))
            .collect()
    }

    /// Serializes a transform to the entry shape accepted by [`build_entry`].
    ///
    /// [`build_entry`]: ZiTransformRegistry::build_entry
    pub fn to_config(&self, transform: &dyn ZiTransform) -> Value {
        json!({
            "name": transform.name(),
            "config": transform.params(),
        })
    }
}
