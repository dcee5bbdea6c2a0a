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

//! # Zimun Core Library
//!
//! Zimun provides word- and sentence-level randomized augmentation of Korean
//! text. Words are whitespace-delimited tokens and sentences end at terminal
//! punctuation; no morphological analysis is performed.
//!
//! ## Module Overview
//!
//! - **text**: sentence segmentation, word tokenization and rejoining
//! - **lexicon**: stopword set and synonym thesaurus
//! - **random**: injectable, seedable source of random decisions
//! - **primitives**: deletion, insertion, swap, replacement and punctuation
//!   edits on word and sentence sequences
//! - **transform**: the text transform trait and the JSON boundary adapter
//! - **transforms**: the built-in transforms and their factories
//! - **registry**: name-to-factory registry and parameter serialization
//! - **record**, **operator**, **operators**: record-batch augmentation
//!
//! ## Feature Flags
//!
//! - `parallel`: processes record batches with Rayon
//! - `full`: enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use zimun::{execute_transform, ZiLexicon, ZiRandom, ZiSynonymReplacement};
//!
//! let replace = ZiSynonymReplacement::new(1.0, false, ZiLexicon::builtin()).unwrap();
//! let mut rng = ZiRandom::seeded(7);
//! let out = execute_transform(&replace, "먼저 물 한잔을 마셨다.", &mut rng).unwrap();
//! assert!(out.starts_with("먼저 "));
//! ```
//!
//! ## Reproducibility
//!
//! Transforms hold no random state. Every call receives a
//! [`ZiRandomSource`]; two sources seeded alike produce the same output.
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, ZiError>`. Parameters are
//! checked when a transform is built; degenerate input is never an error.

#![allow(non_snake_case)]

pub mod errors;
pub mod lexicon;
pub mod operator;
pub mod operators;
pub mod primitives;
pub mod random;
pub mod record;
pub mod registry;
pub mod text;
pub mod transform;
pub mod transforms;

pub use errors::{Result, ZiError};
pub use lexicon::ZiLexicon;
pub use operator::{execute_operator, ZiOperator};
pub use operators::augment::{augment_text_config, augment_text_factory, ZiAugmentText};
pub use primitives::ZiMinimum;
pub use random::{ZiRandom, ZiRandomSource};
pub use record::{ZiMetadata, ZiRecord, ZiRecordBatch};
pub use registry::{ZiTransformFactory, ZiTransformRegistry};
pub use text::ZiSentence;
pub use transform::{call_transform, execute_transform, ZiTransform};
pub use transforms::{
    ZiAeda, ZiRandomDeletion, ZiRandomDeletionSentence, ZiRandomInsertion, ZiRandomSwap,
    ZiRandomSwapSentence, ZiSynonymReplacement,
};
