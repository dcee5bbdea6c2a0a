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

//! # Zimun Error Module
//!
//! This module defines the error types used throughout Zimun.
//!
//! ## Error Categories
//!
//! - **InvalidArgument**: Parameters outside their contract (probabilities
//!   outside `[0, 1]`, negative counts, impossible sampling requests)
//! - **Lexicon**: Malformed stopword or thesaurus resources
//! - **Operator**: Failures raised while applying a record operator
//! - **Io**: Filesystem errors while loading resources
//! - **Serde**: JSON parsing errors
//!
//! Degenerate input (empty text, a sentence already at its floor) and lookup
//! misses are never errors; the primitives resolve them by leaving the unit
//! unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use zimun::errors::{Result, ZiError};
//!
//! fn check(prob: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&prob) {
//!         return Err(ZiError::invalid_argument("prob must be between 0 and 1"));
//!     }
//!     Ok(prob)
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zimun.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zimun.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// A parameter or request outside its documented contract.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Malformed lexical resource.
    #[error("lexicon error: {message}")]
    Lexicon { message: String },

    /// Any failure raised by a record operator.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct invalid argument errors.
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        ZiError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Helper to construct lexicon errors.
    pub fn lexicon<T: Into<String>>(message: T) -> Self {
        ZiError::Lexicon {
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }
}
