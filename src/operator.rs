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

//! # Zimun Operator Module
//!
//! Batch operators lift text transforms to collections of records, the shape
//! in which corpora are augmented.
//!
//! An operator receives a [`ZiRecordBatch`], returns a new batch, and may
//! change any record it is given. [`execute_operator`] runs one and tags any
//! failure with the operator's name.
//!
//! ```rust
//! use zimun::operator::{execute_operator, ZiOperator};
//! use zimun::record::ZiRecordBatch;
//! use zimun::errors::Result;
//!
//! #[derive(Debug)]
//! struct Passthrough;
//!
//! impl ZiOperator for Passthrough {
//!     fn name(&self) -> &'static str {
//!         "passthrough"
//!     }
//!
//!     fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
//!         Ok(batch)
//!     }
//! }
//!
//! assert!(execute_operator(&Passthrough, Vec::new()).unwrap().is_empty());
//! ```

use crate::errors::{Result, ZiError};
use crate::record::ZiRecordBatch;

/// Contract for operators over record batches.
pub trait ZiOperator: std::fmt::Debug {
    /// Name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Processes a batch. The output may hold as many records as the
    /// operator sees fit.
    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch>;
}

/// Runs an operator, wrapping any error with the operator's name.
#[allow(non_snake_case)]
pub fn execute_operator(
    operator: &dyn ZiOperator,
    batch: ZiRecordBatch,
) -> Result<ZiRecordBatch> {
    operator
        .apply(batch)
        .map_err(|err| ZiError::operator(operator.name(), err.to_string()))
}
