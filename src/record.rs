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

//! # Zimun Record Module
//!
//! Records carry text through the batch operators. The payload is a JSON
//! object whose string fields are augmentation targets; metadata records
//! what was applied.
//!
//! ```rust
//! use zimun::record::ZiRecord;
//! use serde_json::json;
//!
//! let mut record = ZiRecord::new(Some("doc-1".to_string()), json!({"text": "어제 식당에 갔다."}));
//! assert_eq!(record.text("text"), Some("어제 식당에 갔다."));
//! record.metadata_mut().insert("source".to_string(), json!("crawl"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form attributes attached to a record.
pub type ZiMetadata = Map<String, Value>;

/// One unit of data processed by Zimun operators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiRecord {
    /// Optional stable identifier, carried through untouched.
    pub id: Option<String>,

    /// Payload holding the text fields.
    pub payload: Value,

    /// Provenance such as the augmentation applied. Omitted from the
    /// serialized form when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ZiMetadata>,
}

impl ZiRecord {
    /// Constructs a record with the given payload and optional identifier.
    #[allow(non_snake_case)]
    pub fn new(id: impl Into<Option<String>>, payload: Value) -> Self {
        ZiRecord {
            id: id.into(),
            payload,
            metadata: None,
        }
    }

    /// Returns a mutable reference to the metadata map, creating it if necessary.
    #[allow(non_snake_case)]
    pub fn metadata_mut(&mut self) -> &mut ZiMetadata {
        self.metadata.get_or_insert_with(ZiMetadata::new)
    }

    /// String value of a top-level payload field.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.payload.get(field).and_then(Value::as_str)
    }

    /// Overwrites a top-level payload field. Returns false when the payload
    /// is not an object.
    pub fn set_text(&mut self, field: &str, text: String) -> bool {
        match self.payload.as_object_mut() {
            Some(map) => {
                map.insert(field.to_string(), Value::String(text));
                true
            }
            None => false,
        }
    }
}

/// Convenience alias for working on batches of records.
pub type ZiRecordBatch = Vec<ZiRecord>;
