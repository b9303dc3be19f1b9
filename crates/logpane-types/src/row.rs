use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One textual log entry.
///
/// Rows are created by the data-fetch layer, handed to the pipeline immutably,
/// and never mutated by it. Derived views (filtered, sorted, sampled) are
/// recomputed from scratch whenever the inputs change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    /// Identifier stable across re-renders of the same logical row
    pub uid: String,

    /// Raw entry text
    pub entry: String,

    /// Entry timestamp (UTC), used for chronological ordering
    pub timestamp: DateTime<Utc>,

    /// Number of duplicate lines collapsed into this row by the dedup pass.
    /// None means the row never went through dedup; treated as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<u64>,

    /// Arbitrary structured labels attached to the entry
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Source-specific structured fields the pipeline carries through
    /// untouched (parsed fields, frame references, link targets)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl LogRow {
    pub fn new(
        uid: impl Into<String>,
        entry: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: uid.into(),
            entry: entry.into(),
            timestamp,
            duplicates: None,
            labels: HashMap::new(),
            fields: None,
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Duplicate count with the unset case normalized to zero
    pub fn duplicate_count(&self) -> u64 {
        self.duplicates.unwrap_or(0)
    }
}
