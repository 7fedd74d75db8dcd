//! Annotation store loading
//!
//! The store is the in-memory form of the annotation JSON document for a
//! single lookup. It is reloaded from disk per lookup and never written
//! back; records are read-only once resolved. Iteration order is the
//! document's own key order, which the resolver's scan strategies rely on.

use crate::annotations::AnnotationRecord;
use crate::error::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Insertion-ordered mapping from record key to annotation record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AnnotationStore {
    records: IndexMap<String, AnnotationRecord>,
}

impl AnnotationStore {
    /// Load the store from a UTF-8 JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&text)?;
        debug!(
            "loaded {} annotation records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load the store, degrading to an empty store on any failure.
    ///
    /// A missing, unreadable, or malformed document is logged and yields
    /// zero matches for every subsequent lookup rather than a crash.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!("failed to load annotation store {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AnnotationRecord> {
        self.records.get(key)
    }

    /// Iterate records in document insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationRecord)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
