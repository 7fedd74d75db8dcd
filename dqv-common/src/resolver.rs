//! Identifier resolution over the annotation store
//!
//! The store's key space evolved across several schema generations (plain
//! keys, structured metadata, composite filename stems, a legacy
//! capitalized schema), and a record may be addressable under any of
//! several synonymous identifiers. Resolution therefore runs an ordered
//! cascade of matching strategies and stops at the first hit: cheap exact
//! lookups before full scans, and the permissive base-id fallback last.
//!
//! Each strategy is an independent function over `(query, store)` so every
//! generation's matching rule is testable on its own.

use crate::annotations::AnnotationRecord;
use crate::store::AnnotationStore;
use std::collections::BTreeSet;
use tracing::{info, warn};

type Matcher = for<'a> fn(&str, &'a AnnotationStore) -> Option<&'a AnnotationRecord>;

/// The cascade, in precedence order.
const STRATEGIES: &[(&str, Matcher)] = &[
    ("direct key", match_key),
    ("metadata video_id", match_metadata_video_id),
    ("metadata composite", match_metadata_composite),
    ("legacy composite", match_legacy_composite),
    ("base id", match_base_id),
];

/// Find the best-matching record for a video identifier.
///
/// `None` is a normal negative result ("no annotation available"), not an
/// error. Given an unchanged store, resolution is idempotent.
pub fn resolve<'a>(video_id: &str, store: &'a AnnotationStore) -> Option<&'a AnnotationRecord> {
    for (name, matcher) in STRATEGIES {
        if let Some(record) = matcher(video_id, store) {
            info!("resolved {video_id} via {name} match");
            return Some(record);
        }
    }
    warn!("no annotation record found for {video_id}");
    None
}

/// Every identifier the store is addressable under: each record's key,
/// its `metadata.video_id`, and the composite and bare youtube ids from
/// both metadata generations when complete.
///
/// The directory scanner uses this to decide which on-disk video files
/// have any associated annotation.
pub fn known_ids(store: &AnnotationStore) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for (key, record) in store.iter() {
        ids.insert(key.to_string());
        if let Some(metadata) = &record.metadata {
            if let Some(video_id) = &metadata.video_id {
                ids.insert(video_id.clone());
            }
            if let Some(clip) = metadata.clip_reference() {
                ids.insert(clip.composite_id());
                ids.insert(clip.youtube_id);
            }
        }
        if let Some(legacy) = &record.desire_analysis {
            if let Some(clip) = legacy.clip_reference() {
                ids.insert(clip.composite_id());
                ids.insert(clip.youtube_id);
            }
        }
    }
    ids
}

/// Strategy 1: the query is exactly a store key.
fn match_key<'a>(video_id: &str, store: &'a AnnotationStore) -> Option<&'a AnnotationRecord> {
    store.get(video_id)
}

/// Strategy 2: scan for a record whose `metadata.video_id` equals the query.
fn match_metadata_video_id<'a>(
    video_id: &str,
    store: &'a AnnotationStore,
) -> Option<&'a AnnotationRecord> {
    store.iter().map(|(_, record)| record).find(|record| {
        record
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.video_id.as_deref())
            == Some(video_id)
    })
}

/// Strategy 3: scan for a record whose metadata clip reference matches the
/// query as the composite `{youtube_id}_{start}_{end}` or as the bare
/// youtube id.
fn match_metadata_composite<'a>(
    video_id: &str,
    store: &'a AnnotationStore,
) -> Option<&'a AnnotationRecord> {
    store.iter().map(|(_, record)| record).find(|record| {
        record
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.clip_reference())
            .is_some_and(|clip| clip.composite_id() == video_id || clip.youtube_id == video_id)
    })
}

/// Strategy 4: as strategy 3, over the legacy `desire_analysis` object.
fn match_legacy_composite<'a>(
    video_id: &str,
    store: &'a AnnotationStore,
) -> Option<&'a AnnotationRecord> {
    store.iter().map(|(_, record)| record).find(|record| {
        record
            .desire_analysis
            .as_ref()
            .and_then(|legacy| legacy.clip_reference())
            .is_some_and(|clip| clip.composite_id() == video_id || clip.youtube_id == video_id)
    })
}

/// Strategy 5: fuzzy base-id fallback, only for queries containing an
/// underscore. The segment before the first underscore is matched against
/// record keys and `metadata.youtube_id`.
///
/// Deliberately loose: the matched record's own start/end are never checked
/// against the rest of the query, so a filename whose span differs from the
/// record's metadata still resolves.
fn match_base_id<'a>(video_id: &str, store: &'a AnnotationStore) -> Option<&'a AnnotationRecord> {
    let (base_id, _) = video_id.split_once('_')?;
    store.iter().find_map(|(key, record)| {
        if key == base_id {
            return Some(record);
        }
        let youtube_id = record
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.youtube_id.as_deref());
        (youtube_id == Some(base_id)).then_some(record)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(json: &str) -> AnnotationStore {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_base_id_requires_underscore() {
        let store = store(r#"{"xyz": {}}"#);
        assert!(match_base_id("xyz", &store).is_none());
        assert!(match_base_id("xyz_99_100", &store).is_some());
    }

    #[test]
    fn test_composite_compares_before_bare_id() {
        // One record, addressable both ways through the same strategy.
        let store = store(
            r#"{"k": {"metadata": {"youtube_id": "abc", "start_seconds": 5, "end_seconds": 10}}}"#,
        );
        assert!(match_metadata_composite("abc_5_10", &store).is_some());
        assert!(match_metadata_composite("abc", &store).is_some());
        assert!(match_metadata_composite("abc_5_11", &store).is_none());
    }

    #[test]
    fn test_legacy_strategy_ignores_metadata() {
        let store = store(
            r#"{"k": {"metadata": {"youtube_id": "abc", "start_seconds": 5, "end_seconds": 10}}}"#,
        );
        assert!(match_legacy_composite("abc_5_10", &store).is_none());
    }
}
