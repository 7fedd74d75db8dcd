//! Video directory scanning
//!
//! Filters the on-disk media files down to those with any associated
//! annotation, using the identifiers enumerated by the resolver.

use crate::error::Result;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Video filename extension the scanner recognizes.
const VIDEO_EXTENSION: &str = ".mp4";

/// List the `*.mp4` files in `video_dir` whose identifier (filename stem)
/// is known to the annotation store. Returns sorted filenames.
///
/// An identifier is known if any of:
/// 1. it is exactly a known id;
/// 2. the segment before its first underscore is a known id;
/// 3. it and some known id are mutual prefixes of each other.
pub fn annotated_video_files(video_dir: &Path, known: &BTreeSet<String>) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(video_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(video_id) = name.strip_suffix(VIDEO_EXTENSION) else {
            continue;
        };
        if is_known(video_id, known) {
            files.push(name.to_string());
        }
    }
    files.sort();
    info!(
        "found {} annotated video files in {}",
        files.len(),
        video_dir.display()
    );
    Ok(files)
}

fn is_known(video_id: &str, known: &BTreeSet<String>) -> bool {
    if known.contains(video_id) {
        return true;
    }
    if let Some((base_id, _)) = video_id.split_once('_') {
        if known.contains(base_id) {
            return true;
        }
    }
    known
        .iter()
        .any(|id| id.starts_with(video_id) || video_id.starts_with(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn known(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_filters_to_known_identifiers() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mp4", "b_0_10.mp4", "unrelated.mp4", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = annotated_video_files(dir.path(), &known(&["a", "b"])).unwrap();
        assert_eq!(files, vec!["a.mp4", "b_0_10.mp4"]);
    }

    #[test]
    fn test_mutual_prefix_containment() {
        assert!(is_known("abc", &known(&["abc_5_10"])));
        assert!(is_known("abc_5_10_extra", &known(&["abc_5_10"])));
        assert!(!is_known("xbc", &known(&["abc_5_10"])));
    }

    #[test]
    fn test_output_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.mp4", "a.mp4", "b.mp4"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = annotated_video_files(dir.path(), &known(&["a", "b", "c"])).unwrap();
        assert_eq!(files, vec!["a.mp4", "b.mp4", "c.mp4"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(annotated_video_files(&missing, &known(&["a"])).is_err());
    }
}
