//! Annotation record model
//!
//! Records are semi-structured: every field is optional and unknown fields
//! are ignored, since the knowledge base predates this tool and carries
//! pipeline-specific extras. Two generations of clip metadata coexist in
//! the same document: the current `metadata` object and the legacy
//! `desire_analysis` object with capitalized field names.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One annotation record in the knowledge base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub metadata: Option<ClipMetadata>,
    pub desire_analysis: Option<LegacyAnalysis>,
    #[serde(rename = "Desire")]
    pub desire: Option<Desire>,
    #[serde(rename = "Questions", default)]
    pub questions: Vec<Question>,
}

/// Current-generation clip metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipMetadata {
    pub video_id: Option<String>,
    pub youtube_id: Option<String>,
    pub start_seconds: Option<Number>,
    pub end_seconds: Option<Number>,
    /// Opaque timestamp string, displayed verbatim.
    pub annotated_at: Option<String>,
}

/// Legacy clip metadata, kept for documents written by the old pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyAnalysis {
    #[serde(rename = "YouTube_ID")]
    pub youtube_id: Option<String>,
    #[serde(rename = "Start_Seconds")]
    pub start_seconds: Option<Number>,
    #[serde(rename = "End_Seconds")]
    pub end_seconds: Option<Number>,
}

/// Desire annotation: a referent plus an ordered list of labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Desire {
    #[serde(rename = "Referent")]
    pub referent: Option<String>,
    #[serde(rename = "Labels", default)]
    pub labels: Vec<DesireLabel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesireLabel {
    pub dimension: Option<String>,
    pub sub_label: Option<String>,
    pub priority: Option<String>,
    pub confidence: Option<f64>,
    pub description: Option<String>,
    pub supporting_evidence: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Question {
    pub qid: Option<String>,
    pub question_type: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Index into `options` for the correct answer.
    pub answer_index: Option<usize>,
    #[serde(default)]
    pub options: Vec<String>,
}

/// A youtube/start/end triple identifying a video segment, regardless of
/// which schema generation stored it.
///
/// The numeric fields keep their JSON form so the composite id reproduces
/// the document's own notation: `5` formats as `"5"`, `5.0` as `"5.0"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipReference {
    pub youtube_id: String,
    pub start_seconds: Number,
    pub end_seconds: Number,
}

impl ClipReference {
    /// Composite identifier `{youtube_id}_{start}_{end}`, used as a
    /// filename stem and alternate lookup key.
    pub fn composite_id(&self) -> String {
        format!(
            "{}_{}_{}",
            self.youtube_id, self.start_seconds, self.end_seconds
        )
    }
}

impl ClipMetadata {
    /// Extract the clip reference, if all three fields are present.
    pub fn clip_reference(&self) -> Option<ClipReference> {
        Some(ClipReference {
            youtube_id: self.youtube_id.clone()?,
            start_seconds: self.start_seconds.clone()?,
            end_seconds: self.end_seconds.clone()?,
        })
    }
}

impl LegacyAnalysis {
    /// Extract the clip reference, if all three fields are present.
    pub fn clip_reference(&self) -> Option<ClipReference> {
        Some(ClipReference {
            youtube_id: self.youtube_id.clone()?,
            start_seconds: self.start_seconds.clone()?,
            end_seconds: self.end_seconds.clone()?,
        })
    }
}
