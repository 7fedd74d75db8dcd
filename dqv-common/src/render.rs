//! Text rendering of annotation records
//!
//! One pure string builder per inspection pane, mirroring the panes the
//! viewer shell displays: basic info, desire analysis, questions, timeline.
//! Absent optional fields render as `N/A` rather than being skipped, so a
//! reviewer can see which fields a record is missing.

use crate::annotations::{AnnotationRecord, Question};
use serde_json::Number;

/// Message shown in every pane when resolution finds no record.
pub const NO_ANNOTATION: &str = "No annotation found for this video";

/// Basic info pane: the identifier, its decoded base/span when it is a
/// composite filename stem, and both metadata generations when present.
pub fn basic_info(video_id: &str, record: &AnnotationRecord) -> String {
    let mut out = format!("Video file: {video_id}\n");

    let parts: Vec<&str> = video_id.split('_').collect();
    if parts.len() >= 3 {
        out.push_str(&format!("Base ID: {}\n", parts[0]));
        out.push_str(&format!("Time span: {}s - {}s\n", parts[1], parts[2]));
    }
    out.push('\n');

    if let Some(metadata) = &record.metadata {
        out.push_str("Metadata:\n");
        out.push_str(&format!(
            "  YouTube ID: {}\n",
            text_or_na(metadata.youtube_id.as_deref())
        ));
        out.push_str(&format!(
            "  Start: {}s\n",
            number_or_na(metadata.start_seconds.as_ref())
        ));
        out.push_str(&format!(
            "  End: {}s\n",
            number_or_na(metadata.end_seconds.as_ref())
        ));
        out.push_str(&format!(
            "  Annotated at: {}\n\n",
            text_or_na(metadata.annotated_at.as_deref())
        ));
    }

    if let Some(legacy) = &record.desire_analysis {
        out.push_str("Legacy metadata:\n");
        out.push_str(&format!(
            "  YouTube ID: {}\n",
            text_or_na(legacy.youtube_id.as_deref())
        ));
        out.push_str(&format!(
            "  Start: {}s\n",
            number_or_na(legacy.start_seconds.as_ref())
        ));
        out.push_str(&format!(
            "  End: {}s\n\n",
            number_or_na(legacy.end_seconds.as_ref())
        ));
    }

    out
}

/// Desire analysis pane: referent and ordered labels.
pub fn desire_analysis(record: &AnnotationRecord) -> String {
    let Some(desire) = &record.desire else {
        return "No desire analysis available\n".to_string();
    };

    let mut out = format!("Referent: {}\n\n", text_or_na(desire.referent.as_deref()));

    if !desire.labels.is_empty() {
        out.push_str("Labels:\n");
        for (i, label) in desire.labels.iter().enumerate() {
            out.push_str(&format!("\n[Label {}]\n", i + 1));
            out.push_str(&format!(
                "  Dimension: {}\n",
                text_or_na(label.dimension.as_deref())
            ));
            out.push_str(&format!(
                "  Sub-label: {}\n",
                text_or_na(label.sub_label.as_deref())
            ));
            out.push_str(&format!(
                "  Priority: {}\n",
                text_or_na(label.priority.as_deref())
            ));
            out.push_str(&format!(
                "  Confidence: {}\n",
                label
                    .confidence
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            ));
            out.push_str(&format!(
                "  Description: {}\n",
                text_or_na(label.description.as_deref())
            ));
            if let Some(evidence) = &label.supporting_evidence {
                out.push_str(&format!("  Supporting evidence: {}\n", evidence.join(", ")));
            }
        }
    }

    out
}

/// Questions pane: every question with its options, the correct option
/// ticked.
pub fn questions(record: &AnnotationRecord) -> String {
    if record.questions.is_empty() {
        return "No questions available\n".to_string();
    }

    let mut out = format!("{} questions:\n\n", record.questions.len());
    for (i, question) in record.questions.iter().enumerate() {
        out.push_str(&format!("[Question {}]\n", i + 1));
        out.push_str(&format!("  QID: {}\n", text_or_na(question.qid.as_deref())));
        out.push_str(&format!(
            "  Type: {}\n",
            text_or_na(question.question_type.as_deref())
        ));
        out.push_str(&format!(
            "  Question: {}\n",
            text_or_na(question.question.as_deref())
        ));
        out.push_str(&format!(
            "  Answer: {}\n",
            text_or_na(question.answer.as_deref())
        ));
        out.push_str(&format!(
            "  Answer index: {}\n",
            question
                .answer_index
                .map(|index| index.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        ));
        out.push_str(&render_options(question));
        out.push('\n');
    }

    out
}

fn render_options(question: &Question) -> String {
    if question.options.is_empty() {
        return String::new();
    }
    let mut out = "  Options:\n".to_string();
    for (j, option) in question.options.iter().enumerate() {
        let mark = if question.answer_index == Some(j) {
            "✓"
        } else {
            " "
        };
        out.push_str(&format!("    {mark} {j}. {option}\n"));
    }
    out
}

/// Timeline pane: the clip span and length from metadata, and one key-point
/// line per question.
pub fn timeline(video_id: &str, record: &AnnotationRecord) -> String {
    let mut out = format!("Current video: {video_id}\n\n");

    if let Some(metadata) = &record.metadata {
        let start = metadata.start_seconds.clone().unwrap_or_else(|| 0.into());
        let end = metadata.end_seconds.clone().unwrap_or_else(|| 0.into());
        out.push_str(&format!("Clip span: {start}s - {end}s\n"));
        out.push_str(&format!("Clip length: {}s\n\n", span_length(&start, &end)));
    }

    if !record.questions.is_empty() {
        out.push_str("Key points:\n");
        for (i, question) in record.questions.iter().enumerate() {
            out.push_str(&format!(
                "  Question {}: {} question\n",
                i + 1,
                text_or_na(question.question_type.as_deref())
            ));
        }
    }

    out
}

fn text_or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn number_or_na(value: Option<&Number>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Integer arithmetic when both endpoints are integers, so `10 - 5`
/// renders `5` and `10.5 - 5.0` renders `5.5`.
fn span_length(start: &Number, end: &Number) -> String {
    match (start.as_i64(), end.as_i64()) {
        (Some(start), Some(end)) => (end - start).to_string(),
        _ => {
            let start = start.as_f64().unwrap_or(0.0);
            let end = end.as_f64().unwrap_or(0.0);
            (end - start).to_string()
        }
    }
}
