//! Subgroup bucketing ahead of evaluation.
//!
//! Splits a score corpus into named subgroups, each with its own genuine and
//! impostor score sets. Subgroups missing one of the two classes are skipped
//! with a warning here, in the orchestration layer; the engine itself never
//! skips.

use mien_core::ScoreSet;

use crate::scores::{MatchLabel, ScoreRecord};

/// Gender groups recorded by the capture harness.
const GENDERS: [&str; 2] = ["male", "female"];

/// Lighting-difference buckets over the 0-255 brightness scale: a bucket
/// covers (lower, upper], with the first bucket including its lower bound.
const LIGHTING_BUCKETS: [(&str, f64, f64); 3] = [
    ("low", 0.0, 15.0),
    ("medium", 15.0, 40.0),
    ("high", 40.0, 255.0),
];

/// A labeled slice of the score corpus, ready for evaluation.
#[derive(Debug, Clone)]
pub struct Subgroup {
    pub label: String,
    pub scores: ScoreSet,
}

fn split_scores<'a, I>(records: I) -> ScoreSet
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    let mut scores = ScoreSet::new(Vec::new(), Vec::new());
    for record in records {
        match record.label {
            MatchLabel::Genuine => scores.genuine.push(record.score),
            MatchLabel::Impostor => scores.impostor.push(record.score),
        }
    }
    scores
}

fn keep_if_complete(label: &str, scores: ScoreSet) -> Option<Subgroup> {
    if scores.genuine.is_empty() || scores.impostor.is_empty() {
        tracing::warn!(
            subgroup = label,
            genuine = scores.genuine.len(),
            impostor = scores.impostor.len(),
            "not enough data, skipping subgroup"
        );
        return None;
    }
    Some(Subgroup {
        label: label.to_string(),
        scores,
    })
}

/// The whole corpus as a single subgroup. No skip policy applies: an
/// incomplete corpus surfaces as an engine error downstream.
pub fn whole_corpus(records: &[ScoreRecord]) -> Subgroup {
    Subgroup {
        label: "all".to_string(),
        scores: split_scores(records),
    }
}

/// One subgroup per known gender, in the harness's fixed order.
pub fn by_gender(records: &[ScoreRecord]) -> Vec<Subgroup> {
    GENDERS
        .iter()
        .filter_map(|&gender| {
            let scores = split_scores(
                records
                    .iter()
                    .filter(|r| r.gender.as_deref() == Some(gender)),
            );
            keep_if_complete(gender, scores)
        })
        .collect()
}

/// One subgroup per lighting-difference bucket.
///
/// Records without a `lighting_diff` value, or with one outside the 0-255
/// scale, fall into no bucket.
pub fn by_lighting_diff(records: &[ScoreRecord]) -> Vec<Subgroup> {
    LIGHTING_BUCKETS
        .iter()
        .filter_map(|&(label, lower, upper)| {
            let in_bucket = |diff: f64| {
                if lower == 0.0 {
                    diff >= lower && diff <= upper
                } else {
                    diff > lower && diff <= upper
                }
            };
            let scores = split_scores(
                records
                    .iter()
                    .filter(|r| r.lighting_diff.is_some_and(in_bucket)),
            );
            keep_if_complete(label, scores)
        })
        .collect()
}
