//! Score file ingestion.
//!
//! The capture harness writes one CSV per test run with a header row and one
//! comparison per line. Required columns: `probe_id`, `ref_id`, `score`,
//! `label`. Optional columns carried through when present: `gender` and
//! `lighting_diff`. Fields never contain commas, so plain splitting is
//! sufficient.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreFileError {
    #[error("cannot read score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file has no header row")]
    NoHeader,
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {reason}")]
    BadRow { row: usize, reason: String },
}

/// Whether a comparison was against the probe's own reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLabel {
    Genuine,
    Impostor,
}

/// One probe-versus-reference comparison from a capture run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub probe_id: String,
    pub ref_id: String,
    pub score: f64,
    pub label: MatchLabel,
    pub gender: Option<String>,
    pub lighting_diff: Option<f64>,
}

/// Load and parse a scores CSV from disk.
pub fn load_scores(path: &Path) -> Result<Vec<ScoreRecord>, ScoreFileError> {
    let text = std::fs::read_to_string(path)?;
    let records = parse_scores(&text)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "score file loaded");
    Ok(records)
}

/// Parse scores CSV text. Blank lines are ignored; any malformed data row
/// fails the whole load with its line number.
pub fn parse_scores(text: &str) -> Result<Vec<ScoreRecord>, ScoreFileError> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines.next().ok_or(ScoreFileError::NoHeader)?;
    let columns: HashMap<&str, usize> = header
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let required = |name: &'static str| -> Result<usize, ScoreFileError> {
        columns
            .get(name)
            .copied()
            .ok_or(ScoreFileError::MissingColumn(name))
    };

    let probe_col = required("probe_id")?;
    let ref_col = required("ref_id")?;
    let score_col = required("score")?;
    let label_col = required("label")?;
    let gender_col = columns.get("gender").copied();
    let lighting_col = columns.get("lighting_diff").copied();

    let mut records = Vec::new();
    for (idx, line) in lines {
        let row = idx + 1; // 1-based, matches editor line numbers
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let score_text = field(&fields, score_col, "score", row)?;
        let score: f64 = score_text.parse().map_err(|_| ScoreFileError::BadRow {
            row,
            reason: format!("unparseable score '{score_text}'"),
        })?;

        let label = match field(&fields, label_col, "label", row)? {
            "genuine" => MatchLabel::Genuine,
            "impostor" => MatchLabel::Impostor,
            other => {
                return Err(ScoreFileError::BadRow {
                    row,
                    reason: format!("unknown label '{other}'"),
                })
            }
        };

        let lighting_diff = match lighting_col {
            Some(col) => {
                let text = field(&fields, col, "lighting_diff", row)?;
                Some(text.parse().map_err(|_| ScoreFileError::BadRow {
                    row,
                    reason: format!("unparseable lighting_diff '{text}'"),
                })?)
            }
            None => None,
        };

        records.push(ScoreRecord {
            probe_id: field(&fields, probe_col, "probe_id", row)?.to_string(),
            ref_id: field(&fields, ref_col, "ref_id", row)?.to_string(),
            score,
            label,
            gender: match gender_col {
                Some(col) => Some(field(&fields, col, "gender", row)?.to_string()),
                None => None,
            },
            lighting_diff,
        });
    }

    Ok(records)
}

fn field<'a>(
    fields: &[&'a str],
    col: usize,
    name: &str,
    row: usize,
) -> Result<&'a str, ScoreFileError> {
    fields.get(col).copied().ok_or_else(|| ScoreFileError::BadRow {
        row,
        reason: format!("missing field '{name}'"),
    })
}
