//! Report persistence.
//!
//! Writes one JSON report per evaluated subgroup, plus the rate curve as a
//! plain CSV for whatever plotting tool renders the ROC/DET figures.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use mien_core::{Evaluation, RateCurve};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Evaluation result wrapped with provenance for the JSON report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    generated_at: String,
    genuine_count: usize,
    impostor_count: usize,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
}

/// Write `<dir>/<slug>.json` and return its path.
///
/// The report carries the full evaluation (title, rate curve, EER, d-prime)
/// plus sample counts and an RFC 3339 generation timestamp.
pub fn write_report(
    dir: &Path,
    slug: &str,
    evaluation: &Evaluation,
    genuine_count: usize,
    impostor_count: usize,
) -> Result<PathBuf, ReportError> {
    let report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        genuine_count,
        impostor_count,
        evaluation,
    };

    let path = dir.join(format!("{slug}.json"));
    std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}

/// Write `<dir>/<slug>_curve.csv` (threshold,fpr,fnr,tpr per row) and
/// return its path.
pub fn write_curve_csv(dir: &Path, slug: &str, curve: &RateCurve) -> Result<PathBuf, ReportError> {
    let mut text = String::from("threshold,fpr,fnr,tpr\n");
    for i in 0..curve.len() {
        let _ = writeln!(
            text,
            "{},{},{},{}",
            curve.thresholds[i], curve.fpr[i], curve.fnr[i], curve.tpr[i]
        );
    }

    let path = dir.join(format!("{slug}_curve.csv"));
    std::fs::write(&path, text)?;
    tracing::info!(path = %path.display(), points = curve.len(), "curve exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mien_core::{EvaluationEngine, ScoreSet, SweepConfig};

    fn sample_evaluation() -> Evaluation {
        let engine = EvaluationEngine::new(SweepConfig {
            lower: 0.0,
            upper: 1.0,
            count: 3,
        });
        engine
            .evaluate("sample", &ScoreSet::new(vec![0.6], vec![0.4]))
            .unwrap()
    }

    #[test]
    fn test_report_json_shape() {
        let dir = std::env::temp_dir().join("mien-report-test-json");
        std::fs::create_dir_all(&dir).unwrap();

        let evaluation = sample_evaluation();
        let path = write_report(&dir, "sample", &evaluation, 1, 1).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["title"], "sample");
        assert_eq!(parsed["genuine_count"], 1);
        assert_eq!(parsed["impostor_count"], 1);
        assert!(parsed["generated_at"].is_string());
        assert_eq!(parsed["rate_curve"]["thresholds"].as_array().unwrap().len(), 3);
        assert!(parsed["eer"]["value"].is_number());
        assert!(parsed["d_prime"].is_number());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_curve_csv_rows() {
        let dir = std::env::temp_dir().join("mien-report-test-csv");
        std::fs::create_dir_all(&dir).unwrap();

        let evaluation = sample_evaluation();
        let path = write_curve_csv(&dir, "sample", &evaluation.rate_curve).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "threshold,fpr,fnr,tpr");
        assert_eq!(lines.len(), 1 + evaluation.rate_curve.len());
        // Middle threshold row: t=0.5 separates the two scores perfectly.
        assert!(lines[2].starts_with("0.5,"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
