//! mien-report - Orchestration layer around the evaluation engine.
//!
//! Ingests matcher score files, buckets comparisons into subgroups (by
//! gender, by lighting difference), and persists evaluation results as JSON
//! reports plus rate-curve CSVs for external plotting.

pub mod report;
pub mod scores;
pub mod subgroup;

pub use report::{write_curve_csv, write_report, ReportError};
pub use scores::{load_scores, MatchLabel, ScoreFileError, ScoreRecord};
pub use subgroup::{by_gender, by_lighting_diff, whole_corpus, Subgroup};
