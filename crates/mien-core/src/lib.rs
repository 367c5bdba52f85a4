//! mien-core - Verification-performance evaluation engine.
//!
//! Given genuine (same identity) and impostor (different identity) similarity
//! score distributions from a face matcher, computes rate curves (FPR, FNR,
//! TPR) over a threshold sweep, the Equal Error Rate operating point, and the
//! d-prime decidability index.

pub mod engine;
pub mod rates;
pub mod stats;
pub mod sweep;
pub mod types;

pub use engine::{EvalError, EvaluationEngine};
pub use sweep::{SweepConfig, ThresholdSweep};
pub use types::{EerPoint, Evaluation, RateCurve, ScoreSet};

/// Stabilizer added to denominators so degenerate inputs stay finite.
pub(crate) const EPS: f64 = 1e-9;
