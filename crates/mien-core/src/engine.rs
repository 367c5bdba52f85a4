//! Evaluation pipeline orchestration and the engine error taxonomy.

use thiserror::Error;

use crate::rates;
use crate::stats;
use crate::sweep::{SweepConfig, ThresholdSweep};
use crate::types::{Evaluation, ScoreSet};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A score class with no samples cannot produce any metric. The error
    /// always surfaces to the caller; the engine never substitutes zeros or
    /// skips the unit itself.
    #[error("no {class} scores supplied; both score classes are required")]
    EmptyInput { class: &'static str },
}

/// Runs the full evaluation pipeline for one score set.
///
/// Holds a single threshold sweep reused across calls so several score sets
/// (for instance demographic subgroups) are evaluated at identical operating
/// points. Stateless otherwise: every call allocates its own curves, so
/// independent evaluations may run in parallel on a shared engine.
pub struct EvaluationEngine {
    sweep: ThresholdSweep,
}

impl EvaluationEngine {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            sweep: ThresholdSweep::new(&config),
        }
    }

    /// The threshold sweep shared by every evaluation this engine performs.
    pub fn sweep(&self) -> &ThresholdSweep {
        &self.sweep
    }

    /// Evaluate one score set under the given title.
    ///
    /// Computes the rate curve over the configured sweep, locates the EER
    /// operating point and the d-prime index, and bundles them into the
    /// terminal [`Evaluation`] artifact.
    pub fn evaluate(&self, title: &str, scores: &ScoreSet) -> Result<Evaluation, EvalError> {
        if scores.genuine.is_empty() {
            return Err(EvalError::EmptyInput { class: "genuine" });
        }
        if scores.impostor.is_empty() {
            return Err(EvalError::EmptyInput { class: "impostor" });
        }

        let rate_curve = rates::compute_rates(scores, &self.sweep);
        let eer = rates::find_eer(&rate_curve);
        let d_prime = stats::d_prime(scores);

        tracing::debug!(
            title,
            genuine = scores.genuine.len(),
            impostor = scores.impostor.len(),
            d_prime,
            eer = eer.value,
            eer_threshold = eer.threshold,
            "evaluation complete"
        );

        Ok(Evaluation {
            title: title.to_string(),
            rate_curve,
            eer,
            d_prime,
        })
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}
