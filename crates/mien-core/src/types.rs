use serde::{Deserialize, Serialize};

/// Genuine and impostor similarity scores for one evaluation unit.
///
/// Scores are typically in [0, 1] but the engine does not clamp; range
/// enforcement belongs to the caller. Both sequences must be non-empty
/// before any metric is computable, checked at the engine boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Scores from same-identity comparisons.
    pub genuine: Vec<f64>,
    /// Scores from different-identity comparisons.
    pub impostor: Vec<f64>,
}

impl ScoreSet {
    pub fn new(genuine: Vec<f64>, impostor: Vec<f64>) -> Self {
        Self { genuine, impostor }
    }
}

/// FPR, FNR and TPR sampled over a threshold sweep.
///
/// All four sequences have equal length; the rates at index `i` correspond
/// to `thresholds[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCurve {
    pub thresholds: Vec<f64>,
    pub fpr: Vec<f64>,
    pub fnr: Vec<f64>,
    pub tpr: Vec<f64>,
}

impl RateCurve {
    /// Number of sampled operating points.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

/// The operating point where FPR and FNR are closest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EerPoint {
    /// 0.5 * (FPR + FNR) at the selected threshold.
    pub value: f64,
    /// Decision threshold at which the rates meet.
    pub threshold: f64,
}

/// Terminal evaluation artifact for one score set, consumed by reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub title: String,
    pub rate_curve: RateCurve,
    pub eer: EerPoint,
    pub d_prime: f64,
}
