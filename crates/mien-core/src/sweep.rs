//! Decision-threshold sweep shared by all rate computations of a run.

use serde::{Deserialize, Serialize};

/// Threshold sweep configuration.
///
/// The default range overshoots [0, 1] on both sides so the rate curves
/// reach FPR near 0 / FNR near 1 at one end and the reverse at the other,
/// keeping the EER search at an interior crossing instead of a boundary
/// artifact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepConfig {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            lower: -0.1,
            upper: 1.1,
            count: 500,
        }
    }
}

/// Immutable sequence of linearly spaced decision thresholds, endpoints
/// inclusive.
///
/// Built once per evaluation run and shared read-only across every rate
/// computation, so multiple score sets are compared at identical operating
/// points.
#[derive(Debug, Clone)]
pub struct ThresholdSweep {
    thresholds: Vec<f64>,
}

impl ThresholdSweep {
    pub fn new(config: &SweepConfig) -> Self {
        let thresholds = match config.count {
            0 => Vec::new(),
            1 => vec![config.lower],
            n => {
                let step = (config.upper - config.lower) / (n - 1) as f64;
                (0..n).map(|i| config.lower + step * i as f64).collect()
            }
        };
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Distance between adjacent thresholds.
    ///
    /// Bounds the discretization error of any operating point read off the
    /// sampled curves, the EER estimate in particular.
    pub fn spacing(&self) -> f64 {
        if self.thresholds.len() < 2 {
            0.0
        } else {
            self.thresholds[1] - self.thresholds[0]
        }
    }
}

impl Default for ThresholdSweep {
    fn default() -> Self {
        Self::new(&SweepConfig::default())
    }
}
