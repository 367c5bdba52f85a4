//! Per-threshold error rates and the EER search.

use crate::sweep::ThresholdSweep;
use crate::types::{EerPoint, RateCurve, ScoreSet};
use crate::EPS;

/// Compute FPR, FNR and TPR at every threshold of the sweep.
///
/// At threshold `t`, a genuine score at or above `t` counts as a true
/// positive and below as a false negative; an impostor score at or above
/// `t` counts as a false positive and below as a true negative. Rates are
/// stabilized with a small epsilon so extreme thresholds where one class
/// empties out divide cleanly.
///
/// Each threshold is computed independently. As `t` rises, FPR and TPR are
/// non-increasing and FNR is non-decreasing in aggregate; that monotonicity
/// is a verified property of the output, not an assumption the computation
/// relies on.
pub fn compute_rates(scores: &ScoreSet, sweep: &ThresholdSweep) -> RateCurve {
    let n = sweep.len();
    let mut fpr = Vec::with_capacity(n);
    let mut fnr = Vec::with_capacity(n);
    let mut tpr = Vec::with_capacity(n);

    for &t in sweep.thresholds() {
        let true_pos = scores.genuine.iter().filter(|&&s| s >= t).count() as f64;
        let false_neg = scores.genuine.iter().filter(|&&s| s < t).count() as f64;
        let false_pos = scores.impostor.iter().filter(|&&s| s >= t).count() as f64;
        let true_neg = scores.impostor.iter().filter(|&&s| s < t).count() as f64;

        fpr.push(false_pos / (false_pos + true_neg + EPS));
        fnr.push(false_neg / (true_pos + false_neg + EPS));
        tpr.push(true_pos / (true_pos + false_neg + EPS));
    }

    RateCurve {
        thresholds: sweep.thresholds().to_vec(),
        fpr,
        fnr,
        tpr,
    }
}

/// Locate the EER operating point on a rate curve.
///
/// Scans for the index minimizing |FPR - FNR|; ties resolve to the first
/// (lowest-threshold) occurrence so repeated runs are reproducible. The
/// reported EER is 0.5 * (FPR + FNR) at that sample.
///
/// This is a discrete approximation: the true FPR = FNR crossing generally
/// falls between two samples, so the result carries an error bounded by the
/// sweep spacing. Interpolating the exact crossing would change output
/// values and is deliberately not done here. The curve must contain at
/// least one sample.
pub fn find_eer(curve: &RateCurve) -> EerPoint {
    let mut best = 0;
    let mut best_diff = f64::INFINITY;

    for (i, (fpr, fnr)) in curve.fpr.iter().zip(curve.fnr.iter()).enumerate() {
        let diff = (fpr - fnr).abs();
        if diff < best_diff {
            best_diff = diff;
            best = i;
        }
    }

    EerPoint {
        value: 0.5 * (curve.fpr[best] + curve.fnr[best]),
        threshold: curve.thresholds[best],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepConfig;

    fn sweep(lower: f64, upper: f64, count: usize) -> ThresholdSweep {
        ThresholdSweep::new(&SweepConfig {
            lower,
            upper,
            count,
        })
    }

    #[test]
    fn test_curve_lengths_match_sweep() {
        let scores = ScoreSet::new(vec![0.8, 0.9], vec![0.1, 0.2, 0.3]);
        let sweep = ThresholdSweep::default();
        let curve = compute_rates(&scores, &sweep);
        assert_eq!(curve.len(), sweep.len());
        assert_eq!(curve.fpr.len(), curve.len());
        assert_eq!(curve.fnr.len(), curve.len());
        assert_eq!(curve.tpr.len(), curve.len());
    }

    #[test]
    fn test_rates_stay_in_unit_interval() {
        let scores = ScoreSet::new(vec![0.7, 0.75, 0.9, 0.4], vec![0.1, 0.5, 0.45]);
        let curve = compute_rates(&scores, &ThresholdSweep::default());
        for i in 0..curve.len() {
            for rate in [curve.fpr[i], curve.fnr[i], curve.tpr[i]] {
                assert!((0.0..=1.0).contains(&rate), "rate out of range: {rate}");
            }
        }
    }

    #[test]
    fn test_monotonicity_over_ascending_thresholds() {
        let scores = ScoreSet::new(
            vec![0.91, 0.85, 0.85, 0.7, 0.66, 0.95],
            vec![0.05, 0.2, 0.2, 0.31, 0.44, 0.12],
        );
        let curve = compute_rates(&scores, &ThresholdSweep::default());
        for i in 1..curve.len() {
            assert!(curve.fpr[i] <= curve.fpr[i - 1] + 1e-12, "FPR rose at {i}");
            assert!(curve.tpr[i] <= curve.tpr[i - 1] + 1e-12, "TPR rose at {i}");
            assert!(curve.fnr[i] >= curve.fnr[i - 1] - 1e-12, "FNR fell at {i}");
        }
    }

    #[test]
    fn test_hand_computed_three_threshold_curve() {
        // Thresholds [0, 0.5, 1] with genuine=[0.6], impostor=[0.4]:
        //   t=0.0: TP=1 FN=0 FP=1 TN=0 -> FPR=1, FNR=0, TPR=1
        //   t=0.5: TP=1 FN=0 FP=0 TN=1 -> FPR=0, FNR=0, TPR=1
        //   t=1.0: TP=0 FN=1 FP=0 TN=1 -> FPR=0, FNR=1, TPR=0
        let scores = ScoreSet::new(vec![0.6], vec![0.4]);
        let curve = compute_rates(&scores, &sweep(0.0, 1.0, 3));

        let expect = |got: f64, want: f64| {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        };

        expect(curve.fpr[0], 1.0);
        expect(curve.fnr[0], 0.0);
        expect(curve.tpr[0], 1.0);

        expect(curve.fpr[1], 0.0);
        expect(curve.fnr[1], 0.0);
        expect(curve.tpr[1], 1.0);

        expect(curve.fpr[2], 0.0);
        expect(curve.fnr[2], 1.0);
        expect(curve.tpr[2], 0.0);

        let eer = find_eer(&curve);
        assert!(eer.value < 1e-6);
        expect(eer.threshold, 0.5);
    }

    #[test]
    fn test_eer_tie_break_takes_lowest_threshold() {
        // Flat curve: every index ties, so the first threshold must win.
        let curve = RateCurve {
            thresholds: vec![0.1, 0.2, 0.3],
            fpr: vec![0.4, 0.4, 0.4],
            fnr: vec![0.4, 0.4, 0.4],
            tpr: vec![0.6, 0.6, 0.6],
        };
        let eer = find_eer(&curve);
        assert!((eer.threshold - 0.1).abs() < 1e-12);
        assert!((eer.value - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_score_equal_to_threshold_counts_as_accept() {
        let scores = ScoreSet::new(vec![0.5], vec![0.5]);
        let curve = compute_rates(&scores, &sweep(0.5, 1.0, 2));
        // At t=0.5 both scores are accepted: TPR=1, FPR=1.
        assert!((curve.tpr[0] - 1.0).abs() < 1e-6);
        assert!((curve.fpr[0] - 1.0).abs() < 1e-6);
    }
}
