/// Decay sharpness of the similarity score. Fixed: historical results
/// were produced with this value and must stay comparable.
const DECAY: f64 = 5.0;

/// Scores how closely a real-time metric tracks its backtest counterpart.
///
/// Bounded in (0, 1]: identical values score 1.0 and large relative
/// divergence decays toward 0. A heuristic, not a hypothesis test.
pub fn similarity_score(backtest: f64, realtime: f64) -> f64 {
    if backtest == 0.0 && realtime == 0.0 {
        return 1.0;
    }
    let average_magnitude = (backtest.abs() + realtime.abs()) / 2.0;
    if average_magnitude == 0.0 {
        return 0.0;
    }
    let relative_diff = (backtest - realtime).abs() / average_magnitude;
    let score = (-DECAY * relative_diff).exp();
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_score_one() {
        assert_eq!(similarity_score(100.0, 100.0), 1.0);
        assert_eq!(similarity_score(-3.5, -3.5), 1.0);
        assert_eq!(similarity_score(0.0, 0.0), 1.0);
    }

    #[test]
    fn one_sided_zero_scores_zero() {
        // Relative difference saturates at 2, and exp(-10) rounds to 0.
        assert_eq!(similarity_score(100.0, 0.0), 0.0);
        assert_eq!(similarity_score(0.0, 5.0), 0.0);
    }

    #[test]
    fn moderate_divergence_decays_smoothly() {
        // |100 - 90| / 95 = 0.10526..; exp(-0.52631..) = 0.59077..
        assert_eq!(similarity_score(100.0, 90.0), 0.5908);
        // Symmetric in its arguments.
        assert_eq!(similarity_score(90.0, 100.0), 0.5908);
    }

    #[test]
    fn score_is_bounded() {
        for (bt, rt) in [(1.0, 1000.0), (-50.0, 50.0), (0.001, 999.0), (7.0, 7.0)] {
            let score = similarity_score(bt, rt);
            assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        }
    }
}
