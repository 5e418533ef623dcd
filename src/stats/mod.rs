//! Summary statistics over the score column.

use crate::domain::SummaryStats;
use crate::error::BoardError;

/// Compute the statistics block for one run.
///
/// - mean: arithmetic mean
/// - median: middle value, or the average of the two middle values for even N
/// - stddev: sample standard deviation (N-1 denominator)
/// - count_above_threshold: strictly `>` — a score equal to the threshold does
///   not count
///
/// Fewer than 2 rows is `InsufficientData`: the sample standard deviation is
/// undefined there, and the statistics block is shown as one unit, so the whole
/// summary fails loudly instead of carrying a NaN.
pub fn summarize(scores: &[f64], threshold: f64) -> Result<SummaryStats, BoardError> {
    if scores.len() < 2 {
        return Err(BoardError::InsufficientData(format!(
            "summary statistics need at least 2 rows, got {}",
            scores.len()
        )));
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let variance = scores.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let stddev = variance.sqrt();

    let count_above_threshold = scores.iter().filter(|&&v| v > threshold).count();

    Ok(SummaryStats {
        mean,
        median,
        stddev,
        count_above_threshold,
        threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn matches_closed_form_on_known_fixture() {
        // 1..=5: mean 3, median 3, sample variance 2.5.
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.85).unwrap();
        assert!((stats.mean - 3.0).abs() < TOL);
        assert!((stats.median - 3.0).abs() < TOL);
        assert!((stats.stddev - 2.5_f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn median_averages_two_middle_values_for_even_count() {
        let stats = summarize(&[0.4, 0.8, 0.6, 0.2], 0.85).unwrap();
        assert!((stats.median - 0.5).abs() < TOL);
    }

    #[test]
    fn median_is_order_independent() {
        let a = summarize(&[0.9, 0.5, 0.7], 0.85).unwrap();
        let b = summarize(&[0.5, 0.7, 0.9], 0.85).unwrap();
        assert!((a.median - b.median).abs() < TOL);
        assert!((a.median - 0.7).abs() < TOL);
    }

    #[test]
    fn threshold_count_is_strictly_greater_than() {
        // 0.85 itself must NOT be counted.
        let stats = summarize(&[0.85, 0.86, 0.9, 0.2], 0.85).unwrap();
        assert_eq!(stats.count_above_threshold, 2);
    }

    #[test]
    fn competition_scenario() {
        // [("A",0.9),("B",0.9),("C",0.5)], threshold 0.85.
        let stats = summarize(&[0.9, 0.9, 0.5], 0.85).unwrap();
        assert!((stats.mean - 2.3 / 3.0).abs() < TOL);
        assert!((stats.median - 0.9).abs() < TOL);
        assert_eq!(stats.count_above_threshold, 2);
    }

    #[test]
    fn empty_input_is_insufficient() {
        let err = summarize(&[], 0.85).unwrap_err();
        assert!(matches!(err, BoardError::InsufficientData(_)));
    }

    #[test]
    fn single_row_is_insufficient() {
        // Sample stddev needs N >= 2; the block fails as one unit.
        let err = summarize(&[0.9], 0.85).unwrap_err();
        assert!(matches!(err, BoardError::InsufficientData(_)));
    }
}
