//! Presentation adapter: table rows and chart-ready series.
//!
//! Pure shaping — no drawing. The text formatter, the ASCII plots, the TUI
//! charts, and the exporters all consume these shapes; none of them reach back
//! into the pipeline. The core only guarantees the shape and ordering of the
//! data handed across this boundary.

use serde::{Deserialize, Serialize};

use crate::domain::{Medal, RankedRecord};

pub mod format;

pub use format::*;

/// One standings table row, in ranked order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: usize,
    pub medal: Option<Medal>,
    pub group: String,
    pub score: f64,
    /// Pass-through column values, aligned with `IngestedTable::extra_columns`.
    pub extras: Vec<String>,
}

/// Per-group scores in ranked order, with the horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSeries {
    pub bars: Vec<ScoreBar>,
    pub reference_line: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBar {
    pub group: String,
    pub score: f64,
    pub rank: usize,
}

/// Score distribution over equal-width bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistogram {
    pub bins: Vec<HistogramBin>,
}

/// A half-open bin `[lo, hi)`; the last bin also includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Shape the ranked board into table rows.
pub fn standings(board: &[RankedRecord]) -> Vec<StandingRow> {
    board
        .iter()
        .map(|r| StandingRow {
            rank: r.rank,
            medal: r.medal,
            group: r.group.clone(),
            score: r.score,
            extras: r.extras.clone(),
        })
        .collect()
}

/// Shape the ranked board into the bar-chart series.
pub fn score_series(board: &[RankedRecord], reference_line: f64) -> ScoreSeries {
    ScoreSeries {
        bars: board
            .iter()
            .map(|r| ScoreBar {
                group: r.group.clone(),
                score: r.score,
                rank: r.rank,
            })
            .collect(),
        reference_line,
    }
}

/// Bin scores into `bin_count` equal-width bins over `[min, max]`.
///
/// The maximum value lands in the last bin rather than opening a new one.
/// All-equal input degenerates to a single `[v, v]` bin holding every record.
pub fn histogram(scores: &[f64], bin_count: usize) -> ScoreHistogram {
    if scores.is_empty() {
        return ScoreHistogram { bins: Vec::new() };
    }

    let bin_count = bin_count.max(1);
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return ScoreHistogram {
            bins: vec![HistogramBin {
                lo: min,
                hi: max,
                count: scores.len(),
            }],
        };
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &v in scores {
        let idx = (((v - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count,
        })
        .collect();

    ScoreHistogram { bins }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScoreRecord;
    use crate::rank::rank_records;

    fn board() -> Vec<RankedRecord> {
        rank_records(vec![
            ScoreRecord {
                group: "A".to_string(),
                score: 0.9,
                extras: Vec::new(),
            },
            ScoreRecord {
                group: "B".to_string(),
                score: 0.5,
                extras: Vec::new(),
            },
        ])
    }

    #[test]
    fn standings_preserve_ranked_order() {
        let rows = standings(&board());
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].group, "A");
        assert_eq!(rows[0].medal, Some(Medal::Gold));
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].group, "B");
    }

    #[test]
    fn score_series_carries_reference_line() {
        let series = score_series(&board(), 0.7);
        assert!((series.reference_line - 0.7).abs() < 1e-12);
        let groups: Vec<&str> = series.bars.iter().map(|b| b.group.as_str()).collect();
        assert_eq!(groups, vec!["A", "B"]);
    }

    #[test]
    fn histogram_counts_cover_every_score() {
        let scores = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
        let hist = histogram(&scores, 10);
        assert_eq!(hist.bins.len(), 10);
        let total: usize = hist.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, scores.len());
    }

    #[test]
    fn maximum_value_lands_in_last_bin() {
        let hist = histogram(&[0.0, 0.5, 1.0], 4);
        assert_eq!(hist.bins.last().unwrap().count, 1);
        assert!((hist.bins.last().unwrap().hi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identical_scores_yield_single_bin() {
        let hist = histogram(&[0.7, 0.7, 0.7], 10);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
        assert!((hist.bins[0].lo - 0.7).abs() < 1e-12);
        assert!((hist.bins[0].hi - 0.7).abs() < 1e-12);
    }

    #[test]
    fn zero_bin_count_is_clamped_to_one() {
        let hist = histogram(&[0.1, 0.9], 0);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 2);
    }

    #[test]
    fn empty_scores_yield_no_bins() {
        assert!(histogram(&[], 10).bins.is_empty());
    }
}
