//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during ranking and summarizing
//! - exported to JSON/CSV
//! - rendered by the terminal report, the ASCII plots, and the TUI

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default source file, matching the course hand-in convention.
pub const DEFAULT_SOURCE: &str = "group_auc_results.csv";
/// Default group-identifier column name.
pub const DEFAULT_GROUP_COLUMN: &str = "group";
/// Default numeric score column name.
pub const DEFAULT_SCORE_COLUMN: &str = "auc";
/// Default cutoff for the "groups above threshold" statistic (strict `>`).
pub const DEFAULT_HIGH_SCORE_THRESHOLD: f64 = 0.85;
/// Default horizontal reference line drawn on the score chart.
pub const DEFAULT_CHART_REFERENCE_LINE: f64 = 0.7;
/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// One validated input row, in input order.
///
/// `extras` holds the values of pass-through columns (everything except the
/// group and score columns), aligned with `IngestedTable::extra_columns`.
/// Records are immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub group: String,
    pub score: f64,
    pub extras: Vec<String>,
}

/// Rank-based annotation for the top three positions.
///
/// Medals go to positions, not score values: two groups tied on score still
/// occupy distinct consecutive ranks, and only ranks 1–3 are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a dense 1-based rank, if any.
    pub fn for_rank(rank: usize) -> Option<Medal> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    /// Table/terminal label.
    pub fn display_name(self) -> &'static str {
        match self {
            Medal::Gold => "GOLD",
            Medal::Silver => "SILVER",
            Medal::Bronze => "BRONZE",
        }
    }
}

/// A ranked row derived from a `ScoreRecord`.
///
/// `rank` is dense and 1-based; ties on score keep their relative input order
/// (the Ranker's documented tie-break), which also decides who nominally takes
/// a medal.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub group: String,
    pub score: f64,
    pub rank: usize,
    pub medal: Option<Medal>,
    pub extras: Vec<String>,
}

/// Aggregate statistics over the score column for one run.
///
/// `stddev` is the sample standard deviation (N-1 denominator);
/// `count_above_threshold` counts scores strictly greater than `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub count_above_threshold: usize,
    pub threshold: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags plus `AUC_BOARD_*` environment overrides
/// (flags win), with the documented defaults filling the rest. Nothing here is
/// ambient/global state: every entry point takes the config explicitly.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub source_path: PathBuf,
    pub group_column: String,
    pub score_column: String,

    /// Cutoff for the "groups above threshold" statistic (strict `>`).
    pub high_score_threshold: f64,
    /// Horizontal reference line on the per-group score chart.
    pub chart_reference_line: f64,
    /// Number of equal-width histogram bins (at least 1).
    pub histogram_bin_count: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_standings: Option<PathBuf>,
    pub export_board: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE),
            group_column: DEFAULT_GROUP_COLUMN.to_string(),
            score_column: DEFAULT_SCORE_COLUMN.to_string(),
            high_score_threshold: DEFAULT_HIGH_SCORE_THRESHOLD,
            chart_reference_line: DEFAULT_CHART_REFERENCE_LINE,
            histogram_bin_count: DEFAULT_HISTOGRAM_BINS,
            plot: true,
            plot_width: 100,
            plot_height: 25,
            export_standings: None,
            export_board: None,
        }
    }
}

/// A saved board file (JSON).
///
/// The "portable" representation of one finished run: standings, statistics,
/// and the two chart-ready series, plus enough metadata to reproduce the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFile {
    pub tool: String,
    pub version: String,
    pub generated_at: String,
    pub source: String,
    pub group_column: String,
    pub score_column: String,
    pub stats: SummaryStats,
    pub standings: Vec<crate::report::StandingRow>,
    pub score_series: crate::report::ScoreSeries,
    pub histogram: crate::report::ScoreHistogram,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medals_cover_exactly_top_three() {
        assert_eq!(Medal::for_rank(1), Some(Medal::Gold));
        assert_eq!(Medal::for_rank(2), Some(Medal::Silver));
        assert_eq!(Medal::for_rank(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_rank(4), None);
        assert_eq!(Medal::for_rank(0), None);
    }

    #[test]
    fn config_defaults_match_documented_values() {
        let config = BoardConfig::default();
        assert_eq!(config.source_path, PathBuf::from("group_auc_results.csv"));
        assert_eq!(config.group_column, "group");
        assert_eq!(config.score_column, "auc");
        assert!((config.high_score_threshold - 0.85).abs() < 1e-12);
        assert!((config.chart_reference_line - 0.7).abs() < 1e-12);
        assert_eq!(config.histogram_bin_count, 10);
    }
}
