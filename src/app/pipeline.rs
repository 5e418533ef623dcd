//! Shared leaderboard pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> validate -> rank -> summarize -> shape-for-display
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use tracing::info;

use crate::domain::{BoardConfig, RankedRecord, SummaryStats};
use crate::error::BoardError;
use crate::io::ingest::IngestedTable;
use crate::report::{ScoreHistogram, ScoreSeries, StandingRow};

/// All computed outputs of a single leaderboard run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub table: IngestedTable,
    pub board: Vec<RankedRecord>,
    pub stats: SummaryStats,
    pub standings: Vec<StandingRow>,
    pub score_series: ScoreSeries,
    pub histogram: ScoreHistogram,
}

/// Execute the full pipeline against the configured source file.
pub fn run_board(config: &BoardConfig) -> Result<RunOutput, BoardError> {
    // 1) Load + validate the score CSV.
    let table = crate::io::ingest::load_score_records(config)?;

    run_board_with_table(config, table)
}

/// Execute the pipeline with an already-ingested table.
///
/// This is useful for the TUI where threshold/bin adjustments should recompute
/// without re-reading the file, and for tests driving in-memory tables.
pub fn run_board_with_table(
    config: &BoardConfig,
    table: IngestedTable,
) -> Result<RunOutput, BoardError> {
    // 2) Rank: stable score-descending order, dense ranks, medals.
    let board = crate::rank::rank_records(table.records.clone());

    // 3) Summarize the score column (order-independent).
    let scores: Vec<f64> = table.records.iter().map(|r| r.score).collect();
    let stats = crate::stats::summarize(&scores, config.high_score_threshold)?;

    // 4) Shape for the presentation layer.
    let standings = crate::report::standings(&board);
    let score_series = crate::report::score_series(&board, config.chart_reference_line);
    let histogram = crate::report::histogram(&scores, config.histogram_bin_count);

    info!(
        rows = table.records.len(),
        mean = stats.mean,
        above = stats.count_above_threshold,
        "leaderboard computed"
    );

    Ok(RunOutput {
        table,
        board,
        stats,
        standings,
        score_series,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Medal;

    fn table_from(csv: &str, config: &BoardConfig) -> IngestedTable {
        crate::io::ingest::read_score_records(csv.as_bytes(), config).unwrap()
    }

    #[test]
    fn full_run_on_competition_scenario() {
        let config = BoardConfig::default();
        let table = table_from("group,auc\nA,0.9\nB,0.9\nC,0.5\n", &config);
        let run = run_board_with_table(&config, table).unwrap();

        let order: Vec<(&str, usize, Option<Medal>)> = run
            .board
            .iter()
            .map(|r| (r.group.as_str(), r.rank, r.medal))
            .collect();
        assert_eq!(
            order,
            vec![
                ("A", 1, Some(Medal::Gold)),
                ("B", 2, Some(Medal::Silver)),
                ("C", 3, Some(Medal::Bronze)),
            ]
        );

        assert!((run.stats.mean - 2.3 / 3.0).abs() < 1e-9);
        assert!((run.stats.median - 0.9).abs() < 1e-9);
        assert_eq!(run.stats.count_above_threshold, 2);

        // Chart series mirror the ranked order and carry the reference line.
        let bars: Vec<&str> = run
            .score_series
            .bars
            .iter()
            .map(|b| b.group.as_str())
            .collect();
        assert_eq!(bars, vec!["A", "B", "C"]);
        assert!((run.score_series.reference_line - 0.7).abs() < 1e-12);
        let binned: usize = run.histogram.bins.iter().map(|b| b.count).sum();
        assert_eq!(binned, 3);
    }

    #[test]
    fn header_only_input_fails_with_insufficient_data() {
        let config = BoardConfig::default();
        let table = table_from("group,auc\n", &config);
        let err = run_board_with_table(&config, table).unwrap_err();
        assert!(matches!(err, BoardError::InsufficientData(_)));
    }

    #[test]
    fn missing_source_file_is_source_unavailable() {
        let config = BoardConfig {
            source_path: "definitely-not-here-12345.csv".into(),
            ..BoardConfig::default()
        };
        let err = run_board(&config).unwrap_err();
        assert!(matches!(err, BoardError::SourceUnavailable { .. }));
    }
}
