//! Export the finished board to CSV/JSON.
//!
//! Exports are meant to be easy to consume in spreadsheets or downstream
//! scripts; the JSON file is the "portable" representation of one run
//! (standings + statistics + chart series + run metadata).

use std::fs::File;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::domain::{BoardConfig, BoardFile, SummaryStats};
use crate::error::BoardError;
use crate::report::{ScoreHistogram, ScoreSeries, StandingRow};

/// Write the standings table to a CSV file.
///
/// Pass-through columns from the source file are appended after the score,
/// keeping their original order.
pub fn write_standings_csv(
    path: &Path,
    rows: &[StandingRow],
    extra_columns: &[String],
) -> Result<(), BoardError> {
    let file = File::create(path).map_err(|e| {
        BoardError::render(format!(
            "failed to create standings CSV '{}': {e}",
            path.display()
        ))
    })?;

    let mut writer = csv::Writer::from_writer(file);

    let mut header = vec![
        "rank".to_string(),
        "medal".to_string(),
        "group".to_string(),
        "score".to_string(),
    ];
    header.extend(extra_columns.iter().cloned());
    writer
        .write_record(&header)
        .map_err(|e| BoardError::render(format!("failed to write standings CSV header: {e}")))?;

    for row in rows {
        let mut record = vec![
            row.rank.to_string(),
            row.medal.map(|m| m.display_name()).unwrap_or("").to_string(),
            row.group.clone(),
            format!("{:.6}", row.score),
        ];
        record.extend(row.extras.iter().cloned());
        writer
            .write_record(&record)
            .map_err(|e| BoardError::render(format!("failed to write standings CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| BoardError::render(format!("failed to flush standings CSV: {e}")))?;

    info!(path = %path.display(), rows = rows.len(), "wrote standings CSV");
    Ok(())
}

/// Write the board JSON file.
pub fn write_board_json(
    path: &Path,
    config: &BoardConfig,
    stats: &SummaryStats,
    standings: &[StandingRow],
    score_series: &ScoreSeries,
    histogram: &ScoreHistogram,
) -> Result<(), BoardError> {
    let file = File::create(path).map_err(|e| {
        BoardError::render(format!(
            "failed to create board JSON '{}': {e}",
            path.display()
        ))
    })?;

    let board = BoardFile {
        tool: "lb".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Local::now().to_rfc3339(),
        source: config.source_path.display().to_string(),
        group_column: config.group_column.clone(),
        score_column: config.score_column.clone(),
        stats: stats.clone(),
        standings: standings.to_vec(),
        score_series: score_series.clone(),
        histogram: histogram.clone(),
    };

    serde_json::to_writer_pretty(file, &board)
        .map_err(|e| BoardError::render(format!("failed to write board JSON: {e}")))?;

    info!(path = %path.display(), "wrote board JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Medal;

    #[test]
    fn board_file_serializes_with_expected_keys() {
        let board = BoardFile {
            tool: "lb".to_string(),
            version: "0.1.0".to_string(),
            generated_at: "2025-09-01T12:00:00+02:00".to_string(),
            source: "group_auc_results.csv".to_string(),
            group_column: "group".to_string(),
            score_column: "auc".to_string(),
            stats: SummaryStats {
                mean: 0.7,
                median: 0.7,
                stddev: 0.1,
                count_above_threshold: 1,
                threshold: 0.85,
            },
            standings: vec![StandingRow {
                rank: 1,
                medal: Some(Medal::Gold),
                group: "alpha".to_string(),
                score: 0.9,
                extras: Vec::new(),
            }],
            score_series: ScoreSeries {
                bars: Vec::new(),
                reference_line: 0.7,
            },
            histogram: ScoreHistogram { bins: Vec::new() },
        };

        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("\"standings\""));
        assert!(json.contains("\"reference_line\""));
        assert!(json.contains("\"gold\""));
        assert!(json.contains("\"count_above_threshold\""));
    }
}
