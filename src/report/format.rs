//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the ranking/statistics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{BoardConfig, SummaryStats};
use crate::io::ingest::IngestedTable;

use super::StandingRow;

/// Format the run summary (source, row counts, config echo, statistics).
pub fn format_run_summary(
    table: &IngestedTable,
    stats: &SummaryStats,
    config: &BoardConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== lb - group score leaderboard ===\n");
    out.push_str(&format!("Source: {}\n", config.source_path.display()));
    out.push_str(&format!(
        "Columns: group=`{}` score=`{}`",
        config.group_column, config.score_column
    ));
    if !table.extra_columns.is_empty() {
        out.push_str(&format!(" | pass-through: {}", table.extra_columns.join(", ")));
    }
    out.push('\n');
    out.push_str(&format!("Rows: n={}\n", table.records.len()));

    out.push_str("\nStatistics:\n");
    out.push_str(&format!("  mean   : {:.3}\n", stats.mean));
    out.push_str(&format!("  median : {:.3}\n", stats.median));
    out.push_str(&format!("  stddev : {:.3} (sample)\n", stats.stddev));
    out.push_str(&format!(
        "  groups > {:.2}: {}\n",
        stats.threshold, stats.count_above_threshold
    ));
    out.push('\n');

    out
}

/// Format the standings table.
pub fn format_standings(rows: &[StandingRow]) -> String {
    let mut out = String::new();

    out.push_str("Current standings:\n");
    out.push_str(
        format!("{:>4} {:<7} {:<24} {:>8}\n", "rank", "medal", "group", "score").trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:->4} {:-<7} {:-<24} {:->8}\n", "", "", "", "").trim_end());
    out.push('\n');

    for row in rows {
        let medal = row.medal.map(|m| m.display_name()).unwrap_or("");
        out.push_str(
            format!(
                "{:>4} {:<7} {:<24} {:>8.4}\n",
                row.rank,
                medal,
                truncate(&row.group, 24),
                row.score,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Medal;

    fn row(rank: usize, group: &str, score: f64) -> StandingRow {
        StandingRow {
            rank,
            medal: Medal::for_rank(rank),
            group: group.to_string(),
            score,
            extras: Vec::new(),
        }
    }

    #[test]
    fn standings_table_lists_medals_for_podium_only() {
        let text = format_standings(&[
            row(1, "alpha", 0.93),
            row(2, "beta", 0.88),
            row(3, "gamma", 0.71),
            row(4, "delta", 0.55),
        ]);

        assert!(text.contains("GOLD"));
        assert!(text.contains("SILVER"));
        assert!(text.contains("BRONZE"));
        // Rank 4 line carries no medal label.
        let rank4 = text.lines().find(|l| l.contains("delta")).unwrap();
        assert!(!rank4.contains("GOLD"));
        assert!(!rank4.contains("SILVER"));
        assert!(!rank4.contains("BRONZE"));
    }

    #[test]
    fn long_group_names_are_truncated() {
        let text = format_standings(&[row(1, &"x".repeat(40), 0.9)]);
        let line = text.lines().find(|l| l.contains('x')).unwrap();
        assert!(line.contains(&format!("{}.", "x".repeat(23))));
    }

    #[test]
    fn run_summary_shows_statistics_block() {
        let table = IngestedTable {
            records: vec![
                crate::domain::ScoreRecord {
                    group: "a".to_string(),
                    score: 0.9,
                    extras: Vec::new(),
                },
                crate::domain::ScoreRecord {
                    group: "b".to_string(),
                    score: 0.5,
                    extras: Vec::new(),
                },
            ],
            extra_columns: Vec::new(),
            rows_read: 2,
        };
        let stats = crate::stats::summarize(&[0.9, 0.5], 0.85).unwrap();
        let text = format_run_summary(&table, &stats, &BoardConfig::default());

        assert!(text.contains("Rows: n=2"));
        assert!(text.contains("mean   : 0.700"));
        assert!(text.contains("groups > 0.85: 1"));
    }
}
