//! Synthetic leaderboard sample generation.
//!
//! Lets the dashboard be exercised (and demoed) without real course data:
//! seeded, reproducible scores drawn from a clamped normal distribution.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::ScoreRecord;
use crate::error::BoardError;

/// Settings for one synthetic sample.
#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub count: usize,
    pub seed: u64,
    /// Center of the score distribution.
    pub mean: f64,
    /// Spread of the score distribution.
    pub stddev: f64,
}

/// Generate `count` synthetic group scores.
///
/// Scores are drawn from `Normal(mean, stddev)` and clamped to `[0, 1]` so
/// they read as plausible AUC values. The same spec always produces the same
/// records.
pub fn generate_sample(spec: &SampleSpec) -> Result<Vec<ScoreRecord>, BoardError> {
    if spec.count == 0 {
        return Err(BoardError::config("sample count must be > 0"));
    }
    if !(spec.mean.is_finite() && spec.stddev.is_finite() && spec.stddev > 0.0) {
        return Err(BoardError::config(
            "sample mean must be finite and stddev finite and > 0",
        ));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(spec.mean, spec.stddev)
        .map_err(|e| BoardError::config(format!("score distribution error: {e}")))?;

    let mut records = Vec::with_capacity(spec.count);
    for i in 0..spec.count {
        let score: f64 = normal.sample(&mut rng);
        records.push(ScoreRecord {
            group: format!("group-{:02}", i + 1),
            score: score.clamp(0.0, 1.0),
            extras: Vec::new(),
        });
    }

    Ok(records)
}

/// Write generated records as a score CSV with the given column names.
pub fn write_sample_csv(
    path: &Path,
    records: &[ScoreRecord],
    group_column: &str,
    score_column: &str,
) -> Result<(), BoardError> {
    let mut file = File::create(path).map_err(|e| {
        BoardError::render(format!(
            "failed to create sample CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "{group_column},{score_column}")
        .map_err(|e| BoardError::render(format!("failed to write sample CSV header: {e}")))?;
    for record in records {
        writeln!(file, "{},{:.4}", record.group, record.score)
            .map_err(|e| BoardError::render(format!("failed to write sample CSV row: {e}")))?;
    }

    Ok(())
}
