//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - bars: `#` columns, ranked order left to right
//! - reference line: `-` across empty cells
//! - histogram bins: `#` columns, low to high scores

use crate::report::{ScoreHistogram, ScoreSeries};

/// Render the per-group score bars with the horizontal reference line.
pub fn render_score_bars(series: &ScoreSeries, width: usize, height: usize) -> String {
    let height = height.max(5);

    let n = series.bars.len();
    if n == 0 {
        return "Bars: n=0\n".to_string();
    }

    let data_min = series
        .bars
        .iter()
        .map(|b| b.score)
        .fold(f64::INFINITY, f64::min);
    let data_max = series
        .bars
        .iter()
        .map(|b| b.score)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut y_min = 0.0_f64.min(data_min).min(series.reference_line);
    let mut y_max = data_max.max(series.reference_line);
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let (bar_width, grid_width) = bar_layout(n, width);
    let mut grid = vec![vec![' '; grid_width]; height];

    let baseline_row = map_y(0.0_f64.clamp(y_min, y_max), y_min, y_max, height);
    for (i, bar) in series.bars.iter().enumerate() {
        let top = map_y(bar.score, y_min, y_max, height);
        let (lo, hi) = if top <= baseline_row {
            (top, baseline_row)
        } else {
            (baseline_row, top)
        };
        let x0 = i * (bar_width + 1);
        for row in grid.iter_mut().take(hi + 1).skip(lo) {
            for cell in row.iter_mut().skip(x0).take(bar_width) {
                *cell = '#';
            }
        }
    }

    // Reference line over empty cells only, so bars stay readable.
    let ref_row = map_y(series.reference_line, y_min, y_max, height);
    for cell in grid[ref_row].iter_mut() {
        if *cell == ' ' {
            *cell = '-';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Bars: n={n} | y=[{y_min:.2}, {y_max:.2}] | ref={:.2}\n",
        series.reference_line
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Render the score-distribution histogram.
pub fn render_histogram(hist: &ScoreHistogram, width: usize, height: usize) -> String {
    let height = height.max(5);

    let n = hist.bins.len();
    if n == 0 {
        return "Histogram: bins=0\n".to_string();
    }

    let peak = hist.bins.iter().map(|b| b.count).max().unwrap_or(0);
    let lo = hist.bins.first().map(|b| b.lo).unwrap_or(0.0);
    let hi = hist.bins.last().map(|b| b.hi).unwrap_or(0.0);

    let mut out = String::new();
    out.push_str(&format!(
        "Histogram: bins={n} | score=[{lo:.2}, {hi:.2}] | peak={peak}\n"
    ));
    if peak == 0 {
        return out;
    }

    let (bar_width, grid_width) = bar_layout(n, width);
    let mut grid = vec![vec![' '; grid_width]; height];

    for (i, bin) in hist.bins.iter().enumerate() {
        if bin.count == 0 {
            continue;
        }
        let top = map_y(bin.count as f64, 0.0, peak as f64, height);
        let x0 = i * (bar_width + 1);
        for row in grid.iter_mut().take(height).skip(top) {
            for cell in row.iter_mut().skip(x0).take(bar_width) {
                *cell = '#';
            }
        }
    }

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Distribute `width` cells over `n` bars with single-cell gaps.
fn bar_layout(n: usize, width: usize) -> (usize, usize) {
    let width = width.max(10);
    let bar_width = (width.saturating_sub(n.saturating_sub(1)) / n).max(1);
    (bar_width, n * bar_width + (n - 1))
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{HistogramBin, ScoreBar};

    #[test]
    fn bars_golden_snapshot_small() {
        let series = ScoreSeries {
            bars: vec![
                ScoreBar {
                    group: "A".to_string(),
                    score: 1.0,
                    rank: 1,
                },
                ScoreBar {
                    group: "B".to_string(),
                    score: 0.5,
                    rank: 2,
                },
            ],
            reference_line: 0.75,
        };

        let txt = render_score_bars(&series, 10, 5);
        let expected = concat!(
            "Bars: n=2 | y=[0.00, 1.00] | ref=0.75\n",
            "####     \n",
            "####-----\n",
            "#### ####\n",
            "#### ####\n",
            "#### ####\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn histogram_golden_snapshot_small() {
        let hist = ScoreHistogram {
            bins: vec![
                HistogramBin {
                    lo: 0.5,
                    hi: 0.65,
                    count: 1,
                },
                HistogramBin {
                    lo: 0.65,
                    hi: 0.8,
                    count: 0,
                },
                HistogramBin {
                    lo: 0.8,
                    hi: 0.95,
                    count: 3,
                },
            ],
        };

        let txt = render_histogram(&hist, 10, 5);
        let expected = concat!(
            "Histogram: bins=3 | score=[0.50, 0.95] | peak=3\n",
            "      ##\n",
            "      ##\n",
            "      ##\n",
            "##    ##\n",
            "##    ##\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_series_renders_header_only() {
        let series = ScoreSeries {
            bars: Vec::new(),
            reference_line: 0.7,
        };
        assert_eq!(render_score_bars(&series, 40, 10), "Bars: n=0\n");
    }
}
