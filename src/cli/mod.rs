//! Command-line parsing for the leaderboard tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lb", version, about = "Group score leaderboard (CSV-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the score CSV, print statistics + standings, and optionally plot/export.
    Show(ShowArgs),
    /// Print the standings table only (useful for scripting).
    Rank(ShowArgs),
    /// Write a synthetic demo CSV (seeded, reproducible).
    Sample(SampleArgs),
    /// Launch the interactive TUI dashboard.
    ///
    /// This uses the same underlying pipeline as `lb show`, but renders the
    /// standings and charts in a terminal UI using Ratatui.
    Tui(ShowArgs),
}

/// Common options for showing and ranking.
///
/// Unset flags fall back to `AUC_BOARD_*` environment overrides, then to the
/// documented defaults.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Score CSV path (default: group_auc_results.csv).
    #[arg(short = 'f', long = "csv")]
    pub csv: Option<PathBuf>,

    /// Group-identifier column name (default: group).
    #[arg(long)]
    pub group_column: Option<String>,

    /// Numeric score column name (default: auc).
    #[arg(long)]
    pub score_column: Option<String>,

    /// High-score cutoff for the "groups above threshold" statistic,
    /// strictly `>` (default: 0.85).
    #[arg(short = 't', long)]
    pub threshold: Option<f64>,

    /// Horizontal reference line on the score chart (default: 0.7).
    #[arg(long)]
    pub reference_line: Option<f64>,

    /// Number of histogram bins (default: 10).
    #[arg(long)]
    pub bins: Option<usize>,

    /// Render ASCII charts in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal charts.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the standings table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full board (standings + stats + chart series) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for generating a synthetic demo CSV.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Output CSV path.
    #[arg(short = 'o', long, default_value = "group_auc_results.csv")]
    pub out: PathBuf,

    /// Number of groups to generate.
    #[arg(short = 'n', long, default_value_t = 24)]
    pub count: usize,

    /// Random seed (same seed, same scores).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Center of the score distribution.
    #[arg(long, default_value_t = 0.78)]
    pub mean: f64,

    /// Spread of the score distribution.
    #[arg(long, default_value_t = 0.08)]
    pub stddev: f64,

    /// Group-identifier column name in the written file (default: group).
    #[arg(long)]
    pub group_column: Option<String>,

    /// Score column name in the written file (default: auc).
    #[arg(long)]
    pub score_column: Option<String>,
}
