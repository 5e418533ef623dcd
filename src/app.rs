//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments (with `AUC_BOARD_*` environment fallbacks)
//! - runs the leaderboard pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, SampleArgs, ShowArgs};
use crate::domain::BoardConfig;
use crate::error::BoardError;

pub mod pipeline;

/// Entry point for the `lb` binary.
pub fn run() -> Result<(), BoardError> {
    // Load `.env` before anything reads the environment overrides.
    dotenvy::dotenv().ok();

    // We want bare `lb` (and `lb -f scores.csv`) to behave like `lb tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    // The TUI owns the terminal, so the subscriber is only installed for the
    // plain-terminal subcommands.
    if !matches!(cli.command, Command::Tui(_)) {
        init_tracing();
    }

    match cli.command {
        Command::Show(args) => handle_show(args, OutputMode::Full),
        Command::Rank(args) => handle_show(args, OutputMode::RankOnly),
        Command::Sample(args) => handle_sample(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
}

fn handle_show(args: ShowArgs, mode: OutputMode) -> Result<(), BoardError> {
    let config = board_config_from_args(&args)?;
    let run = pipeline::run_board(&config)?;

    // Print terminal output.
    if mode == OutputMode::Full {
        println!(
            "{}",
            crate::report::format_run_summary(&run.table, &run.stats, &config)
        );
    }

    println!("{}", crate::report::format_standings(&run.standings));

    if mode == OutputMode::Full && config.plot {
        println!(
            "{}",
            crate::plot::render_score_bars(&run.score_series, config.plot_width, config.plot_height)
        );
        println!(
            "{}",
            crate::plot::render_histogram(&run.histogram, config.plot_width, config.plot_height)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_standings {
        crate::io::export::write_standings_csv(path, &run.standings, &run.table.extra_columns)?;
    }
    if let Some(path) = &config.export_board {
        crate::io::export::write_board_json(
            path,
            &config,
            &run.stats,
            &run.standings,
            &run.score_series,
            &run.histogram,
        )?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), BoardError> {
    let spec = crate::data::SampleSpec {
        count: args.count,
        seed: args.seed,
        mean: args.mean,
        stddev: args.stddev,
    };
    let records = crate::data::generate_sample(&spec)?;

    let group_column = args.group_column.as_deref().unwrap_or("group");
    let score_column = args.score_column.as_deref().unwrap_or("auc");
    crate::data::write_sample_csv(&args.out, &records, group_column, score_column)?;

    info!(path = %args.out.display(), count = records.len(), "wrote sample CSV");
    println!("Wrote {} synthetic groups to {}", records.len(), args.out.display());
    Ok(())
}

fn handle_tui(args: ShowArgs) -> Result<(), BoardError> {
    let config = board_config_from_args(&args)?;
    crate::tui::run(config)
}

/// Resolve the run configuration: CLI flag > environment override > default.
pub fn board_config_from_args(args: &ShowArgs) -> Result<BoardConfig, BoardError> {
    let defaults = BoardConfig::default();

    let config = BoardConfig {
        source_path: args
            .csv
            .clone()
            .or_else(|| std::env::var("AUC_BOARD_CSV").ok().map(Into::into))
            .unwrap_or(defaults.source_path),
        group_column: args
            .group_column
            .clone()
            .or_else(|| std::env::var("AUC_BOARD_GROUP_COLUMN").ok())
            .unwrap_or(defaults.group_column),
        score_column: args
            .score_column
            .clone()
            .or_else(|| std::env::var("AUC_BOARD_SCORE_COLUMN").ok())
            .unwrap_or(defaults.score_column),
        high_score_threshold: args
            .threshold
            .or(env_f64("AUC_BOARD_THRESHOLD")?)
            .unwrap_or(defaults.high_score_threshold),
        chart_reference_line: args
            .reference_line
            .or(env_f64("AUC_BOARD_REFERENCE_LINE")?)
            .unwrap_or(defaults.chart_reference_line),
        histogram_bin_count: args
            .bins
            .or(env_usize("AUC_BOARD_BINS")?)
            .unwrap_or(defaults.histogram_bin_count),
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_standings: args.export.clone(),
        export_board: args.export_json.clone(),
    };

    if !config.high_score_threshold.is_finite() {
        return Err(BoardError::config("threshold must be a finite number"));
    }
    if !config.chart_reference_line.is_finite() {
        return Err(BoardError::config("reference line must be a finite number"));
    }
    if config.histogram_bin_count == 0 {
        return Err(BoardError::config("histogram bin count must be >= 1"));
    }

    Ok(config)
}

fn env_f64(name: &str) -> Result<Option<f64>, BoardError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| BoardError::config(format!("invalid {name}=`{raw}`: expected a number"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(name: &str) -> Result<Option<usize>, BoardError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
            BoardError::config(format!("invalid {name}=`{raw}`: expected an integer"))
        }),
        Err(_) => Ok(None),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Rewrite argv so `lb` defaults to `lb tui`.
///
/// Rules:
/// - `lb`                      -> `lb tui`
/// - `lb -f scores.csv ...`    -> `lb tui -f scores.csv ...`
/// - `lb --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "rank" | "sample" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
