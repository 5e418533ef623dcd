//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the run configuration (`BoardConfig`)
//! - validated input rows (`ScoreRecord`)
//! - ranked output rows (`RankedRecord`, `Medal`)
//! - the statistics block (`SummaryStats`)
//! - the board JSON export schema (`BoardFile`)

pub mod types;

pub use types::*;
