//! CSV ingest and validation.
//!
//! This module is responsible for turning the score CSV into a clean,
//! input-ordered sequence of `ScoreRecord`s that are safe to rank.
//!
//! Design goals:
//! - **Strict schema** for the group/score columns (clear errors + exit code 2)
//! - **All-or-nothing validation**: the first bad row aborts the run — a
//!   leaderboard with silently dropped entries is worse than a loud failure
//! - **Deterministic behavior** (input order preserved, no hidden coercions)
//! - **Separation of concerns**: no ranking or statistics here

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use crate::domain::{BoardConfig, ScoreRecord};
use crate::error::BoardError;

/// Ingest output: validated records + pass-through column names.
///
/// `extra_columns` lists every header that is neither the group nor the score
/// column, in declaration order; each record's `extras` is aligned with it.
#[derive(Debug, Clone)]
pub struct IngestedTable {
    pub records: Vec<ScoreRecord>,
    pub extra_columns: Vec<String>,
    pub rows_read: usize,
}

/// Load and validate the score CSV named by the config.
pub fn load_score_records(config: &BoardConfig) -> Result<IngestedTable, BoardError> {
    let file = File::open(&config.source_path).map_err(|e| BoardError::SourceUnavailable {
        path: config.source_path.clone(),
        source: e,
    })?;
    read_score_records(file, config)
}

/// Validate score rows from any reader (in-memory buffers, tests).
pub fn read_score_records<R: Read>(
    reader: R,
    config: &BoardConfig,
) -> Result<IngestedTable, BoardError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| BoardError::MalformedTable {
            line: 1,
            message: format!("failed to read CSV header: {e}"),
        })?
        .clone();

    let header_map = build_header_map(&headers);

    let group_name = normalize_header_name(&config.group_column);
    let score_name = normalize_header_name(&config.score_column);

    // Required columns are checked before any row is parsed, so a missing
    // score column fails regardless of row content.
    let group_idx = *header_map
        .get(&group_name)
        .ok_or_else(|| BoardError::MissingColumn(config.group_column.clone()))?;
    let score_idx = *header_map
        .get(&score_name)
        .ok_or_else(|| BoardError::MissingColumn(config.score_column.clone()))?;

    // Everything else is passed through untouched for the presentation layer.
    let extra: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != group_idx && idx != score_idx)
        .map(|(idx, name)| (idx, normalize_header_name(name)))
        .collect();

    debug!(
        group = %config.group_column,
        score = %config.score_column,
        extra = extra.len(),
        "resolved CSV header"
    );

    let mut records = Vec::new();
    let mut seen_groups: HashSet<String> = HashSet::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = result.map_err(|e| BoardError::MalformedTable {
            line,
            message: format!("CSV parse error: {e}"),
        })?;

        let group = parse_group(&record, group_idx, line, &config.group_column)?;
        if !seen_groups.insert(group.clone()) {
            return Err(BoardError::InvalidValue {
                line,
                column: config.group_column.clone(),
                message: format!("duplicate group `{group}`"),
            });
        }

        let score = parse_score(&record, score_idx, line, &config.score_column)?;

        let extras = extra
            .iter()
            .map(|&(i, _)| record.get(i).unwrap_or("").to_string())
            .collect();

        records.push(ScoreRecord {
            group,
            score,
            extras,
        });
    }

    Ok(IngestedTable {
        records,
        extra_columns: extra.into_iter().map(|(_, name)| name).collect(),
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿group"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_group(
    record: &StringRecord,
    idx: usize,
    line: usize,
    column: &str,
) -> Result<String, BoardError> {
    let value = record.get(idx).map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Err(BoardError::InvalidValue {
            line,
            column: column.to_string(),
            message: "empty group name".to_string(),
        });
    }
    Ok(value.to_string())
}

fn parse_score(
    record: &StringRecord,
    idx: usize,
    line: usize,
    column: &str,
) -> Result<f64, BoardError> {
    let raw = record.get(idx).map(str::trim).unwrap_or("");
    let invalid = |message: String| BoardError::InvalidValue {
        line,
        column: column.to_string(),
        message,
    };
    if raw.is_empty() {
        return Err(invalid("empty score".to_string()));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| invalid(format!("`{raw}` is not a number")))?;
    if !value.is_finite() {
        return Err(invalid(format!("`{raw}` is not finite")));
    }
    Ok(value)
}
