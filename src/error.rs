//! Application error type.
//!
//! Every pipeline failure maps to one of the variants below; the message names
//! the failing row/column so a broken source file can be fixed without
//! guesswork. Errors are never recovered mid-run — a leaderboard is a single
//! authoritative view, and partial data must not be displayed as if valid.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// The score CSV could not be opened or read.
    #[error("failed to open score CSV '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be parsed into consistent rows/columns.
    #[error("malformed table at line {line}: {message}")]
    MalformedTable { line: usize, message: String },

    /// A required column is absent from the header row.
    #[error("missing required column: `{0}`")]
    MissingColumn(String),

    /// A cell value violates its column contract (non-finite score, empty or
    /// duplicate group name).
    #[error("invalid value at line {line}, column `{column}`: {message}")]
    InvalidValue {
        line: usize,
        column: String,
        message: String,
    },

    /// Too few rows to compute the summary statistics.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Bad configuration (CLI/environment), before the pipeline starts.
    #[error("{0}")]
    Config(String),

    /// Terminal, export, or TUI I/O failure.
    #[error("{0}")]
    Render(String),
}

impl BoardError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Process exit code for this error.
    ///
    /// 2 = input/config problems, 3 = not enough data, 4 = render/export I/O.
    pub fn exit_code(&self) -> u8 {
        match self {
            BoardError::SourceUnavailable { .. }
            | BoardError::MalformedTable { .. }
            | BoardError::MissingColumn(_)
            | BoardError::InvalidValue { .. }
            | BoardError::Config(_) => 2,
            BoardError::InsufficientData(_) => 3,
            BoardError::Render(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(BoardError::MissingColumn("auc".to_string()).exit_code(), 2);
        assert_eq!(
            BoardError::InsufficientData("n=0".to_string()).exit_code(),
            3
        );
        assert_eq!(BoardError::render("draw failed").exit_code(), 4);
    }

    #[test]
    fn invalid_value_names_row_and_column() {
        let err = BoardError::InvalidValue {
            line: 7,
            column: "auc".to_string(),
            message: "not a number".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("line 7"));
        assert!(text.contains("`auc`"));
    }
}
