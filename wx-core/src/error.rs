//! Error types for loading the weather dataset.

use thiserror::Error;

/// Reasons a weather export is refused at load time.
///
/// Any of these aborts the whole load; the dashboard never runs on a
/// partially loaded dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: unparseable date `{value}`")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: column `{column}` is not a number: `{value}`")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("dataset contains no rows")]
    EmptyDataset,

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A theme name that matches no known theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);
