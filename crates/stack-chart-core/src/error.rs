// File: crates/stack-chart-core/src/error.rs
// Summary: Error taxonomy for input validation, tick requests and option loading.

use thiserror::Error;

/// Errors surfaced by the engine. Degenerate domains (no rows, all zeros) are
/// not errors; they resolve to collapsed scales instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("observation {row} is missing series `{key}`")]
    MissingKey { row: usize, key: String },

    #[error("observation {row} is missing its date field")]
    MissingDate { row: usize },

    #[error("observation {row} has non-numeric value {raw:?} for series `{key}`")]
    NonNumeric { row: usize, key: String, raw: String },

    #[error("observation {row} has unparseable date {raw:?}")]
    InvalidDate { row: usize, raw: String },

    #[error("duplicate series key `{0}`")]
    DuplicateKey(String),

    #[error("tick count must be between 1 and {max}, got {0}", max = crate::ticks::MAX_TICK_COUNT)]
    InvalidTickCount(usize),

    #[error("stack maximum {0} does not yield a finite tick step")]
    NonFiniteMax(f64),

    #[error("invalid chart option: {0}")]
    InvalidOption(String),

    #[error("failed to parse chart options")]
    Config(#[from] toml::de::Error),
}

impl ChartError {
    /// True for the input-shape family (missing/ill-typed fields, duplicate keys).
    pub fn is_input_shape(&self) -> bool {
        matches!(
            self,
            ChartError::MissingKey { .. }
                | ChartError::MissingDate { .. }
                | ChartError::NonNumeric { .. }
                | ChartError::InvalidDate { .. }
                | ChartError::DuplicateKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
