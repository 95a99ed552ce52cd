//! Error type for the analytics pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    /// The data source could not be retrieved
    #[error("Failed to load sales data: {0}")]
    Acquisition(String),

    /// The data source was retrieved but is not usable tabular data
    #[error("Failed to parse sales data: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid threshold {0}: expected a finite, non-negative amount")]
    InvalidThreshold(f64),

    #[error("Invalid month '{0}': expected Jan, Feb, ..., Dec")]
    InvalidMonth(String),

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("No sales data loaded")]
    NotReady,
}

impl SalesError {
    /// Load failures end the session: nothing downstream is computed
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Acquisition(_) | Self::Parse(_) | Self::Csv(_))
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
