use thiserror::Error;

/// Errors that can occur while assembling twiss figures
#[derive(Debug, Error)]
pub enum TwissError {
    /// Column lookup or dtype conversion error from the table backend
    #[error("table error: {0}")]
    Table(#[from] polars::prelude::PolarsError),

    /// Configuration error (malformed properties document)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using TwissError
pub type Result<T> = std::result::Result<T, TwissError>;
