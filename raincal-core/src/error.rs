/// Error types for the raincal library
use thiserror::Error;

/// Main error type for rainfall calendar operations
#[derive(Error, Debug)]
pub enum RaincalError {
    /// Aggregation was asked to bucket an empty series
    #[error("No samples to aggregate: an empty series is an error, not an empty calendar")]
    EmptyInput,

    /// A raw series entry failed validation
    #[error("Malformed sample at index {index}: {reason}")]
    MalformedSample { index: usize, reason: String },

    /// Classifier given a negative or non-finite total
    #[error("Invalid rainfall value for classification: {0}")]
    InvalidValue(f64),

    /// Named location is not in the registry
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Non-success HTTP status from the upstream API
    #[cfg(feature = "api")]
    #[error("Bad response status from upstream API: {0}")]
    HttpStatus(u16),
}

/// Type alias for Results using RaincalError
pub type Result<T> = std::result::Result<T, RaincalError>;
