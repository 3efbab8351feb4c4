//! Airport dataset error types.

use crate::domain::AirportCode;

/// Errors that can occur while loading the airport dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Reading the dataset file failed
    #[error("failed to read airport dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column
    #[error("airport dataset is missing required column {0:?}")]
    MissingColumn(&'static str),

    /// No usable rows were found
    #[error("airport dataset contains no valid airports")]
    Empty,
}

/// Errors from the proximity filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProximityError {
    /// The reference airport is not in the dataset
    #[error("airport {0} not found in dataset")]
    NotFound(AirportCode),
}
