use thiserror::Error;

/// A school-code query that cannot be answered. The run reports it and stops
/// before any statistics are printed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid school code '{0}', expected an integer")]
    InvalidCode(String),

    #[error("School code {0} not found in dataset.")]
    NotFound(i64),
}
