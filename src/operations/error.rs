use std::fmt;

/// Failures the caller is expected to tell apart.
///
/// Returned inside `anyhow::Error`; recover with `downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    StationNotFound(String),
    ReadingNotFound(String),
    NoAqiRecords(String),
    Invalid(String),
}

impl OperationError {
    pub(crate) fn invalid(problems: Vec<String>) -> Self {
        OperationError::Invalid(problems.join("; "))
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::StationNotFound(id) => write!(f, "Station not found: {}", id),
            OperationError::ReadingNotFound(id) => write!(f, "Reading not found: {}", id),
            OperationError::NoAqiRecords(id) => {
                write!(f, "No AQI records for station: {}", id)
            }
            OperationError::Invalid(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for OperationError {}
