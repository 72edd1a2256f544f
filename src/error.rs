//! Error types for simulation requests and batch input

use thiserror::Error;

/// Failure of a single simulation request
///
/// Every variant is terminal for the request: no partial result is returned
/// alongside it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A parameter is missing, non-numeric or outside its domain
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Time-to-target search ran out of months before reaching the target
    #[error("goal not reached within {bound_months} months")]
    GoalUnreachable { bound_months: u32 },

    /// Balance overflowed the floating point range
    #[error("balance is no longer finite at month {month}")]
    NonFiniteBalance { month: u32 },
}

impl SimulationError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SimulationError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Failure while reading a batch of requests
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// `row` is the 1-based data row (header excluded)
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: SimulationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = SimulationError::invalid("targetAmount", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid input for `targetAmount`: must be greater than 0"
        );
    }

    #[test]
    fn test_row_error_keeps_source() {
        let err = LoadError::Row {
            row: 3,
            source: SimulationError::GoalUnreachable { bound_months: 1200 },
        };
        assert_eq!(err.to_string(), "row 3: goal not reached within 1200 months");
        assert!(std::error::Error::source(&err).is_some());
    }
}
