//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A parallel series column does not match the length of its time axis
    #[error("{series} series: {field} has {actual} entries, expected {expected}")]
    SeriesLengthMismatch {
        series: String,
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Timestamps of a series are not strictly increasing
    #[error("{series} series: time is not strictly increasing at index {index}")]
    NonIncreasingTime { series: String, index: usize },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a length mismatch error for a series column
    pub fn length_mismatch(
        series: impl Into<String>,
        field: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::SeriesLengthMismatch {
            series: series.into(),
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create an ordering error for a series time axis
    pub fn non_increasing(series: impl Into<String>, index: usize) -> Self {
        Self::NonIncreasingTime {
            series: series.into(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_creates_correct_error() {
        let err = DomainError::length_mismatch("hourly", "temperature_2m", 3, 2);
        match err {
            DomainError::SeriesLengthMismatch {
                series,
                field,
                expected,
                actual,
            } => {
                assert_eq!(series, "hourly");
                assert_eq!(field, "temperature_2m");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            },
            _ => unreachable!("Expected SeriesLengthMismatch error"),
        }
    }

    #[test]
    fn length_mismatch_error_message() {
        let err = DomainError::length_mismatch("daily", "weather_code", 7, 6);
        assert_eq!(
            err.to_string(),
            "daily series: weather_code has 6 entries, expected 7"
        );
    }

    #[test]
    fn non_increasing_error_message() {
        let err = DomainError::non_increasing("hourly", 4);
        assert_eq!(
            err.to_string(),
            "hourly series: time is not strictly increasing at index 4"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("name is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: name is required");
    }
}
