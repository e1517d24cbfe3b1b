//! Error types for Payform

use thiserror::Error;

/// A field value that failed validation.
///
/// The `Display` output is the message shown beneath the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Card number does not hold exactly 16 digits
    #[error("Card number must be 16 digits")]
    CardNumberLength {
        /// Number of digits actually present
        digits: usize,
    },

    /// Expiration is not `MM/YYYY` with a month in 01-12
    #[error("Enter a valid expiration date (MM/YYYY)")]
    ExpirationFormat,

    /// Expiration month lies before the current month
    #[error("Card has expired")]
    Expired,

    /// CVV does not hold 3 or 4 digits
    #[error("CVV must be 3 or 4 digits")]
    CvvLength {
        /// Number of digits actually present
        digits: usize,
    },
}

/// Failures outside of user input validation
#[derive(Error, Debug)]
pub enum PayformError {
    /// A `YYYY-MM` month string could not be parsed
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Filter directive rejected by the subscriber
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// Error during serialization of a payload
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PayformError
pub type PayformResult<T> = Result<T, PayformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::CardNumberLength { digits: 3 }.to_string(),
            "Card number must be 16 digits"
        );
        assert_eq!(
            FieldError::ExpirationFormat.to_string(),
            "Enter a valid expiration date (MM/YYYY)"
        );
        assert_eq!(FieldError::Expired.to_string(), "Card has expired");
        assert_eq!(
            FieldError::CvvLength { digits: 5 }.to_string(),
            "CVV must be 3 or 4 digits"
        );
    }

    #[test]
    fn test_error_display() {
        let err = PayformError::InvalidMonth("2026-13".to_string());
        assert_eq!(format!("{}", err), "Invalid month: 2026-13");
    }
}
