//! Error types for the currency rates service.

use crate::domain::CurrencyCode;

/// Domain-level errors raised while resolving a conversion.
///
/// Both kinds originate deep in the rate service and propagate unchanged;
/// no local recovery or defaulting happens on the way up.
///
/// `Display`/`Error` are implemented by hand: thiserror's derive treats any
/// field named `source` as the error source, and `CurrencyCode` is not an
/// `Error`.
#[derive(Debug)]
pub enum RateError {
    /// The provider call failed, or returned a body that is not a rate table.
    FetchFailed(String),

    /// No record in the table quotes the requested pair in either orientation.
    InvalidPair {
        source: CurrencyCode,
        target: CurrencyCode,
    },
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::FetchFailed(cause) => {
                write!(f, "Failed to fetch exchange rates - {cause}")
            }
            RateError::InvalidPair { source, target } => write!(
                f,
                "Invalid source or target currency codes, Source currency code: {source}, Target currency code: {target}"
            ),
        }
    }
}

impl std::error::Error for RateError {}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        match err {
            // An unknown pair is a client problem, not a malfunction.
            RateError::InvalidPair { .. } => AppError::BadRequest(err.to_string()),
            RateError::FetchFailed(_) => AppError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_display_carries_cause() {
        let err = RateError::FetchFailed("connection refused".into());
        assert_eq!(
            err.to_string(),
            "Failed to fetch exchange rates - connection refused"
        );
    }

    #[test]
    fn test_invalid_pair_display_carries_both_codes() {
        let err = RateError::InvalidPair {
            source: 840,
            target: 999,
        };
        assert_eq!(
            err.to_string(),
            "Invalid source or target currency codes, Source currency code: 840, Target currency code: 999"
        );
    }

    #[test]
    fn test_invalid_pair_maps_to_bad_request() {
        let app: AppError = RateError::InvalidPair {
            source: 840,
            target: 999,
        }
        .into();
        assert!(matches!(app, AppError::BadRequest(_)));
    }

    #[test]
    fn test_fetch_failed_maps_to_internal() {
        let app: AppError = RateError::FetchFailed("timeout".into()).into();
        assert!(matches!(app, AppError::Internal(_)));
    }
}
