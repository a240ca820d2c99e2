//! Error types for analytical pricing and estimation.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to closed-form models and estimators

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive spot price (for Black-Scholes)
/// - `InvalidWindow`: Rolling window is empty or longer than the series
/// - `LengthMismatch`: Paired series of different lengths
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive for Black-Scholes).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Rolling window does not fit the series.
    #[error("Invalid window {window} for series of length {len}")]
    InvalidWindow {
        /// Requested window size
        window: usize,
        /// Length of the series
        len: usize,
    },

    /// Paired input series differ in length.
    #[error("Series length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the first series
        expected: usize,
        /// Length of the offending series
        got: usize,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { volatility } => PricingError::InvalidParameter {
                name: "volatility",
                value: volatility,
            },
            AnalyticalError::InvalidSpot { spot } => PricingError::InvalidParameter {
                name: "spot",
                value: spot,
            },
            AnalyticalError::InvalidWindow { .. } | AnalyticalError::LengthMismatch { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_window_display() {
        let err = AnalyticalError::InvalidWindow { window: 30, len: 10 };
        assert_eq!(
            format!("{}", err),
            "Invalid window 30 for series of length 10"
        );
    }

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let err: PricingError = AnalyticalError::InvalidVolatility { volatility: 0.0 }.into();
        assert_eq!(
            err,
            PricingError::InvalidParameter {
                name: "volatility",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_length_mismatch_to_pricing_error() {
        let err: PricingError = AnalyticalError::LengthMismatch {
            expected: 5,
            got: 4,
        }
        .into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("mismatch")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
