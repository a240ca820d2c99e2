//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `ConfigError`: Errors from lattice and Monte Carlo configuration
//!
//! The numerical primitives (lattice passes, parameterisations) never
//! return these; they are raised only where inputs are validated.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: A named contract parameter is out of range
/// - `InvalidInput`: Invalid input that is not a single named parameter
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A named parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Configuration error for lattice and Monte Carlo pricers.
///
/// These errors occur at build time when invalid parameters are provided
/// to a configuration builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Lattice step count outside the valid range.
    #[error("Invalid step count {count}: must be in range [1, {max}]")]
    InvalidStepCount {
        /// Requested step count.
        count: usize,
        /// Largest accepted step count.
        max: usize,
    },

    /// Monte Carlo draw count outside the valid range.
    #[error("Invalid draw count {count}: must be in range [1, {max}]")]
    InvalidDrawCount {
        /// Requested draw count.
        count: usize,
        /// Largest accepted draw count.
        max: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
