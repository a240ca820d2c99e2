//! Core option and error types.
//!
//! This module provides:
//! - `option`: Option type (call/put) and exercise style (European/American)
//! - `error`: Structured error types for pricing and configuration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`], [`ExerciseStyle`] from `option`
//! - [`PricingError`], [`ConfigError`] from `error`

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::{ConfigError, PricingError};
pub use option::{ExerciseStyle, OptionType};
