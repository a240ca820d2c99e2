//! Analytical formulas used as references for the numerical engines.
//!
//! This module provides:
//! - Black-Scholes closed forms for European calls and puts
//! - Standard normal distribution functions
//! - Historical volatility estimators over price series

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod volatility;

// Re-export main types at module level
pub use black_scholes::{call_ratio, put_ratio, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use volatility::{
    garman_klass_volatility, historical_volatility, parkinson_volatility, TRADING_DAYS_PER_YEAR,
};
