//! Contract terms and payoff evaluators.
//!
//! - [`ContractParams`]: spot, expiry, strike, rate, volatility
//! - [`PayoffEvaluator`]: call, put and digital payoffs on log-underlying
//!   values or standard-normal draws

pub mod params;
pub mod payoff;

pub use params::{log_drift, ContractParams};
pub use payoff::{PayoffEvaluator, PayoffKind};
