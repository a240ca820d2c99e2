//! # Pricer Pricing (Layer 3: Engines)
//!
//! Numerical engines and the pricing facade:
//!
//! - [`lattice`]: flat-buffer recombining binomial lattice with forward
//!   propagation and American or European backward induction
//! - [`rng`]: the [`NormalSource`](rng::NormalSource) seam and the seeded
//!   [`PricerRng`](rng::PricerRng)
//! - [`mc`]: deterministic-seed antithetic Monte Carlo engine
//! - [`pricing`]: validated and raw pricing entry points
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`, `ConfigError`, option vocabulary
//! - Layer 2 (pricer_models): `ContractParams`, `PayoffEvaluator`,
//!   `LatticeModel`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::pricing::{price_american_call_crr, price_vanilla_eu_call};
//!
//! let lattice = price_american_call_crr(100.0, 1.0, 100.0, 0.05, 0.2, 1000).unwrap();
//! let mc = price_vanilla_eu_call(100.0, 1.0, 100.0, 0.05, 0.2, 200_000).unwrap();
//!
//! // Without dividends the American call is worth the European
//! assert!((lattice - mc).abs() < 0.1);
//! ```
//!
//! ## Logging
//!
//! Facade entry points emit `tracing` events at `debug` and `trace` level,
//! and `warn` when inputs are rejected. No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lattice;
pub mod mc;
pub mod pricing;
pub mod rng;

pub use lattice::{Lattice, LatticeConfig};
pub use mc::{MonteCarloConfig, MonteCarloEngine, MonteCarloEstimate};
pub use pricing::{price_lattice, price_monte_carlo};
