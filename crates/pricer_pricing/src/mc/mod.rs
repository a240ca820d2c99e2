//! Antithetic Monte Carlo pricing.
//!
//! # Architecture
//!
//! ```text
//! price_monte_carlo
//! ├── MonteCarloConfig   (draw count, seed)
//! ├── PayoffEvaluator    (from-normal family)
//! └── MonteCarloEngine
//!     ├── PricerRng      (fresh per call)
//!     └── simulate_with  (Σ eval(x) + eval(−x)) / 2M
//! ```
//!
//! The terminal price is rebuilt from each draw as `S·exp(νT + σ√T·x)`, so
//! a single normal per sample suffices: no paths or time steps are stored.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{PayoffEvaluator, PayoffKind};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
//!
//! let config = MonteCarloConfig::builder().n_draws(50_000).build().unwrap();
//! let engine = MonteCarloEngine::from_config(&config);
//!
//! let payoff = PayoffEvaluator::from_normal(PayoffKind::Put, 100.0, 1.0, 100.0, 0.05, 0.2);
//! let estimate = engine.simulate_with_stats(&payoff, config.n_draws());
//! let price = estimate.discounted((-0.05_f64).exp());
//! assert!((price.mean - 5.5735).abs() < 0.2);
//! ```

pub mod config;
pub mod engine;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_DRAWS};
pub use engine::{simulate_with, simulate_with_stats, MonteCarloEngine, MonteCarloEstimate};
