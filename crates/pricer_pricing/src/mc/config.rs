//! Monte Carlo simulation configuration.
//!
//! This module provides [`MonteCarloConfig`] and its builder.

use pricer_core::types::ConfigError;

use crate::rng::DEFAULT_SEED;

/// Maximum number of antithetic draws allowed.
pub const MAX_DRAWS: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the number of normal draws `M` and
/// the generator seed. Each draw is evaluated with its negation, so the
/// payoff is evaluated `2M` times. Use [`MonteCarloConfigBuilder`] to
/// construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
/// use pricer_pricing::rng::DEFAULT_SEED;
///
/// let config = MonteCarloConfig::builder()
///     .n_draws(100_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_draws(), 100_000);
/// assert_eq!(config.seed(), DEFAULT_SEED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    /// Number of normal draws.
    n_draws: usize,
    /// Generator seed.
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of normal draws.
    #[inline]
    pub fn n_draws(&self) -> usize {
        self.n_draws
    }

    /// Returns the generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDrawCount` if `n_draws` is 0 or greater
    /// than [`MAX_DRAWS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_draws == 0 || self.n_draws > MAX_DRAWS {
            return Err(ConfigError::InvalidDrawCount {
                count: self.n_draws,
                max: MAX_DRAWS,
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// The seed defaults to [`DEFAULT_SEED`]; the draw count must be set.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_draws(50_000)
///     .seed(42)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_draws: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of normal draws, in [1, 100_000_000].
    #[inline]
    pub fn n_draws(mut self, n_draws: usize) -> Self {
        self.n_draws = Some(n_draws);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_draws` is not set or out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_draws = self.n_draws.ok_or(ConfigError::InvalidParameter {
            name: "n_draws",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_draws,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder().n_draws(10_000).build().unwrap();
        assert_eq!(config.n_draws(), 10_000);
        assert_eq!(config.seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .n_draws(1000)
            .seed(12345)
            .build()
            .unwrap();
        assert_eq!(config.seed(), 12345);
    }

    #[test]
    fn test_config_builder_zero_draws() {
        let result = MonteCarloConfig::builder().n_draws(0).build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidDrawCount {
                count: 0,
                max: MAX_DRAWS
            })
        );
    }

    #[test]
    fn test_config_builder_too_many_draws() {
        assert!(MonteCarloConfig::builder()
            .n_draws(MAX_DRAWS + 1)
            .build()
            .is_err());
        assert!(MonteCarloConfig::builder().n_draws(MAX_DRAWS).build().is_ok());
    }

    #[test]
    fn test_config_builder_missing_draws() {
        let err = MonteCarloConfig::builder().seed(1).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "n_draws",
                ..
            }
        ));
    }
}
