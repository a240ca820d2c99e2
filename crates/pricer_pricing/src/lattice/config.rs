//! Lattice pricing configuration.
//!
//! This module provides [`LatticeConfig`] and its builder, following the
//! same validate-on-build pattern as the Monte Carlo configuration.

use pricer_core::types::{ConfigError, ExerciseStyle};
use pricer_models::models::LatticeModel;

/// Maximum number of lattice steps allowed.
///
/// A lattice of `n` steps holds `(n + 1)(n + 2) / 2` doubles and a pricing
/// call holds two, so the cap costs about 800 MB. Allocation failure aborts
/// the process rather than returning an error.
pub const MAX_LATTICE_STEPS: usize = 10_000;

/// Lattice pricing configuration.
///
/// Immutable configuration specifying the step count, discretisation scheme
/// and exercise style. Use [`LatticeConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::ExerciseStyle;
/// use pricer_models::models::LatticeModel;
/// use pricer_pricing::lattice::LatticeConfig;
///
/// let config = LatticeConfig::builder()
///     .n_steps(500)
///     .model(LatticeModel::Tian)
///     .exercise(ExerciseStyle::American)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_steps(), 500);
/// assert_eq!(config.model(), LatticeModel::Tian);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    /// Number of binomial steps.
    n_steps: usize,
    /// Discretisation scheme.
    model: LatticeModel,
    /// Exercise style for the rollback.
    exercise: ExerciseStyle,
}

impl LatticeConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> LatticeConfigBuilder {
        LatticeConfigBuilder::default()
    }

    /// Returns the number of binomial steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the discretisation scheme.
    #[inline]
    pub fn model(&self) -> LatticeModel {
        self.model
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepCount` if `n_steps` is 0 or greater
    /// than [`MAX_LATTICE_STEPS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_steps == 0 || self.n_steps > MAX_LATTICE_STEPS {
            return Err(ConfigError::InvalidStepCount {
                count: self.n_steps,
                max: MAX_LATTICE_STEPS,
            });
        }
        Ok(())
    }
}

/// Builder for [`LatticeConfig`].
///
/// The model defaults to [`LatticeModel::Crr`] and the exercise style to
/// European; the step count must be set.
#[derive(Clone, Debug, Default)]
pub struct LatticeConfigBuilder {
    n_steps: Option<usize>,
    model: LatticeModel,
    exercise: ExerciseStyle,
}

impl LatticeConfigBuilder {
    /// Sets the number of binomial steps, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the discretisation scheme.
    #[inline]
    pub fn model(mut self, model: LatticeModel) -> Self {
        self.model = model;
        self
    }

    /// Sets the exercise style.
    #[inline]
    pub fn exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_steps` is not set or out of range.
    pub fn build(self) -> Result<LatticeConfig, ConfigError> {
        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = LatticeConfig {
            n_steps,
            model: self.model,
            exercise: self.exercise,
        };

        config.validate()?;
        Ok(config)
    }
}
