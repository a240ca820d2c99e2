//! Contract terms shared by every pricer.
//!
//! This module provides [`ContractParams`], the five scalars every pricing
//! operation consumes, with validating and raw constructors.

use pricer_core::types::PricingError;

/// Log-price drift with Itô correction, ν = r − σ²/2.
#[inline]
pub fn log_drift(rate: f64, volatility: f64) -> f64 {
    rate - 0.5 * volatility * volatility
}

/// Terms of a single-asset option contract under Black-Scholes dynamics.
///
/// Contains spot, time to expiry (years), strike, continuously compounded
/// risk-free rate, and volatility. [`new`](Self::new) validates;
/// [`new_unchecked`](Self::new_unchecked) accepts anything and lets the
/// numerics propagate NaN or infinity.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::new(100.0, 1.0, 100.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert!((params.drift() - 0.03).abs() < 1e-15);
///
/// assert!(ContractParams::new(100.0, 1.0, 100.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams {
    spot: f64,
    expiry: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
}

impl ContractParams {
    /// Creates contract terms with validation.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field if
    /// spot, expiry, strike or volatility is not strictly positive and
    /// finite, or if the rate is not finite.
    pub fn new(
        spot: f64,
        expiry: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let params = Self::new_unchecked(spot, expiry, strike, rate, volatility);
        params.validate()?;
        Ok(params)
    }

    /// Creates contract terms without validation.
    #[inline]
    pub fn new_unchecked(spot: f64, expiry: f64, strike: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            expiry,
            strike,
            rate,
            volatility,
        }
    }

    /// Checks the terms accepted by [`new`](Self::new).
    ///
    /// # Errors
    /// As [`new`](Self::new).
    pub fn validate(&self) -> Result<(), PricingError> {
        for (name, value) in [
            ("spot", self.spot),
            ("expiry", self.expiry),
            ("strike", self.strike),
            ("volatility", self.volatility),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::InvalidParameter { name, value });
            }
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: self.rate,
            });
        }
        Ok(())
    }

    /// Spot price of the underlying.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility of log returns.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Log-price drift with Itô correction, ν = r − σ²/2.
    #[inline]
    pub fn drift(&self) -> f64 {
        log_drift(self.rate, self.volatility)
    }

    /// Discount factor to expiry, exp(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Step size h = T / N. Infinite when `n_steps` is zero.
    #[inline]
    pub fn step_size(&self, n_steps: usize) -> f64 {
        self.expiry / n_steps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid() {
        let p = ContractParams::new(120.0, 3.0, 90.0, 0.02, 0.7).unwrap();
        assert_eq!(p.spot(), 120.0);
        assert_eq!(p.expiry(), 3.0);
        assert_eq!(p.strike(), 90.0);
        assert_eq!(p.rate(), 0.02);
        assert_eq!(p.volatility(), 0.7);
    }

    #[test]
    fn test_new_names_offending_parameter() {
        let err = ContractParams::new(-1.0, 1.0, 100.0, 0.05, 0.2).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidParameter {
                name: "spot",
                value: -1.0
            }
        );

        let err = ContractParams::new(100.0, 0.0, 100.0, 0.05, 0.2).unwrap_err();
        assert!(err.to_string().contains("expiry"));

        let err = ContractParams::new(100.0, 1.0, 100.0, f64::NAN, 0.2).unwrap_err();
        assert!(err.to_string().contains("rate"));

        let err = ContractParams::new(100.0, 1.0, f64::INFINITY, 0.05, 0.2).unwrap_err();
        assert!(err.to_string().contains("strike"));
    }

    #[test]
    fn test_negative_rate_is_accepted() {
        assert!(ContractParams::new(100.0, 1.0, 100.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_unchecked_keeps_degenerate_values() {
        let p = ContractParams::new_unchecked(100.0, 1.0, 100.0, 0.05, 0.0);
        assert_eq!(p.volatility(), 0.0);
        assert!(p.step_size(0).is_infinite());
    }

    #[test]
    fn test_validate_rechecks_unchecked_terms() {
        assert!(ContractParams::new_unchecked(100.0, 1.0, 100.0, 0.05, 0.2)
            .validate()
            .is_ok());
        let err = ContractParams::new_unchecked(100.0, 1.0, 100.0, 0.05, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidParameter {
                name: "volatility",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_derived_quantities() {
        let p = ContractParams::new(100.0, 2.0, 100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(p.drift(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(p.discount_factor(), (-0.1_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(p.step_size(8), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_log_drift_matches_contract_drift() {
        assert_relative_eq!(log_drift(0.05, 0.2), 0.03, epsilon = 1e-15);
        let p = ContractParams::new(100.0, 1.0, 100.0, -0.01, 0.4).unwrap();
        assert_eq!(p.drift(), log_drift(-0.01, 0.4));
        assert_relative_eq!(p.drift(), -0.09, epsilon = 1e-15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let p = ContractParams::new(100.0, 1.0, 95.0, 0.05, 0.2).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: ContractParams = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
