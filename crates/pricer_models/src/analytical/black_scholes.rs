//! Black-Scholes pricing model for European options.
//!
//! Closed-form reference prices against which the lattice and Monte Carlo
//! engines are checked.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::types::OptionType;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Expiries at or below this are priced at intrinsic value.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if spot.is_nan() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if volatility.is_nan() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        d1(self.spot / strike, expiry, self.rate, self.volatility)
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionType::Call, strike, expiry)
    }

    /// Computes European put option price.
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionType::Put, strike, expiry)
    }

    /// Computes the European price for either option type.
    ///
    /// Expiries at or below 1e-10 return the intrinsic value.
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return option_type.intrinsic(self.spot, strike);
        }
        let kappa = strike / self.spot;
        let ratio = match option_type {
            OptionType::Call => call_ratio(kappa, expiry, self.rate, self.volatility),
            OptionType::Put => put_ratio(kappa, expiry, self.rate, self.volatility),
        };
        self.spot * ratio
    }
}

#[inline]
fn d1(spot_over_strike: f64, tau: f64, rate: f64, volatility: f64) -> f64 {
    (spot_over_strike.ln() + (rate + 0.5 * volatility * volatility) * tau)
        / (volatility * tau.sqrt())
}

/// Call price as a fraction of spot, C / S, in terms of moneyness κ = K / S.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{call_ratio, BlackScholes};
///
/// let bs = BlackScholes::new(80.0, 0.03, 0.25).unwrap();
/// let via_ratio = 80.0 * call_ratio(90.0 / 80.0, 0.5, 0.03, 0.25);
/// assert!((via_ratio - bs.price_call(90.0, 0.5)).abs() < 1e-12);
/// ```
pub fn call_ratio(kappa: f64, tau: f64, rate: f64, volatility: f64) -> f64 {
    let d1 = d1(1.0 / kappa, tau, rate, volatility);
    let d2 = d1 - volatility * tau.sqrt();
    norm_cdf(d1) - kappa * (-rate * tau).exp() * norm_cdf(d2)
}

/// Put price as a fraction of spot, P / S, in terms of moneyness κ = K / S.
pub fn put_ratio(kappa: f64, tau: f64, rate: f64, volatility: f64) -> f64 {
    let d1 = d1(1.0 / kappa, tau, rate, volatility);
    let d2 = d1 - volatility * tau.sqrt();
    kappa * (-rate * tau).exp() * norm_cdf(-d2) - norm_cdf(-d1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_bad_inputs() {
        assert!(matches!(
            BlackScholes::new(-100.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0, 0.05, 0.0),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(BlackScholes::new(100.0, 0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_atm_reference_prices() {
        // Hull, S=K=100, r=5%, σ=20%, T=1
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.450_583_572_185_565, epsilon = 1e-9);
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(105.0, 0.03, 0.35).unwrap();
        for strike in [60.0, 90.0, 105.0, 130.0, 200.0] {
            let lhs = bs.price_call(strike, 2.0) - bs.price_put(strike, 2.0);
            let rhs = 105.0 - strike * (-0.03_f64 * 2.0).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_d2_is_d1_minus_vol_sqrt_t() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.35, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_expiry_is_intrinsic() {
        let bs = BlackScholes::new(110.0, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(100.0, 0.0), 10.0);
        assert_eq!(bs.price_put(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratio_scaling() {
        // Prices are homogeneous of degree one in (S, K)
        let small = BlackScholes::new(1.0, 0.02, 0.3).unwrap();
        let large = BlackScholes::new(250.0, 0.02, 0.3).unwrap();
        assert_relative_eq!(
            250.0 * small.price_put(1.1, 0.75),
            large.price_put(275.0, 0.75),
            max_relative = 1e-12
        );
    }
}
