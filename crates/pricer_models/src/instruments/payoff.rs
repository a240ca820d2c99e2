//! Payoff evaluation as a single closed sum type.
//!
//! A [`PayoffEvaluator`] maps one scalar state to a payoff. Two families
//! exist, distinguished by what that scalar is:
//!
//! - **From-log**: the state is a log-underlying value, as stored in a
//!   lattice. The payoff compares it directly against `ln K`.
//! - **From-normal**: the state is a standard-normal draw `x`. The terminal
//!   price is rebuilt as `S·exp(νT)·exp(x·σ√T)` before the payoff applies.
//!
//! Each family supports all four [`PayoffKind`]s. Evaluators are immutable
//! after construction.

use pricer_core::types::OptionType;

use super::params::{log_drift, ContractParams};

/// Payoff shape at exercise.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
/// - `DigitalCall`: 1 if S > K else 0
/// - `DigitalPut`: 1 if S < K else 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
    /// Digital call: 1 if S > K else 0
    DigitalCall,
    /// Digital put: 1 if S < K else 0
    DigitalPut,
}

impl PayoffKind {
    /// Returns whether this payoff is digital (DigitalCall or DigitalPut).
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(self, PayoffKind::DigitalCall | PayoffKind::DigitalPut)
    }

    /// Applies the payoff to a terminal price. `s_minus_k` is `S - K`.
    #[inline]
    fn apply(&self, s_minus_k: f64) -> f64 {
        match self {
            PayoffKind::Call => {
                if s_minus_k > 0.0 {
                    s_minus_k
                } else {
                    0.0
                }
            }
            PayoffKind::Put => {
                if -s_minus_k > 0.0 {
                    -s_minus_k
                } else {
                    0.0
                }
            }
            PayoffKind::DigitalCall => {
                if s_minus_k > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            PayoffKind::DigitalPut => {
                if -s_minus_k > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl From<OptionType> for PayoffKind {
    fn from(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Call => PayoffKind::Call,
            OptionType::Put => PayoffKind::Put,
        }
    }
}

/// Stateless payoff function closed over contract terms.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{PayoffEvaluator, PayoffKind};
///
/// let call = PayoffEvaluator::from_log(PayoffKind::Call, 100.0);
/// assert!((call.eval(110.0_f64.ln()) - 10.0).abs() < 1e-12);
/// assert_eq!(call.eval(90.0_f64.ln()), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayoffEvaluator {
    /// Input is a log-underlying value.
    FromLog {
        /// Payoff shape
        kind: PayoffKind,
        /// Strike K
        strike: f64,
        /// ln K, cached
        log_strike: f64,
    },
    /// Input is a standard-normal draw.
    FromNormal {
        /// Payoff shape
        kind: PayoffKind,
        /// Strike K
        strike: f64,
        /// S·exp(νT) with ν = r − σ²/2
        base_price_factor: f64,
        /// σ√T
        step_std: f64,
    },
}

impl PayoffEvaluator {
    /// Payoff on log-underlying values, used with the lattice.
    pub fn from_log(kind: PayoffKind, strike: f64) -> Self {
        PayoffEvaluator::FromLog {
            kind,
            strike,
            log_strike: strike.ln(),
        }
    }

    /// Payoff on standard-normal draws, used with Monte Carlo.
    pub fn from_normal(
        kind: PayoffKind,
        spot: f64,
        expiry: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        PayoffEvaluator::FromNormal {
            kind,
            strike,
            base_price_factor: spot * (log_drift(rate, volatility) * expiry).exp(),
            step_std: expiry.sqrt() * volatility,
        }
    }

    /// [`from_normal`](Self::from_normal) taking contract terms.
    pub fn from_normal_params(kind: PayoffKind, params: &ContractParams) -> Self {
        PayoffEvaluator::FromNormal {
            kind,
            strike: params.strike(),
            base_price_factor: params.spot() * (params.drift() * params.expiry()).exp(),
            step_std: params.expiry().sqrt() * params.volatility(),
        }
    }

    /// Payoff shape.
    #[inline]
    pub fn kind(&self) -> PayoffKind {
        match self {
            PayoffEvaluator::FromLog { kind, .. } | PayoffEvaluator::FromNormal { kind, .. } => {
                *kind
            }
        }
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        match self {
            PayoffEvaluator::FromLog { strike, .. }
            | PayoffEvaluator::FromNormal { strike, .. } => *strike,
        }
    }

    /// Evaluates the payoff at state `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            PayoffEvaluator::FromLog {
                kind,
                strike,
                log_strike,
            } => {
                // Compare in log space so out-of-the-money nodes skip the exp
                let in_the_money = match kind {
                    PayoffKind::Call | PayoffKind::DigitalCall => x > log_strike,
                    PayoffKind::Put | PayoffKind::DigitalPut => x < log_strike,
                };
                if !in_the_money {
                    return 0.0;
                }
                match kind {
                    PayoffKind::Call => x.exp() - strike,
                    PayoffKind::Put => strike - x.exp(),
                    PayoffKind::DigitalCall | PayoffKind::DigitalPut => 1.0,
                }
            }
            PayoffEvaluator::FromNormal {
                kind,
                strike,
                base_price_factor,
                step_std,
            } => kind.apply(base_price_factor * (x * step_std).exp() - strike),
        }
    }
}
