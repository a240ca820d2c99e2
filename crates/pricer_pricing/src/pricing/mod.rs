//! Pricing facade.
//!
//! Composes a discretisation scheme with a pair of [`Lattice`]s, or a
//! from-normal payoff with the [`MonteCarloEngine`], into scalar prices.
//!
//! Two tiers are offered:
//!
//! - **Validated**: [`price_lattice`], [`price_monte_carlo`] and the named
//!   per-model functions check contract terms and step or draw counts and
//!   return `Result<f64, PricingError>`. A non-finite result is reported as
//!   `PricingError::NumericalInstability`.
//! - **Raw**: [`price_lattice_unchecked`] and [`price_monte_carlo_unchecked`]
//!   accept anything and return whatever the arithmetic produces, NaN
//!   included.
//!
//! # Examples
//!
//! ```rust
//! use pricer_pricing::pricing::{price_american_put_crr, price_european_put_lr};
//!
//! let american = price_american_put_crr(100.0, 1.0, 100.0, 0.05, 0.2, 500).unwrap();
//! let european = price_european_put_lr(100.0, 1.0, 100.0, 0.05, 0.2, 501).unwrap();
//! assert!(american > european);
//!
//! assert!(price_american_put_crr(-100.0, 1.0, 100.0, 0.05, 0.2, 500).is_err());
//! ```

use pricer_core::types::{ExerciseStyle, OptionType, PricingError};
use pricer_models::instruments::{ContractParams, PayoffEvaluator, PayoffKind};
use pricer_models::models::LatticeModel;

use crate::lattice::{Lattice, LatticeConfig};
use crate::mc::{MonteCarloConfig, MonteCarloEngine, MonteCarloEstimate};

/// Prices a contract on a binomial lattice.
///
/// Builds the scheme's parameters, runs the forward pass on a reference
/// lattice seeded at `ln S`, rolls a value lattice back against it and
/// returns the root.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if `contract` fails validation
/// - `PricingError::InvalidInput` if `config` fails validation
/// - `PricingError::NumericalInstability` if the root is not finite
pub fn price_lattice(
    contract: &ContractParams,
    config: &LatticeConfig,
    payoff: impl Into<PayoffKind>,
) -> Result<f64, PricingError> {
    let kind = payoff.into();
    check_contract(contract)?;
    config
        .validate()
        .inspect_err(|err| tracing::warn!(error = %err, "rejected lattice configuration"))?;

    tracing::debug!(
        model = %config.model(),
        exercise = %config.exercise(),
        payoff = ?kind,
        n_steps = config.n_steps(),
        "pricing on lattice"
    );
    let price = price_lattice_unchecked(
        contract,
        config.n_steps(),
        config.model(),
        config.exercise(),
        kind,
    );
    tracing::trace!(price, "lattice root");

    ensure_finite(price, || {
        format!(
            "{} lattice with {} steps produced {}",
            config.model(),
            config.n_steps(),
            price
        )
    })
}

/// [`price_lattice`] without validation.
///
/// `n_steps = 0` prices at the root directly, giving the intrinsic value of
/// the spot. Degenerate contracts such as zero volatility yield NaN.
pub fn price_lattice_unchecked(
    contract: &ContractParams,
    n_steps: usize,
    model: LatticeModel,
    exercise: ExerciseStyle,
    payoff: impl Into<PayoffKind>,
) -> f64 {
    let params = model.parameterise(contract, n_steps);

    let mut reference = Lattice::new(n_steps);
    let seed = contract.spot().ln();
    if model.uses_symmetric_pass() {
        reference.forward_pass_symmetric(seed, params.log_up);
    } else {
        reference.forward_pass(seed, params.log_up, params.log_down);
    }

    let evaluator = PayoffEvaluator::from_log(payoff.into(), contract.strike());
    let mut values = Lattice::new(n_steps);
    values.rollback(
        &reference,
        params.up_weight(),
        params.down_weight(),
        &evaluator,
        exercise,
    );
    values.root()
}

/// Prices a European contract by antithetic Monte Carlo, discounted by
/// `exp(−rT)`.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if `contract` fails validation
/// - `PricingError::InvalidInput` if `config` fails validation
/// - `PricingError::NumericalInstability` if the estimate is not finite
pub fn price_monte_carlo(
    contract: &ContractParams,
    config: &MonteCarloConfig,
    payoff: PayoffKind,
) -> Result<f64, PricingError> {
    price_monte_carlo_with_stats(contract, config, payoff).map(|estimate| estimate.mean)
}

/// [`price_monte_carlo`] with the discounted standard error.
///
/// # Errors
///
/// As [`price_monte_carlo`].
pub fn price_monte_carlo_with_stats(
    contract: &ContractParams,
    config: &MonteCarloConfig,
    payoff: PayoffKind,
) -> Result<MonteCarloEstimate, PricingError> {
    check_contract(contract)?;
    config
        .validate()
        .inspect_err(|err| tracing::warn!(error = %err, "rejected Monte Carlo configuration"))?;

    tracing::debug!(
        payoff = ?payoff,
        n_draws = config.n_draws(),
        seed = config.seed(),
        "pricing by Monte Carlo"
    );
    let evaluator = PayoffEvaluator::from_normal_params(payoff, contract);
    let estimate = MonteCarloEngine::from_config(config)
        .simulate_with_stats(&evaluator, config.n_draws())
        .discounted(contract.discount_factor());
    tracing::trace!(
        price = estimate.mean,
        std_error = estimate.std_error,
        "Monte Carlo estimate"
    );

    ensure_finite(estimate.mean, || {
        format!(
            "Monte Carlo with {} draws produced {}",
            config.n_draws(),
            estimate.mean
        )
    })?;
    Ok(estimate)
}

/// [`price_monte_carlo`] without validation. Zero draws yields NaN.
pub fn price_monte_carlo_unchecked(
    contract: &ContractParams,
    n_draws: usize,
    seed: u64,
    payoff: PayoffKind,
) -> f64 {
    let evaluator = PayoffEvaluator::from_normal_params(payoff, contract);
    MonteCarloEngine::new(seed).simulate(&evaluator, n_draws) * contract.discount_factor()
}

fn ensure_finite(price: f64, describe: impl FnOnce() -> String) -> Result<f64, PricingError> {
    if price.is_finite() {
        Ok(price)
    } else {
        let message = describe();
        tracing::warn!(%message, "non-finite price");
        Err(PricingError::NumericalInstability(message))
    }
}

fn check_contract(contract: &ContractParams) -> Result<(), PricingError> {
    contract
        .validate()
        .inspect_err(|err| tracing::warn!(error = %err, "rejected contract terms"))
}

fn lattice_config(
    n_steps: usize,
    model: LatticeModel,
    exercise: ExerciseStyle,
) -> Result<LatticeConfig, PricingError> {
    LatticeConfig::builder()
        .n_steps(n_steps)
        .model(model)
        .exercise(exercise)
        .build()
        .inspect_err(|err| tracing::warn!(error = %err, "rejected lattice configuration"))
        .map_err(PricingError::from)
}

fn monte_carlo_config(n_draws: usize) -> Result<MonteCarloConfig, PricingError> {
    MonteCarloConfig::builder()
        .n_draws(n_draws)
        .build()
        .inspect_err(|err| tracing::warn!(error = %err, "rejected Monte Carlo configuration"))
        .map_err(PricingError::from)
}

macro_rules! lattice_pricers {
    ($($(#[$doc:meta])* $name:ident => $model:ident, $exercise:ident, $option:ident;)+) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// `PricingError` if the contract terms or step count are invalid,
            /// or the lattice produces a non-finite price.
            pub fn $name(
                spot: f64,
                expiry: f64,
                strike: f64,
                rate: f64,
                volatility: f64,
                n_steps: usize,
            ) -> Result<f64, PricingError> {
                // Terms are checked by the generic facade
                let contract =
                    ContractParams::new_unchecked(spot, expiry, strike, rate, volatility);
                let config =
                    lattice_config(n_steps, LatticeModel::$model, ExerciseStyle::$exercise)?;
                price_lattice(&contract, &config, OptionType::$option)
            }
        )+
    };
}

macro_rules! monte_carlo_pricers {
    ($($(#[$doc:meta])* $name:ident => $payoff:ident;)+) => {
        $(
            $(#[$doc])*
            ///
            /// Discounted antithetic average over `n_draws` draws seeded with
            /// [`DEFAULT_SEED`](crate::rng::DEFAULT_SEED).
            ///
            /// # Errors
            ///
            /// `PricingError` if the contract terms or draw count are invalid.
            pub fn $name(
                spot: f64,
                expiry: f64,
                strike: f64,
                rate: f64,
                volatility: f64,
                n_draws: usize,
            ) -> Result<f64, PricingError> {
                // Terms are checked by the generic facade
                let contract =
                    ContractParams::new_unchecked(spot, expiry, strike, rate, volatility);
                let config = monte_carlo_config(n_draws)?;
                price_monte_carlo(&contract, &config, PayoffKind::$payoff)
            }
        )+
    };
}

monte_carlo_pricers! {
    /// European call by Monte Carlo.
    price_vanilla_eu_call => Call;
    /// European put by Monte Carlo.
    price_vanilla_eu_put => Put;
    /// European digital call paying one unit, by Monte Carlo.
    price_digital_eu_call => DigitalCall;
    /// European digital put paying one unit, by Monte Carlo.
    price_digital_eu_put => DigitalPut;
}

lattice_pricers! {
    /// American call on the plain symmetric lattice.
    price_american_call_plain => Plain, American, Call;
    /// American put on the plain symmetric lattice.
    price_american_put_plain => Plain, American, Put;
    /// American call on the plain drifted lattice.
    price_american_call_plain_drift => PlainDrift, American, Call;
    /// American put on the plain drifted lattice.
    price_american_put_plain_drift => PlainDrift, American, Put;
    /// American call on a Cox-Ross-Rubinstein lattice.
    price_american_call_crr => Crr, American, Call;
    /// American put on a Cox-Ross-Rubinstein lattice.
    price_american_put_crr => Crr, American, Put;
    /// American call on a Tian lattice.
    price_american_call_tian => Tian, American, Call;
    /// American put on a Tian lattice.
    price_american_put_tian => Tian, American, Put;
    /// American call on a Trigeorgis lattice.
    price_american_call_trigeorgis => Trigeorgis, American, Call;
    /// American put on a Trigeorgis lattice.
    price_american_put_trigeorgis => Trigeorgis, American, Put;
    /// American call on a Jarrow-Rudd lattice.
    price_american_call_jr => JarrowRudd, American, Call;
    /// American put on a Jarrow-Rudd lattice.
    price_american_put_jr => JarrowRudd, American, Put;
    /// American call on a Jabbour-Kramin-Young lattice.
    price_american_call_jky => Jky, American, Call;
    /// American put on a Jabbour-Kramin-Young lattice.
    price_american_put_jky => Jky, American, Put;

    /// European call on the plain symmetric lattice.
    price_european_call_plain => Plain, European, Call;
    /// European put on the plain symmetric lattice.
    price_european_put_plain => Plain, European, Put;
    /// European call on the plain drifted lattice.
    price_european_call_plain_drift => PlainDrift, European, Call;
    /// European put on the plain drifted lattice.
    price_european_put_plain_drift => PlainDrift, European, Put;
    /// European call on a Cox-Ross-Rubinstein lattice.
    price_european_call_crr => Crr, European, Call;
    /// European put on a Cox-Ross-Rubinstein lattice.
    price_european_put_crr => Crr, European, Put;
    /// European call on a Tian lattice.
    price_european_call_tian => Tian, European, Call;
    /// European put on a Tian lattice.
    price_european_put_tian => Tian, European, Put;
    /// European call on a Trigeorgis lattice.
    price_european_call_trigeorgis => Trigeorgis, European, Call;
    /// European put on a Trigeorgis lattice.
    price_european_put_trigeorgis => Trigeorgis, European, Put;
    /// European call on a Jarrow-Rudd lattice.
    price_european_call_jr => JarrowRudd, European, Call;
    /// European put on a Jarrow-Rudd lattice.
    price_european_put_jr => JarrowRudd, European, Put;
    /// European call on a Jabbour-Kramin-Young lattice.
    price_european_call_jky => Jky, European, Call;
    /// European put on a Jabbour-Kramin-Young lattice.
    price_european_put_jky => Jky, European, Put;
    /// European call on a Leisen-Reimer lattice. Odd step counts recommended.
    price_european_call_lr => LeisenReimer, European, Call;
    /// European put on a Leisen-Reimer lattice. Odd step counts recommended.
    price_european_put_lr => LeisenReimer, European, Put;
}
