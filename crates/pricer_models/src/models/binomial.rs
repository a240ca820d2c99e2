//! Discretisation schemes for recombining binomial lattices.
//!
//! Every scheme maps contract terms and a step count `N` to
//! [`LatticeParams`]: the log up-move, the log down-move, the risk-neutral
//! up-probability, and the per-step growth factor `exp(rh)` used to discount
//! the rollback.
//!
//! | Model | Forward pass | Reference |
//! |---|---|---|
//! | [`LatticeModel::Plain`] | symmetric | no-arbitrage p on u = e^(σ√h) |
//! | [`LatticeModel::PlainDrift`] | asymmetric | no-arbitrage p on drifted moves |
//! | [`LatticeModel::Crr`] | symmetric | Cox, Ross & Rubinstein (1979) |
//! | [`LatticeModel::Tian`] | asymmetric | Tian (1993) |
//! | [`LatticeModel::Trigeorgis`] | symmetric | Trigeorgis (1991) |
//! | [`LatticeModel::JarrowRudd`] | asymmetric | Jarrow & Rudd (1983) |
//! | [`LatticeModel::Jky`] | asymmetric | Jabbour, Kramin & Young (2001) |
//! | [`LatticeModel::LeisenReimer`] | asymmetric | Leisen & Reimer (1996) |
//!
//! No scheme guards against degenerate inputs. `σ = 0` or `N = 0` divides
//! by zero and the resulting NaN or infinity flows into the lattice.

use std::fmt;

use crate::instruments::{log_drift, ContractParams};

/// Output of a discretisation scheme.
///
/// Rollback weights are `prob_up / growth` and `(1 - prob_up) / growth`, so
/// one backward step both discounts and takes the risk-neutral expectation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParams {
    /// ln u
    pub log_up: f64,
    /// ln d
    pub log_down: f64,
    /// Risk-neutral probability of an up-move
    pub prob_up: f64,
    /// Per-step growth factor exp(rh)
    pub growth: f64,
}

impl LatticeParams {
    /// 1 - p
    #[inline]
    pub fn prob_down(&self) -> f64 {
        1.0 - self.prob_up
    }

    /// Discounted up weight p / exp(rh).
    #[inline]
    pub fn up_weight(&self) -> f64 {
        self.prob_up / self.growth
    }

    /// Discounted down weight (1 - p) / exp(rh).
    #[inline]
    pub fn down_weight(&self) -> f64 {
        self.prob_down() / self.growth
    }
}

/// Binomial discretisation scheme.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractParams;
/// use pricer_models::models::LatticeModel;
///
/// let contract = ContractParams::new(100.0, 1.0, 100.0, 0.05, 0.2).unwrap();
/// let lp = LatticeModel::Crr.parameterise(&contract, 100);
/// assert!((lp.log_up + lp.log_down).abs() < 1e-15);
/// assert!(lp.prob_up > 0.0 && lp.prob_up < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatticeModel {
    /// u = e^(σ√h), d = 1/u, p = (e^(rh) − d)/(u − d)
    Plain,
    /// ln u, ln d = νh ± σ√h, p = (e^(rh) − d)/(u − d)
    PlainDrift,
    /// Cox-Ross-Rubinstein
    #[default]
    Crr,
    /// Tian third-moment matching
    Tian,
    /// Trigeorgis log-transformed
    Trigeorgis,
    /// Jarrow-Rudd equal probabilities
    JarrowRudd,
    /// Jabbour-Kramin-Young
    Jky,
    /// Leisen-Reimer with Peizer-Pratt inversion
    LeisenReimer,
}

impl LatticeModel {
    /// Every scheme, in declaration order.
    pub const ALL: [LatticeModel; 8] = [
        LatticeModel::Plain,
        LatticeModel::PlainDrift,
        LatticeModel::Crr,
        LatticeModel::Tian,
        LatticeModel::Trigeorgis,
        LatticeModel::JarrowRudd,
        LatticeModel::Jky,
        LatticeModel::LeisenReimer,
    ];

    /// Short identifier.
    pub fn name(&self) -> &'static str {
        match self {
            LatticeModel::Plain => "plain",
            LatticeModel::PlainDrift => "plain-drift",
            LatticeModel::Crr => "crr",
            LatticeModel::Tian => "tian",
            LatticeModel::Trigeorgis => "trigeorgis",
            LatticeModel::JarrowRudd => "jr",
            LatticeModel::Jky => "jky",
            LatticeModel::LeisenReimer => "lr",
        }
    }

    /// Whether the forward pass uses ln d = −ln u.
    ///
    /// The two-argument pass would give the same nodes for these schemes up
    /// to rounding, but the variants are kept distinct so results stay
    /// reproducible per scheme.
    pub fn uses_symmetric_pass(&self) -> bool {
        matches!(
            self,
            LatticeModel::Plain | LatticeModel::Crr | LatticeModel::Trigeorgis
        )
    }

    /// Computes lattice parameters for `n_steps` steps over the contract life.
    pub fn parameterise(&self, contract: &ContractParams, n_steps: usize) -> LatticeParams {
        let h = contract.step_size(n_steps);
        let vol = contract.volatility();
        let rate = contract.rate();
        match self {
            LatticeModel::Plain => plain(vol, rate, h),
            LatticeModel::PlainDrift => plain_drift(vol, rate, h),
            LatticeModel::Crr => crr(vol, rate, h),
            LatticeModel::Tian => tian(vol, rate, h),
            LatticeModel::Trigeorgis => trigeorgis(vol, rate, h),
            LatticeModel::JarrowRudd => jarrow_rudd(vol, rate, h),
            LatticeModel::Jky => jky(vol, rate, h),
            LatticeModel::LeisenReimer => leisen_reimer(
                contract.spot(),
                contract.strike(),
                rate,
                vol,
                contract.expiry(),
                n_steps,
            ),
        }
    }
}

impl fmt::Display for LatticeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// No-arbitrage probability (e^(rh) − d)/(u − d) from log moves.
#[inline]
fn no_arbitrage(log_up: f64, log_down: f64, growth: f64) -> f64 {
    let u = log_up.exp();
    let d = log_down.exp();
    (growth - d) / (u - d)
}

/// Plain symmetric scheme: u = e^(σ√h), d = 1/u, p = (e^(rh) − d)/(u − d).
pub fn plain(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let log_up = vol * h.sqrt();
    let growth = (rate * h).exp();
    LatticeParams {
        log_up,
        log_down: -log_up,
        prob_up: no_arbitrage(log_up, -log_up, growth),
        growth,
    }
}

/// Plain drifted scheme: ln u, ln d = νh ± σ√h, p = (e^(rh) − d)/(u − d).
pub fn plain_drift(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let mean = log_drift(rate, vol) * h;
    let spread = vol * h.sqrt();
    let growth = (rate * h).exp();
    let (log_up, log_down) = (mean + spread, mean - spread);
    LatticeParams {
        log_up,
        log_down,
        prob_up: no_arbitrage(log_up, log_down, growth),
        growth,
    }
}

/// Cox-Ross-Rubinstein: u = e^(σ√h), d = 1/u, p = ½ + ν√h/(2σ).
pub fn crr(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let sqrt_h = h.sqrt();
    let log_up = vol * sqrt_h;
    LatticeParams {
        log_up,
        log_down: -log_up,
        prob_up: 0.5 + log_drift(rate, vol) * sqrt_h / (2.0 * vol),
        growth: (rate * h).exp(),
    }
}

/// Tian: matches the first three moments of the lognormal step.
///
/// With M = e^(rh) and V = e^(σ²h):
/// u, d = ½·M·V·(V + 1 ± √(V² + 2V − 3)), p = (M − d)/(u − d).
pub fn tian(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let m = (rate * h).exp();
    let v = (vol * vol * h).exp();
    let root = (v * v + 2.0 * v - 3.0).sqrt();
    let u = 0.5 * m * v * (v + 1.0 + root);
    let d = 0.5 * m * v * (v + 1.0 - root);
    LatticeParams {
        log_up: u.ln(),
        log_down: d.ln(),
        prob_up: (m - d) / (u - d),
        growth: m,
    }
}

/// Trigeorgis: ln u = √(σ²h + ν²h²) = −ln d, p = ½ + νh/(2 ln u).
pub fn trigeorgis(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let nu = log_drift(rate, vol);
    let log_up = (vol * vol * h + nu * nu * h * h).sqrt();
    LatticeParams {
        log_up,
        log_down: -log_up,
        prob_up: 0.5 + nu * h / (2.0 * log_up),
        growth: (rate * h).exp(),
    }
}

/// Jarrow-Rudd: ln u, ln d = νh ± σ√h, p = ½.
pub fn jarrow_rudd(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let mean = log_drift(rate, vol) * h;
    let spread = vol * h.sqrt();
    LatticeParams {
        log_up: mean + spread,
        log_down: mean - spread,
        prob_up: 0.5,
        growth: (rate * h).exp(),
    }
}

/// Jabbour-Kramin-Young.
///
/// p = ½ + σ√h / (2√(4 + σ²h)),
/// ln u = νh + (1 − p)σ√h/√(p(1 − p)), ln d = νh − pσ√h/√(p(1 − p)).
/// Matches the log-step mean νh and variance σ²h exactly.
pub fn jky(vol: f64, rate: f64, h: f64) -> LatticeParams {
    let sigma_sqrt_h = vol * h.sqrt();
    let p = 0.5 + sigma_sqrt_h / (2.0 * (4.0 + vol * vol * h).sqrt());
    let scale = sigma_sqrt_h / (p * (1.0 - p)).sqrt();
    let mean = log_drift(rate, vol) * h;
    LatticeParams {
        log_up: mean + (1.0 - p) * scale,
        log_down: mean - p * scale,
        prob_up: p,
        growth: (rate * h).exp(),
    }
}

/// Leisen-Reimer: strike-centred scheme built from Black-Scholes d₁, d₂.
///
/// p = f(d₂, N), p' = f(d₁, N), u = e^(rh)·p'/p, d = (e^(rh) − p·u)/(1 − p),
/// where f is [`peizer_pratt_inversion`]. `n_steps` is used as given; odd
/// step counts give the monotone convergence the scheme is known for.
pub fn leisen_reimer(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
    n_steps: usize,
) -> LatticeParams {
    let h = expiry / n_steps as f64;
    let vol_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let p = peizer_pratt_inversion(d2, n_steps);
    let p_dash = peizer_pratt_inversion(d1, n_steps);
    let growth = (rate * h).exp();
    let u = growth * p_dash / p;
    let d = (growth - p * u) / (1.0 - p);
    LatticeParams {
        log_up: u.ln(),
        log_down: d.ln(),
        prob_up: p,
        growth,
    }
}

/// Peizer-Pratt method-2 inversion of the normal quantile `z` to a binomial
/// probability for `n` steps.
///
/// f(z, n) = ½ + sign(z)·½·√(1 − exp(−(z / (n + ⅓ + 0.1/(n + 1)))²·(n + ⅙)))
pub fn peizer_pratt_inversion(z: f64, n: usize) -> f64 {
    let n = n as f64;
    let r = z / (n + 1.0 / 3.0 + 0.1 / (n + 1.0));
    let tail = (-r * r * (n + 1.0 / 6.0)).exp();
    0.5 + z.signum() * 0.5 * (1.0 - tail).sqrt()
}
