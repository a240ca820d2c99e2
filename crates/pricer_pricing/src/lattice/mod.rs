//! Recombining binomial lattice.
//!
//! A [`Lattice`] with `n` steps stores the `n + 1` time slices of a
//! recombining tree in one flat buffer. Slice `k` holds `k + 1` nodes and
//! node `(k, i)` is the state after `k` steps with `i` up-moves, stored at
//! `k(k + 1)/2 + i`. The buffer length is `(n + 1)(n + 2)/2`.
//!
//! # Architecture
//!
//! ```text
//! price_lattice
//! ├── LatticeModel::parameterise  (ln u, ln d, p, e^(rh))
//! ├── reference: Lattice          (log-underlying, forward pass)
//! └── values: Lattice             (option values, rollback)
//!     └── root()
//! ```
//!
//! The reference lattice is read-only once the forward pass has run; the
//! value lattice reuses the same geometry and is overwritten by the
//! rollback.
//!
//! # Malformed calls
//!
//! Operations on mismatched geometry are silent no-ops:
//! [`Lattice::set_terminal`] with the wrong slice length, and rollbacks
//! against a reference lattice of a different size, leave the lattice
//! untouched. Non-finite inputs are not rejected and propagate through the
//! arithmetic.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{PayoffEvaluator, PayoffKind};
//! use pricer_pricing::lattice::Lattice;
//!
//! // Two-step tree on ln S = ln 100 with u = 1.1, d = 1/u
//! let mut reference = Lattice::new(2);
//! reference.forward_pass_symmetric(100.0_f64.ln(), 1.1_f64.ln());
//!
//! let payoff = PayoffEvaluator::from_log(PayoffKind::Put, 100.0);
//! let mut values = Lattice::new(2);
//! values.multiplicative_rollback(&reference, 0.5, 0.5, &payoff);
//! assert!(values.root() > 0.0);
//! ```

pub mod config;

pub use config::{LatticeConfig, LatticeConfigBuilder, MAX_LATTICE_STEPS};

use pricer_core::types::ExerciseStyle;
use pricer_models::instruments::PayoffEvaluator;

/// Flat index of node `(k, i)`.
#[inline]
const fn offset(k: usize, i: usize) -> usize {
    k * (k + 1) / 2 + i
}

/// Number of nodes in a lattice with `n_steps` steps.
#[inline]
pub const fn node_count(n_steps: usize) -> usize {
    offset(n_steps + 1, 0)
}

/// Triangular node store for a recombining binomial tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    n_steps: usize,
    nodes: Vec<f64>,
}

impl Default for Lattice {
    /// Zero-step lattice holding only the root.
    fn default() -> Self {
        Self::new(0)
    }
}

impl Lattice {
    /// Allocates a zero-filled lattice with `n_steps` steps.
    pub fn new(n_steps: usize) -> Self {
        Self {
            n_steps,
            nodes: vec![0.0; node_count(n_steps)],
        }
    }

    /// Reallocates for `n_steps` steps, discarding all node values.
    pub fn set_size(&mut self, n_steps: usize) {
        self.n_steps = n_steps;
        self.nodes.clear();
        self.nodes.resize(node_count(n_steps), 0.0);
    }

    /// Number of binomial steps `n`. The lattice has `n + 1` slices.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Total number of nodes, `(n + 1)(n + 2)/2`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node `(k, i)`, or `None` outside `0 <= i <= k <= n`.
    #[inline]
    pub fn get(&self, k: usize, i: usize) -> Option<f64> {
        if k > self.n_steps || i > k {
            return None;
        }
        Some(self.nodes[offset(k, i)])
    }

    /// Time slice `k`, of length `k + 1`.
    #[inline]
    pub fn slice(&self, k: usize) -> Option<&[f64]> {
        if k > self.n_steps {
            return None;
        }
        Some(&self.nodes[offset(k, 0)..offset(k + 1, 0)])
    }

    /// Root node `(0, 0)`.
    #[inline]
    pub fn root(&self) -> f64 {
        self.nodes[0]
    }

    /// Writes the root node.
    #[inline]
    pub fn set_initial(&mut self, value: f64) {
        self.nodes[0] = value;
    }

    /// Overwrites the terminal slice.
    ///
    /// Does nothing unless `values.len() == n + 1`.
    pub fn set_terminal(&mut self, values: &[f64]) {
        if values.len() != self.n_steps + 1 {
            return;
        }
        let start = offset(self.n_steps, 0);
        self.nodes[start..].copy_from_slice(values);
    }

    /// Copy of the terminal slice.
    pub fn terminal(&self) -> Vec<f64> {
        self.nodes[offset(self.n_steps, 0)..].to_vec()
    }

    /// Populates every slice from `seed` at the root.
    ///
    /// Node `(k + 1, i)` is node `(k, i)` plus `log_down` for `i <= k`, and
    /// node `(k + 1, k + 1)` is node `(k, k)` plus `log_up`, so node `(k, i)`
    /// holds `seed + i·log_up + (k − i)·log_down`.
    pub fn forward_pass(&mut self, seed: f64, log_up: f64, log_down: f64) {
        self.nodes[0] = seed;
        for k in 0..self.n_steps {
            let (head, tail) = self.nodes.split_at_mut(offset(k + 1, 0));
            let current = &head[offset(k, 0)..];
            let next = &mut tail[..k + 2];
            for (dst, src) in next.iter_mut().zip(current) {
                *dst = src + log_down;
            }
            next[k + 1] = current[k] + log_up;
        }
    }

    /// [`forward_pass`](Self::forward_pass) with `log_down = −log_up`.
    ///
    /// Valid for schemes with `u·d = 1`.
    #[inline]
    pub fn forward_pass_symmetric(&mut self, seed: f64, log_up: f64) {
        self.forward_pass(seed, log_up, -log_up);
    }

    /// American backward induction against a log-underlying `reference`.
    ///
    /// Seeds the terminal slice with `payoff.eval(reference)`, then sets each
    /// earlier node to the larger of its continuation value
    /// `q·V(k+1, i) + p·V(k+1, i+1)` and its intrinsic value. `p` and `q` may
    /// carry the per-step discount, so they need not sum to one.
    ///
    /// Does nothing if `reference` has a different step count.
    pub fn multiplicative_rollback(
        &mut self,
        reference: &Lattice,
        p: f64,
        q: f64,
        payoff: &PayoffEvaluator,
    ) {
        self.rollback(reference, p, q, payoff, ExerciseStyle::American);
    }

    /// European backward induction: continuation value only.
    ///
    /// Does nothing if `reference` has a different step count.
    pub fn multiplicative_rollback_eu(
        &mut self,
        reference: &Lattice,
        p: f64,
        q: f64,
        payoff: &PayoffEvaluator,
    ) {
        self.rollback(reference, p, q, payoff, ExerciseStyle::European);
    }

    /// Backward induction for either exercise style.
    ///
    /// With zero steps the root is set to the payoff of the reference root.
    pub fn rollback(
        &mut self,
        reference: &Lattice,
        p: f64,
        q: f64,
        payoff: &PayoffEvaluator,
        exercise: ExerciseStyle,
    ) {
        if self.n_steps != reference.n_steps {
            return;
        }
        let n = self.n_steps;
        let terminal = offset(n, 0);
        for (value, state) in self.nodes[terminal..]
            .iter_mut()
            .zip(&reference.nodes[terminal..])
        {
            *value = payoff.eval(*state);
        }

        let early_exercise = exercise.allows_early_exercise();
        for k in (0..n).rev() {
            let (head, tail) = self.nodes.split_at_mut(offset(k + 1, 0));
            let current = &mut head[offset(k, 0)..];
            let next = &tail[..k + 2];
            let states = &reference.nodes[offset(k, 0)..offset(k + 1, 0)];
            for ((value, pair), state) in current.iter_mut().zip(next.windows(2)).zip(states) {
                let continuation = q * pair[0] + p * pair[1];
                *value = if early_exercise {
                    let intrinsic = payoff.eval(*state);
                    // NaN continuation falls through to intrinsic
                    if continuation > intrinsic {
                        continuation
                    } else {
                        intrinsic
                    }
                } else {
                    continuation
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::PayoffKind;

    #[test]
    fn test_node_count() {
        assert_eq!(node_count(0), 1);
        assert_eq!(node_count(1), 3);
        assert_eq!(node_count(4), 15);
        assert_eq!(Lattice::new(100).node_count(), 101 * 102 / 2);
    }

    #[test]
    fn test_default_is_root_only() {
        let lattice = Lattice::default();
        assert_eq!(lattice.n_steps(), 0);
        assert_eq!(lattice.node_count(), 1);
        assert_eq!(lattice.terminal(), vec![0.0]);
    }

    #[test]
    fn test_slices_have_increasing_length() {
        let lattice = Lattice::new(5);
        for k in 0..=5 {
            assert_eq!(lattice.slice(k).map(<[f64]>::len), Some(k + 1));
        }
        assert!(lattice.slice(6).is_none());
        assert!(lattice.get(2, 3).is_none());
        assert!(lattice.get(6, 0).is_none());
    }

    #[test]
    fn test_set_size_discards_content() {
        let mut lattice = Lattice::new(2);
        lattice.forward_pass(1.0, 0.5, -0.5);
        lattice.set_size(3);
        assert_eq!(lattice.n_steps(), 3);
        assert!(lattice.slice(3).unwrap().iter().all(|v| *v == 0.0));
        lattice.set_size(1);
        assert_eq!(lattice.node_count(), 3);
        assert_eq!(lattice.root(), 0.0);
    }

    #[test]
    fn test_set_terminal_and_copy() {
        let mut lattice = Lattice::new(2);
        lattice.set_terminal(&[1.0, 2.0, 3.0]);
        assert_eq!(lattice.terminal(), vec![1.0, 2.0, 3.0]);

        // Wrong length leaves the slice unchanged
        lattice.set_terminal(&[9.0, 9.0]);
        assert_eq!(lattice.terminal(), vec![1.0, 2.0, 3.0]);

        lattice.set_initial(7.5);
        assert_eq!(lattice.root(), 7.5);
    }

    #[test]
    fn test_forward_pass_small_tree() {
        let mut lattice = Lattice::new(2);
        lattice.forward_pass(0.0, 0.3, -0.1);
        assert_eq!(lattice.slice(1).unwrap(), &[-0.1, 0.3]);
        let last = lattice.slice(2).unwrap();
        assert_relative_eq!(last[0], -0.2, epsilon = 1e-15);
        assert_relative_eq!(last[1], 0.2, epsilon = 1e-15);
        assert_relative_eq!(last[2], 0.6, epsilon = 1e-15);
    }

    #[test]
    fn test_symmetric_pass_matches_two_argument_form() {
        let mut a = Lattice::new(10);
        let mut b = Lattice::new(10);
        a.forward_pass_symmetric(4.6, 0.02);
        b.forward_pass(4.6, 0.02, -0.02);
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_step_rollback_by_hand() {
        let mut reference = Lattice::new(1);
        reference.forward_pass(100.0_f64.ln(), 1.2_f64.ln(), 0.8_f64.ln());
        let call = PayoffEvaluator::from_log(PayoffKind::Call, 100.0);

        let mut values = Lattice::new(1);
        values.multiplicative_rollback_eu(&reference, 0.6, 0.3, &call);
        assert_relative_eq!(values.terminal()[1], 20.0, epsilon = 1e-10);
        assert_relative_eq!(values.root(), 0.6 * 20.0, epsilon = 1e-10);
    }

    #[test]
    fn test_american_takes_intrinsic_when_larger() {
        // Deep in-the-money put with heavy discounting: exercise at the root
        let mut reference = Lattice::new(1);
        reference.forward_pass_symmetric(50.0_f64.ln(), 0.1);
        let put = PayoffEvaluator::from_log(PayoffKind::Put, 100.0);

        let mut american = Lattice::new(1);
        american.multiplicative_rollback(&reference, 0.4, 0.4, &put);
        assert_relative_eq!(american.root(), 50.0, epsilon = 1e-10);

        let mut european = Lattice::new(1);
        european.multiplicative_rollback_eu(&reference, 0.4, 0.4, &put);
        assert!(european.root() < 50.0);
    }

    #[test]
    fn test_zero_step_rollback_is_terminal_payoff() {
        let mut reference = Lattice::new(0);
        reference.forward_pass(110.0_f64.ln(), 0.1, -0.1);
        let call = PayoffEvaluator::from_log(PayoffKind::Call, 100.0);

        let mut values = Lattice::default();
        values.multiplicative_rollback(&reference, 0.5, 0.5, &call);
        assert_relative_eq!(values.root(), 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mismatched_rollback_is_no_op() {
        let mut reference = Lattice::new(3);
        reference.forward_pass_symmetric(0.0, 0.1);
        let call = PayoffEvaluator::from_log(PayoffKind::Call, 1.0);

        let mut values = Lattice::new(2);
        values.forward_pass(1.0, 2.0, 3.0);
        let before = values.clone();
        values.multiplicative_rollback(&reference, 0.5, 0.5, &call);
        assert_eq!(values, before);
        values.multiplicative_rollback_eu(&reference, 0.5, 0.5, &call);
        assert_eq!(values, before);
    }

    #[test]
    fn test_rollback_style_dispatch() {
        let mut reference = Lattice::new(4);
        reference.forward_pass_symmetric(100.0_f64.ln(), 0.1);
        let put = PayoffEvaluator::from_log(PayoffKind::Put, 105.0);

        let mut a = Lattice::new(4);
        let mut b = Lattice::new(4);
        a.rollback(&reference, 0.49, 0.5, &put, ExerciseStyle::American);
        b.multiplicative_rollback(&reference, 0.49, 0.5, &put);
        assert_eq!(a, b);
    }
}
