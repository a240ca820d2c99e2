//! Option vocabulary shared by every pricing layer.
//!
//! This module provides:
//! - [`OptionType`]: call or put
//! - [`ExerciseStyle`]: European (expiry only) or American (any lattice node)

use std::fmt;

/// Direction of a vanilla option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Intrinsic value `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any time before expiry
///
/// # Examples
/// ```
/// use pricer_core::types::ExerciseStyle;
///
/// assert!(!ExerciseStyle::European.allows_early_exercise());
/// assert!(ExerciseStyle::American.allows_early_exercise());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    #[default]
    European,
    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns whether intrinsic value is compared at interior nodes.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "european"),
            ExerciseStyle::American => write!(f, "american"),
        }
    }
}
