//! Standard normal distribution functions.
//!
//! This module provides double-precision implementations of:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this magnitude the tail mass underflows to zero.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and continued-fraction branches.
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using Hart's double-precision
/// algorithm (as presented by West, 2005): a rational approximation for
/// |x| < 5√2 and a continued fraction for the far tail.
///
/// # Accuracy
/// Absolute error below 1e-14 for all finite x.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-14);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
pub fn norm_cdf(x: f64) -> f64 {
    let z = x.abs();

    let tail = if z > TAIL_CUTOFF {
        0.0
    } else {
        let e = (-0.5 * z * z).exp();
        if z < RATIONAL_LIMIT {
            let num = (((((3.526_249_659_989_11e-2 * z + 0.700_383_064_443_688) * z
                + 6.373_962_203_531_65)
                * z
                + 33.912_866_078_383)
                * z
                + 112.079_291_497_871)
                * z
                + 221.213_596_169_931)
                * z
                + 220.206_867_912_376;
            let den = ((((((8.838_834_764_831_84e-2 * z + 1.755_667_163_182_64) * z
                + 16.064_177_579_207)
                * z
                + 86.780_732_202_946_1)
                * z
                + 296.564_248_779_674)
                * z
                + 637.333_633_378_831)
                * z
                + 793.826_512_519_948)
                * z
                + 440.413_735_824_752;
            e * num / den
        } else {
            let mut b = z + 0.65;
            b = z + 4.0 / b;
            b = z + 3.0 / b;
            b = z + 2.0 / b;
            b = z + 1.0 / b;
            e / b / SQRT_2PI
        }
    };

    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-6.0, -3.0, -1.5, -0.25, 0.0, 0.25, 1.5, 3.0, 6.0, 8.5] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_07, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(2.0), 0.977_249_868_051_820_8, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(-2.0), 0.022_750_131_948_179_195, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(3.0), 0.998_650_101_968_369_9, epsilon = 1e-13);
    }

    #[test]
    fn test_norm_cdf_far_tail() {
        // Continued-fraction branch
        let p = norm_cdf(-8.0);
        assert!(p > 0.0 && p < 1e-14);
        assert_relative_eq!(p, 6.220_960_574_271_785e-16, max_relative = 1e-6);

        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_norm_cdf_monotone() {
        let mut prev = 0.0;
        for i in -80..=80 {
            let x = i as f64 * 0.1;
            let p = norm_cdf(x);
            assert!(p >= prev, "CDF decreased at x = {}", x);
            prev = p;
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-1.0), norm_pdf(1.0), epsilon = 1e-15);
    }
}
