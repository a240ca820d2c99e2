//! Historical volatility estimators.
//!
//! Rolling-window estimators over daily series, annualised with
//! [`TRADING_DAYS_PER_YEAR`]. Each returns one value per full window, so a
//! series of length `n` with window `w` yields `n - w + 1` values.
//!
//! - [`historical_volatility`]: close-to-close sample standard deviation
//! - [`parkinson_volatility`]: high-low range estimator
//! - [`garman_klass_volatility`]: open-high-low-close estimator

use super::error::AnalyticalError;

/// Annualisation factor for daily observations.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

fn check_window(window: usize, len: usize) -> Result<(), AnalyticalError> {
    if window == 0 || window > len {
        return Err(AnalyticalError::InvalidWindow { window, len });
    }
    Ok(())
}

fn check_len(expected: usize, got: usize) -> Result<(), AnalyticalError> {
    if expected != got {
        return Err(AnalyticalError::LengthMismatch { expected, got });
    }
    Ok(())
}

fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Annualised rolling volatility of a return series.
///
/// `√252 · s` where `s` is the unbiased sample standard deviation of each
/// window (divides by `w - 1`).
///
/// # Errors
/// `InvalidWindow` if `window < 2` or `window > returns.len()`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::historical_volatility;
///
/// let returns = [0.01, -0.01, 0.01, -0.01];
/// let vols = historical_volatility(&returns, 4).unwrap();
/// assert_eq!(vols.len(), 1);
/// ```
pub fn historical_volatility(returns: &[f64], window: usize) -> Result<Vec<f64>, AnalyticalError> {
    check_window(window, returns.len())?;
    if window < 2 {
        return Err(AnalyticalError::InvalidWindow {
            window,
            len: returns.len(),
        });
    }

    let scale = TRADING_DAYS_PER_YEAR.sqrt();
    Ok(returns
        .windows(window)
        .map(|w| {
            let mean = w.iter().sum::<f64>() / window as f64;
            let ss: f64 = w.iter().map(|r| (r - mean) * (r - mean)).sum();
            scale * (ss / (window - 1) as f64).sqrt()
        })
        .collect())
}

/// Parkinson high-low volatility.
///
/// `√(252 / (4 ln 2) · mean(ln(H/L)²))` over each window.
///
/// # Errors
/// `LengthMismatch` if `highs` and `lows` differ in length, `InvalidWindow`
/// if the window does not fit.
pub fn parkinson_volatility(
    highs: &[f64],
    lows: &[f64],
    window: usize,
) -> Result<Vec<f64>, AnalyticalError> {
    check_len(highs.len(), lows.len())?;
    check_window(window, highs.len())?;

    let squared: Vec<f64> = highs
        .iter()
        .zip(lows)
        .map(|(h, l)| (h / l).ln().powi(2))
        .collect();

    let scale = TRADING_DAYS_PER_YEAR / (4.0 * std::f64::consts::LN_2);
    Ok(rolling_mean(&squared, window)
        .into_iter()
        .map(|m| (scale * m).sqrt())
        .collect())
}

/// Garman-Klass volatility.
///
/// `√(N/2 · mean(ln(H/L)²) − N(2 ln 2 − 1) · mean(ln(C/O)²))` with `N = 252`.
///
/// # Errors
/// `LengthMismatch` if the four series differ in length, `InvalidWindow`
/// if the window does not fit.
pub fn garman_klass_volatility(
    opens: &[f64],
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    window: usize,
) -> Result<Vec<f64>, AnalyticalError> {
    let len = opens.len();
    check_len(len, highs.len())?;
    check_len(len, lows.len())?;
    check_len(len, closes.len())?;
    check_window(window, len)?;

    let hilo: Vec<f64> = highs
        .iter()
        .zip(lows)
        .map(|(h, l)| (h / l).ln().powi(2))
        .collect();
    let close_open: Vec<f64> = closes
        .iter()
        .zip(opens)
        .map(|(c, o)| (c / o).ln().powi(2))
        .collect();

    let n = TRADING_DAYS_PER_YEAR;
    let co_weight = n * (2.0 * std::f64::consts::LN_2 - 1.0);
    Ok(rolling_mean(&hilo, window)
        .into_iter()
        .zip(rolling_mean(&close_open, window))
        .map(|(hl, co)| (0.5 * n * hl - co_weight * co).sqrt())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_historical_volatility_alternating_returns() {
        // Mean 0, each deviation 0.01; s = 0.01 * sqrt(4/3)
        let returns = [0.01, -0.01, 0.01, -0.01];
        let vols = historical_volatility(&returns, 4).unwrap();
        assert_relative_eq!(
            vols[0],
            252.0_f64.sqrt() * 0.01 * (4.0_f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_historical_volatility_output_length() {
        let returns: Vec<f64> = (0..40).map(|i| 0.001 * (i as f64).sin()).collect();
        let vols = historical_volatility(&returns, 30).unwrap();
        assert_eq!(vols.len(), 11);
        assert!(vols.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_historical_volatility_constant_series_is_zero() {
        let vols = historical_volatility(&[0.002; 10], 5).unwrap();
        assert!(vols.iter().all(|v| v.abs() < 1e-15));
    }

    #[test]
    fn test_historical_volatility_rejects_bad_window() {
        assert!(matches!(
            historical_volatility(&[0.01, 0.02], 3),
            Err(AnalyticalError::InvalidWindow { window: 3, len: 2 })
        ));
        assert!(historical_volatility(&[0.01, 0.02], 1).is_err());
        assert!(historical_volatility(&[0.01, 0.02], 0).is_err());
    }

    #[test]
    fn test_parkinson_constant_range() {
        // ln(H/L) = 0.02 every day
        let lows = [100.0; 5];
        let highs: Vec<f64> = lows.iter().map(|l| l * 0.02_f64.exp()).collect();
        let vols = parkinson_volatility(&highs, &lows, 5).unwrap();
        let expected = (252.0 / (4.0 * std::f64::consts::LN_2) * 0.0004).sqrt();
        assert_eq!(vols.len(), 1);
        assert_relative_eq!(vols[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_parkinson_length_mismatch() {
        assert!(matches!(
            parkinson_volatility(&[1.0, 2.0], &[1.0], 1),
            Err(AnalyticalError::LengthMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_garman_klass_flat_open_close() {
        // With C = O the estimator reduces to sqrt(N/2 * mean(ln(H/L)^2))
        let opens = [50.0; 3];
        let closes = [50.0; 3];
        let lows = [49.0; 3];
        let highs = [51.0; 3];
        let vols = garman_klass_volatility(&opens, &highs, &lows, &closes, 3).unwrap();
        let hl = (51.0_f64 / 49.0).ln().powi(2);
        assert_relative_eq!(vols[0], (126.0 * hl).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_garman_klass_length_mismatch() {
        let short = [1.0; 2];
        let long = [1.0; 3];
        assert!(garman_klass_volatility(&long, &long, &short, &long, 2).is_err());
    }
}
