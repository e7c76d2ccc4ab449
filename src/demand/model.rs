//! Per-SKU demand fitting over a whole dataset.
//!
//! Purpose
//! -------
//! Drive the log-log regression SKU by SKU, collecting successful fits into
//! an [`ElasticityTable`] and per-SKU failures into a side list so one bad
//! SKU never aborts the batch.
//!
//! Key behaviors
//! -------------
//! - SKUs are visited in first-appearance order; the table mirrors it.
//! - A SKU that fails (too few rows, singular design, non-finite
//!   coefficients) lands in `failures` with its error attached; fitting
//!   continues.
//! - The derived feature columns are required up front; a dataset without
//!   them is a hard error, not a per-SKU one.
//!
//! Downstream usage
//! ----------------
//! The orchestrator feeds the resulting table straight into the profit
//! optimizer and reports `failures` as skipped SKUs.
use tracing::warn;

use crate::demand::data::PricingData;
use crate::demand::errors::{DemandError, DemandResult};
use crate::demand::regression::{fit_loglog, MIN_OBS_PER_SKU};
use crate::demand::table::{ElasticityEstimate, ElasticityTable};

/// A SKU the fitter had to skip, with the reason.
#[derive(Debug)]
pub struct SkuFitFailure {
    pub sku_id: u32,
    pub error: DemandError,
}

/// Result of fitting a whole dataset: the table plus the skip list.
#[derive(Debug, Default)]
pub struct FitOutcome {
    pub table: ElasticityTable,
    pub failures: Vec<SkuFitFailure>,
}

/// Per-SKU log-log demand fitter.
#[derive(Debug, Clone)]
pub struct DemandModel {
    /// Minimum rows a SKU needs before a fit is attempted.
    pub min_obs: usize,
}

impl Default for DemandModel {
    fn default() -> Self {
        Self { min_obs: MIN_OBS_PER_SKU }
    }
}

impl DemandModel {
    /// Fit every SKU in the dataset.
    ///
    /// # Errors
    /// [`DemandError::FeaturesNotComputed`] if
    /// [`PricingData::feature_engineering`] has not been run. Per-SKU
    /// failures are collected in the outcome, not returned.
    pub fn fit_own_elasticity(&self, data: &PricingData) -> DemandResult<FitOutcome> {
        let features = data.features()?;
        let (order, rows) = data.rows_by_sku();

        let mut outcome = FitOutcome::default();
        for sku_id in order {
            let idx = &rows[&sku_id];
            if idx.len() < self.min_obs {
                outcome.failures.push(SkuFitFailure {
                    sku_id,
                    error: DemandError::InsufficientData {
                        sku_id,
                        n_obs: idx.len(),
                        required: self.min_obs,
                    },
                });
                continue;
            }
            let y = features.log_quantity.select(ndarray::Axis(0), idx);
            let x1 = features.log_price.select(ndarray::Axis(0), idx);
            let x2 = features.log_competitor_price.select(ndarray::Axis(0), idx);
            match fit_loglog(sku_id, y.view(), x1.view(), x2.view()) {
                Ok(fit) => outcome.table.insert(ElasticityEstimate {
                    sku_id,
                    own_elasticity: fit.own_elasticity,
                    cross_elasticity: fit.cross_elasticity,
                    intercept: fit.intercept,
                    fit_quality: fit.r_squared,
                    own_elasticity_se: fit.own_se,
                    own_elasticity_p: fit.own_p_value,
                    n_obs: fit.n_obs,
                }),
                Err(error) => {
                    warn!(sku_id, %error, "demand fit failed, skipping SKU");
                    outcome.failures.push(SkuFitFailure { sku_id, error });
                }
            }
        }
        Ok(outcome)
    }
}
