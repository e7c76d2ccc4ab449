//! End-to-end batch run: fit demand, search prices, emit the report.
//!
//! Purpose
//! -------
//! Wire the demand fitter and the profit optimizer together over one
//! dataset: derive features, fit every SKU, join each estimate with its
//! latest cost/price observation, run the guardrailed search, and collect
//! comparative [`report::OptimizationResult`] rows plus skip accounting.
//!
//! Key behaviors
//! -------------
//! - Rows come out in SKU first-appearance order, mirroring the fit table.
//! - Every SKU that produces no row produces a [`errors::SkippedSku`]
//!   instead; the run itself only fails on dataset-level problems.
//! - Current profit is evaluated under the same fitted demand curve as the
//!   optimized profit, so the uplift column compares like with like.
//! - A non-negative fitted elasticity is still priced (the search pins the
//!   guardrail ceiling) but the row is flagged.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover joining, skip accounting, and warning flags on
//!   small exact datasets; the full pipeline properties live in the
//!   integration suite.
pub mod errors;
pub mod report;
pub mod snapshot;

use tracing::warn;

use crate::demand::{DemandError, DemandModel, PricingData};
use crate::orchestrator::errors::{SkipReason, SkippedSku};
use crate::orchestrator::report::{round1, round2, OptimizationResult, RecommendationWarning};
use crate::orchestrator::snapshot::build_latest_snapshot;
use crate::pricing::{PriceBounds, PriceOptimizer, ProfitModel};

/// Everything one batch run produced.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Recommendation rows, SKU first-appearance order.
    pub results: Vec<OptimizationResult>,
    /// SKUs that produced no row, with reasons.
    pub skipped: Vec<SkippedSku>,
}

impl BatchOutcome {
    /// Rows emitted.
    pub fn optimized_count(&self) -> usize {
        self.results.len()
    }

    /// SKUs skipped.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// The full pipeline: demand fitting plus guardrailed price search.
#[derive(Debug, Default)]
pub struct OptimizationOrchestrator {
    pub demand: DemandModel,
    pub optimizer: PriceOptimizer,
}

impl OptimizationOrchestrator {
    pub fn new(demand: DemandModel, optimizer: PriceOptimizer) -> Self {
        Self { demand, optimizer }
    }

    /// Run the batch over `data`.
    ///
    /// Derives features if needed, fits every SKU, and prices every fitted
    /// SKU against its latest observation.
    ///
    /// # Errors
    /// Only dataset-level failures abort the run; per-SKU problems land in
    /// [`BatchOutcome::skipped`].
    pub fn run(&self, data: &mut PricingData) -> Result<BatchOutcome, DemandError> {
        data.feature_engineering();
        let fit = self.demand.fit_own_elasticity(data)?;
        let latest = build_latest_snapshot(data);

        let mut outcome = BatchOutcome::default();
        for failure in fit.failures {
            outcome.skipped.push(SkippedSku {
                sku_id: failure.sku_id,
                reason: SkipReason::Fit(failure.error),
            });
        }

        for estimate in fit.table.iter() {
            let Some(snap) = latest.get(&estimate.sku_id) else {
                warn!(sku_id = estimate.sku_id, "fitted SKU missing from latest snapshot");
                outcome.skipped.push(SkippedSku {
                    sku_id: estimate.sku_id,
                    reason: SkipReason::MissingSnapshot,
                });
                continue;
            };

            let priced = PriceBounds::from_cost(snap.cost)
                .and_then(|bounds| {
                    ProfitModel::new(
                        estimate.intercept,
                        estimate.own_elasticity,
                        snap.cost,
                        bounds,
                    )
                })
                .and_then(|model| {
                    let solution = self.optimizer.optimize(&model, snap.price)?;
                    Ok((model, solution))
                });
            let (model, solution) = match priced {
                Ok(pair) => pair,
                Err(err) => {
                    warn!(sku_id = estimate.sku_id, %err, "price search failed, skipping SKU");
                    outcome.skipped.push(SkippedSku {
                        sku_id: estimate.sku_id,
                        reason: SkipReason::Optimization(err),
                    });
                    continue;
                }
            };

            let current_profit = model.profit(snap.price);
            let price_change_pct =
                (solution.optimal_price - snap.price) / snap.price * 100.0;
            let warning = if estimate.own_elasticity >= 0.0 {
                Some(RecommendationWarning::NonNegativeElasticity)
            } else if solution.at_bound {
                Some(RecommendationWarning::PriceAtBound)
            } else {
                None
            };

            outcome.results.push(OptimizationResult {
                sku_id: estimate.sku_id,
                product: snap.product_name.clone(),
                category: snap.category.clone(),
                current_price: round2(snap.price),
                optimal_price: round2(solution.optimal_price),
                price_change_pct: round1(price_change_pct),
                elasticity: round2(estimate.own_elasticity),
                current_profit: round2(current_profit),
                optimized_profit: round2(solution.optimal_profit),
                profit_uplift_dol: round2(solution.optimal_profit - current_profit),
                warning,
            });
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::TransactionRecord;
    use chrono::NaiveDate;

    fn record(
        sku_id: u32,
        day: u32,
        price: f64,
        cost: f64,
        comp: f64,
        qty: f64,
    ) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            sku_id,
            product_name: format!("Product_{sku_id}"),
            category: "Coffee".to_string(),
            price,
            cost,
            competitor_price: comp,
            quantity_sold: qty,
        }
    }

    /// Rows generated exactly from a log-log demand curve.
    fn exact_rows(sku_id: u32, a: f64, e: f64, cost: f64, n: u32) -> Vec<TransactionRecord> {
        (1..=n)
            .map(|d| {
                let price = cost * 1.4 + 0.2 * d as f64;
                let comp = price * 1.1 + 0.05 * (d as f64).powf(1.5);
                let log_qty = a + e * price.ln_1p() + 0.4 * comp.ln_1p();
                record(sku_id, d, price, cost, comp, log_qty.exp() - 1.0)
            })
            .collect()
    }

    #[test]
    fn healthy_dataset_yields_one_row_per_sku() {
        let mut rows = exact_rows(101, 4.0, -1.8, 10.0, 12);
        rows.extend(exact_rows(102, 4.6, -2.2, 6.0, 12));
        let mut data = PricingData::new(rows).unwrap();

        let outcome = OptimizationOrchestrator::default().run(&mut data).unwrap();
        assert_eq!(outcome.optimized_count(), 2);
        assert_eq!(outcome.skipped_count(), 0);
        let ids: Vec<u32> = outcome.results.iter().map(|r| r.sku_id).collect();
        assert_eq!(ids, vec![101, 102]);
        // Both fits put the interior optimum inside the guardrails.
        for row in &outcome.results {
            let cost = if row.sku_id == 101 { 10.0 } else { 6.0 };
            assert!(row.optimal_price > cost * 1.05 && row.optimal_price < cost * 3.0);
            assert!(row.optimized_profit.is_finite());
            assert!(row.warning.is_none());
        }
    }

    #[test]
    fn sparse_sku_is_skipped_with_fit_reason() {
        let mut rows = exact_rows(101, 4.0, -1.8, 10.0, 12);
        rows.push(record(999, 1, 12.0, 6.0, 13.0, 20.0));
        let mut data = PricingData::new(rows).unwrap();

        let outcome = OptimizationOrchestrator::default().run(&mut data).unwrap();
        assert_eq!(outcome.optimized_count(), 1);
        assert_eq!(outcome.skipped_count(), 1);
        assert_eq!(outcome.skipped[0].sku_id, 999);
        assert!(matches!(outcome.skipped[0].reason, SkipReason::Fit(_)));
    }

    #[test]
    fn non_negative_elasticity_is_flagged_not_skipped() {
        // Quantities rise with price: the fitted own-price slope is positive.
        let rows: Vec<TransactionRecord> = (1..=10)
            .map(|d| {
                let price = 10.0 + 0.5 * d as f64;
                let comp = 11.0 + 0.3 * (d as f64).powf(1.3);
                let log_qty = 1.0 + 1.2 * price.ln_1p() + 0.2 * comp.ln_1p();
                record(101, d, price, 8.0, comp, log_qty.exp() - 1.0)
            })
            .collect();
        let mut data = PricingData::new(rows).unwrap();

        let outcome = OptimizationOrchestrator::default().run(&mut data).unwrap();
        assert_eq!(outcome.optimized_count(), 1);
        let row = &outcome.results[0];
        assert_eq!(row.warning, Some(RecommendationWarning::NonNegativeElasticity));
        // Rising demand in price pins the guardrail ceiling, 3x cost.
        assert_eq!(row.optimal_price, 24.0);
    }

    #[test]
    fn uplift_column_is_consistent_with_profit_columns() {
        let mut data = PricingData::new(exact_rows(101, 4.0, -1.8, 10.0, 12)).unwrap();
        let outcome = OptimizationOrchestrator::default().run(&mut data).unwrap();
        let row = &outcome.results[0];
        let recomputed = round2(row.optimized_profit - row.current_profit);
        // Rounding is applied per column, so allow one cent of slack.
        assert!((row.profit_uplift_dol - recomputed).abs() <= 0.011);
    }
}
