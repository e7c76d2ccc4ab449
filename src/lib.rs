//! retail_pricing — per-SKU price-elasticity estimation and guardrailed
//! profit-maximizing price search.
//!
//! Purpose
//! -------
//! Estimate own- and cross-price elasticity per SKU from historical
//! transaction data via log-log OLS regression, then find the price inside
//! business guardrail bounds that maximizes the elasticity-implied profit.
//! The crate is a batch library: callers hand it an in-memory transaction
//! table and receive one comparative current-vs-optimal result row per SKU
//! plus an explicit ledger of skipped SKUs.
//!
//! Key behaviors
//! -------------
//! - Derive `ln(1+x)` features once, idempotently, over the whole dataset
//!   (`demand::data`).
//! - Fit, per SKU, OLS of log quantity on own and competitor log price with
//!   an intercept, producing an insertion-ordered
//!   [`ElasticityTable`] (`demand::model`).
//! - Maximize `(price − cost) · exp(intercept + elasticity·ln price)` over
//!   `[cost·1.05, cost·3.0]` with an L-BFGS search through a logistic box
//!   transform (`pricing`, `optimization`).
//! - Join estimates with the latest observed cost/price per SKU and emit
//!   rounded [`OptimizationResult`] rows (`orchestrator`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Per-SKU regressions and searches are independent; no shared mutable
//!   state crosses SKU boundaries and the batch never aborts on a per-SKU
//!   failure.
//! - All numerical work uses `f64`; non-finite intermediate values are
//!   surfaced as typed errors, never panics.
//! - Demand reconstruction in the optimizer deliberately uses plain
//!   `exp`/`ln` against a fit performed on `ln(1+x)` features; this
//!   asymmetry is part of the reference behavior and is preserved.
//!
//! Conventions
//! -----------
//! - Errors are per-module enums with manual `Display` impls and `*Result`
//!   aliases; cross-module flows convert via `From`.
//! - The optimizer layer always *maximizes* an objective `f(θ)` by
//!   minimizing the cost `c(θ) = -f(θ)` internally.
//! - Skipped SKUs are reported through [`BatchOutcome::skipped`] and logged
//!   at WARN; results preserve ElasticityTable insertion order.
//!
//! Downstream usage
//! ----------------
//! - Build a [`PricingData`] from validated [`TransactionRecord`]s, run
//!   [`DemandModel::fit_own_elasticity`], then
//!   [`OptimizationOrchestrator::run`].
//! - Result rows derive `serde::Serialize`; exporting them (CSV, reports)
//!   is the caller's concern.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; the end-to-end pipeline is covered
//!   by `tests/integration_pricing_pipeline.rs` on synthetic series with
//!   known ground-truth elasticities.

pub mod demand;
pub mod optimization;
pub mod orchestrator;
pub mod pricing;

pub use crate::demand::{
    data::{PricingData, TransactionRecord},
    model::DemandModel,
    table::{ElasticityEstimate, ElasticityTable},
};
pub use crate::orchestrator::{
    BatchOutcome, OptimizationOrchestrator, report::OptimizationResult,
};
pub use crate::pricing::{bounds::PriceBounds, optimizer::PriceOptimizer};
