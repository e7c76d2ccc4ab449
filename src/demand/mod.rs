//! Demand estimation: datasets, log-log regression, and elasticity tables.
//!
//! Purpose
//! -------
//! Turn validated transaction records into per-SKU demand parameters. The
//! pipeline is: ingest and validate ([`data`]), derive `ln(1+x)` features,
//! fit `log_qty ~ 1 + log_price + log_comp_price` per SKU ([`regression`],
//! driven by [`model`]), and store the results in an insertion-ordered
//! [`table::ElasticityTable`]. A pairwise within-category matrix lives in
//! [`cross`].
//!
//! Error handling
//! --------------
//! Dataset-level problems (empty input, invalid rows, missing features)
//! surface as [`errors::DemandError`] immediately; per-SKU estimation
//! problems are collected as skip entries so the batch always completes.
pub mod cross;
pub mod data;
pub mod errors;
pub mod model;
pub mod regression;
pub mod table;

pub use cross::{cross_elasticity_matrix, CrossElasticityMatrix};
pub use data::{FeatureFrame, PricingData, TransactionRecord};
pub use errors::{DemandError, DemandResult};
pub use model::{DemandModel, FitOutcome, SkuFitFailure};
pub use regression::{fit_loglog, LogLogFit, MIN_OBS_PER_SKU};
pub use table::{ElasticityEstimate, ElasticityTable};
