//! Transaction records, dataset validation, and log-feature derivation.
//!
//! Purpose
//! -------
//! Define the in-memory transaction table the whole pipeline operates on:
//! validated [`TransactionRecord`] rows plus the derived `ln(1+x)` feature
//! columns used by the log-log regression.
//!
//! Key behaviors
//! -------------
//! - Validate every record at construction: positive finite prices and
//!   costs, non-negative finite quantities. Violations are dataset-level
//!   errors, not silent drops.
//! - Derive the three log columns (`ln(1+quantity)`, `ln(1+price)`,
//!   `ln(1+competitor_price)`) in one idempotent pass; re-running
//!   [`PricingData::feature_engineering`] reproduces identical columns.
//! - Group row indices by SKU in first-appearance order, so downstream
//!   iteration (and the final report) is deterministic.
//!
//! Invariants & assumptions
//! ------------------------
//! - Records are immutable once ingested; the feature frame is the only
//!   thing `feature_engineering` touches.
//! - The `ln(1+x)` convention tolerates zero quantities (common for
//!   slow-moving SKUs) without producing `-∞`; it is preserved exactly and
//!   deliberately not undone by the optimizer's demand reconstruction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation rejections, idempotence of the feature
//!   pass, zero-quantity handling, and SKU grouping order.
use chrono::NaiveDate;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::demand::errors::{DemandError, DemandResult};

/// One observed period for one SKU. Immutable after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub sku_id: u32,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub cost: f64,
    pub competitor_price: f64,
    pub quantity_sold: f64,
}

/// Derived `ln(1+x)` feature columns, parallel to the record vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    pub log_quantity: Array1<f64>,
    pub log_price: Array1<f64>,
    pub log_competitor_price: Array1<f64>,
}

/// The validated in-memory transaction table.
///
/// Owns the raw records and, after [`PricingData::feature_engineering`],
/// the derived log columns. Records are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingData {
    records: Vec<TransactionRecord>,
    features: Option<FeatureFrame>,
}

impl PricingData {
    /// Build a dataset from records, validating every row.
    ///
    /// # Errors
    /// - [`DemandError::EmptyDataset`] for an empty input.
    /// - [`DemandError::InvalidRecord`] naming the first offending row and
    ///   field: `price`, `cost`, and `competitor_price` must be finite and
    ///   > 0; `quantity_sold` must be finite and ≥ 0.
    pub fn new(records: Vec<TransactionRecord>) -> DemandResult<Self> {
        if records.is_empty() {
            return Err(DemandError::EmptyDataset);
        }
        for (index, rec) in records.iter().enumerate() {
            validate_positive(index, "price", rec.price)?;
            validate_positive(index, "cost", rec.cost)?;
            validate_positive(index, "competitor_price", rec.competitor_price)?;
            if !rec.quantity_sold.is_finite() || rec.quantity_sold < 0.0 {
                return Err(DemandError::InvalidRecord {
                    index,
                    field: "quantity_sold",
                    value: rec.quantity_sold,
                });
            }
        }
        Ok(Self { records, features: None })
    }

    /// The validated records, in ingestion order.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty (never true for a constructed dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the `ln(1+x)` feature columns.
    ///
    /// Idempotent: the columns are pure functions of the immutable records,
    /// so re-running replaces the frame with identical values.
    pub fn feature_engineering(&mut self) {
        let log_quantity =
            Array1::from_iter(self.records.iter().map(|r| r.quantity_sold.ln_1p()));
        let log_price = Array1::from_iter(self.records.iter().map(|r| r.price.ln_1p()));
        let log_competitor_price =
            Array1::from_iter(self.records.iter().map(|r| r.competitor_price.ln_1p()));
        self.features = Some(FeatureFrame { log_quantity, log_price, log_competitor_price });
    }

    /// The derived feature columns.
    ///
    /// # Errors
    /// [`DemandError::FeaturesNotComputed`] if
    /// [`PricingData::feature_engineering`] has not been run.
    pub fn features(&self) -> DemandResult<&FeatureFrame> {
        self.features.as_ref().ok_or(DemandError::FeaturesNotComputed)
    }

    /// Distinct SKU ids in first-appearance order, with each SKU's row
    /// indices.
    pub fn rows_by_sku(&self) -> (Vec<u32>, HashMap<u32, Vec<usize>>) {
        let mut order = Vec::new();
        let mut rows: HashMap<u32, Vec<usize>> = HashMap::new();
        for (idx, rec) in self.records.iter().enumerate() {
            rows.entry(rec.sku_id)
                .or_insert_with(|| {
                    order.push(rec.sku_id);
                    Vec::new()
                })
                .push(idx);
        }
        (order, rows)
    }
}

fn validate_positive(index: usize, field: &'static str, value: f64) -> DemandResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DemandError::InvalidRecord { index, field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku_id: u32, day: u32, price: f64, qty: f64) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            sku_id,
            product_name: format!("Product_{sku_id}"),
            category: "Coffee".to_string(),
            price,
            cost: price * 0.5,
            competitor_price: price * 1.1,
            quantity_sold: qty,
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(PricingData::new(vec![]), Err(DemandError::EmptyDataset)));
    }

    #[test]
    fn invalid_fields_name_the_offending_row() {
        let mut recs = vec![record(101, 1, 12.0, 40.0), record(101, 2, 12.5, 38.0)];
        recs[1].price = 0.0;
        assert!(matches!(
            PricingData::new(recs),
            Err(DemandError::InvalidRecord { index: 1, field: "price", .. })
        ));

        let mut recs = vec![record(101, 1, 12.0, 40.0)];
        recs[0].quantity_sold = -1.0;
        assert!(matches!(
            PricingData::new(recs),
            Err(DemandError::InvalidRecord { field: "quantity_sold", .. })
        ));
    }

    #[test]
    fn zero_quantity_is_valid_and_maps_to_zero_log() {
        let mut data = PricingData::new(vec![record(101, 1, 12.0, 0.0)]).unwrap();
        data.feature_engineering();
        assert_eq!(data.features().unwrap().log_quantity[0], 0.0);
    }

    #[test]
    fn feature_engineering_is_idempotent() {
        let recs = (1..=5).map(|d| record(101, d, 10.0 + d as f64, 30.0 + d as f64)).collect();
        let mut data = PricingData::new(recs).unwrap();
        data.feature_engineering();
        let first = data.features().unwrap().clone();
        data.feature_engineering();
        assert_eq!(&first, data.features().unwrap());
    }

    #[test]
    fn features_must_be_derived_before_use() {
        let data = PricingData::new(vec![record(101, 1, 12.0, 40.0)]).unwrap();
        assert!(matches!(data.features(), Err(DemandError::FeaturesNotComputed)));
    }

    #[test]
    fn sku_grouping_preserves_first_appearance_order() {
        let recs = vec![
            record(103, 1, 12.0, 40.0),
            record(101, 1, 8.0, 20.0),
            record(103, 2, 12.5, 39.0),
            record(102, 1, 6.0, 55.0),
        ];
        let data = PricingData::new(recs).unwrap();
        let (order, rows) = data.rows_by_sku();
        assert_eq!(order, vec![103, 101, 102]);
        assert_eq!(rows[&103], vec![0, 2]);
    }
}
