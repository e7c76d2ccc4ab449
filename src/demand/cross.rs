//! Pairwise cross-price elasticity matrix within a category.
//!
//! Purpose
//! -------
//! Estimate, for every ordered product pair in one category, the simple
//! regression slope of the target's `ln(1+quantity)` on the driver's
//! `ln(1+price)` over date-aligned observations.
//!
//! Key behaviors
//! -------------
//! - Observations are aligned by date; when a product has several rows on
//!   the same date the last one in ingestion order wins.
//! - A pair that cannot be estimated (too few shared dates, or a constant
//!   driver price) contributes `0.0` rather than failing the matrix.
//! - Diagonal cells are `NaN`: a product's own-price effect belongs to the
//!   full log-log fit, not this matrix.
//!
//! Conventions
//! -----------
//! Row = target product (quantity side), column = driver product (price
//! side). Products appear in first-appearance order within the category.
use ndarray::Array2;
use std::collections::HashMap;

use crate::demand::data::PricingData;
use crate::demand::errors::{DemandError, DemandResult};

/// Shared dates a pair needs before a slope is attempted.
const MIN_SHARED_DATES: usize = 3;

/// Cross-price slope matrix for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossElasticityMatrix {
    /// Product names, first-appearance order; indexes both axes.
    pub products: Vec<String>,
    /// `values[[i, j]]` is the response of product `i`'s quantity to
    /// product `j`'s price. Diagonal is `NaN`.
    pub values: Array2<f64>,
}

/// Build the pairwise matrix for `category`.
///
/// # Errors
/// [`DemandError::UnknownCategory`] when no record carries the category.
pub fn cross_elasticity_matrix(
    data: &PricingData,
    category: &str,
) -> DemandResult<CrossElasticityMatrix> {
    // Per product: date -> (ln1p price, ln1p quantity), later rows winning.
    let mut products: Vec<String> = Vec::new();
    let mut series: HashMap<String, HashMap<chrono::NaiveDate, (f64, f64)>> = HashMap::new();
    for rec in data.records().iter().filter(|r| r.category == category) {
        series
            .entry(rec.product_name.clone())
            .or_insert_with(|| {
                products.push(rec.product_name.clone());
                HashMap::new()
            })
            .insert(rec.date, (rec.price.ln_1p(), rec.quantity_sold.ln_1p()));
    }
    if products.is_empty() {
        return Err(DemandError::UnknownCategory { name: category.to_string() });
    }

    let k = products.len();
    let mut values = Array2::from_elem((k, k), 0.0);
    for (i, target) in products.iter().enumerate() {
        for (j, driver) in products.iter().enumerate() {
            if i == j {
                values[[i, j]] = f64::NAN;
                continue;
            }
            values[[i, j]] =
                pair_slope(&series[target], &series[driver]).unwrap_or(0.0);
        }
    }

    Ok(CrossElasticityMatrix { products, values })
}

/// Simple OLS slope of the target's log quantity on the driver's log price
/// over their shared dates. `None` when the pair is not estimable.
fn pair_slope(
    target: &HashMap<chrono::NaiveDate, (f64, f64)>,
    driver: &HashMap<chrono::NaiveDate, (f64, f64)>,
) -> Option<f64> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (date, &(_, qty)) in target {
        if let Some(&(price, _)) = driver.get(date) {
            xs.push(price);
            ys.push(qty);
        }
    }
    if xs.len() < MIN_SHARED_DATES {
        return None;
    }
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;
    let sxx: f64 = xs.iter().map(|x| (x - x_mean).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = xs.iter().zip(&ys).map(|(x, y)| (x - x_mean) * (y - y_mean)).sum();
    let slope = sxy / sxx;
    slope.is_finite().then_some(slope)
}
