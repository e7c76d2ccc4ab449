//! Report rows emitted by the batch run.
//!
//! Purpose
//! -------
//! Define the serializable comparative row for one SKU: current vs optimal
//! price, profit uplift, and an optional advisory flag. Field names follow
//! the report's column headers, so serializing a row vector yields the
//! final table directly.
//!
//! Conventions
//! -----------
//! Money and elasticity round to 2 decimal places, percentages to 1. The
//! rounding is applied once, at row construction, never mid-computation.
use serde::Serialize;

/// Advisory flag attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationWarning {
    /// The fitted own-price elasticity was ≥ 0; the recommendation is the
    /// guardrail ceiling, not an interior optimum.
    NonNegativeElasticity,
    /// The search is pinned against a guardrail bound.
    PriceAtBound,
}

/// One SKU's comparative pricing recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    #[serde(rename = "SKU_ID")]
    pub sku_id: u32,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Current_Price")]
    pub current_price: f64,
    #[serde(rename = "Optimal_Price")]
    pub optimal_price: f64,
    #[serde(rename = "Price_Change_Pct")]
    pub price_change_pct: f64,
    #[serde(rename = "Elasticity")]
    pub elasticity: f64,
    #[serde(rename = "Current_Profit")]
    pub current_profit: f64,
    #[serde(rename = "Optimized_Profit")]
    pub optimized_profit: f64,
    #[serde(rename = "Profit_Uplift_Dol")]
    pub profit_uplift_dol: f64,
    #[serde(rename = "Warning", skip_serializing_if = "Option::is_none")]
    pub warning: Option<RecommendationWarning>,
}

/// Round to 2 decimal places (money, elasticity).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (percentages).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_conventions() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(-1.005), -1.0);
        assert_eq!(round1(7.25), 7.3);
        assert_eq!(round1(-3.14), -3.1);
    }

    #[test]
    fn rows_serialize_with_report_headers() {
        let row = OptimizationResult {
            sku_id: 101,
            product: "Product_101".to_string(),
            category: "Coffee".to_string(),
            current_price: 15.0,
            optimal_price: 18.5,
            price_change_pct: 23.3,
            elasticity: -1.5,
            current_profit: 42.0,
            optimized_profit: 50.25,
            profit_uplift_dol: 8.25,
            warning: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["SKU_ID"], 101);
        assert_eq!(json["Optimal_Price"], 18.5);
        assert_eq!(json["Profit_Uplift_Dol"], 8.25);
        assert!(json.get("Warning").is_none());
    }
}
