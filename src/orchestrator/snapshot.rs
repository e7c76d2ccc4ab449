//! Latest-observation snapshots per SKU.
//!
//! Purpose
//! -------
//! Reduce the transaction table to one row per SKU, the most recent by
//! date, carrying the fields the optimizer and report need. Ties on the
//! same date resolve to the later row in ingestion order.
use std::collections::HashMap;

use crate::demand::PricingData;
use chrono::NaiveDate;

/// The most recent observed state of one SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestObservation {
    pub date: NaiveDate,
    pub price: f64,
    pub cost: f64,
    pub product_name: String,
    pub category: String,
}

/// Build the per-SKU latest snapshot in one pass over the records.
pub fn build_latest_snapshot(data: &PricingData) -> HashMap<u32, LatestObservation> {
    let mut latest: HashMap<u32, LatestObservation> = HashMap::new();
    for rec in data.records() {
        let candidate = LatestObservation {
            date: rec.date,
            price: rec.price,
            cost: rec.cost,
            product_name: rec.product_name.clone(),
            category: rec.category.clone(),
        };
        match latest.get(&rec.sku_id) {
            // `>=` so a later row on the same date replaces the earlier one.
            Some(existing) if candidate.date >= existing.date => {
                latest.insert(rec.sku_id, candidate);
            }
            Some(_) => {}
            None => {
                latest.insert(rec.sku_id, candidate);
            }
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::TransactionRecord;

    fn record(sku_id: u32, day: u32, price: f64) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            sku_id,
            product_name: format!("Product_{sku_id}"),
            category: "Snacks".to_string(),
            price,
            cost: price * 0.5,
            competitor_price: price * 1.1,
            quantity_sold: 10.0,
        }
    }

    #[test]
    fn latest_date_wins_regardless_of_row_order() {
        let data = PricingData::new(vec![
            record(101, 5, 12.0),
            record(101, 9, 13.5),
            record(101, 2, 11.0),
        ])
        .unwrap();
        let snap = build_latest_snapshot(&data);
        assert_eq!(snap[&101].price, 13.5);
        assert_eq!(snap[&101].date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn same_date_resolves_to_the_later_row() {
        let data = PricingData::new(vec![record(101, 5, 12.0), record(101, 5, 12.75)]).unwrap();
        let snap = build_latest_snapshot(&data);
        assert_eq!(snap[&101].price, 12.75);
    }

    #[test]
    fn one_entry_per_sku() {
        let data = PricingData::new(vec![
            record(101, 1, 12.0),
            record(102, 1, 6.0),
            record(101, 2, 12.5),
        ])
        .unwrap();
        let snap = build_latest_snapshot(&data);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[&102].price, 6.0);
    }
}
