//! Insertion-ordered store of per-SKU elasticity estimates.
//!
//! Purpose
//! -------
//! Hold the successfully fitted [`ElasticityEstimate`] rows in
//! first-appearance SKU order while still supporting O(1) lookup by id, so
//! the downstream report comes out in a stable, data-driven order.
use serde::Serialize;
use std::collections::HashMap;

/// One successfully fitted SKU's demand parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElasticityEstimate {
    pub sku_id: u32,
    pub own_elasticity: f64,
    pub cross_elasticity: f64,
    pub intercept: f64,
    /// Regression `R²`.
    pub fit_quality: f64,
    pub own_elasticity_se: f64,
    pub own_elasticity_p: f64,
    pub n_obs: usize,
}

/// Estimates keyed by SKU, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElasticityTable {
    estimates: Vec<ElasticityEstimate>,
    index: HashMap<u32, usize>,
}

impl ElasticityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the estimate for a SKU. A replace keeps the SKU's
    /// original position.
    pub fn insert(&mut self, estimate: ElasticityEstimate) {
        match self.index.get(&estimate.sku_id) {
            Some(&pos) => self.estimates[pos] = estimate,
            None => {
                self.index.insert(estimate.sku_id, self.estimates.len());
                self.estimates.push(estimate);
            }
        }
    }

    pub fn get(&self, sku_id: u32) -> Option<&ElasticityEstimate> {
        self.index.get(&sku_id).map(|&pos| &self.estimates[pos])
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ElasticityEstimate> {
        self.estimates.iter()
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(sku_id: u32, e: f64) -> ElasticityEstimate {
        ElasticityEstimate {
            sku_id,
            own_elasticity: e,
            cross_elasticity: 0.3,
            intercept: 4.0,
            fit_quality: 0.9,
            own_elasticity_se: 0.1,
            own_elasticity_p: 0.001,
            n_obs: 30,
        }
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut table = ElasticityTable::new();
        table.insert(estimate(103, -1.2));
        table.insert(estimate(101, -0.8));
        table.insert(estimate(102, -2.0));
        let order: Vec<u32> = table.iter().map(|e| e.sku_id).collect();
        assert_eq!(order, vec![103, 101, 102]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut table = ElasticityTable::new();
        table.insert(estimate(103, -1.2));
        table.insert(estimate(101, -0.8));
        table.insert(estimate(103, -1.9));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(103).unwrap().own_elasticity, -1.9);
        let order: Vec<u32> = table.iter().map(|e| e.sku_id).collect();
        assert_eq!(order, vec![103, 101]);
    }

    #[test]
    fn missing_sku_is_none() {
        let table = ElasticityTable::new();
        assert!(table.get(999).is_none());
        assert!(table.is_empty());
    }
}
