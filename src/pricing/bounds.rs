//! Guardrail price bounds derived from unit cost.
//!
//! The feasible search interval is `[cost · MIN_MARKUP, cost · MAX_MARKUP]`:
//! prices below a minimum markup or above an unrealistic multiple of cost are
//! never recommended, regardless of what the fitted demand curve implies. The
//! current observed price plays no role here; it only seeds the search.

use crate::pricing::errors::{PricingError, PricingResult};

/// Minimum markup multiplier: the lower bound is `cost * 1.05`.
pub const MIN_MARKUP: f64 = 1.05;

/// Maximum markup multiplier: the upper bound is `cost * 3.0`.
pub const MAX_MARKUP: f64 = 3.0;

/// Feasible price interval `[lower, upper]` for one SKU.
///
/// # Invariants
/// - `0 < lower < upper`, both finite — guaranteed by [`PriceBounds::from_cost`],
///   the only constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub lower: f64,
    pub upper: f64,
}

impl PriceBounds {
    /// Derive guardrail bounds from a unit cost.
    ///
    /// # Errors
    /// - [`PricingError::InvalidCost`] if `cost` is non-finite or ≤ 0. A zero
    ///   cost must never silently produce the degenerate box `[0, 0]`.
    /// - [`PricingError::DegenerateBounds`] if the derived interval is not
    ///   strictly ordered (unreachable for valid costs, kept as a guard on
    ///   the markup constants).
    pub fn from_cost(cost: f64) -> PricingResult<Self> {
        if !cost.is_finite() || cost <= 0.0 {
            return Err(PricingError::InvalidCost { value: cost });
        }
        let lower = cost * MIN_MARKUP;
        let upper = cost * MAX_MARKUP;
        if upper <= lower {
            return Err(PricingError::DegenerateBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Whether `price` lies inside the closed interval.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower && price <= self.upper
    }

    /// Interval width `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
