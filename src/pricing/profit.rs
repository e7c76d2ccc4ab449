//! Elasticity-implied demand and profit objective.
//!
//! This module wires one SKU's fitted log-log parameters to the
//! [`Objective`] trait. The demand curve is the inverse of the log-log fit,
//! `demand(p) = exp(intercept + elasticity · ln(p))`, and the objective is
//! `profit(p) = (p - cost) · demand(p)` maximized over the guardrail box.
//!
//! Key ideas:
//! - The search parameter lives in unconstrained space: the single optimizer
//!   coordinate `u` maps to a feasible price through the logistic
//!   [`BoxTransform`], so the L-BFGS layer never sees the bounds.
//! - The gradient is analytic: `dπ/dp = demand(p) · (1 + elasticity·(p - cost)/p)`
//!   chained through the transform Jacobian `dp/du`.
//! - Demand reconstruction uses plain `exp`/`ln` even though the regression
//!   was fit on `ln(1+x)` features. This asymmetry is the reference behavior
//!   and is preserved as-is; "fixing" it would shift every profit estimate,
//!   most visibly for low-volume SKUs.
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        numerical_stability::BoxTransform,
        profit_optimizer::{Cost, Grad, Objective, Theta},
    },
    pricing::{
        bounds::PriceBounds,
        errors::{PricingError, PricingResult},
    },
};
use ndarray::array;

/// Sentinel objective value for infeasible price evaluations (`price ≤ 0`).
///
/// Large and negative so any feasible price dominates it; never produced for
/// prices reached through the box transform, whose range is strictly
/// positive.
pub const INFEASIBLE_PROFIT: f64 = -1e9;

/// One SKU's profit objective over the guardrail price box.
///
/// Holds the fitted demand parameters, the unit cost, and the box transform
/// derived from the guardrail bounds. Implements [`Objective`] so it plugs
/// directly into the crate's L-BFGS maximizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitModel {
    /// Intercept of the log-log demand fit.
    pub intercept: f64,
    /// Own-price elasticity (coefficient on log own price).
    pub elasticity: f64,
    /// Unit cost.
    pub cost: f64,
    /// Guardrail bounds the search is confined to.
    pub bounds: PriceBounds,
    /// Bijection between the optimizer line and the price box.
    transform: BoxTransform,
}

impl ProfitModel {
    /// Build a profit model from fitted parameters, cost, and bounds.
    ///
    /// # Errors
    /// - [`PricingError::NonFiniteParameter`] if `intercept` or `elasticity`
    ///   is NaN or infinite. The sign of `elasticity` is deliberately not
    ///   checked: a non-negative estimate is a model misfit the search must
    ///   survive (it pushes the price to the ceiling), not an input error.
    pub fn new(
        intercept: f64, elasticity: f64, cost: f64, bounds: PriceBounds,
    ) -> PricingResult<Self> {
        if !intercept.is_finite() {
            return Err(PricingError::NonFiniteParameter { name: "intercept", value: intercept });
        }
        if !elasticity.is_finite() {
            return Err(PricingError::NonFiniteParameter {
                name: "elasticity",
                value: elasticity,
            });
        }
        let transform = BoxTransform::new(bounds.lower, bounds.upper);
        Ok(Self { intercept, elasticity, cost, bounds, transform })
    }

    /// Predicted demand at `price`: `exp(intercept + elasticity · ln(price))`.
    ///
    /// Callers must pass `price > 0`; the profit wrapper guards the
    /// non-positive case before ever taking a log.
    pub fn demand(&self, price: f64) -> f64 {
        (self.intercept + self.elasticity * price.ln()).exp()
    }

    /// Predicted profit at `price`: `(price - cost) · demand(price)`.
    ///
    /// Evaluations at `price ≤ 0` return [`INFEASIBLE_PROFIT`] instead of
    /// evaluating `ln` outside its domain.
    pub fn profit(&self, price: f64) -> f64 {
        if price <= 0.0 {
            return INFEASIBLE_PROFIT;
        }
        (price - self.cost) * self.demand(price)
    }

    /// The box transform between optimizer space and the price interval.
    pub fn transform(&self) -> BoxTransform {
        self.transform
    }

    /// Derivative of profit with respect to price:
    /// `demand(p) · (1 + elasticity · (p - cost) / p)`.
    fn profit_price_derivative(&self, price: f64) -> f64 {
        self.demand(price) * (1.0 + self.elasticity * (price - self.cost) / price)
    }
}

impl Objective for ProfitModel {
    type Data = ();

    /// Profit at the price corresponding to the unconstrained coordinate.
    fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
        let price = self.transform.to_price(theta[0]);
        Ok(self.profit(price))
    }

    /// Validate the one-dimensional unconstrained coordinate.
    fn check(&self, theta: &Theta, _data: &()) -> OptResult<()> {
        if theta.len() != 1 {
            return Err(OptError::GradientDimMismatch { expected: 1, found: theta.len() });
        }
        if !theta[0].is_finite() {
            return Err(OptError::InvalidThetaHat {
                index: 0,
                value: theta[0],
                reason: "Search seed must be finite.",
            });
        }
        Ok(())
    }

    /// Analytic gradient `dπ/du = dπ/dp · dp/du`.
    fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
        let u = theta[0];
        let price = self.transform.to_price(u);
        let dpi_dp = self.profit_price_derivative(price);
        Ok(array![dpi_dp * self.transform.jacobian(u)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::profit_optimizer::adapter::ArgMinAdapter;
    use approx::assert_relative_eq;
    use argmin::core::Gradient;
    use ndarray::array;

    fn model(intercept: f64, elasticity: f64, cost: f64) -> ProfitModel {
        let bounds = PriceBounds::from_cost(cost).unwrap();
        ProfitModel::new(intercept, elasticity, cost, bounds).unwrap()
    }

    #[test]
    fn demand_is_monotone_decreasing_for_negative_elasticity() {
        let m = model(4.0, -1.5, 10.0);
        let mut last = f64::INFINITY;
        for price in [11.0, 14.0, 18.0, 25.0, 29.0] {
            let d = m.demand(price);
            assert!(d < last, "demand must fall as price rises");
            last = d;
        }
    }

    #[test]
    fn profit_guards_non_positive_prices() {
        let m = model(4.0, -1.5, 10.0);
        assert_relative_eq!(m.profit(0.0), INFEASIBLE_PROFIT);
        assert_relative_eq!(m.profit(-5.0), INFEASIBLE_PROFIT);
        assert!(m.profit(15.0).is_finite());
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let bounds = PriceBounds::from_cost(10.0).unwrap();
        assert!(matches!(
            ProfitModel::new(f64::NAN, -1.5, 10.0, bounds),
            Err(PricingError::NonFiniteParameter { name: "intercept", .. })
        ));
        assert!(matches!(
            ProfitModel::new(4.0, f64::INFINITY, 10.0, bounds),
            Err(PricingError::NonFiniteParameter { name: "elasticity", .. })
        ));
    }

    #[test]
    fn non_negative_elasticity_is_accepted() {
        let bounds = PriceBounds::from_cost(10.0).unwrap();
        assert!(ProfitModel::new(4.0, 0.7, 10.0, bounds).is_ok());
    }

    #[test]
    fn analytic_gradient_matches_finite_difference() {
        let m = model(4.0, -2.2, 8.0);
        let adapter = ArgMinAdapter::new(&m, &());
        for u in [-1.5, -0.2, 0.0, 0.8, 2.0] {
            let theta = array![u];
            let analytic = adapter.gradient(&theta).unwrap()[0];
            let h = 1e-6;
            let fd = (m.profit(m.transform().to_price(u + h))
                - m.profit(m.transform().to_price(u - h)))
                / (2.0 * h);
            // adapter returns the cost gradient, i.e. the negated profit slope
            assert_relative_eq!(analytic, -fd, epsilon = 1e-4, max_relative = 1e-4);
        }
    }
}
