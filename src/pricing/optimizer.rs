//! Bounded profit-maximizing price search for one SKU.
//!
//! [`PriceOptimizer`] runs the crate's L-BFGS maximizer over a
//! [`ProfitModel`], seeded at the SKU's current observed price and confined
//! to the guardrail box through the logistic transform. After the solver
//! returns, the candidate is compared against both interval endpoints, so
//! the reported optimum always satisfies boundary dominance up to a float
//! tie tolerance: a bound is returned only when it strictly beats the
//! interior candidate, and a tie resolves to the strictly interior price
//! (an unconstrained optimum sitting exactly on a guardrail yields an
//! interior price whose profit matches the bound's to machine precision).
use crate::{
    optimization::profit_optimizer::{SearchOptions, maximize},
    pricing::{
        errors::{PricingError, PricingResult},
        profit::ProfitModel,
    },
};
use ndarray::array;

/// Relative slack when comparing an unconverged interior candidate against
/// the best boundary profit.
const BOUNDARY_SLACK: f64 = 1e-6;

/// Relative profit margin a bound must win by before it displaces the
/// interior candidate. Sized well above the profit gap left by the
/// gradient tolerance, so a guardrail-touching optimum stays interior.
const BOUNDARY_TIE: f64 = 1e-8;

/// Fraction of the box width the interior candidate is inset from each
/// bound, so a saturated transform never reports a bound as interior.
const INTERIOR_INSET: f64 = 1e-12;

/// Outcome of one bounded price search.
///
/// - `optimal_price`: finite, inside the closed guardrail interval, and
///   strictly inside it unless a bound strictly dominated the search.
/// - `optimal_profit`: finite, within the tie tolerance of the best
///   boundary profit or better.
/// - `at_bound`: the best guardrail profit ties or beats the
///   recommendation, so the search is effectively pinned there; typical for
///   non-negative elasticity estimates, which push the price to the
///   ceiling.
/// - `converged`: the solver reported a terminating status (an unconverged
///   run can still yield a valid solution if it dominates the boundaries).
/// - `iterations`: L-BFGS iterations performed.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSolution {
    pub optimal_price: f64,
    pub optimal_profit: f64,
    pub at_bound: bool,
    pub converged: bool,
    pub iterations: usize,
}

/// Bounded local maximizer for elasticity-implied profit.
///
/// Stateless apart from the search configuration; one instance is reused
/// across all SKUs in a batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceOptimizer {
    pub opts: SearchOptions,
}

impl PriceOptimizer {
    /// Build an optimizer with explicit search options.
    pub fn new(opts: SearchOptions) -> Self {
        Self { opts }
    }

    /// Find the price in the guardrail box maximizing predicted profit.
    ///
    /// # Behavior
    /// 1. Validates the seed and maps `current_price` into unconstrained
    ///    space (prices outside the box seed just inside the nearer bound;
    ///    the observed price is only a starting point, never a constraint).
    /// 2. Runs L-BFGS through the model's box transform.
    /// 3. Clamps the solution strictly inside the interval and evaluates
    ///    the profit at the candidate and at both bounds; a bound is
    ///    returned only when it strictly beats the candidate, otherwise the
    ///    interior candidate wins. An unconverged run whose candidate is
    ///    materially worse than the best boundary is reported as a
    ///    convergence failure rather than silently accepted.
    ///
    /// # Errors
    /// - [`PricingError::NonFiniteParameter`] for a non-finite seed.
    /// - [`PricingError::ConvergenceFailure`] if the solver errors out or an
    ///   unconverged run cannot match the boundary profit.
    /// - [`PricingError::NonFiniteProfit`] if the best candidate's profit is
    ///   not finite.
    pub fn optimize(
        &self, model: &ProfitModel, current_price: f64,
    ) -> PricingResult<PriceSolution> {
        if !current_price.is_finite() {
            return Err(PricingError::NonFiniteParameter {
                name: "current_price",
                value: current_price,
            });
        }
        let transform = model.transform();
        let u0 = transform.to_unconstrained(current_price);

        let outcome = maximize(model, array![u0], &(), &self.opts).map_err(PricingError::from)?;

        let inset = INTERIOR_INSET * model.bounds.width();
        let interior_price = transform
            .to_price(outcome.theta_hat[0])
            .clamp(model.bounds.lower + inset, model.bounds.upper - inset);
        let interior_profit = model.profit(interior_price);
        let lower_profit = model.profit(model.bounds.lower);
        let upper_profit = model.profit(model.bounds.upper);
        let (boundary_price, boundary_profit) = if lower_profit >= upper_profit {
            (model.bounds.lower, lower_profit)
        } else {
            (model.bounds.upper, upper_profit)
        };

        if !outcome.converged {
            let slack = BOUNDARY_SLACK * boundary_profit.abs().max(1.0);
            if interior_profit + slack < boundary_profit {
                return Err(PricingError::ConvergenceFailure {
                    detail: format!(
                        "search stopped ({}) below boundary profit: {interior_profit} < {boundary_profit}",
                        outcome.status
                    ),
                });
            }
        }

        // A bound wins only by a strict margin; ties keep the interior
        // candidate so a guardrail-touching optimum is reported strictly
        // inside the box.
        let tie = BOUNDARY_TIE * interior_profit.abs().max(boundary_profit.abs());
        let (optimal_price, optimal_profit) = if boundary_profit > interior_profit + tie {
            (boundary_price, boundary_profit)
        } else {
            (interior_price, interior_profit)
        };

        if !optimal_profit.is_finite() {
            return Err(PricingError::NonFiniteProfit {
                price: optimal_price,
                value: optimal_profit,
            });
        }

        // Bound-pinned means no interior profit strictly separates the
        // recommendation from the best guardrail.
        let at_bound = boundary_profit >= optimal_profit - tie;

        Ok(PriceSolution {
            optimal_price,
            optimal_profit,
            at_bound,
            converged: outcome.converged,
            iterations: outcome.iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::bounds::PriceBounds;
    use approx::assert_relative_eq;

    fn model(intercept: f64, elasticity: f64, cost: f64) -> ProfitModel {
        let bounds = PriceBounds::from_cost(cost).unwrap();
        ProfitModel::new(intercept, elasticity, cost, bounds).unwrap()
    }

    #[test]
    fn interior_optimum_is_found_for_elastic_demand() {
        // For demand exp(a + e·ln p) the unconstrained optimum is
        // p* = cost · e / (1 + e); with e = -3, cost = 10 that is 15.0,
        // comfortably inside [10.5, 30].
        let m = model(6.0, -3.0, 10.0);
        let sol = PriceOptimizer::default().optimize(&m, 12.0).unwrap();
        assert_relative_eq!(sol.optimal_price, 15.0, epsilon = 1e-3);
        assert!(!sol.at_bound, "interior optimum must not be flagged as bound-pinned");
        assert!(sol.converged);
    }

    #[test]
    fn boundary_dominance_holds_within_tie_tolerance() {
        for (e, cost, seed) in [(-1.5, 10.0, 15.0), (-3.0, 10.0, 12.0), (-0.8, 5.0, 6.0)] {
            let m = model(4.0, e, cost);
            let sol = PriceOptimizer::default().optimize(&m, seed).unwrap();
            let slack = 1e-7 * sol.optimal_profit.abs().max(1.0);
            assert!(sol.optimal_profit >= m.profit(m.bounds.lower) - slack);
            assert!(sol.optimal_profit >= m.profit(m.bounds.upper) - slack);
            assert!(m.bounds.contains(sol.optimal_price));
        }
    }

    #[test]
    fn guardrail_touching_optimum_stays_strictly_interior() {
        // e = -1.5 with cost 10 puts the unconstrained optimum exactly at
        // the 3x ceiling; the reported price must land strictly inside the
        // guardrails with a profit matching the ceiling's to float
        // precision.
        let m = model(4.0, -1.5, 10.0);
        let sol = PriceOptimizer::default().optimize(&m, 15.0).unwrap();
        assert!(sol.optimal_price > 10.5, "price {} not above the floor", sol.optimal_price);
        assert!(sol.optimal_price < 30.0, "price {} not below the ceiling", sol.optimal_price);
        assert!(sol.at_bound, "a guardrail-touching optimum should still be flagged");
        let ceiling_profit = m.profit(30.0);
        assert!(sol.optimal_profit >= ceiling_profit - 1e-7 * ceiling_profit.abs());
    }

    #[test]
    fn strictly_dominating_bound_is_returned_exactly() {
        // e = -30 pushes the unconstrained optimum far below the floor, so
        // the floor strictly beats any interior candidate and is returned
        // as the exact bound.
        let m = model(4.0, -30.0, 10.0);
        let sol = PriceOptimizer::default().optimize(&m, 15.0).unwrap();
        assert_eq!(sol.optimal_price, m.bounds.lower);
        assert!(sol.at_bound);
    }

    #[test]
    fn inelastic_demand_is_pushed_to_the_ceiling() {
        // |e| < 1 makes profit strictly increasing over the box.
        let m = model(4.0, -0.5, 10.0);
        let sol = PriceOptimizer::default().optimize(&m, 15.0).unwrap();
        assert_relative_eq!(sol.optimal_price, 30.0, epsilon = 1e-4);
        assert!(sol.at_bound);
    }

    #[test]
    fn non_negative_elasticity_survives_and_hits_the_ceiling() {
        let m = model(2.0, 0.4, 10.0);
        let sol = PriceOptimizer::default().optimize(&m, 15.0).unwrap();
        assert_relative_eq!(sol.optimal_price, 30.0, epsilon = 1e-4);
        assert!(sol.at_bound);
        assert!(sol.optimal_profit.is_finite());
    }

    #[test]
    fn out_of_box_seed_is_only_a_starting_point() {
        let m = model(6.0, -3.0, 10.0);
        // Seed far above the ceiling; the optimum is still the interior 15.0.
        let sol = PriceOptimizer::default().optimize(&m, 95.0).unwrap();
        assert_relative_eq!(sol.optimal_price, 15.0, epsilon = 1e-3);
    }

    #[test]
    fn non_finite_seed_is_rejected() {
        let m = model(4.0, -1.5, 10.0);
        assert!(matches!(
            PriceOptimizer::default().optimize(&m, f64::NAN),
            Err(PricingError::NonFiniteParameter { name: "current_price", .. })
        ));
    }
}
