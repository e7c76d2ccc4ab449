//! Numerical stability utilities.
//!
//! Provides safe implementations of the nonlinear transforms used to impose
//! the guardrail box constraint on the price search, in forms that avoid
//! overflow/underflow in naïve evaluation. The functions here follow guarded
//! strategies similar to those in major ML libraries, using explicit cutoffs
//! to keep `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: clamp margin keeping logistic arguments away from 0/1.
//! - [`safe_logistic(x)`]: stable `σ(x) = 1 / (1 + exp(-x))`.
//! - [`safe_logit(p)`]: stable inverse `ln(p / (1 - p))` on a clamped domain.
//! - [`BoxTransform`]: bijection between the unconstrained optimizer line and
//!   a bounded open interval `(lower, upper)`, with its Jacobian.
//!
//! # Rationale
//! The profit search runs in unconstrained space (the optimizer layer knows
//! nothing about bounds); the model layer maps `u ∈ ℝ` to a feasible price
//! `p ∈ (lower, upper)` through the logistic bijection. Seeds near or outside
//! the bounds are clamped by [`LOGIT_EPS`] so the inverse map stays finite.

/// Clamp margin for logistic/logit round trips.
///
/// Seeding the search at a price exactly on (or outside) a bound would map
/// to `±∞` in unconstrained space. Fractions fed to [`safe_logit`] are
/// clamped into `[LOGIT_EPS, 1 - LOGIT_EPS]` instead.
pub const LOGIT_EPS: f64 = 1e-6;

/// Numerically stable logistic function `σ(x) = 1 / (1 + exp(-x))`.
///
/// Evaluates the logistic without overflow for large `|x|` by branching on
/// the sign of `x` so that `exp` is only ever called on a non-positive
/// argument.
///
/// # Parameters
/// - `x`: real input.
///
/// # Returns
/// - `σ(x)` in `(0, 1)` (the open interval; saturation to exactly 0 or 1
///   can occur only through `f64` rounding at extreme `|x|`).
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        let e = (-x).exp();
        1.0 / (1.0 + e)
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Stable inverse of the logistic on `(0, 1)`: `logit(p) = ln(p / (1 - p))`.
///
/// The input is clamped into `[LOGIT_EPS, 1 - LOGIT_EPS]` before evaluation,
/// so callers may pass fractions at or slightly beyond the unit interval
/// (e.g., a seed price sitting outside the guardrail box) and still obtain a
/// finite unconstrained coordinate.
///
/// # Parameters
/// - `p`: a fraction, nominally in `(0, 1)`.
///
/// # Returns
/// - `t` such that `safe_logistic(t) ≈ clamp(p)`.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    (p / (1.0 - p)).ln()
}

/// Bijection between the unconstrained optimizer line and a bounded price
/// interval.
///
/// Maps `u ∈ ℝ` to `price(u) = lower + (upper - lower) · σ(u)`, which covers
/// the open interval `(lower, upper)`. The inverse map ([`BoxTransform::to_unconstrained`])
/// clamps its argument so that seeds on or outside the bounds remain finite.
///
/// # Invariants
/// - `lower < upper`, both finite; enforced by the caller
///   (`PriceBounds::from_cost`), not re-checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxTransform {
    pub lower: f64,
    pub upper: f64,
}

impl BoxTransform {
    /// Build a transform over `(lower, upper)`.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Map an unconstrained coordinate to a price inside the box.
    pub fn to_price(&self, u: f64) -> f64 {
        self.lower + (self.upper - self.lower) * safe_logistic(u)
    }

    /// Map a price to its unconstrained coordinate, clamping prices at or
    /// beyond the bounds into the interior first.
    pub fn to_unconstrained(&self, price: f64) -> f64 {
        let frac = (price - self.lower) / (self.upper - self.lower);
        safe_logit(frac)
    }

    /// Jacobian `d price / d u` at `u`: `(upper - lower) · σ(u) · (1 - σ(u))`.
    ///
    /// Used to chain analytic profit gradients from price space into the
    /// unconstrained search space.
    pub fn jacobian(&self, u: f64) -> f64 {
        let s = safe_logistic(u);
        (self.upper - self.lower) * s * (1.0 - s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn logistic_saturates_without_overflow() {
        assert_relative_eq!(safe_logistic(0.0), 0.5, epsilon = 1e-12);
        assert!(safe_logistic(800.0) <= 1.0);
        assert!(safe_logistic(-800.0) >= 0.0);
        assert!(safe_logistic(800.0).is_finite());
        assert!(safe_logistic(-800.0).is_finite());
    }

    #[test]
    fn logit_round_trips_interior_fractions() {
        for p in [0.01, 0.25, 0.5, 0.75, 0.99] {
            assert_relative_eq!(safe_logistic(safe_logit(p)), p, epsilon = 1e-9);
        }
    }

    #[test]
    fn logit_clamps_out_of_range_inputs() {
        assert!(safe_logit(0.0).is_finite());
        assert!(safe_logit(1.0).is_finite());
        assert!(safe_logit(-2.5).is_finite());
        assert!(safe_logit(7.0).is_finite());
    }

    #[test]
    fn box_transform_round_trips_and_stays_inside() {
        let bt = BoxTransform::new(10.5, 30.0);
        for price in [10.6, 15.0, 22.5, 29.9] {
            let u = bt.to_unconstrained(price);
            assert_relative_eq!(bt.to_price(u), price, epsilon = 1e-6);
        }
        // Seeds outside the box map to finite coordinates strictly inside.
        let u = bt.to_unconstrained(50.0);
        let p = bt.to_price(u);
        assert!(p > 10.5 && p < 30.0);
    }

    #[test]
    fn jacobian_matches_finite_difference() {
        let bt = BoxTransform::new(10.5, 30.0);
        let u = 0.37;
        let h = 1e-6;
        let fd = (bt.to_price(u + h) - bt.to_price(u - h)) / (2.0 * h);
        assert_relative_eq!(bt.jacobian(u), fd, epsilon = 1e-6);
    }
}
