//! Adapter that exposes a user `Objective` as an `argmin` problem.
//!
//! We convert a *maximization* of an objective `f(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -f(θ)` and the cost gradient as
//! `-∇f(θ)`. Objectives in this crate are smooth with cheap closed-form
//! derivatives (the profit slope chained through the box transform), so the
//! gradient is always analytic; it is validated for dimension and
//! finiteness on every call before the sign flip.
use crate::optimization::{
    errors::OptError,
    profit_optimizer::{
        traits::Objective,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges a user `Objective` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `-f(θ)` (negated objective).
/// - `Gradient::gradient` returns `-∇f(θ)` (negated analytic gradient).
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -f(θ)`.
    ///
    /// - Calls the user's `value(θ, data)` and checks the result is finite.
    /// - Returns `Error(NonFiniteCost)` if the value is not finite.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: Objective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the gradient of the cost at `θ`: validate the user's
    /// `∇f(θ)` (dimension, finiteness) and return its negation.
    ///
    /// # Errors
    /// - Propagates user errors from `grad`.
    /// - Returns validation errors if the gradient has the wrong dimension
    ///   or non-finite entries.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let g = self.f.grad(theta, self.data)?;
        validate_grad(&g, theta.len())?;
        Ok(-g)
    }
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `Objective` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use approx::assert_relative_eq;
    use ndarray::array;

    /// Concave quadratic with a known maximum at θ = 2.
    struct Quadratic;

    impl Objective for Quadratic {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            let x = theta[0];
            Ok(-(x - 2.0) * (x - 2.0))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(array![-2.0 * (theta[0] - 2.0)])
        }
    }

    /// Objective whose gradient has the wrong dimension.
    struct BadGradDim;

    impl Objective for BadGradDim {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta[0] * theta[0])
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(array![-2.0 * theta[0], 0.0])
        }
    }

    #[test]
    fn cost_is_negated_objective() {
        let adapter = ArgMinAdapter::new(&Quadratic, &());
        let cost = adapter.cost(&array![3.0]).unwrap();
        assert_relative_eq!(cost, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn analytic_gradient_is_sign_flipped() {
        let adapter = ArgMinAdapter::new(&Quadratic, &());
        let g = adapter.gradient(&array![3.0]).unwrap();
        // ∇f(3) = -2, so the cost gradient must be +2.
        assert_relative_eq!(g[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn gradient_matches_central_difference_of_cost() {
        let adapter = ArgMinAdapter::new(&Quadratic, &());
        for x in [-1.0, 0.5, 3.5] {
            let g = adapter.gradient(&array![x]).unwrap();
            let h = 1e-6;
            let fd = (adapter.cost(&array![x + h]).unwrap()
                - adapter.cost(&array![x - h]).unwrap())
                / (2.0 * h);
            assert_relative_eq!(g[0], fd, epsilon = 1e-5);
        }
    }

    #[test]
    fn mismatched_gradient_dimension_is_rejected() {
        let adapter = ArgMinAdapter::new(&BadGradDim, &());
        assert!(adapter.gradient(&array![1.0]).is_err());
    }
}
