//! High-level entry point for maximizing a user-provided `Objective`.
//!
//! This selects an L-BFGS solver with either Hager–Zhang or More–Thuente line
//! search, wraps the model in an `ArgMinAdapter` (which *minimizes* `-f(θ)`),
//! and delegates the run to `run_lbfgs`.
use crate::optimization::{
    errors::OptResult,
    profit_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{LineSearcher, Objective, SearchOptions},
    },
};

/// Maximize an objective `f(θ)` using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` that exposes a *minimization*
///   problem `c(θ) = -f(θ)` to `argmin`.
/// - Builds an L-BFGS solver with either **Hager–Zhang** or **More–Thuente**
///   line search based on `opts.line_searcher`.
/// - Calls `run_lbfgs`, which configures the executor (initial params,
///   max iters) and returns an [`OptimOutcome`].
///
/// # Parameters
/// - `f`: Your model implementing [`Objective`].
/// - `theta0`: Initial parameter vector (consumed).
/// - `data`: Model data passed through to `value`/`grad`.
/// - `opts`: Optimizer options (tolerances, line search choice, memory).
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from `run_lbfgs` (e.g., line search failures).
///
/// # Returns
/// An [`OptimOutcome`] containing `theta_hat`, best value `f(θ̂)`,
/// termination status, iteration counts, function evaluation counts, and
/// optionally the gradient norm.
pub fn maximize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, opts: &SearchOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use crate::optimization::profit_optimizer::{Cost, Grad, Tolerances};
    use approx::assert_relative_eq;
    use ndarray::array;

    /// Concave quadratic `f(x) = -(x - 3)^2` with analytic gradient.
    struct Peak;

    impl Objective for Peak {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            let x = theta[0];
            Ok(-(x - 3.0) * (x - 3.0))
        }

        fn check(&self, theta: &Theta, _data: &()) -> OptResult<()> {
            crate::optimization::profit_optimizer::validation::validate_theta_hat(Some(
                theta.clone(),
            ))?;
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(array![-2.0 * (theta[0] - 3.0)])
        }
    }

    #[test]
    fn maximize_finds_quadratic_peak_with_both_line_searches() {
        for ls in [LineSearcher::MoreThuente, LineSearcher::HagerZhang] {
            let tols = Tolerances::new(Some(1e-10), None, Some(100)).unwrap();
            let opts = SearchOptions::new(tols, ls, None).unwrap();
            let out = maximize(&Peak, array![0.0], &(), &opts).unwrap();
            assert_relative_eq!(out.theta_hat[0], 3.0, epsilon = 1e-5);
            assert_relative_eq!(out.value, 0.0, epsilon = 1e-8);
            assert!(out.converged, "quadratic peak should converge: {}", out.status);
        }
    }

    #[test]
    fn maximize_rejects_non_finite_seed() {
        let opts = SearchOptions::default();
        let result = maximize(&Peak, array![f64::NAN], &(), &opts);
        assert!(result.is_err());
    }
}
