//! profit_optimizer::builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the L-BFGS solvers used by the
//! profit optimizer. These helpers hide Argmin's generic wiring and apply
//! crate-level options (tolerances, memory size) so that higher-level code
//! can request a configured solver without touching Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct L-BFGS solvers with either Hager–Zhang or More–Thuente
//!   line search based on crate-level aliases.
//! - Apply optional gradient and cost-change tolerances from
//!   [`SearchOptions`] via a shared configuration helper.
//! - Leave the initial parameter vector and maximum iterations to the
//!   runner/executor layer, keeping these builders side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - All solvers operate on the canonical optimizer numeric types
//!   [`Theta`], [`Grad`], and [`Cost`].
//! - The L-BFGS memory (`m`) is either provided via `opts.lbfgs_mem` or
//!   defaults to [`DEFAULT_LBFGS_MEM`].
//! - Any invalid tolerance passed into Argmin's
//!   `with_tolerance_grad` / `with_tolerance_cost` is surfaced as an
//!   `OptError` via the crate's `From<Error>` implementations.
//!
//! Downstream usage
//! ----------------
//! - High-level optimization entry points call
//!   [`build_optimizer_hager_zhang`] or [`build_optimizer_more_thuente`]
//!   based on the configured `LineSearcher` in [`SearchOptions`].
//! - The returned solver is passed to the runner (`run_lbfgs`) along with
//!   an adapted problem and initial parameters.
//!
//! Testing notes
//! -------------
//! - Unit tests verify construction with both line searches, memory
//!   propagation, and tolerance application; end-to-end solver behavior
//!   is exercised by the pricing and integration tests.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    profit_optimizer::{
        traits::SearchOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct an L-BFGS solver with Hager–Zhang line search.
///
/// Uses `opts.lbfgs_mem` (or [`DEFAULT_LBFGS_MEM`]) for the history size
/// and wires in any tolerances present in `opts.tols`. The initial
/// parameter vector and `max_iters` are runtime concerns applied by the
/// runner, not here.
///
/// # Errors
/// Returns an `OptError` if Argmin rejects a tolerance setting.
pub fn build_optimizer_hager_zhang(opts: &SearchOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct an L-BFGS solver with More–Thuente line search.
///
/// Identical wiring to [`build_optimizer_hager_zhang`] apart from the
/// line-search strategy.
///
/// # Errors
/// Returns an `OptError` if Argmin rejects a tolerance setting.
pub fn build_optimizer_more_thuente(opts: &SearchOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional gradient and cost tolerances from `opts` to a solver.
///
/// Shared wiring used by both line-search builders; generic over the
/// line-search type so future L-BFGS variants can reuse it.
///
/// # Errors
/// Propagates Argmin configuration errors (e.g., non-finite tolerances).
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &SearchOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::profit_optimizer::traits::{LineSearcher, SearchOptions, Tolerances};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic construction of L-BFGS solvers with Hager–Zhang and
    //   More–Thuente line searches.
    // - Propagation of `lbfgs_mem` (Some vs None) into the builder paths.
    // - Application of gradient and cost tolerances via `configure_lbfgs`.
    //
    // They intentionally DO NOT cover:
    // - End-to-end executor behavior (`run_lbfgs`), which is tested in the
    //   pricing layer.
    // -------------------------------------------------------------------------

    #[test]
    fn hager_zhang_builder_accepts_default_memory() {
        let tols = Tolerances::new(Some(1e-6), None, Some(100)).expect("valid tolerances");
        let opts =
            SearchOptions::new(tols, LineSearcher::HagerZhang, None).expect("valid options");
        assert!(build_optimizer_hager_zhang(&opts).is_ok());
    }

    #[test]
    fn more_thuente_builder_accepts_explicit_memory() {
        let tols = Tolerances::new(Some(1e-6), Some(1e-9), Some(100)).expect("valid tolerances");
        let opts =
            SearchOptions::new(tols, LineSearcher::MoreThuente, Some(3)).expect("valid options");
        assert!(build_optimizer_more_thuente(&opts).is_ok());
    }

    #[test]
    fn configure_lbfgs_respects_absent_tolerances() {
        let raw = LBFGS::new(MoreThuenteLS::new(), DEFAULT_LBFGS_MEM);
        let tols = Tolerances::new(None, None, Some(50)).expect("valid tolerances");
        let opts =
            SearchOptions::new(tols, LineSearcher::MoreThuente, None).expect("valid options");
        assert!(configure_lbfgs(raw, &opts).is_ok());
    }
}
