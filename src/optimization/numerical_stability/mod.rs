//! numerical_stability — numerically robust transforms for the price search.
//!
//! Purpose
//! -------
//! Collect the numerically stable scalar transforms used to map the
//! guardrail price box into the unconstrained space the L-BFGS layer works
//! in. This module centralizes the small numeric tolerances and transform
//! logic so the optimization and pricing layers can assume well-conditioned
//! `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide stable scalar transforms (`safe_logistic`, `safe_logit`) for
//!   mapping between ℝ and (0, 1) without overflow/underflow.
//! - Implement the box bijection [`transformations::BoxTransform`] between
//!   the unconstrained optimizer line and a bounded price interval,
//!   together with its Jacobian for gradient chaining.
//! - Centralize the clamp margin (`LOGIT_EPS`) so seeding and inversion
//!   share consistent guards.
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; domain validation
//!   (bound ordering, positive costs) is enforced in the pricing layer,
//!   not here.
//! - `BoxTransform` covers the *open* interval; prices exactly on a bound
//!   are reachable only through the post-search clamp in the pricing layer.
//!
//! Downstream usage
//! ----------------
//! - `pricing::profit` maps optimizer coordinates through `BoxTransform`
//!   inside `Objective::value`/`grad`.
//! - `pricing::optimizer` seeds the search via `to_unconstrained` and maps
//!   the solution back via `to_price`.

pub mod transformations;

pub use self::transformations::{BoxTransform, LOGIT_EPS, safe_logistic, safe_logit};
