//! optimization — bounded search stack, numerical helpers, and unified error
//! surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for the profit search, combining an
//! Argmin-backed objective maximizer, numerically stable box transforms, and
//! a single error/result surface. Callers implement an objective, choose
//! tolerances, and obtain an optimum and diagnostics without touching
//! backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing objectives** `f(θ)`
//!   (`profit_optimizer`), including configuration of solvers and stopping
//!   criteria.
//! - Supply shared numerical primitives (`numerical_stability`) for mapping
//!   unconstrained parameters into the bounded price interval.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate in an unconstrained parameter space `θ` and assume
//!   that inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Objective implementations are expected to treat domain violations
//!   (e.g., non-positive prices, degenerate bounds) as recoverable errors
//!   surfaced through the optimization layer.
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize an objective `f(θ)` by minimizing an
//!   internal cost `c(θ) = -f(θ)`; user-facing APIs and outcomes are
//!   expressed in terms of `f`.
//! - Parameters and gradients are represented using `ndarray` containers
//!   over `f64` via the aliases in `profit_optimizer::types`.

pub mod errors;
pub mod numerical_stability;
pub mod profit_optimizer;

pub use errors::{OptError, OptResult};
