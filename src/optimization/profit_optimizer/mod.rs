//! profit_optimizer — argmin-powered objective maximizer for the pricing layer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! smooth scalar objectives** `f(θ)` (here, elasticity-implied profit).
//! Callers implement a single trait, [`Objective`], supplying the value and
//! its analytic gradient, and invoke [`maximize`] to run L-BFGS with a
//! configurable line search and tolerances.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied objectives `f(θ)` into Argmin-compatible cost
//!   functions `c(θ) = -f(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`Objective::check`],
//!   - selects an L-BFGS solver via [`builders`] based on [`traits::LineSearcher`],
//!   - executes the solver via [`run::run_lbfgs`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`SearchOptions`])
//!   and validation logic ([`validation`]) so downstream code can assume
//!   sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** an objective `f(θ)` by minimizing
//!   a cost `c(θ) = -f(θ)`; user code must implement `f(θ)` and `∇f(θ)`,
//!   **never** the cost directly.
//! - [`Objective::value`] and [`Objective::grad`] must treat invalid inputs
//!   as recoverable `OptError` values, not panics.
//! - Configuration types are validated on construction and treated as
//!   internally consistent by the solver layer.
//!
//! Conventions
//! -----------
//! - Parameters live in an unconstrained optimizer space as [`Theta`]
//!   (`Array1<f64>`). Any mapping from constrained → unconstrained space
//!   (e.g., the pricing box transform) happens in the model layer.
//! - Gradients exposed by [`Objective::grad`] are for the objective
//!   (`∇f(θ)`); the adapter flips signs to obtain the cost gradient.
//! - Errors bubble up as `OptResult<T>` / `OptError`; this module and its
//!   children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - The pricing layer implements [`Objective`] for its profit model over a
//!   single unconstrained coordinate, then calls [`maximize`] with a seed,
//!   a data payload, and a [`SearchOptions`] configuration.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions and gradient handling
//!   in [`adapter`], solver construction in [`builders`], configuration and
//!   outcome invariants in [`traits`], and quadratic-peak recovery in
//!   [`api`]. The full pricing objective is exercised in the pricing layer
//!   and the integration tests.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, Objective, OptimOutcome, SearchOptions, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};
