//! pricing — guardrailed profit maximization for one SKU at a time.
//!
//! Purpose
//! -------
//! Turn one SKU's fitted elasticity parameters, unit cost, and current
//! observed price into a profit-maximizing price inside business guardrail
//! bounds. The module owns the demand/profit objective, the bounds
//! derivation, and the post-search boundary dominance guarantee; the
//! generic solver machinery lives in `optimization`.
//!
//! Key behaviors
//! -------------
//! - Derive the feasible interval `[cost·1.05, cost·3.0]` from unit cost,
//!   rejecting non-positive costs before any search ([`bounds`]).
//! - Evaluate `demand(p) = exp(intercept + elasticity·ln p)` and
//!   `profit(p) = (p - cost)·demand(p)`, guarding non-positive price
//!   evaluations with a large negative sentinel ([`profit`]).
//! - Run L-BFGS through a logistic box transform, seeded at the current
//!   price, and return the best of the interior candidate and both
//!   boundary prices ([`optimizer`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every returned [`optimizer::PriceSolution`] has a finite price inside
//!   the closed guardrail interval and a finite profit dominating both
//!   boundary profits.
//! - A non-negative own elasticity is survivable input: the search pushes
//!   the price to the ceiling and the outcome is flagged `at_bound`, for
//!   the orchestrator to mark as untrustworthy.
//!
//! Downstream usage
//! ----------------
//! - The orchestrator builds one [`profit::ProfitModel`] per SKU and reuses
//!   it for both the search and the current-profit baseline, so the two
//!   sides of the comparison share one demand formula by construction.

pub mod bounds;
pub mod errors;
pub mod optimizer;
pub mod profit;

pub use self::bounds::{MAX_MARKUP, MIN_MARKUP, PriceBounds};
pub use self::errors::{PricingError, PricingResult};
pub use self::optimizer::{PriceOptimizer, PriceSolution};
pub use self::profit::ProfitModel;
