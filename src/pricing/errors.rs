use crate::optimization::errors::OptError;

/// Result alias for pricing-layer operations.
pub type PricingResult<T> = Result<T, PricingError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    // ---- Inputs ----
    /// Unit cost must be finite and > 0; otherwise the guardrail bounds
    /// would collapse or invert.
    InvalidCost {
        value: f64,
    },

    /// Guardrail bounds collapsed (upper <= lower).
    DegenerateBounds {
        lower: f64,
        upper: f64,
    },

    /// A fitted demand parameter or seed price is non-finite.
    NonFiniteParameter {
        name: &'static str,
        value: f64,
    },

    // ---- Search ----
    /// The bounded search failed: solver error, or an unconverged run that
    /// could not improve on the boundary profit.
    ConvergenceFailure {
        detail: String,
    },

    /// The profit objective produced a non-finite value at every candidate.
    NonFiniteProfit {
        price: f64,
        value: f64,
    },
}

impl std::error::Error for PricingError {}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidCost { value } => {
                write!(f, "Invalid unit cost: {value}, must be finite and > 0")
            }
            PricingError::DegenerateBounds { lower, upper } => {
                write!(f, "Degenerate price bounds: [{lower}, {upper}], upper must exceed lower")
            }
            PricingError::NonFiniteParameter { name, value } => {
                write!(f, "Non-finite pricing input {name}: {value}")
            }
            PricingError::ConvergenceFailure { detail } => {
                write!(f, "Price search failed to converge: {detail}")
            }
            PricingError::NonFiniteProfit { price, value } => {
                write!(f, "Non-finite profit {value} at price {price}")
            }
        }
    }
}

impl From<OptError> for PricingError {
    /// Solver-layer failures all surface as a convergence failure; the
    /// pricing layer validates its own inputs before the solver ever runs.
    fn from(err: OptError) -> Self {
        PricingError::ConvergenceFailure { detail: err.to_string() }
    }
}
