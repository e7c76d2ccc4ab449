/// Result alias for demand-model operations.
pub type DemandResult<T> = Result<T, DemandError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DemandError {
    // ---- Dataset ----
    /// The dataset contains no records.
    EmptyDataset,

    /// A record failed validation at ingestion.
    InvalidRecord {
        index: usize,
        field: &'static str,
        value: f64,
    },

    /// Log features must be derived before fitting.
    FeaturesNotComputed,

    /// No records exist for the requested category.
    UnknownCategory {
        name: String,
    },

    // ---- Per-SKU fit ----
    /// Too few observations to identify the regression parameters.
    InsufficientData {
        sku_id: u32,
        n_obs: usize,
        required: usize,
    },

    /// The design matrix is rank-deficient (e.g., a price column is
    /// constant), so the normal equations cannot be factorized.
    SingularDesign {
        sku_id: u32,
    },

    /// A fitted coefficient came out non-finite.
    NonFiniteEstimate {
        sku_id: u32,
        name: &'static str,
        value: f64,
    },
}

impl std::error::Error for DemandError {}

impl std::fmt::Display for DemandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandError::EmptyDataset => {
                write!(f, "Cannot operate on an empty dataset")
            }
            DemandError::InvalidRecord { index, field, value } => {
                write!(f, "Invalid record at row {index}: {field} = {value}")
            }
            DemandError::FeaturesNotComputed => {
                write!(f, "Log features have not been derived; call feature_engineering first")
            }
            DemandError::UnknownCategory { name } => {
                write!(f, "No records for category '{name}'")
            }
            DemandError::InsufficientData { sku_id, n_obs, required } => {
                write!(
                    f,
                    "SKU {sku_id}: {n_obs} observations, at least {required} required for the fit"
                )
            }
            DemandError::SingularDesign { sku_id } => {
                write!(f, "SKU {sku_id}: design matrix is singular (no price variation?)")
            }
            DemandError::NonFiniteEstimate { sku_id, name, value } => {
                write!(f, "SKU {sku_id}: non-finite {name} estimate: {value}")
            }
        }
    }
}
