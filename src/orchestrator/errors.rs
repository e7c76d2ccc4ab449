//! Skip accounting for the batch run.
//!
//! Purpose
//! -------
//! Record, per SKU, why the orchestrator produced no recommendation:
//! either the demand fit failed, the profit search failed, or no latest
//! observation existed for a fitted SKU.
use std::fmt;

use crate::demand::DemandError;
use crate::pricing::PricingError;

/// Why a SKU was excluded from the report.
#[derive(Debug)]
pub enum SkipReason {
    /// The demand regression could not produce an estimate.
    Fit(DemandError),
    /// The profit search failed for a fitted SKU.
    Optimization(PricingError),
    /// A fitted SKU had no latest cost/price observation.
    MissingSnapshot,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Fit(err) => write!(f, "demand fit failed: {err}"),
            SkipReason::Optimization(err) => write!(f, "profit search failed: {err}"),
            SkipReason::MissingSnapshot => {
                write!(f, "no latest observation for a fitted SKU")
            }
        }
    }
}

/// One skipped SKU with its reason.
#[derive(Debug)]
pub struct SkippedSku {
    pub sku_id: u32,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedSku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SKU {}: {}", self.sku_id, self.reason)
    }
}
