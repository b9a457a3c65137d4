//! Criterion definitions shared by catalogs and the decision engine
//!
//! The criteria set is fixed: six dimensions, always in the same order.
//! Candidate attribute vectors and user preference profiles are both
//! indexed by this order, which is what makes the decision matrix line up.

use serde::{Deserialize, Serialize};

/// Number of criteria every candidate is scored on.
pub const NUM_CRITERIA: usize = 6;

/// Canonical criterion names, in matrix column order.
pub const CRITERION_NAMES: [&str; NUM_CRITERIA] = [
    "price_favorability",
    "intensity",
    "duration",
    "variety",
    "support",
    "accessibility",
];

/// Direction of a criterion.
///
/// The current catalog pre-inverts cost-like attributes so that every
/// column is beneficial, but the ideal-solution stage honors this flag
/// either way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Higher raw value is preferable
    #[default]
    Beneficial,
    /// Lower raw value is preferable
    Cost,
}

impl CriterionKind {
    /// True if higher values are better for this criterion
    #[inline]
    pub fn is_beneficial(self) -> bool {
        matches!(self, CriterionKind::Beneficial)
    }
}

/// All-beneficial criterion set, the default for the plan catalog
pub fn all_beneficial() -> [CriterionKind; NUM_CRITERIA] {
    [CriterionKind::Beneficial; NUM_CRITERIA]
}
