//! Criterion weight derivation
//!
//! Turns a user's raw 1-10 preference scores into a normalized weight
//! vector. Weights are always non-negative and sum to 1.0 within
//! [`WEIGHT_SUM_TOLERANCE`].

use rankx_core::{Error, Result, UserProfile, NUM_CRITERIA};
use serde::{Deserialize, Serialize};

/// Floating tolerance for the weights-sum-to-one invariant
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Normalized per-criterion weights, in canonical criterion order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WeightVector([f64; NUM_CRITERIA]);

impl WeightVector {
    /// The documented default weight set, used when no profile is supplied
    pub const DEFAULT: WeightVector = WeightVector([0.2, 0.15, 0.15, 0.15, 0.2, 0.15]);

    /// Derive weights from a validated profile by normalizing the raw
    /// scores by their sum.
    ///
    /// Fails with `InvalidProfile` if any dimension is outside 1-10 or
    /// the scores sum to zero.
    pub fn from_profile(profile: &UserProfile) -> Result<Self> {
        profile.validate()?;
        Self::from_raw(profile.scores())
    }

    /// Normalize an arbitrary non-negative score vector into weights
    pub fn from_raw(scores: [f64; NUM_CRITERIA]) -> Result<Self> {
        if scores.iter().any(|&s| s < 0.0) {
            return Err(Error::InvalidProfile(
                "preference scores must be non-negative".to_string(),
            ));
        }

        let total: f64 = scores.iter().sum();
        if total <= 0.0 {
            return Err(Error::InvalidProfile(
                "preference scores sum to zero".to_string(),
            ));
        }

        let mut weights = scores;
        for w in &mut weights {
            *w /= total;
        }
        Ok(Self(weights))
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f64; NUM_CRITERIA] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl std::ops::Index<usize> for WeightVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}
