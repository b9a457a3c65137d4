//! The recommendation engine entry point
//!
//! Owns the immutable catalog and orchestrates the pipeline: weight
//! derivation, normalization, weighting, ideal-solution extraction,
//! closeness scoring, ranking, and explanation. Stateless across calls;
//! concurrent callers share one engine with no coordination.

use crate::explain::generate_explanation;
use crate::rank::{rank_candidates, ScoredCandidate};
use crate::topsis::{apply_weights, closeness_scores, ideal_solutions, normalize_matrix};
use crate::weights::WeightVector;
use rankx_core::{Catalog, Preset, Result, UserProfile};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    /// The rank-1 candidate
    pub recommended: ScoredCandidate,
    /// All candidates, descending by score, ties broken by ascending id
    pub ranked: Vec<ScoredCandidate>,
    /// Human-readable rationale for the top pick
    pub explanation: String,
    /// The weights the pipeline ran with
    pub weights_used: WeightVector,
    /// The recommended candidate's closeness score
    pub confidence: f64,
}

/// TOPSIS decision engine over an immutable candidate catalog.
///
/// Construct one per catalog and hold a reference wherever
/// recommendations are needed; there is no global instance.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
}

impl RecommendationEngine {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Engine over the built-in subscription plan catalog
    #[must_use]
    pub fn with_default_catalog() -> Self {
        Self::new(Catalog::default_plans())
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend from a detailed preference profile.
    ///
    /// Fails with `InvalidProfile` on out-of-range dimensions and
    /// propagates `DegenerateCriterion` from the pipeline; on failure
    /// no default candidate is substituted.
    pub fn recommend_detailed(&self, profile: &UserProfile) -> Result<RecommendationResult> {
        let weights = WeightVector::from_profile(profile)?;
        let ranked = self.rank_with_weights(&weights)?;
        Ok(self.assemble(ranked, weights, profile))
    }

    /// Recommend from a preset name, e.g. `"beginner"`.
    ///
    /// Fails with `UnknownPreset` for names outside the enumerated set.
    pub fn recommend_quick(&self, preset_name: &str) -> Result<RecommendationResult> {
        self.recommend_preset(Preset::from_str(preset_name)?)
    }

    /// Recommend from a typed preset
    pub fn recommend_preset(&self, preset: Preset) -> Result<RecommendationResult> {
        self.recommend_detailed(&preset.profile())
    }

    /// Recommend with the documented default weights and a neutral
    /// profile for the rationale
    pub fn recommend_default(&self) -> Result<RecommendationResult> {
        let weights = WeightVector::DEFAULT;
        let ranked = self.rank_with_weights(&weights)?;
        Ok(self.assemble(ranked, weights, &UserProfile::default()))
    }

    /// Run the numeric pipeline with explicit weights and return the
    /// ranked candidates.
    ///
    /// This is the layer below weight derivation: normalize, weight,
    /// extract ideals, score, rank.
    pub fn rank_with_weights(&self, weights: &WeightVector) -> Result<Vec<ScoredCandidate>> {
        let matrix = self.catalog.decision_matrix();
        let mut weighted = normalize_matrix(&matrix)?;
        apply_weights(&mut weighted, weights);

        let ideals = ideal_solutions(&weighted, self.catalog.criteria());
        let scores = closeness_scores(&weighted, &ideals);

        Ok(rank_candidates(self.catalog.candidates(), &scores))
    }

    fn assemble(
        &self,
        ranked: Vec<ScoredCandidate>,
        weights: WeightVector,
        profile: &UserProfile,
    ) -> RecommendationResult {
        // Catalog validation guarantees at least one candidate
        let recommended = ranked[0].clone();
        let explanation = generate_explanation(&recommended.candidate, profile);
        let confidence = recommended.topsis_score;

        RecommendationResult {
            recommended,
            ranked,
            explanation,
            weights_used: weights,
            confidence,
        }
    }
}
