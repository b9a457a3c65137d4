//! # rankx
//!
//! A TOPSIS multi-criteria recommendation engine for subscription plan
//! selection.
//!
//! rankx ranks a small fixed catalog of offerings against a user's
//! preference profile using TOPSIS (Technique for Order of Preference by
//! Similarity to Ideal Solution) and explains its top pick.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install rankx
//! rankx --preset beginner
//! rankx --budget-priority 9 --support-need 8
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rankx::prelude::*;
//!
//! // Engine over the built-in plan catalog
//! let engine = RecommendationEngine::with_default_catalog();
//!
//! // Quick recommendation from a named preset
//! let result = engine.recommend_quick("beginner").unwrap();
//! assert_eq!(result.recommended.rank, 1);
//!
//! // Or a detailed profile; omitted dimensions default to 5
//! let profile = UserProfile {
//!     intensity_preference: 9,
//!     time_availability: 8,
//!     ..UserProfile::default()
//! };
//! let result = engine.recommend_detailed(&profile).unwrap();
//! println!("{}: {}", result.recommended.candidate.name, result.explanation);
//! ```
//!
//! ## Crate Structure
//!
//! rankx is composed of two library crates:
//!
//! - [`rankx-core`](https://docs.rs/rankx-core) - Domain types (Candidate, Catalog, UserProfile, Preset)
//! - [`rankx-engine`](https://docs.rs/rankx-engine) - The TOPSIS pipeline and RecommendationEngine
//!
//! ## Features
//!
//! - **TOPSIS Ranking**: Normalized weighted Euclidean distance to ideal solutions
//! - **Preference Profiles**: Six named 1-10 dimensions with neutral defaults
//! - **Presets**: One-click profiles (beginner, intermediate, advanced, ...)
//! - **Explainability**: Deterministic rule-based rationale for the top pick
//! - **Cost Criteria**: Per-criterion beneficial/cost direction flags
//! - **Configurable Catalog**: Embedded defaults or JSON-supplied offerings

// Re-export core types
pub use rankx_core::{
    all_beneficial, Candidate, Catalog, CriterionKind, Error, Preset, Result, UserProfile,
    CRITERION_NAMES, MAX_PREFERENCE, MIN_PREFERENCE, NEUTRAL_PREFERENCE, NUM_CRITERIA,
};

// Re-export engine
pub use rankx_engine::{
    generate_explanation, RecommendationEngine, RecommendationResult, ScoredCandidate,
    WeightVector, HIGH_PREFERENCE_THRESHOLD, WEIGHT_SUM_TOLERANCE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Candidate, Catalog, CriterionKind, Error, Preset, RecommendationEngine,
        RecommendationResult, Result, ScoredCandidate, UserProfile, WeightVector, NUM_CRITERIA,
    };
}
