//! # rankx Engine
//!
//! The TOPSIS decision engine for rankx.
//!
//! Converts user preference weights and a fixed decision matrix
//! (candidates x criteria) into a ranked list of scored candidates plus
//! a human-readable rationale for the top pick.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Profile   │────>│   Weights   │────>│  Normalize  │
//! │ (1-10 dims) │     │ (sum = 1.0) │     │  + Weight   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │    Rank     │<────│   Ideals    │
//!                     │ + Explain   │     │ + Distances │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rankx_engine::RecommendationEngine;
//! use rankx_core::UserProfile;
//!
//! let engine = RecommendationEngine::with_default_catalog();
//!
//! let profile = UserProfile {
//!     budget_priority: 8,
//!     support_need: 7,
//!     ..UserProfile::default()
//! };
//! let result = engine.recommend_detailed(&profile).unwrap();
//!
//! assert_eq!(result.recommended.rank, 1);
//! assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
//! println!("{}", result.explanation);
//! ```

pub mod engine;
pub mod explain;
pub mod rank;
mod topsis;
pub mod weights;

// Re-export main types for convenience
pub use engine::{RecommendationEngine, RecommendationResult};
pub use explain::{generate_explanation, HIGH_PREFERENCE_THRESHOLD};
pub use rank::ScoredCandidate;
pub use weights::{WeightVector, WEIGHT_SUM_TOLERANCE};
