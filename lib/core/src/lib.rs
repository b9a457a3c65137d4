//! # rankx Core
//!
//! Core library for the rankx recommendation engine.
//!
//! This crate provides the domain types shared across the workspace:
//!
//! - [`Candidate`] - A catalog entry with its criterion attribute vector
//! - [`Catalog`] - The validated, immutable set of offerings to rank
//! - [`UserProfile`] - Six named 1-10 preference scores, one per criterion
//! - [`Preset`] - Named hardcoded profiles for quick recommendations
//! - [`CriterionKind`] - Beneficial/cost direction flag per criterion
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{Catalog, Preset, UserProfile};
//!
//! // The built-in subscription plan catalog
//! let catalog = Catalog::default_plans();
//! assert_eq!(catalog.len(), 3);
//!
//! // A detailed preference profile; omitted dimensions default to 5
//! let profile = UserProfile {
//!     budget_priority: 8,
//!     support_need: 7,
//!     ..UserProfile::default()
//! };
//! profile.validate().unwrap();
//!
//! // Presets resolve to hardcoded profiles
//! let beginner = Preset::Beginner.profile();
//! assert_eq!(beginner.budget_priority, 8);
//! ```

pub mod candidate;
pub mod catalog;
pub mod criteria;
pub mod error;
pub mod profile;

pub use candidate::Candidate;
pub use catalog::Catalog;
pub use criteria::{all_beneficial, CriterionKind, CRITERION_NAMES, NUM_CRITERIA};
pub use error::{Error, Result};
pub use profile::{Preset, UserProfile, MAX_PREFERENCE, MIN_PREFERENCE, NEUTRAL_PREFERENCE};
