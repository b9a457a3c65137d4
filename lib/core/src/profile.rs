//! User preference profiles and quick-recommendation presets
//!
//! A profile is six named 1-10 scores, one per criterion, in the same
//! order as candidate attribute vectors. Omitted dimensions default to
//! the neutral midpoint of 5.

use crate::criteria::NUM_CRITERIA;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Neutral midpoint used when a preference dimension is not supplied
pub const NEUTRAL_PREFERENCE: u8 = 5;

pub const MIN_PREFERENCE: u8 = 1;
pub const MAX_PREFERENCE: u8 = 10;

fn neutral() -> u8 {
    NEUTRAL_PREFERENCE
}

/// Per-request user preference profile.
///
/// Field order matches candidate attribute order exactly; the weight
/// derivation and explanation stages both rely on that correspondence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default = "neutral")]
    pub budget_priority: u8,
    #[serde(default = "neutral")]
    pub intensity_preference: u8,
    #[serde(default = "neutral")]
    pub time_availability: u8,
    #[serde(default = "neutral")]
    pub variety_importance: u8,
    #[serde(default = "neutral")]
    pub support_need: u8,
    #[serde(default = "neutral")]
    pub convenience_need: u8,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            budget_priority: NEUTRAL_PREFERENCE,
            intensity_preference: NEUTRAL_PREFERENCE,
            time_availability: NEUTRAL_PREFERENCE,
            variety_importance: NEUTRAL_PREFERENCE,
            support_need: NEUTRAL_PREFERENCE,
            convenience_need: NEUTRAL_PREFERENCE,
        }
    }
}

impl UserProfile {
    /// Build a profile from raw scores in canonical dimension order
    #[must_use]
    pub fn from_scores(scores: [u8; NUM_CRITERIA]) -> Self {
        Self {
            budget_priority: scores[0],
            intensity_preference: scores[1],
            time_availability: scores[2],
            variety_importance: scores[3],
            support_need: scores[4],
            convenience_need: scores[5],
        }
    }

    /// Dimension values in canonical order, paired with their names
    #[must_use]
    pub fn dimensions(&self) -> [(&'static str, u8); NUM_CRITERIA] {
        [
            ("budget_priority", self.budget_priority),
            ("intensity_preference", self.intensity_preference),
            ("time_availability", self.time_availability),
            ("variety_importance", self.variety_importance),
            ("support_need", self.support_need),
            ("convenience_need", self.convenience_need),
        ]
    }

    /// Raw dimension scores in canonical order
    #[must_use]
    pub fn scores(&self) -> [f64; NUM_CRITERIA] {
        [
            f64::from(self.budget_priority),
            f64::from(self.intensity_preference),
            f64::from(self.time_availability),
            f64::from(self.variety_importance),
            f64::from(self.support_need),
            f64::from(self.convenience_need),
        ]
    }

    /// Check every dimension is within the 1-10 scale
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.dimensions() {
            if !(MIN_PREFERENCE..=MAX_PREFERENCE).contains(&value) {
                return Err(Error::InvalidProfile(format!(
                    "{} must be between {} and {}, got {}",
                    name, MIN_PREFERENCE, MAX_PREFERENCE, value
                )));
            }
        }
        Ok(())
    }
}

/// Named profiles for one-click quick recommendations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Beginner,
    Intermediate,
    Advanced,
    BudgetConscious,
    TimeLimited,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Beginner,
        Preset::Intermediate,
        Preset::Advanced,
        Preset::BudgetConscious,
        Preset::TimeLimited,
    ];

    /// The hardcoded profile this preset stands for
    #[must_use]
    pub fn profile(self) -> UserProfile {
        match self {
            Preset::Beginner => UserProfile::from_scores([8, 3, 4, 5, 7, 8]),
            Preset::Intermediate => UserProfile::from_scores([5, 6, 6, 7, 6, 6]),
            Preset::Advanced => UserProfile::from_scores([3, 9, 8, 8, 9, 4]),
            Preset::BudgetConscious => UserProfile::from_scores([9, 4, 5, 4, 5, 7]),
            Preset::TimeLimited => UserProfile::from_scores([6, 7, 3, 6, 6, 9]),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Beginner => "beginner",
            Preset::Intermediate => "intermediate",
            Preset::Advanced => "advanced",
            Preset::BudgetConscious => "budget_conscious",
            Preset::TimeLimited => "time_limited",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "beginner" => Ok(Preset::Beginner),
            "intermediate" => Ok(Preset::Intermediate),
            "advanced" => Ok(Preset::Advanced),
            "budget_conscious" => Ok(Preset::BudgetConscious),
            "time_limited" => Ok(Preset::TimeLimited),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }
}
