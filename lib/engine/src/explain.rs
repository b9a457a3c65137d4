//! Rationale text for a recommendation
//!
//! Deterministic rule-based assembly, not free-form generation: fixed
//! threshold checks on the raw profile contribute canned phrases, and a
//! per-plan closing sentence finishes the text. Unknown candidate names
//! fall back to a generic closing, so this stage never fails.

use rankx_core::{Candidate, UserProfile};

/// Raw score at or above which a preference dimension is considered
/// strong enough to mention
pub const HIGH_PREFERENCE_THRESHOLD: u8 = 7;

/// Qualitative phrases for strongly-weighted preference dimensions.
///
/// Exactly these four checks; variety and convenience intentionally do
/// not contribute phrases.
fn preference_phrases(profile: &UserProfile) -> Vec<&'static str> {
    let mut phrases = Vec::new();

    if profile.budget_priority >= HIGH_PREFERENCE_THRESHOLD {
        phrases.push("prioritizes cost-effectiveness");
    }
    if profile.intensity_preference >= HIGH_PREFERENCE_THRESHOLD {
        phrases.push("seeks high-intensity training");
    }
    if profile.time_availability >= HIGH_PREFERENCE_THRESHOLD {
        phrases.push("has flexible time availability");
    }
    if profile.support_need >= HIGH_PREFERENCE_THRESHOLD {
        phrases.push("values professional support");
    }

    phrases
}

/// Closing sentence keyed by candidate name, with a generic fallback
fn closing_sentence(name: &str) -> &'static str {
    match name {
        "BASIC PLAN" => {
            "the Basic Plan offers excellent value for money with essential features perfect for getting started."
        }
        "PREMIUM PLAN" => {
            "the Premium Plan provides the ideal balance of features, support, and value for dedicated fitness enthusiasts."
        }
        "PRO PLAN" => {
            "the Pro Plan delivers maximum intensity, professional support, and comprehensive features for serious athletes."
        }
        _ => "this option best matches your requirements.",
    }
}

/// Assemble the explanation for a recommended candidate
#[must_use]
pub fn generate_explanation(recommended: &Candidate, profile: &UserProfile) -> String {
    let phrases = preference_phrases(profile);

    let preamble = if phrases.is_empty() {
        "Based on your preferences, ".to_string()
    } else {
        format!("Based on your preferences that {}, ", phrases.join(", "))
    };

    preamble + closing_sentence(&recommended.name)
}
