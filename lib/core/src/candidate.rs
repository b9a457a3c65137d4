use crate::criteria::NUM_CRITERIA;
use serde::{Deserialize, Serialize};

/// A catalog entry: one offering the engine can recommend.
///
/// Candidates are defined once at catalog load and never mutated by a
/// request. `attributes` holds the six criterion scores in canonical
/// column order; `features` and `tags` are informational pass-through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub attributes: [f64; NUM_CRITERIA],
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, price: f64, attributes: [f64; NUM_CRITERIA]) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            attributes,
            features: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
