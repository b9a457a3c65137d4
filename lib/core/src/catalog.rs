use crate::candidate::Candidate;
use crate::criteria::{all_beneficial, CriterionKind, CRITERION_NAMES, NUM_CRITERIA};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The immutable set of offerings the engine ranks.
///
/// Validated once at construction; requests only ever read it, so a
/// shared catalog needs no locking. Swapping in a new catalog means
/// building a fresh `Catalog` and replacing the whole value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    candidates: Vec<Candidate>,
    #[serde(default = "all_beneficial")]
    criteria: [CriterionKind; NUM_CRITERIA],
}

impl Catalog {
    /// Build a validated catalog.
    ///
    /// Fails on an empty candidate list, duplicate candidate ids, or a
    /// degenerate criterion (a column on which every candidate scores
    /// zero - a configuration defect that would later divide by zero).
    pub fn new(
        candidates: Vec<Candidate>,
        criteria: [CriterionKind; NUM_CRITERIA],
    ) -> Result<Self> {
        if candidates.is_empty() {
            return Err(Error::InvalidConfig("catalog has no candidates".to_string()));
        }

        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate candidate id: {}",
                    candidate.id
                )));
            }
        }

        for j in 0..NUM_CRITERIA {
            if candidates.iter().all(|c| c.attributes[j] == 0.0) {
                return Err(Error::DegenerateCriterion {
                    criterion: CRITERION_NAMES[j],
                });
            }
        }

        Ok(Self { candidates, criteria })
    }

    /// Build a catalog where every criterion is beneficial
    pub fn beneficial(candidates: Vec<Candidate>) -> Result<Self> {
        Self::new(candidates, all_beneficial())
    }

    /// The built-in subscription plan catalog
    #[must_use]
    pub fn default_plans() -> Self {
        let candidates = vec![
            Candidate::new(1, "BASIC PLAN", 2500.0, [8.0, 3.0, 2.0, 3.0, 4.0, 8.0])
                .with_features([
                    "2 hours of exercises",
                    "Free consultation to coaches",
                    "Access to The Community",
                ])
                .with_tags(["beginners", "budget_conscious", "casual_fitness"]),
            Candidate::new(2, "PREMIUM PLAN", 3000.0, [7.0, 6.0, 5.0, 6.0, 7.0, 7.0])
                .with_features([
                    "5 hours of exercises",
                    "Free consultation of Coaches",
                    "Access to minibar",
                ])
                .with_tags(["intermediate", "dedicated", "full_experience"]),
            Candidate::new(3, "PRO PLAN", 4500.0, [5.0, 9.0, 8.0, 8.0, 9.0, 6.0])
                .with_features([
                    "8 hours of exercises",
                    "Personal trainer included",
                    "Nutrition planning",
                    "Advanced equipment access",
                ])
                .with_tags(["advanced", "professional", "serious_athletes"]),
        ];

        // The built-in plans are a valid catalog by construction
        Self::new(candidates, all_beneficial()).expect("built-in catalog is valid")
    }

    /// Parse and validate a catalog from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: Catalog =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::new(parsed.candidates, parsed.criteria)
    }

    /// Load and validate a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn criteria(&self) -> &[CriterionKind; NUM_CRITERIA] {
        &self.criteria
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Extract the decision matrix: one attribute row per candidate,
    /// in catalog order
    #[must_use]
    pub fn decision_matrix(&self) -> Vec<[f64; NUM_CRITERIA]> {
        self.candidates.iter().map(|c| c.attributes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plans() {
        let catalog = Catalog::default_plans();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.candidates()[0].name, "BASIC PLAN");
        assert_eq!(catalog.candidates()[2].attributes, [5.0, 9.0, 8.0, 8.0, 9.0, 6.0]);
        assert!(catalog.criteria().iter().all(|k| k.is_beneficial()));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::beneficial(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let candidates = vec![
            Candidate::new(1, "A", 10.0, [1.0; NUM_CRITERIA]),
            Candidate::new(1, "B", 20.0, [2.0; NUM_CRITERIA]),
        ];
        let err = Catalog::beneficial(candidates).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_degenerate_criterion_rejected_at_load() {
        let candidates = vec![
            Candidate::new(1, "A", 10.0, [1.0, 0.0, 2.0, 3.0, 4.0, 5.0]),
            Candidate::new(2, "B", 20.0, [2.0, 0.0, 3.0, 4.0, 5.0, 6.0]),
        ];
        let err = Catalog::beneficial(candidates).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateCriterion { criterion: "intensity" }
        ));
    }

    #[test]
    fn test_decision_matrix_order() {
        let catalog = Catalog::default_plans();
        let matrix = catalog.decision_matrix();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0], [8.0, 3.0, 2.0, 3.0, 4.0, 8.0]);
        assert_eq!(matrix[1], [7.0, 6.0, 5.0, 6.0, 7.0, 7.0]);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "candidates": [
                {"id": 1, "name": "A", "price": 10.0, "attributes": [1, 2, 3, 4, 5, 6]},
                {"id": 2, "name": "B", "price": 20.0, "attributes": [6, 5, 4, 3, 2, 1]}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        // Criteria default to all-beneficial when omitted
        assert!(catalog.criteria().iter().all(|k| k.is_beneficial()));
    }

    #[test]
    fn test_from_json_str_with_cost_criterion() {
        let json = r#"{
            "candidates": [
                {"id": 1, "name": "A", "price": 10.0, "attributes": [1, 2, 3, 4, 5, 6]}
            ],
            "criteria": ["beneficial", "cost", "beneficial", "beneficial", "beneficial", "beneficial"]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.criteria()[1], CriterionKind::Cost);
    }

    #[test]
    fn test_from_json_str_invalid_rejected() {
        assert!(Catalog::from_json_str("not json").is_err());
        assert!(Catalog::from_json_str(r#"{"candidates": []}"#).is_err());
    }
}
