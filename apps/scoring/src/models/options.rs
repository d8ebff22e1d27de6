//! Per-batch scoring configuration supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::models::resume::Degree;

/// Batch-analysis weight vector. Values are arbitrary positive numbers,
/// normalized by their own sum at aggregation time (they need not sum to
/// 100, and the defaults intentionally do not).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub ats: f64,
    pub job_relevance: f64,
}

impl Default for BatchWeights {
    fn default() -> Self {
        Self {
            skills: 60.0,
            experience: 20.0,
            education: 10.0,
            ats: 10.0,
            job_relevance: 10.0,
        }
    }
}

impl BatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.ats + self.job_relevance
    }
}

/// Options for one batch run. The legacy skill path reads
/// `required_skills`; the advanced path reads `core_skills` +
/// `optional_skills` and is selected by `use_advanced_skill_matching`
/// whenever either list is nonempty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub required_skills: Vec<String>,
    pub core_skills: Vec<String>,
    pub optional_skills: Vec<String>,
    /// `Degree::None` means no education requirement.
    pub min_degree: Degree,
    pub preferred_branches: Vec<String>,
    pub min_experience_years: Option<f64>,
    /// Enables the job-role similarity estimator when present.
    pub job_role_description: Option<String>,
    /// Enables the remote embedding path when present.
    pub huggingface_api_key: Option<String>,
    pub use_advanced_skill_matching: bool,
    pub use_advanced_scoring: bool,
    pub weights: BatchWeights,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            required_skills: Vec::new(),
            core_skills: Vec::new(),
            optional_skills: Vec::new(),
            min_degree: Degree::None,
            preferred_branches: Vec::new(),
            min_experience_years: None,
            job_role_description: None,
            huggingface_api_key: None,
            use_advanced_skill_matching: true,
            use_advanced_scoring: true,
            weights: BatchWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_batch_defaults() {
        let w = BatchWeights::default();
        assert_eq!(w.sum(), 110.0);
    }

    #[test]
    fn test_options_default_selects_advanced_paths() {
        let o = ScoringOptions::default();
        assert!(o.use_advanced_skill_matching);
        assert!(o.use_advanced_scoring);
        assert_eq!(o.min_degree, Degree::None);
    }

    #[test]
    fn test_options_deserialize_with_partial_fields() {
        let o: ScoringOptions = serde_json::from_str(
            r#"{"core_skills": ["react"], "min_degree": "Bachelors", "min_experience_years": 3}"#,
        )
        .unwrap();
        assert_eq!(o.core_skills, vec!["react"]);
        assert_eq!(o.min_degree, Degree::Bachelors);
        assert_eq!(o.min_experience_years, Some(3.0));
        assert!(o.use_advanced_scoring);
    }
}
