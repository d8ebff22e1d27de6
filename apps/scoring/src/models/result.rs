//! Ranked output records, one per input resume.

use serde::{Deserialize, Serialize};

use crate::models::options::BatchWeights;
use crate::models::resume::Degree;
use crate::score::{EducationReport, ExperienceReport, QualityReport, SkillReport};
use crate::similarity::{Confidence, MatchLevel};

/// One scored candidate. Created once per batch run and never mutated
/// after rank assignment.
///
/// All sub-scores are on a normalized 0-100 scale; the advanced detail
/// blocks carry the raw per-dimension reports (on their own maxima) when
/// the advanced paths ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResult {
    /// 1-based, contiguous; ties broken by stable original order.
    pub rank: usize,
    pub filename: String,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub degree: Degree,
    pub experience_years: f64,
    pub skills_match: f64,
    pub education_match: f64,
    pub experience_score: f64,
    pub ats_format_score: f64,
    pub job_relevance: f64,
    pub ai_job_role_similarity: Option<f64>,
    pub ai_match_level: Option<MatchLevel>,
    pub ai_match_explanation: Option<String>,
    pub ai_confidence: Option<Confidence>,
    pub total_score: f64,
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub weights: BatchWeights,
    pub advanced_skills: Option<SkillReport>,
    pub advanced_experience: Option<ExperienceReport>,
    pub advanced_education: Option<EducationReport>,
    pub advanced_quality: Option<QualityReport>,
}
