//! Report-time weighted score and the explainability generator.
//!
//! This is the entry point the report renderer calls per candidate. Unlike
//! the batch weights, the report weight vector is a percentage split and
//! must sum to exactly 100; a mismatch is a configuration error and fails
//! loudly.

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::models::CandidateResult;
use crate::similarity::MatchLevel;

/// Per-dimension maxima the advanced detail blocks are scaled on.
const SKILL_MAX: f64 = 40.0;
const EXPERIENCE_MAX: f64 = 15.0;
const EDUCATION_MAX: f64 = 10.0;
const QUALITY_MAX: f64 = 5.0;

/// Tolerated deviation from a 100-point weight sum.
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Report-time weight vector. Percentages over the five report dimensions;
/// validated to sum to 100 before any score is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportWeights {
    pub job_role_match: f64,
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub resume_quality: f64,
}

impl Default for ReportWeights {
    fn default() -> Self {
        Self {
            job_role_match: 25.0,
            skill_match: 40.0,
            experience_match: 20.0,
            education_match: 10.0,
            resume_quality: 5.0,
        }
    }
}

impl ReportWeights {
    pub fn sum(&self) -> f64 {
        self.job_role_match
            + self.skill_match
            + self.experience_match
            + self.education_match
            + self.resume_quality
    }

    /// Contract check: the vector must sum to 100 within tolerance.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let sum = self.sum();
        if (sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightSum { sum });
        }
        Ok(())
    }
}

/// Whole-number per-dimension scores backing the final weighted score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub job_role_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub quality_score: f64,
}

/// Final weighted score plus its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalScore {
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
    pub weights: ReportWeights,
}

/// Fixed recommendation tier derived from the final score.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub level: &'static str,
    pub action: &'static str,
    pub priority: &'static str,
    pub message: &'static str,
}

/// Complete explainable assessment for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainableScore {
    pub final_score: f64,
    pub recommendation: String,
    pub action: String,
    pub priority: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub explanation: String,
    pub breakdown: ScoreBreakdown,
    pub weights: ReportWeights,
    pub candidate_name: String,
    pub success: bool,
}

/// Computes the final weighted score for one candidate.
///
/// Each dimension prefers the advanced detail block (rescaled from its own
/// max to 0-100) and falls back to the flat batch field; job-role prefers
/// the AI similarity (scaled x100) over the skill/ATS blend. The weighted
/// sum is rounded and clamped to [0, 100].
pub fn final_ats_score(
    candidate: &CandidateResult,
    weights: Option<ReportWeights>,
) -> Result<FinalScore, ScoringError> {
    let weights = weights.unwrap_or_default();
    weights.validate()?;

    let job_role_score = match candidate.ai_job_role_similarity {
        Some(similarity) => similarity * 100.0,
        None => candidate.job_relevance,
    };

    let skill_score = match &candidate.advanced_skills {
        Some(s) => s.skill_score / SKILL_MAX * 100.0,
        None => candidate.skills_match,
    };

    let experience_score = match &candidate.advanced_experience {
        Some(e) => e.experience_score / EXPERIENCE_MAX * 100.0,
        None => candidate.experience_score,
    };

    let education_score = match &candidate.advanced_education {
        Some(e) => e.education_score / EDUCATION_MAX * 100.0,
        None => candidate.education_match,
    };

    let quality_score = match &candidate.advanced_quality {
        Some(q) => q.resume_quality_score / QUALITY_MAX * 100.0,
        None => candidate.ats_format_score,
    };

    let final_score = (job_role_score * weights.job_role_match / 100.0
        + skill_score * weights.skill_match / 100.0
        + experience_score * weights.experience_match / 100.0
        + education_score * weights.education_match / 100.0
        + quality_score * weights.resume_quality / 100.0)
        .clamp(0.0, 100.0)
        .round();

    Ok(FinalScore {
        final_score,
        breakdown: ScoreBreakdown {
            job_role_score: job_role_score.round(),
            skill_score: skill_score.round(),
            experience_score: experience_score.round(),
            education_score: education_score.round(),
            quality_score: quality_score.round(),
        },
        weights,
    })
}

/// Five-tier hiring recommendation, inclusive lower bounds.
pub fn recommendation_for(final_score: f64) -> Recommendation {
    if final_score >= 85.0 {
        Recommendation {
            level: "Strong Fit",
            action: "Highly Recommended",
            priority: "High",
            message: "Excellent candidate - Schedule interview immediately",
        }
    } else if final_score >= 70.0 {
        Recommendation {
            level: "Good Fit",
            action: "Recommended",
            priority: "Medium-High",
            message: "Strong candidate - Add to interview shortlist",
        }
    } else if final_score >= 55.0 {
        Recommendation {
            level: "Moderate Fit",
            action: "Consider",
            priority: "Medium",
            message: "Potential candidate - Review carefully before proceeding",
        }
    } else if final_score >= 40.0 {
        Recommendation {
            level: "Weak Fit",
            action: "Review with Caution",
            priority: "Low",
            message: "Below expectations - Consider only if talent pool is limited",
        }
    } else {
        Recommendation {
            level: "Poor Fit",
            action: "Not Recommended",
            priority: "Very Low",
            message: "Does not meet minimum requirements - Not suitable for role",
        }
    }
}

/// Deterministic strengths list; never empty.
pub fn identify_strengths(candidate: &CandidateResult) -> Vec<String> {
    let mut strengths = Vec::new();

    if let Some(skills) = &candidate.advanced_skills {
        strengths.extend(skills.matched_core_skills.iter().cloned());
    }

    if let Some(exp) = &candidate.advanced_experience {
        if exp.meet_requirement {
            strengths.push(format!("{}+ years experience", candidate.experience_years));
        }
    }

    if let Some(edu) = &candidate.advanced_education {
        if edu.degree_match {
            strengths.push(candidate.degree.to_string());
        }
    }

    if matches!(
        candidate.ai_match_level,
        Some(MatchLevel::Excellent) | Some(MatchLevel::Good)
    ) {
        strengths.push("Strong role alignment".to_string());
    }

    if let Some(quality) = &candidate.advanced_quality {
        if quality.quality_percentage >= 70 {
            strengths.push("Professional resume".to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push("Basic qualifications present".to_string());
    }
    strengths
}

/// Deterministic gaps list; never empty.
pub fn identify_gaps(candidate: &CandidateResult) -> Vec<String> {
    let mut gaps = Vec::new();

    match &candidate.advanced_skills {
        Some(skills) => gaps.extend(skills.missing_core_skills.iter().cloned()),
        None => gaps.extend(candidate.missing_skills.iter().take(3).cloned()),
    }

    if let Some(exp) = &candidate.advanced_experience {
        if !exp.meet_requirement {
            gaps.push("Insufficient experience".to_string());
        }
    }

    if let Some(edu) = &candidate.advanced_education {
        if !edu.degree_match {
            gaps.push("Education below requirement".to_string());
        }
    }

    if let Some(quality) = &candidate.advanced_quality {
        if !quality.issues.is_empty() {
            gaps.push("Resume formatting issues".to_string());
        }
    }

    if gaps.is_empty() {
        gaps.push("None identified".to_string());
    }
    gaps
}

/// One-paragraph template assessment for HR users.
pub fn generate_explanation(
    candidate: &CandidateResult,
    final_score: f64,
    recommendation: &Recommendation,
) -> String {
    let mut explanation = format!(
        "This candidate achieved an overall ATS score of {final_score}/100, indicating a {}. ",
        recommendation.level.to_lowercase()
    );

    if let Some(level) = candidate.ai_match_level {
        explanation.push_str(&format!(
            "AI semantic analysis shows {}. ",
            level.to_string().to_lowercase()
        ));
    }

    if let Some(skills) = &candidate.advanced_skills {
        let core = skills.core_match_percentage;
        if core >= 80 {
            explanation.push_str(&format!(
                "Strong skills alignment with {core}% of core requirements met. "
            ));
        } else if core >= 60 {
            explanation.push_str(&format!(
                "Moderate skills match with {core}% of core requirements met. "
            ));
        } else {
            explanation.push_str(&format!(
                "Limited skills match with only {core}% of core requirements met. "
            ));
        }
    }

    if let Some(exp) = &candidate.advanced_experience {
        if exp.meet_requirement {
            explanation.push_str("Experience requirements satisfied. ");
        } else {
            explanation.push_str("Experience below requirements. ");
        }
    }

    if let Some(edu) = &candidate.advanced_education {
        if edu.degree_match {
            explanation.push_str("Educational qualifications meet standards. ");
        } else {
            explanation.push_str("Educational background needs review. ");
        }
    }

    explanation.push_str(recommendation.message);
    explanation
}

/// Full explainable assessment: score, tier, strengths, gaps, narrative.
///
/// Errors only when the custom weight vector violates the sum-to-100
/// contract.
pub fn generate_explainable_score(
    candidate: &CandidateResult,
    custom_weights: Option<ReportWeights>,
) -> Result<ExplainableScore, ScoringError> {
    let score = final_ats_score(candidate, custom_weights)?;
    let recommendation = recommendation_for(score.final_score);
    let strengths = identify_strengths(candidate);
    let gaps = identify_gaps(candidate);
    let explanation = generate_explanation(candidate, score.final_score, &recommendation);

    Ok(ExplainableScore {
        final_score: score.final_score,
        recommendation: recommendation.level.to_string(),
        action: recommendation.action.to_string(),
        priority: recommendation.priority.to_string(),
        strengths,
        gaps,
        explanation,
        breakdown: score.breakdown,
        weights: score.weights,
        candidate_name: candidate.candidate_name.clone(),
        success: true,
    })
}
