//! Experience dimension: legacy 0-100 formula and the advanced variant
//! with a met-requirement base plus a capped seniority bonus.

use serde::{Deserialize, Serialize};

use crate::score::round2;

/// Met-requirement base as a share of the max; the bonus fills the rest.
const BASE_SHARE: f64 = 0.8;
const BONUS_SHARE: f64 = 0.2;
/// Bonus points per year above the requirement.
const BONUS_PER_YEAR: f64 = 0.5;
/// Unmet-requirement scores are discounted by this factor.
const UNMET_DISCOUNT: f64 = 0.7;

/// Legacy experience score on a flat 0-100 scale.
///
/// No experience scores 0. Without a requirement, years scale at 15 points
/// each, capped at 100. Meeting the requirement starts at 80 with 5 points
/// per extra year; falling short scores proportionally with a floor of 20
/// so marginal candidates are not zeroed out.
pub fn experience_score(exp_years: f64, min_required: Option<f64>) -> f64 {
    if exp_years <= 0.0 {
        return 0.0;
    }

    let required = match min_required {
        Some(r) if r > 0.0 => r,
        _ => return round2((exp_years * 15.0).min(100.0)),
    };

    if exp_years >= required {
        round2((80.0 + (exp_years - required) * 5.0).min(100.0))
    } else {
        let pct = exp_years / required.max(1.0);
        round2((100.0 * pct).max(20.0))
    }
}

/// Advanced experience report against a per-dimension max.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceReport {
    pub experience_score: f64,
    pub explanation: String,
    pub meet_requirement: bool,
    pub candidate_years: f64,
    pub required_years: Option<f64>,
    pub success: bool,
}

/// Advanced experience score. Missing data degrades the score to 0 with an
/// explanation, never an error.
pub fn advanced_experience_score(
    candidate_years: f64,
    required_years: Option<f64>,
    max_score: f64,
) -> ExperienceReport {
    if candidate_years <= 0.0 {
        return ExperienceReport {
            experience_score: 0.0,
            explanation: "No work experience found in resume.".to_string(),
            meet_requirement: false,
            candidate_years,
            required_years,
            success: true,
        };
    }

    let required = match required_years {
        Some(r) if r > 0.0 => r,
        _ => {
            let score = (candidate_years * 3.0).min(max_score);
            return ExperienceReport {
                experience_score: round2(score),
                explanation: format!("Candidate has {candidate_years} years of experience."),
                meet_requirement: true,
                candidate_years,
                required_years,
                success: true,
            };
        }
    };

    let (score, explanation, meet_requirement) = if candidate_years >= required {
        let bonus_years = candidate_years - required;
        let bonus = (bonus_years * BONUS_PER_YEAR).min(max_score * BONUS_SHARE);
        let score = max_score * BASE_SHARE + bonus;

        let explanation = if bonus_years == 0.0 {
            format!("Meets requirement exactly with {candidate_years} years of experience.")
        } else if bonus_years <= 2.0 {
            format!("Good fit with {candidate_years} years ({bonus_years} years above requirement).")
        } else {
            format!(
                "Excellent fit with {candidate_years} years ({bonus_years} years above requirement). Senior level candidate."
            )
        };
        (score, explanation, true)
    } else {
        let score = max_score * (candidate_years / required) * UNMET_DISCOUNT;
        let gap = required - candidate_years;
        let explanation = format!(
            "Below requirement by {gap} year(s). Has {candidate_years} years, needs {required} years."
        );
        (score, explanation, false)
    };

    ExperienceReport {
        experience_score: score.clamp(0.0, max_score).round(),
        explanation,
        meet_requirement,
        candidate_years,
        required_years,
        success: true,
    }
}
