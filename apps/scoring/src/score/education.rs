//! Education dimension. All comparisons go through `Degree`'s ordering,
//! never through the degree strings.

use serde::{Deserialize, Serialize};

use crate::models::Degree;
use crate::score::round2;
use crate::text::normalize;

/// Share of the advanced max granted for meeting the degree requirement;
/// the branch match carries the rest.
const DEGREE_SHARE: f64 = 0.7;
const BRANCH_SHARE: f64 = 0.3;
/// Consolation share when the degree requirement is unmet.
const UNMET_SHARE: f64 = 0.3;
/// Per-level points when no requirement is configured.
const LEVEL_POINTS: f64 = 2.5;

/// Legacy education score: 100 when no requirement, 0 without a degree,
/// 100 when the level meets the requirement, else 50.
pub fn education_match_score(resume_degree: Degree, min_degree: Degree) -> f64 {
    if min_degree == Degree::None {
        return 100.0;
    }
    if !resume_degree.is_recognized() {
        return 0.0;
    }
    if resume_degree >= min_degree {
        100.0
    } else {
        50.0
    }
}

/// Advanced education report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationReport {
    pub education_score: f64,
    pub explanation: String,
    pub meet_requirement: bool,
    pub degree_match: bool,
    pub branch_match: bool,
    pub candidate_degree: Degree,
    pub candidate_branch: String,
    pub required_degree: Degree,
    pub success: bool,
}

/// Advanced education score: degree-level credit plus branch credit.
///
/// Exceeding the required level changes only the explanation text, not the
/// score. Branch matching is a case/space-normalized substring test in
/// either direction; an absent preference list auto-grants branch credit.
pub fn advanced_education_score(
    resume_degree: Degree,
    resume_branch: &str,
    required_degree: Degree,
    preferred_branches: &[String],
    max_score: f64,
) -> EducationReport {
    if !resume_degree.is_recognized() {
        return EducationReport {
            education_score: 0.0,
            explanation: "No educational qualification found in resume.".to_string(),
            meet_requirement: false,
            degree_match: false,
            branch_match: false,
            candidate_degree: resume_degree,
            candidate_branch: branch_label(resume_branch),
            required_degree,
            success: true,
        };
    }

    if required_degree == Degree::None {
        let score = f64::from(resume_degree.level()) * LEVEL_POINTS;
        return EducationReport {
            education_score: round2(score),
            explanation: format!("Candidate has {resume_degree} degree."),
            meet_requirement: true,
            degree_match: true,
            branch_match: true,
            candidate_degree: resume_degree,
            candidate_branch: branch_label(resume_branch),
            required_degree,
            success: true,
        };
    }

    let mut score;
    let mut explanation;
    let degree_match = resume_degree >= required_degree;

    if degree_match {
        score = max_score * DEGREE_SHARE;
        explanation = if resume_degree > required_degree {
            format!("Exceeds requirement with {resume_degree} (required: {required_degree}).")
        } else {
            format!("Meets requirement with {resume_degree}.")
        };
    } else {
        score = max_score * UNMET_SHARE;
        explanation = format!("Below requirement. Has {resume_degree}, needs {required_degree}.");
    }

    let mut branch_match = false;
    if !preferred_branches.is_empty() && !resume_branch.is_empty() {
        let branch_norm = normalize(resume_branch);
        for preferred in preferred_branches {
            let pref_norm = normalize(preferred);
            if branch_norm.contains(&pref_norm) || pref_norm.contains(&branch_norm) {
                branch_match = true;
                score += max_score * BRANCH_SHARE;
                explanation.push_str(&format!(" Relevant field: {resume_branch}."));
                break;
            }
        }
        if !branch_match {
            explanation.push_str(&format!(" Different field: {resume_branch}."));
        }
    } else {
        branch_match = true;
        score += max_score * BRANCH_SHARE;
    }

    EducationReport {
        education_score: score.clamp(0.0, max_score).round(),
        explanation,
        meet_requirement: degree_match,
        degree_match,
        branch_match,
        candidate_degree: resume_degree,
        candidate_branch: branch_label(resume_branch),
        required_degree,
        success: true,
    }
}

fn branch_label(branch: &str) -> String {
    if branch.is_empty() {
        "Not specified".to_string()
    } else {
        branch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_no_requirement_passes_flat() {
        assert_eq!(education_match_score(Degree::None, Degree::None), 100.0);
    }

    #[test]
    fn test_legacy_no_degree_scores_zero() {
        assert_eq!(education_match_score(Degree::None, Degree::Bachelors), 0.0);
    }

    #[test]
    fn test_legacy_met_and_unmet() {
        assert_eq!(education_match_score(Degree::Masters, Degree::Bachelors), 100.0);
        assert_eq!(education_match_score(Degree::Diploma, Degree::Masters), 50.0);
    }

    #[test]
    fn test_advanced_degree_and_branch_both_match() {
        let report = advanced_education_score(
            Degree::Masters,
            "CS",
            Degree::Bachelors,
            &["CS".to_string()],
            10.0,
        );
        assert!(report.degree_match);
        assert!(report.branch_match);
        assert_eq!(report.education_score, 10.0);
        assert!(report.explanation.contains("Exceeds requirement"));
    }

    #[test]
    fn test_advanced_exceeding_changes_only_explanation() {
        let exact =
            advanced_education_score(Degree::Bachelors, "", Degree::Bachelors, &[], 10.0);
        let above = advanced_education_score(Degree::PhD, "", Degree::Bachelors, &[], 10.0);
        assert_eq!(exact.education_score, above.education_score);
        assert!(exact.explanation.contains("Meets requirement"));
        assert!(above.explanation.contains("Exceeds requirement"));
    }

    #[test]
    fn test_advanced_no_degree() {
        let report = advanced_education_score(Degree::None, "CS", Degree::Bachelors, &[], 10.0);
        assert_eq!(report.education_score, 0.0);
        assert!(!report.degree_match);
        assert!(!report.branch_match);
    }

    #[test]
    fn test_advanced_no_requirement_scores_per_level() {
        let report = advanced_education_score(Degree::Masters, "", Degree::None, &[], 10.0);
        assert_eq!(report.education_score, 7.5);
        assert!(report.meet_requirement);
    }

    #[test]
    fn test_advanced_branch_substring_either_direction() {
        let report = advanced_education_score(
            Degree::Bachelors,
            "Computer Science",
            Degree::Bachelors,
            &["science".to_string()],
            10.0,
        );
        assert!(report.branch_match);
        assert!(report.explanation.contains("Relevant field"));
    }

    #[test]
    fn test_advanced_branch_mismatch_keeps_degree_credit() {
        let report = advanced_education_score(
            Degree::Bachelors,
            "History",
            Degree::Bachelors,
            &["Computer Science".to_string()],
            10.0,
        );
        assert!(!report.branch_match);
        assert_eq!(report.education_score, 7.0);
        assert!(report.explanation.contains("Different field"));
    }

    #[test]
    fn test_advanced_unmet_degree_gets_consolation_share() {
        let report =
            advanced_education_score(Degree::Diploma, "", Degree::Masters, &[], 10.0);
        // 0.3 * 10 unmet + 0.3 * 10 auto branch = 6
        assert_eq!(report.education_score, 6.0);
        assert!(!report.meet_requirement);
    }
}
