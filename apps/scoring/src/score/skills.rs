//! Skill dimension: legacy required-skills ratio and the advanced
//! core/optional split with missing-core penalties.

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::score::round2;
use crate::skills::{expand_skill, find_skill_in_resume, MatchType};
use crate::text::{normalize, tokenize};

/// Share of the advanced max awarded for core skills; the rest is optional.
const CORE_WEIGHT: f64 = 0.70;
const OPTIONAL_WEIGHT: f64 = 0.30;
/// Points deducted per missing core skill, after the ratio is applied.
const MISSING_CORE_PENALTY: f64 = 2.0;
/// Resumes shorter than this cannot be matched meaningfully.
const MIN_TEXT_LEN: usize = 20;

/// Legacy outcome: a 0-100 ratio score plus the skills that did not hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchOutcome {
    pub score: f64,
    pub missing_skills: Vec<String>,
}

/// Legacy skill score: `100 x hits / required.len()`, where a hit is any
/// synonym-expanded variant appearing as a substring or token. Keyword
/// tier only; the semantic-adjacency tier belongs to the advanced path.
/// Empty list scores 0.
pub fn skill_match_score(resume_text: &str, required_skills: &[String]) -> SkillMatchOutcome {
    let txt = normalize(resume_text);
    let toks = tokenize(resume_text);

    let mut hits = 0usize;
    let mut missing_skills = Vec::new();

    for skill in required_skills {
        let found = expand_skill(skill)
            .iter()
            .any(|v| txt.contains(v.as_str()) || toks.iter().any(|t| t == v));
        if found {
            hits += 1;
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let score = if required_skills.is_empty() {
        0.0
    } else {
        round2(100.0 * hits as f64 / required_skills.len() as f64)
    };

    SkillMatchOutcome {
        score,
        missing_skills,
    }
}

/// Per-skill row in the advanced report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDetail {
    pub skill: String,
    pub matched: bool,
    pub match_type: Option<MatchType>,
    pub matched_terms: Vec<String>,
}

/// Full advanced skill-matching report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    /// Final score on the `max_possible_score` scale, rounded.
    pub skill_score: f64,
    pub matched_core_skills: Vec<String>,
    pub missing_core_skills: Vec<String>,
    pub matched_optional_skills: Vec<String>,
    pub missing_optional_skills: Vec<String>,
    pub core_skills_score: f64,
    pub optional_skills_score: f64,
    pub core_match_percentage: u32,
    pub optional_match_percentage: u32,
    pub overall_match_percentage: u32,
    pub core_skill_details: Vec<SkillDetail>,
    pub optional_skill_details: Vec<SkillDetail>,
    pub total_core_skills: usize,
    pub total_optional_skills: usize,
    pub max_possible_score: f64,
    pub recommendation: String,
    pub success: bool,
    pub error: Option<String>,
}

impl SkillReport {
    /// Zeroed report for data-quality failures (text too short).
    fn failure(max_score: f64, message: &str) -> Self {
        Self {
            skill_score: 0.0,
            matched_core_skills: Vec::new(),
            missing_core_skills: Vec::new(),
            matched_optional_skills: Vec::new(),
            missing_optional_skills: Vec::new(),
            core_skills_score: 0.0,
            optional_skills_score: 0.0,
            core_match_percentage: 0,
            optional_match_percentage: 0,
            overall_match_percentage: 0,
            core_skill_details: Vec::new(),
            optional_skill_details: Vec::new(),
            total_core_skills: 0,
            total_optional_skills: 0,
            max_possible_score: max_score,
            recommendation: String::new(),
            success: false,
            error: Some(message.to_string()),
        }
    }
}

/// Advanced skill matching: core skills carry 70% of `max_score`, optional
/// skills 30%. Missing core skills are penalized 2 points each after the
/// match ratio is applied; an empty optional list gets full optional credit.
///
/// Supplying zero skills is a configuration contract violation and returns
/// `ScoringError::NoSkillsProvided`. A too-short resume is a data problem
/// and yields a zeroed `success = false` report instead.
pub fn advanced_skill_matching(
    resume_text: &str,
    core_skills: &[String],
    optional_skills: &[String],
    max_score: f64,
) -> Result<SkillReport, ScoringError> {
    if core_skills.is_empty() && optional_skills.is_empty() {
        return Err(ScoringError::NoSkillsProvided);
    }

    if resume_text.len() < MIN_TEXT_LEN {
        return Ok(SkillReport::failure(
            max_score,
            "Resume text is too short or empty",
        ));
    }

    let (matched_core, missing_core, core_details) = match_list(resume_text, core_skills);
    let (matched_optional, missing_optional, optional_details) =
        match_list(resume_text, optional_skills);

    let core_max = max_score * CORE_WEIGHT;
    let core_score = if core_skills.is_empty() {
        core_max
    } else {
        let ratio = matched_core.len() as f64 / core_skills.len() as f64;
        let penalty = missing_core.len() as f64 * MISSING_CORE_PENALTY;
        (core_max * ratio - penalty).max(0.0)
    };

    let optional_max = max_score * OPTIONAL_WEIGHT;
    let optional_score = if optional_skills.is_empty() {
        optional_max
    } else {
        optional_max * matched_optional.len() as f64 / optional_skills.len() as f64
    };

    let skill_score = (core_score + optional_score).clamp(0.0, max_score).round();

    let core_pct = percentage(matched_core.len(), core_skills.len());
    let optional_pct = percentage(matched_optional.len(), optional_skills.len());
    let overall_pct = percentage(
        matched_core.len() + matched_optional.len(),
        core_skills.len() + optional_skills.len(),
    );

    let recommendation = skill_recommendation(missing_core.len(), core_pct);

    Ok(SkillReport {
        skill_score,
        matched_core_skills: matched_core,
        missing_core_skills: missing_core,
        matched_optional_skills: matched_optional,
        missing_optional_skills: missing_optional,
        core_skills_score: round2(core_score),
        optional_skills_score: round2(optional_score),
        core_match_percentage: core_pct,
        optional_match_percentage: optional_pct,
        overall_match_percentage: overall_pct,
        core_skill_details: core_details,
        optional_skill_details: optional_details,
        total_core_skills: core_skills.len(),
        total_optional_skills: optional_skills.len(),
        max_possible_score: max_score,
        recommendation,
        success: true,
        error: None,
    })
}

fn match_list(
    resume_text: &str,
    skills: &[String],
) -> (Vec<String>, Vec<String>, Vec<SkillDetail>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut details = Vec::new();

    for skill in skills {
        let result = find_skill_in_resume(resume_text, skill);
        if result.found {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
        details.push(SkillDetail {
            skill: skill.clone(),
            matched: result.found,
            match_type: result.match_type,
            matched_terms: result.matched_terms,
        });
    }

    (matched, missing, details)
}

/// Match ratio as a whole percentage; an empty list counts as full credit.
fn percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        100
    } else {
        (matched as f64 / total as f64 * 100.0).round() as u32
    }
}

fn skill_recommendation(missing_core: usize, core_pct: u32) -> String {
    if missing_core == 0 {
        "Strong candidate - All core skills present. Proceed to interview.".to_string()
    } else if missing_core <= 1 && core_pct >= 75 {
        "Good candidate - Most core skills present. Consider for interview.".to_string()
    } else if missing_core <= 2 && core_pct >= 60 {
        "Potential candidate - Some core skills missing. Review carefully.".to_string()
    } else {
        "Weak candidate - Multiple core skills missing. May not meet requirements.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_legacy_score_is_hit_ratio() {
        let outcome = skill_match_score(
            "Senior engineer: React, Redux and TypeScript",
            &skills(&["react", "node", "aws"]),
        );
        assert_eq!(outcome.score, 33.33);
        assert_eq!(outcome.missing_skills, vec!["node", "aws"]);
    }

    #[test]
    fn test_legacy_empty_required_list_scores_zero() {
        let outcome = skill_match_score("any resume text", &[]);
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.missing_skills.is_empty());
    }

    #[test]
    fn test_legacy_synonym_counts_as_hit() {
        let outcome = skill_match_score("Shipped features in JavaScript", &skills(&["js"]));
        assert_eq!(outcome.score, 100.0);
    }

    #[test]
    fn test_legacy_ignores_semantic_adjacency() {
        // "frontend", "jsx" and "component" are react-adjacent terms; only
        // the advanced path credits them. The legacy path is keyword-only.
        let outcome = skill_match_score("frontend jsx component work", &skills(&["react"]));
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.missing_skills, vec!["react"]);

        let advanced =
            advanced_skill_matching("frontend jsx component work", &skills(&["react"]), &[], 40.0)
                .unwrap();
        assert_eq!(advanced.matched_core_skills, vec!["react"]);
    }

    #[test]
    fn test_advanced_zero_skills_is_hard_error() {
        let err = advanced_skill_matching("long enough resume text here", &[], &[], 40.0);
        assert!(matches!(err, Err(ScoringError::NoSkillsProvided)));
    }

    #[test]
    fn test_advanced_short_text_degrades_to_failure_report() {
        let report = advanced_skill_matching("too short", &skills(&["react"]), &[], 40.0).unwrap();
        assert!(!report.success);
        assert_eq!(report.skill_score, 0.0);
        assert!(report.error.is_some());
    }

    #[test]
    fn test_advanced_matching_splits_core_and_optional() {
        let report = advanced_skill_matching(
            "Worked with react redux javascript on shipping dashboards",
            &skills(&["react", "node"]),
            &skills(&["docker"]),
            40.0,
        )
        .unwrap();

        assert_eq!(report.matched_core_skills, vec!["react"]);
        assert_eq!(report.missing_core_skills, vec!["node"]);
        assert_eq!(report.missing_optional_skills, vec!["docker"]);
        // core: 28 * 0.5 - 2 = 12; optional: 0; rounded total 12
        assert_eq!(report.skill_score, 12.0);
        assert_eq!(report.core_match_percentage, 50);
        assert_eq!(report.optional_match_percentage, 0);
    }

    #[test]
    fn test_advanced_full_core_match_no_penalty() {
        let report = advanced_skill_matching(
            "react and node services in production",
            &skills(&["react", "node"]),
            &[],
            40.0,
        )
        .unwrap();
        // core: full 28, optional list empty: full 12
        assert_eq!(report.skill_score, 40.0);
        assert!(report.recommendation.starts_with("Strong candidate"));
    }

    #[test]
    fn test_advanced_score_clamped_to_max() {
        let report = advanced_skill_matching(
            "react node docker aws python java",
            &skills(&["react"]),
            &skills(&["docker"]),
            40.0,
        )
        .unwrap();
        assert!(report.skill_score <= 40.0);
        assert_eq!(report.overall_match_percentage, 100);
    }

    #[test]
    fn test_semantic_hit_recorded_in_details() {
        let report = advanced_skill_matching(
            "Deployed container workloads with kubernetes pipelines",
            &skills(&["docker"]),
            &[],
            40.0,
        )
        .unwrap();
        assert_eq!(report.matched_core_skills, vec!["docker"]);
        let detail = &report.core_skill_details[0];
        assert_eq!(detail.match_type, Some(MatchType::Semantic));
        assert!(detail.matched_terms.contains(&"container".to_string()));
    }
}
