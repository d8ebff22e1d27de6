//! Resume quality / ATS-format dimension.
//!
//! The legacy formula works additively on a flat 0-100 scale; the advanced
//! formula composes independent penalty/bonus terms against a small max.
//! The two are intentionally not reconciled: they use different scales and
//! penalty weights and both remain selectable policies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ContactInfo;
use crate::score::round2;

/// Sections whose presence counts toward completeness, in report order.
const REQUIRED_SECTIONS: [&str; 4] = ["summary", "skills", "experience", "education"];

/// Vocabulary whose density signals a substantive, ATS-parseable resume.
const ACTION_KEYWORDS: &[&str] = &[
    "developed", "managed", "led", "created", "implemented", "designed", "built", "achieved",
];
const TECHNICAL_KEYWORDS: &[&str] = &[
    "software", "application", "system", "technology", "platform", "framework",
];
const RESULT_KEYWORDS: &[&str] = &[
    "improved", "increased", "reduced", "optimized", "enhanced", "delivered",
];

/// Legacy ATS-format score on a flat 0-100 scale: starts at 100, subtracts
/// for images/tables/missing contact/short text, adds per present section.
pub fn ats_format_score(
    text: &str,
    images_count: u32,
    tables_count: u32,
    contact: &ContactInfo,
    sections: &HashMap<String, bool>,
) -> f64 {
    let mut score = 100.0;
    score -= (f64::from(images_count) * 5.0).min(30.0);
    score -= (f64::from(tables_count) * 5.0).min(20.0);

    let good_sections = REQUIRED_SECTIONS
        .iter()
        .filter(|s| sections.get(**s).copied().unwrap_or(false))
        .count();
    score += good_sections as f64 * 2.5;

    if contact.email.is_empty() || contact.phone.is_empty() {
        score -= 15.0;
    }
    if text.trim().len() < 400 {
        score -= 25.0;
    }

    round2(score.clamp(0.0, 100.0))
}

/// Structural checks accompanying the advanced quality score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityChecks {
    pub sections_present: Vec<String>,
    pub sections_missing: Vec<String>,
    pub has_email: bool,
    pub has_phone: bool,
    pub keyword_count: usize,
    pub keyword_density_pct: f64,
    pub images_count: u32,
    pub tables_count: u32,
    pub ats_compliant: bool,
    pub word_count: usize,
    pub length_appropriate: bool,
}

/// Advanced quality report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub resume_quality_score: f64,
    pub explanation: String,
    pub quality_percentage: u32,
    pub checks: QualityChecks,
    pub issues: Vec<String>,
    pub success: bool,
    pub error: Option<String>,
}

/// Advanced resume quality score: additive model over section completeness
/// (0.25 of max), contact completeness (0.5 each for email/phone), keyword
/// density (0.20 of max, density scaled x50 and clamped), format penalties
/// (images, excess tables, special-character ratio) and a length bonus.
pub fn advanced_resume_quality_score(
    resume_text: &str,
    sections: &HashMap<String, bool>,
    contact: &ContactInfo,
    images_count: u32,
    tables_count: u32,
    max_score: f64,
) -> QualityReport {
    if resume_text.len() < 50 {
        return QualityReport {
            resume_quality_score: 0.0,
            explanation: "Resume text is too short or empty.".to_string(),
            quality_percentage: 0,
            checks: QualityChecks::default(),
            issues: Vec::new(),
            success: false,
            error: Some("Resume text is too short or empty.".to_string()),
        };
    }

    let mut score = 0.0;
    let mut checks = QualityChecks {
        images_count,
        tables_count,
        ..QualityChecks::default()
    };
    let mut issues = Vec::new();

    // Section completeness: proportional share of 0.25 * max.
    let present: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|s| sections.get(**s).copied().unwrap_or(false))
        .map(|s| s.to_string())
        .collect();
    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|s| !sections.get(**s).copied().unwrap_or(false))
        .map(|s| s.to_string())
        .collect();
    score += present.len() as f64 / REQUIRED_SECTIONS.len() as f64 * (max_score * 0.25);
    if !missing.is_empty() {
        issues.push(format!("Missing sections: {}", missing.join(", ")));
    }
    checks.sections_present = present;
    checks.sections_missing = missing;

    // Contact completeness on a 0-1 sub-scale.
    checks.has_email = !contact.email.is_empty();
    checks.has_phone = !contact.phone.is_empty();
    if checks.has_email {
        score += 0.5;
    }
    if checks.has_phone {
        score += 0.5;
    }
    if !checks.has_email || !checks.has_phone {
        issues.push("Incomplete contact information".to_string());
    }

    // Keyword density over the action/technical/result vocabularies.
    let word_count = resume_text.split_whitespace().count();
    let text_lower = resume_text.to_lowercase();
    let keyword_count = ACTION_KEYWORDS
        .iter()
        .chain(TECHNICAL_KEYWORDS)
        .chain(RESULT_KEYWORDS)
        .filter(|kw| text_lower.contains(**kw))
        .count();
    let keyword_density = keyword_count as f64 / word_count.max(1) as f64;
    score += (keyword_density * 50.0).min(1.0) * (max_score * 0.20);

    checks.keyword_count = keyword_count;
    checks.keyword_density_pct = round2(keyword_density * 100.0);
    if keyword_count < 5 {
        issues.push("Low keyword density (use more action verbs and technical terms)".to_string());
    }

    // Format penalties deducted from a 0.20 * max allowance, floored at zero.
    let mut format_score = max_score * 0.20;
    if images_count > 0 {
        format_score -= (f64::from(images_count) * 0.1).min(0.5);
        issues.push(format!("Contains {images_count} image(s) - may not be ATS-friendly"));
    }
    if tables_count > 2 {
        format_score -= (f64::from(tables_count - 2) * 0.1).min(0.3);
        issues.push(format!("Contains {tables_count} tables - may cause parsing issues"));
    }
    let special_chars = resume_text.chars().filter(|c| is_special(*c)).count();
    let special_ratio = special_chars as f64 / resume_text.chars().count().max(1) as f64;
    if special_ratio > 0.05 {
        format_score -= 0.2;
        issues.push("Too many special characters".to_string());
    }
    score += format_score.max(0.0);
    checks.ats_compliant = images_count == 0 && tables_count <= 2;

    // Length appropriateness bonus.
    checks.word_count = word_count;
    checks.length_appropriate = (300..=1500).contains(&word_count);
    score += if checks.length_appropriate {
        max_score * 0.15
    } else {
        max_score * 0.05
    };
    if word_count < 300 {
        issues.push("Resume is too short (add more details)".to_string());
    } else if word_count > 1500 {
        issues.push("Resume is too long (be more concise)".to_string());
    }

    let final_score = score.clamp(0.0, max_score);
    let percentage = (final_score / max_score * 100.0).round() as u32;
    let mut explanation = quality_tier_text(percentage);
    if !issues.is_empty() {
        explanation.push_str(&format!(" Issues: {}.", issues.join("; ")));
    }

    QualityReport {
        resume_quality_score: final_score.round(),
        explanation,
        quality_percentage: percentage,
        checks,
        issues,
        success: true,
        error: None,
    }
}

/// Characters outside word chars, whitespace and common resume punctuation.
fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || ".,;:()@-".contains(c))
}

fn quality_tier_text(percentage: u32) -> String {
    if percentage >= 80 {
        format!("Excellent resume quality ({percentage}%). Well-structured and ATS-friendly.")
    } else if percentage >= 60 {
        format!("Good resume quality ({percentage}%). Minor improvements possible.")
    } else if percentage >= 40 {
        format!("Average resume quality ({percentage}%). Several improvements needed.")
    } else {
        format!("Poor resume quality ({percentage}%). Major improvements required.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_sections() -> HashMap<String, bool> {
        REQUIRED_SECTIONS
            .iter()
            .map(|s| (s.to_string(), true))
            .collect()
    }

    fn full_contact() -> ContactInfo {
        ContactInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
        }
    }

    fn substantive_text() -> String {
        let sentence =
            "Developed and delivered a software platform that improved system throughput. ";
        sentence.repeat(40)
    }

    #[test]
    fn test_legacy_clean_resume_scores_high() {
        let score = ats_format_score(&substantive_text(), 0, 0, &full_contact(), &full_sections());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_legacy_penalties_are_capped() {
        let score = ats_format_score(&substantive_text(), 20, 20, &full_contact(), &full_sections());
        // 100 - 30 - 20 + 10 = 60
        assert_eq!(score, 60.0);
    }

    #[test]
    fn test_legacy_missing_contact_and_short_text() {
        let score = ats_format_score("short", 0, 0, &ContactInfo::default(), &HashMap::new());
        // 100 - 15 - 25 = 60
        assert_eq!(score, 60.0);
    }

    #[test]
    fn test_legacy_all_penalties_stack() {
        let score = ats_format_score("", 20, 20, &ContactInfo::default(), &HashMap::new());
        // 100 - 30 - 20 - 15 - 25 = 10
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_advanced_short_text_fails_softly() {
        let report = advanced_resume_quality_score(
            "tiny",
            &HashMap::new(),
            &ContactInfo::default(),
            0,
            0,
            5.0,
        );
        assert!(!report.success);
        assert_eq!(report.resume_quality_score, 0.0);
    }

    #[test]
    fn test_advanced_well_formed_resume_scores_full() {
        let report = advanced_resume_quality_score(
            &substantive_text(),
            &full_sections(),
            &full_contact(),
            0,
            0,
            5.0,
        );
        // sections 1.25 + contact 1.0 + keywords 0.75 + format 1.0 + length 0.75
        assert_eq!(report.resume_quality_score, 5.0);
        assert_eq!(report.quality_percentage, 95);
        assert!(report.checks.ats_compliant);
        assert!(report.checks.length_appropriate);
    }

    #[test]
    fn test_advanced_image_and_table_penalties() {
        let report = advanced_resume_quality_score(
            &substantive_text(),
            &full_sections(),
            &full_contact(),
            3,
            5,
            5.0,
        );
        assert!(!report.checks.ats_compliant);
        assert!(report.issues.iter().any(|i| i.contains("3 image(s)")));
        assert!(report.issues.iter().any(|i| i.contains("5 tables")));
        // format term: 1.0 - 0.3 - 0.3 = 0.4; total 4.15 rounds to 4
        assert_eq!(report.resume_quality_score, 4.0);
    }

    #[test]
    fn test_advanced_missing_sections_reported() {
        let mut sections = full_sections();
        sections.insert("summary".to_string(), false);
        sections.remove("skills");
        let report = advanced_resume_quality_score(
            &substantive_text(),
            &sections,
            &full_contact(),
            0,
            0,
            5.0,
        );
        assert_eq!(
            report.checks.sections_missing,
            vec!["summary".to_string(), "skills".to_string()]
        );
        assert!(report.issues.iter().any(|i| i.starts_with("Missing sections")));
    }

    #[test]
    fn test_advanced_special_character_penalty() {
        let noisy = format!("{}{}", substantive_text(), "*^~|".repeat(60));
        let clean_report = advanced_resume_quality_score(
            &substantive_text(),
            &full_sections(),
            &full_contact(),
            0,
            0,
            5.0,
        );
        let noisy_report =
            advanced_resume_quality_score(&noisy, &full_sections(), &full_contact(), 0, 0, 5.0);
        assert!(noisy_report.issues.iter().any(|i| i.contains("special characters")));
        assert!(
            noisy_report.resume_quality_score <= clean_report.resume_quality_score,
            "special characters must not raise the score"
        );
    }

    #[test]
    fn test_advanced_score_never_exceeds_max() {
        let report = advanced_resume_quality_score(
            &substantive_text(),
            &full_sections(),
            &full_contact(),
            0,
            0,
            5.0,
        );
        assert!(report.resume_quality_score <= 5.0);
    }
}
