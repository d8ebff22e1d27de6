// Dimension scorers. Each dimension ships two selectable policies: a legacy
// formula on a flat 0-100 scale and an advanced formula against a per-
// dimension max. The pairs stay separate functions so both remain
// independently testable; callers pick via ScoringOptions flags.

pub mod education;
pub mod experience;
pub mod quality;
pub mod skills;

pub use education::{advanced_education_score, education_match_score, EducationReport};
pub use experience::{advanced_experience_score, experience_score, ExperienceReport};
pub use quality::{advanced_resume_quality_score, ats_format_score, QualityChecks, QualityReport};
pub use skills::{advanced_skill_matching, skill_match_score, SkillMatchOutcome, SkillReport};

/// Rounds to two decimals, the precision every 0-100 score is reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.0), 0.0);
    }
}
