//! Batch aggregator: scores every candidate, folds the dimensions into one
//! weighted total, then sorts and ranks the batch.
//!
//! Candidates are independent; the only cross-candidate step is the final
//! sort and rank reassignment, which runs strictly after every total is
//! computed. The similarity estimator is the single suspension point and
//! its failures never abort the batch.

use tracing::debug;

use crate::errors::ScoringError;
use crate::models::{CandidateResult, ExtractedResume, ScoringOptions};
use crate::score::{
    advanced_education_score, advanced_experience_score, advanced_resume_quality_score,
    advanced_skill_matching, ats_format_score, education_match_score, experience_score, round2,
    skill_match_score,
};
use crate::similarity::{job_role_similarity, EmbeddingProvider, HuggingFaceProvider};

/// Per-dimension maxima for the advanced scorers. Sub-scores are reported
/// on these scales inside the detail blocks and normalized to 0-100 for
/// aggregation.
const SKILL_MAX: f64 = 40.0;
const EXPERIENCE_MAX: f64 = 15.0;
const EDUCATION_MAX: f64 = 10.0;
const QUALITY_MAX: f64 = 5.0;

/// Skill/ATS blend used for job relevance when no AI similarity exists.
const RELEVANCE_SKILL_WEIGHT: f64 = 0.7;
const RELEVANCE_ATS_WEIGHT: f64 = 0.3;

/// Scores a batch of extracted resumes against one set of options and
/// returns results ranked by total score.
///
/// Builds the remote embedding provider from
/// `options.huggingface_api_key` when present; everything else is pure
/// computation. Errors only on configuration contract violations.
pub async fn analyze_resume_batch(
    resumes: &[ExtractedResume],
    options: &ScoringOptions,
) -> Result<Vec<CandidateResult>, ScoringError> {
    let remote = options
        .huggingface_api_key
        .clone()
        .map(HuggingFaceProvider::new);
    analyze_resume_batch_with(
        resumes,
        options,
        remote.as_ref().map(|p| p as &dyn EmbeddingProvider),
    )
    .await
}

/// Batch scoring with an explicit embedding source, so callers and tests
/// can substitute a stub for the network-bound provider.
pub async fn analyze_resume_batch_with(
    resumes: &[ExtractedResume],
    options: &ScoringOptions,
    remote: Option<&dyn EmbeddingProvider>,
) -> Result<Vec<CandidateResult>, ScoringError> {
    let mut results = Vec::with_capacity(resumes.len());

    for (index, resume) in resumes.iter().enumerate() {
        results.push(score_candidate(index, resume, options, remote).await?);
    }

    // Stable sort: candidates with equal totals keep their input order.
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    for (index, result) in results.iter_mut().enumerate() {
        result.rank = index + 1;
    }

    debug!(candidates = results.len(), "batch scoring complete");
    Ok(results)
}

async fn score_candidate(
    index: usize,
    resume: &ExtractedResume,
    options: &ScoringOptions,
    remote: Option<&dyn EmbeddingProvider>,
) -> Result<CandidateResult, ScoringError> {
    let txt = resume.text.as_str();

    let use_advanced_skills = options.use_advanced_skill_matching
        && (!options.core_skills.is_empty() || !options.optional_skills.is_empty());

    let (skills_match, missing_skills, advanced_skills) = if use_advanced_skills {
        let report = advanced_skill_matching(
            txt,
            &options.core_skills,
            &options.optional_skills,
            SKILL_MAX,
        )?;
        let mut missing = report.missing_core_skills.clone();
        missing.extend(report.missing_optional_skills.iter().cloned());
        let normalized = round2(report.skill_score / SKILL_MAX * 100.0);
        (normalized, missing, Some(report))
    } else {
        let outcome = skill_match_score(txt, &options.required_skills);
        (outcome.score, outcome.missing_skills, None)
    };

    let (experience, education, ats, advanced_experience, advanced_education, advanced_quality) =
        if options.use_advanced_scoring {
            let exp = advanced_experience_score(
                resume.experience_years,
                options.min_experience_years,
                EXPERIENCE_MAX,
            );
            let edu = advanced_education_score(
                resume.degree,
                &resume.branch,
                options.min_degree,
                &options.preferred_branches,
                EDUCATION_MAX,
            );
            let quality = advanced_resume_quality_score(
                txt,
                &resume.sections,
                &resume.contact,
                resume.images_count,
                resume.tables_count,
                QUALITY_MAX,
            );
            (
                round2(exp.experience_score / EXPERIENCE_MAX * 100.0),
                round2(edu.education_score / EDUCATION_MAX * 100.0),
                round2(quality.resume_quality_score / QUALITY_MAX * 100.0),
                Some(exp),
                Some(edu),
                Some(quality),
            )
        } else {
            (
                experience_score(resume.experience_years, options.min_experience_years),
                education_match_score(resume.degree, options.min_degree),
                ats_format_score(
                    txt,
                    resume.images_count,
                    resume.tables_count,
                    &resume.contact,
                    &resume.sections,
                ),
                None,
                None,
                None,
            )
        };

    let job_relevance = round2(skills_match * RELEVANCE_SKILL_WEIGHT + ats * RELEVANCE_ATS_WEIGHT);

    let ai_match = match &options.job_role_description {
        Some(description) => Some(job_role_similarity(txt, description, remote).await),
        None => None,
    };

    let weights = &options.weights;
    let weight_sum = weights.sum();
    let total = if weight_sum > 0.0 {
        round2(
            (skills_match * weights.skills
                + experience * weights.experience
                + education * weights.education
                + ats * weights.ats
                + job_relevance * weights.job_relevance)
                / weight_sum,
        )
    } else {
        0.0
    };

    let filename = if resume.filename.is_empty() {
        format!("resume_{}", index + 1)
    } else {
        resume.filename.clone()
    };
    let candidate_name = if resume.contact.name.is_empty() {
        "Unknown".to_string()
    } else {
        resume.contact.name.clone()
    };

    Ok(CandidateResult {
        rank: index + 1,
        filename,
        candidate_name,
        email: resume.contact.email.clone(),
        phone: resume.contact.phone.clone(),
        degree: resume.degree,
        experience_years: (resume.experience_years * 10.0).round() / 10.0,
        skills_match,
        education_match: education,
        experience_score: experience,
        ats_format_score: ats,
        job_relevance,
        ai_job_role_similarity: ai_match.as_ref().map(|m| m.job_role_similarity),
        ai_match_level: ai_match.as_ref().and_then(|m| m.match_level),
        ai_match_explanation: ai_match.as_ref().map(|m| m.explanation.clone()),
        ai_confidence: ai_match.as_ref().map(|m| m.confidence),
        total_score: total,
        missing_skills,
        summary: resume.summary.clone(),
        weights: weights.clone(),
        advanced_skills,
        advanced_experience,
        advanced_education,
        advanced_quality,
    })
}
