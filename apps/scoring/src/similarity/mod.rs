//! Job-role similarity estimation.
//!
//! A resume's professional summary and the job description are compared as
//! vectors (remote embedding when available, local frequency vectors
//! otherwise) and the result is classified into a match tier. Remote
//! failures never propagate: the estimator degrades to the local path for
//! that candidate only.

pub mod embedding;
pub mod summary;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::score::round2;

pub use embedding::{
    local_embedding, EmbeddingError, EmbeddingProvider, HuggingFaceProvider, LocalTermFrequency,
};
pub use summary::extract_professional_summary;

/// Inputs below this length cannot be compared meaningfully.
const MIN_COMPARE_LEN: usize = 20;
/// Blend weights for the local path: cosine over frequency vectors plus a
/// lexical-overlap correction.
const COSINE_WEIGHT: f64 = 0.7;
const OVERLAP_WEIGHT: f64 = 0.3;
/// Tokens this short are ignored by the lexical overlap.
const OVERLAP_MIN_TOKEN_LEN: usize = 4;

/// Match tier for a similarity estimate. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Partial Match")]
    Partial,
    #[serde(rename = "Weak Match")]
    Weak,
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Partial => "Partial Match",
            MatchLevel::Weak => "Weak Match",
        };
        f.write_str(s)
    }
}

/// Confidence mirrors the tier breakpoints at 0.65 and 0.45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
    None,
}

/// Result of one similarity estimation. Failures are explicit result
/// values, never errors: `success = false` with a zeroed similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRoleMatch {
    pub job_role_similarity: f64,
    pub match_level: Option<MatchLevel>,
    pub explanation: String,
    pub confidence: Confidence,
    pub success: bool,
    pub error: Option<String>,
}

impl JobRoleMatch {
    fn failure(message: &str) -> Self {
        Self {
            job_role_similarity: 0.0,
            match_level: None,
            explanation: message.to_string(),
            confidence: Confidence::None,
            success: false,
            error: Some(message.to_string()),
        }
    }
}

/// Standard cosine similarity. Returns 0 for mismatched lengths or a
/// zero-norm operand; never divides by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Jaccard overlap of the token sets of two texts (tokens over 3 chars).
pub fn lexical_overlap(a: &str, b: &str) -> f64 {
    let set_of = |text: &str| {
        text.to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() >= OVERLAP_MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect::<std::collections::HashSet<_>>()
    };

    let set_a = set_of(a);
    let set_b = set_of(b);
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// Tier classification, inclusive lower bounds.
pub fn classify_match_level(similarity: f64) -> MatchLevel {
    if similarity >= 0.80 {
        MatchLevel::Excellent
    } else if similarity >= 0.65 {
        MatchLevel::Good
    } else if similarity >= 0.45 {
        MatchLevel::Partial
    } else {
        MatchLevel::Weak
    }
}

fn confidence_for(similarity: f64) -> Confidence {
    if similarity >= 0.65 {
        Confidence::High
    } else if similarity >= 0.45 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn match_explanation(similarity: f64) -> String {
    let percentage = similarity * 100.0;
    if similarity >= 0.80 {
        format!(
            "Excellent alignment ({percentage:.1}%) detected. Strong semantic match indicates highly relevant experience and skills. Recommended for immediate interview."
        )
    } else if similarity >= 0.65 {
        format!(
            "Good compatibility ({percentage:.1}%) found. Professional background aligns well with job requirements. Consider for interview shortlist."
        )
    } else if similarity >= 0.45 {
        format!(
            "Moderate alignment ({percentage:.1}%) present. Some relevant experience found, but may require additional skill development. Review for potential fit."
        )
    } else {
        format!(
            "Limited match ({percentage:.1}%) with the position. Minimal overlap with required competencies. May not be ideal fit for this role."
        )
    }
}

/// Estimates how well a resume aligns with a job description.
///
/// Remote path: when a provider is supplied and both texts embed
/// successfully, similarity is the cosine of the two embeddings. Any other
/// outcome takes the local path: frequency vectors padded to equal length,
/// cosine blended with lexical overlap. The estimate is clamped to [0, 1].
pub async fn job_role_similarity(
    resume_text: &str,
    job_description: &str,
    remote: Option<&dyn EmbeddingProvider>,
) -> JobRoleMatch {
    if resume_text.chars().count() < MIN_COMPARE_LEN {
        return JobRoleMatch::failure("Resume text is too short or empty");
    }
    if job_description.chars().count() < MIN_COMPARE_LEN {
        return JobRoleMatch::failure("Job role description is too short or empty");
    }

    let resume_summary = extract_professional_summary(resume_text);
    if resume_summary.chars().count() < MIN_COMPARE_LEN {
        return JobRoleMatch::failure(
            "Unable to extract meaningful professional summary from resume",
        );
    }

    let mut similarity = 0.0;

    if let Some(provider) = remote {
        match (
            provider.embed(&resume_summary).await,
            provider.embed(job_description).await,
        ) {
            (Ok(resume_vec), Ok(job_vec)) => {
                similarity = cosine_similarity(&resume_vec, &job_vec);
            }
            (resume_result, job_result) => {
                let err = resume_result.err().or(job_result.err());
                warn!(error = ?err, "remote embedding failed, using local fallback");
            }
        }
    }

    if similarity == 0.0 {
        let mut resume_vec = local_embedding(&resume_summary);
        let mut job_vec = local_embedding(job_description);
        let max_len = resume_vec.len().max(job_vec.len());
        resume_vec.resize(max_len, 0.0);
        job_vec.resize(max_len, 0.0);

        let cosine = cosine_similarity(&resume_vec, &job_vec);
        let overlap = lexical_overlap(&resume_summary, job_description);
        similarity = cosine * COSINE_WEIGHT + overlap * OVERLAP_WEIGHT;
    }

    let similarity = similarity.clamp(0.0, 1.0);
    let level = classify_match_level(similarity);

    JobRoleMatch {
        job_role_similarity: round2(similarity),
        match_level: Some(level),
        explanation: match_explanation(similarity),
        confidence: confidence_for(similarity),
        success: true,
        error: None,
    }
}
