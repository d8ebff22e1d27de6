//! Candidate scoring engine.
//!
//! Turns extracted resume text plus job-requirement parameters into a
//! weighted composite score (0-100), a sub-score breakdown, missing-skill
//! lists and a human-readable explanation. Document extraction, HTTP
//! routing and report rendering are external collaborators: they hand in
//! `ExtractedResume` records and consume ranked `CandidateResult` records.

pub mod batch;
pub mod config;
pub mod errors;
pub mod explain;
pub mod models;
pub mod score;
pub mod similarity;
pub mod skills;
pub mod text;

pub use batch::{analyze_resume_batch, analyze_resume_batch_with};
pub use config::EngineConfig;
pub use errors::ScoringError;
pub use explain::{generate_explainable_score, ExplainableScore, ReportWeights};
pub use models::{BatchWeights, CandidateResult, ContactInfo, Degree, ExtractedResume, ScoringOptions};
pub use similarity::{EmbeddingProvider, JobRoleMatch, MatchLevel};
