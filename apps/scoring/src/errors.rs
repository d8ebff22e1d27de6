use thiserror::Error;

/// Configuration contract violations. These fail loudly to the caller.
///
/// Data-quality problems (short text, missing fields) never produce a
/// `ScoringError`: scorers degrade to zeroed reports with a `success`
/// flag so one bad candidate cannot abort a batch.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("report weights must sum to 100, got {sum}")]
    WeightSum { sum: f64 },

    #[error("no skills provided for matching")]
    NoSkillsProvided,
}
