pub mod options;
pub mod result;
pub mod resume;

pub use options::{BatchWeights, ScoringOptions};
pub use result::CandidateResult;
pub use resume::{ContactInfo, Degree, ExtractedResume};
