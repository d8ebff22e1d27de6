use anyhow::Result;

/// Engine configuration loaded from environment variables.
///
/// Everything here is optional: the engine runs fully offline without a
/// HuggingFace key, using the local embedding fallback.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Enables the remote embedding path for batches that do not carry
    /// their own key in `ScoringOptions`.
    pub huggingface_api_key: Option<String>,
    pub rust_log: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(EngineConfig {
            huggingface_api_key: std::env::var("HUGGINGFACE_API_KEY").ok().filter(|k| !k.is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Merges this config into batch options that lack an API key.
    pub fn apply_to(&self, options: &mut crate::models::ScoringOptions) {
        if options.huggingface_api_key.is_none() {
            options.huggingface_api_key = self.huggingface_api_key.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoringOptions;

    #[test]
    fn test_apply_to_fills_missing_key_only() {
        let config = EngineConfig {
            huggingface_api_key: Some("env-key".to_string()),
            rust_log: "info".to_string(),
        };

        let mut options = ScoringOptions::default();
        config.apply_to(&mut options);
        assert_eq!(options.huggingface_api_key.as_deref(), Some("env-key"));

        let mut options = ScoringOptions {
            huggingface_api_key: Some("batch-key".to_string()),
            ..ScoringOptions::default()
        };
        config.apply_to(&mut options);
        assert_eq!(options.huggingface_api_key.as_deref(), Some("batch-key"));
    }
}
