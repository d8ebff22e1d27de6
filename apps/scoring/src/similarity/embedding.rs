//! Embedding providers behind one capability trait.
//!
//! `HuggingFaceProvider` calls the hosted sentence-transformer endpoint;
//! `LocalTermFrequency` is the offline stand-in built on `local_embedding`.
//! The local vector is a bag-of-words frequency proxy, not a learned
//! embedding: two texts only look similar when they share surface
//! vocabulary. A real model can replace either without touching the
//! aggregation or classification logic above.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

const HF_EMBED_URL: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2";
/// Remote calls are bounded by this timeout; slower responses fall back to
/// the local path.
const REMOTE_TIMEOUT: Duration = Duration::from_secs(10);
/// Tokens this short carry no signal for the frequency vector.
const MIN_TOKEN_LEN: usize = 3;
/// Dimension cap of the local frequency vector.
const TOP_WORDS: usize = 100;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("embedding API returned status {status}")]
    Api { status: u16 },

    #[error("malformed embedding payload: {0}")]
    Malformed(String),

    #[error("cannot embed empty text")]
    EmptyText,
}

/// A source of vector representations for text.
///
/// Implementations must be substitutable: callers never depend on where the
/// vector came from, only that equal inputs give equal outputs.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Remote provider backed by the HuggingFace hosted inference endpoint.
pub struct HuggingFaceProvider {
    client: Client,
    api_key: String,
}

impl HuggingFaceProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REMOTE_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.is_empty() {
            return Err(EmbeddingError::EmptyText);
        }

        let response = self
            .client
            .post(HF_EMBED_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await?;
        serde_json::from_value::<Vec<f32>>(payload)
            .map_err(|e| EmbeddingError::Malformed(e.to_string()))
    }
}

/// Offline provider: the relative-frequency vector from `local_embedding`.
pub struct LocalTermFrequency;

#[async_trait]
impl EmbeddingProvider for LocalTermFrequency {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(local_embedding(text))
    }
}

/// Word-frequency histogram over alphanumeric tokens longer than 2 chars:
/// the top 100 words by count (first-occurrence order on ties), emitted as
/// per-word relative frequencies in that fixed order.
pub fn local_embedding(text: &str) -> Vec<f32> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_TOKEN_LEN)
        .collect();

    if words.is_empty() {
        return Vec::new();
    }

    // Counts keyed by first-occurrence order so tie-breaking is stable.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in &words {
        if !counts.contains_key(w) {
            order.push(w);
        }
        *counts.entry(w).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.iter().map(|w| (*w, counts[w])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_WORDS);

    let total = words.len() as f32;
    ranked.iter().map(|(_, count)| *count as f32 / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_embedding_relative_frequencies() {
        let v = local_embedding("data data data pipeline pipeline rust");
        assert_eq!(v.len(), 3);
        assert!((v[0] - 0.5).abs() < f32::EPSILON);
        assert!((v[1] - 2.0 / 6.0).abs() < f32::EPSILON);
        assert!((v[2] - 1.0 / 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_local_embedding_drops_short_tokens() {
        let v = local_embedding("a an of it go rust");
        // only "rust" survives the length filter
        assert_eq!(v.len(), 1);
        assert!((v[0] - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_local_embedding_empty_text() {
        assert!(local_embedding("").is_empty());
        assert!(local_embedding("!!! ??").is_empty());
    }

    #[test]
    fn test_local_embedding_caps_dimensions() {
        let text: String = (0..300).map(|i| format!("word{i} ")).collect();
        assert_eq!(local_embedding(&text).len(), 100);
    }

    #[test]
    fn test_local_embedding_deterministic_tie_order() {
        let a = local_embedding("alpha beta gamma");
        let b = local_embedding("alpha beta gamma");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_local_provider_matches_free_function() {
        let v = LocalTermFrequency.embed("rust tokio services").await.unwrap();
        assert_eq!(v, local_embedding("rust tokio services"));
    }
}
