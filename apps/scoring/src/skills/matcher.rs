//! Skill presence tests against normalized resume text.
//!
//! Two tiers: keyword (synonym-expanded substring or token membership) and
//! semantic (curated adjacency terms appearing as tokens). The two-tier
//! policy tolerates phrasing variance without a generative model.

use serde::{Deserialize, Serialize};

use crate::skills::tables::{SEMANTIC_MAP, SYNONYM_MAP};
use crate::text::{normalize, tokenize};

/// How a skill was credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Keyword,
    Semantic,
}

/// Outcome of looking for one skill in one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub found: bool,
    pub match_type: Option<MatchType>,
    /// Adjacency terms that produced a semantic hit; empty for keyword hits.
    pub matched_terms: Vec<String>,
}

impl SkillMatch {
    fn miss() -> Self {
        Self {
            found: false,
            match_type: None,
            matched_terms: Vec::new(),
        }
    }
}

/// Expands a skill into its accepted spelling variants.
///
/// If the lowercase-trimmed input equals a canonical key or any of its
/// variants, the full variant set (input, key, all variants) is returned in
/// deterministic order; otherwise just the input.
pub fn expand_skill(skill: &str) -> Vec<String> {
    let s = skill.trim().to_lowercase();
    let mut variants = vec![s.clone()];

    for (key, vs) in SYNONYM_MAP.iter() {
        if s == *key || vs.contains(&s.as_str()) {
            push_unique(&mut variants, key);
            for v in *vs {
                push_unique(&mut variants, v);
            }
        }
    }

    variants
}

fn push_unique(variants: &mut Vec<String>, candidate: &str) {
    if !variants.iter().any(|v| v == candidate) {
        variants.push(candidate.to_string());
    }
}

/// Tests a skill against resume text: keyword tier first, semantic second.
pub fn find_skill_in_resume(resume_text: &str, skill: &str) -> SkillMatch {
    let txt = normalize(resume_text);
    let toks = tokenize(resume_text);
    let variants = expand_skill(skill);

    let keyword_hit = variants
        .iter()
        .any(|v| txt.contains(v.as_str()) || toks.iter().any(|t| t == v));

    if keyword_hit {
        return SkillMatch {
            found: true,
            match_type: Some(MatchType::Keyword),
            matched_terms: Vec::new(),
        };
    }

    let matched_terms = semantic_matches(skill, &toks);
    if !matched_terms.is_empty() {
        return SkillMatch {
            found: true,
            match_type: Some(MatchType::Semantic),
            matched_terms,
        };
    }

    SkillMatch::miss()
}

/// Adjacency terms for `skill` that appear as tokens in the resume.
fn semantic_matches(skill: &str, resume_tokens: &[String]) -> Vec<String> {
    let skill_norm = normalize(skill);
    let related = SEMANTIC_MAP
        .get(skill_norm.trim())
        .copied()
        .unwrap_or_default();

    related
        .iter()
        .filter(|term| resume_tokens.iter().any(|t| t == *term))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_skill_by_canonical_key() {
        let variants = expand_skill("js");
        assert!(variants.contains(&"js".to_string()));
        assert!(variants.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_expand_skill_by_variant_is_symmetric() {
        let variants = expand_skill("Node.JS ");
        assert!(variants.contains(&"node".to_string()));
        assert!(variants.contains(&"nodejs".to_string()));
        assert!(variants.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_expand_unknown_skill_returns_itself() {
        assert_eq!(expand_skill("Erlang"), vec!["erlang".to_string()]);
    }

    #[test]
    fn test_keyword_match_via_synonym() {
        let m = find_skill_in_resume("Built SPAs with JavaScript and Redux", "js");
        assert!(m.found);
        assert_eq!(m.match_type, Some(MatchType::Keyword));
        assert!(m.matched_terms.is_empty());
    }

    #[test]
    fn test_semantic_match_when_keyword_absent() {
        let m = find_skill_in_resume("Shipped frontend components with JSX", "react");
        assert!(m.found);
        assert_eq!(m.match_type, Some(MatchType::Semantic));
        assert!(m.matched_terms.contains(&"frontend".to_string()));
        assert!(m.matched_terms.contains(&"jsx".to_string()));
    }

    #[test]
    fn test_miss_when_neither_tier_hits() {
        let m = find_skill_in_resume("Ten years of COBOL on mainframes", "react");
        assert!(!m.found);
        assert_eq!(m.match_type, None);
    }

    #[test]
    fn test_keyword_tier_wins_over_semantic() {
        let m = find_skill_in_resume("React and frontend work", "react");
        assert_eq!(m.match_type, Some(MatchType::Keyword));
    }
}
