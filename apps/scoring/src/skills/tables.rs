//! Static lookup tables for the skill matcher.
//!
//! Both tables are hand-curated, immutable configuration built once at first
//! use. Extending coverage means adding rows here; the matching logic in
//! `matcher` never changes.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical skill -> accepted spelling variants. Symmetric at lookup time:
/// querying by the key or by any variant yields the full set.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("js", &["javascript"]),
    ("node", &["nodejs", "node.js"]),
    ("react", &["reactjs", "react.js"]),
    ("aws", &["amazon web services"]),
    ("ml", &["machine learning"]),
    ("ai", &["artificial intelligence"]),
];

/// Skill -> related terms that count as a semantic (non-keyword) hit when
/// they appear as tokens in the resume. Curated, not generative, to keep
/// false positives low.
const SEMANTIC_ADJACENCY: &[(&str, &[&str])] = &[
    ("react", &["frontend", "ui", "component", "jsx"]),
    ("node", &["backend", "server", "express", "api"]),
    ("docker", &["container", "kubernetes", "devops", "deployment"]),
    ("aws", &["cloud", "ec2", "s3", "lambda", "azure", "gcp"]),
    ("mongodb", &["database", "nosql", "db", "datastore"]),
    ("python", &["django", "flask", "pandas", "numpy"]),
    ("java", &["spring", "hibernate", "maven", "gradle"]),
    ("testing", &["jest", "mocha", "junit", "selenium", "qa"]),
    ("git", &["version control", "github", "gitlab", "bitbucket"]),
    ("agile", &["scrum", "sprint", "jira", "kanban"]),
];

pub static SYNONYM_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

pub static SEMANTIC_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SEMANTIC_ADJACENCY.iter().copied().collect());
