//! Professional-summary extraction from raw resume text.
//!
//! Header scan first; when no summary header exists, a filtered-lines
//! fallback drops contact-looking lines and takes the first few lines of
//! prose.

use std::sync::LazyLock;

use regex::Regex;

/// Headers that open a summary/objective/profile block.
const SUMMARY_HEADERS: &[&str] = &[
    "summary",
    "professional summary",
    "profile",
    "about me",
    "objective",
    "career objective",
    "professional profile",
    "executive summary",
    "overview",
];

/// Headers that terminate the captured block.
const SECTION_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "education",
    "skills",
    "projects",
    "certifications",
    "achievements",
];

/// Lines captured after a summary header when no closing header is found.
const HEADERLESS_CAPTURE_LINES: usize = 10;
/// Lines taken by the fallback path.
const FALLBACK_LINES: usize = 5;
/// Character cap on the fallback excerpt.
const FALLBACK_MAX_CHARS: usize = 500;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+(]?[\d\s().-]{10,}").unwrap());
/// Two to four capitalized words on their own line, the shape of a name.
static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}$").unwrap());

fn is_header(line: &str, headers: &[&str]) -> bool {
    let lower = line.to_lowercase();
    headers
        .iter()
        .any(|h| lower == *h || lower == format!("{h}:"))
}

/// Extracts a professional-summary excerpt from resume text.
///
/// Returns an empty string when nothing usable exists; callers treat
/// excerpts under their own minimum length as extraction failures.
pub fn extract_professional_summary(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let summary_start = lines
        .iter()
        .position(|l| is_header(l, SUMMARY_HEADERS))
        .map(|i| i + 1);

    if let Some(start) = summary_start {
        let end = lines[start..]
            .iter()
            .position(|l| is_header(l, SECTION_HEADERS))
            .map(|i| start + i)
            .unwrap_or_else(|| (start + HEADERLESS_CAPTURE_LINES).min(lines.len()));
        return lines[start..end].join(" ").trim().to_string();
    }

    // No recognized header: keep prose lines, skip contact and name lines.
    let content: Vec<&str> = lines
        .iter()
        .filter(|l| {
            !EMAIL_RE.is_match(l)
                && !PHONE_RE.is_match(l)
                && l.chars().count() > 20
                && !NAME_LINE_RE.is_match(l)
        })
        .take(FALLBACK_LINES)
        .copied()
        .collect();

    content
        .join(" ")
        .chars()
        .take(FALLBACK_MAX_CHARS)
        .collect()
}
