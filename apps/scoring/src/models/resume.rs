//! Input records produced by the document-extraction collaborator.
//!
//! The engine never parses documents itself; an `ExtractedResume` arrives
//! with plain text plus light metadata and is immutable from then on.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Contact block pulled from the resume header. Fields are empty strings
/// when extraction could not find them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Highest recognized degree, ordered by level.
///
/// Declaration order IS the education ordering (`None < Diploma < Bachelors
/// < Masters < PhD`), so `Ord` comparisons are the invariant basis for all
/// degree checks. Degree strings are never compared lexically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Degree {
    #[default]
    None,
    Diploma,
    Bachelors,
    Masters,
    PhD,
}

impl Degree {
    /// Numeric level, 0 (no degree) through 4 (PhD).
    pub fn level(self) -> u8 {
        match self {
            Degree::None => 0,
            Degree::Diploma => 1,
            Degree::Bachelors => 2,
            Degree::Masters => 3,
            Degree::PhD => 4,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != Degree::None
    }

    fn as_str(self) -> &'static str {
        match self {
            Degree::None => "",
            Degree::Diploma => "Diploma",
            Degree::Bachelors => "Bachelors",
            Degree::Masters => "Masters",
            Degree::PhD => "PhD",
        }
    }
}

/// Unrecognized degree strings map to `None`, matching the extraction
/// collaborator's contract of "empty if unknown".
impl From<String> for Degree {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Diploma" => Degree::Diploma,
            "Bachelors" => Degree::Bachelors,
            "Masters" => Degree::Masters,
            "PhD" => Degree::PhD,
            _ => Degree::None,
        }
    }
}

impl From<Degree> for String {
    fn from(d: Degree) -> Self {
        d.as_str().to_string()
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted resume: already-parsed plain text plus light metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedResume {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub images_count: u32,
    #[serde(default)]
    pub tables_count: u32,
    #[serde(default)]
    pub contact: ContactInfo,
    /// Section-name -> presence, as detected by the extractor.
    #[serde(default)]
    pub sections: HashMap<String, bool>,
    #[serde(default)]
    pub degree: Degree,
    /// Field of study, empty if unknown.
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_ordering_is_total() {
        assert!(Degree::None < Degree::Diploma);
        assert!(Degree::Diploma < Degree::Bachelors);
        assert!(Degree::Bachelors < Degree::Masters);
        assert!(Degree::Masters < Degree::PhD);
    }

    #[test]
    fn test_degree_levels() {
        assert_eq!(Degree::None.level(), 0);
        assert_eq!(Degree::PhD.level(), 4);
    }

    #[test]
    fn test_degree_deserializes_from_strings() {
        let d: Degree = serde_json::from_str(r#""Masters""#).unwrap();
        assert_eq!(d, Degree::Masters);
        let none: Degree = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(none, Degree::None);
    }

    #[test]
    fn test_unrecognized_degree_maps_to_none() {
        let d: Degree = serde_json::from_str(r#""Bootcamp""#).unwrap();
        assert_eq!(d, Degree::None);
    }

    #[test]
    fn test_degree_serializes_to_original_strings() {
        assert_eq!(serde_json::to_string(&Degree::PhD).unwrap(), r#""PhD""#);
        assert_eq!(serde_json::to_string(&Degree::None).unwrap(), r#""""#);
    }

    #[test]
    fn test_extracted_resume_defaults() {
        let r: ExtractedResume = serde_json::from_str("{}").unwrap();
        assert_eq!(r.degree, Degree::None);
        assert_eq!(r.experience_years, 0.0);
        assert!(r.sections.is_empty());
    }
}
