// Skill matching: synonym expansion, keyword presence, semantic adjacency.
// Tables live in `tables` as static lookup data; `matcher` holds the logic.

pub mod matcher;
pub mod tables;

pub use matcher::{expand_skill, find_skill_in_resume, MatchType, SkillMatch};
