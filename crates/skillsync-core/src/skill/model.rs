use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillSyncError};

/// The case-insensitive identity of a skill.
///
/// Skill names are normalized at construction (trimmed, lowercased) so
/// "Python", " python" and "PYTHON" all denote the same skill. Equality,
/// hashing, and ordering all use the normalized form, which also gives
/// skill sets a stable iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillName(String);

impl SkillName {
    /// Creates a normalized skill name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is empty after trimming.
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SkillSyncError::invalid_input("skill name cannot be empty"));
        }
        Ok(SkillName(normalized))
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SkillName {
    type Error = SkillSyncError;

    fn try_from(value: String) -> Result<Self> {
        SkillName::new(&value)
    }
}

impl From<SkillName> for String {
    fn from(name: SkillName) -> String {
        name.0
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry describing a skill.
///
/// Skills are referenced, not owned, by users and opportunities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Normalized, unique skill name
    pub name: SkillName,
    /// Coarse grouping (e.g. "language", "framework")
    pub category: Option<String>,
    /// Short description of the skill
    pub description: Option<String>,
}

impl Skill {
    /// Creates a catalog entry with no category or description.
    pub fn new(name: SkillName) -> Self {
        Self {
            name,
            category: None,
            description: None,
        }
    }
}
