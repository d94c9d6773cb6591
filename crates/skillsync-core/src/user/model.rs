use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillSyncError;
use crate::skill::SkillName;

/// The side of a mentorship a user is on.
///
/// Matching always pairs opposite roles: mentors are matched against
/// mentees and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    /// Returns the opposite role.
    pub fn counterpart(self) -> Role {
        match self {
            Role::Mentor => Role::Mentee,
            Role::Mentee => Role::Mentor,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Mentor => write!(f, "mentor"),
            Role::Mentee => write!(f, "mentee"),
        }
    }
}

impl FromStr for Role {
    type Err = SkillSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mentor" => Ok(Role::Mentor),
            "mentee" => Ok(Role::Mentee),
            other => Err(SkillSyncError::invalid_input(format!(
                "unknown role '{}', expected 'mentor' or 'mentee'",
                other
            ))),
        }
    }
}

/// A registered user of the platform.
///
/// The `username` is the stable identity; profile fields are mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable identifier
    pub username: String,
    /// Display name
    pub name: String,
    /// Whether this user mentors or is mentored
    pub role: Role,
    /// Contact phone number
    pub phone_number: Option<String>,
    /// Free-text experience level (e.g. "junior", "5 years")
    pub experience_level: Option<String>,
    /// Short self-description shown on the profile
    pub profile_summary: Option<String>,
}

impl User {
    /// Creates a user with empty profile fields.
    pub fn new(username: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            role,
            phone_number: None,
            experience_level: None,
            profile_summary: None,
        }
    }
}

/// The skills assigned to one user.
///
/// A set, never a list: assigning a skill twice is a no-op and ordering
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Owner of the assignments
    pub username: String,
    /// Assigned skill names
    pub skills: BTreeSet<SkillName>,
}

impl SkillProfile {
    /// Creates an empty profile for a user.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            skills: BTreeSet::new(),
        }
    }
}
