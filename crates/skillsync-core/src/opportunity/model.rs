use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SkillSyncError;
use crate::skill::SkillName;

/// What kind of engagement an opportunity offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Job,
    Internship,
    Mentorship,
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpportunityKind::Job => write!(f, "job"),
            OpportunityKind::Internship => write!(f, "internship"),
            OpportunityKind::Mentorship => write!(f, "mentorship"),
        }
    }
}

impl FromStr for OpportunityKind {
    type Err = SkillSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "job" => Ok(OpportunityKind::Job),
            "internship" => Ok(OpportunityKind::Internship),
            "mentorship" => Ok(OpportunityKind::Mentorship),
            other => Err(SkillSyncError::invalid_input(format!(
                "unknown opportunity kind '{}', expected 'job', 'internship' or 'mentorship'",
                other
            ))),
        }
    }
}

/// A posting (job, internship, or mentorship offer) owned by its poster.
///
/// Ownership enforcement (only the poster may delete) is a caller concern;
/// this core records `posted_by` but does not gate operations on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Unique identifier
    pub id: String,
    /// Headline shown in listings
    pub title: String,
    /// Longer free-text description
    pub description: Option<String>,
    /// Username of the posting user
    pub posted_by: String,
    /// Kind of engagement offered
    pub kind: OpportunityKind,
    /// Skills associated with this posting
    pub skills: BTreeSet<SkillName>,
    /// When the posting was created
    pub created_at: DateTime<Utc>,
}

impl Opportunity {
    /// Creates a posting with a fresh id and no associated skills.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        posted_by: impl Into<String>,
        kind: OpportunityKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description,
            posted_by: posted_by.into(),
            kind,
            skills: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }
}
