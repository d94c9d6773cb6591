use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::skill::SkillName;
use crate::user::{Role, User};

/// How the candidate pool is restricted by role.
///
/// The restriction is an explicit parameter rather than something
/// inferred from the caller: clients can ask for the opposite role, a
/// specific role, or no restriction at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    /// Candidates must have the opposite role of the subject
    /// (mentors see mentees, mentees see mentors).
    #[default]
    Opposite,
    /// Candidates must have exactly this role.
    Only(Role),
    /// No role restriction.
    Any,
}

impl RoleFilter {
    /// Resolves the filter to a concrete role restriction for a subject.
    pub fn resolve(self, subject_role: Role) -> Option<Role> {
        match self {
            RoleFilter::Opposite => Some(subject_role.counterpart()),
            RoleFilter::Only(role) => Some(role),
            RoleFilter::Any => None,
        }
    }
}

/// A user together with their assigned skill set.
///
/// This is the unit the matching engine reads from its directory; the
/// skill set is already normalized, deduplicated, and deterministically
/// ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub user: User,
    pub skills: BTreeSet<SkillName>,
}

impl Candidate {
    pub fn new(user: User, skills: BTreeSet<SkillName>) -> Self {
        Self { user, skills }
    }
}

/// One scored entry in a match ranking.
///
/// Never persisted; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The matched counterpart
    pub candidate: User,
    /// Jaccard similarity of the two skill sets, in [0, 1]
    pub score: f64,
    /// Skills the subject and the candidate share, sorted ascending
    pub overlapping_skills: Vec<SkillName>,
}
