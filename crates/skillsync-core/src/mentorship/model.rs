use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed mentor → mentee connection.
///
/// Both names reference existing usernames; a user cannot mentor
/// themselves. Records are permanent once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentorship {
    /// Unique identifier
    pub id: String,
    /// Username of the mentoring party
    pub mentor_name: String,
    /// Username of the mentored party
    pub mentee_name: String,
    /// When the connection was established
    pub created_at: DateTime<Utc>,
}

impl Mentorship {
    /// Creates a new mentorship record with a fresh id.
    ///
    /// Invariant checks (existence, roles, self-pairing) live in the
    /// mentorship service, not here.
    pub fn new(mentor_name: impl Into<String>, mentee_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mentor_name: mentor_name.into(),
            mentee_name: mentee_name.into(),
            created_at: Utc::now(),
        }
    }
}
