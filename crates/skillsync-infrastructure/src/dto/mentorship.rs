//! Mentorship DTOs and migrations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use skillsync_core::mentorship::Mentorship;

/// Mentorship record V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct MentorshipV1_0 {
    /// Unique identifier.
    pub id: String,
    /// Mentoring username.
    pub mentor_name: String,
    /// Mentored username.
    pub mentee_name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert MentorshipV1_0 DTO to domain model.
impl IntoDomain<Mentorship> for MentorshipV1_0 {
    fn into_domain(self) -> Mentorship {
        Mentorship {
            id: self.id,
            mentor_name: self.mentor_name,
            mentee_name: self.mentee_name,
            created_at: self.created_at,
        }
    }
}

/// Convert domain model to MentorshipV1_0 DTO for persistence.
impl From<&Mentorship> for MentorshipV1_0 {
    fn from(mentorship: &Mentorship) -> Self {
        MentorshipV1_0 {
            id: mentorship.id.clone(),
            mentor_name: mentorship.mentor_name.clone(),
            mentee_name: mentorship.mentee_name.clone(),
            created_at: mentorship.created_at,
        }
    }
}

/// Convert domain model to MentorshipV1_0 DTO (for version-migrate save support).
impl FromDomain<Mentorship> for MentorshipV1_0 {
    fn from_domain(mentorship: Mentorship) -> Self {
        MentorshipV1_0::from(&mentorship)
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for Mentorship entities.
pub fn create_mentorship_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("mentorship" => [MentorshipV1_0, Mentorship], save = true)
        .expect("Failed to create mentorship migrator")
}
