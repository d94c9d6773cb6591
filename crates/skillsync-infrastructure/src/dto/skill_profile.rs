//! Skill assignment DTOs and migrations

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use skillsync_core::user::SkillProfile;

use super::skill::SkillRefV1;

/// Per-user skill assignments V1.0.0.
///
/// Assignments are stored as a list of skill references; duplicates in a
/// stored file collapse into the domain set on load.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct SkillProfileV1_0 {
    /// Owner of the assignments.
    pub username: String,
    /// Assigned skills.
    #[serde(default)]
    pub skills: Vec<SkillRefV1>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert SkillProfileV1_0 DTO to domain model.
impl IntoDomain<SkillProfile> for SkillProfileV1_0 {
    fn into_domain(self) -> SkillProfile {
        SkillProfile {
            username: self.username,
            skills: self.skills.into_iter().map(|s| s.name).collect::<BTreeSet<_>>(),
        }
    }
}

/// Convert domain model to SkillProfileV1_0 DTO for persistence.
impl From<&SkillProfile> for SkillProfileV1_0 {
    fn from(profile: &SkillProfile) -> Self {
        SkillProfileV1_0 {
            username: profile.username.clone(),
            skills: profile.skills.iter().map(SkillRefV1::from).collect(),
        }
    }
}

/// Convert domain model to SkillProfileV1_0 DTO (for version-migrate save support).
impl FromDomain<SkillProfile> for SkillProfileV1_0 {
    fn from_domain(profile: SkillProfile) -> Self {
        SkillProfileV1_0::from(&profile)
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for SkillProfile entities.
pub fn create_skill_profile_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("skill_profile" => [SkillProfileV1_0, SkillProfile], save = true)
        .expect("Failed to create skill_profile migrator")
}
