//! User DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema (identity fields and role only)
//! - **1.1.0**: Added `phone_number`, `experience_level`, `profile_summary`

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use skillsync_core::user::{Role, User};

/// User record V1.0.0 (identity fields only).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct UserV1_0 {
    /// Unique, immutable identifier.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Mentor or mentee.
    pub role: Role,
}

/// User record V1.1.0 (added optional profile fields).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct UserV1_1 {
    /// Unique, immutable identifier.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Mentor or mentee.
    pub role: Role,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Free-text experience level.
    #[serde(default)]
    pub experience_level: Option<String>,
    /// Short self-description.
    #[serde(default)]
    pub profile_summary: Option<String>,
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from UserV1_0 to UserV1_1.
impl MigratesTo<UserV1_1> for UserV1_0 {
    fn migrate(self) -> UserV1_1 {
        UserV1_1 {
            username: self.username,
            name: self.name,
            role: self.role,
            phone_number: None,
            experience_level: None,
            profile_summary: None,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert UserV1_1 DTO to domain model.
impl IntoDomain<User> for UserV1_1 {
    fn into_domain(self) -> User {
        User {
            username: self.username,
            name: self.name,
            role: self.role,
            phone_number: self.phone_number,
            experience_level: self.experience_level,
            profile_summary: self.profile_summary,
        }
    }
}

/// Convert domain model to UserV1_1 DTO for persistence.
impl From<&User> for UserV1_1 {
    fn from(user: &User) -> Self {
        UserV1_1 {
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
            phone_number: user.phone_number.clone(),
            experience_level: user.experience_level.clone(),
            profile_summary: user.profile_summary.clone(),
        }
    }
}

/// Convert domain model to UserV1_1 DTO (for version-migrate save support).
impl FromDomain<User> for UserV1_1 {
    fn from_domain(user: User) -> Self {
        UserV1_1::from(&user)
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for User entities.
///
/// # Migration Path
///
/// - V1.0 → V1.1: Adds the optional profile fields as `None`
/// - V1.1 → User: Converts DTO to domain model
pub fn create_user_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("user" => [UserV1_0, UserV1_1, User], save = true)
        .expect("Failed to create user migrator")
}
