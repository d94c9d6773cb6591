//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema for persisting data.
//! They are private to the infrastructure layer and handle the evolution
//! of the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! ### User Version History
//! - **1.0.0**: Identity fields and role only
//! - **1.1.0**: Added phone number, experience level, profile summary
//!
//! ### Opportunity Version History
//! - **1.0.0**: Initial schema
//! - **1.1.0**: Added the associated skills list

mod mentorship;
mod opportunity;
mod skill;
mod skill_profile;
mod user;

use uuid::Uuid;

// Re-export mentorship DTOs and migrator
pub use mentorship::{MentorshipV1_0, create_mentorship_migrator};

// Re-export opportunity DTOs and migrator
pub use opportunity::{OpportunityV1_0, OpportunityV1_1, create_opportunity_migrator};

// Re-export skill DTOs and migrator
pub use skill::{SkillRefV1, SkillV1_0, create_skill_migrator};

// Re-export skill profile DTOs and migrator
pub use skill_profile::{SkillProfileV1_0, create_skill_profile_migrator};

// Re-export user DTOs and migrator
pub use user::{UserV1_0, UserV1_1, create_user_migrator};

/// Derives a stable file id from an entity key.
///
/// Uses UUID v5 with NAMESPACE_OID to ensure the same key always maps to
/// the same file name, regardless of characters unsafe in paths.
pub(crate) fn file_id(key: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}
