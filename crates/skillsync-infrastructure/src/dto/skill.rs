//! Skill catalog DTOs and migrations
//!
//! The stored payloads historically spelled fields two ways
//! (`name`/`skill_name`, `description`/`skill_description`); the aliases
//! here absorb both spellings so domain code only ever sees one.

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use skillsync_core::skill::{Skill, SkillName};

/// A reference to a skill by name, as stored in skill lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRefV1 {
    /// Normalized skill name.
    #[serde(alias = "skill_name")]
    pub name: SkillName,
}

impl From<&SkillName> for SkillRefV1 {
    fn from(name: &SkillName) -> Self {
        SkillRefV1 { name: name.clone() }
    }
}

impl From<SkillRefV1> for SkillName {
    fn from(dto: SkillRefV1) -> Self {
        dto.name
    }
}

/// Skill catalog entry V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct SkillV1_0 {
    /// Normalized, unique skill name.
    #[serde(alias = "skill_name")]
    pub name: SkillName,
    /// Coarse grouping.
    #[serde(default)]
    pub category: Option<String>,
    /// Short description.
    #[serde(default, alias = "skill_description")]
    pub description: Option<String>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert SkillV1_0 DTO to domain model.
impl IntoDomain<Skill> for SkillV1_0 {
    fn into_domain(self) -> Skill {
        Skill {
            name: self.name,
            category: self.category,
            description: self.description,
        }
    }
}

/// Convert domain model to SkillV1_0 DTO for persistence.
impl From<&Skill> for SkillV1_0 {
    fn from(skill: &Skill) -> Self {
        SkillV1_0 {
            name: skill.name.clone(),
            category: skill.category.clone(),
            description: skill.description.clone(),
        }
    }
}

/// Convert domain model to SkillV1_0 DTO (for version-migrate save support).
impl FromDomain<Skill> for SkillV1_0 {
    fn from_domain(skill: Skill) -> Self {
        SkillV1_0::from(&skill)
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for Skill entities.
pub fn create_skill_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("skill" => [SkillV1_0, Skill], save = true)
        .expect("Failed to create skill migrator")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_ref_accepts_both_spellings() {
        let plain: SkillRefV1 = serde_json::from_str(r#"{"name": "Python"}"#).unwrap();
        let legacy: SkillRefV1 = serde_json::from_str(r#"{"skill_name": "python"}"#).unwrap();
        assert_eq!(plain.name, legacy.name);
    }

    #[test]
    fn test_skill_accepts_legacy_description_key() {
        let dto: SkillV1_0 = serde_json::from_str(
            r#"{"skill_name": "SQL", "category": "language", "skill_description": "queries"}"#,
        )
        .unwrap();
        assert_eq!(dto.name.as_str(), "sql");
        assert_eq!(dto.description.as_deref(), Some("queries"));
    }
}
