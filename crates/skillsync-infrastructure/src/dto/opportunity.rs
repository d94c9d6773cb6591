//! Opportunity DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema
//! - **1.1.0**: Added the associated `skills` list

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use skillsync_core::opportunity::{Opportunity, OpportunityKind};

use super::skill::SkillRefV1;

/// Opportunity record V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct OpportunityV1_0 {
    /// Unique identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Posting username.
    pub posted_by: String,
    /// Kind of engagement.
    pub kind: OpportunityKind,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Opportunity record V1.1.0 (added associated skills).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct OpportunityV1_1 {
    /// Unique identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Posting username.
    pub posted_by: String,
    /// Kind of engagement.
    pub kind: OpportunityKind,
    /// Associated skills.
    #[serde(default)]
    pub skills: Vec<SkillRefV1>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from OpportunityV1_0 to OpportunityV1_1.
impl MigratesTo<OpportunityV1_1> for OpportunityV1_0 {
    fn migrate(self) -> OpportunityV1_1 {
        OpportunityV1_1 {
            id: self.id,
            title: self.title,
            description: self.description,
            posted_by: self.posted_by,
            kind: self.kind,
            skills: Vec::new(),
            created_at: self.created_at,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert OpportunityV1_1 DTO to domain model.
impl IntoDomain<Opportunity> for OpportunityV1_1 {
    fn into_domain(self) -> Opportunity {
        Opportunity {
            id: self.id,
            title: self.title,
            description: self.description,
            posted_by: self.posted_by,
            kind: self.kind,
            skills: self
                .skills
                .into_iter()
                .map(|s| s.name)
                .collect::<BTreeSet<_>>(),
            created_at: self.created_at,
        }
    }
}

/// Convert domain model to OpportunityV1_1 DTO for persistence.
impl From<&Opportunity> for OpportunityV1_1 {
    fn from(opportunity: &Opportunity) -> Self {
        OpportunityV1_1 {
            id: opportunity.id.clone(),
            title: opportunity.title.clone(),
            description: opportunity.description.clone(),
            posted_by: opportunity.posted_by.clone(),
            kind: opportunity.kind,
            skills: opportunity.skills.iter().map(SkillRefV1::from).collect(),
            created_at: opportunity.created_at,
        }
    }
}

/// Convert domain model to OpportunityV1_1 DTO (for version-migrate save support).
impl FromDomain<Opportunity> for OpportunityV1_1 {
    fn from_domain(opportunity: Opportunity) -> Self {
        OpportunityV1_1::from(&opportunity)
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for Opportunity entities.
///
/// # Migration Path
///
/// - V1.0 → V1.1: Adds an empty `skills` list
/// - V1.1 → Opportunity: Converts DTO to domain model
pub fn create_opportunity_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("opportunity" => [OpportunityV1_0, OpportunityV1_1, Opportunity], save = true)
        .expect("Failed to create opportunity migrator")
}
