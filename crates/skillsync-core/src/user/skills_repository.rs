//! User skill assignment repository trait.
//!
//! A user carries a *set* of skill names: no duplicates, no ordering.
//! Assignments are added and removed independently of profile edits.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::skill::SkillName;

/// Repository for the skills assigned to a user.
#[async_trait]
pub trait UserSkillRepository: Send + Sync {
    /// Returns the skill set assigned to a user.
    ///
    /// A user without assignments yields an empty set, not an error.
    async fn skills_for(&self, username: &str) -> Result<BTreeSet<SkillName>>;

    /// Assigns a skill to a user.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The skill was newly assigned
    /// - `Ok(false)`: The user already had this skill (no-op)
    async fn assign(&self, username: &str, skill: &SkillName) -> Result<bool>;

    /// Removes a skill from a user.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The assignment existed and was removed
    /// - `Ok(false)`: The user did not have this skill
    async fn remove(&self, username: &str, skill: &SkillName) -> Result<bool>;

    /// Removes every assignment for a user.
    ///
    /// Used when an account is deleted so no orphaned assignments remain.
    async fn clear_for(&self, username: &str) -> Result<()>;
}
