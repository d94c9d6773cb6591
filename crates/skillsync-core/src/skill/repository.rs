//! Skill catalog repository trait.

use async_trait::async_trait;

use super::model::{Skill, SkillName};
use crate::error::Result;

/// Repository for the global skill catalog.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Finds a catalog entry by its normalized name.
    async fn find_by_name(&self, name: &SkillName) -> Result<Option<Skill>>;

    /// Saves a catalog entry, replacing any existing entry with the same name.
    async fn save(&self, skill: &Skill) -> Result<()>;

    /// Deletes a catalog entry.
    ///
    /// Deleting a name that does not exist is not an error.
    async fn delete(&self, name: &SkillName) -> Result<()>;

    /// Lists the whole catalog, sorted by name ascending.
    async fn list_all(&self) -> Result<Vec<Skill>>;

    /// Checks if a catalog entry exists.
    async fn exists(&self, name: &SkillName) -> Result<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}
