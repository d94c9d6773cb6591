//! Skill catalog service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::skill::{Skill, SkillName, SkillRepository};

/// Partial catalog entry update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillUpdate {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Service for managing the global skill catalog.
pub struct SkillCatalogService {
    /// Repository for catalog entries
    catalog: Arc<dyn SkillRepository>,
}

impl SkillCatalogService {
    /// Creates a new `SkillCatalogService` instance.
    pub fn new(catalog: Arc<dyn SkillRepository>) -> Self {
        Self { catalog }
    }

    /// Adds a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if an entry with this name already exists.
    pub async fn add(&self, skill: Skill) -> Result<Skill> {
        if self.catalog.exists(&skill.name).await? {
            return Err(SkillSyncError::invalid_input(format!(
                "skill '{}' already exists",
                skill.name
            )));
        }
        self.catalog.save(&skill).await?;
        Ok(skill)
    }

    /// Fetches a catalog entry.
    pub async fn get(&self, name: &SkillName) -> Result<Skill> {
        self.catalog
            .find_by_name(name)
            .await?
            .ok_or_else(|| SkillSyncError::not_found("skill", name.as_str()))
    }

    /// Applies a partial update to a catalog entry.
    pub async fn update(&self, name: &SkillName, update: SkillUpdate) -> Result<Skill> {
        let mut skill = self.get(name).await?;
        if update.category.is_some() {
            skill.category = update.category;
        }
        if update.description.is_some() {
            skill.description = update.description;
        }
        self.catalog.save(&skill).await?;
        Ok(skill)
    }

    /// Deletes a catalog entry.
    pub async fn delete(&self, name: &SkillName) -> Result<()> {
        if !self.catalog.exists(name).await? {
            return Err(SkillSyncError::not_found("skill", name.as_str()));
        }
        self.catalog.delete(name).await
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> Result<Vec<Skill>> {
        self.catalog.list_all().await
    }

    /// Fetches a catalog entry, creating a placeholder entry if missing.
    pub async fn get_or_create(&self, raw_name: &str) -> Result<Skill> {
        let name = SkillName::new(raw_name)?;
        if let Some(skill) = self.catalog.find_by_name(&name).await? {
            return Ok(skill);
        }
        let skill = Skill {
            name,
            category: Some("auto".to_string()),
            description: Some("auto-added".to_string()),
        };
        self.catalog.save(&skill).await?;
        tracing::debug!("Auto-created skill '{}'", skill.name);
        Ok(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsync_infrastructure::InMemoryStore;

    fn name(raw: &str) -> SkillName {
        SkillName::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate() {
        let store = Arc::new(InMemoryStore::new());
        let service = SkillCatalogService::new(store);

        service.add(Skill::new(name("python"))).await.unwrap();
        let err = service.add(Skill::new(name("Python"))).await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = Arc::new(InMemoryStore::new());
        let service = SkillCatalogService::new(store);

        service.add(Skill::new(name("sql"))).await.unwrap();
        let updated = service
            .update(
                &name("sql"),
                SkillUpdate {
                    category: Some("language".to_string()),
                    ..SkillUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.category.as_deref(), Some("language"));

        service.delete(&name("sql")).await.unwrap();
        assert!(service.get(&name("sql")).await.unwrap_err().is_not_found());
        assert!(service.delete(&name("sql")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_or_create() {
        let store = Arc::new(InMemoryStore::new());
        let service = SkillCatalogService::new(store);

        let created = service.get_or_create("Rust").await.unwrap();
        assert_eq!(created.name.as_str(), "rust");
        assert_eq!(created.category.as_deref(), Some("auto"));

        // Second call returns the existing entry untouched.
        let again = service.get_or_create("rust").await.unwrap();
        assert_eq!(again, created);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }
}
