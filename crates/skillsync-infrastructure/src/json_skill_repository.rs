//! JSON-file skill catalog repository implementation.
//!
//! Stores each catalog entry as a versioned JSON document under
//! `{store}/skills/`, keyed by the normalized skill name.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use version_migrate::Migrator;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::skill::{Skill, SkillName, SkillRepository};

use crate::dto::{create_skill_migrator, file_id};
use crate::paths::SkillSyncPaths;

/// File-based skill catalog repository with version migration support.
pub struct JsonSkillRepository {
    /// Directory holding one document per catalog entry.
    dir: PathBuf,
    /// Migrator for version handling.
    migrator: Migrator,
}

impl JsonSkillRepository {
    const ENTITY: &'static str = "skill";
    const SUBDIR: &'static str = "skills";

    /// Creates a repository rooted at the default store location.
    pub fn new() -> Result<Self> {
        let base = SkillSyncPaths::store_dir()
            .map_err(|e| SkillSyncError::config(e.to_string()))?;
        Ok(Self::with_base_path(base))
    }

    /// Creates a repository under a custom base path (for testing).
    pub fn with_base_path(base: PathBuf) -> Self {
        Self {
            dir: base.join(Self::SUBDIR),
            migrator: create_skill_migrator(),
        }
    }

    fn record_path(&self, name: &SkillName) -> PathBuf {
        self.dir.join(format!("{}.json", file_id(name.as_str())))
    }

    async fn load_record(&self, path: &Path) -> Result<Skill> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read skill record: {}", e)))?;

        let json_value: serde_json::Value = serde_json::from_str(&content)?;

        let skill: Skill = self
            .migrator
            .load_flat_from(Self::ENTITY, json_value)
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to migrate skill record: {}", e))
            })?;

        Ok(skill)
    }
}

#[async_trait]
impl SkillRepository for JsonSkillRepository {
    async fn find_by_name(&self, name: &SkillName) -> Result<Option<Skill>> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.load_record(&path).await?))
    }

    async fn save(&self, skill: &Skill) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to create directory: {}", e)))?;

        let serialized = self
            .migrator
            .save_domain_flat(Self::ENTITY, skill.clone())
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to serialize skill record: {}", e))
            })?;

        fs::write(self.record_path(&skill.name), serialized)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to write skill record: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, name: &SkillName) -> Result<()> {
        let path = self.record_path(name);
        if path.exists() {
            fs::remove_file(path)
                .await
                .map_err(|e| SkillSyncError::io(format!("Failed to delete skill record: {}", e)))?;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Skill>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read skill directory: {}", e)))?;

        let mut skills = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read skill directory: {}", e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            skills.push(self.load_record(&path).await?);
        }

        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn name(raw: &str) -> SkillName {
        SkillName::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonSkillRepository::with_base_path(temp_dir.path().to_path_buf());

        let skill = Skill {
            name: name("Python"),
            category: Some("language".to_string()),
            description: None,
        };
        repo.save(&skill).await.unwrap();

        // Lookup through a differently-cased spelling resolves the same entry.
        let found = repo.find_by_name(&name("PYTHON")).await.unwrap().unwrap();
        assert_eq!(found.name.as_str(), "python");
        assert_eq!(found.category.as_deref(), Some("language"));
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonSkillRepository::with_base_path(temp_dir.path().to_path_buf());

        repo.save(&Skill::new(name("sql"))).await.unwrap();
        repo.save(&Skill::new(name("python"))).await.unwrap();
        repo.save(&Skill::new(name("ml"))).await.unwrap();

        repo.delete(&name("sql")).await.unwrap();

        let names: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["ml", "python"]);
    }
}
