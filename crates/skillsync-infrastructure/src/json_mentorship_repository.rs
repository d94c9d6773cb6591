//! JSON-file mentorship repository implementation.
//!
//! Stores each mentorship as a versioned JSON document under
//! `{store}/mentorships/`, keyed by the record id.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use version_migrate::Migrator;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::mentorship::{Mentorship, MentorshipRepository};

use crate::dto::{create_mentorship_migrator, file_id};
use crate::paths::SkillSyncPaths;

/// File-based mentorship repository with version migration support.
pub struct JsonMentorshipRepository {
    /// Directory holding one document per mentorship.
    dir: PathBuf,
    /// Migrator for version handling.
    migrator: Migrator,
}

impl JsonMentorshipRepository {
    const ENTITY: &'static str = "mentorship";
    const SUBDIR: &'static str = "mentorships";

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
            migrator: create_mentorship_migrator(),
        }
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_id(id)))
    }

    async fn load_record(&self, path: &Path) -> Result<Mentorship> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read mentorship record: {}", e)))?;

        let json_value: serde_json::Value = serde_json::from_str(&content)?;

        let mentorship: Mentorship = self
            .migrator
            .load_flat_from(Self::ENTITY, json_value)
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to migrate mentorship record: {}", e))
            })?;

        Ok(mentorship)
    }
}

#[async_trait]
impl MentorshipRepository for JsonMentorshipRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Mentorship>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.load_record(&path).await?))
    }

    async fn find_pair(
        &self,
        mentor_name: &str,
        mentee_name: &str,
    ) -> Result<Option<Mentorship>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|m| m.mentor_name == mentor_name && m.mentee_name == mentee_name))
    }

    async fn save(&self, mentorship: &Mentorship) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to create directory: {}", e)))?;

        let serialized = self
            .migrator
            .save_domain_flat(Self::ENTITY, mentorship.clone())
            .map_err(|e| {
                SkillSyncError::data_access(format!(
                    "Failed to serialize mentorship record: {}",
                    e
                ))
            })?;

        fs::write(self.record_path(&mentorship.id), serialized)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to write mentorship record: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(path).await.map_err(|e| {
                SkillSyncError::io(format!("Failed to delete mentorship record: {}", e))
            })?;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Mentorship>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.dir).await.map_err(|e| {
            SkillSyncError::io(format!("Failed to read mentorship directory: {}", e))
        })?;

        let mut mentorships = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            SkillSyncError::io(format!("Failed to read mentorship directory: {}", e))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            mentorships.push(self.load_record(&path).await?);
        }

        mentorships.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(mentorships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonMentorshipRepository::with_base_path(temp_dir.path().to_path_buf());

        let mentorship = Mentorship::new("alice", "dana");
        repo.save(&mentorship).await.unwrap();

        let found = repo.find_by_id(&mentorship.id).await.unwrap().unwrap();
        assert_eq!(found, mentorship);
    }

    #[tokio::test]
    async fn test_find_pair() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonMentorshipRepository::with_base_path(temp_dir.path().to_path_buf());

        repo.save(&Mentorship::new("alice", "dana")).await.unwrap();
        repo.save(&Mentorship::new("alice", "bob")).await.unwrap();

        let found = repo.find_pair("alice", "dana").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_pair("dana", "alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonMentorshipRepository::with_base_path(temp_dir.path().to_path_buf());

        repo.save(&Mentorship::new("alice", "dana")).await.unwrap();
        repo.save(&Mentorship::new("mallory", "bob")).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }
}
