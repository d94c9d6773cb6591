//! JSON-file user repository implementation.
//!
//! Stores each user as a versioned JSON document under `{store}/users/`.
//! Uses version-migrate for automatic schema migration.
//!
//! File location: `{store_dir}/users/{file_id(username)}.json`

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use version_migrate::Migrator;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::user::{User, UserRepository};

use crate::dto::{create_user_migrator, file_id};
use crate::paths::SkillSyncPaths;

/// File-based user repository with version migration support.
pub struct JsonUserRepository {
    /// Directory holding one document per user.
    dir: PathBuf,
    /// Migrator for version handling.
    migrator: Migrator,
}

impl JsonUserRepository {
    const ENTITY: &'static str = "user";
    const SUBDIR: &'static str = "users";

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
            migrator: create_user_migrator(),
        }
    }

    fn record_path(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_id(username)))
    }

    async fn load_record(&self, path: &Path) -> Result<User> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read user record: {}", e)))?;

        let json_value: serde_json::Value = serde_json::from_str(&content)?;

        let user: User = self
            .migrator
            .load_flat_from(Self::ENTITY, json_value)
            .map_err(|e| SkillSyncError::data_access(format!("Failed to migrate user record: {}", e)))?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let path = self.record_path(username);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.load_record(&path).await?))
    }

    async fn save(&self, user: &User) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to create directory: {}", e)))?;

        let serialized = self
            .migrator
            .save_domain_flat(Self::ENTITY, user.clone())
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to serialize user record: {}", e))
            })?;

        fs::write(self.record_path(&user.username), serialized)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to write user record: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<()> {
        let path = self.record_path(username);
        if path.exists() {
            fs::remove_file(path)
                .await
                .map_err(|e| SkillSyncError::io(format!("Failed to delete user record: {}", e)))?;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read user directory: {}", e)))?;

        let mut users = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read user directory: {}", e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            users.push(self.load_record(&path).await?);
        }

        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsync_core::user::Role;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::with_base_path(temp_dir.path().to_path_buf());

        assert!(repo.find_by_username("dana").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::with_base_path(temp_dir.path().to_path_buf());

        let mut user = User::new("dana", "Dana", Role::Mentee);
        user.experience_level = Some("junior".to_string());
        repo.save(&user).await.unwrap();

        let found = repo.find_by_username("dana").await.unwrap().unwrap();
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::with_base_path(temp_dir.path().to_path_buf());

        let mut user = User::new("dana", "Dana", Role::Mentee);
        repo.save(&user).await.unwrap();

        user.name = "Dana L.".to_string();
        repo.save(&user).await.unwrap();

        let found = repo.find_by_username("dana").await.unwrap().unwrap();
        assert_eq!(found.name, "Dana L.");
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::with_base_path(temp_dir.path().to_path_buf());

        repo.save(&User::new("dana", "Dana", Role::Mentee))
            .await
            .unwrap();
        repo.delete("dana").await.unwrap();
        assert!(repo.find_by_username("dana").await.unwrap().is_none());

        // Second delete is a no-op, not an error.
        repo.delete("dana").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_all_sorted_by_username() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::with_base_path(temp_dir.path().to_path_buf());

        repo.save(&User::new("zoe", "Zoe", Role::Mentor)).await.unwrap();
        repo.save(&User::new("alice", "Alice", Role::Mentor))
            .await
            .unwrap();
        repo.save(&User::new("dana", "Dana", Role::Mentee)).await.unwrap();

        let usernames: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(usernames, vec!["alice", "dana", "zoe"]);
    }
}
