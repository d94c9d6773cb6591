//! JSON-file user skill assignment repository implementation.
//!
//! Stores each user's skill set as a versioned JSON document under
//! `{store}/user_skills/`, keyed by username.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use version_migrate::Migrator;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::skill::SkillName;
use skillsync_core::user::{SkillProfile, UserSkillRepository};

use crate::dto::{create_skill_profile_migrator, file_id};
use crate::paths::SkillSyncPaths;

/// File-based skill assignment repository with version migration support.
pub struct JsonUserSkillRepository {
    /// Directory holding one document per user.
    dir: PathBuf,
    /// Migrator for version handling.
    migrator: Migrator,
}

impl JsonUserSkillRepository {
    const ENTITY: &'static str = "skill_profile";
    const SUBDIR: &'static str = "user_skills";

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
            migrator: create_skill_profile_migrator(),
        }
    }

    fn record_path(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_id(username)))
    }

    async fn load_record(&self, path: &Path) -> Result<SkillProfile> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to read skill profile: {}", e)))?;

        let json_value: serde_json::Value = serde_json::from_str(&content)?;

        let profile: SkillProfile = self
            .migrator
            .load_flat_from(Self::ENTITY, json_value)
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to migrate skill profile: {}", e))
            })?;

        Ok(profile)
    }

    async fn load_or_empty(&self, username: &str) -> Result<SkillProfile> {
        let path = self.record_path(username);
        if !path.exists() {
            return Ok(SkillProfile::new(username));
        }
        self.load_record(&path).await
    }

    async fn save_record(&self, profile: &SkillProfile) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to create directory: {}", e)))?;

        let serialized = self
            .migrator
            .save_domain_flat(Self::ENTITY, profile.clone())
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to serialize skill profile: {}", e))
            })?;

        fs::write(self.record_path(&profile.username), serialized)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to write skill profile: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserSkillRepository for JsonUserSkillRepository {
    async fn skills_for(&self, username: &str) -> Result<BTreeSet<SkillName>> {
        Ok(self.load_or_empty(username).await?.skills)
    }

    async fn assign(&self, username: &str, skill: &SkillName) -> Result<bool> {
        let mut profile = self.load_or_empty(username).await?;
        if !profile.skills.insert(skill.clone()) {
            return Ok(false);
        }
        self.save_record(&profile).await?;
        Ok(true)
    }

    async fn remove(&self, username: &str, skill: &SkillName) -> Result<bool> {
        let mut profile = self.load_or_empty(username).await?;
        if !profile.skills.remove(skill) {
            return Ok(false);
        }
        self.save_record(&profile).await?;
        Ok(true)
    }

    async fn clear_for(&self, username: &str) -> Result<()> {
        let path = self.record_path(username);
        if path.exists() {
            fs::remove_file(path)
                .await
                .map_err(|e| SkillSyncError::io(format!("Failed to delete skill profile: {}", e)))?;
        }
        Ok(())
    }
}
