//! JSON-file opportunity repository implementation.
//!
//! Stores each opportunity (including its associated skills) as a
//! versioned JSON document under `{store}/opportunities/`, keyed by id.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use version_migrate::Migrator;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::opportunity::{Opportunity, OpportunityRepository};

use crate::dto::{create_opportunity_migrator, file_id};
use crate::paths::SkillSyncPaths;

/// File-based opportunity repository with version migration support.
pub struct JsonOpportunityRepository {
    /// Directory holding one document per opportunity.
    dir: PathBuf,
    /// Migrator for version handling.
    migrator: Migrator,
}

impl JsonOpportunityRepository {
    const ENTITY: &'static str = "opportunity";
    const SUBDIR: &'static str = "opportunities";

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
            migrator: create_opportunity_migrator(),
        }
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_id(id)))
    }

    async fn load_record(&self, path: &Path) -> Result<Opportunity> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            SkillSyncError::io(format!("Failed to read opportunity record: {}", e))
        })?;

        let json_value: serde_json::Value = serde_json::from_str(&content)?;

        let opportunity: Opportunity = self
            .migrator
            .load_flat_from(Self::ENTITY, json_value)
            .map_err(|e| {
                SkillSyncError::data_access(format!("Failed to migrate opportunity record: {}", e))
            })?;

        Ok(opportunity)
    }
}

#[async_trait]
impl OpportunityRepository for JsonOpportunityRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Opportunity>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.load_record(&path).await?))
    }

    async fn save(&self, opportunity: &Opportunity) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to create directory: {}", e)))?;

        let serialized = self
            .migrator
            .save_domain_flat(Self::ENTITY, opportunity.clone())
            .map_err(|e| {
                SkillSyncError::data_access(format!(
                    "Failed to serialize opportunity record: {}",
                    e
                ))
            })?;

        fs::write(self.record_path(&opportunity.id), serialized)
            .await
            .map_err(|e| SkillSyncError::io(format!("Failed to write opportunity record: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(path).await.map_err(|e| {
                SkillSyncError::io(format!("Failed to delete opportunity record: {}", e))
            })?;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Opportunity>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.dir).await.map_err(|e| {
            SkillSyncError::io(format!("Failed to read opportunity directory: {}", e))
        })?;

        let mut opportunities = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            SkillSyncError::io(format!("Failed to read opportunity directory: {}", e))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            opportunities.push(self.load_record(&path).await?);
        }

        opportunities
            .sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(opportunities)
    }
}
