//! Opportunity service.
//!
//! Postings and their associated skills. Who may delete a posting is a
//! caller concern; this service records the poster but does not gate on
//! it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::opportunity::{Opportunity, OpportunityKind, OpportunityRepository};
use skillsync_core::skill::{SkillName, SkillRepository};
use skillsync_core::user::UserRepository;

/// Input for creating a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOpportunity {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub posted_by: String,
    pub kind: OpportunityKind,
}

/// Partial posting update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpportunityUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: Option<OpportunityKind>,
}

/// Service for managing opportunity postings.
pub struct OpportunityService {
    /// Repository for user records
    users: Arc<dyn UserRepository>,
    /// Repository for catalog entries
    catalog: Arc<dyn SkillRepository>,
    /// Repository for postings
    opportunities: Arc<dyn OpportunityRepository>,
}

impl OpportunityService {
    /// Creates a new `OpportunityService` instance.
    pub fn new(
        users: Arc<dyn UserRepository>,
        catalog: Arc<dyn SkillRepository>,
        opportunities: Arc<dyn OpportunityRepository>,
    ) -> Self {
        Self {
            users,
            catalog,
            opportunities,
        }
    }

    /// Creates a posting.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the posting user does not exist.
    pub async fn create(&self, new: NewOpportunity) -> Result<Opportunity> {
        if !self.users.exists(&new.posted_by).await? {
            return Err(SkillSyncError::invalid_input(format!(
                "user '{}' does not exist",
                new.posted_by
            )));
        }
        let opportunity = Opportunity::new(new.title, new.description, new.posted_by, new.kind);
        self.opportunities.save(&opportunity).await?;
        tracing::info!(
            "Created {} opportunity '{}'",
            opportunity.kind,
            opportunity.id
        );
        Ok(opportunity)
    }

    /// Fetches a posting by id.
    pub async fn get(&self, id: &str) -> Result<Opportunity> {
        self.opportunities
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSyncError::not_found("opportunity", id))
    }

    /// Applies a partial update to a posting.
    pub async fn update(&self, id: &str, update: OpportunityUpdate) -> Result<Opportunity> {
        let mut opportunity = self.get(id).await?;
        if let Some(title) = update.title {
            opportunity.title = title;
        }
        if update.description.is_some() {
            opportunity.description = update.description;
        }
        if let Some(kind) = update.kind {
            opportunity.kind = kind;
        }
        self.opportunities.save(&opportunity).await?;
        Ok(opportunity)
    }

    /// Deletes a posting.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if self.opportunities.find_by_id(id).await?.is_none() {
            return Err(SkillSyncError::not_found("opportunity", id));
        }
        self.opportunities.delete(id).await
    }

    /// Lists all postings.
    pub async fn list(&self) -> Result<Vec<Opportunity>> {
        self.opportunities.list_all().await
    }

    /// Associates catalog skills with a posting.
    ///
    /// Returns the names that were newly attached; names the posting
    /// already carried are skipped.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the posting does not exist
    /// - `InvalidInput` if any name is missing from the catalog
    pub async fn attach_skills(
        &self,
        id: &str,
        skill_names: &[String],
    ) -> Result<Vec<SkillName>> {
        let mut opportunity = self.get(id).await?;

        let mut attached = Vec::new();
        for raw in skill_names {
            let name = SkillName::new(raw)?;
            if !self.catalog.exists(&name).await? {
                return Err(SkillSyncError::invalid_input(format!(
                    "skill '{}' does not exist",
                    name
                )));
            }
            if opportunity.skills.insert(name.clone()) {
                attached.push(name);
            }
        }

        if !attached.is_empty() {
            self.opportunities.save(&opportunity).await?;
        }
        Ok(attached)
    }

    /// Removes one skill association from a posting.
    pub async fn detach_skill(&self, id: &str, raw_name: &str) -> Result<()> {
        let mut opportunity = self.get(id).await?;
        let name = SkillName::new(raw_name)?;
        if !opportunity.skills.remove(&name) {
            return Err(SkillSyncError::not_found(
                "opportunity_skill",
                format!("{}/{}", id, name),
            ));
        }
        self.opportunities.save(&opportunity).await?;
        Ok(())
    }
}
