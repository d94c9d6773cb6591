//! Mentorship service.
//!
//! Creating a mentorship validates both parties and their roles, and is
//! idempotent per (mentor, mentee) pair: creating an existing pair hands
//! back the existing record instead of inserting a duplicate. There is
//! deliberately no deletion surface; connections are permanent.

use std::sync::Arc;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::mentorship::{Mentorship, MentorshipRepository};
use skillsync_core::user::{Role, UserRepository};

/// Result of a create call: either a fresh record or the pre-existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum MentorshipOutcome {
    Created(Mentorship),
    Existing(Mentorship),
}

impl MentorshipOutcome {
    /// The record, whichever way it was obtained.
    pub fn mentorship(&self) -> &Mentorship {
        match self {
            MentorshipOutcome::Created(m) | MentorshipOutcome::Existing(m) => m,
        }
    }

    /// Whether the call inserted a new record.
    pub fn was_created(&self) -> bool {
        matches!(self, MentorshipOutcome::Created(_))
    }
}

/// Service for establishing mentor/mentee connections.
pub struct MentorshipService {
    /// Repository for user records
    users: Arc<dyn UserRepository>,
    /// Repository for mentorship records
    mentorships: Arc<dyn MentorshipRepository>,
}

impl MentorshipService {
    /// Creates a new `MentorshipService` instance.
    pub fn new(
        users: Arc<dyn UserRepository>,
        mentorships: Arc<dyn MentorshipRepository>,
    ) -> Self {
        Self { users, mentorships }
    }

    /// Establishes a mentorship between two users.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when either username is unknown, either
    /// user has the wrong role, or both names are the same user.
    pub async fn create(&self, mentor_name: &str, mentee_name: &str) -> Result<MentorshipOutcome> {
        if mentor_name == mentee_name {
            return Err(SkillSyncError::invalid_input(
                "a user cannot mentor themselves",
            ));
        }

        let mentor = self
            .users
            .find_by_username(mentor_name)
            .await?
            .ok_or_else(|| {
                SkillSyncError::invalid_input(format!("mentor '{}' does not exist", mentor_name))
            })?;
        if mentor.role != Role::Mentor {
            return Err(SkillSyncError::invalid_input(format!(
                "'{}' is not a mentor",
                mentor_name
            )));
        }

        let mentee = self
            .users
            .find_by_username(mentee_name)
            .await?
            .ok_or_else(|| {
                SkillSyncError::invalid_input(format!("mentee '{}' does not exist", mentee_name))
            })?;
        if mentee.role != Role::Mentee {
            return Err(SkillSyncError::invalid_input(format!(
                "'{}' is not a mentee",
                mentee_name
            )));
        }

        if let Some(existing) = self.mentorships.find_pair(mentor_name, mentee_name).await? {
            return Ok(MentorshipOutcome::Existing(existing));
        }

        let mentorship = Mentorship::new(mentor_name, mentee_name);
        self.mentorships.save(&mentorship).await?;
        tracing::info!(
            "Created mentorship '{}' ({} -> {})",
            mentorship.id,
            mentor_name,
            mentee_name
        );
        Ok(MentorshipOutcome::Created(mentorship))
    }

    /// Fetches a mentorship by id.
    pub async fn get(&self, id: &str) -> Result<Mentorship> {
        self.mentorships
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSyncError::not_found("mentorship", id))
    }

    /// Lists all mentorships.
    pub async fn list(&self) -> Result<Vec<Mentorship>> {
        self.mentorships.list_all().await
    }
}
