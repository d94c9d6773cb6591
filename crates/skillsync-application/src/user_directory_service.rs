//! User directory service.
//!
//! Registration, profile edits, and account removal. The username and
//! role are fixed at registration; `ProfileUpdate` deliberately has no
//! fields for either.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::user::{User, UserRepository, UserSkillRepository};

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub profile_summary: Option<String>,
}

/// Service for managing user accounts.
pub struct UserDirectoryService {
    /// Repository for user records
    users: Arc<dyn UserRepository>,
    /// Repository for per-user skill assignments
    user_skills: Arc<dyn UserSkillRepository>,
}

impl UserDirectoryService {
    /// Creates a new `UserDirectoryService` instance.
    pub fn new(users: Arc<dyn UserRepository>, user_skills: Arc<dyn UserSkillRepository>) -> Self {
        Self { users, user_skills }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the username is already taken.
    pub async fn register(&self, user: User) -> Result<User> {
        if self.users.exists(&user.username).await? {
            return Err(SkillSyncError::invalid_input("username already taken"));
        }
        self.users.save(&user).await?;
        tracing::info!("Registered user '{}'", user.username);
        Ok(user)
    }

    /// Fetches a user by username.
    pub async fn get(&self, username: &str) -> Result<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| SkillSyncError::not_found("user", username))
    }

    /// Applies a partial profile update and returns the updated user.
    pub async fn update_profile(&self, username: &str, update: ProfileUpdate) -> Result<User> {
        let mut user = self.get(username).await?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if update.phone_number.is_some() {
            user.phone_number = update.phone_number;
        }
        if update.experience_level.is_some() {
            user.experience_level = update.experience_level;
        }
        if update.profile_summary.is_some() {
            user.profile_summary = update.profile_summary;
        }
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Deletes an account and all of its skill assignments.
    pub async fn delete(&self, username: &str) -> Result<()> {
        if !self.users.exists(username).await? {
            return Err(SkillSyncError::not_found("user", username));
        }
        self.users.delete(username).await?;
        self.user_skills.clear_for(username).await?;
        tracing::info!("Deleted user '{}'", username);
        Ok(())
    }

    /// Lists all users, sorted by username.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.users.list_all().await
    }
}
