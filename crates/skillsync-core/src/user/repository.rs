//! User repository trait.
//!
//! Defines the interface for user persistence operations.

use async_trait::async_trait;

use super::model::User;
use crate::error::Result;

/// Repository for user persistence.
///
/// Implementations should handle concurrent access safely; the matching
/// engine and the application services only ever hold this as
/// `Arc<dyn UserRepository>`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by username.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: User found
    /// - `Ok(None)`: No user with this username
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Saves a user, replacing any existing record with the same username.
    async fn save(&self, user: &User) -> Result<()>;

    /// Deletes a user.
    ///
    /// Deleting a username that does not exist is not an error.
    async fn delete(&self, username: &str) -> Result<()>;

    /// Lists all users, sorted by username ascending.
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Checks if a user exists.
    async fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
