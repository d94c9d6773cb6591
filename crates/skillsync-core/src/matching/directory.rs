//! Read interface the matching engine depends on.
//!
//! The surrounding system supplies the data; the engine never mutates it.

use async_trait::async_trait;

use super::model::Candidate;
use crate::error::Result;
use crate::user::Role;

/// Read-only directory of users and their skill sets.
///
/// Implementations normalize storage quirks (duplicate skill rows,
/// alternate field spellings) before data crosses this boundary; the
/// engine only ever sees clean `Candidate` values.
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    /// Looks up a single user and their skill set.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Candidate))`: User found
    /// - `Ok(None)`: No user with this username
    /// - `Err(_)`: The underlying data source failed
    async fn get_user(&self, username: &str) -> Result<Option<Candidate>>;

    /// Lists every user except `exclude_username`, optionally restricted
    /// to one role, each with their skill set.
    async fn list_candidates(
        &self,
        exclude_username: &str,
        role: Option<Role>,
    ) -> Result<Vec<Candidate>>;
}
