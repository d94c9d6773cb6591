//! Mentorship repository trait.

use async_trait::async_trait;

use super::model::Mentorship;
use crate::error::Result;

/// Repository for mentorship records.
///
/// `delete` exists for storage hygiene; the service layer deliberately
/// exposes no deletion surface (connections are permanent).
#[async_trait]
pub trait MentorshipRepository: Send + Sync {
    /// Finds a mentorship by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Mentorship>>;

    /// Finds the mentorship for an exact (mentor, mentee) pair, if any.
    async fn find_pair(&self, mentor_name: &str, mentee_name: &str)
    -> Result<Option<Mentorship>>;

    /// Saves a mentorship record.
    async fn save(&self, mentorship: &Mentorship) -> Result<()>;

    /// Deletes a mentorship record.
    ///
    /// Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Lists all mentorships, sorted by creation time ascending.
    async fn list_all(&self) -> Result<Vec<Mentorship>>;
}
