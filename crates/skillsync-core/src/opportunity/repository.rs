//! Opportunity repository trait.

use async_trait::async_trait;

use super::model::Opportunity;
use crate::error::Result;

/// Repository for opportunity postings.
///
/// The associated skill set is part of the `Opportunity` aggregate;
/// attaching or detaching a skill is a load-modify-save at this boundary.
#[async_trait]
pub trait OpportunityRepository: Send + Sync {
    /// Finds an opportunity by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Opportunity>>;

    /// Saves an opportunity, replacing any existing record with the same id.
    async fn save(&self, opportunity: &Opportunity) -> Result<()>;

    /// Deletes an opportunity.
    ///
    /// Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Lists all opportunities, sorted by creation time ascending.
    async fn list_all(&self) -> Result<Vec<Opportunity>>;
}
