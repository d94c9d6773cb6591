//! Skill profile service.
//!
//! Manages the skills assigned to a user: assignment requires both the
//! user and the catalog entries to exist, and assigning the same skill
//! twice is a silent skip, not an error.

use std::sync::Arc;

use skillsync_core::error::{Result, SkillSyncError};
use skillsync_core::skill::{Skill, SkillName, SkillRepository};
use skillsync_core::user::{UserRepository, UserSkillRepository};

/// Service for managing user skill assignments.
pub struct SkillProfileService {
    /// Repository for user records
    users: Arc<dyn UserRepository>,
    /// Repository for catalog entries
    catalog: Arc<dyn SkillRepository>,
    /// Repository for per-user skill assignments
    assignments: Arc<dyn UserSkillRepository>,
}

impl SkillProfileService {
    /// Creates a new `SkillProfileService` instance.
    pub fn new(
        users: Arc<dyn UserRepository>,
        catalog: Arc<dyn SkillRepository>,
        assignments: Arc<dyn UserSkillRepository>,
    ) -> Self {
        Self {
            users,
            catalog,
            assignments,
        }
    }

    /// Assigns a list of catalog skills to a user.
    ///
    /// Returns the names that were newly assigned; names the user already
    /// had are skipped.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    /// - `InvalidInput` if any name is missing from the catalog (no
    ///   partial assignment is rolled back; earlier names stay assigned)
    pub async fn assign_skills(
        &self,
        username: &str,
        skill_names: &[String],
    ) -> Result<Vec<SkillName>> {
        if !self.users.exists(username).await? {
            return Err(SkillSyncError::not_found("user", username));
        }

        let mut assigned = Vec::new();
        for raw in skill_names {
            let name = SkillName::new(raw)?;
            if !self.catalog.exists(&name).await? {
                return Err(SkillSyncError::invalid_input(format!(
                    "skill '{}' does not exist",
                    name
                )));
            }
            if self.assignments.assign(username, &name).await? {
                assigned.push(name);
            }
        }

        tracing::info!(
            "Assigned {} new skills to '{}'",
            assigned.len(),
            username
        );
        Ok(assigned)
    }

    /// Lists a user's skills, resolved to full catalog entries.
    ///
    /// Assignments whose catalog entry has since been deleted are skipped.
    pub async fn list_skills(&self, username: &str) -> Result<Vec<Skill>> {
        if !self.users.exists(username).await? {
            return Err(SkillSyncError::not_found("user", username));
        }

        let mut skills = Vec::new();
        for name in self.assignments.skills_for(username).await? {
            if let Some(skill) = self.catalog.find_by_name(&name).await? {
                skills.push(skill);
            }
        }
        Ok(skills)
    }

    /// Removes one skill assignment from a user.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user, the catalog entry, or the assignment
    ///   itself does not exist
    pub async fn remove_skill(&self, username: &str, raw_name: &str) -> Result<()> {
        if !self.users.exists(username).await? {
            return Err(SkillSyncError::not_found("user", username));
        }
        let name = SkillName::new(raw_name)?;
        if !self.catalog.exists(&name).await? {
            return Err(SkillSyncError::not_found("skill", name.as_str()));
        }
        if !self.assignments.remove(username, &name).await? {
            return Err(SkillSyncError::not_found(
                "user_skill",
                format!("{}/{}", username, name),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsync_core::user::{Role, User};
    use skillsync_infrastructure::InMemoryStore;

    async fn setup() -> (Arc<InMemoryStore>, SkillProfileService) {
        let store = Arc::new(InMemoryStore::new());
        UserRepository::save(store.as_ref(), &User::new("dana", "Dana", Role::Mentee))
            .await
            .unwrap();
        for skill in ["python", "sql"] {
            SkillRepository::save(
                store.as_ref(),
                &Skill::new(SkillName::new(skill).unwrap()),
            )
            .await
            .unwrap();
        }
        let service = SkillProfileService::new(store.clone(), store.clone(), store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_assign_skips_duplicates() {
        let (_store, service) = setup().await;

        let assigned = service
            .assign_skills("dana", &["Python".to_string(), "sql".to_string()])
            .await
            .unwrap();
        assert_eq!(assigned.len(), 2);

        // Re-assigning the same names assigns nothing new.
        let again = service
            .assign_skills("dana", &["python".to_string()])
            .await
            .unwrap();
        assert!(again.is_empty());
    }

    #[tokio::test]
    async fn test_assign_requires_catalog_entry() {
        let (_store, service) = setup().await;

        let err = service
            .assign_skills("dana", &["cobol".to_string()])
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_assign_requires_user() {
        let (_store, service) = setup().await;

        let err = service
            .assign_skills("nobody", &["python".to_string()])
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_skills_resolves_catalog_entries() {
        let (store, service) = setup().await;

        service
            .assign_skills("dana", &["python".to_string(), "sql".to_string()])
            .await
            .unwrap();

        let skills = service.list_skills("dana").await.unwrap();
        assert_eq!(skills.len(), 2);

        // A deleted catalog entry drops out of the listing.
        SkillRepository::delete(store.as_ref(), &SkillName::new("sql").unwrap())
            .await
            .unwrap();
        let skills = service.list_skills("dana").await.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name.as_str(), "python");
    }

    #[tokio::test]
    async fn test_remove_skill() {
        let (_store, service) = setup().await;

        service
            .assign_skills("dana", &["python".to_string()])
            .await
            .unwrap();
        service.remove_skill("dana", "python").await.unwrap();

        let err = service.remove_skill("dana", "python").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
