//! Candidate directory adapter over the user repositories.
//!
//! Lets the match engine run against any `UserRepository` +
//! `UserSkillRepository` pair without knowing how either is stored.

use std::sync::Arc;

use async_trait::async_trait;

use skillsync_core::error::Result;
use skillsync_core::matching::{Candidate, CandidateDirectory};
use skillsync_core::user::{Role, UserRepository, UserSkillRepository};

/// `CandidateDirectory` implementation that composes the two user
/// repositories.
pub struct RepositoryCandidateDirectory {
    /// Repository for user records
    users: Arc<dyn UserRepository>,
    /// Repository for per-user skill assignments
    user_skills: Arc<dyn UserSkillRepository>,
}

impl RepositoryCandidateDirectory {
    /// Creates a new adapter over the given repositories.
    pub fn new(users: Arc<dyn UserRepository>, user_skills: Arc<dyn UserSkillRepository>) -> Self {
        Self { users, user_skills }
    }
}

#[async_trait]
impl CandidateDirectory for RepositoryCandidateDirectory {
    async fn get_user(&self, username: &str) -> Result<Option<Candidate>> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };
        let skills = self.user_skills.skills_for(username).await?;
        Ok(Some(Candidate::new(user, skills)))
    }

    async fn list_candidates(
        &self,
        exclude_username: &str,
        role: Option<Role>,
    ) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for user in self.users.list_all().await? {
            if user.username == exclude_username {
                continue;
            }
            if role.is_some_and(|required| user.role != required) {
                continue;
            }
            let skills = self.user_skills.skills_for(&user.username).await?;
            candidates.push(Candidate::new(user, skills));
        }
        Ok(candidates)
    }
}
