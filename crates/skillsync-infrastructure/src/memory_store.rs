//! In-memory store implementing every repository trait.
//!
//! Backs tests and embedded use where no file persistence is wanted.
//! All collections live behind `tokio::sync::RwLock`, so one store can
//! be shared across tasks as `Arc<InMemoryStore>` and handed out as any
//! of the repository trait objects it implements.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use skillsync_core::error::Result;
use skillsync_core::matching::{Candidate, CandidateDirectory};
use skillsync_core::mentorship::{Mentorship, MentorshipRepository};
use skillsync_core::opportunity::{Opportunity, OpportunityRepository};
use skillsync_core::skill::{Skill, SkillName, SkillRepository};
use skillsync_core::user::{Role, User, UserRepository, UserSkillRepository};

/// In-memory repositories over shared locked maps.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<BTreeMap<String, User>>,
    user_skills: RwLock<HashMap<String, BTreeSet<SkillName>>>,
    skills: RwLock<BTreeMap<SkillName, Skill>>,
    mentorships: RwLock<HashMap<String, Mentorship>>,
    opportunities: RwLock<HashMap<String, Opportunity>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(username);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}

#[async_trait]
impl UserSkillRepository for InMemoryStore {
    async fn skills_for(&self, username: &str) -> Result<BTreeSet<SkillName>> {
        let assignments = self.user_skills.read().await;
        Ok(assignments.get(username).cloned().unwrap_or_default())
    }

    async fn assign(&self, username: &str, skill: &SkillName) -> Result<bool> {
        let mut assignments = self.user_skills.write().await;
        Ok(assignments
            .entry(username.to_string())
            .or_default()
            .insert(skill.clone()))
    }

    async fn remove(&self, username: &str, skill: &SkillName) -> Result<bool> {
        let mut assignments = self.user_skills.write().await;
        Ok(assignments
            .get_mut(username)
            .is_some_and(|skills| skills.remove(skill)))
    }

    async fn clear_for(&self, username: &str) -> Result<()> {
        let mut assignments = self.user_skills.write().await;
        assignments.remove(username);
        Ok(())
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn find_by_name(&self, name: &SkillName) -> Result<Option<Skill>> {
        let skills = self.skills.read().await;
        Ok(skills.get(name).cloned())
    }

    async fn save(&self, skill: &Skill) -> Result<()> {
        let mut skills = self.skills.write().await;
        skills.insert(skill.name.clone(), skill.clone());
        Ok(())
    }

    async fn delete(&self, name: &SkillName) -> Result<()> {
        let mut skills = self.skills.write().await;
        skills.remove(name);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Skill>> {
        let skills = self.skills.read().await;
        Ok(skills.values().cloned().collect())
    }
}

#[async_trait]
impl MentorshipRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Mentorship>> {
        let mentorships = self.mentorships.read().await;
        Ok(mentorships.get(id).cloned())
    }

    async fn find_pair(
        &self,
        mentor_name: &str,
        mentee_name: &str,
    ) -> Result<Option<Mentorship>> {
        let mentorships = self.mentorships.read().await;
        Ok(mentorships
            .values()
            .find(|m| m.mentor_name == mentor_name && m.mentee_name == mentee_name)
            .cloned())
    }

    async fn save(&self, mentorship: &Mentorship) -> Result<()> {
        let mut mentorships = self.mentorships.write().await;
        mentorships.insert(mentorship.id.clone(), mentorship.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut mentorships = self.mentorships.write().await;
        mentorships.remove(id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Mentorship>> {
        let mentorships = self.mentorships.read().await;
        let mut all: Vec<Mentorship> = mentorships.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}

#[async_trait]
impl OpportunityRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Opportunity>> {
        let opportunities = self.opportunities.read().await;
        Ok(opportunities.get(id).cloned())
    }

    async fn save(&self, opportunity: &Opportunity) -> Result<()> {
        let mut opportunities = self.opportunities.write().await;
        opportunities.insert(opportunity.id.clone(), opportunity.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut opportunities = self.opportunities.write().await;
        opportunities.remove(id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Opportunity>> {
        let opportunities = self.opportunities.read().await;
        let mut all: Vec<Opportunity> = opportunities.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}

#[async_trait]
impl CandidateDirectory for InMemoryStore {
    async fn get_user(&self, username: &str) -> Result<Option<Candidate>> {
        let Some(user) = UserRepository::find_by_username(self, username).await? else {
            return Ok(None);
        };
        let skills = self.skills_for(username).await?;
        Ok(Some(Candidate::new(user, skills)))
    }

    async fn list_candidates(
        &self,
        exclude_username: &str,
        role: Option<Role>,
    ) -> Result<Vec<Candidate>> {
        let users: Vec<User> = {
            let guard = self.users.read().await;
            guard
                .values()
                .filter(|u| u.username != exclude_username)
                .filter(|u| role.is_none_or(|r| u.role == r))
                .cloned()
                .collect()
        };

        let assignments = self.user_skills.read().await;
        Ok(users
            .into_iter()
            .map(|user| {
                let skills = assignments.get(&user.username).cloned().unwrap_or_default();
                Candidate::new(user, skills)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> SkillName {
        SkillName::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let store = InMemoryStore::new();
        let user = User::new("dana", "Dana", Role::Mentee);

        UserRepository::save(&store, &user).await.unwrap();
        assert_eq!(
            store.find_by_username("dana").await.unwrap().unwrap(),
            user
        );

        UserRepository::delete(&store, "dana").await.unwrap();
        assert!(store.find_by_username("dana").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_candidates_filters_role_and_subject() {
        let store = InMemoryStore::new();
        UserRepository::save(&store, &User::new("dana", "Dana", Role::Mentee))
            .await
            .unwrap();
        UserRepository::save(&store, &User::new("alice", "Alice", Role::Mentor))
            .await
            .unwrap();
        UserRepository::save(&store, &User::new("carol", "Carol", Role::Mentee))
            .await
            .unwrap();
        store.assign("alice", &skill("python")).await.unwrap();

        let candidates = store
            .list_candidates("dana", Some(Role::Mentor))
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].user.username, "alice");
        assert_eq!(candidates[0].skills.len(), 1);

        let everyone = store.list_candidates("dana", None).await.unwrap();
        assert_eq!(everyone.len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_includes_skills() {
        let store = InMemoryStore::new();
        UserRepository::save(&store, &User::new("dana", "Dana", Role::Mentee))
            .await
            .unwrap();
        store.assign("dana", &skill("python")).await.unwrap();
        store.assign("dana", &skill("sql")).await.unwrap();

        let candidate = store.get_user("dana").await.unwrap().unwrap();
        assert_eq!(candidate.skills.len(), 2);
        assert!(store.get_user("nobody").await.unwrap().is_none());
    }
}
