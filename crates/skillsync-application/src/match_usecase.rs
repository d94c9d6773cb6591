//! Match use case implementation.
//!
//! Wraps the match engine behind the request/response contract the
//! dashboards consume: a username plus an optional candidate role in, a
//! JSON-serializable `{ matches: [...] }` out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use skillsync_core::config::MatchSettings;
use skillsync_core::error::Result;
use skillsync_core::matching::{MatchEngine, RoleFilter};
use skillsync_core::user::{Role, UserRepository, UserSkillRepository};

use crate::directory::RepositoryCandidateDirectory;

/// A match request as received from a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Subject username.
    pub username: String,
    /// Candidate role to restrict to; when absent, candidates take the
    /// role opposite the subject's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// One ranked entry of a match response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedUser {
    pub username: String,
    pub name: String,
    pub role: Role,
    /// Rounded to the configured precision.
    pub score: f64,
    /// Skill names the subject shares with this candidate.
    pub skills: Vec<String>,
}

/// The full match response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchedUser>,
}

/// Use case computing ranked matches for a subject user.
pub struct MatchUseCase {
    /// The scoring engine, wired to a repository-backed directory
    engine: MatchEngine,
    /// Decimal places for rendered scores
    score_precision: u8,
}

impl MatchUseCase {
    /// Creates a use case with default match settings.
    pub fn new(
        users: Arc<dyn UserRepository>,
        user_skills: Arc<dyn UserSkillRepository>,
    ) -> Self {
        Self::with_settings(users, user_skills, MatchSettings::default())
    }

    /// Creates a use case with explicit match settings.
    pub fn with_settings(
        users: Arc<dyn UserRepository>,
        user_skills: Arc<dyn UserSkillRepository>,
        settings: MatchSettings,
    ) -> Self {
        let directory = Arc::new(RepositoryCandidateDirectory::new(users, user_skills));
        let score_precision = settings.score_precision;
        Self {
            engine: MatchEngine::with_settings(directory, settings),
            score_precision,
        }
    }

    /// Computes the ranked matches for a request.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `role` is present but not a known role
    /// - `NotFound` if the subject username does not resolve
    /// - any repository failure, propagated unchanged
    pub async fn execute(&self, request: &MatchRequest) -> Result<MatchResponse> {
        let filter = match &request.role {
            Some(role) => RoleFilter::Only(role.parse()?),
            None => RoleFilter::Opposite,
        };

        let results = self.engine.find_matches(&request.username, filter).await?;
        tracing::info!(
            "Computed {} matches for '{}'",
            results.len(),
            request.username
        );

        let matches = results
            .into_iter()
            .map(|result| MatchedUser {
                username: result.candidate.username,
                name: result.candidate.name,
                role: result.candidate.role,
                score: round_score(result.score, self.score_precision),
                skills: result
                    .overlapping_skills
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
            .collect();

        Ok(MatchResponse { matches })
    }
}

fn round_score(score: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (score * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsync_core::skill::SkillName;
    use skillsync_core::user::User;
    use skillsync_infrastructure::InMemoryStore;

    async fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        for (username, role, skills) in [
            ("dana", Role::Mentee, vec!["python", "sql"]),
            ("alice", Role::Mentor, vec!["python", "sql", "ml"]),
            ("bob", Role::Mentor, vec!["java"]),
        ] {
            UserRepository::save(store.as_ref(), &User::new(username, username, role))
                .await
                .unwrap();
            for skill in skills {
                store
                    .assign(username, &SkillName::new(skill).unwrap())
                    .await
                    .unwrap();
            }
        }
        store
    }

    #[tokio::test]
    async fn test_execute_returns_ranked_matches() {
        let store = seeded_store().await;
        let usecase = MatchUseCase::new(store.clone(), store.clone());

        let response = usecase
            .execute(&MatchRequest {
                username: "dana".to_string(),
                role: None,
            })
            .await
            .unwrap();

        assert_eq!(response.matches.len(), 1);
        let top = &response.matches[0];
        assert_eq!(top.username, "alice");
        assert_eq!(top.role, Role::Mentor);
        assert_eq!(top.score, 0.67);
        assert_eq!(top.skills, vec!["python", "sql"]);
    }

    #[tokio::test]
    async fn test_response_wire_shape() {
        let store = seeded_store().await;
        let usecase = MatchUseCase::new(store.clone(), store.clone());

        let response = usecase
            .execute(&MatchRequest {
                username: "dana".to_string(),
                role: Some("mentor".to_string()),
            })
            .await
            .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        let entry = &json["matches"][0];
        assert_eq!(entry["username"], "alice");
        assert_eq!(entry["name"], "alice");
        assert_eq!(entry["role"], "mentor");
        assert_eq!(entry["score"], 0.67);
        assert_eq!(entry["skills"][0], "python");
    }

    #[tokio::test]
    async fn test_unknown_role_is_invalid_input() {
        let store = seeded_store().await;
        let usecase = MatchUseCase::new(store.clone(), store.clone());

        let err = usecase
            .execute(&MatchRequest {
                username: "dana".to_string(),
                role: Some("coach".to_string()),
            })
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_unknown_subject_is_not_found() {
        let store = seeded_store().await;
        let usecase = MatchUseCase::new(store.clone(), store.clone());

        let err = usecase
            .execute(&MatchRequest {
                username: "nobody".to_string(),
                role: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_pool_yields_empty_matches() {
        let store = Arc::new(InMemoryStore::new());
        UserRepository::save(store.as_ref(), &User::new("dana", "Dana", Role::Mentee))
            .await
            .unwrap();
        let usecase = MatchUseCase::new(store.clone(), store.clone());

        let response = usecase
            .execute(&MatchRequest {
                username: "dana".to_string(),
                role: None,
            })
            .await
            .unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_score(2.0 / 3.0, 1), 0.7);
        assert_eq!(round_score(0.5, 2), 0.5);
    }
}
