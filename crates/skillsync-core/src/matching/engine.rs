//! The match engine.
//!
//! Scores a subject user against a pool of candidates by skill overlap
//! and returns a ranked, deduplicated list. Each call is stateless: the
//! engine holds no mutable state and never writes through its directory,
//! so concurrent calls for different subjects need no coordination.

use std::cmp::Ordering;
use std::sync::Arc;

use super::directory::CandidateDirectory;
use super::model::{MatchResult, RoleFilter};
use super::score;
use crate::config::MatchSettings;
use crate::error::{Result, SkillSyncError};

/// Skill-overlap matching over an injected read-only directory.
pub struct MatchEngine {
    directory: Arc<dyn CandidateDirectory>,
    settings: MatchSettings,
}

impl MatchEngine {
    /// Creates an engine with default settings.
    pub fn new(directory: Arc<dyn CandidateDirectory>) -> Self {
        Self::with_settings(directory, MatchSettings::default())
    }

    /// Creates an engine with explicit settings.
    pub fn with_settings(directory: Arc<dyn CandidateDirectory>, settings: MatchSettings) -> Self {
        Self {
            directory,
            settings,
        }
    }

    /// Returns the settings the engine was built with.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Ranks candidates for a subject by skill overlap.
    ///
    /// The candidate pool is every user except the subject, restricted by
    /// `filter` (opposite role by default). Candidates sharing no skill
    /// with the subject are dropped unless `include_zero_score` is set.
    /// Results are ordered by score descending; equal scores fall back to
    /// candidate username ascending, so the ranking is deterministic and
    /// repeated calls over unchanged data return identical output.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `subject_username` does not resolve to a user
    /// - any directory failure, propagated unchanged
    pub async fn find_matches(
        &self,
        subject_username: &str,
        filter: RoleFilter,
    ) -> Result<Vec<MatchResult>> {
        let subject = self
            .directory
            .get_user(subject_username)
            .await?
            .ok_or_else(|| SkillSyncError::not_found("user", subject_username))?;

        let restriction = filter.resolve(subject.user.role);
        let pool = self
            .directory
            .list_candidates(subject_username, restriction)
            .await?;

        let mut matches: Vec<MatchResult> = pool
            .into_iter()
            .filter_map(|candidate| {
                let score = score::jaccard(&subject.skills, &candidate.skills);
                if score <= 0.0 && !self.settings.include_zero_score {
                    return None;
                }
                let overlapping_skills = score::overlapping(&subject.skills, &candidate.skills)
                    .into_iter()
                    .collect();
                Some(MatchResult {
                    candidate: candidate.user,
                    score,
                    overlapping_skills,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.candidate.username.cmp(&b.candidate.username))
        });

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use async_trait::async_trait;

    use super::*;
    use crate::matching::model::Candidate;
    use crate::skill::SkillName;
    use crate::user::{Role, User};

    /// Fixed in-memory directory for engine tests.
    struct StaticDirectory {
        entries: Vec<Candidate>,
    }

    #[async_trait]
    impl CandidateDirectory for StaticDirectory {
        async fn get_user(&self, username: &str) -> Result<Option<Candidate>> {
            Ok(self
                .entries
                .iter()
                .find(|c| c.user.username == username)
                .cloned())
        }

        async fn list_candidates(
            &self,
            exclude_username: &str,
            role: Option<Role>,
        ) -> Result<Vec<Candidate>> {
            Ok(self
                .entries
                .iter()
                .filter(|c| c.user.username != exclude_username)
                .filter(|c| role.is_none_or(|r| c.user.role == r))
                .cloned()
                .collect())
        }
    }

    /// Directory whose reads always fail, for propagation tests.
    struct BrokenDirectory;

    #[async_trait]
    impl CandidateDirectory for BrokenDirectory {
        async fn get_user(&self, _username: &str) -> Result<Option<Candidate>> {
            Err(SkillSyncError::data_access("connection refused"))
        }

        async fn list_candidates(
            &self,
            _exclude_username: &str,
            _role: Option<Role>,
        ) -> Result<Vec<Candidate>> {
            Err(SkillSyncError::data_access("connection refused"))
        }
    }

    fn skills(names: &[&str]) -> BTreeSet<SkillName> {
        names.iter().map(|s| SkillName::new(s).unwrap()).collect()
    }

    fn entry(username: &str, role: Role, skill_names: &[&str]) -> Candidate {
        Candidate::new(User::new(username, username, role), skills(skill_names))
    }

    fn directory() -> Arc<StaticDirectory> {
        Arc::new(StaticDirectory {
            entries: vec![
                entry("dana", Role::Mentee, &["python", "sql"]),
                entry("alice", Role::Mentor, &["python", "sql", "ml"]),
                entry("bob", Role::Mentor, &["java"]),
                entry("carol", Role::Mentee, &["python", "sql"]),
            ],
        })
    }

    #[tokio::test]
    async fn test_ranking_by_overlap() {
        let engine = MatchEngine::new(directory());
        let matches = engine.find_matches("dana", RoleFilter::Opposite).await.unwrap();

        // alice shares {python, sql} out of a 3-skill union; bob shares
        // nothing and is excluded by the zero-score policy.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].candidate.username, "alice");
        assert_eq!(matches[0].score, 2.0 / 3.0);
        assert_eq!(
            matches[0].overlapping_skills,
            vec![
                SkillName::new("python").unwrap(),
                SkillName::new("sql").unwrap()
            ]
        );
    }

    #[tokio::test]
    async fn test_include_zero_score_keeps_trailing_candidates() {
        let settings = MatchSettings {
            include_zero_score: true,
            ..MatchSettings::default()
        };
        let engine = MatchEngine::with_settings(directory(), settings);
        let matches = engine.find_matches("dana", RoleFilter::Opposite).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].candidate.username, "alice");
        assert_eq!(matches[1].candidate.username, "bob");
        assert_eq!(matches[1].score, 0.0);
        assert!(matches[1].overlapping_skills.is_empty());
    }

    #[tokio::test]
    async fn test_equal_scores_order_by_username() {
        let dir = Arc::new(StaticDirectory {
            entries: vec![
                entry("zoe", Role::Mentee, &["rust"]),
                entry("mallory", Role::Mentor, &["rust"]),
                entry("eve", Role::Mentor, &["rust"]),
            ],
        });
        let engine = MatchEngine::new(dir);
        let matches = engine.find_matches("zoe", RoleFilter::Opposite).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].candidate.username, "eve");
        assert_eq!(matches[1].candidate.username, "mallory");
        assert_eq!(matches[0].score, matches[1].score);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let engine = MatchEngine::new(directory());
        let first = engine.find_matches("dana", RoleFilter::Opposite).await.unwrap();
        let second = engine.find_matches("dana", RoleFilter::Opposite).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_subject_is_not_found() {
        let engine = MatchEngine::new(directory());
        let err = engine
            .find_matches("nobody", RoleFilter::Opposite)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_pool_yields_empty_ranking() {
        let dir = Arc::new(StaticDirectory {
            entries: vec![entry("dana", Role::Mentee, &["python"])],
        });
        let engine = MatchEngine::new(dir);
        let matches = engine.find_matches("dana", RoleFilter::Opposite).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_subject_without_skills_matches_nothing() {
        let dir = Arc::new(StaticDirectory {
            entries: vec![
                entry("newbie", Role::Mentee, &[]),
                entry("alice", Role::Mentor, &["python", "sql", "ml"]),
            ],
        });
        let engine = MatchEngine::new(dir);
        let matches = engine
            .find_matches("newbie", RoleFilter::Opposite)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_explicit_role_filter() {
        let engine = MatchEngine::new(directory());
        // dana is a mentee; explicitly asking for mentees surfaces carol.
        let matches = engine
            .find_matches("dana", RoleFilter::Only(Role::Mentee))
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].candidate.username, "carol");
        assert_eq!(matches[0].score, 1.0);
    }

    #[tokio::test]
    async fn test_any_role_filter_spans_both_roles() {
        let engine = MatchEngine::new(directory());
        let matches = engine.find_matches("dana", RoleFilter::Any).await.unwrap();
        let names: Vec<_> = matches
            .iter()
            .map(|m| m.candidate.username.as_str())
            .collect();
        assert_eq!(names, vec!["carol", "alice"]);
    }

    #[tokio::test]
    async fn test_directory_failure_propagates() {
        let engine = MatchEngine::new(Arc::new(BrokenDirectory));
        let err = engine
            .find_matches("dana", RoleFilter::Opposite)
            .await
            .unwrap_err();
        assert!(err.is_data_source_failure());
    }
}
