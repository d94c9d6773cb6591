pub mod config;
pub mod error;
pub mod matching;
pub mod mentorship;
pub mod opportunity;
pub mod repository;
pub mod skill;
pub mod user;

// Re-export common error type
pub use error::{Result, SkillSyncError};

pub use config::MatchSettings;
pub use matching::{Candidate, CandidateDirectory, MatchEngine, MatchResult, RoleFilter};
pub use mentorship::Mentorship;
pub use opportunity::{Opportunity, OpportunityKind};
pub use skill::{Skill, SkillName};
pub use user::{Role, User};
