//! Skill-overlap matching.
//!
//! Given a subject user and a role restriction, rank the remaining users
//! by Jaccard similarity of their skill sets. Data comes in through the
//! [`CandidateDirectory`] read interface; the engine itself is pure.

pub mod directory;
pub mod engine;
pub mod model;
pub mod score;

pub use directory::CandidateDirectory;
pub use engine::MatchEngine;
pub use model::{Candidate, MatchResult, RoleFilter};
