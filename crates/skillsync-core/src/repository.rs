//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

pub use crate::mentorship::MentorshipRepository;
pub use crate::opportunity::OpportunityRepository;
pub use crate::skill::SkillRepository;
pub use crate::user::{UserRepository, UserSkillRepository};
