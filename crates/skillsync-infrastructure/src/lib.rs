pub mod config_service;
pub mod dto;
pub mod json_mentorship_repository;
pub mod json_opportunity_repository;
pub mod json_skill_repository;
pub mod json_user_repository;
pub mod json_user_skill_repository;
pub mod memory_store;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::json_mentorship_repository::JsonMentorshipRepository;
pub use crate::json_opportunity_repository::JsonOpportunityRepository;
pub use crate::json_skill_repository::JsonSkillRepository;
pub use crate::json_user_repository::JsonUserRepository;
pub use crate::json_user_skill_repository::JsonUserSkillRepository;
pub use crate::memory_store::InMemoryStore;
pub use crate::paths::SkillSyncPaths;
