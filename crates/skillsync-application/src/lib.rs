pub mod directory;
pub mod match_usecase;
pub mod mentorship_service;
pub mod opportunity_service;
pub mod skill_catalog_service;
pub mod skill_profile_service;
pub mod user_directory_service;

pub use crate::directory::RepositoryCandidateDirectory;
pub use crate::match_usecase::{MatchRequest, MatchResponse, MatchUseCase, MatchedUser};
pub use crate::mentorship_service::{MentorshipOutcome, MentorshipService};
pub use crate::opportunity_service::{NewOpportunity, OpportunityService, OpportunityUpdate};
pub use crate::skill_catalog_service::{SkillCatalogService, SkillUpdate};
pub use crate::skill_profile_service::SkillProfileService;
pub use crate::user_directory_service::{ProfileUpdate, UserDirectoryService};
