pub mod model;
pub mod repository;

pub use model::{Opportunity, OpportunityKind};
pub use repository::OpportunityRepository;
