pub mod model;
pub mod repository;

pub use model::Mentorship;
pub use repository::MentorshipRepository;
