pub mod model;
pub mod repository;

pub use model::{Skill, SkillName};
pub use repository::SkillRepository;
