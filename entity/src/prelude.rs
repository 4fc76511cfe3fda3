pub use super::profile::Entity as Profile;
pub use super::project::Entity as Project;
pub use super::project_skill::Entity as ProjectSkill;
pub use super::skill::Entity as Skill;
pub use super::work_experience::Entity as WorkExperience;
