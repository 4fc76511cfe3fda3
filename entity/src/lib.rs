pub mod prelude;

pub mod profile;
pub mod project;
pub mod project_skill;
pub mod skill;
pub mod work_experience;
