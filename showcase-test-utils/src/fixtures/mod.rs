//! Test fixture modules for database row creation.
//!
//! - `portfolio` - Profile, skill, project (with tags) and work experience records

pub mod portfolio;
