//! Factory functions for generating mock portfolio database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions and response shaping.

use chrono::Utc;
use entity::skill::Proficiency;

/// Create a mock profile model with ID `id` and placeholder contact details.
pub fn mock_profile_model(id: i32) -> entity::profile::Model {
    let now = Utc::now().naive_utc();
    entity::profile::Model {
        id,
        name: "Test Profile".to_string(),
        email: "test.profile@example.com".to_string(),
        education: Some("BSc Computer Science".to_string()),
        github_link: Some("https://github.com/example".to_string()),
        linkedin_link: None,
        portfolio_link: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock project model owned by `profile_id`.
pub fn mock_project_model(id: i32, profile_id: i32, title: &str) -> entity::project::Model {
    let now = Utc::now().naive_utc();
    entity::project::Model {
        id,
        profile_id,
        title: title.to_string(),
        description: None,
        github_link: None,
        live_link: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock skill model owned by `profile_id`.
pub fn mock_skill_model(
    id: i32,
    profile_id: i32,
    skill_name: &str,
    proficiency: Proficiency,
) -> entity::skill::Model {
    entity::skill::Model {
        id,
        profile_id,
        skill_name: skill_name.to_string(),
        proficiency,
    }
}
