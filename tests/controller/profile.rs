//! Tests for the profile endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::skill::Proficiency;
use showcase::{
    model::{
        api::ErrorDto,
        profile::{CreateProfileDto, FullProfileDto, ProfileDto, UpdateProfileDto},
    },
    server::controller::profile::{
        create_profile, get_full_profile, get_profile, update_profile,
    },
};

use super::*;

/// Expect 200 with the newest profile
#[tokio::test]
async fn get_profile_returns_latest() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Old Me")
        .with_profile("Jane Doe")
        .build()
        .await?;

    let resp = respond(get_profile(State(test.into_app_state())).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileDto = read_json(resp).await;
    assert_eq!(profile.name, "Jane Doe");

    Ok(())
}

/// Expect 404 Profile not found when no profile exists
#[tokio::test]
async fn get_profile_not_found_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let resp = respond(get_profile(State(test.into_app_state())).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Profile not found");

    Ok(())
}

/// Expect 201 with the stored profile
#[tokio::test]
async fn create_profile_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let payload = CreateProfileDto {
        name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        linkedin_link: Some("https://linkedin.com/in/jane".to_string()),
        ..Default::default()
    };
    let resp = respond(create_profile(State(test.into_app_state()), Json(payload)).await);

    assert_eq!(resp.status(), StatusCode::CREATED);
    let profile: ProfileDto = read_json(resp).await;
    assert_eq!(profile.email, "jane@example.com");
    assert_eq!(
        profile.linkedin_link.as_deref(),
        Some("https://linkedin.com/in/jane")
    );

    Ok(())
}

/// Expect 400 when name is missing
#[tokio::test]
async fn create_profile_requires_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let payload = CreateProfileDto {
        email: Some("jane@example.com".to_string()),
        ..Default::default()
    };
    let resp = respond(create_profile(State(test.into_app_state()), Json(payload)).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Name and email are required");

    Ok(())
}

/// Expect 200 with the changed fields applied
#[tokio::test]
async fn update_profile_applies_changes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .build()
        .await?;

    let payload = UpdateProfileDto {
        education: Some("MSc Software Engineering".to_string()),
        ..Default::default()
    };
    let resp = respond(
        update_profile(State(test.into_app_state()), Path(1), Json(payload)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileDto = read_json(resp).await;
    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(
        profile.education.as_deref(),
        Some("MSc Software Engineering")
    );

    Ok(())
}

/// Expect 404 when updating an unknown profile
#[tokio::test]
async fn update_profile_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let resp = respond(
        update_profile(
            State(test.into_app_state()),
            Path(99),
            Json(UpdateProfileDto::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the full view to contain only the requested profile's children
#[tokio::test]
async fn get_full_profile_has_no_cross_profile_leakage() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .with_profile("John Doe")
        .with_skill(1, "JavaScript", Proficiency::Advanced)
        .with_skill(1, "Python", Proficiency::Intermediate)
        .with_skill(2, "Go", Proficiency::Beginner)
        .build()
        .await?;
    test.portfolio()
        .insert_project(1, "Hypespace", Some("React Native app"), &["JavaScript"])
        .await?;
    test.portfolio()
        .insert_project(2, "Gopher", None, &["Go"])
        .await?;
    test.portfolio()
        .insert_work(2, "Globex", "Manager", None)
        .await?;

    let resp = respond(get_full_profile(State(test.into_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let full: FullProfileDto = read_json(resp).await;
    assert_eq!(full.profile.id, 1);
    let skill_names: Vec<&str> = full.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(skill_names, vec!["JavaScript", "Python"]);
    assert_eq!(full.skills[0].proficiency, Proficiency::Advanced);
    assert_eq!(full.projects.len(), 1);
    assert_eq!(full.projects[0].skills, vec!["JavaScript"]);
    assert!(full.work.is_empty());

    Ok(())
}

/// Expect profile fields at the top level of the full view JSON
#[tokio::test]
async fn get_full_profile_flattens_profile_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .with_skill(1, "Rust", Proficiency::Advanced)
        .build()
        .await?;

    let resp = respond(get_full_profile(State(test.into_app_state()), Path(1)).await);

    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["skills"][0]["name"], "Rust");
    assert_eq!(body["skills"][0]["proficiency"], "Advanced");
    assert!(body["projects"].as_array().is_some_and(|p| p.is_empty()));
    assert!(body["work"].as_array().is_some_and(|w| w.is_empty()));

    Ok(())
}

/// Expect 404 for an unknown profile
#[tokio::test]
async fn get_full_profile_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let resp = respond(get_full_profile(State(test.into_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 with a generic body when a child table is missing
#[tokio::test]
async fn get_full_profile_fails_when_tables_missing() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .with_table(entity::prelude::Skill)
        .with_table(entity::prelude::Project)
        .build()
        .await?;
    test.portfolio().insert_profile("Jane Doe").await?;

    let resp = respond(get_full_profile(State(test.into_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}
