//! Tests for the project endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::skill::Proficiency;
use sea_orm::{EntityTrait, PaginatorTrait};
use showcase::{
    model::{
        api::{ErrorDto, MessageDto},
        project::{CreateProjectDto, ProjectDto, ProjectWithSkillsDto, UpdateProjectDto},
    },
    server::controller::project::{
        create_project, delete_project, get_project, get_projects, update_project,
        ProjectFilterParams,
    },
};

use super::*;

fn filter(skill: &str) -> Query<ProjectFilterParams> {
    Query(ProjectFilterParams {
        skill: Some(skill.to_string()),
    })
}

/// Seed one profile with JavaScript and Python skills and one project tagged JavaScript
async fn reference_portfolio() -> Result<TestContext, TestError> {
    let mut test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .with_skill(1, "JavaScript", Proficiency::Advanced)
        .with_skill(1, "Python", Proficiency::Intermediate)
        .build()
        .await?;
    test.portfolio()
        .insert_project(1, "Hypespace", None, &["JavaScript"])
        .await?;

    Ok(test)
}

/// Expect exactly the tagged project for `javascript` and nothing for `go`
#[tokio::test]
async fn get_projects_filters_by_skill() -> Result<(), TestError> {
    let test = reference_portfolio().await?;

    let resp = respond(get_projects(State(test.into_app_state()), filter("javascript")).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let projects: Vec<ProjectWithSkillsDto> = read_json(resp).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].project.title, "Hypespace");

    let resp = respond(get_projects(State(test.into_app_state()), filter("go")).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let projects: Vec<ProjectWithSkillsDto> = read_json(resp).await;
    assert!(projects.is_empty());

    Ok(())
}

/// Expect `python` and `PYTHON` to yield the same projects
#[tokio::test]
async fn get_projects_filter_ignores_case() -> Result<(), TestError> {
    let mut test = reference_portfolio().await?;
    test.portfolio()
        .insert_project(1, "Scraper", None, &["Python"])
        .await?;

    let lower: Vec<ProjectWithSkillsDto> = read_json(respond(
        get_projects(State(test.into_app_state()), filter("python")).await,
    ))
    .await;
    let upper: Vec<ProjectWithSkillsDto> = read_json(respond(
        get_projects(State(test.into_app_state()), filter("PYTHON")).await,
    ))
    .await;

    assert_eq!(lower.len(), 1);
    assert_eq!(lower, upper);

    Ok(())
}

/// Expect the union of `a,b` with a project tagged both listed once
#[tokio::test]
async fn get_projects_union_without_duplicates() -> Result<(), TestError> {
    let mut test = reference_portfolio().await?;
    let both = test
        .portfolio()
        .insert_project(1, "Fullstack", None, &["JavaScript", "Python"])
        .await?;

    let projects: Vec<ProjectWithSkillsDto> = read_json(respond(
        get_projects(State(test.into_app_state()), filter("javascript, python")).await,
    ))
    .await;

    let ids: Vec<i32> = projects.iter().map(|p| p.project.id).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids.iter().filter(|id| **id == both.id).count(), 1);

    Ok(())
}

/// Expect every project when no filter is given
#[tokio::test]
async fn get_projects_without_filter() -> Result<(), TestError> {
    let mut test = reference_portfolio().await?;
    test.portfolio()
        .insert_project(1, "Untagged", None, &[])
        .await?;

    let projects: Vec<ProjectWithSkillsDto> = read_json(respond(
        get_projects(
            State(test.into_app_state()),
            Query(ProjectFilterParams::default()),
        )
        .await,
    ))
    .await;

    assert_eq!(projects.len(), 2);
    assert!(projects[0].skills.is_empty());

    Ok(())
}

/// Expect 200 with tags for an existing project and 404 otherwise
#[tokio::test]
async fn get_project_by_id() -> Result<(), TestError> {
    let test = reference_portfolio().await?;

    let resp = respond(get_project(State(test.into_app_state()), Path(1)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let project: ProjectWithSkillsDto = read_json(resp).await;
    assert_eq!(project.skills, vec!["JavaScript"]);

    let resp = respond(get_project(State(test.into_app_state()), Path(2)).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Project not found");

    Ok(())
}

/// Expect 201 with the tags attached
#[tokio::test]
async fn create_project_with_skills() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .build()
        .await?;

    let payload = CreateProjectDto {
        profile_id: Some(1),
        title: Some("Hypespace".to_string()),
        description: Some("Event discovery".to_string()),
        skills: Some(vec!["React Native".to_string(), "Node".to_string()]),
        ..Default::default()
    };
    let resp = respond(create_project(State(test.into_app_state()), Json(payload)).await);

    assert_eq!(resp.status(), StatusCode::CREATED);
    let project: ProjectWithSkillsDto = read_json(resp).await;
    assert_eq!(project.project.profile_id, 1);
    assert_eq!(project.skills, vec!["React Native", "Node"]);

    Ok(())
}

/// Expect 400 and no stored row when the title is missing
#[tokio::test]
async fn create_project_without_title_stores_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .build()
        .await?;

    let payload = CreateProjectDto {
        profile_id: Some(1),
        ..Default::default()
    };
    let resp = respond(create_project(State(test.into_app_state()), Json(payload)).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Profile ID and title are required");
    assert_eq!(entity::prelude::Project::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 404 when the owning profile does not exist
#[tokio::test]
async fn create_project_for_unknown_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let payload = CreateProjectDto {
        profile_id: Some(5),
        title: Some("Orphan".to_string()),
        ..Default::default()
    };
    let resp = respond(create_project(State(test.into_app_state()), Json(payload)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Profile not found");

    Ok(())
}

/// Expect 200 with the updated project
#[tokio::test]
async fn update_project_changes_title() -> Result<(), TestError> {
    let test = reference_portfolio().await?;

    let payload = UpdateProjectDto {
        title: Some("Hypespace v2".to_string()),
        ..Default::default()
    };
    let resp = respond(
        update_project(State(test.into_app_state()), Path(1), Json(payload)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let project: ProjectDto = read_json(resp).await;
    assert_eq!(project.title, "Hypespace v2");

    Ok(())
}

/// Expect 404 when updating an unknown project
#[tokio::test]
async fn update_project_not_found() -> Result<(), TestError> {
    let test = reference_portfolio().await?;

    let resp = respond(
        update_project(
            State(test.into_app_state()),
            Path(2),
            Json(UpdateProjectDto::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with a confirmation message and the project gone
#[tokio::test]
async fn delete_project_removes_project() -> Result<(), TestError> {
    let test = reference_portfolio().await?;

    let resp = respond(delete_project(State(test.into_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = read_json(resp).await;
    assert_eq!(body.message, "Project deleted successfully");
    assert_eq!(entity::prelude::Project::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::ProjectSkill::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 404 and an unchanged store when deleting an unknown project
#[tokio::test]
async fn delete_project_not_found_leaves_store_unchanged() -> Result<(), TestError> {
    let test = reference_portfolio().await?;

    let resp = respond(delete_project(State(test.into_app_state()), Path(2)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(entity::prelude::Project::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::ProjectSkill::find().count(&test.db).await?, 1);

    Ok(())
}
