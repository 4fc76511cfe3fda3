//! Tests for the search endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use entity::skill::Proficiency;
use showcase::{
    model::{api::ErrorDto, search::SearchResponseDto},
    server::controller::search::{search, SearchParams},
};

use super::*;

fn query(q: &str) -> Query<SearchParams> {
    Query(SearchParams {
        q: Some(q.to_string()),
    })
}

/// Expect the Hypespace project once under the project kind
#[tokio::test]
async fn finds_react_native_project() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .build()
        .await?;
    test.portfolio()
        .insert_project(
            1,
            "Hypespace",
            Some("Mobile app built with React Native"),
            &["React Native"],
        )
        .await?;

    let resp = respond(search(State(test.into_app_state()), query("react")).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["type"], "project");
    assert_eq!(body["results"][0]["title"], "Hypespace");

    Ok(())
}

/// Expect a skill shared by several proficiency rows once and count equal to hits
#[tokio::test]
async fn skill_listed_once_and_count_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .with_profile("John Doe")
        .with_skill(1, "TypeScript", Proficiency::Advanced)
        .with_skill(2, "TypeScript", Proficiency::Beginner)
        .with_skill(2, "TypeScript", Proficiency::Intermediate)
        .build()
        .await?;
    test.portfolio()
        .insert_work(1, "Scriptly", "TypeScript Developer", None)
        .await?;

    let resp = respond(search(State(test.into_app_state()), query("script")).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SearchResponseDto = read_json(resp).await;
    let skills = body
        .results
        .iter()
        .filter(|r| r.kind() == "skill")
        .count();
    assert_eq!(skills, 1);
    assert_eq!(body.count, body.results.len());
    assert_eq!(body.count, 2);

    Ok(())
}

/// Expect 400 when the query is missing
#[tokio::test]
async fn requires_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let resp = respond(
        search(
            State(test.into_app_state()),
            Query(SearchParams::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Search query is required");

    Ok(())
}

/// Expect 500 when part of the search cannot run
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .with_table(entity::prelude::Project)
        .build()
        .await?;

    let resp = respond(search(State(test.into_app_state()), query("react")).await);

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
