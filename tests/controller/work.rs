//! Tests for the work experience endpoint.

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use showcase::{
    model::work::{CreateWorkExperienceDto, WorkExperienceDto},
    server::controller::work::create_work_experience,
};

use super::*;

/// Expect 201 with the stored entry
#[tokio::test]
async fn creates_work_experience() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .build()
        .await?;

    let payload = CreateWorkExperienceDto {
        profile_id: Some(1),
        company: Some("Acme".to_string()),
        position: Some("Backend Engineer".to_string()),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 6),
        end_date: NaiveDate::from_ymd_opt(2022, 12, 31),
        description: None,
    };
    let resp = respond(
        create_work_experience(State(test.into_app_state()), Json(payload)).await,
    );

    assert_eq!(resp.status(), StatusCode::CREATED);
    let work: WorkExperienceDto = read_json(resp).await;
    assert_eq!(work.position, "Backend Engineer");
    assert_eq!(work.end_date, NaiveDate::from_ymd_opt(2022, 12, 31));

    Ok(())
}

/// Expect 400 when company is missing
#[tokio::test]
async fn requires_company() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_profile("Jane Doe")
        .build()
        .await?;

    let payload = CreateWorkExperienceDto {
        profile_id: Some(1),
        position: Some("Backend Engineer".to_string()),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 6),
        ..Default::default()
    };
    let resp = respond(
        create_work_experience(State(test.into_app_state()), Json(payload)).await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
