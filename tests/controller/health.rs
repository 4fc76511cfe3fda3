//! Tests for the health endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use showcase::{model::api::HealthDto, server::controller::health::health};

use super::*;

/// Expect 200 with the connected status
#[tokio::test]
async fn reports_connected_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = health(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthDto = read_json(resp).await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.database.as_deref(), Some("connected"));
    assert!(body.timestamp.is_some());

    Ok(())
}

/// Expect 500 once the connection pool has been closed
#[tokio::test]
async fn reports_failed_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();
    test.db.close().await?;

    let resp = health(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: HealthDto = read_json(resp).await;
    assert_eq!(body.status, "error");
    assert_eq!(body.message.as_deref(), Some("Database connection failed"));

    Ok(())
}
