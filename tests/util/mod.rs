//! Helpers shared by the integration tests.

use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use showcase::server::{error::Error, model::app::AppState};
use showcase_test_utils::TestContext;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Turn a handler result into the response axum would send
pub fn respond<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Read and decode a JSON response body
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    serde_json::from_slice(&bytes).expect("response body is not the expected JSON")
}
