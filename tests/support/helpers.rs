// tests/support/helpers.rs
use article_api::application::{ports::time::Clock, services::ApplicationServices};
use article_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_api::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    time::SystemClock,
};
use article_api::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// Build the real router over a fresh in-memory SQLite database. A single
/// connection is required: every pooled connection would otherwise get its
/// own private in-memory database.
pub async fn make_test_router() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    let pool = Arc::new(pool);

    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock));

    build_router(HttpState { services })
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert status code plus the canonical `error` label of the JSON error
/// body produced by the presentation layer.
pub async fn assert_error_response(resp: Response<Body>, status: StatusCode, error: &str) {
    assert_eq!(resp.status(), status);
    let json = body_json(resp).await;
    assert_eq!(json.get("error").and_then(Value::as_str), Some(error));
    assert!(json.get("message").and_then(Value::as_str).is_some());
}
