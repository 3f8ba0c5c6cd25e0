#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use portfolio_api::config::{CorsPolicy, LogFormat, ServerConfig};
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_db::{DbConfig, PortfolioStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never dialled: tests inject their own store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors: CorsPolicy::Any,
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        db: DbConfig::new("postgres://localhost/portfolio_test"),
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given store.
pub fn build_test_app(store: Arc<dyn PortfolioStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
