use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use std::{fs, path::Path};
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use auditkeeper_backend::{config::Config, handlers, state::AppState};

fn config_with_build_dir(build_dir: &Path) -> Config {
    Config {
        db_user: String::new(),
        db_password: String::new(),
        db_database: String::new(),
        db_host: "localhost".into(),
        db_port: 5433,
        http_port: 3000,
        production_mode: true,
        frontend_build_dir: build_dir.to_path_buf(),
    }
}

fn production_app(config: Config) -> Router {
    let state = AppState::new(None, config.clone());
    Router::new()
        .nest_service(
            "/static",
            ServeDir::new(config.frontend_build_dir.join("static")),
        )
        .fallback_service(get(handlers::spa::spa_fallback).with_state(state.clone()))
        .with_state(state)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn fallback_serves_index_document_for_unmatched_paths() {
    let build_dir = TempDir::new().expect("temp dir");
    fs::write(
        build_dir.path().join("index.html"),
        "<html><body>audit frontend</body></html>",
    )
    .expect("write index");

    let app = production_app(config_with_build_dir(build_dir.path()));
    let response = app
        .oneshot(get_request("/reports/client-side-route"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("audit frontend"));
}

#[tokio::test]
async fn fallback_returns_not_found_when_index_missing() {
    let build_dir = TempDir::new().expect("temp dir");

    let app = production_app(config_with_build_dir(build_dir.path()));
    let response = app.oneshot(get_request("/anything")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fallback_only_answers_get_requests() {
    let build_dir = TempDir::new().expect("temp dir");
    fs::write(build_dir.path().join("index.html"), "<html></html>").expect("write index");

    let app = production_app(config_with_build_dir(build_dir.path()));
    let request = Request::builder()
        .method("POST")
        .uri("/reports/client-side-route")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn static_assets_served_under_prefix() {
    let build_dir = TempDir::new().expect("temp dir");
    let js_dir = build_dir.path().join("static/js");
    fs::create_dir_all(&js_dir).expect("create static dir");
    fs::write(js_dir.join("app.js"), "console.log('audit');").expect("write asset");

    let app = production_app(config_with_build_dir(build_dir.path()));
    let response = app.oneshot(get_request("/static/js/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert_eq!(body, "console.log('audit');");
}
