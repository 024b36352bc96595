mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use movie_catalog::api::handlers::health_handler;
use movie_catalog::state::AppState;
use std::sync::Arc;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = make_server(common::create_catalog_state(3));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 3 movies"
    );
}

#[tokio::test]
async fn test_health_endpoint_empty_catalog_is_healthy() {
    let server = make_server(common::create_catalog_state(0));

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_health_endpoint_database_down() {
    let server = make_server(common::create_test_state(Arc::new(
        common::FailingMovieRepository,
    )));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = make_server(common::create_catalog_state(1));

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("database").is_some());
}
