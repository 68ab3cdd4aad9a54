mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use quicklink::routes::app_router;

async fn send(
    app: &tower_http::normalize_path::NormalizePath<axum::Router>,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_full_flow_under_prefix() {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state, common::API_PREFIX, false);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/shorten",
        Some(r#"{ "longUrl": "https://example.com/flow" }"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let code = created["shortCode"].as_str().unwrap().to_string();

    let response = send(&app, Method::GET, &format!("/api/v1/{code}"), None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/flow"
    );

    let response = send(&app, Method::GET, &format!("/api/v1/stats/{code}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["clicks"], 1);

    let response = send(&app, Method::DELETE, &format!("/api/v1/{code}"), None).await;
    assert_eq!(body_json(response).await["deleted"], true);

    let response = send(&app, Method::GET, &format!("/api/v1/{code}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_outside_prefix() {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state, common::API_PREFIX, false);

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "slash23", "https://example.com").await;

    let app = app_router(state, common::API_PREFIX, false);

    let response = send(&app, Method::GET, "/api/v1/stats/slash23/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_routes_at_root_when_prefix_empty() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "root234", "https://example.com/root").await;

    let app = app_router(state, "/", false);

    let response = send(&app, Method::GET, "/root234", None).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = send(&app, Method::GET, "/urls/all", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state, common::API_PREFIX, false);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/urls/all")
        .header(header::ORIGIN, "https://somewhere.else")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
