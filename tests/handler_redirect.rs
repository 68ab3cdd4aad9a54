mod common;

use axum::http::StatusCode;

use quicklink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "redir23", "https://example.com/target").await;

    let server = common::api_server(state, false);

    let response = server.get("/api/v1/redir23").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_each_visit() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "count23", "https://example.com").await;

    let server = common::api_server(state, false);

    for _ in 0..3 {
        server
            .get("/api/v1/count23")
            .await
            .assert_status(StatusCode::FOUND);
    }

    let link = repo.find_by_code("count23").await.unwrap().unwrap();
    assert_eq!(link.clicks, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = common::api_server(state, false);

    let response = server.get("/api/v1/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "CaSe234", "https://example.com").await;

    let server = common::api_server(state, false);

    server.get("/api/v1/case234").await.assert_status_not_found();
    server
        .get("/api/v1/CaSe234")
        .await
        .assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "gone234", "https://example.com").await;

    let server = common::api_server(state, false);

    server.delete("/api/v1/gone234").await.assert_status_ok();
    server.get("/api/v1/gone234").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_unusable_stored_url_is_an_error() {
    let (state, repo) = common::create_test_state();
    // Written straight to the store, bypassing validation.
    common::create_test_link(&repo, "bad2345", "https://example.com/a\nb").await;

    let server = common::api_server(state, false);

    let response = server.get("/api/v1/bad2345").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.maybe_header("location").is_none());
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );
}
