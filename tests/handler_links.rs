mod common;

use chrono::{Duration, Utc};

use quicklink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_list_links_empty() {
    let (state, _repo) = common::create_test_state();
    let server = common::api_server(state, false);

    let response = server.get("/api/v1/urls/all").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (state, repo) = common::create_test_state();
    let now = Utc::now();
    common::create_test_link_at(&repo, "first23", "https://one.com", now - Duration::minutes(2))
        .await;
    common::create_test_link_at(&repo, "third23", "https://three.com", now).await;
    common::create_test_link_at(&repo, "secnd23", "https://two.com", now - Duration::minutes(1))
        .await;
    common::click(&repo, "first23", 4).await;

    let server = common::api_server(state, false);

    let response = server.get("/api/v1/urls/all").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["shortCode"], "third23");
    assert_eq!(items[1]["shortCode"], "secnd23");
    assert_eq!(items[2]["shortCode"], "first23");
    assert_eq!(items[2]["clicks"], 4);
    assert_eq!(items[0]["shortUrl"], format!("{}/third23", common::BASE_URL));
}

#[tokio::test]
async fn test_list_links_is_not_a_short_code() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "urls234", "https://example.com").await;

    let server = common::api_server(state, false);

    // `/urls/all` must hit the list route, never the redirect.
    let response = server.get("/api/v1/urls/all").await;
    response.assert_status_ok();

    let link = repo.find_by_code("urls234").await.unwrap().unwrap();
    assert_eq!(link.clicks, 0);
}

#[tokio::test]
async fn test_delete_link() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "del2345", "https://example.com").await;

    let server = common::api_server(state, false);

    let response = server.delete("/api/v1/del2345").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "deleted": true })
    );
    assert!(repo.find_by_code("del2345").await.unwrap().is_none());

    server.get("/api/v1/stats/del2345").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_link() {
    let (state, _repo) = common::create_test_state();
    let server = common::api_server(state, false);

    let response = server.delete("/api/v1/unknown").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "deleted": false })
    );
}

#[tokio::test]
async fn test_delete_then_shorten_creates_new_link() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "old2345", "https://again.com").await;

    let server = common::api_server(state, false);

    server.delete("/api/v1/old2345").await.assert_status_ok();

    let json = server
        .post("/api/v1/shorten")
        .json(&serde_json::json!({ "longUrl": "https://again.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["clicks"], 0);
    assert_eq!(repo.count().await.unwrap(), 1);
}
