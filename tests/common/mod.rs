#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

use quicklink::api;
use quicklink::domain::entities::{Link, NewLink};
use quicklink::domain::repositories::LinkRepository;
use quicklink::infrastructure::persistence::MemoryLinkRepository;
use quicklink::state::AppState;

pub const BASE_URL: &str = "http://localhost:5000/api/v1";
pub const API_PREFIX: &str = "/api/v1";

/// Injects a fixed peer address, as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// State over a fresh in-memory store, plus the store for seeding.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), BASE_URL);
    (state, repo)
}

/// Server exposing the full link API under [`API_PREFIX`].
pub fn api_server(state: AppState, rate_limit_enabled: bool) -> TestServer {
    let app = Router::new()
        .nest(API_PREFIX, api::routes::routes(rate_limit_enabled))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    create_test_link_at(repo, code, url, Utc::now()).await
}

pub async fn create_test_link_at(
    repo: &MemoryLinkRepository,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> Link {
    repo.create(NewLink::new(code.to_string(), url.to_string(), created_at))
        .await
        .unwrap()
}

pub async fn click(repo: &MemoryLinkRepository, code: &str, times: usize) {
    for _ in 0..times {
        repo.increment_clicks(code).await.unwrap();
    }
}
