#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tinylink::application::rate_limiter::TokenBucket;
use tinylink::application::services::ShortenerService;
use tinylink::domain::entities::{NewVisit, ShortUrl, Visit};
use tinylink::domain::repositories::{StoreError, UrlRepository, VisitRepository};
use tinylink::infrastructure::persistence::InMemoryStore;
use tinylink::routes;
use tinylink::state::AppState;
use tower::Layer;

pub const BASE_URL: &str = "http://localhost:8080";

/// Peer address reported by [`MockConnectInfoLayer`].
pub const PEER_IP: &str = "127.0.0.1";

/// Limiter that never refuses within a test.
pub fn roomy_limiter() -> TokenBucket {
    TokenBucket::new(1_000, Duration::from_secs(3600))
}

pub fn create_state(
    urls: Arc<dyn UrlRepository>,
    visits: Arc<dyn VisitRepository>,
    limiter: TokenBucket,
    behind_proxy: bool,
) -> AppState {
    let shortener = Arc::new(ShortenerService::new(urls, visits));
    AppState::new(shortener, Arc::new(limiter), BASE_URL, behind_proxy)
}

/// State backed by a fresh in-memory store, returned alongside for assertions.
pub fn create_memory_state(limiter: TokenBucket) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = create_state(store.clone(), store.clone(), limiter, false);
    (state, store)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = routes::router(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

/// Short code at the end of a public short URL.
pub fn code_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}

pub async fn create_test_url(store: &InMemoryStore, url: &str) -> i64 {
    store.insert_url(url).await.unwrap()
}

pub async fn create_test_visit(store: &InMemoryStore, short_url_id: i64, ip: &str) {
    store
        .insert_visit(NewVisit::new(short_url_id, ip, chrono::Utc::now()))
        .await
        .unwrap();
}

/// Injects a fixed peer address, standing in for `into_make_service_with_connect_info`.
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
        let addr: SocketAddr = format!("{PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// URL store whose every call fails.
pub struct FailingUrlStore;

#[async_trait]
impl UrlRepository for FailingUrlStore {
    async fn insert_url(&self, _original_url: &str) -> Result<i64, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn get_url_by_id(&self, _id: i64) -> Result<Option<ShortUrl>, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn list_urls(&self, _offset: i64, _limit: i64) -> Result<Vec<ShortUrl>, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn count_urls(&self) -> Result<i64, StoreError> {
        Err(StoreError::backend("connection refused"))
    }
}

/// Visit store that rejects writes and reads as empty.
pub struct FailingVisitStore;

#[async_trait]
impl VisitRepository for FailingVisitStore {
    async fn insert_visit(&self, _visit: NewVisit) -> Result<(), StoreError> {
        Err(StoreError::backend("disk full"))
    }

    async fn list_visits(
        &self,
        _short_url_id: i64,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<Visit>, StoreError> {
        Ok(Vec::new())
    }

    async fn count_visits(&self) -> Result<i64, StoreError> {
        Ok(0)
    }
}
