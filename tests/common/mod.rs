//! Shared helpers for the end to end harnesses.
//!
//! `FakeFeed` plays the upstream feed host on a random local port:
//! - `GET /feed.xml` — the two author fixture
//! - `GET /slow.xml` — the same fixture after a delay
//! - `GET /missing.xml` — `404 Not Found`
//! - `GET /garbage.xml` — a body that isn't RSS

use std::{net::SocketAddr, time::Duration};

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use rss_filter::{
    server::{self, AppState},
    Config, FilterConfig,
};
use tokio::{net::TcpListener, task::JoinHandle};
use url::Url;

pub const TWO_AUTHORS: &str = include_str!("../fixtures/two_authors.rss.xml");
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

pub struct FakeFeed {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl FakeFeed {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/feed.xml", get(|| async { TWO_AUTHORS }))
            .route(
                "/slow.xml",
                get(|| async {
                    tokio::time::sleep(SLOW_DELAY).await;
                    TWO_AUTHORS
                }),
            )
            .route(
                "/missing.xml",
                get(|| async { (StatusCode::NOT_FOUND, "gone").into_response() }),
            )
            .route("/garbage.xml", get(|| async { "this is not xml" }));
        let (addr, task) = spawn(app).await;
        Self { addr, task }
    }

    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("http://{}{path}", self.addr)).expect("fake feed url should parse")
    }
}

impl Drop for FakeFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A running filter service
pub struct FilterService {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl FilterService {
    pub async fn start(config: Config) -> Self {
        let state = AppState::new(config).expect("state should build");
        let (addr, task) = spawn(server::create_router(state)).await;
        Self { addr, task }
    }

    pub async fn with_feed(feed_url: Url) -> Self {
        Self::start(Config::builder().feed_url(feed_url).build()).await
    }

    pub async fn with_defaults(feed_url: Url, defaults: FilterConfig) -> Self {
        Self::start(Config::builder().feed_url(feed_url).defaults(defaults).build()).await
    }

    pub async fn get(&self, query: &str) -> reqwest::Response {
        reqwest::get(format!("http://{}/{query}", self.addr))
            .await
            .expect("filter service should answer")
    }
}

impl Drop for FilterService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn spawn(app: Router) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should exist");
    let task = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    (addr, task)
}

/// The parsed error body of a failed request
pub async fn error_body(response: reqwest::Response) -> serde_json::Value {
    let text = response.text().await.expect("body should be text");
    serde_json::from_str(&text).expect("error body should be json")
}
