//! HTTP boundary: one `GET` route returning the filtered feed

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::{run_filter, Config, Error, FilterConfig, Result};

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";
pub const ERROR_TITLE: &str = "Failed to process RSS feed";

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = config.client()?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

/// Per request overrides, each a comma separated list. A repeated
/// parameter keeps its last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub whitelist: Option<String>,
    pub blacklist: Option<String>,
}

impl FromIterator<(String, String)> for FeedQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "whitelist" => query.whitelist = Some(value),
                "blacklist" => query.blacklist = Some(value),
                _ => {}
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log::error!("Error processing RSS feed: {self}");
        let mut message = self.to_string();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: ERROR_TITLE,
                message,
            }),
        )
            .into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(rss_feed))
        .route("/feed", get(rss_feed))
        .with_state(state)
}

pub async fn rss_feed(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, Error> {
    let query: FeedQuery = pairs.into_iter().collect();
    let filter = FilterConfig::resolve(
        query.whitelist.as_deref(),
        query.blacklist.as_deref(),
        &state.config.defaults,
    );
    let xml = run_filter(&state.client, &state.config.feed_url, &filter).await?;
    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, RSS_CONTENT_TYPE),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        xml,
    )
        .into_response())
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result {
    if let Ok(addr) = listener.local_addr() {
        log::info!("listening on http://{addr}");
    }
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
