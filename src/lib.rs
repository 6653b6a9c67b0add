use url::Url;

mod config;
mod error;
mod feed;
mod filter;
pub mod server;

pub use config::{Config, DEFAULT_FEED_URL, DEFAULT_TIMEOUT, USER_AGENT};
pub use error::Error;
pub use feed::{parse_feed, resolve_author, write_feed};
pub use filter::{filter_channel, parse_list, FilterConfig};

pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Fetch the raw feed document behind `url`
pub async fn fetch_feed(client: &reqwest::Client, url: &Url) -> Result<String> {
    match url.scheme() {
        "http" | "https" => fetch_feed_reqwest(client, url).await,
        "file" => fetch_feed_fs(url).await,
        scheme => {
            log::warn!("bad scheme in url: {url}");
            Err(Error::UnknownScheme(scheme.to_string()))
        }
    }
}

async fn fetch_feed_reqwest(client: &reqwest::Client, url: &Url) -> Result<String> {
    Ok(client
        .get(url.clone())
        .send()
        .await
        .inspect_err(|e| log::warn!("Error fetching {url}: {e}"))?
        .error_for_status()
        .inspect_err(|e| {
            log::warn!("Error fetching url: {e}");
        })?
        .text()
        .await
        .inspect_err(|e| log::warn!("Fetching feed failed to read as text: {e}"))?)
}

async fn fetch_feed_fs(url: &Url) -> Result<String> {
    let path = url.to_file_path().map_err(|_| {
        log::warn!("cannot convert url to file path: {url}");
        Error::InvalidFileUrl(url.clone())
    })?;
    tokio::fs::read_to_string(&path)
        .await
        .inspect_err(|e| log::warn!("Error reading path `{}`: {e}", path.display()))
        .map_err(Error::ReadFeed)
}

/// Fetch the feed at `url`, drop the items `filter` rejects and return
/// the result as XML
pub async fn run_filter(
    client: &reqwest::Client,
    url: &Url,
    filter: &FilterConfig,
) -> Result<String> {
    log::debug!("fetching {url} with {filter:?}");
    let raw_feed = fetch_feed(client, url).await?;
    let channel = parse_feed(&raw_feed)?;
    let channel = filter_channel(channel, filter);
    write_feed(&channel)
}
