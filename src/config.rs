use core::fmt;
use std::time::Duration;

use typed_builder::TypedBuilder;
use url::Url;

use crate::{FilterConfig, Result};

pub const DEFAULT_FEED_URL: &str = "https://example.com/feed.xml";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("rss-filter/", env!("CARGO_PKG_VERSION"));

/// Process wide settings, built once at startup and never mutated
#[derive(Debug, Clone, TypedBuilder)]
pub struct Config {
    pub feed_url: Url,
    /// Lists used when a request doesn't supply its own
    #[builder(default)]
    pub defaults: FilterConfig,
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Config {
    /// An HTTP client carrying the fetch timeout and user agent
    pub fn client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feed: {}", self.feed_url)?;
        writeln!(f, "    timeout: {}s", self.timeout.as_secs_f32())?;
        writeln!(f, "    whitelist: {:?}", self.defaults.whitelist)?;
        write!(f, "    blacklist: {:?}", self.defaults.blacklist)
    }
}
