use std::{net::SocketAddr, time::Duration};

use clap::Parser;
use rss_filter::{parse_list, server, Config, FilterConfig, DEFAULT_FEED_URL};
use url::Url;

#[derive(Debug, Parser)]
pub enum Args {
    /// Serve the filtered feed over HTTP
    Serve {
        /// Address to listen on
        #[clap(long, short, env = "RSS_FILTER_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
        #[clap(flatten)]
        feed: FeedArgs,
    },
    /// Fetch and filter the feed once, printing the result
    Filter {
        #[clap(flatten)]
        feed: FeedArgs,
        /// Only keep authors matching one of these comma separated names
        #[clap(long, short)]
        whitelist: Option<String>,
        /// Drop authors matching one of these comma separated names
        #[clap(long, short)]
        blacklist: Option<String>,
    },
}

#[derive(Debug, clap::Args)]
pub struct FeedArgs {
    /// The feed to filter
    #[clap(long, env = "RSS_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: Url,
    /// Whitelist applied when a request doesn't provide one
    #[clap(long, env = "AUTHOR_WHITELIST", default_value = "")]
    default_whitelist: String,
    /// Blacklist applied when a request doesn't provide one
    #[clap(long, env = "AUTHOR_BLACKLIST", default_value = "")]
    default_blacklist: String,
    /// Seconds to wait for the feed before giving up
    #[clap(long, env = "RSS_FILTER_TIMEOUT", default_value_t = 10)]
    timeout_secs: u64,
}

impl From<FeedArgs> for Config {
    fn from(args: FeedArgs) -> Self {
        Config::builder()
            .feed_url(args.feed_url)
            .defaults(FilterConfig::new(
                parse_list(&args.default_whitelist),
                parse_list(&args.default_blacklist),
            ))
            .timeout(Duration::from_secs(args.timeout_secs))
            .build()
    }
}

#[tokio::main]
async fn main() -> Result<(), rss_filter::Error> {
    env_logger::init();
    let args = Args::parse();
    match args {
        Args::Serve { bind, feed } => {
            let config = Config::from(feed);
            log::info!("{config}");
            let listener = tokio::net::TcpListener::bind(bind).await?;
            server::serve(listener, server::AppState::new(config)?).await?;
        }
        Args::Filter {
            feed,
            whitelist,
            blacklist,
        } => {
            let config = Config::from(feed);
            let filter =
                FilterConfig::resolve(whitelist.as_deref(), blacklist.as_deref(), &config.defaults);
            let xml = rss_filter::run_filter(&config.client()?, &config.feed_url, &filter).await?;
            println!("{xml}");
        }
    }
    Ok(())
}
