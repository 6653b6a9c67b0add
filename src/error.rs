use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The feed could not be fetched: timeout, connection failure
    /// or a non-2xx status
    #[error("Failed to fetch feed: {0}")]
    Network(#[from] reqwest::Error),
    /// A `file://` feed could not be read
    #[error("Failed to read feed: {0}")]
    ReadFeed(#[source] std::io::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The fetched body is not a well-formed RSS document
    #[error("Failed to parse feed: {0}")]
    Parse(#[source] rss::Error),
    /// The filtered feed could not be written back to XML
    #[error("Failed to serialize feed: {0}")]
    Serialization(#[source] rss::Error),
    #[error("Serialized feed is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An unknown url scheme was provided, the scheme should be
    /// the associated value
    #[error("Unknown url scheme `{0}`")]
    UnknownScheme(String),
    #[error("Invalid file URL: `{0}`")]
    InvalidFileUrl(Url),
}
