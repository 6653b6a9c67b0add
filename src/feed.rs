use rss::{Channel, Item};

use crate::{Error, Result};

/// Parse a raw RSS document into a [`Channel`]
pub fn parse_feed(raw_feed: &str) -> Result<Channel> {
    Channel::read_from(raw_feed.as_bytes())
        .inspect_err(|e| log::warn!("Failed to deserialize feed: {e}"))
        .map_err(Error::Parse)
}

/// Write a [`Channel`] back out as an RSS document
pub fn write_feed(channel: &Channel) -> Result<String> {
    let bytes = channel
        .write_to(Vec::new())
        .inspect_err(|e| log::warn!("Error serializing feed: {e}"))
        .map_err(Error::Serialization)?;
    Ok(String::from_utf8(bytes)?)
}

/// The author of an item: `<author>` when present, otherwise the first
/// `<dc:creator>`. Empty values count as missing.
pub fn resolve_author(item: &Item) -> Option<&str> {
    let creator = item
        .dublin_core_ext()
        .and_then(|dc| dc.creators().first())
        .map(String::as_str);
    // `dc:` elements stay in the raw extension map when the namespace is undeclared
    let raw_creator = item
        .extensions()
        .get("dc")
        .and_then(|ext| ext.get("creator"))
        .and_then(|values| values.first())
        .and_then(|ext| ext.value());
    [item.author(), creator, raw_creator]
        .into_iter()
        .flatten()
        .find(|author| !author.is_empty())
}
