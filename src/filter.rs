use rss::{Channel, Item};

use crate::feed::resolve_author;

/// Author substrings an item is checked against.
///
/// Matching is a case-insensitive substring test, so `reynolds` admits
/// `Glenn Reynolds III`. The blacklist is consulted before the whitelist:
/// an author on both lists is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
}

impl FilterConfig {
    pub fn new(whitelist: Vec<String>, blacklist: Vec<String>) -> Self {
        Self {
            whitelist,
            blacklist,
        }
    }

    /// Build the filter for one request. Explicit values replace the
    /// matching list from `defaults`; missing or empty values keep it.
    pub fn resolve(whitelist: Option<&str>, blacklist: Option<&str>, defaults: &Self) -> Self {
        let pick = |explicit: Option<&str>, default: &[String]| match explicit {
            Some(raw) if !raw.is_empty() => parse_list(raw),
            _ => default.to_vec(),
        };
        Self {
            whitelist: pick(whitelist, &defaults.whitelist),
            blacklist: pick(blacklist, &defaults.blacklist),
        }
    }

    pub fn admits(&self, author: Option<&str>) -> bool {
        let Some(author) = author else {
            return self.whitelist.is_empty();
        };
        let author = author.to_lowercase();
        if matches_any(&author, &self.blacklist) {
            return false;
        }
        if !self.whitelist.is_empty() {
            return matches_any(&author, &self.whitelist);
        }
        true
    }

    pub fn admits_item(&self, item: &Item) -> bool {
        self.admits(resolve_author(item))
    }
}

fn matches_any(author: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| author.contains(&pattern.to_lowercase()))
}

/// Split a comma separated list, trimming entries and dropping empty ones
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Keep only the items `filter` admits. Channel metadata is untouched.
pub fn filter_channel(mut channel: Channel, filter: &FilterConfig) -> Channel {
    let before = channel.items.len();
    channel.items.retain(|item| filter.admits_item(item));
    log::debug!(
        "kept {} of {before} items from `{}`",
        channel.items.len(),
        channel.title
    );
    channel
}
