//! Feed acquisition and decoding.
//!
//! The board prefers a local snapshot of `total_events.json` and falls back
//! to the published feed URL. Records are decoded one by one so a single
//! malformed entry never takes down the whole board.

use crate::config::Config;
use crate::events::Event;
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info, warn};

/// A non-critical problem met while decoding the feed.
///
/// Carried alongside the events rather than raised, so callers can render
/// what did decode and report the rest.
#[derive(Debug)]
pub enum FeedError {
    /// A record that did not decode into an [`Event`]; the rest of the feed
    /// is unaffected.
    BadRecord {
        index: usize,
        error: serde_json::Error,
    },
}

/// Decoded feed plus any records that were skipped.
#[derive(Debug)]
pub struct Feed {
    pub events: Vec<Event>,
    pub errors: Vec<FeedError>,
}

/// Fetches the raw feed body: local snapshot first, then the remote fallback.
pub fn fetch_feed_body(config: &Config) -> Result<String> {
    if let Some(path) = &config.feed_path {
        if path.exists() {
            debug!("reading local feed {}", path.display());
            return fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()));
        }
        warn!(
            "local feed {} not available, fetching remote",
            path.display()
        );
    }
    info!("fetching {}", config.feed_url);
    let response = ureq::get(&config.feed_url)
        .call()
        .with_context(|| format!("fetching {}", config.feed_url))?;
    response
        .into_string()
        .with_context(|| format!("reading response body from {}", config.feed_url))
}

/// Decodes a feed body, skipping records that do not look like events.
pub fn parse_feed(body: &str) -> Result<Feed> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).context("feed is not a JSON array")?;

    let mut events = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Event>(record) {
            Ok(event) => events.push(event),
            Err(error) => {
                warn!("skipping feed record {index}: {error}");
                errors.push(FeedError::BadRecord { index, error });
            }
        }
    }
    info!("loaded {} events", events.len());
    Ok(Feed { events, errors })
}

/// [`fetch_feed_body`] followed by [`parse_feed`].
pub fn load_feed(config: &Config) -> Result<Feed> {
    let body = fetch_feed_body(config)?;
    parse_feed(&body)
}
