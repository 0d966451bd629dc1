//! Headline client — the only place mnemopass talks to the outside world.
//!
//! Fetches a news feed rendered as JSON by an RSS-to-JSON proxy and hands the
//! items to the password source strategies. A single attempt is made per
//! generation; callers fall back to synthetic sentences on any failure.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Google News technology feed, converted to JSON by rss2json.
pub const DEFAULT_FEED_URL: &str = "https://api.rss2json.com/v1/api.json?rss_url=https://news.google.com/rss/search?q=technology&hl=en-US&gl=US&ceid=US:en";

#[derive(Debug, Error)]
pub enum HeadlineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feed reported status '{0}'")]
    FeedStatus(String),

    #[error("Feed returned no items")]
    Empty,
}

/// A single feed item. Descriptions may contain HTML markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Headline {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    items: Vec<Headline>,
}

/// Source of candidate headlines.
///
/// An empty list is a valid result; callers treat it like `HeadlineError::Empty`.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    async fn fetch_headlines(&self) -> Result<Vec<Headline>, HeadlineError>;
}

/// reqwest-backed provider for rss2json-shaped feeds.
#[derive(Clone)]
pub struct HeadlineClient {
    client: Client,
    feed_url: String,
}

impl HeadlineClient {
    pub fn new(feed_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, feed_url })
    }
}

#[async_trait]
impl HeadlineProvider for HeadlineClient {
    async fn fetch_headlines(&self) -> Result<Vec<Headline>, HeadlineError> {
        let response = self.client.get(&self.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Feed API returned {}", status);
            return Err(HeadlineError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let items = parse_feed(&body)?;

        debug!("Feed returned {} items", items.len());
        Ok(items)
    }
}

/// Decodes an rss2json body, rejecting error statuses and empty feeds.
fn parse_feed(body: &str) -> Result<Vec<Headline>, HeadlineError> {
    let feed: FeedResponse = serde_json::from_str(body)?;

    if feed.status != "ok" {
        let detail = match feed.message {
            Some(message) => format!("{}: {}", feed.status, message),
            None => feed.status,
        };
        return Err(HeadlineError::FeedStatus(detail));
    }

    if feed.items.is_empty() {
        return Err(HeadlineError::Empty);
    }

    Ok(feed.items)
}
