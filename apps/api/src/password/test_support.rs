use async_trait::async_trait;

use crate::headline_client::{Headline, HeadlineError, HeadlineProvider};

/// In-memory headline provider for tests.
pub enum FakeHeadlines {
    /// Returned as-is, so an empty list comes back as `Ok(vec![])`.
    Items(Vec<Headline>),
    EmptyFeed,
    Unreachable,
}

impl FakeHeadlines {
    pub fn with_items(items: Vec<Headline>) -> Self {
        Self::Items(items)
    }

    pub fn empty_feed() -> Self {
        Self::EmptyFeed
    }

    pub fn unreachable() -> Self {
        Self::Unreachable
    }
}

#[async_trait]
impl HeadlineProvider for FakeHeadlines {
    async fn fetch_headlines(&self) -> Result<Vec<Headline>, HeadlineError> {
        match self {
            FakeHeadlines::Items(items) => Ok(items.clone()),
            FakeHeadlines::EmptyFeed => Err(HeadlineError::Empty),
            FakeHeadlines::Unreachable => Err(HeadlineError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }
}
