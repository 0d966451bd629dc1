use std::sync::Arc;

use crate::config::Config;
use crate::headline_client::HeadlineProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Headline source for network sentences. `HeadlineClient` in production.
    pub headlines: Arc<dyn HeadlineProvider>,
    pub config: Config,
}
