//! Backend selection from [`ScanConfig`].

use viralscan_core::{Backend, PostRecord, ScanConfig};

use crate::apify::ApifyCollector;
use crate::bird::BirdCollector;
use crate::error::CollectorError;
use crate::request::SearchRequest;
use crate::Collector;

/// The configured search backend.
pub enum SearchBackend {
    Bird(BirdCollector),
    Apify(ApifyCollector),
}

impl SearchBackend {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the Apify HTTP client cannot be built.
    pub fn from_config(config: &ScanConfig) -> Result<Self, CollectorError> {
        match config.backend {
            Backend::Bird => Ok(SearchBackend::Bird(
                BirdCollector::new(config.bird_bin.clone()).with_credentials(
                    config.twitter_auth_token.clone(),
                    config.twitter_ct0.clone(),
                ),
            )),
            Backend::Apify => Ok(SearchBackend::Apify(ApifyCollector::new(
                config.apify_api_token.clone(),
                &config.apify_actor,
                config.request_timeout_secs,
            )?)),
        }
    }
}

impl Collector for SearchBackend {
    fn name(&self) -> &str {
        match self {
            SearchBackend::Bird(c) => c.name(),
            SearchBackend::Apify(c) => c.name(),
        }
    }

    async fn ensure_available(&self) -> Result<(), CollectorError> {
        match self {
            SearchBackend::Bird(c) => c.ensure_available().await,
            SearchBackend::Apify(c) => c.ensure_available().await,
        }
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<PostRecord>, CollectorError> {
        match self {
            SearchBackend::Bird(c) => c.search(request).await,
            SearchBackend::Apify(c) => c.search(request).await,
        }
    }
}
