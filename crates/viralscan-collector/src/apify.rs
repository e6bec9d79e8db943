//! X/Twitter search via an Apify tweet-scraper actor.
//!
//! Uses the synchronous `run-sync-get-dataset-items` endpoint so a single
//! request starts the actor run and returns its dataset.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use viralscan_core::PostRecord;

use crate::error::CollectorError;
use crate::parse::{count, parse_timestamp};
use crate::request::SearchRequest;
use crate::Collector;

const DEFAULT_BASE_URL: &str = "https://api.apify.com/v2";

#[derive(Debug, Serialize)]
struct TweetSearchInput {
    #[serde(rename = "searchTerms")]
    search_terms: Vec<String>,
    #[serde(rename = "maxItems")]
    max_items: usize,
}

/// A single dataset item. Placeholder items (e.g. `{"noResults": true}`)
/// have no text and are dropped.
#[derive(Debug, Deserialize)]
struct ApifyTweet {
    text: Option<String>,
    full_text: Option<String>,
    #[serde(rename = "createdAt", alias = "created_at")]
    created_at: Option<String>,
    author: Option<ApifyAuthor>,
    #[serde(rename = "likeCount")]
    like_count: Option<i64>,
    #[serde(rename = "retweetCount")]
    retweet_count: Option<i64>,
    #[serde(rename = "replyCount")]
    reply_count: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApifyAuthor {
    #[serde(rename = "userName")]
    user_name: Option<String>,
}

impl ApifyTweet {
    fn into_post(self) -> Option<PostRecord> {
        let text = self.full_text.or(self.text).filter(|t| !t.is_empty())?;
        Some(PostRecord {
            text,
            like_count: count(self.like_count),
            retweet_count: count(self.retweet_count),
            reply_count: count(self.reply_count),
            timestamp: parse_timestamp(self.created_at.as_deref()),
            author: self.author.and_then(|a| a.user_name),
        })
    }
}

/// Collector backed by the Apify REST API.
///
/// Use [`ApifyCollector::new`] for production or
/// [`ApifyCollector::with_base_url`] to point at a mock server in tests.
pub struct ApifyCollector {
    client: Client,
    token: Option<String>,
    actor: String,
    base_url: String,
}

impl ApifyCollector {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        token: Option<String>,
        actor: &str,
        timeout_secs: u64,
    ) -> Result<Self, CollectorError> {
        Self::with_base_url(token, actor, timeout_secs, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        token: Option<String>,
        actor: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, CollectorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("viralscan/0.1 (pattern-analysis)")
            .build()?;

        Ok(Self {
            client,
            token,
            actor: actor.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn token(&self) -> Result<&str, CollectorError> {
        self.token.as_deref().ok_or_else(|| {
            CollectorError::Unavailable(
                "APIFY_API_TOKEN is not set; the apify backend cannot run".to_string(),
            )
        })
    }
}

impl Collector for ApifyCollector {
    fn name(&self) -> &str {
        "apify"
    }

    async fn ensure_available(&self) -> Result<(), CollectorError> {
        self.token().map(|_| ())
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<PostRecord>, CollectorError> {
        let token = self.token()?;
        let url = format!(
            "{}/acts/{}/run-sync-get-dataset-items",
            self.base_url, self.actor
        );
        let input = TweetSearchInput {
            search_terms: vec![request.search_string()],
            max_items: request.max_results,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollectorError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let items: Vec<ApifyTweet> =
            serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
                context: format!("apify search '{}'", request.query),
                source: e,
            })?;

        let posts: Vec<PostRecord> = items
            .into_iter()
            .filter_map(ApifyTweet::into_post)
            .take(request.max_results)
            .collect();

        tracing::debug!(
            query = request.query.as_str(),
            count = posts.len(),
            "apify search returned posts"
        );

        Ok(posts)
    }
}
