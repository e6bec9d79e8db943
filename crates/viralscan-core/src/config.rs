use std::path::Path;

use crate::topics::{load_topics, validate_topics, TopicsFile};
use crate::ConfigError;

/// Which search backend supplies posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The `bird` command-line client for X/Twitter search.
    Bird,
    /// The Apify tweet-scraper actor over HTTP.
    Apify,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Bird => write!(f, "bird"),
            Backend::Apify => write!(f, "apify"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bird" => Ok(Backend::Bird),
            "apify" => Ok(Backend::Apify),
            other => Err(format!("unknown backend '{other}' (expected 'bird' or 'apify')")),
        }
    }
}

#[derive(Clone)]
pub struct ScanConfig {
    pub backend: Backend,
    pub topics: Vec<String>,
    pub min_engagement: u64,
    pub max_posts_per_query: usize,
    pub days_back: u32,
    pub language: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub bird_bin: String,
    pub twitter_auth_token: Option<String>,
    pub twitter_ct0: Option<String>,
    pub apify_api_token: Option<String>,
    pub apify_actor: String,
}

impl std::fmt::Debug for ScanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanConfig")
            .field("backend", &self.backend)
            .field("topics", &self.topics)
            .field("min_engagement", &self.min_engagement)
            .field("max_posts_per_query", &self.max_posts_per_query)
            .field("days_back", &self.days_back)
            .field("language", &self.language)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("bird_bin", &self.bird_bin)
            .field(
                "twitter_auth_token",
                &self.twitter_auth_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "twitter_ct0",
                &self.twitter_ct0.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "apify_api_token",
                &self.apify_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("apify_actor", &self.apify_actor)
            .finish()
    }
}

/// Load scan configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the topics file is unusable.
pub fn load_scan_config() -> Result<ScanConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_scan_config_from_env()
}

/// Load scan configuration from environment variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the topics file is unusable.
pub fn load_scan_config_from_env() -> Result<ScanConfig, ConfigError> {
    build_scan_config(|key| std::env::var(key))
}

/// Build scan configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the stock
/// scan: built-in topics, 100 minimum engagement, 50 posts per query, 7 days.
fn build_scan_config<F>(lookup: F) -> Result<ScanConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let backend = or_default("VIRALSCAN_BACKEND", "bird")
        .parse::<Backend>()
        .map_err(|reason| invalid("VIRALSCAN_BACKEND", reason))?;

    let topics = match optional("VIRALSCAN_TOPICS_PATH") {
        Some(path) => load_topics(Path::new(&path))?.topics,
        None => TopicsFile::builtin().topics,
    };
    validate_topics(&topics)?;

    let min_engagement = parse_u64("VIRALSCAN_MIN_ENGAGEMENT", "100")?;
    let max_posts_per_query = parse_usize("VIRALSCAN_MAX_POSTS_PER_QUERY", "50")?;
    if max_posts_per_query == 0 {
        return Err(invalid(
            "VIRALSCAN_MAX_POSTS_PER_QUERY",
            "must be greater than zero".to_string(),
        ));
    }
    let days_back = parse_u32("VIRALSCAN_DAYS_BACK", "7")?;

    let language = or_default("VIRALSCAN_LANGUAGE", "en");
    let log_level = or_default("VIRALSCAN_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("VIRALSCAN_REQUEST_TIMEOUT_SECS", "120")?;

    let bird_bin = or_default("VIRALSCAN_BIRD_BIN", "bird");
    let twitter_auth_token = optional("TWITTER_AUTH_TOKEN");
    let twitter_ct0 = optional("TWITTER_CT0");
    let apify_api_token = optional("APIFY_API_TOKEN");
    let apify_actor = or_default("VIRALSCAN_APIFY_ACTOR", "apidojo~tweet-scraper");

    Ok(ScanConfig {
        backend,
        topics,
        min_engagement,
        max_posts_per_query,
        days_back,
        language,
        log_level,
        request_timeout_secs,
        bird_bin,
        twitter_auth_token,
        twitter_ct0,
        apify_api_token,
        apify_actor,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
