//! X/Twitter search via the `bird` CLI.
//!
//! Invokes `bird search "{query}" --json -n {max}` as a subprocess, adding
//! `--auth-token ... --ct0 ...` when both credentials are configured.

use serde::Deserialize;
use viralscan_core::PostRecord;

use crate::error::CollectorError;
use crate::parse::{count, parse_timestamp};
use crate::request::SearchRequest;
use crate::Collector;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BirdTweet {
    #[serde(default)]
    text: String,
    like_count: Option<i64>,
    retweet_count: Option<i64>,
    reply_count: Option<i64>,
    created_at: Option<String>,
    author: Option<BirdAuthor>,
}

#[derive(Deserialize)]
struct BirdAuthor {
    username: Option<String>,
}

impl From<BirdTweet> for PostRecord {
    fn from(tweet: BirdTweet) -> Self {
        PostRecord {
            timestamp: parse_timestamp(tweet.created_at.as_deref()),
            author: tweet.author.and_then(|a| a.username),
            like_count: count(tweet.like_count),
            retweet_count: count(tweet.retweet_count),
            reply_count: count(tweet.reply_count),
            text: tweet.text,
        }
    }
}

/// Collector backed by the `bird` command-line client.
#[derive(Debug, Clone)]
pub struct BirdCollector {
    program: String,
    credentials: Option<(String, String)>,
}

impl BirdCollector {
    /// `program` is the binary name or path, usually `bird`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            credentials: None,
        }
    }

    /// Pass `--auth-token` and `--ct0` on every search. Ignored unless both are set.
    #[must_use]
    pub fn with_credentials(mut self, auth_token: Option<String>, ct0: Option<String>) -> Self {
        self.credentials = auth_token.zip(ct0);
        self
    }

    fn search_args(&self, request: &SearchRequest) -> Vec<String> {
        let mut args = vec![
            "search".to_string(),
            request.search_string(),
            "--json".to_string(),
            "-n".to_string(),
            request.max_results.to_string(),
        ];
        if let Some((auth_token, ct0)) = &self.credentials {
            args.extend([
                "--auth-token".to_string(),
                auth_token.clone(),
                "--ct0".to_string(),
                ct0.clone(),
            ]);
        }
        args
    }
}

impl Collector for BirdCollector {
    fn name(&self) -> &str {
        "bird"
    }

    async fn ensure_available(&self) -> Result<(), CollectorError> {
        let output = tokio::process::Command::new(&self.program)
            .arg("--version")
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CollectorError::Unavailable(format!(
                        "{} not installed. Install the bird CLI or set VIRALSCAN_BIRD_BIN",
                        self.program
                    ))
                } else {
                    CollectorError::Unavailable(format!("failed to run {}: {e}", self.program))
                }
            })?;

        if !output.status.success() {
            return Err(CollectorError::Unavailable(format!(
                "{} --version exited with {}",
                self.program, output.status
            )));
        }

        Ok(())
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<PostRecord>, CollectorError> {
        let output = tokio::process::Command::new(&self.program)
            .args(self.search_args(request))
            .output()
            .await
            .map_err(|e| CollectorError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(CollectorError::Subprocess {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let posts = parse_bird_output(&output.stdout, request.max_results).map_err(|e| {
            CollectorError::Deserialize {
                context: format!("bird search '{}'", request.query),
                source: e,
            }
        })?;

        tracing::debug!(
            query = request.query.as_str(),
            count = posts.len(),
            "bird search returned posts"
        );

        Ok(posts)
    }
}

fn parse_bird_output(stdout: &[u8], max_results: usize) -> Result<Vec<PostRecord>, serde_json::Error> {
    let tweets: Vec<BirdTweet> = serde_json::from_slice(stdout)?;
    Ok(tweets
        .into_iter()
        .filter(|t| !t.text.is_empty())
        .take(max_results)
        .map(PostRecord::from)
        .collect())
}
