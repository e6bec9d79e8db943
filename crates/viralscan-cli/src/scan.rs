//! The `scan` command: collect posts for every topic and emit the report.
//!
//! Exit contract: the report on success (exit 0); `{"error": ...}` when the
//! backend is unavailable and no query was attempted (exit 1);
//! `{"success": false, "error": ...}` for any other top-level failure (exit 1).
//! Individual query failures only reach the log.

use std::process::ExitCode;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::Args;
use viralscan_collector::{collect_queries, since_date, Collector, SearchBackend, SearchParams};
use viralscan_core::{validate_topics, Backend, ConfigError, ScanConfig};
use viralscan_patterns::{Aggregator, PatternExtractor, Report, ReportLimits, ReportMeta};

/// Flags for `scan`. Each one overrides its environment setting.
#[derive(Debug, Default, Args)]
pub(crate) struct ScanArgs {
    /// Topic query to search (repeatable); replaces the configured topics
    #[arg(long = "query", value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Minimum likes for a post to count as viral
    #[arg(long)]
    pub min_engagement: Option<u64>,

    /// Maximum posts fetched per query (at least 1)
    #[arg(long)]
    pub max_posts: Option<usize>,

    /// How many days back to search
    #[arg(long)]
    pub days_back: Option<u32>,

    /// Search backend: `bird` or `apify`
    #[arg(long)]
    pub backend: Option<Backend>,
}

impl ScanArgs {
    /// Overlay the flags onto `config`, holding them to the same rules as
    /// the environment settings they replace.
    pub(crate) fn apply(self, config: &mut ScanConfig) -> Result<(), ConfigError> {
        if !self.queries.is_empty() {
            validate_topics(&self.queries)?;
            config.topics = self.queries;
        }
        if let Some(min_engagement) = self.min_engagement {
            config.min_engagement = min_engagement;
        }
        if let Some(max_posts) = self.max_posts {
            if max_posts == 0 {
                return Err(ConfigError::Validation(
                    "--max-posts must be at least 1".to_string(),
                ));
            }
            config.max_posts_per_query = max_posts;
        }
        if let Some(days_back) = self.days_back {
            config.days_back = days_back;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        Ok(())
    }
}

/// The subset of configuration a scan run needs.
#[derive(Debug, Clone)]
pub(crate) struct ScanSettings {
    pub queries: Vec<String>,
    pub min_engagement: u64,
    pub max_posts_per_query: usize,
    pub days_back: u32,
    pub language: String,
}

impl From<&ScanConfig> for ScanSettings {
    fn from(config: &ScanConfig) -> Self {
        Self {
            queries: config.topics.clone(),
            min_engagement: config.min_engagement,
            max_posts_per_query: config.max_posts_per_query,
            days_back: config.days_back,
            language: config.language.clone(),
        }
    }
}

/// The JSON document to print and whether the process succeeded.
#[derive(Debug)]
pub(crate) struct ScanExit {
    pub document: serde_json::Value,
    pub success: bool,
}

impl ScanExit {
    pub(crate) fn failure(message: String) -> Self {
        Self {
            document: serde_json::json!({ "success": false, "error": message }),
            success: false,
        }
    }

    fn unavailable(message: String) -> Self {
        Self {
            document: serde_json::json!({ "error": message }),
            success: false,
        }
    }
}

/// Build the configured backend and run the scan against it.
pub(crate) async fn run(config: &ScanConfig) -> ExitCode {
    let exit = match SearchBackend::from_config(config) {
        Ok(backend) => execute_scan(&backend, &ScanSettings::from(config), Utc::now()).await,
        Err(e) => ScanExit::failure(e.to_string()),
    };
    emit(&exit)
}

/// Print the exit document to stdout and map it to a process exit code.
pub(crate) fn emit(exit: &ScanExit) -> ExitCode {
    match serde_json::to_string_pretty(&exit.document) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            println!("{}", serde_json::json!({ "success": false, "error": e.to_string() }));
            return ExitCode::FAILURE;
        }
    }
    if exit.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub(crate) async fn execute_scan<C: Collector>(
    collector: &C,
    settings: &ScanSettings,
    now: DateTime<Utc>,
) -> ScanExit {
    if let Err(e) = collector.ensure_available().await {
        tracing::error!(backend = collector.name(), error = %e, "search backend unavailable");
        return ScanExit::unavailable(e.to_string());
    }

    let report = match scan_topics(collector, settings, now).await {
        Ok(report) => report,
        Err(e) => {
            let message = format!("{e:#}");
            tracing::error!(error = %message, "scan failed");
            return ScanExit::failure(message);
        }
    };

    match serde_json::to_value(&report) {
        Ok(document) => ScanExit {
            document,
            success: true,
        },
        Err(e) => ScanExit::failure(format!("failed to serialize report: {e}")),
    }
}

/// Collect every query, then fold the posts of successful queries into a report.
pub(crate) async fn scan_topics<C: Collector>(
    collector: &C,
    settings: &ScanSettings,
    now: DateTime<Utc>,
) -> anyhow::Result<Report> {
    let since = since_date(now, settings.days_back).with_context(|| {
        format!(
            "days_back {} reaches past the earliest supported date",
            settings.days_back
        )
    })?;
    let params = SearchParams {
        min_engagement: settings.min_engagement,
        since,
        max_results: settings.max_posts_per_query,
        language: settings.language.clone(),
    };

    let outcomes = collect_queries(collector, &settings.queries, &params).await;

    let mut aggregator = Aggregator::new(PatternExtractor::default(), ReportLimits::default());
    for outcome in &outcomes {
        aggregator.add_posts(outcome.posts());
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(
        queries = outcomes.len(),
        failed,
        posts = aggregator.post_count(),
        "scan complete"
    );

    Ok(aggregator.finish(ReportMeta {
        queries: settings.queries.clone(),
        days_back: settings.days_back,
        scraped_at: now,
    }))
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
