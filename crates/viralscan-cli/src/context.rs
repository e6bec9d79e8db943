//! The `context` command: turn a saved scan report into a prompt block.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, TimeDelta, Utc};
use clap::Args;
use rand::Rng;
use viralscan_patterns::{is_stale, viral_context, ContextOptions, Report};

#[derive(Debug, Args)]
pub(crate) struct ContextArgs {
    /// Report JSON written by `scan`; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Reject reports scraped more than this many days ago
    #[arg(long, default_value_t = 7)]
    pub max_age_days: u32,

    /// Use the report even when it is older than `--max-age-days`
    #[arg(long)]
    pub allow_stale: bool,

    /// Number of keywords to sample
    #[arg(long, default_value_t = 8)]
    pub keywords: usize,

    /// Number of phrases to sample
    #[arg(long, default_value_t = 5)]
    pub phrases: usize,

    /// Number of hashtags to sample
    #[arg(long, default_value_t = 0)]
    pub hashtags: usize,
}

/// Read the report from `--input` or stdin and render the context block.
///
/// # Errors
///
/// Returns an error if the report cannot be read or parsed, or is stale.
pub(crate) fn run_context(args: &ContextArgs, now: DateTime<Utc>) -> anyhow::Result<String> {
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read report from stdin")?;
            buf
        }
    };

    render_context(&raw, args, now, &mut rand::rng())
}

pub(crate) fn render_context<R>(
    raw: &str,
    args: &ContextArgs,
    now: DateTime<Utc>,
    rng: &mut R,
) -> anyhow::Result<String>
where
    R: Rng + ?Sized,
{
    let report: Report =
        serde_json::from_str(raw).context("input is not a successful viralscan report")?;

    let max_age = TimeDelta::days(i64::from(args.max_age_days));
    if is_stale(report.stats.scraped_at, now, max_age) {
        if !args.allow_stale {
            anyhow::bail!(
                "report scraped at {} is older than {} days; run `viralscan scan` again or pass --allow-stale",
                report.stats.scraped_at,
                args.max_age_days
            );
        }
        tracing::warn!(
            scraped_at = %report.stats.scraped_at,
            "using stale report"
        );
    }

    let options = ContextOptions {
        keywords: args.keywords,
        phrases: args.phrases,
        hashtags: args.hashtags,
    };
    Ok(viral_context(&report.patterns, &options, rng))
}
