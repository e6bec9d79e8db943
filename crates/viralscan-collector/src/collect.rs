//! Sequential query execution with per-query failure isolation.

use viralscan_core::PostRecord;

use crate::error::CollectorError;
use crate::request::SearchParams;
use crate::Collector;

/// What one query produced. A failed query carries its error and no posts.
#[derive(Debug)]
pub struct QueryOutcome {
    pub query: String,
    pub result: Result<Vec<PostRecord>, CollectorError>,
}

impl QueryOutcome {
    /// Posts from a successful query; empty for a failed one.
    #[must_use]
    pub fn posts(&self) -> &[PostRecord] {
        match &self.result {
            Ok(posts) => posts,
            Err(_) => &[],
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run every query in order, one at a time.
///
/// A failing query is logged at `warn` and recorded as an `Err` outcome; the
/// remaining queries still run. No retries.
pub async fn collect_queries<C>(
    collector: &C,
    queries: &[String],
    params: &SearchParams,
) -> Vec<QueryOutcome>
where
    C: Collector,
{
    let mut outcomes = Vec::with_capacity(queries.len());

    for query in queries {
        let request = params.request(query);
        let result = collector.search(&request).await;

        match &result {
            Ok(posts) => {
                tracing::info!(
                    backend = collector.name(),
                    query = query.as_str(),
                    count = posts.len(),
                    "collected posts"
                );
            }
            Err(e) => {
                tracing::warn!(
                    backend = collector.name(),
                    query = query.as_str(),
                    error = %e,
                    "error scraping query; it contributes no posts"
                );
            }
        }

        outcomes.push(QueryOutcome {
            query: query.clone(),
            result,
        });
    }

    outcomes
}
