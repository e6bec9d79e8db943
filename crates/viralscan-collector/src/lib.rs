//! Post collection from external search backends.
//!
//! A [`Collector`] turns one search query into post records. Backends are
//! the `bird` X/Twitter CLI ([`BirdCollector`]) and the Apify tweet-scraper
//! actor ([`ApifyCollector`]); [`collect_queries`] runs a list of queries with
//! per-query failure isolation.

pub mod apify;
pub mod backend;
pub mod bird;
pub mod collect;
pub mod error;
pub mod request;

mod parse;

pub use apify::ApifyCollector;
pub use backend::SearchBackend;
pub use bird::BirdCollector;
pub use collect::{collect_queries, QueryOutcome};
pub use error::CollectorError;
pub use request::{since_date, SearchParams, SearchRequest};

use viralscan_core::PostRecord;

/// A source of posts for search queries.
///
/// Implementations are driven sequentially: one query at a time.
#[allow(async_fn_in_trait)]
pub trait Collector {
    /// Short backend name used in log fields.
    fn name(&self) -> &str;

    /// Check that the backend can be used at all (binary installed, token set).
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Unavailable`] when the backend cannot serve
    /// any query.
    async fn ensure_available(&self) -> Result<(), CollectorError>;

    /// Fetch up to `request.max_results` posts for one query.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] on any transport, process or decoding failure.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<PostRecord>, CollectorError>;
}
