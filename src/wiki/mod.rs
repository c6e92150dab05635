pub mod rest;
pub mod types;

use crate::error::FetchError;
use async_trait::async_trait;
use types::{ArticleSummaries, RandomArticles};

/// Source of random articles and their summaries.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Request `count` random main-namespace articles.
    async fn fetch_random_articles(&self, count: u32) -> Result<RandomArticles, FetchError>;

    /// Request plain-text intro extracts for `ids`, in one call.
    async fn fetch_summaries(&self, ids: &[u64]) -> Result<ArticleSummaries, FetchError>;
}
