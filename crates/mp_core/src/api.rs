use async_trait::async_trait;

use crate::types::{Article, ArticleId};
use crate::Result;

/// Query operations over the article collection. Implementations simulate a
/// remote news API; every call is asynchronous and may carry artificial
/// latency before resolving.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Every stored article in defined order, or the first `limit` of them.
    /// Never fails on an empty or short store.
    async fn list(&self, limit: Option<usize>) -> Result<Vec<Article>>;

    /// The article with the given id, comparing canonical string forms.
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) on a miss.
    async fn get(&self, id: &ArticleId) -> Result<Article>;

    /// Articles whose category matches case-insensitively. Uncategorized
    /// records never match; no match is an empty result, not a failure.
    async fn by_category(&self, category: &str) -> Result<Vec<Article>>;

    /// Articles where the term is a case-insensitive substring of the
    /// title, summary, or content. Result order follows store order.
    async fn search(&self, term: &str) -> Result<Vec<Article>>;
}
