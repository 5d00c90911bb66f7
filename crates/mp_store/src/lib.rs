use std::sync::Arc;

use mp_core::Article;

pub mod seed;

/// Ordered, read-only collection of published articles.
///
/// The whole collection is built once at startup and never mutated
/// afterwards, so clones share the same backing slice and no locking is
/// needed anywhere.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Arc<[Article]>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: articles.into(),
        }
    }

    /// The municipal article set shipped with the portal.
    pub fn seeded() -> Self {
        let store = Self::new(seed::municipal_articles());
        tracing::debug!("article store seeded with {} records", store.len());
        store
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
