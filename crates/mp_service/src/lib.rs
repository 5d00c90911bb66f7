use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use mp_core::{Article, ArticleId, Error, NewsApi, Result};
use mp_store::ArticleStore;

/// Simulated round-trip cost per operation, mirroring what a small remote
/// news API would charge the caller.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub category: Duration,
    pub search: Duration,
}

impl Latency {
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            category: delay,
            search: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            get: Duration::from_millis(600),
            category: Duration::from_millis(700),
            search: Duration::from_millis(900),
        }
    }
}

/// In-memory stand-in for the municipal news backend.
///
/// All four operations read the immutable [`ArticleStore`] after sleeping
/// the configured latency. A one-shot fault can be injected to make the
/// next round trip fail with [`Error::Transport`], which the test suite
/// uses to tell "error occurred" apart from "0 results".
pub struct NewsService {
    store: ArticleStore,
    latency: Latency,
    fault: Mutex<Option<String>>,
}

impl NewsService {
    pub fn new(store: ArticleStore) -> Self {
        Self::with_latency(store, Latency::default())
    }

    pub fn with_latency(store: ArticleStore, latency: Latency) -> Self {
        Self {
            store,
            latency,
            fault: Mutex::new(None),
        }
    }

    /// Make the next operation fail with a transport error.
    pub fn inject_fault(&self, reason: impl Into<String>) {
        *self.fault.lock().unwrap() = Some(reason.into());
    }

    async fn round_trip(&self, delay: Duration) -> Result<()> {
        tokio::time::sleep(delay).await;
        match self.fault.lock().unwrap().take() {
            Some(reason) => Err(Error::Transport(reason)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NewsApi for NewsService {
    async fn list(&self, limit: Option<usize>) -> Result<Vec<Article>> {
        self.round_trip(self.latency.list).await?;
        let articles = self.store.articles();
        let take = limit.unwrap_or(articles.len()).min(articles.len());
        debug!(limit = ?limit, returned = take, "listing articles");
        Ok(articles[..take].to_vec())
    }

    async fn get(&self, id: &ArticleId) -> Result<Article> {
        self.round_trip(self.latency.get).await?;
        debug!(id = %id, "looking up article");
        self.store
            .iter()
            .find(|article| article.id == *id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.canonical()))
    }

    async fn by_category(&self, category: &str) -> Result<Vec<Article>> {
        self.round_trip(self.latency.category).await?;
        let needle = category.to_lowercase();
        let matches: Vec<Article> = self
            .store
            .iter()
            .filter(|article| {
                article
                    .category
                    .as_deref()
                    .map(|c| c.to_lowercase() == needle)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        debug!(category, matched = matches.len(), "filtered by category");
        Ok(matches)
    }

    async fn search(&self, term: &str) -> Result<Vec<Article>> {
        self.round_trip(self.latency.search).await?;
        let needle = term.to_lowercase();
        let matches: Vec<Article> = self
            .store
            .iter()
            .filter(|article| {
                article.title.to_lowercase().contains(&needle)
                    || article.summary.to_lowercase().contains(&needle)
                    || article
                        .content
                        .as_deref()
                        .map(|c| c.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .cloned()
            .collect();
        debug!(term, matched = matches.len(), "searched articles");
        Ok(matches)
    }
}
