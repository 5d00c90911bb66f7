use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use mp_core::{Article, Envelope, NewsApi, Status};

use crate::driver::{FeedHandle, FeedQuery};

/// How long the term must sit still before the query fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Terms shorter than this never reach the engine.
pub const MIN_SEARCH_LEN: usize = 3;

struct SearchQuery {
    api: Arc<dyn NewsApi>,
}

#[async_trait]
impl FeedQuery<String, Vec<Article>> for SearchQuery {
    fn short_circuit(&self, term: &String) -> Option<Envelope<Vec<Article>>> {
        if term.chars().count() < MIN_SEARCH_LEN {
            return Some(Envelope::invalid(
                Vec::new(),
                "Search term must be at least 3 characters",
                "term too short",
            ));
        }
        None
    }

    async fn run(&self, term: String) -> Envelope<Vec<Article>> {
        match self.api.search(&term).await {
            Ok(articles) => {
                let message = format!("Found {} results", articles.len());
                Envelope::ok(articles, message)
            }
            Err(err) => Envelope::failed(
                Status::Internal,
                Vec::new(),
                "Error while searching",
                err.to_string(),
            ),
        }
    }
}

/// Debounced search feed. Each term change resets the debounce timer; the
/// query fires once the term has been stable for [`SEARCH_DEBOUNCE`], and
/// short terms settle locally at 400 without an engine call.
pub struct SearchFeed {
    inner: FeedHandle<String, Vec<Article>>,
}

impl SearchFeed {
    pub fn spawn(api: Arc<dyn NewsApi>, term: impl Into<String>) -> Self {
        Self {
            inner: FeedHandle::spawn(
                SearchQuery { api },
                term.into(),
                Envelope::idle(Vec::new()),
                Some(SEARCH_DEBOUNCE),
            ),
        }
    }

    pub fn set_term(&self, term: impl Into<String>) {
        self.inner.set(term.into());
    }

    pub fn subscribe(&self) -> watch::Receiver<Envelope<Vec<Article>>> {
        self.inner.subscribe()
    }

    pub fn state(&self) -> Envelope<Vec<Article>> {
        self.inner.state()
    }

    pub async fn settled(&self) -> Envelope<Vec<Article>> {
        self.inner.settled().await
    }
}
