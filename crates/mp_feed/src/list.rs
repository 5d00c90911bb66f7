use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use mp_core::{Article, Envelope, NewsApi, Status};

use crate::driver::{FeedHandle, FeedQuery};

struct ListQuery {
    api: Arc<dyn NewsApi>,
}

#[async_trait]
impl FeedQuery<Option<usize>, Vec<Article>> for ListQuery {
    async fn run(&self, limit: Option<usize>) -> Envelope<Vec<Article>> {
        match self.api.list(limit).await {
            Ok(articles) => Envelope::ok(articles, "News loaded successfully"),
            Err(err) => Envelope::failed(
                Status::Internal,
                Vec::new(),
                "Error loading news",
                err.to_string(),
            ),
        }
    }
}

/// Feed of the news listing, optionally limited to the first N records.
/// Fires immediately on spawn and re-runs on every limit change.
pub struct ListFeed {
    inner: FeedHandle<Option<usize>, Vec<Article>>,
}

impl ListFeed {
    pub fn spawn(api: Arc<dyn NewsApi>, limit: Option<usize>) -> Self {
        Self {
            inner: FeedHandle::spawn(
                ListQuery { api },
                limit,
                Envelope::pending(Vec::new()),
                None,
            ),
        }
    }

    pub fn set_limit(&self, limit: Option<usize>) {
        self.inner.set(limit);
    }

    /// Re-run the query with the current limit.
    pub fn refresh(&self) {
        self.inner.refresh();
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
