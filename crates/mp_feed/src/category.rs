use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use mp_core::{Article, Envelope, NewsApi, Status};

use crate::driver::{FeedHandle, FeedQuery};

struct CategoryQuery {
    api: Arc<dyn NewsApi>,
}

#[async_trait]
impl FeedQuery<String, Vec<Article>> for CategoryQuery {
    fn short_circuit(&self, category: &String) -> Option<Envelope<Vec<Article>>> {
        if category.is_empty() {
            // Guided empty state; the engine never sees the request.
            return Some(Envelope::invalid(
                Vec::new(),
                "A valid category is required",
                "category required",
            ));
        }
        None
    }

    async fn run(&self, category: String) -> Envelope<Vec<Article>> {
        match self.api.by_category(&category).await {
            Ok(articles) => Envelope::ok(articles, "Category news loaded successfully"),
            Err(err) => Envelope::failed(
                Status::Internal,
                Vec::new(),
                format!("Error loading news for category: {}", category),
                err.to_string(),
            ),
        }
    }
}

/// Feed of the news listing filtered to one category. Matching is
/// case-insensitive and zero matches is a successful, empty result.
pub struct CategoryFeed {
    inner: FeedHandle<String, Vec<Article>>,
}

impl CategoryFeed {
    pub fn spawn(api: Arc<dyn NewsApi>, category: impl Into<String>) -> Self {
        Self {
            inner: FeedHandle::spawn(
                CategoryQuery { api },
                category.into(),
                Envelope::pending(Vec::new()),
                None,
            ),
        }
    }

    pub fn set_category(&self, category: impl Into<String>) {
        self.inner.set(category.into());
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
