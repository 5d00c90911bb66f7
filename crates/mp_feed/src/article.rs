use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use mp_core::{Article, ArticleId, Envelope, NewsApi, Status};

use crate::driver::{FeedHandle, FeedQuery};

struct ArticleQuery {
    api: Arc<dyn NewsApi>,
}

#[async_trait]
impl FeedQuery<ArticleId, Option<Article>> for ArticleQuery {
    async fn run(&self, id: ArticleId) -> Envelope<Option<Article>> {
        match self.api.get(&id).await {
            Ok(article) => Envelope::ok(Some(article), "Article loaded successfully"),
            Err(err) if err.is_not_found() => Envelope::failed(
                Status::NotFound,
                None,
                "Article not found",
                err.to_string(),
            ),
            Err(err) => Envelope::failed(
                Status::Internal,
                None,
                "Error loading article",
                err.to_string(),
            ),
        }
    }
}

/// Feed of a single article looked up by id. A missing id settles at 404;
/// anything else unexpected settles at 500.
pub struct ArticleFeed {
    inner: FeedHandle<ArticleId, Option<Article>>,
}

impl ArticleFeed {
    pub fn spawn(api: Arc<dyn NewsApi>, id: ArticleId) -> Self {
        Self {
            inner: FeedHandle::spawn(ArticleQuery { api }, id, Envelope::pending(None), None),
        }
    }

    pub fn set_id(&self, id: impl Into<ArticleId>) {
        self.inner.set(id.into());
    }

    pub fn subscribe(&self) -> watch::Receiver<Envelope<Option<Article>>> {
        self.inner.subscribe()
    }

    pub fn state(&self) -> Envelope<Option<Article>> {
        self.inner.state()
    }

    pub async fn settled(&self) -> Envelope<Option<Article>> {
        self.inner.settled().await
    }
}
