use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::{sleep, timeout};

use mp_core::{Article, ArticleId, Envelope, Error, NewsApi, Status};
use mp_feed::{ArticleFeed, CategoryFeed, ListFeed, SearchFeed};
use mp_service::{Latency, NewsService};
use mp_store::{seed, ArticleStore};

const WAIT: Duration = Duration::from_secs(30);

/// Engine double: the seeded articles behind a fixed delay, with call
/// accounting so tests can assert exactly how often (and with what) the
/// engine was hit.
struct CountingApi {
    articles: Vec<Article>,
    delay: Duration,
    calls: AtomicUsize,
    last_term: Mutex<Option<String>>,
}

impl CountingApi {
    fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            articles: seed::municipal_articles(),
            delay,
            calls: AtomicUsize::new(0),
            last_term: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_term(&self) -> Option<String> {
        self.last_term.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsApi for CountingApi {
    async fn list(&self, limit: Option<usize>) -> mp_core::Result<Vec<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.delay).await;
        let take = limit.unwrap_or(self.articles.len()).min(self.articles.len());
        Ok(self.articles[..take].to_vec())
    }

    async fn get(&self, id: &ArticleId) -> mp_core::Result<Article> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.delay).await;
        self.articles
            .iter()
            .find(|a| a.id == *id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.canonical()))
    }

    async fn by_category(&self, category: &str) -> mp_core::Result<Vec<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.delay).await;
        let needle = category.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                a.category
                    .as_deref()
                    .map(|c| c.to_lowercase() == needle)
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> mp_core::Result<Vec<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_term.lock().unwrap() = Some(term.to_string());
        sleep(self.delay).await;
        let needle = term.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.summary.to_lowercase().contains(&needle)
                    || a
                        .content
                        .as_deref()
                        .map(|c| c.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .cloned()
            .collect())
    }
}

fn seeded_service() -> Arc<NewsService> {
    // Default latency is fine here: the paused clock skips over it.
    Arc::new(NewsService::new(ArticleStore::seeded()))
}

async fn wait_until<T, F>(rx: &mut watch::Receiver<Envelope<T>>, pred: F) -> Result<Envelope<T>>
where
    T: Clone,
    F: Fn(&Envelope<T>) -> bool,
{
    timeout(WAIT, async {
        loop {
            let env = rx.borrow_and_update().clone();
            if pred(&env) {
                return Ok::<_, anyhow::Error>(env);
            }
            rx.changed().await?;
        }
    })
    .await?
}

fn ids<T: AsRef<[Article]>>(data: T) -> Vec<String> {
    data.as_ref().iter().map(|a| a.id.canonical()).collect()
}

#[tokio::test(start_paused = true)]
async fn list_feed_settles_with_the_seeded_articles() -> Result<()> {
    let feed = ListFeed::spawn(seeded_service(), None);
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Ok);
    assert_eq!(ids(&env.data), vec!["1", "2", "3", "4"]);
    assert_eq!(env.message, "News loaded successfully");
    assert!(env.error.is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn list_feed_with_limit_returns_the_prefix() -> Result<()> {
    let feed = ListFeed::spawn(seeded_service(), Some(2));
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(ids(&env.data), vec!["1", "2"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn reloading_keeps_stale_data_until_the_new_result_lands() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(100));
    let feed = ListFeed::spawn(api.clone(), None);
    let mut rx = feed.subscribe();
    wait_until(&mut rx, |e| e.is_settled()).await?;

    feed.set_limit(Some(1));
    let reloading = wait_until(&mut rx, |e| e.loading).await?;
    assert_eq!(reloading.data.len(), 4, "stale articles stay visible during refetch");
    assert_eq!(reloading.status, Status::Ok);

    let settled = wait_until(&mut rx, |e| e.is_settled()).await?;
    assert_eq!(ids(&settled.data), vec!["1"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn limit_change_mid_flight_never_surfaces_the_stale_result() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(300));
    let feed = ListFeed::spawn(api.clone(), None);

    // Let the first query get airborne, then change the parameter.
    sleep(Duration::from_millis(100)).await;
    feed.set_limit(Some(2));

    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(ids(&env.data), vec!["1", "2"]);
    assert_eq!(api.calls(), 2, "both queries started, only the newer one landed");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn article_feed_resolves_by_id() -> Result<()> {
    let feed = ArticleFeed::spawn(seeded_service(), ArticleId::Number(2));
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Ok);
    let article = env.data.expect("article data");
    assert!(article.title.contains("Vacunación"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn missing_article_settles_at_404() -> Result<()> {
    let feed = ArticleFeed::spawn(seeded_service(), ArticleId::Number(99));
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::NotFound);
    assert_eq!(env.status.code(), 404);
    assert!(env.data.is_none());
    assert_eq!(env.message, "Article not found");
    assert!(env.error.is_some());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn id_change_mid_flight_settles_on_the_newer_article() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(300));
    let feed = ArticleFeed::spawn(api.clone(), ArticleId::Number(1));
    sleep(Duration::from_millis(100)).await;
    feed.set_id(2u64);

    let env = timeout(WAIT, feed.settled()).await?;
    let article = env.data.expect("article data");
    assert!(
        article.title.contains("Vacunación"),
        "feed must end in the newer id's article, got: {}",
        article.title
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn transport_failure_settles_at_500_distinct_from_not_found() -> Result<()> {
    let service = Arc::new(NewsService::with_latency(ArticleStore::seeded(), Latency::none()));
    service.inject_fault("connection reset");
    let feed = ListFeed::spawn(service, None);
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Internal);
    assert_eq!(env.message, "Error loading news");
    assert!(env.error.unwrap().contains("connection reset"));
    assert!(env.data.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn category_feed_filters_case_insensitively() -> Result<()> {
    let feed = CategoryFeed::spawn(seeded_service(), "salud");
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Ok);
    assert_eq!(ids(&env.data), vec!["2"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unknown_category_is_an_empty_success_not_a_failure() -> Result<()> {
    let feed = CategoryFeed::spawn(seeded_service(), "Deportes");
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Ok);
    assert!(env.data.is_empty());
    assert!(env.error.is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn empty_category_short_circuits_without_an_engine_call() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(100));
    let feed = CategoryFeed::spawn(api.clone(), "");
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::BadRequest);
    assert!(env.data.is_empty());
    assert_eq!(api.calls(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn short_search_term_short_circuits_without_an_engine_call() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(100));
    let feed = SearchFeed::spawn(api.clone(), "ab");
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::BadRequest);
    assert!(env.data.is_empty());
    assert_eq!(env.message, "Search term must be at least 3 characters");
    assert_eq!(api.calls(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn three_character_term_reaches_the_engine() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(50));
    let feed = SearchFeed::spawn(api.clone(), "pav");
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Ok);
    assert_eq!(api.calls(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_debounces_to_one_engine_call_with_the_final_term() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(50));
    let feed = SearchFeed::spawn(api.clone(), "rec");

    // Keystrokes land well inside the debounce window.
    sleep(Duration::from_millis(100)).await;
    feed.set_term("recic");
    sleep(Duration::from_millis(100)).await;
    feed.set_term("reciclaje");

    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Ok);
    assert_eq!(api.calls(), 1, "one engine call per debounce window");
    assert_eq!(api.last_term().as_deref(), Some("reciclaje"));
    assert_eq!(ids(&env.data), vec!["4"]);
    assert_eq!(env.message, "Found 1 results");

    // A later stable term opens a fresh window and queries again.
    let mut rx = feed.subscribe();
    feed.set_term("vacunación");
    let env = wait_until(&mut rx, |e| {
        e.is_settled() && e.data.iter().any(|a| a.id.canonical() == "2")
    })
    .await?;
    assert_eq!(api.calls(), 2);
    assert_eq!(env.status, Status::Ok);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn shortening_the_term_resets_to_a_guided_empty_state() -> Result<()> {
    let api = CountingApi::new(Duration::from_millis(50));
    let feed = SearchFeed::spawn(api.clone(), "reciclaje");
    timeout(WAIT, feed.settled()).await?;
    assert_eq!(api.calls(), 1);

    let mut rx = feed.subscribe();
    feed.set_term("re");
    let env = wait_until(&mut rx, |e| e.status == Status::BadRequest).await?;
    assert!(env.data.is_empty());
    assert_eq!(api.calls(), 1, "the short term never reaches the engine");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn search_transport_failure_settles_at_500() -> Result<()> {
    let service = Arc::new(NewsService::with_latency(ArticleStore::seeded(), Latency::none()));
    service.inject_fault("gateway unreachable");
    let feed = SearchFeed::spawn(service, "reciclaje");
    let env = timeout(WAIT, feed.settled()).await?;
    assert_eq!(env.status, Status::Internal);
    assert_eq!(env.message, "Error while searching");
    assert!(env.data.is_empty());
    Ok(())
}
