use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use mp_core::{Article, ArticleId, Envelope, NewsApi, Status};
use mp_feed::{ArticleFeed, CategoryFeed, ListFeed, SearchFeed};
use mp_service::{Latency, NewsService};
use mp_store::ArticleStore;

/// Durations like "30s", "5m", "1h15m", "2d". A bare number means seconds.
#[derive(Debug, Clone, Copy)]
struct WatchInterval(Duration);

fn parse_interval(s: &str) -> Result<WatchInterval, String> {
    let mut total_seconds = 0u64;
    let mut digits = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: u64 = digits
            .parse()
            .map_err(|_| format!("expected a number before '{}'", c))?;
        digits.clear();
        total_seconds += match c {
            's' => value,
            'm' => value * 60,
            'h' => value * 3600,
            'd' => value * 86400,
            other => return Err(format!("invalid duration unit: {}", other)),
        };
    }
    if !digits.is_empty() {
        total_seconds += digits
            .parse::<u64>()
            .map_err(|_| "invalid number in duration".to_string())?;
    }
    if total_seconds == 0 {
        return Err("duration must be positive".to_string());
    }
    Ok(WatchInterval(Duration::from_secs(total_seconds)))
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Municipal news portal front-end", long_about = None)]
struct Cli {
    /// Emit the raw result envelope as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Override the simulated network latency, in milliseconds.
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List published news in editorial order.
    News {
        /// Show only the first N articles.
        #[arg(long)]
        limit: Option<usize>,
        /// Re-run the query periodically (e.g. 30s, 5m, 1h15m).
        #[arg(long, value_parser = parse_interval)]
        watch: Option<WatchInterval>,
    },
    /// Show one article by id.
    Article { id: ArticleId },
    /// List news in one category (case-insensitive).
    Category { name: String },
    /// Search news by term (3 characters minimum).
    Search { term: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let latency = cli
        .latency_ms
        .map(|ms| Latency::uniform(Duration::from_millis(ms)))
        .unwrap_or_default();
    let api: Arc<dyn NewsApi> = Arc::new(NewsService::with_latency(ArticleStore::seeded(), latency));

    match cli.command {
        Commands::News { limit, watch } => {
            let feed = ListFeed::spawn(api, limit);
            let env = feed.settled().await;
            print_listing(&env, cli.json)?;

            if let Some(WatchInterval(interval)) = watch {
                info!("🔄 Re-running every {}s, Ctrl-C to stop", interval.as_secs());
                let mut states = feed.subscribe();
                // Mark everything published so far as seen, so each cycle
                // waits for its own fresh result.
                states.borrow_and_update();
                loop {
                    tokio::time::sleep(interval).await;
                    feed.refresh();
                    loop {
                        states.changed().await?;
                        let env = states.borrow().clone();
                        if env.is_settled() {
                            print_listing(&env, cli.json)?;
                            break;
                        }
                    }
                }
            }
        }
        Commands::Article { id } => {
            let feed = ArticleFeed::spawn(api, id);
            let env = feed.settled().await;
            print_article(&env, cli.json)?;
            match env.status {
                Status::NotFound => std::process::exit(2),
                _ if env.is_err() => std::process::exit(1),
                _ => {}
            }
        }
        Commands::Category { name } => {
            let feed = CategoryFeed::spawn(api, name);
            let env = feed.settled().await;
            print_listing(&env, cli.json)?;
        }
        Commands::Search { term } => {
            let feed = SearchFeed::spawn(api, term);
            let env = feed.settled().await;
            print_listing(&env, cli.json)?;
        }
    }

    Ok(())
}

fn print_listing(env: &Envelope<Vec<Article>>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(env)?);
        return Ok(());
    }
    if env.status == Status::BadRequest {
        // Guided empty state, not a failure.
        println!("{}", env.message);
        return Ok(());
    }
    if env.is_err() {
        eprintln!("{}", env.message);
        if let Some(error) = &env.error {
            eprintln!("  {}", error);
        }
        return Ok(());
    }
    info!("📰 {}", env.message);
    if env.data.is_empty() {
        println!("No articles.");
        return Ok(());
    }
    for article in &env.data {
        println!(
            "[{}] {} — {} ({})",
            article.id,
            article.title,
            article.date,
            article.category.as_deref().unwrap_or("sin categoría"),
        );
    }
    Ok(())
}

fn print_article(env: &Envelope<Option<Article>>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(env)?);
        return Ok(());
    }
    match &env.data {
        Some(article) => {
            println!("{}", article.title);
            println!(
                "{} · {} · {}",
                article.date,
                article.author.as_deref().unwrap_or("Municipalidad"),
                article.read_time.as_deref().unwrap_or("-"),
            );
            println!();
            println!("{}", article.body());
        }
        None => {
            eprintln!("{}", env.message);
            if let Some(error) = &env.error {
                eprintln!("  {}", error);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_parser_handles_compound_durations() {
        assert_eq!(parse_interval("30s").unwrap().0, Duration::from_secs(30));
        assert_eq!(parse_interval("5m").unwrap().0, Duration::from_secs(300));
        assert_eq!(
            parse_interval("1h15m30s").unwrap().0,
            Duration::from_secs(4530)
        );
        assert_eq!(parse_interval("45").unwrap().0, Duration::from_secs(45));
    }

    #[test]
    fn interval_parser_rejects_garbage() {
        assert!(parse_interval("").is_err());
        assert!(parse_interval("h").is_err());
        assert!(parse_interval("10x").is_err());
        assert!(parse_interval("0s").is_err());
    }
}
