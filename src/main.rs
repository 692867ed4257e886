use review_analyzer::app::build_router;
use review_analyzer::config::ServerConfig;
use review_analyzer::sentiment::{SentimentAnalyzer, SentimentScorer};
use review_analyzer::storage::loader::load_reviews_csv;
use review_analyzer::storage::memory::ReviewStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::load()?;
    tracing::info!("Starting review analyzer with {:?}", config);

    // 1. Review data:
    let reviews = load_reviews_csv(&config.data_path)?;
    let store = Arc::new(ReviewStore::with_reviews(reviews));

    // 2. Sentiment analyzer:
    let analyzer = match &config.lexicon_path {
        Some(path) => SentimentAnalyzer::from_lexicon_file(path)?,
        None => SentimentAnalyzer::new(),
    };
    tracing::info!("Sentiment lexicon has {} entries", analyzer.lexicon_len());
    let scorer: Arc<dyn SentimentScorer> = Arc::new(analyzer);

    // 3. HTTP Router:
    let app = build_router(store, scorer);

    // 4. Start HTTP server:
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}...", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
