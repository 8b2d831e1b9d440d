//! HTTP surface for the recommendation engine.
//!
//! Two servers run side by side: the main router (`/recommend`,
//! `/analytics`, `/services`) and the live analytics feed on its own
//! port.

pub mod handlers;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing::{error, info, warn};

use crate::analysis::analyzer::{SimpleAnalyzer, StemmingAnalyzer};
use crate::analytics::{serve_feed, LiveFeed, QueryLog, QueryLogEntry};
use crate::catalog::{builtin_catalog, ServiceCatalog};
use crate::classify::{builtin_training_set, ServiceClassifier};
use crate::error::Result;
use crate::recommend::{MatchResolver, DISPLAY_THRESHOLD};
use crate::server::handlers::{Recommendation, RecommendResponse};

/// File name of the persisted classifier artifact inside the data dir.
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// File name of the query log inside the data dir.
pub const QUERY_LOG_FILE: &str = "query_log.txt";

/// Server configuration assembled by the CLI.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the main HTTP router.
    pub http_port: u16,
    /// Port for the live feed WebSocket server.
    pub feed_port: u16,
    /// Directory holding the classifier artifact and the query log.
    pub data_dir: PathBuf,
}

/// Process-wide state shared by all request handlers.
///
/// Constructed once at startup; the catalog and classifier are immutable
/// afterwards, the query log file is the only mutable shared resource.
pub struct AppState {
    resolver: MatchResolver,
    catalog: Arc<ServiceCatalog>,
    log: QueryLog,
    feed: LiveFeed,
}

impl AppState {
    /// Build the full engine state: catalog, classifier (loaded from the
    /// artifact or trained and persisted), resolver, log, and feed.
    ///
    /// Classifier failures here are fatal; the engine cannot serve
    /// requests without a model.
    pub fn initialize(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let catalog = Arc::new(builtin_catalog());
        let stemming = Arc::new(StemmingAnalyzer::new()?);
        let classifier = Arc::new(ServiceClassifier::load_or_train(
            &data_dir.join(CLASSIFIER_FILE),
            &builtin_training_set(),
            stemming,
        )?);
        let resolver = MatchResolver::new(
            catalog.clone(),
            classifier,
            Arc::new(SimpleAnalyzer::new()?),
        );

        Ok(AppState {
            resolver,
            catalog,
            log: QueryLog::new(data_dir.join(QUERY_LOG_FILE)),
            feed: LiveFeed::default(),
        })
    }

    /// Resolve a query, log the outcome, and broadcast the updated
    /// history.
    ///
    /// Log failures are swallowed: the recommendation is still useful
    /// even when the analytics write fails, so only the feed misses a
    /// cycle.
    pub fn recommend(&self, query: &str) -> Result<RecommendResponse> {
        let result = self.resolver.resolve(query)?;

        let response = match result.service {
            Some(service) if result.score > DISPLAY_THRESHOLD => RecommendResponse {
                recommendation: Recommendation {
                    title: service.title,
                    description: service.description,
                },
                category: result.category,
                confidence: result.score,
            },
            _ => RecommendResponse::need_more_info(),
        };

        let entry = QueryLogEntry::new(query, &response.recommendation.title, response.confidence);
        match self.log.record(&entry) {
            Ok(history) => self.feed.publish(&history),
            Err(e) => warn!("failed to record query log entry: {e}"),
        }

        Ok(response)
    }

    /// The full parsed query history, oldest first.
    pub fn analytics(&self) -> Result<Vec<QueryLogEntry>> {
        self.log.read_all()
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn feed(&self) -> &LiveFeed {
        &self.feed
    }
}

/// Build the main HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/recommend", post(handlers::recommend))
        .route("/analytics", get(handlers::analytics))
        .route("/services", get(handlers::services))
        .with_state(state)
}

/// Run both servers until the process exits.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::initialize(&config.data_dir)?);

    let feed = state.feed().clone();
    let feed_port = config.feed_port;
    tokio::spawn(async move {
        if let Err(e) = serve_feed(feed, feed_port).await {
            error!("live feed server failed: {e}");
        }
    });

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "recommendation server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
