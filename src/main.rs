//! Doc Renderer service entry point.
//!
//! Loads configuration, initialises logging, creates the document store once
//! and serves the render endpoint until interrupted.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use doc_renderer::adapters::http::{app_router, DocumentHandlers};
use doc_renderer::adapters::{
    LocalFileDocumentStore, PostgresDocumentStore, PulldownMarkdownRenderer, StoreTemplateProvider,
};
use doc_renderer::application::RenderDocumentHandler;
use doc_renderer::config::{AppConfig, DatabaseConfig, ServerConfig, StorageBackend, ValidationError};
use doc_renderer::ports::{DocumentStore, MarkdownRenderer};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let store = build_store(&config).await?;

    let renderer: Arc<dyn MarkdownRenderer> = if config.render.commonmark_only {
        Arc::new(PulldownMarkdownRenderer::commonmark())
    } else {
        Arc::new(PulldownMarkdownRenderer::new())
    };

    let mut templates = StoreTemplateProvider::new(Arc::clone(&store))
        .with_template_id(config.render.template_id.as_str());
    if config.render.cache_template {
        templates = templates.with_cache();
    }
    if config.render.strict_template {
        templates = templates.strict();
    }

    let handler = RenderDocumentHandler::new(store, renderer, Arc::new(templates));
    let app = app_router(
        DocumentHandlers::new(Arc::new(handler)),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        template_id = %config.render.template_id,
        "Doc renderer listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Doc renderer stopped");
    Ok(())
}

/// JSON logs in production, human-readable logs elsewhere.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>, BoxError> {
    match config.storage.backend {
        StorageBackend::Filesystem => {
            tracing::info!(root_dir = %config.storage.root_dir, "Using filesystem document store");
            Ok(Arc::new(LocalFileDocumentStore::new(&config.storage.root_dir)))
        }
        StorageBackend::Postgres => {
            let database = config
                .storage
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("STORAGE__DATABASE__URL"))?;
            let pool = connect(database).await?;
            tracing::info!("Using PostgreSQL document store");
            Ok(Arc::new(PostgresDocumentStore::new(pool)))
        }
    }
}

async fn connect(database: &DatabaseConfig) -> Result<sqlx::PgPool, BoxError> {
    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
