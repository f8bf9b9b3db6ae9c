use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitemeta::common::config::AppConfig;
use sitemeta::common::db::create_database_pool;
use sitemeta::common::di::AppServiceFactory;
use sitemeta::interfaces::create_api_routes;

/// SiteMeta - per-domain website metadata service
///
/// Serves titles, authors, descriptions, keywords, links and permissions for
/// the domains it knows, negotiating the language of the translatable fields
/// per request and keeping a Redis cache coherent with PostgreSQL.
///
/// Layers follow the hexagonal layout:
///
/// - Domain Layer: entities, repository traits and pure services (domain/*)
/// - Application Layer: use cases, ports and DTOs (application/*)
/// - Infrastructure Layer: PostgreSQL repositories and the Redis adapter (infrastructure/*)
/// - Interface Layer: HTTP routes and handlers (interfaces/*)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = AppConfig::from_env();
    tracing::info!(
        "Languages: default {}, supported {:?}",
        config.i18n.default_language,
        config.i18n.supported_languages
    );

    let pool = Arc::new(create_database_pool(&config).await?);
    tracing::info!("PostgreSQL database pool initialized successfully");

    let factory = AppServiceFactory::new(config.clone());
    let state = factory.create_services(pool).await;

    let app = create_api_routes(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting SiteMeta server on http://{}", addr);

    axum::serve(listener, app).await?;

    tracing::info!("Server shutdown completed");
    Ok(())
}
