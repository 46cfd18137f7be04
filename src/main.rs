//! LearnFi Content Registry API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use learnfi_content_registry::domain::gateways::{ContentRepository, NetworkCatalog};
use learnfi_content_registry::infrastructure::driven_adapters::config::{
    AppConfig, LogConfig, LogFormat, RegistryBackend, ServerConfig,
};
use learnfi_content_registry::infrastructure::driven_adapters::content_repository::{
    InMemoryContentRepository, PostgresContentRepository,
};
use learnfi_content_registry::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use learnfi_content_registry::infrastructure::driven_adapters::network_catalog::ConfiguredNetworkCatalog;
use learnfi_content_registry::infrastructure::driving_adapters::api_rest::rate_limit::apply_rate_limit;
use learnfi_content_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

const DEFAULT_LOG_FILTER: &str = "learnfi_content_registry=debug,tower_http=debug";

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER).into());

    let (json, pretty) = match log.format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(&config.log);
    tracing::info!("Configuration loaded successfully");

    // Create repository
    let content_repository: Arc<dyn ContentRepository> = match config.registry.backend {
        RegistryBackend::Postgres => {
            let pool = create_pool(&config.database).await?;
            tracing::info!("Database connection pool created");
            run_migrations(&pool).await?;
            Arc::new(PostgresContentRepository::new(pool))
        }
        RegistryBackend::Memory => {
            tracing::warn!("Using in-memory registry; records are lost on shutdown");
            Arc::new(InMemoryContentRepository::new())
        }
    };

    // Resolve deployment networks
    let catalog = ConfiguredNetworkCatalog::from_config(&config.deployment)?;
    tracing::info!(networks = catalog.list().len(), "Deployment networks resolved");
    let network_catalog: Arc<dyn NetworkCatalog> = Arc::new(catalog);

    let app_state = AppState::new(Arc::new(config.clone()), content_repository, network_catalog);

    // Build router
    let app = build_router(app_state).layer(cors_layer(&config.server));
    let app = apply_rate_limit(app, &config.rate_limit)?;

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
