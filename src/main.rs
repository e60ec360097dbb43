// Main entry point - dependency wiring and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::dashboard_registry::DashboardRegistry;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::strategy_service::StrategyService;
use crate::infrastructure::assets::AssetBundle;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::csv_repository::CsvDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_app_config()?;

    // Compile static presentation assets
    let assets = AssetBundle::compile(&config.assets.stylesheets)?;

    // Create repository (infrastructure layer)
    let datasets: Arc<dyn DatasetRepository> =
        Arc::new(CsvDatasetRepository::new(config.dataset.path.clone()));

    // One dashboard registry per process, mounted at the configured prefix
    let dashboards = Arc::new(DashboardRegistry::new(
        config.dashboard.mount_prefix.clone(),
        config.dashboard.stylesheets.clone(),
    ));

    // Create services (application layer)
    let strategies = StrategyService::new(dashboards.clone());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = Arc::new(AppState {
        config,
        dashboards,
        datasets,
        strategies,
        assets,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    println!("Starting delphos-web on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
