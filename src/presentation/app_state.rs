// Application state for HTTP handlers
use crate::application::dashboard_registry::DashboardRegistry;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::strategy_service::StrategyService;
use crate::infrastructure::assets::AssetBundle;
use crate::infrastructure::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub dashboards: Arc<DashboardRegistry>,
    pub datasets: Arc<dyn DatasetRepository>,
    pub strategies: StrategyService,
    pub assets: AssetBundle,
}
