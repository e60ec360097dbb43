// Strategies use case - assembles the sample catalog and publishes its charts
use crate::application::dashboard_registry::DashboardRegistry;
use crate::domain::chart::{ChartKind, ChartSpec};
use crate::domain::layout::LayoutNode;
use crate::domain::strategy::{Hyperparameter, ModelInfo, StrategyResult};
use crate::domain::table::DataTable;
use std::sync::Arc;

/// Everything the strategies template needs, keyed by name in the handler.
#[derive(Debug, Clone)]
pub struct StrategiesContext {
    pub models: Vec<ModelInfo>,
    pub hyperparameters: Vec<Hyperparameter>,
    pub dataset_sample: DataTable,
    pub results_headers: Vec<String>,
    pub results: Vec<StrategyResult>,
    pub model_insights: String,
}

#[derive(Clone)]
pub struct StrategyService {
    dashboards: Arc<DashboardRegistry>,
}

impl StrategyService {
    pub fn new(dashboards: Arc<DashboardRegistry>) -> Self {
        Self { dashboards }
    }

    /// Assemble the sample strategies context and replace the mounted
    /// dashboard's layout with the freshly built chart set.
    pub fn strategies_page(&self) -> StrategiesContext {
        let models = vec![
            ModelInfo::new(
                "model1".to_string(),
                "Model 1".to_string(),
                "Alpha Predictor".to_string(),
            ),
            ModelInfo::new(
                "model2".to_string(),
                "Model 2".to_string(),
                "Volatility Estimator".to_string(),
            ),
        ];

        let hyperparameters = vec![Hyperparameter::new("learning_rate".to_string(), 0.01)];

        let dataset_sample = DataTable::new(
            vec!["Date".to_string(), "Price".to_string(), "Volume".to_string()],
            vec![
                vec![
                    "2023-08-01".to_string(),
                    "100".to_string(),
                    "5000".to_string(),
                ],
                vec![
                    "2023-08-02".to_string(),
                    "105".to_string(),
                    "5500".to_string(),
                ],
            ],
        );

        let results_headers = vec!["Strategy".to_string(), "Return".to_string()];
        let results = vec![
            StrategyResult::new("Long-Short".to_string(), "5%".to_string()),
            StrategyResult::new("Momentum".to_string(), "3%".to_string()),
        ];

        let charts = vec![
            ChartSpec::new(
                vec![1.0, 2.0, 3.0],
                vec![4.0, 1.0, 2.0],
                ChartKind::Bar,
                "Plot 1".to_string(),
            ),
            ChartSpec::new(
                vec![1.0, 2.0, 3.0],
                vec![2.0, 4.0, 5.0],
                ChartKind::Bar,
                "Plot 2".to_string(),
            ),
        ];
        self.dashboards.set_layout(LayoutNode::Container(
            charts.into_iter().map(LayoutNode::Chart).collect(),
        ));

        StrategiesContext {
            models,
            hyperparameters,
            dataset_sample,
            results_headers,
            results,
            model_insights: "Sample insights about the selected model...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (StrategyService, Arc<DashboardRegistry>) {
        let dashboards = Arc::new(DashboardRegistry::new("/dashapp".to_string(), Vec::new()));
        (StrategyService::new(dashboards.clone()), dashboards)
    }

    #[test]
    fn test_context_contains_exactly_the_sample_models() {
        let (service, _) = service();
        let context = service.strategies_page();
        let ids: Vec<&str> = context.models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["model1", "model2"]);
    }

    #[test]
    fn test_dataset_sample_shape() {
        let (service, _) = service();
        let context = service.strategies_page();
        assert_eq!(context.dataset_sample.columns, ["Date", "Price", "Volume"]);
        assert_eq!(context.dataset_sample.row_count(), 2);
    }

    #[test]
    fn test_page_assembly_publishes_the_chart_layout() {
        let (service, dashboards) = service();
        service.strategies_page();
        let layout = dashboards.layout();
        let names: Vec<&str> = layout.charts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Plot 1", "Plot 2"]);
    }
}
