// HTTP request handlers for the page routes
use crate::presentation::app_state::AppState;
use crate::presentation::locale::{Locale, translate};
use crate::presentation::templates::{
    self, hyperparameters_fragment, model_cards_fragment, render_template, table_fragment,
};
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use std::collections::HashMap;
use std::sync::Arc;

const INDEX_TITLE: &str = "Plataforma - Delphos";
const DXLIB_TITLE: &str = "dxlib - Delphos";
const DESCRIPTION: &str = "Visualização por meio de dashboards, além de deploy e monitoramento de estratégias em tempo real.";

/// Landing page
pub async fn index(locale: Locale) -> Html<String> {
    Html(render_page(templates::INDEX_TEMPLATE, &locale, INDEX_TITLE))
}

/// dxlib readme
pub async fn about_dxlib(locale: Locale) -> Html<String> {
    Html(render_page(templates::DXLIB_TEMPLATE, &locale, DXLIB_TITLE))
}

fn render_page(template: &str, locale: &Locale, title: &str) -> String {
    let mut vars = HashMap::new();
    vars.insert("lang".to_string(), locale.code().to_string());
    vars.insert("title".to_string(), translate(locale, title));
    vars.insert("description".to_string(), translate(locale, DESCRIPTION));
    render_template(template, &vars)
}

/// Strategies page - assembles the sample catalog, publishes its charts to
/// the mounted dashboard, then renders the page around it.
pub async fn strategies(State(state): State<Arc<AppState>>, locale: Locale) -> Html<String> {
    let context = state.strategies.strategies_page();

    let results_rows: Vec<Vec<String>> = context
        .results
        .iter()
        .map(|result| vec![result.strategy.clone(), result.return_pct.clone()])
        .collect();

    let mut vars = HashMap::new();
    vars.insert("lang".to_string(), locale.code().to_string());
    vars.insert("models".to_string(), model_cards_fragment(&context.models));
    vars.insert(
        "hyperparameters".to_string(),
        hyperparameters_fragment(&context.hyperparameters),
    );
    vars.insert(
        "dataset_table".to_string(),
        table_fragment(&context.dataset_sample.columns, &context.dataset_sample.rows),
    );
    vars.insert(
        "results_table".to_string(),
        table_fragment(&context.results_headers, &results_rows),
    );
    vars.insert("model_insights".to_string(), context.model_insights);
    vars.insert(
        "dashboard_src".to_string(),
        state.dashboards.mount_prefix().to_string(),
    );

    Html(render_template(templates::STRATEGIES_TEMPLATE, &vars))
}

/// Compiled stylesheet bundle
pub async fn bundle_css(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        state.assets.css().to_string(),
    )
}
