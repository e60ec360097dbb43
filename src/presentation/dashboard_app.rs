// Mounted dashboard sub-application - serves the registry's current layout
use crate::domain::layout::LayoutNode;
use crate::domain::table::DataTable;
use crate::infrastructure::figure_mapper::{chart_to_figure, layout_to_figures};
use crate::presentation::app_state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::fmt::Write;
use std::sync::Arc;
use tracing::error;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(render_dashboard))
        .route("/layout.json", get(layout_json))
        .route("/data", get(dataset_json))
}

/// Render the current layout as a standalone page. No snapshotting: the
/// render observes whichever layout is current at this moment.
async fn render_dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let layout = state.dashboards.layout();
    Html(dashboard_page(state.dashboards.stylesheets(), &layout))
}

/// The current layout as Plotly figure JSON.
async fn layout_json(State(state): State<Arc<AppState>>) -> Json<Vec<Value>> {
    Json(layout_to_figures(&state.dashboards.layout()))
}

/// The backing dataset as JSON, read fresh from disk. A load failure
/// surfaces as a server error.
async fn dataset_json(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataTable>, (StatusCode, String)> {
    match state.datasets.load_table().await {
        Ok(table) => {
            tracing::debug!(rows = table.row_count(), "dataset loaded");
            Ok(Json(table))
        }
        Err(err) => {
            error!(error = %err, "dataset load failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}

fn dashboard_page(stylesheets: &[String], layout: &LayoutNode) -> String {
    let links: String = stylesheets
        .iter()
        .map(|href| format!("  <link rel=\"stylesheet\" href=\"{href}\">\n"))
        .collect();

    let mut body = String::new();
    let mut scripts = String::new();
    let mut counter = 0;
    render_node(layout, &mut counter, &mut body, &mut scripts);

    format!(
        "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Dashboards - Delphos</title>\n{links}  <script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\"></script>\n</head>\n<body>\n{body}<script>\n{scripts}</script>\n</body>\n</html>\n"
    )
}

fn render_node(node: &LayoutNode, counter: &mut usize, body: &mut String, scripts: &mut String) {
    match node {
        LayoutNode::Container(children) => {
            body.push_str("<div class=\"layout-container\">\n");
            for child in children {
                render_node(child, counter, body, scripts);
            }
            body.push_str("</div>\n");
        }
        LayoutNode::Chart(spec) => {
            let id = format!("chart-{}", *counter);
            *counter += 1;
            let _ = writeln!(body, "<div id=\"{id}\" class=\"chart\"></div>");
            let _ = writeln!(scripts, "Plotly.newPlot(\"{id}\", {});", chart_to_figure(spec));
        }
    }
}
