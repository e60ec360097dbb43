// Presentation layer - HTTP routes, locale resolution, templates
pub mod app_state;
pub mod dashboard_app;
pub mod handlers;
pub mod locale;
pub mod templates;

use crate::presentation::app_state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble the full route table, with the dashboard sub-application nested
/// at the registry's mount prefix.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/dxlib", get(handlers::about_dxlib))
        .route("/strategies", get(handlers::strategies))
        .route("/static/bundle.css", get(handlers::bundle_css))
        .nest(state.dashboards.mount_prefix(), dashboard_app::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
