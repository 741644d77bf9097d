use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D100 Financial Report
        .route(
            "/api/d100/financial_report",
            get(handlers::d100_financial_report::get_financial_report),
        )
}
