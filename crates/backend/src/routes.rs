use axum::{routing::get, Router};
use contracts::dashboards::d400_sales_overview::{
    API_PREFIX, MONTHLY_SALES_PATH, SALES_BY_CITY_PATH, SUMMARY_PATH, TOP_PRODUCTS_PATH,
};
use tower_http::services::ServeDir;

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 SALES OVERVIEW
        // ========================================
        .route(
            &format!("{API_PREFIX}{SUMMARY_PATH}"),
            get(handlers::d400_sales_overview::get_summary),
        )
        .route(
            &format!("{API_PREFIX}{MONTHLY_SALES_PATH}"),
            get(handlers::d400_sales_overview::get_monthly_sales),
        )
        .route(
            &format!("{API_PREFIX}{TOP_PRODUCTS_PATH}"),
            get(handlers::d400_sales_overview::get_top_products),
        )
        .route(
            &format!("{API_PREFIX}{SALES_BY_CITY_PATH}"),
            get(handlers::d400_sales_overview::get_sales_by_city),
        )
        // Built frontend (trunk build --release)
        .fallback_service(ServeDir::new("dist"))
}
