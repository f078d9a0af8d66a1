use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d400_sales_overview::{
    CityRevenue, MonthlySalesPoint, ProductRevenue, SummaryMetrics, TopProductsQuery,
};
use sea_orm::DatabaseConnection;

use crate::dashboards::d400_sales_overview::service;
use crate::shared::data::db::get_connection;

fn connection() -> Result<&'static DatabaseConnection, StatusCode> {
    get_connection().map_err(|e| {
        tracing::error!("D400 Dashboard: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/summary
pub async fn get_summary() -> Result<Json<SummaryMetrics>, StatusCode> {
    match service::get_summary(connection()?).await {
        Ok(summary) => {
            tracing::info!(
                "D400 Dashboard: Summary with {} transactions",
                summary.total_transactions
            );
            Ok(Json(summary))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get summary: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/monthly-sales
pub async fn get_monthly_sales() -> Result<Json<Vec<MonthlySalesPoint>>, StatusCode> {
    match service::get_monthly_sales(connection()?).await {
        Ok(points) => {
            tracing::info!("D400 Dashboard: Returning {} months", points.len());
            Ok(Json(points))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get monthly sales: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/top-products?limit=5
pub async fn get_top_products(
    Query(query): Query<TopProductsQuery>,
) -> Result<Json<Vec<ProductRevenue>>, StatusCode> {
    match service::get_top_products(connection()?, query.limit).await {
        Ok(products) => {
            tracing::info!("D400 Dashboard: Returning {} top products", products.len());
            Ok(Json(products))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get top products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/sales-by-city
pub async fn get_sales_by_city() -> Result<Json<Vec<CityRevenue>>, StatusCode> {
    match service::get_sales_by_city(connection()?).await {
        Ok(cities) => {
            tracing::info!("D400 Dashboard: Returning {} cities", cities.len());
            Ok(Json(cities))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get sales by city: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
