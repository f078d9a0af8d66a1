use anyhow::Result;
use contracts::dashboards::d400_sales_overview::{
    CityRevenue, MonthlySalesPoint, ProductRevenue, SummaryMetrics,
};
use sea_orm::DatabaseConnection;

use super::repository;

pub const DEFAULT_TOP_PRODUCTS: u32 = 5;
pub const MAX_TOP_PRODUCTS: u32 = 100;

/// Totals for the summary cards. Amounts are truncated to whole Rupiah.
pub async fn get_summary(db: &DatabaseConnection) -> Result<SummaryMetrics> {
    let totals = repository::get_sales_totals(db).await?;

    let avg_order_value = if totals.total_transactions > 0 {
        (totals.total_sales / totals.total_transactions as f64).trunc()
    } else {
        0.0
    };

    Ok(SummaryMetrics {
        total_sales: totals.total_sales.trunc(),
        total_transactions: totals.total_transactions,
        total_customers: totals.total_customers,
        avg_order_value,
    })
}

pub async fn get_monthly_sales(db: &DatabaseConnection) -> Result<Vec<MonthlySalesPoint>> {
    let rows = repository::get_monthly_sales(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| MonthlySalesPoint {
            month: r.month.unwrap_or_default(),
            total_sales: r.total_sales,
            total_transactions: r.total_transactions,
        })
        .collect())
}

/// Top products by revenue; `limit` defaults to 5 and is clamped to 1..=100
pub async fn get_top_products(
    db: &DatabaseConnection,
    limit: Option<u32>,
) -> Result<Vec<ProductRevenue>> {
    let limit = effective_limit(limit);
    let rows = repository::get_top_products(db, limit).await?;
    Ok(rows
        .into_iter()
        .map(|r| ProductRevenue {
            product_name: r.product_name.unwrap_or_default(),
            revenue: r.revenue,
            total_sold: r.total_sold,
        })
        .collect())
}

pub async fn get_sales_by_city(db: &DatabaseConnection) -> Result<Vec<CityRevenue>> {
    let rows = repository::get_sales_by_city(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| CityRevenue {
            city: r.city.unwrap_or_default(),
            total_revenue: r.total_revenue,
            total_orders: r.total_orders,
        })
        .collect())
}

fn effective_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(DEFAULT_TOP_PRODUCTS)
        .clamp(1, MAX_TOP_PRODUCTS)
}
