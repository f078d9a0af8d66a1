use serde::{Deserialize, Serialize};

/// Prefix under which the sales overview endpoints are mounted
pub const API_PREFIX: &str = "/api";

pub const SUMMARY_PATH: &str = "/summary";
pub const MONTHLY_SALES_PATH: &str = "/monthly-sales";
pub const TOP_PRODUCTS_PATH: &str = "/top-products";
pub const SALES_BY_CITY_PATH: &str = "/sales-by-city";

/// Aggregate totals shown in the summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_sales: f64,
    pub total_transactions: i64,
    pub total_customers: i64,
    pub avg_order_value: f64,
}

/// One month of sales. `month` is a display label, usually "YYYY-MM"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalesPoint {
    pub month: String,
    pub total_sales: f64,
    #[serde(default)]
    pub total_transactions: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub product_name: String,
    pub revenue: f64,
    /// Units sold
    #[serde(default)]
    pub total_sold: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRevenue {
    pub city: String,
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: i64,
}

/// Query parameters for the top products endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopProductsQuery {
    pub limit: Option<u32>,
}
