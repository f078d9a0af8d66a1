use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Store-wide totals
#[derive(Debug, Clone, FromQueryResult)]
pub struct SalesTotals {
    pub total_sales: f64,
    pub total_transactions: i64,
    pub total_customers: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct MonthlySalesRow {
    pub month: Option<String>,
    pub total_sales: f64,
    pub total_transactions: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductRevenueRow {
    pub product_name: Option<String>,
    pub total_sold: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CityRevenueRow {
    pub city: Option<String>,
    pub total_orders: i64,
    pub total_revenue: f64,
}

pub async fn get_sales_totals(db: &DatabaseConnection) -> Result<SalesTotals> {
    let sql = r#"
        SELECT
            CAST(COALESCE(SUM(total_amount), 0) AS REAL) AS total_sales,
            COUNT(*) AS total_transactions,
            COUNT(DISTINCT customer_id) AS total_customers
        FROM sales
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    SalesTotals::find_by_statement(stmt)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("sales totals query returned no rows"))
}

/// Sales grouped by calendar month ("YYYY-MM"), oldest first
pub async fn get_monthly_sales(db: &DatabaseConnection) -> Result<Vec<MonthlySalesRow>> {
    let sql = r#"
        SELECT
            strftime('%Y-%m', sale_date) AS month,
            CAST(COALESCE(SUM(total_amount), 0) AS REAL) AS total_sales,
            COUNT(*) AS total_transactions
        FROM sales
        GROUP BY strftime('%Y-%m', sale_date)
        ORDER BY month
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = MonthlySalesRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

/// Best-selling products by revenue
pub async fn get_top_products(db: &DatabaseConnection, limit: u32) -> Result<Vec<ProductRevenueRow>> {
    let sql = r#"
        SELECT
            p.product_name AS product_name,
            CAST(COALESCE(SUM(s.quantity), 0) AS INTEGER) AS total_sold,
            CAST(COALESCE(SUM(s.total_amount), 0) AS REAL) AS revenue
        FROM sales s
        JOIN products p ON s.product_id = p.product_id
        GROUP BY s.product_id, p.product_name
        ORDER BY revenue DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [i64::from(limit).into()]);
    let rows = ProductRevenueRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

/// Orders and revenue per customer city, highest revenue first
pub async fn get_sales_by_city(db: &DatabaseConnection) -> Result<Vec<CityRevenueRow>> {
    let sql = r#"
        SELECT
            c.city AS city,
            COUNT(s.sale_id) AS total_orders,
            CAST(COALESCE(SUM(s.total_amount), 0) AS REAL) AS total_revenue
        FROM sales s
        JOIN customers c ON s.customer_id = c.customer_id
        GROUP BY c.city
        ORDER BY total_revenue DESC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = CityRevenueRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
