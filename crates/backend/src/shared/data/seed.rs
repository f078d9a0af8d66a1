//! Sample catalogue, customers and sales used for demos and tests

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait};

/// (product_id, product_name, category, price)
const PRODUCTS: &[(i64, &str, &str, f64)] = &[
    (1, "Laptop Gaming", "Electronics", 15_000_000.0),
    (2, "Mouse Wireless", "Electronics", 200_000.0),
    (3, "Keyboard Mechanical", "Electronics", 800_000.0),
    (4, "Monitor 24 inch", "Electronics", 2_500_000.0),
    (5, "Headset Gaming", "Electronics", 500_000.0),
];

/// (customer_id, customer_name, email, city)
const CUSTOMERS: &[(i64, &str, &str, &str)] = &[
    (1, "Ahmad Fauzi", "ahmad@email.com", "Jakarta"),
    (2, "Sari Dewi", "sari@email.com", "Surabaya"),
    (3, "Budi Santoso", "budi@email.com", "Bandung"),
    (4, "Lisa Permata", "lisa@email.com", "Jakarta"),
    (5, "Rudi Wijaya", "rudi@email.com", "Medan"),
];

/// (sale_id, product_id, customer_id, sale_date, quantity, total_amount)
const SALES: &[(i64, i64, i64, &str, i64, f64)] = &[
    (1, 1, 1, "2024-01-15", 1, 15_000_000.0),
    (2, 2, 2, "2024-01-16", 2, 400_000.0),
    (3, 3, 3, "2024-01-17", 1, 800_000.0),
    (4, 4, 4, "2024-01-18", 1, 2_500_000.0),
    (5, 5, 5, "2024-01-19", 3, 1_500_000.0),
    (6, 1, 2, "2024-02-01", 1, 15_000_000.0),
    (7, 2, 1, "2024-02-05", 1, 200_000.0),
    (8, 3, 3, "2024-02-10", 2, 1_600_000.0),
];

/// Upsert the sample rows. Safe to run on every startup.
pub async fn seed_sample_data(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let txn = conn.begin().await?;

    for (id, name, category, price) in PRODUCTS {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO products (product_id, product_name, category, price) VALUES (?, ?, ?, ?)",
            [(*id).into(), (*name).into(), (*category).into(), (*price).into()],
        ))
        .await?;
    }

    for (id, name, email, city) in CUSTOMERS {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO customers (customer_id, customer_name, email, city) VALUES (?, ?, ?, ?)",
            [(*id).into(), (*name).into(), (*email).into(), (*city).into()],
        ))
        .await?;
    }

    for (id, product_id, customer_id, sale_date, quantity, total_amount) in SALES {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sales (sale_id, product_id, customer_id, sale_date, quantity, total_amount) VALUES (?, ?, ?, ?, ?, ?)",
            [
                (*id).into(),
                (*product_id).into(),
                (*customer_id).into(),
                (*sale_date).into(),
                (*quantity).into(),
                (*total_amount).into(),
            ],
        ))
        .await?;
    }

    txn.commit().await?;

    tracing::info!(
        "Sample data seeded: {} products, {} customers, {} sales",
        PRODUCTS.len(),
        CUSTOMERS.len(),
        SALES.len()
    );
    Ok(())
}
