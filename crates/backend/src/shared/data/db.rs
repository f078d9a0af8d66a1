use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

use super::seed;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables of the sales database, created if missing
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS products (
        product_id INTEGER PRIMARY KEY,
        product_name TEXT,
        category TEXT,
        price REAL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        customer_id INTEGER PRIMARY KEY,
        customer_name TEXT,
        email TEXT,
        city TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        sale_id INTEGER PRIMARY KEY,
        product_id INTEGER,
        customer_id INTEGER,
        sale_date DATE,
        quantity INTEGER,
        total_amount REAL,
        FOREIGN KEY (product_id) REFERENCES products(product_id),
        FOREIGN KEY (customer_id) REFERENCES customers(customer_id)
    );
    "#,
];

pub async fn initialize_database(db_file: &Path, seed_sample_data: bool) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file);
    tracing::info!("Opening sales database at {}", db_file.display());
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;
    if seed_sample_data {
        seed::seed_sample_data(&conn).await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Build a `sqlite://` URL that creates the file when missing
pub fn sqlite_url(db_file: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for ddl in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    tracing::info!("Sales schema is up to date");
    Ok(())
}

#[cfg(test)]
thread_local! {
    static TEST_CONN: std::cell::Cell<Option<&'static DatabaseConnection>> =
        std::cell::Cell::new(None);
}

/// Serve `conn` from [`get_connection`] on the current test thread
#[cfg(test)]
pub fn use_test_connection(conn: DatabaseConnection) {
    let conn: &'static DatabaseConnection = Box::leak(Box::new(conn));
    TEST_CONN.with(|c| c.set(Some(conn)));
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    #[cfg(test)]
    {
        if let Some(conn) = TEST_CONN.with(|c| c.get()) {
            return Ok(conn);
        }
    }
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

/// Fresh in-memory database with the schema and sample data
#[cfg(test)]
pub async fn open_in_memory(seed_sample_data: bool) -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    if seed_sample_data {
        seed::seed_sample_data(&conn).await.unwrap();
    }
    conn
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::FromQueryResult;

    #[derive(FromQueryResult)]
    struct TableName {
        name: String,
    }

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            sqlite_url(Path::new("/tmp/db/sales.db")),
            "sqlite:///tmp/db/sales.db?mode=rwc"
        );
        assert_eq!(
            sqlite_url(Path::new("C:\\data\\sales.db")),
            "sqlite:///C:/data/sales.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = open_in_memory(false).await;
        bootstrap_schema(&conn).await.unwrap();

        let tables = TableName::find_by_statement(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name".to_string(),
        ))
        .all(&conn)
        .await
        .unwrap();
        let names: Vec<String> = tables.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["customers", "products", "sales"]);
    }
}
