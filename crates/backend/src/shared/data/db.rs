use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Table bootstrap, one statement per aggregate table
const SCHEMA: [(&str, &str); 5] = [
    (
        "a001_project",
        r#"
        CREATE TABLE IF NOT EXISTS a001_project (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            project_type TEXT NOT NULL,
            size TEXT NOT NULL,
            state TEXT NOT NULL,
            city TEXT NOT NULL,
            volume INTEGER NOT NULL,
            status TEXT NOT NULL,
            timeline_json TEXT NOT NULL,
            origin TEXT NOT NULL DEFAULT 'self',
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_material",
        r#"
        CREATE TABLE IF NOT EXISTS a002_material (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL UNIQUE,
            quantity REAL NOT NULL,
            unit TEXT NOT NULL,
            cost INTEGER NOT NULL,
            category TEXT NOT NULL
        );
        "#,
    ),
    (
        "a003_vendor",
        r#"
        CREATE TABLE IF NOT EXISTS a003_vendor (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            website TEXT,
            location TEXT NOT NULL,
            contact TEXT,
            email TEXT,
            materials_json TEXT NOT NULL DEFAULT '[]',
            rating REAL,
            rating_count INTEGER,
            item_name TEXT,
            item_price TEXT,
            item_unit TEXT,
            gst_verified INTEGER NOT NULL DEFAULT 0,
            trustseal_verified INTEGER NOT NULL DEFAULT 0,
            member_since TEXT,
            payment_status TEXT,
            delivery_status TEXT,
            notes TEXT,
            origin TEXT NOT NULL DEFAULT 'self',
            updated_at TEXT
        );
        "#,
    ),
    (
        "a004_material_procurement",
        r#"
        CREATE TABLE IF NOT EXISTS a004_material_procurement (
            material TEXT PRIMARY KEY NOT NULL,
            vendor_id INTEGER NOT NULL,
            finalized_at TEXT NOT NULL,
            payment_status TEXT NOT NULL,
            delivery_date TEXT,
            delivery_status TEXT NOT NULL,
            agreement_status TEXT NOT NULL,
            total_amount INTEGER NOT NULL,
            payment_made INTEGER NOT NULL DEFAULT 0,
            payment_due_date TEXT,
            notes TEXT NOT NULL DEFAULT '',
            delivery_logs_json TEXT NOT NULL DEFAULT '[]',
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_procurement_item",
        r#"
        CREATE TABLE IF NOT EXISTS a005_procurement_item (
            id INTEGER PRIMARY KEY NOT NULL,
            material TEXT NOT NULL,
            order_by TEXT NOT NULL,
            delivery_start TEXT NOT NULL,
            delivery_end TEXT NOT NULL,
            status TEXT NOT NULL,
            vendor TEXT NOT NULL
        );
        "#,
    ),
];

/// Builds a sqlite URL, creating the parent directory of the file
fn database_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let db_url = database_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (table, sql) in SCHEMA {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create table {}: {}", table, e))?;
    }
    tracing::info!("Schema ready ({} tables)", SCHEMA.len());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database is already initialized"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_absolute_with_create_mode() {
        let dir = std::env::temp_dir().join("smart_buy_db_url_test");
        let url = database_url(&dir.join("app.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("app.db?mode=rwc"));
        assert!(!url.contains('\\'));
    }

    #[test]
    fn every_table_is_named_after_its_aggregate() {
        for (table, sql) in SCHEMA {
            assert!(sql.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)));
        }
    }
}
