use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Таблицы предметной области: (имя, DDL)
const SCHEMA: &[(&str, &str)] = &[
    (
        "customers",
        r#"
        CREATE TABLE customers (
            id INTEGER PRIMARY KEY NOT NULL,
            surname TEXT,
            name TEXT,
            patronymic TEXT,
            phone TEXT,
            CONSTRAINT mobile_phone UNIQUE (phone)
        );
    "#,
    ),
    (
        "services",
        r#"
        CREATE TABLE services (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT,
            price INTEGER
        );
    "#,
    ),
    (
        "supplies",
        r#"
        CREATE TABLE supplies (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT,
            price INTEGER
        );
    "#,
    ),
    (
        "record",
        r#"
        CREATE TABLE record (
            id INTEGER PRIMARY KEY NOT NULL,
            id_customers INTEGER NOT NULL,
            id_services INTEGER NOT NULL,
            date TIMESTAMP
        );
    "#,
    ),
    (
        "services_supplies",
        r#"
        CREATE TABLE services_supplies (
            id INTEGER PRIMARY KEY NOT NULL,
            id_services INTEGER NOT NULL,
            id_supplies INTEGER NOT NULL,
            material_consumption REAL,
            units_measurement TEXT
        );
    "#,
    ),
];

/// Подключение к базе по URL вида `sqlite://...` или `sqlite::memory:`
pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_string());
    options.sqlx_logging(false);
    // Каждое соединение с базой в памяти видит свою собственную базу
    if db_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    Ok(Database::connect(options).await?)
}

/// Создание недостающих таблиц (минимальный bootstrap схемы)
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        let exists = conn
            .query_all(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?;",
                [(*table).into()],
            ))
            .await?;

        if exists.is_empty() {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
                .await?;
        }
    }
    Ok(())
}

/// Строка подключения для файла SQLite
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
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
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Connecting to {}", db_url);

    let conn = connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
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

    #[tokio::test]
    async fn test_bootstrap_schema_is_repeatable() {
        let conn = connect("sqlite::memory:").await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name;".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["customers", "record", "services", "services_supplies", "supplies"]
        );
    }

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/lib/studio/app.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/studio/app.db?mode=rwc");
    }
}
