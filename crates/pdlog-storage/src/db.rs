//! Database operations

use std::path::PathBuf;

use futures_util::{Stream, StreamExt};
use pdlog_core::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row as _};

use crate::{NewUser, Result, StorageError};

const MIGRATION: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    ssn TEXT,
    password TEXT,
    ip TEXT,
    last_login TEXT,
    user_agent TEXT
)
"#;

const SELECT_USERS: &str = "SELECT * FROM users";

/// Main storage interface
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (or create) the database and run migrations.
    /// `None` uses the per-user data directory.
    pub async fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let path = match db_path {
            Some(path) => path,
            None => Self::default_db_path()?,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(MIGRATION).execute(&pool).await?;
        tracing::debug!(path = %path.display(), "Opened user database");

        Ok(Self { pool })
    }

    pub fn default_db_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "pdlog", "pdlog")
            .map(|dirs| dirs.data_dir().join("personal_data.db"))
            .ok_or_else(|| anyhow::anyhow!("Cannot determine a data directory").into())
    }

    pub async fn insert_user(&self, user: &NewUser) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (name, email, phone, ssn, password, ip, last_login, user_agent)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.ssn)
        .bind(&user.password)
        .bind(&user.ip)
        .bind(&user.last_login)
        .bind(&user.user_agent)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_users(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Every `users` row, fetched one at a time, columns in table order
    pub fn stream_users(&self) -> impl Stream<Item = Result<Row>> + Unpin + '_ {
        sqlx::query(SELECT_USERS)
            .fetch(&self.pool)
            .map(|row| decode_row(&row?))
    }
}

/// TEXT, INTEGER and REAL values become strings; NULL becomes empty
fn decode_row(row: &SqliteRow) -> Result<Row> {
    let mut decoded = Row::new();

    for column in row.columns() {
        let index = column.ordinal();
        let value = if let Ok(text) = row.try_get::<Option<String>, _>(index) {
            text
        } else if let Ok(int) = row.try_get::<Option<i64>, _>(index) {
            int.map(|n| n.to_string())
        } else if let Ok(real) = row.try_get::<Option<f64>, _>(index) {
            real.map(|n| n.to_string())
        } else {
            return Err(StorageError::Decode(column.name().to_string()));
        };

        decoded.push(column.name(), value.unwrap_or_default());
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::TryStreamExt;

    async fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(Some(dir.path().join("users.db"))).await.unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn test_insert_and_count() {
        let (_dir, storage) = temp_storage().await;
        assert_eq!(storage.count_users().await.unwrap(), 0);

        storage
            .insert_user(&NewUser::new("Bob", "bob@x.com"))
            .await
            .unwrap();
        storage
            .insert_user(&NewUser::new("Ann", "ann@x.com"))
            .await
            .unwrap();

        assert_eq!(storage.count_users().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_stream_preserves_column_order() {
        let (_dir, storage) = temp_storage().await;
        let user = NewUser {
            phone: Some("555-0100".to_string()),
            ssn: Some("123-45-6789".to_string()),
            ip: Some("10.0.0.1".to_string()),
            ..NewUser::new("Bob", "bob@x.com")
        };
        storage.insert_user(&user).await.unwrap();

        let rows: Vec<Row> = storage.stream_users().try_collect().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].columns().collect::<Vec<_>>(),
            vec!["name", "email", "phone", "ssn", "password", "ip", "last_login", "user_agent"]
        );
        assert_eq!(rows[0].get("ssn"), Some("123-45-6789"));
        assert_eq!(rows[0].get("password"), Some(""));
    }

    #[tokio::test]
    async fn test_numeric_columns_decode() {
        let (_dir, storage) = temp_storage().await;
        sqlx::query("ALTER TABLE users ADD COLUMN visits INTEGER")
            .execute(&storage.pool)
            .await
            .unwrap();
        sqlx::query("ALTER TABLE users ADD COLUMN score REAL")
            .execute(&storage.pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO users (name, email, visits, score) VALUES ('Ann', 'a@x.com', 3, 1.5)")
            .execute(&storage.pool)
            .await
            .unwrap();

        let mut rows = storage.stream_users();
        let row = rows.try_next().await.unwrap().unwrap();

        assert_eq!(row.get("visits"), Some("3"));
        assert_eq!(row.get("score"), Some("1.5"));
        assert!(rows.try_next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.db");

        let storage = Storage::new(Some(path.clone())).await.unwrap();
        storage
            .insert_user(&NewUser::new("Bob", "bob@x.com"))
            .await
            .unwrap();
        drop(storage);

        let reopened = Storage::new(Some(path)).await.unwrap();
        assert_eq!(reopened.count_users().await.unwrap(), 1);
    }
}
