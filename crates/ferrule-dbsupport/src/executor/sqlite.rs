//! sqlx-backed executor for SQLite.

use async_trait::async_trait;
use sqlx::sqlite::{Sqlite, SqlitePool};

use super::QueryExecutor;
use crate::error::ExecutionError;

/// [`QueryExecutor`] over a sqlx SQLite pool.
///
/// Use a pool with a single connection when the adapter relies on
/// connection-scoped state such as attached databases.
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Creates a new executor.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for SqliteExecutor {
    async fn query_for_string(
        &self,
        sql: &str,
        params: &[&str],
    ) -> Result<Option<String>, ExecutionError> {
        let mut query = sqlx::query_scalar::<Sqlite, Option<String>>(sql);
        for param in params {
            query = query.bind(*param);
        }
        Ok(query.fetch_optional(&self.pool).await?.flatten())
    }

    async fn query_for_string_list(
        &self,
        sql: &str,
        params: &[&str],
    ) -> Result<Vec<String>, ExecutionError> {
        let mut query = sqlx::query_scalar::<Sqlite, String>(sql);
        for param in params {
            query = query.bind(*param);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn query_for_boolean(&self, sql: &str, params: &[&str]) -> Result<bool, ExecutionError> {
        let mut query = sqlx::query_scalar::<Sqlite, Option<i64>>(sql);
        for param in params {
            query = query.bind(*param);
        }
        let value = query.fetch_optional(&self.pool).await?.flatten();
        Ok(value.is_some_and(|v| v != 0))
    }

    async fn execute(&self, sql: &str, params: &[&str]) -> Result<(), ExecutionError> {
        let mut query = sqlx::query::<Sqlite>(sql);
        for param in params {
            query = query.bind(*param);
        }
        query.execute(&self.pool).await?;
        Ok(())
    }
}
