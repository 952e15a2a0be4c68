#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use ferrule_dbsupport::{ExecutionError, QueryExecutor, SqliteExecutor};
use sqlx::sqlite::SqlitePoolOptions;

/// A statement seen by [`MockExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub sql: String,
    pub params: Vec<String>,
}

/// Executor answering from scripted responses.
///
/// Responses and failures are keyed by a SQL fragment; the first entry whose
/// fragment occurs in the statement wins. Unscripted queries return `None`,
/// an empty list or `false`. Every call is recorded, including failing ones.
#[derive(Default)]
pub struct MockExecutor {
    strings: Vec<(String, Option<String>)>,
    lists: Vec<(String, Vec<String>)>,
    booleans: Vec<(String, bool)>,
    failures: Vec<String>,
    recorded: Mutex<Vec<Recorded>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, fragment: &str, value: Option<&str>) -> Self {
        self.strings
            .push((fragment.to_string(), value.map(ToString::to_string)));
        self
    }

    pub fn with_list(mut self, fragment: &str, rows: &[&str]) -> Self {
        self.lists.push((
            fragment.to_string(),
            rows.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    pub fn with_boolean(mut self, fragment: &str, value: bool) -> Self {
        self.booleans.push((fragment.to_string(), value));
        self
    }

    pub fn failing_on(mut self, fragment: &str) -> Self {
        self.failures.push(fragment.to_string());
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn statements(&self) -> Vec<String> {
        self.recorded().into_iter().map(|r| r.sql).collect()
    }

    fn record(&self, sql: &str, params: &[&str]) -> Result<(), ExecutionError> {
        self.recorded.lock().unwrap().push(Recorded {
            sql: sql.to_string(),
            params: params.iter().map(ToString::to_string).collect(),
        });
        if self.failures.iter().any(|f| sql.contains(f.as_str())) {
            return Err(ExecutionError::Other(format!("simulated failure: {sql}")));
        }
        Ok(())
    }
}

fn lookup<T: Clone>(entries: &[(String, T)], sql: &str) -> Option<T> {
    entries
        .iter()
        .find(|(fragment, _)| sql.contains(fragment.as_str()))
        .map(|(_, value)| value.clone())
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn query_for_string(
        &self,
        sql: &str,
        params: &[&str],
    ) -> Result<Option<String>, ExecutionError> {
        self.record(sql, params)?;
        Ok(lookup(&self.strings, sql).flatten())
    }

    async fn query_for_string_list(
        &self,
        sql: &str,
        params: &[&str],
    ) -> Result<Vec<String>, ExecutionError> {
        self.record(sql, params)?;
        Ok(lookup(&self.lists, sql).unwrap_or_default())
    }

    async fn query_for_boolean(&self, sql: &str, params: &[&str]) -> Result<bool, ExecutionError> {
        self.record(sql, params)?;
        Ok(lookup(&self.booleans, sql).unwrap_or(false))
    }

    async fn execute(&self, sql: &str, params: &[&str]) -> Result<(), ExecutionError> {
        self.record(sql, params)
    }
}

/// Runs statements against an executor, panicking on failure.
pub async fn run_all(executor: &SqliteExecutor, statements: &[&str]) {
    for sql in statements {
        sqlx::query(sql)
            .execute(executor.pool())
            .await
            .unwrap_or_else(|e| panic!("Failed to run {sql}: {e}"));
    }
}

/// Single-connection in-memory SQLite database.
pub async fn sqlite_executor() -> SqliteExecutor {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");
    SqliteExecutor::new(pool)
}

/// In-memory SQLite database shaped like the parts of the Exasol catalog the
/// adapter reads: `DUAL` plus the `SYS.EXA_*` views as plain tables.
///
/// The connected user is `MIGRATOR`, the open schema `APP`. Schema `APP`
/// exists and owns tables `A` and `B`; schema `EMPTY` exists with no objects.
pub async fn exasol_catalog() -> SqliteExecutor {
    let executor = sqlite_executor().await;
    run_all(
        &executor,
        &[
            "ATTACH DATABASE ':memory:' AS SYS",
            "CREATE TABLE DUAL (USER TEXT, CURRENT_SCHEMA TEXT)",
            "INSERT INTO DUAL VALUES ('MIGRATOR', 'APP')",
            "CREATE TABLE SYS.EXA_SCHEMAS (SCHEMA_NAME TEXT)",
            "CREATE TABLE SYS.EXA_ALL_OBJECTS (ROOT_NAME TEXT, OBJECT_NAME TEXT)",
            "CREATE TABLE SYS.EXA_USER_TABLES (TABLE_SCHEMA TEXT, TABLE_NAME TEXT)",
            "CREATE TABLE SYS.EXA_ALL_TABLES (TABLE_SCHEMA TEXT, TABLE_NAME TEXT)",
            "INSERT INTO SYS.EXA_SCHEMAS VALUES ('APP'), ('EMPTY')",
            "INSERT INTO SYS.EXA_ALL_OBJECTS VALUES ('APP', 'A'), ('APP', 'B')",
            "INSERT INTO SYS.EXA_USER_TABLES VALUES ('APP', 'A'), ('APP', 'B')",
            "INSERT INTO SYS.EXA_ALL_TABLES VALUES ('APP', 'A'), ('APP', 'B')",
            "CREATE TABLE ITEMS (ID INTEGER, KIND TEXT)",
            "INSERT INTO ITEMS VALUES (1, 'single'), (2, 'many'), (3, 'many'), (4, 'many')",
        ],
    )
    .await;
    executor
}
