//! SQLite implementation of [`Table`].

use std::fmt;

use async_trait::async_trait;
use tracing::info;

use super::SqliteDbSupport;
use crate::dbsupport::{DbSupport, Table};
use crate::error::Result;

/// A table inside an attached SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteTable<'a> {
    support: &'a SqliteDbSupport<'a>,
    schema: String,
    name: String,
}

impl<'a> SqliteTable<'a> {
    pub(crate) fn new(support: &'a SqliteDbSupport<'a>, schema: &str, name: &str) -> Self {
        Self {
            support,
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl Table for SqliteTable<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema_name(&self) -> &str {
        &self.schema
    }

    async fn exists(&self) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {}.sqlite_master WHERE type = 'table' AND tbl_name = ?)",
            self.support.quote(&self.schema)
        );
        self.support
            .runner()
            .query_for_boolean(&sql, &[self.name.as_str()])
            .await
            .map_err(|e| e.with_message(format!("Unable to check whether table {self} exists")))
    }

    async fn drop_table(&self) -> Result<()> {
        info!(table = %self, "Dropping table");
        self.support
            .runner()
            .execute(&format!("DROP TABLE {self}"))
            .await
            .map_err(|e| e.with_message(format!("Unable to drop table {self}")))
    }
}

impl fmt::Display for SqliteTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.support.quote_qualified(&[self.schema.as_str(), self.name.as_str()]))
    }
}
