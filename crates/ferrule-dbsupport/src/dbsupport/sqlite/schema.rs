//! SQLite implementation of [`Schema`].

use std::fmt;

use async_trait::async_trait;
use tracing::info;

use super::{SqliteDbSupport, SqliteTable};
use crate::dbsupport::{DbSupport, Schema, Table};
use crate::error::Result;

/// Tables maintained by SQLite or Android rather than by migrations.
const INTERNAL_TABLES: &[&str] = &["android_metadata", "sqlite_sequence"];

/// An attached SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteSchema<'a> {
    support: &'a SqliteDbSupport<'a>,
    name: String,
}

impl<'a> SqliteSchema<'a> {
    pub(crate) fn new(support: &'a SqliteDbSupport<'a>, name: &str) -> Self {
        Self {
            support,
            name: name.to_string(),
        }
    }

    /// Lists the tables of the schema with their concrete type.
    pub async fn sqlite_tables(&self) -> Result<Vec<SqliteTable<'a>>> {
        let names = self
            .support
            .runner()
            .query_for_string_list(
                &format!("SELECT tbl_name FROM {self}.sqlite_master WHERE type = 'table'"),
                &[],
            )
            .await
            .map_err(|e| e.with_message(format!("Unable to retrieve all tables in schema {self}")))?;

        Ok(names
            .into_iter()
            .filter(|name| !INTERNAL_TABLES.contains(&name.as_str()))
            .map(|name| SqliteTable::new(self.support, &self.name, &name))
            .collect())
    }

    async fn drop_views(&self) -> Result<()> {
        let runner = self.support.runner();
        let views = runner
            .query_for_string_list(
                &format!("SELECT tbl_name FROM {self}.sqlite_master WHERE type = 'view'"),
                &[],
            )
            .await?;
        for view in views {
            let quoted = self.support.quote_qualified(&[self.name.as_str(), view.as_str()]);
            runner.execute(&format!("DROP VIEW {quoted}")).await?;
        }
        Ok(())
    }

    /// Orders tables so that each table comes before the tables it references.
    ///
    /// Dropping a referenced table deletes its rows first, which fails while a
    /// referencing table still holds rows. Tables in a reference cycle keep
    /// their catalog order.
    async fn in_drop_order(&self, tables: Vec<SqliteTable<'a>>) -> Result<Vec<SqliteTable<'a>>> {
        let runner = self.support.runner();
        let mut pending = Vec::with_capacity(tables.len());
        for table in tables {
            let referenced = runner
                .query_for_string_list(
                    "SELECT DISTINCT \"table\" FROM pragma_foreign_key_list(?, ?)",
                    &[table.name(), self.name.as_str()],
                )
                .await?;
            pending.push((table, referenced));
        }

        let mut ordered = Vec::with_capacity(pending.len());
        while !pending.is_empty() {
            let next = pending
                .iter()
                .position(|(table, _)| {
                    !pending.iter().any(|(other, referenced)| {
                        other.name() != table.name()
                            && referenced.iter().any(|r| r.eq_ignore_ascii_case(table.name()))
                    })
                })
                .unwrap_or(0);
            ordered.push(pending.remove(next).0);
        }
        Ok(ordered)
    }

    async fn reset_sequences(&self) -> Result<()> {
        let runner = self.support.runner();
        let has_sequences = runner
            .query_for_boolean(
                &format!(
                    "SELECT EXISTS(SELECT 1 FROM {self}.sqlite_master \
                     WHERE type = 'table' AND tbl_name = 'sqlite_sequence')"
                ),
                &[],
            )
            .await?;
        if has_sequences {
            runner.execute(&format!("DELETE FROM {self}.sqlite_sequence")).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Schema for SqliteSchema<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn exists(&self) -> Result<bool> {
        self.support
            .runner()
            .query_for_boolean(
                "SELECT EXISTS(SELECT 1 FROM pragma_database_list WHERE name = ?)",
                &[self.name.as_str()],
            )
            .await
            .map_err(|e| e.with_message(format!("Unable to check whether schema {self} exists")))
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.sqlite_tables().await?.is_empty())
    }

    async fn create(&self) -> Result<()> {
        info!(schema = %self, "SQLite does not support creating schemas, schema not created");
        Ok(())
    }

    async fn drop_schema(&self) -> Result<()> {
        info!(schema = %self, "SQLite does not support dropping schemas, schema not dropped");
        Ok(())
    }

    /// Drops every view and table, referencing tables first, then resets the
    /// AUTOINCREMENT counters.
    async fn clean(&self) -> Result<()> {
        info!(schema = %self, "Cleaning schema");
        let fail = |e: crate::error::DbSupportError| {
            e.with_message(format!("Unable to clean schema {self}"))
        };

        self.drop_views().await.map_err(fail)?;
        let tables = self.sqlite_tables().await.map_err(fail)?;
        for table in self.in_drop_order(tables).await.map_err(fail)? {
            table.drop_table().await.map_err(fail)?;
        }
        self.reset_sequences().await.map_err(fail)
    }

    async fn all_tables<'b>(&'b self) -> Result<Vec<Box<dyn Table + 'b>>> {
        let tables = self.sqlite_tables().await?;
        Ok(tables
            .into_iter()
            .map(|table| Box::new(table) as Box<dyn Table + 'b>)
            .collect())
    }

    fn table<'b>(&'b self, name: &str) -> Box<dyn Table + 'b> {
        Box::new(SqliteTable::new(self.support, &self.name, name))
    }
}

impl fmt::Display for SqliteSchema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.support.quote(&self.name))
    }
}
