//! Exasol implementation of [`Table`].

use std::fmt;

use async_trait::async_trait;
use tracing::info;

use super::ExasolDbSupport;
use crate::dbsupport::{DbSupport, Table};
use crate::error::Result;

/// A table inside an Exasol schema.
#[derive(Debug, Clone)]
pub struct ExasolTable<'a> {
    support: &'a ExasolDbSupport<'a>,
    schema: String,
    name: String,
}

impl<'a> ExasolTable<'a> {
    pub(crate) fn new(support: &'a ExasolDbSupport<'a>, schema: &str, name: &str) -> Self {
        Self {
            support,
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl Table for ExasolTable<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema_name(&self) -> &str {
        &self.schema
    }

    async fn exists(&self) -> Result<bool> {
        self.support
            .query_returns_rows(
                "SELECT * FROM SYS.EXA_ALL_TABLES WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?",
                &[self.schema.as_str(), self.name.as_str()],
            )
            .await
            .map_err(|e| e.with_message(format!("Unable to check whether table {self} exists")))
    }

    async fn drop_table(&self) -> Result<()> {
        info!(table = %self, "Dropping table");
        self.support
            .runner()
            .execute(&format!("DROP TABLE {self} CASCADE CONSTRAINTS"))
            .await
            .map_err(|e| e.with_message(format!("Unable to drop table {self}")))
    }
}

impl fmt::Display for ExasolTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.support.quote_qualified(&[self.schema.as_str(), self.name.as_str()]))
    }
}
