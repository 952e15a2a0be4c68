//! Exasol implementation of [`Schema`].

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use tracing::info;

use super::{ExasolDbSupport, ExasolTable};
use crate::dbsupport::{DbSupport, Schema, Table};
use crate::error::{DbSupportError, Result};

/// Name of the reserved system schema.
const SYSTEM_SCHEMA: &str = "SYS";

/// An Exasol schema.
///
/// Exasol does not separate schemas from user accounts: dropping the schema
/// drops the owning user together with everything it owns.
#[derive(Debug, Clone)]
pub struct ExasolSchema<'a> {
    support: &'a ExasolDbSupport<'a>,
    name: String,
}

impl<'a> ExasolSchema<'a> {
    pub(crate) fn new(support: &'a ExasolDbSupport<'a>, name: &str) -> Self {
        Self {
            support,
            name: name.to_string(),
        }
    }

    /// Returns whether this is the Exasol-maintained system schema.
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.name.eq_ignore_ascii_case(SYSTEM_SCHEMA)
    }

    /// Returns whether this schema is the default schema of the connected user.
    pub async fn is_default_for_current_user(&self) -> Result<bool> {
        Ok(self.name == self.support.current_user_name().await?)
    }

    /// Lists the tables of the schema with their concrete type.
    pub async fn exasol_tables(&self) -> Result<Vec<ExasolTable<'a>>> {
        let names = self
            .support
            .runner()
            .query_for_string_list(
                "SELECT table_name FROM SYS.EXA_USER_TABLES WHERE table_schema = upper(?)",
                &[self.name.as_str()],
            )
            .await
            .map_err(|e| e.with_message(format!("Unable to retrieve all tables in schema {self}")))?;

        let mut seen = HashSet::new();
        Ok(names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .map(|name| ExasolTable::new(self.support, &self.name, &name))
            .collect())
    }
}

#[async_trait]
impl Schema for ExasolSchema<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn exists(&self) -> Result<bool> {
        self.support
            .query_returns_rows(
                "SELECT * FROM SYS.EXA_SCHEMAS WHERE SCHEMA_NAME = ?",
                &[self.name.as_str()],
            )
            .await
            .map_err(|e| e.with_message(format!("Unable to check whether schema {self} exists")))
    }

    async fn is_empty(&self) -> Result<bool> {
        let has_objects = self
            .support
            .query_returns_rows(
                "SELECT * FROM SYS.EXA_ALL_OBJECTS WHERE root_name = upper(?)",
                &[self.name.as_str()],
            )
            .await
            .map_err(|e| {
                e.with_message(format!("Unable to check whether schema {self} is empty"))
            })?;
        Ok(!has_objects)
    }

    /// Creates the schema, then grants RESOURCE on it.
    ///
    /// The two statements are not atomic: when the grant fails the schema is
    /// left in place without it.
    async fn create(&self) -> Result<()> {
        info!(schema = %self, "Creating schema");
        let runner = self.support.runner();
        let quoted = self.support.quote(&self.name);
        runner
            .execute(&format!("CREATE SCHEMA {quoted}"))
            .await
            .map_err(|e| e.with_message(format!("Unable to create schema {self}")))?;
        runner
            .execute(&format!("GRANT RESOURCE TO {quoted}"))
            .await
            .map_err(|e| e.with_message(format!("Unable to grant resource on schema {self}")))
    }

    async fn drop_schema(&self) -> Result<()> {
        info!(schema = %self, "Dropping schema");
        self.support
            .runner()
            .execute(&format!("DROP USER {} CASCADE", self.support.quote(&self.name)))
            .await
            .map_err(|e| e.with_message(format!("Unable to drop schema {self}")))
    }

    async fn clean(&self) -> Result<()> {
        Err(DbSupportError::Unsupported {
            dialect: self.support.name(),
            operation: "clean",
        })
    }

    async fn all_tables<'b>(&'b self) -> Result<Vec<Box<dyn Table + 'b>>> {
        let tables = self.exasol_tables().await?;
        Ok(tables
            .into_iter()
            .map(|table| Box::new(table) as Box<dyn Table + 'b>)
            .collect())
    }

    fn table<'b>(&'b self, name: &str) -> Box<dyn Table + 'b> {
        Box::new(ExasolTable::new(self.support, &self.name, name))
    }
}

impl fmt::Display for ExasolSchema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.support.quote(&self.name))
    }
}
