//! SQLite statement termination rules.

use std::sync::OnceLock;

use ferrule_core::{Delimiter, StatementRules};
use regex::Regex;

fn trigger_start() -> &'static Regex {
    static TRIGGER_START: OnceLock<Regex> = OnceLock::new();
    TRIGGER_START.get_or_init(|| {
        Regex::new(r"^CREATE (TEMP |TEMPORARY )?TRIGGER\b").expect("Invalid trigger regex")
    })
}

/// Splits SQLite scripts.
///
/// Trigger bodies hold `;`-terminated statements between `BEGIN` and `END`,
/// so a `CREATE TRIGGER` only ends on a line finishing with `END;`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteStatementRules;

impl SqliteStatementRules {
    /// Creates the rules.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StatementRules for SqliteStatementRules {
    fn delimiter_for(&self, statement_start: &str, line: &str) -> Option<Delimiter> {
        if trigger_start().is_match(statement_start)
            && !line.trim_end().to_uppercase().ends_with("END;")
        {
            return None;
        }
        Some(self.default_delimiter())
    }
}
