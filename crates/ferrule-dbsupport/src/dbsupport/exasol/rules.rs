//! Exasol statement termination rules.

use std::sync::OnceLock;

use ferrule_core::{Delimiter, StatementRules};
use regex::Regex;

/// Start of a statement carrying a procedural body.
const BODY_START_PATTERN: &str = r"^CREATE (OR REPLACE )?((JAVA|LUA|PYTHON|PYTHON3|R) )?((SCALAR|SET) )?(ADAPTER )?(SCRIPT|FUNCTION)\b";

fn body_start() -> &'static Regex {
    static BODY_START: OnceLock<Regex> = OnceLock::new();
    BODY_START.get_or_init(|| Regex::new(BODY_START_PATTERN).expect("Invalid script start regex"))
}

/// Splits Exasol scripts.
///
/// Statements end with `;`. Scripts and functions contain `;` in their body,
/// so they end with a line holding only `/` instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExasolStatementRules;

impl ExasolStatementRules {
    /// Creates the rules.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StatementRules for ExasolStatementRules {
    fn delimiter_for(&self, statement_start: &str, _line: &str) -> Option<Delimiter> {
        if body_start().is_match(statement_start) {
            Some(Delimiter::new("/", true))
        } else {
            Some(self.default_delimiter())
        }
    }
}
