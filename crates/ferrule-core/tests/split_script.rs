//! Script splitting with custom statement rules.

use ferrule_core::{Delimiter, SqlStatementBuilder, StandardRules, StatementRules};

/// Procedures end with a lone `/`, everything else with `;`.
struct SlashProcedures;

impl StatementRules for SlashProcedures {
    fn delimiter_for(&self, statement_start: &str, _line: &str) -> Option<Delimiter> {
        if statement_start.starts_with("CREATE PROCEDURE") {
            Some(Delimiter::new("/", true))
        } else {
            Some(self.default_delimiter())
        }
    }
}

/// Statements starting with BEGIN only end on a line ending in `COMMIT;`.
struct BlockUntilCommit;

impl StatementRules for BlockUntilCommit {
    fn delimiter_for(&self, statement_start: &str, line: &str) -> Option<Delimiter> {
        if statement_start.starts_with("BEGIN") && !line.trim_end().ends_with("COMMIT;") {
            return None;
        }
        Some(self.default_delimiter())
    }
}

#[test]
fn test_split_standard_script() {
    let script = "\
-- create the table
CREATE TABLE person (
    id INT,
    name VARCHAR(100)
);

INSERT INTO person VALUES (1, 'O''Brien; Jr.');
INSERT INTO person VALUES (2, 'Smith');
";
    let statements = SqlStatementBuilder::new(Box::new(StandardRules)).split(script);

    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0].line_number, 2);
    assert!(statements[0].sql.starts_with("CREATE TABLE person ("));
    assert!(statements[0].sql.ends_with(')'));
    assert_eq!(
        statements[1].sql,
        "INSERT INTO person VALUES (1, 'O''Brien; Jr.')"
    );
    assert_eq!(statements[1].line_number, 7);
    assert_eq!(statements[2].line_number, 8);
}

#[test]
fn test_split_with_alone_on_line_delimiter() {
    let script = "\
CREATE PROCEDURE touch()
BEGIN
    UPDATE t SET x = 1;
    UPDATE t SET y = 2;
END
/
SELECT 1;
";
    let statements = SqlStatementBuilder::new(Box::new(SlashProcedures)).split(script);

    assert_eq!(statements.len(), 2);
    assert_eq!(
        statements[0].sql,
        "CREATE PROCEDURE touch()\nBEGIN\n    UPDATE t SET x = 1;\n    UPDATE t SET y = 2;\nEND"
    );
    assert_eq!(statements[1].sql, "SELECT 1");
    assert_eq!(statements[1].line_number, 7);
}

#[test]
fn test_split_procedure_body_with_apostrophe() {
    let script = "\
CREATE PROCEDURE greet()
BEGIN
    -- don't quote me
    SELECT \"unbalanced;
END
/
SELECT 1; /* trailing */
SELECT 2;
";
    let statements = SqlStatementBuilder::new(Box::new(SlashProcedures)).split(script);

    assert_eq!(statements.len(), 3);
    assert!(statements[0].sql.ends_with("END"));
    assert_eq!(statements[1].sql, "SELECT 1");
    assert_eq!(statements[1].line_number, 7);
    assert_eq!(statements[2].sql, "SELECT 2");
}

#[test]
fn test_split_with_suppressed_termination() {
    let script = "\
BEGIN;
INSERT INTO t VALUES (1);
COMMIT;
SELECT 1;
";
    let statements = SqlStatementBuilder::new(Box::new(BlockUntilCommit)).split(script);

    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].sql, "BEGIN;\nINSERT INTO t VALUES (1);\nCOMMIT");
    assert_eq!(statements[1].sql, "SELECT 1");
}

#[test]
fn test_split_empty_script() {
    let mut builder = SqlStatementBuilder::new(Box::new(StandardRules));
    assert!(builder.split("").is_empty());
    assert!(builder.split("\n  \n-- only comments\n").is_empty());
}

#[test]
fn test_builder_reusable_after_split() {
    let mut builder = SqlStatementBuilder::new(Box::new(StandardRules));
    builder.split("SELECT 'unterminated");
    let statements = builder.split("SELECT 2;");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].sql, "SELECT 2");
}
