// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recognizers for SQL Server's constraint-violation wording.

use dg_translate::{ParsedViolation, ViolationKind};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `The INSERT statement conflicted with the FOREIGN KEY constraint
/// "FK_…". The conflict occurred in database "…", table "edfi.Table",
/// column 'Column'.` The column clause is absent for some delete-time
/// REFERENCE conflicts.
static CONSTRAINT_CONFLICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"The (?:INSERT|UPDATE|DELETE|MERGE) statement conflicted with the (?P<class>FOREIGN KEY|REFERENCE) constraint "(?P<constraint>[^"]+)"\. The conflict occurred in database "[^"]+", table "(?P<table>[^"]+)"(?:, column '(?P<column>[^']+)')?\."#,
    )
    .expect("constraint-conflict pattern is valid")
});

/// `Cannot insert duplicate key row in object 'edfi.Table' with unique
/// index 'IndexName'.`, optionally followed by `The duplicate key value
/// is (…).`
static DUPLICATE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"Cannot insert duplicate key row in object '(?P<table>[^']+)' with unique index '(?P<index>[^']+)'\.(?: The duplicate key value is (?P<value>\(.+\))\.)?"#,
    )
    .expect("duplicate-key pattern is valid")
});

/// A capture the pattern's own grammar guarantees. Absence after a match
/// is a pattern bug, not an input problem, and must fail loudly.
fn capture<'t>(caps: &Captures<'t>, group: &str) -> &'t str {
    caps.name(group)
        .unwrap_or_else(|| panic!("pattern guarantees capture group '{group}'"))
        .as_str()
}

/// Recognize a `FOREIGN KEY` or `REFERENCE` constraint conflict.
pub(crate) fn parse_constraint_conflict(text: &str) -> Option<ParsedViolation> {
    let caps = CONSTRAINT_CONFLICT.captures(text)?;

    let kind = match capture(&caps, "class") {
        "FOREIGN KEY" => ViolationKind::ForeignKey,
        _ => ViolationKind::ReferenceConstraint,
    };

    let mut violation =
        ParsedViolation::new(kind, capture(&caps, "constraint"), capture(&caps, "table"));
    if let Some(column) = caps.name("column") {
        violation = violation.with_columns([column.as_str()]);
    }
    Some(violation)
}

/// Recognize a duplicate key row on a unique index. The cited columns are
/// not in the text; the caller resolves them through index metadata.
pub(crate) fn parse_duplicate_key(text: &str) -> Option<ParsedViolation> {
    let caps = DUPLICATE_KEY.captures(text)?;

    let mut violation = ParsedViolation::new(
        ViolationKind::UniqueIndex,
        capture(&caps, "index"),
        capture(&caps, "table"),
    );
    if let Some(value) = caps.name("value") {
        violation = violation.with_literal_value(value.as_str());
    }
    Some(violation)
}
