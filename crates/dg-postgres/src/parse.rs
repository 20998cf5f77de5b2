// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recognizers for PostgreSQL's constraint-violation wording.

use dg_translate::{ParsedViolation, ViolationKind};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `update or delete on table "addresstype" violates foreign key
/// constraint "fk_…" on table "studentaddress"`: the delete-time form;
/// the trailing `on table` names the dependent table.
static REFERENCE_CONFLICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"update or delete on table "[^"]+" violates foreign key constraint "(?P<constraint>[^"]+)" on table "(?P<dependent>[^"]+)""#,
    )
    .expect("reference-conflict pattern is valid")
});

/// `insert or update on table "studentaddress" violates foreign key
/// constraint "fk_…"` followed by `DETAIL: Key (…)=(…) is not present in
/// table "addresstype".` The referenced table only appears on the
/// DETAIL line, so the recognizer requires it.
static FOREIGN_KEY_CONFLICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)insert or update on table "[^"]+" violates foreign key constraint "(?P<constraint>[^"]+)".*?Key \((?P<columns>[^)]+)\)=\(.*?\) is not present in table "(?P<referenced>[^"]+)""#,
    )
    .expect("foreign-key-conflict pattern is valid")
});

/// `duplicate key value violates unique constraint "ux_…"` optionally
/// followed by `DETAIL: Key (a, b)=(1, 2) already exists.`
static UNIQUE_CONFLICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)duplicate key value violates unique constraint "(?P<constraint>[^"]+)"(?:.*?Key \((?P<columns>[^)]+)\)=\((?P<values>.*?)\) already exists)?"#,
    )
    .expect("unique-conflict pattern is valid")
});

/// A capture the pattern's own grammar guarantees. Absence after a match
/// is a pattern bug, not an input problem, and must fail loudly.
fn capture<'t>(caps: &Captures<'t>, group: &str) -> &'t str {
    caps.name(group)
        .unwrap_or_else(|| panic!("pattern guarantees capture group '{group}'"))
        .as_str()
}

fn split_columns(list: &str) -> Vec<String> {
    list.split(',').map(|c| c.trim().to_string()).collect()
}

/// Recognize a foreign-key conflict, delete-time or write-time.
pub(crate) fn parse_constraint_conflict(text: &str) -> Option<ParsedViolation> {
    if let Some(caps) = REFERENCE_CONFLICT.captures(text) {
        return Some(ParsedViolation::new(
            ViolationKind::ReferenceConstraint,
            capture(&caps, "constraint"),
            capture(&caps, "dependent"),
        ));
    }

    let caps = FOREIGN_KEY_CONFLICT.captures(text)?;
    Some(
        ParsedViolation::new(
            ViolationKind::ForeignKey,
            capture(&caps, "constraint"),
            capture(&caps, "referenced"),
        )
        .with_columns(split_columns(capture(&caps, "columns"))),
    )
}

/// Recognize a unique-constraint conflict. The primary message never
/// names the owning table; the caller resolves it through index metadata.
pub(crate) fn parse_unique_conflict(text: &str) -> Option<ParsedViolation> {
    let caps = UNIQUE_CONFLICT.captures(text)?;

    let mut violation =
        ParsedViolation::new(ViolationKind::UniqueIndex, capture(&caps, "constraint"), "");
    if let Some(columns) = caps.name("columns") {
        violation = violation
            .with_columns(split_columns(columns.as_str()))
            .with_literal_value(format!("({})", capture(&caps, "values")));
    }
    Some(violation)
}
