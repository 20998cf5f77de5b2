// SPDX-License-Identifier: MIT OR Apache-2.0

//! Foreign-key constraint translator.

use crate::parse;
use dg_problem::ProblemDetails;
use dg_translate::{FailureTranslator, RawFailure, ViolationKind, wording};

/// Translates PostgreSQL foreign-key violations.
///
/// The write-time form (`insert or update … violates foreign key
/// constraint`) cites the referenced table on its DETAIL line; the
/// delete-time form (`update or delete … on table`) cites the dependent
/// table in the primary message. Wording matches the SQL Server dialect
/// exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresConstraintTranslator;

impl PostgresConstraintTranslator {
    /// Create the translator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FailureTranslator for PostgresConstraintTranslator {
    fn name(&self) -> &'static str {
        "postgres-constraint"
    }

    fn attempt(&self, failure: &RawFailure) -> Option<ProblemDetails> {
        if !failure.is_database() {
            return None;
        }

        let violation = parse::parse_constraint_conflict(failure.root_message())?;
        match violation.kind {
            ViolationKind::ForeignKey => Some(ProblemDetails::unresolved_reference(
                wording::unresolved_reference_detail(&violation.table),
            )),
            ViolationKind::ReferenceConstraint => Some(ProblemDetails::dependent_item_exists(
                wording::dependent_item_detail(&violation.table),
            )),
            ViolationKind::UniqueIndex => None,
        }
    }
}
