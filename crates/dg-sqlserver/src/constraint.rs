// SPDX-License-Identifier: MIT OR Apache-2.0

//! Foreign-key / reference constraint translator.

use crate::parse;
use dg_problem::ProblemDetails;
use dg_translate::{FailureTranslator, RawFailure, ViolationKind, wording};

/// Translates SQL Server `FOREIGN KEY` and `REFERENCE` constraint
/// conflicts.
///
/// A `FOREIGN KEY` conflict means an insert or update referenced a row
/// that does not exist; a `REFERENCE` conflict means a delete was blocked
/// because dependent rows still point at the row. In both wordings the
/// cited table is the one named in the constraint text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerConstraintTranslator;

impl SqlServerConstraintTranslator {
    /// Create the translator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FailureTranslator for SqlServerConstraintTranslator {
    fn name(&self) -> &'static str {
        "sqlserver-constraint"
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
