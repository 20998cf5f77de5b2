// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unique-constraint violation translator.

use crate::parse;
use dg_metadata::IndexMetadataProvider;
use dg_problem::ProblemDetails;
use dg_translate::{FailureTranslator, RawFailure, wording};
use std::sync::Arc;
use tracing::warn;

/// Translates PostgreSQL duplicate-key diagnostics.
///
/// Columns and the duplicate value come from the `DETAIL: Key (…)=(…)`
/// line when the server sends one; the owning table never appears in the
/// message, so it always comes from the [`IndexMetadataProvider`]. When
/// the DETAIL line is suppressed, column membership falls back to the
/// same metadata. A failed lookup declines the match.
pub struct PostgresUniqueConstraintTranslator {
    metadata: Arc<dyn IndexMetadataProvider>,
}

impl PostgresUniqueConstraintTranslator {
    /// Create the translator over the given metadata provider.
    #[must_use]
    pub fn new(metadata: Arc<dyn IndexMetadataProvider>) -> Self {
        Self { metadata }
    }
}

impl std::fmt::Debug for PostgresUniqueConstraintTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresUniqueConstraintTranslator").finish_non_exhaustive()
    }
}

impl FailureTranslator for PostgresUniqueConstraintTranslator {
    fn name(&self) -> &'static str {
        "postgres-unique-constraint"
    }

    fn attempt(&self, failure: &RawFailure) -> Option<ProblemDetails> {
        if !failure.is_database() {
            return None;
        }

        let violation = parse::parse_unique_conflict(failure.root_message())?;

        let details = match self.metadata.index_details(&violation.constraint_or_index) {
            Ok(details) => details,
            Err(err) => {
                warn!(
                    index = %violation.constraint_or_index,
                    error = %err,
                    "unique-constraint metadata unavailable; leaving failure untranslated"
                );
                return None;
            }
        };

        let columns = if violation.has_columns() {
            &violation.columns
        } else {
            &details.column_names
        };
        if columns.is_empty() {
            warn!(
                index = %violation.constraint_or_index,
                "no column membership available; leaving failure untranslated"
            );
            return None;
        }

        Some(ProblemDetails::non_unique_values(
            wording::non_unique_values_detail(
                violation.literal_value.as_deref(),
                columns,
                &details.table_name,
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_metadata::{IndexDetails, StaticIndexMetadataProvider};
    use dg_translate::WriteOperation;

    const UNIQUE_WITH_DETAIL: &str = "ERROR: duplicate key value violates unique constraint \"ux_session_schoolid_sessionname\"\nDETAIL: Key (schoolid, sessionname)=(255901, Fall 2024) already exists.";

    const UNIQUE_WITHOUT_DETAIL: &str =
        "ERROR: duplicate key value violates unique constraint \"ux_session_schoolid_sessionname\"";

    fn failure(native: &str) -> RawFailure {
        RawFailure::database(WriteOperation::Insert, "could not execute statement")
            .with_cause(RawFailure::other(native))
    }

    fn translator() -> PostgresUniqueConstraintTranslator {
        let provider = StaticIndexMetadataProvider::new().with_index(IndexDetails::new(
            "ux_session_schoolid_sessionname",
            "Session",
            ["SchoolId", "SessionName"],
        ));
        PostgresUniqueConstraintTranslator::new(Arc::new(provider))
    }

    #[test]
    fn columns_and_value_come_from_detail_line() {
        let problem = translator().attempt(&failure(UNIQUE_WITH_DETAIL)).unwrap();
        assert_eq!(
            problem.problem_type,
            "urn:datagate:api:data-conflict:non-unique-values"
        );
        assert_eq!(
            problem.detail,
            "The values (255901, Fall 2024) supplied for properties 'schoolid', 'sessionname' of entity 'session' are not unique."
        );
    }

    #[test]
    fn suppressed_detail_falls_back_to_metadata_columns() {
        let problem = translator().attempt(&failure(UNIQUE_WITHOUT_DETAIL)).unwrap();
        assert_eq!(
            problem.detail,
            "The values unknown supplied for properties 'schoolId', 'sessionName' of entity 'session' are not unique."
        );
    }

    #[test]
    fn single_column_detail_uses_singular_wording() {
        let provider = StaticIndexMetadataProvider::new().with_index(IndexDetails::new(
            "ux_academichonorstype_codevalue",
            "AcademicHonorsType",
            ["CodeValue"],
        ));
        let translator = PostgresUniqueConstraintTranslator::new(Arc::new(provider));
        let native = "ERROR: duplicate key value violates unique constraint \"ux_academichonorstype_codevalue\"\nDETAIL: Key (codevalue)=(Honors) already exists.";

        let problem = translator.attempt(&failure(native)).unwrap();
        assert_eq!(
            problem.detail,
            "The value (Honors) supplied for property 'codevalue' of entity 'academicHonorsType' is not unique."
        );
    }

    #[test]
    fn unknown_constraint_declines_the_match() {
        let translator =
            PostgresUniqueConstraintTranslator::new(Arc::new(StaticIndexMetadataProvider::new()));
        assert!(translator.attempt(&failure(UNIQUE_WITH_DETAIL)).is_none());
    }

    #[test]
    fn no_columns_anywhere_declines_the_match() {
        let provider = StaticIndexMetadataProvider::new().with_index(IndexDetails::new(
            "ux_session_schoolid_sessionname",
            "Session",
            Vec::<String>::new(),
        ));
        let translator = PostgresUniqueConstraintTranslator::new(Arc::new(provider));
        assert!(translator.attempt(&failure(UNIQUE_WITHOUT_DETAIL)).is_none());
    }

    #[test]
    fn non_database_failure_is_declined() {
        assert!(translator().attempt(&RawFailure::other(UNIQUE_WITH_DETAIL)).is_none());
    }
}
