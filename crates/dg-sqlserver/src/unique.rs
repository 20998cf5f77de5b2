// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unique-index violation translator.

use crate::parse;
use dg_metadata::IndexMetadataProvider;
use dg_problem::ProblemDetails;
use dg_translate::{FailureTranslator, RawFailure, wording};
use std::sync::Arc;
use tracing::warn;

/// Translates SQL Server duplicate-key-row diagnostics.
///
/// The message names the table and the unique index but not the columns
/// the index spans, so the translator resolves membership through an
/// [`IndexMetadataProvider`]. A failed lookup declines the match rather
/// than surfacing an error: the chain's fallback handles it.
pub struct SqlServerUniqueIndexTranslator {
    metadata: Arc<dyn IndexMetadataProvider>,
}

impl SqlServerUniqueIndexTranslator {
    /// Create the translator over the given metadata provider.
    #[must_use]
    pub fn new(metadata: Arc<dyn IndexMetadataProvider>) -> Self {
        Self { metadata }
    }
}

impl std::fmt::Debug for SqlServerUniqueIndexTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlServerUniqueIndexTranslator").finish_non_exhaustive()
    }
}

impl FailureTranslator for SqlServerUniqueIndexTranslator {
    fn name(&self) -> &'static str {
        "sqlserver-unique-index"
    }

    fn attempt(&self, failure: &RawFailure) -> Option<ProblemDetails> {
        if !failure.is_database() {
            return None;
        }

        let violation = parse::parse_duplicate_key(failure.root_message())?;

        let details = match self.metadata.index_details(&violation.constraint_or_index) {
            Ok(details) => details,
            Err(err) => {
                warn!(
                    index = %violation.constraint_or_index,
                    error = %err,
                    "unique-index metadata unavailable; leaving failure untranslated"
                );
                return None;
            }
        };
        if details.column_names.is_empty() {
            warn!(
                index = %violation.constraint_or_index,
                "index metadata carries no columns; leaving failure untranslated"
            );
            return None;
        }

        Some(ProblemDetails::non_unique_values(
            wording::non_unique_values_detail(
                violation.literal_value.as_deref(),
                &details.column_names,
                &details.table_name,
            ),
        ))
    }
}
