// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translator for non-database, request-construction failures.

use crate::failure::{FailureKind, RawFailure};
use crate::translator::FailureTranslator;
use dg_problem::ProblemDetails;

/// Recognizes the two precondition-style failure kinds raised before a
/// write reaches the database and declines everything else, so that the
/// chain can continue or fall back safely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationTranslator;

impl ValidationTranslator {
    /// Create the translator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FailureTranslator for ValidationTranslator {
    fn name(&self) -> &'static str {
        "validation"
    }

    fn attempt(&self, failure: &RawFailure) -> Option<ProblemDetails> {
        match failure.kind() {
            FailureKind::Validation { errors } => {
                Some(ProblemDetails::validation(errors.clone()))
            }
            FailureKind::MethodNotAllowed { error } => {
                Some(ProblemDetails::method_not_allowed(error.clone()))
            }
            FailureKind::Database { .. } | FailureKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::WriteOperation;
    use dg_problem::{STATUS_BAD_REQUEST, STATUS_METHOD_NOT_ALLOWED};

    #[test]
    fn validation_failure_becomes_400_problem() {
        let failure = RawFailure::validation(["CodeValue is required."]);
        let problem = ValidationTranslator::new().attempt(&failure).unwrap();

        assert_eq!(problem.status, STATUS_BAD_REQUEST);
        assert_eq!(problem.problem_type, "urn:datagate:api:validation:invalid-data");
        assert_eq!(problem.errors, vec!["CodeValue is required.".to_string()]);
    }

    #[test]
    fn method_not_allowed_becomes_405_problem() {
        let failure = RawFailure::method_not_allowed(Some(
            "Resource collections cannot be replaced.".into(),
        ));
        let problem = ValidationTranslator::new().attempt(&failure).unwrap();

        assert_eq!(problem.status, STATUS_METHOD_NOT_ALLOWED);
        assert_eq!(problem.title, "Method Not Allowed");
        assert_eq!(
            problem.errors,
            vec!["Resource collections cannot be replaced.".to_string()]
        );
    }

    #[test]
    fn method_not_allowed_without_error_uses_default_detail_only() {
        let failure = RawFailure::method_not_allowed(None);
        let problem = ValidationTranslator::new().attempt(&failure).unwrap();
        assert_eq!(problem.detail, "The request construction was invalid.");
        assert!(problem.errors.is_empty());
    }

    #[test]
    fn database_failures_are_declined() {
        let failure = RawFailure::database(WriteOperation::Insert, "duplicate key");
        assert!(ValidationTranslator::new().attempt(&failure).is_none());
    }

    #[test]
    fn unrecognized_failures_are_declined() {
        // The argument-failure analog: recognized by nobody.
        let failure = RawFailure::other("Some error message");
        assert!(ValidationTranslator::new().attempt(&failure).is_none());
    }
}
