// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Taxonomy constants
// ---------------------------------------------------------------------------

/// Fixed prefix of every problem `type` URI.
pub const BASE_TYPE_PREFIX: &str = "urn:datagate:api";

/// Category segment for constraint-derived conflicts.
pub const CATEGORY_DATA_CONFLICT: &str = "data-conflict";

/// Category segment for request-validation failures.
pub const CATEGORY_VALIDATION: &str = "validation";

/// Subcategory for a write that references a missing item.
pub const TYPE_UNRESOLVED_REFERENCE: &str = "unresolved-reference";

/// Subcategory for a delete blocked by dependent items.
pub const TYPE_DEPENDENT_ITEM_EXISTS: &str = "dependent-item-exists";

/// Subcategory for a write that duplicates a unique value combination.
pub const TYPE_NON_UNIQUE_VALUES: &str = "non-unique-values";

/// HTTP status for validation problems.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// HTTP status for disallowed methods.
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

/// HTTP status for data conflicts.
pub const STATUS_CONFLICT: u16 = 409;

// ---------------------------------------------------------------------------
// ProblemDetails
// ---------------------------------------------------------------------------

/// Structured, client-facing description of a failed request.
///
/// This is the sole output artifact of the translation engine. The
/// surrounding transport serializes it as an RFC-7807-style document; the
/// colon-hierarchical `type` is the Datagate extension that lets clients
/// match on error families (`urn:datagate:api:data-conflict:…`) without
/// string-scraping `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProblemDetails {
    /// HTTP status code the transport should respond with.
    pub status: u16,
    /// Colon-delimited hierarchical type URI, always rooted at
    /// [`BASE_TYPE_PREFIX`].
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short, human-readable summary of the problem category.
    pub title: String,
    /// Human-readable explanation specific to this occurrence.
    pub detail: String,
    /// Individual error strings attached to the problem, when any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ProblemDetails {
    /// Build a problem with an explicit status, title, detail, and the
    /// `type` segments appended to [`BASE_TYPE_PREFIX`].
    #[must_use]
    pub fn new(
        status: u16,
        title: impl Into<String>,
        detail: impl Into<String>,
        type_parts: &[&str],
    ) -> Self {
        Self {
            status,
            problem_type: assemble_type(type_parts),
            title: title.into(),
            detail: detail.into(),
            errors: Vec::new(),
        }
    }

    /// A 409 conflict for a write that references a missing item.
    #[must_use]
    pub fn unresolved_reference(detail: impl Into<String>) -> Self {
        Self::new(
            STATUS_CONFLICT,
            "Unresolved Reference",
            detail,
            &[CATEGORY_DATA_CONFLICT, TYPE_UNRESOLVED_REFERENCE],
        )
    }

    /// A 409 conflict for a delete blocked by dependent items.
    #[must_use]
    pub fn dependent_item_exists(detail: impl Into<String>) -> Self {
        Self::new(
            STATUS_CONFLICT,
            "Dependent Item Exists",
            detail,
            &[CATEGORY_DATA_CONFLICT, TYPE_DEPENDENT_ITEM_EXISTS],
        )
    }

    /// A 409 conflict for a write that duplicates a unique value
    /// combination.
    #[must_use]
    pub fn non_unique_values(detail: impl Into<String>) -> Self {
        Self::new(
            STATUS_CONFLICT,
            "Non-Unique Values",
            detail,
            &[CATEGORY_DATA_CONFLICT, TYPE_NON_UNIQUE_VALUES],
        )
    }

    /// A 400 problem for a request that failed data validation.
    ///
    /// The individual validation messages ride in `errors`.
    #[must_use]
    pub fn validation(errors: Vec<String>) -> Self {
        let mut problem = Self::new(
            STATUS_BAD_REQUEST,
            "Data Validation Failed",
            "Data validation failed. See 'errors' for details.",
            &[CATEGORY_VALIDATION, "invalid-data"],
        );
        problem.errors = errors;
        problem
    }

    /// A 405 problem for a request using a method the resource does not
    /// allow. `detail` stays fixed; an explicit error string, when
    /// supplied, is attached to `errors`.
    #[must_use]
    pub fn method_not_allowed(error: Option<String>) -> Self {
        let mut problem = Self::new(
            STATUS_METHOD_NOT_ALLOWED,
            "Method Not Allowed",
            "The request construction was invalid.",
            &["method-not-allowed"],
        );
        problem.errors = error.into_iter().collect();
        problem
    }

    /// Attach error strings, replacing any already present.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

impl fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.problem_type, self.detail)
    }
}

/// Join [`BASE_TYPE_PREFIX`] and the given segments with `:`.
fn assemble_type(parts: &[&str]) -> String {
    let mut uri = String::from(BASE_TYPE_PREFIX);
    for part in parts {
        uri.push(':');
        uri.push_str(part);
    }
    uri
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
