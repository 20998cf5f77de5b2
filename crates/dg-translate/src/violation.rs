// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transient parse result shared by the dialect translators.

use std::fmt;

/// The constraint class a backend diagnostic was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// An insert/update referenced a row that does not exist.
    ForeignKey,
    /// A delete was blocked because dependent rows still reference it.
    ReferenceConstraint,
    /// A write would duplicate a value combination a unique index forbids.
    UniqueIndex,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ForeignKey => "foreign-key",
            Self::ReferenceConstraint => "reference-constraint",
            Self::UniqueIndex => "unique-index",
        };
        f.write_str(s)
    }
}

/// What a dialect parser extracted from one backend diagnostic.
///
/// Built per translation attempt and discarded with it; never persisted.
/// Identifiers are carried exactly as the backend spelled them, schema
/// qualifiers and casing included, and are only normalized at wording
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedViolation {
    /// Recognized constraint class.
    pub kind: ViolationKind,
    /// Name of the violated constraint or unique index.
    pub constraint_or_index: String,
    /// Table the diagnostic cites (possibly schema-qualified, possibly
    /// empty when the dialect's text omits it and metadata must fill it).
    pub table: String,
    /// Columns the diagnostic cites, in order.
    pub columns: Vec<String>,
    /// Literal duplicate key value, verbatim, when the text carries one.
    pub literal_value: Option<String>,
}

impl ParsedViolation {
    /// Start a violation of `kind` for `constraint_or_index` on `table`.
    #[must_use]
    pub fn new(
        kind: ViolationKind,
        constraint_or_index: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            constraint_or_index: constraint_or_index.into(),
            table: table.into(),
            columns: Vec::new(),
            literal_value: None,
        }
    }

    /// Attach the cited columns.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the literal duplicate key value.
    #[must_use]
    pub fn with_literal_value(mut self, value: impl Into<String>) -> Self {
        self.literal_value = Some(value.into());
        self
    }

    /// Returns `true` when the diagnostic cited at least one column.
    #[must_use]
    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }
}
