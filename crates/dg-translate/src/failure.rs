// SPDX-License-Identifier: MIT OR Apache-2.0

//! The opaque failure value entering the translation engine.

use std::fmt;

// ---------------------------------------------------------------------------
// WriteOperation
// ---------------------------------------------------------------------------

/// The data-management operation whose write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOperation {
    /// A new item was being created.
    Insert,
    /// An existing item was being replaced or modified.
    Update,
    /// An existing item was being removed.
    Delete,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Which family of failure raised the [`RawFailure`].
///
/// Translators key their recognition on this before looking at any text:
/// database translators only read storage-engine failures, the validation
/// translator only reads the two request-construction kinds, and
/// [`FailureKind::Other`] is never claimed by anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// A storage-engine failure raised while executing a write.
    Database {
        /// The operation the persistence layer was executing.
        operation: WriteOperation,
    },
    /// A request failed data validation before reaching the database.
    Validation {
        /// Individual validation failure messages.
        errors: Vec<String>,
    },
    /// The request used a method the resource does not allow.
    MethodNotAllowed {
        /// Optional explicit error string from the request-handling layer.
        error: Option<String>,
    },
    /// Anything else; no translator may claim it.
    Other,
}

// ---------------------------------------------------------------------------
// RawFailure
// ---------------------------------------------------------------------------

/// The original failure, possibly wrapping a nested cause chain.
///
/// Persistence frameworks wrap the storage engine's diagnostic inside one
/// or more layers of their own messages; the backend's native text lives
/// in the deepest cause and is reached through [`RawFailure::root_message`].
/// The value is owned by the caller and only read by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFailure {
    kind: FailureKind,
    message: String,
    cause: Option<Box<RawFailure>>,
}

impl RawFailure {
    /// A storage-engine failure raised by `operation`.
    #[must_use]
    pub fn database(operation: WriteOperation, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Database { operation },
            message: message.into(),
            cause: None,
        }
    }

    /// A data-validation failure carrying individual error messages.
    #[must_use]
    pub fn validation(errors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind: FailureKind::Validation {
                errors: errors.into_iter().map(Into::into).collect(),
            },
            message: "Data validation failed.".into(),
            cause: None,
        }
    }

    /// The request-handling layer's method-not-allowed failure.
    #[must_use]
    pub fn method_not_allowed(error: Option<String>) -> Self {
        Self {
            kind: FailureKind::MethodNotAllowed { error },
            message: "The request construction was invalid.".into(),
            cause: None,
        }
    }

    /// A failure outside every recognized family.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Other,
            message: message.into(),
            cause: None,
        }
    }

    /// Append `cause` at the deepest level of the cause chain, so that
    /// repeated calls nest the way wrapped exceptions do.
    #[must_use]
    pub fn with_cause(mut self, cause: RawFailure) -> Self {
        self.cause = Some(Box::new(match self.cause.take() {
            Some(existing) => (*existing).with_cause(cause),
            None => cause,
        }));
        self
    }

    /// The failure family.
    #[must_use]
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// The outermost message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The directly wrapped cause, when any.
    #[must_use]
    pub fn cause(&self) -> Option<&RawFailure> {
        self.cause.as_deref()
    }

    /// The message of the deepest cause: for database failures, the
    /// storage engine's native diagnostic text.
    #[must_use]
    pub fn root_message(&self) -> &str {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current.message()
    }

    /// The write operation, for database failures.
    #[must_use]
    pub fn operation(&self) -> Option<WriteOperation> {
        match self.kind {
            FailureKind::Database { operation } => Some(operation),
            _ => None,
        }
    }

    /// Returns `true` for storage-engine failures.
    #[must_use]
    pub fn is_database(&self) -> bool {
        matches!(self.kind, FailureKind::Database { .. })
    }
}

impl fmt::Display for RawFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RawFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_message_without_cause_is_own_message() {
        let failure = RawFailure::database(WriteOperation::Insert, "could not insert");
        assert_eq!(failure.root_message(), "could not insert");
    }

    #[test]
    fn root_message_reaches_deepest_cause() {
        let failure = RawFailure::database(WriteOperation::Update, "could not update")
            .with_cause(RawFailure::other("batch command failed"))
            .with_cause(RawFailure::other("native diagnostic"));

        assert_eq!(failure.message(), "could not update");
        assert_eq!(failure.root_message(), "native diagnostic");
        // The chain nests: outer -> middle -> inner.
        let middle = failure.cause().unwrap();
        assert_eq!(middle.message(), "batch command failed");
        assert_eq!(middle.cause().unwrap().message(), "native diagnostic");
    }

    #[test]
    fn operation_is_only_present_for_database_failures() {
        let db = RawFailure::database(WriteOperation::Delete, "boom");
        assert_eq!(db.operation(), Some(WriteOperation::Delete));
        assert!(db.is_database());

        let other = RawFailure::other("boom");
        assert_eq!(other.operation(), None);
        assert!(!other.is_database());
    }

    #[test]
    fn validation_failure_collects_errors() {
        let failure = RawFailure::validation(["a", "b"]);
        match failure.kind() {
            FailureKind::Validation { errors } => {
                assert_eq!(errors, &vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn error_source_chains_through_causes() {
        let failure = RawFailure::database(WriteOperation::Insert, "outer")
            .with_cause(RawFailure::other("inner"));
        let source = std::error::Error::source(&failure).unwrap();
        assert_eq!(source.to_string(), "inner");
    }

    #[test]
    fn write_operation_display() {
        assert_eq!(WriteOperation::Insert.to_string(), "insert");
        assert_eq!(WriteOperation::Update.to_string(), "update");
        assert_eq!(WriteOperation::Delete.to_string(), "delete");
    }
}
