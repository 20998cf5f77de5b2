// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// IndexDetails
// ---------------------------------------------------------------------------

/// Table and column membership of a database index.
///
/// Read-only reference data: the translation engine consumes it but never
/// owns or mutates catalog state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDetails {
    /// Name of the index as the storage engine reports it.
    pub index_name: String,
    /// Table the index belongs to.
    pub table_name: String,
    /// Ordered columns the index spans.
    pub column_names: Vec<String>,
}

impl IndexDetails {
    /// Build details for `index_name` on `table_name` spanning `columns`.
    #[must_use]
    pub fn new(
        index_name: impl Into<String>,
        table_name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            index_name: index_name.into(),
            table_name: table_name.into(),
            column_names: columns.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures a metadata lookup can signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The index name is not present in the catalog.
    #[error("unknown index '{0}'")]
    UnknownIndex(String),

    /// The lookup itself failed (connectivity, permissions, …).
    #[error("index metadata lookup failed: {0}")]
    LookupFailed(String),
}

// ---------------------------------------------------------------------------
// Provider contract
// ---------------------------------------------------------------------------

/// Side-channel lookup from an index name to its table and column list.
///
/// Implementations may block (a catalog query) but must be safe to call
/// from concurrent translations; cancellation and timeout policy belong to
/// the implementation, not the callers.
pub trait IndexMetadataProvider: Send + Sync {
    /// Resolve `index_name` to its [`IndexDetails`].
    ///
    /// # Errors
    ///
    /// [`MetadataError::UnknownIndex`] when the catalog has no such index,
    /// [`MetadataError::LookupFailed`] when the lookup itself fails.
    fn index_details(&self, index_name: &str) -> Result<IndexDetails, MetadataError>;
}

// ---------------------------------------------------------------------------
// StaticIndexMetadataProvider
// ---------------------------------------------------------------------------

/// In-memory [`IndexMetadataProvider`] backed by a fixed map.
///
/// Used by unit and integration tests in place of a live catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticIndexMetadataProvider {
    indexes: BTreeMap<String, IndexDetails>,
}

impl StaticIndexMetadataProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `details` under its own index name.
    #[must_use]
    pub fn with_index(mut self, details: IndexDetails) -> Self {
        self.indexes.insert(details.index_name.clone(), details);
        self
    }

    /// Number of registered indexes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Returns `true` when no indexes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

impl IndexMetadataProvider for StaticIndexMetadataProvider {
    fn index_details(&self, index_name: &str) -> Result<IndexDetails, MetadataError> {
        self.indexes
            .get(index_name)
            .cloned()
            .ok_or_else(|| MetadataError::UnknownIndex(index_name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
