// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

use dg_config::{DatabaseEngine, DatagateConfig};
use dg_metadata::IndexMetadataProvider;
use dg_postgres::{PostgresConstraintTranslator, PostgresUniqueConstraintTranslator};
use dg_sqlserver::{SqlServerConstraintTranslator, SqlServerUniqueIndexTranslator};
use dg_translate::{TranslatorChain, ValidationTranslator};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Build the translator chain for the configured database engine.
///
/// The validation translator goes first; the dialect translators occupy
/// disjoint message shapes, so their relative order only matters should a
/// future dialect's shapes ever overlap.
#[must_use]
pub fn translator_chain(
    config: &DatagateConfig,
    metadata: Arc<dyn IndexMetadataProvider>,
) -> TranslatorChain {
    let mut chain = TranslatorChain::default();
    chain.push(Box::new(ValidationTranslator::new()));
    match config.engine {
        DatabaseEngine::SqlServer => {
            chain.push(Box::new(SqlServerConstraintTranslator::new()));
            chain.push(Box::new(SqlServerUniqueIndexTranslator::new(metadata)));
        }
        DatabaseEngine::Postgres => {
            chain.push(Box::new(PostgresConstraintTranslator::new()));
            chain.push(Box::new(PostgresUniqueConstraintTranslator::new(metadata)));
        }
    }
    chain
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies.
/// Repeated initialization is a no-op.
pub fn init_logging(config: &DatagateConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or("info"))
    });
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
