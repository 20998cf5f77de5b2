// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod constraint;
mod parse;
mod unique;

pub use constraint::PostgresConstraintTranslator;
pub use unique::PostgresUniqueConstraintTranslator;
