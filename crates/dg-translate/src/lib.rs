// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod failure;
pub mod naming;
pub mod translator;
pub mod validation;
pub mod violation;
pub mod wording;

pub use failure::{FailureKind, RawFailure, WriteOperation};
pub use translator::{FailureTranslator, TranslatorChain};
pub use validation::ValidationTranslator;
pub use violation::{ParsedViolation, ViolationKind};
