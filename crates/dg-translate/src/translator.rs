// SPDX-License-Identifier: MIT OR Apache-2.0

//! The translator capability and the first-match dispatcher.

use crate::failure::RawFailure;
use dg_problem::ProblemDetails;
use std::fmt;
use tracing::debug;

/// One recognizer owning a single failure category.
///
/// `attempt` returns `Some` only when the translator recognizes the
/// failure as its own; every "not mine" condition (unknown message
/// shape, unresolvable index metadata) is `None`, never an error.
/// Translators are stateless and reentrant; a chain may be shared across
/// concurrent requests.
pub trait FailureTranslator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Try to translate `failure` into a client-facing problem.
    fn attempt(&self, failure: &RawFailure) -> Option<ProblemDetails>;
}

/// Ordered first-match dispatcher over [`FailureTranslator`]s.
///
/// More specific recognizers go first; the registered translators occupy
/// disjoint message shapes, so ordering only decides precedence if shapes
/// ever overlap.
#[derive(Default)]
pub struct TranslatorChain {
    translators: Vec<Box<dyn FailureTranslator>>,
}

impl TranslatorChain {
    /// Build a chain from an ordered translator list.
    #[must_use]
    pub fn new(translators: Vec<Box<dyn FailureTranslator>>) -> Self {
        Self { translators }
    }

    /// Append a translator at the end of the chain.
    pub fn push(&mut self, translator: Box<dyn FailureTranslator>) {
        self.translators.push(translator);
    }

    /// Number of registered translators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translators.len()
    }

    /// Returns `true` when no translators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// Offer `failure` to each translator in order and return the first
    /// match. `None` means "untranslated": the caller owns the generic
    /// fallback response.
    #[must_use]
    pub fn translate(&self, failure: &RawFailure) -> Option<ProblemDetails> {
        for translator in &self.translators {
            if let Some(problem) = translator.attempt(failure) {
                debug!(
                    translator = translator.name(),
                    status = problem.status,
                    problem_type = %problem.problem_type,
                    operation = ?failure.operation(),
                    "translated failure"
                );
                return Some(problem);
            }
        }
        debug!("no translator matched the failure");
        None
    }
}

impl fmt::Debug for TranslatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.translators.iter().map(|t| t.name()).collect();
        f.debug_struct("TranslatorChain")
            .field("translators", &names)
            .finish()
    }
}
