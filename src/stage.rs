//! Text rewriting stages used by the romaji pre- and post-processing pipelines.
//!
//! A stage is a pure `Cow<str> -> Cow<str>` transform. Stages never share
//! state; the only thing one stage passes to the next is the text itself.
//! Unchanged text stays borrowed so that pipelines over already-clean input
//! never allocate.

pub mod lower_case;
pub mod phonetic;

use std::borrow::Cow;
use thiserror::Error;

/// Raised while building a stage, never while applying one.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("rule `{0}` has an invalid pattern: {1}")]
    Compile(&'static str, #[source] regex::Error),
}

/// A single rewriting step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` guarantees `apply` would not change
    /// the text, so the stage can be skipped.
    fn needs_apply(&self, text: &str) -> bool;

    /// Rewrite `text`. Must return the input untouched (still borrowed, if it
    /// was) when there is nothing to rewrite.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
