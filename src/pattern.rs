//! Pattern compiler: turns a [`KeyList`] into one alternation matcher.
//!
//! The `regex` crate resolves alternations leftmost-first: at the leftmost
//! matching position the earliest listed alternative wins. Keys are therefore
//! listed longest first, so `n'` wins over its prefix `n`. Ties are broken by
//! codepoint order to keep the pattern deterministic.
use crate::dictionary::KeyList;
use regex::Regex;
use thiserror::Error;

/// Separator between escaped keys.
const ALTERNATION: &str = "|";

#[derive(Debug, Error)]
pub enum PatternCompileError {
    #[error("cannot build a pattern from an empty key list")]
    Empty,

    #[error("invalid conversion pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Immutable matcher for every key of one conversion direction.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    key_count: usize,
}

impl CompiledPattern {
    #[inline(always)]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[inline(always)]
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Escape, order and join `keys`, then compile the alternation.
pub fn compile(keys: &KeyList) -> Result<CompiledPattern, PatternCompileError> {
    if keys.is_empty() {
        return Err(PatternCompileError::Empty);
    }

    let mut ordered: Vec<&str> = keys.as_slice().to_vec();
    ordered.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let pattern = ordered
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join(ALTERNATION);

    Ok(CompiledPattern {
        regex: Regex::new(&pattern)?,
        key_count: ordered.len(),
    })
}
