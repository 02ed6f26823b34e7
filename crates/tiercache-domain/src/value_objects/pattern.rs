//! Expire patterns

use crate::constants::WILDCARD;
use crate::error::{Error, Result};

/// Argument of an expire call
///
/// Only [`WILDCARD`] selects glob matching; `?` and `[...]` are plain
/// characters of an exact key unless a `*` is also present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    /// Delete exactly this key
    Exact(String),
    /// Delete keys matching this glob
    Glob(String),
}

impl KeyPattern {
    /// Classify a raw pattern
    pub fn parse(pattern: &str) -> Self {
        if pattern.contains(WILDCARD) {
            Self::Glob(pattern.to_string())
        } else {
            Self::Exact(pattern.to_string())
        }
    }

    /// The raw pattern text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(s) | Self::Glob(s) => s,
        }
    }

    /// Whether this is a glob pattern
    pub fn is_glob(&self) -> bool {
        matches!(self, Self::Glob(_))
    }
}

/// Compiled glob pattern for matching stored keys
///
/// `*` also matches `:` and `/`, so `user:*` covers nested keys such as
/// `user:1:profile`. Patterns follow the Redis `KEYS` dialect: a run of `*`
/// is a single wildcard and `[^...]` negates a class.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    pattern: glob::Pattern,
}

impl GlobMatcher {
    /// Compile a glob
    ///
    /// # Errors
    /// [`Error::PatternMatch`] when the glob is malformed (e.g. an unclosed `[`)
    pub fn new(pattern: &str) -> Result<Self> {
        glob::Pattern::new(&normalize(pattern))
            .map(|pattern| Self { pattern })
            .map_err(|e| Error::pattern_match(format!("{pattern}: {e}")))
    }

    /// Check a key against the glob
    pub fn matches(&self, key: &str) -> bool {
        self.pattern.matches(key)
    }
}

/// Rewrite a Redis-style glob into the `glob` crate's dialect
///
/// `glob` only accepts `**` as a whole path component and negates classes
/// with `[!`.
fn normalize(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if out.ends_with('*') => {}
            '[' if chars.peek() == Some(&'^') => {
                chars.next();
                out.push_str("[!");
            }
            _ => out.push(c),
        }
    }
    out
}
