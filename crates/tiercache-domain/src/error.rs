//! Error handling types

use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tiercache
#[derive(Error, Debug)]
pub enum Error {
    /// Unsupported backend scheme or invalid construction option
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Remote service unreachable while constructing a backend
    #[error("Backend unavailable: {message}")]
    BackendUnavailable {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Runtime failure reported by a remote backend
    #[error("Backend error: {message}")]
    Backend {
        /// Description of the backend error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Value encode/decode failure
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Snapshot open/write/decode failure
    ///
    /// Never returned from cache operations; the store logs it and keeps
    /// running in memory.
    #[error("Persistence I/O error: {message}")]
    PersistenceIo {
        /// Description of the persistence error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed wildcard pattern
    #[error("Pattern match error: {message}")]
    PatternMatch {
        /// Description of the pattern error
        message: String,
    },

    /// Aggregated failures from a single expire call
    #[error("{0}")]
    Expire(ExpireErrors),

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Backend error creation methods
impl Error {
    /// Create a backend unavailable error with source
    pub fn backend_unavailable<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::BackendUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a runtime backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a runtime backend error with source
    pub fn backend_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Serialization and persistence error creation methods
impl Error {
    /// Create a serialization error with source
    pub fn serialization<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a persistence error with source
    pub fn persistence<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::PersistenceIo {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a pattern match error
    pub fn pattern_match<S: Into<String>>(message: S) -> Self {
        Self::PatternMatch {
            message: message.into(),
        }
    }

    /// Whether this error stems from a bad cache configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Failures collected while processing one expire call
///
/// Renders as the individual messages joined by `", "`.
#[derive(Debug, Default)]
pub struct ExpireErrors(Vec<Error>);

impl ExpireErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure
    pub fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    /// Number of collected failures
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the collected failures
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.0.iter()
    }

    /// Collapse into a single error, `None` when nothing failed
    pub fn into_error(self) -> Option<Error> {
        if self.0.is_empty() {
            None
        } else {
            Some(Error::Expire(self))
        }
    }
}

impl fmt::Display for ExpireErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ExpireErrors {}
