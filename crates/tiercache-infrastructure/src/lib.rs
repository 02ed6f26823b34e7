//! # Infrastructure Layer
//!
//! Cross-cutting concerns around the cache backends.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Connection strings, backend factory, typed cache wrapper |
//! | [`config`] | TOML + environment configuration |
//! | [`constants`] | Configuration constants |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use cache::{CacheFactory, SharedCache};
pub use error_ext::ErrorContext;
