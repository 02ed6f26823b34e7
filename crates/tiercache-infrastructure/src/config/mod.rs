//! Configuration management
//!
//! Defaults, then a TOML file, then `TIERCACHE__`-prefixed environment
//! variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, ConfigSource};
pub use types::{AppConfig, CacheConfig, LoggingConfig};
