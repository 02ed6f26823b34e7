//! Command line interface
//!
//! Each invocation builds its own cache from the configured connection
//! string, runs one command and prints the result as JSON. Use a
//! `persist` option or a Redis backend for values to outlive the process.

use crate::infrastructure::config::{AppConfig, ConfigLoader, ConfigSource};
use crate::infrastructure::{CacheFactory, SharedCache};
use crate::providers::list_cache_backends;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;
use tiercache_domain::error::Result;

/// Command line interface for tiercache
#[derive(Parser, Debug)]
#[command(name = "tiercache")]
#[command(about = "Inspect and modify a tiercache backend")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Connection string, overrides `cache.url` from the configuration
    #[arg(short, long)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Cache operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a value
    Get {
        /// Cache key
        key: String,
    },
    /// Store a JSON value
    Set {
        /// Cache key
        key: String,
        /// Value as JSON text
        value: String,
        /// Time-to-live in seconds; zero or less never expires
        #[arg(long, allow_negative_numbers = true)]
        ttl: Option<i64>,
    },
    /// Remove a key, or every key matching a `*` pattern
    Expire {
        /// Key or glob pattern
        pattern: String,
    },
    /// List available backends
    Backends,
}

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// JSON document to print
    pub body: Value,
    /// Whether the command fully succeeded
    pub success: bool,
}

impl CommandOutput {
    fn ok(body: Value) -> Self {
        Self {
            body,
            success: true,
        }
    }
}

impl Cli {
    /// Load configuration, applying the `--url` override
    ///
    /// The returned source is left for the caller to log once logging is
    /// initialized from the loaded configuration.
    pub fn load_config(&self) -> Result<(AppConfig, Option<ConfigSource>)> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let (mut config, source) = loader.load_with_source()?;

        if let Some(url) = &self.url {
            crate::infrastructure::cache::parse_connection_string(url)?;
            config.cache.url.clone_from(url);
        }
        Ok((config, source))
    }
}

/// Run one command against the configured cache
pub async fn execute(command: &Command, config: &AppConfig) -> Result<CommandOutput> {
    match command {
        Command::Get { key } => {
            let cache = open_cache(config).await?;
            let value: Option<Value> = cache.get(key).await?;
            Ok(CommandOutput::ok(json!({
                "key": key,
                "found": value.is_some(),
                "value": value,
            })))
        }
        Command::Set { key, value, ttl } => {
            let parsed: Value = serde_json::from_str(value)?;
            let ttl_secs = ttl.unwrap_or(config.cache.default_ttl_secs);
            let cache = open_cache(config).await?;
            cache.set_with_ttl(key, &parsed, ttl_secs).await?;
            Ok(CommandOutput::ok(json!({ "key": key, "ttl_secs": ttl_secs })))
        }
        Command::Expire { pattern } => {
            let cache = open_cache(config).await?;
            let outcome = cache.expire(pattern).await;
            let error = outcome.error.as_ref().map(ToString::to_string);
            if let Some(e) = &error {
                tracing::warn!(pattern = %pattern, "Expire reported errors: {}", e);
            }
            Ok(CommandOutput {
                success: error.is_none(),
                body: json!({ "removed": outcome.removed, "error": error }),
            })
        }
        Command::Backends => {
            let backends: Vec<Value> = list_cache_backends()
                .into_iter()
                .map(|(name, description)| json!({ "name": name, "description": description }))
                .collect();
            Ok(CommandOutput::ok(Value::Array(backends)))
        }
    }
}

async fn open_cache(config: &AppConfig) -> Result<SharedCache> {
    let engine = CacheFactory::connect(&config.cache.url).await?;
    let mut cache = SharedCache::new(engine).with_default_ttl(config.cache.default_ttl_secs);
    if let Some(namespace) = &config.cache.namespace {
        cache.set_namespace(namespace.as_str());
    }
    Ok(cache)
}
