//! Configuration loader
//!
//! Loads [`AppConfig`] from defaults, a TOML file and environment variables
//! using Figment.

use crate::cache::url::parse_connection_string;
use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tiercache_domain::error::Result;

/// Configuration file a load read, or tried to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// File path
    pub path: PathBuf,
    /// Whether the file existed
    pub found: bool,
}

impl ConfigSource {
    /// Report the source; call once a subscriber is installed
    pub fn log(&self) {
        log_config_loaded(&self.path, self.found);
    }
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default
    ///    location that exists)
    /// 3. Environment variables, e.g. `TIERCACHE__CACHE__URL`
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_source().map(|(config, _)| config)
    }

    /// Load configuration and report which file was consulted
    ///
    /// Nothing is logged here, so this can run before logging is set up.
    /// The source is `None` when no path was given and no default file exists.
    pub fn load_with_source(&self) -> Result<(AppConfig, Option<ConfigSource>)> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let source = match &self.config_path {
            Some(config_path) => Some(ConfigSource {
                path: config_path.clone(),
                found: config_path.exists(),
            }),
            None => Self::find_default_config_path().map(|path| ConfigSource { path, found: true }),
        };
        if let Some(source) = source.as_ref().filter(|s| s.found) {
            figment = figment.merge(Toml::file(&source.path));
        }

        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .map_err(Box::new)
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok((app_config, source))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_connection_string(&config.cache.url)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}
