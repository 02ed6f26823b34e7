//! Connection-string parsing
//!
//! | Connection string | Backend |
//! |-------------------|---------|
//! | `""` | no-op cache |
//! | `memory://?ttl=60&persist=/var/cache/app.dat` | in-process store |
//! | `redis://:pw@host:6379/0` | Redis only |
//! | `mem+redis://host:6379/0?ttl=60` | in-process store in front of Redis |
//!
//! `ttl` is the sweep interval in whole seconds and `persist` the snapshot
//! file of the in-process store. Both are removed from the URL handed to
//! Redis.

use crate::error_ext::ErrorContext;
use std::time::Duration;
use tiercache_domain::constants::{
    NULL_ENGINE_NAME, OPTION_PERSIST, OPTION_SWEEP_INTERVAL, REDIS_SCHEME, REDIS_TLS_SCHEME,
    TIERED_SCHEME, TIERED_SCHEME_SEPARATOR, TIERED_TLS_SCHEME,
};
use tiercache_domain::error::{Error, Result};
use tiercache_providers::{CacheBackendConfig, list_cache_backends};
use url::Url;

/// Parse a connection string into a backend configuration
///
/// # Errors
/// [`Error::Config`] when the string is not a URL, names no registered
/// backend, or carries an invalid `ttl` option.
pub fn parse_connection_string(connection_string: &str) -> Result<CacheBackendConfig> {
    let trimmed = connection_string.trim();
    if trimmed.is_empty() {
        return Ok(CacheBackendConfig::new(NULL_ENGINE_NAME));
    }

    let url = Url::parse(trimmed).config_context(format!(
        "Invalid cache connection string. Available backends: {:?}",
        backend_names()
    ))?;

    let scheme = url.scheme().to_string();
    if !backend_names().contains(&scheme.as_str()) {
        return Err(Error::config(format!(
            "invalid cache backend '{}'. Available backends: {:?}",
            scheme,
            backend_names()
        )));
    }

    let mut config = CacheBackendConfig::new(scheme.as_str());
    for (name, value) in url.query_pairs() {
        match &*name {
            OPTION_SWEEP_INTERVAL => {
                config = config.with_sweep_interval(parse_sweep_interval(&value)?);
            }
            OPTION_PERSIST if !value.is_empty() => {
                config = config.with_persist_path(value.into_owned());
            }
            _ => {}
        }
    }

    if let Some(remote) = remote_uri(&url)? {
        config = config.with_uri(remote);
    }
    Ok(config)
}

fn backend_names() -> Vec<&'static str> {
    list_cache_backends().into_iter().map(|(name, _)| name).collect()
}

fn parse_sweep_interval(value: &str) -> Result<Duration> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .config_context(format!(
            "Invalid '{OPTION_SWEEP_INTERVAL}' option '{value}', expected whole non-negative seconds"
        ))
}

/// URL for the remote tier, `None` when the scheme has no remote tier
fn remote_uri(url: &Url) -> Result<Option<String>> {
    let scheme = url.scheme();
    if ![REDIS_SCHEME, REDIS_TLS_SCHEME, TIERED_SCHEME, TIERED_TLS_SCHEME].contains(&scheme) {
        return Ok(None);
    }

    let mut remote = url.clone();
    if let Some((_, remote_scheme)) = scheme.split_once(TIERED_SCHEME_SEPARATOR) {
        remote.set_scheme(remote_scheme).map_err(|()| {
            Error::config(format!("Cannot derive remote URL from scheme '{scheme}'"))
        })?;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != OPTION_SWEEP_INTERVAL && name != OPTION_PERSIST)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        remote.set_query(None);
    } else {
        remote.query_pairs_mut().clear().extend_pairs(kept);
    }

    Ok(Some(remote.to_string()))
}
