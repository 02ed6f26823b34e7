//! Connection-string parsing tests

use std::path::PathBuf;
use std::time::Duration;
use tiercache_domain::error::Error;
use tiercache_infrastructure::cache::parse_connection_string;

#[test]
fn test_empty_string_selects_null_cache() {
    assert_eq!(parse_connection_string("").unwrap().backend, "null");
    assert_eq!(parse_connection_string("   ").unwrap().backend, "null");
}

#[test]
fn test_memory_without_options() {
    let config = parse_connection_string("memory://").unwrap();

    assert_eq!(config.backend, "memory");
    assert_eq!(config.sweep_interval, Duration::ZERO);
    assert!(config.persist_path.is_none());
    assert!(config.uri.is_none());
}

#[test]
fn test_memory_with_options() {
    let config = parse_connection_string("memory://?ttl=60&persist=/tmp/cache.dat").unwrap();

    assert_eq!(config.sweep_interval, Duration::from_secs(60));
    assert_eq!(config.persist_path, Some(PathBuf::from("/tmp/cache.dat")));
}

#[test]
fn test_empty_persist_disables_persistence() {
    let config = parse_connection_string("memory://?persist=").unwrap();
    assert!(config.persist_path.is_none());
}

#[test]
fn test_scheme_is_case_insensitive() {
    assert_eq!(parse_connection_string("MEMORY://").unwrap().backend, "memory");
}

#[test]
fn test_invalid_ttl_option() {
    for raw in ["memory://?ttl=abc", "memory://?ttl=-5", "memory://?ttl=1.5"] {
        let err = parse_connection_string(raw).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "{raw}: {err}");
    }
}

#[test]
fn test_unknown_scheme_lists_backends() {
    let err = parse_connection_string("ftp://example.com").unwrap_err();

    assert!(err.is_config());
    let message = err.to_string();
    assert!(message.contains("ftp"));
    assert!(message.contains("memory"));
}

#[test]
fn test_unparsable_string_is_config_error() {
    let err = parse_connection_string("definitely not a url").unwrap_err();
    assert!(err.is_config());
}

#[cfg(feature = "cache-redis")]
mod redis_schemes {
    use super::*;

    #[test]
    fn test_redis_keeps_url() {
        let config = parse_connection_string("redis://:secret@cache.internal:6379/2").unwrap();

        assert_eq!(config.backend, "redis");
        assert_eq!(
            config.uri.as_deref(),
            Some("redis://:secret@cache.internal:6379/2")
        );
    }

    #[test]
    fn test_tiered_scheme_derives_remote_url() {
        let config =
            parse_connection_string("mem+redis://cache.internal:6379/0?ttl=30&persist=/tmp/c.dat")
                .unwrap();

        assert_eq!(config.backend, "mem+redis");
        assert_eq!(config.sweep_interval, Duration::from_secs(30));
        assert_eq!(config.persist_path, Some(PathBuf::from("/tmp/c.dat")));
        assert_eq!(
            config.uri.as_deref(),
            Some("redis://cache.internal:6379/0")
        );
    }

    #[test]
    fn test_tiered_tls_scheme() {
        let config = parse_connection_string("mem+rediss://cache.internal:6380/1").unwrap();

        assert_eq!(config.backend, "mem+rediss");
        assert_eq!(
            config.uri.as_deref(),
            Some("rediss://cache.internal:6380/1")
        );
    }

    #[test]
    fn test_unrelated_query_pairs_reach_remote() {
        let config =
            parse_connection_string("mem+redis://cache.internal:6379/0?ttl=5&protocol=resp3")
                .unwrap();

        assert_eq!(
            config.uri.as_deref(),
            Some("redis://cache.internal:6379/0?protocol=resp3")
        );
    }
}
