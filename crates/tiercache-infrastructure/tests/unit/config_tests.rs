//! Configuration loader tests

use tempfile::TempDir;
use tiercache_infrastructure::config::{AppConfig, ConfigLoader, ConfigSource};
use tiercache_infrastructure::constants::{DEFAULT_CACHE_URL, DEFAULT_LOG_LEVEL};

fn isolated_loader(dir: &TempDir, contents: &str) -> ConfigLoader {
    let path = dir.path().join("tiercache.toml");
    std::fs::write(&path, contents).unwrap();
    ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("TIERCACHE_TEST_UNSET")
}

#[test]
fn test_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("TIERCACHE_TEST_UNSET")
        .load()
        .unwrap();

    assert_eq!(config.cache.url, DEFAULT_CACHE_URL);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader(
        &dir,
        r#"
[cache]
url = "memory://?ttl=30"
default_ttl_secs = 300
namespace = "svc"

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = loader.load().unwrap();

    assert_eq!(config.cache.url, "memory://?ttl=30");
    assert_eq!(config.cache.default_ttl_secs, 300);
    assert_eq!(config.cache.namespace.as_deref(), Some("svc"));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader(&dir, "[logging]\nlevel = \"warn\"\n");

    let config = loader.load().unwrap();

    assert_eq!(config.cache.url, DEFAULT_CACHE_URL);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_cache_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader(&dir, "[cache]\nurl = \"gopher://host\"\n");

    let err = loader.load().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader(&dir, "[logging]\nlevel = \"loud\"\n");

    assert!(loader.load().unwrap_err().is_config());
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader(&dir, "[cache\nurl = ");

    assert!(loader.load().unwrap_err().is_config());
}

#[test]
fn test_source_reports_explicit_path() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.toml");
    let (config, source) = ConfigLoader::new()
        .with_config_path(&absent)
        .with_env_prefix("TIERCACHE_TEST_UNSET")
        .load_with_source()
        .unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(
        source,
        Some(ConfigSource {
            path: absent,
            found: false
        })
    );

    let (_, source) = isolated_loader(&dir, "[logging]\nlevel = \"warn\"\n")
        .load_with_source()
        .unwrap();
    assert!(source.unwrap().found);
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.cache.url = String::new();
    config.cache.default_ttl_secs = 90;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("TIERCACHE_TEST_UNSET");
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
#[ignore = "mutates process environment"]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiercache.toml");
    std::fs::write(&path, "[cache]\nurl = \"memory://\"\n").unwrap();

    // SAFETY: ignored by default, run single-threaded on demand
    unsafe { std::env::set_var("TIERCACHE_ENVTEST__CACHE__URL", "") };
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("TIERCACHE_ENVTEST")
        .load()
        .unwrap();
    unsafe { std::env::remove_var("TIERCACHE_ENVTEST__CACHE__URL") };

    assert_eq!(config.cache.url, "");
}
